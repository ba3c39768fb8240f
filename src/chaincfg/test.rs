#[cfg(test)]
mod chaincfg {
    use crate::chaincfg::{NetworkType, NetworkTypeError};

    #[test]
    fn test_network_type_strings() {
        struct Test<'a> {
            name: &'a str,
            network: NetworkType,
            network_in_string: &'a str,
            suffix: &'a str,
        }

        let tests = vec![
            Test {
                name: "mainnet",
                network: NetworkType::Mainnet,
                network_in_string: "mainnet",
                suffix: "COIN",
            },
            Test {
                name: "testnet",
                network: NetworkType::Testnet,
                network_in_string: "testnet",
                suffix: "TCOIN",
            },
            Test {
                name: "simnet",
                network: NetworkType::Simnet,
                network_in_string: "simnet",
                suffix: "SCOIN",
            },
            Test {
                name: "devnet",
                network: NetworkType::Devnet,
                network_in_string: "devnet",
                suffix: "DCOIN",
            },
        ];

        for test in tests {
            if test.network.to_string() != test.network_in_string {
                panic!(
                    "{}: network formatted as {} does not match expected {}",
                    test.name, test.network, test.network_in_string
                )
            }

            let parsed = match test.network_in_string.parse::<NetworkType>() {
                Ok(network) => network,
                Err(e) => panic!("{}: parsing network name failed with error: {}", test.name, e),
            };

            if parsed != test.network {
                panic!(
                    "{}: parsed network {:?} does not match expected {:?}",
                    test.name, parsed, test.network
                )
            }

            if test.network.currency_suffix() != test.suffix {
                panic!(
                    "{}: currency suffix {} does not match expected {}",
                    test.name,
                    test.network.currency_suffix(),
                    test.suffix
                )
            }
        }
    }

    #[test]
    fn test_unknown_network() {
        match "moonnet".parse::<NetworkType>() {
            Ok(network) => panic!("unknown network name parsed as {:?}", network),
            Err(e) => {
                if e != NetworkTypeError::UnknownNetwork("moonnet".to_string()) {
                    panic!("unknown network name failed with unexpected error: {}", e)
                }
            }
        }
    }

    #[test]
    fn test_network_type_marshalling() {
        let marshalled = serde_json::to_string(&NetworkType::Mainnet).unwrap();
        if marshalled != "\"mainnet\"" {
            panic!("network marshalled as {} instead of \"mainnet\"", marshalled)
        }

        let unmarshalled: NetworkType = serde_json::from_str("\"simnet\"").unwrap();
        if unmarshalled != NetworkType::Simnet {
            panic!("network unmarshalled as {:?} instead of Simnet", unmarshalled)
        }
    }
}
