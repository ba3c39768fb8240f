use coinutil::{amount, chaincfg::NetworkType};

use std::env;

fn main() {
    pretty_env_logger::init();

    let input = env::args().nth(1).unwrap_or_else(|| "0.5".to_string());

    let amount = match amount::try_coin_str_to_atoms(input.clone()) {
        Ok(Some(amount)) => amount,

        Ok(None) => panic!("no coin amount supplied"),

        Err(e) => panic!("could not parse coin amount {:?}: {}", input, e),
    };

    println!("{} atoms", amount.to_atoms());
    println!("{}", amount.format_with_suffix(&NetworkType::Mainnet));
    println!("{}", amount.to_coin_string_with_trailing_zeroes());

    let fee = amount
        .mul_f64(0.001)
        .expect("fee must stay within the transactable range");
    println!("0.1% fee: {} atoms", fee.to_atoms());
}
