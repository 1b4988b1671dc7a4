//! Prints brand, checksum and formatting for a fixed list of sample numbers.
//!
//! Run with: `cargo run --example card_info [CARD_NUMBER]`

use std::env;

use card_identifier::get_card_info;

const SAMPLE_CARDS: [&str; 10] = [
    "4532015112830366",
    "5425233010103442",
    "378282246310005",
    "6011111111111117",
    "30569309025904",
    "3530111333300000",
    "5078601721051171",
    "36148906777300",
    "201412345678900",
    "6062820000000000",
];

fn main() {
    let card = env::args()
        .nth(1)
        .unwrap_or_else(|| SAMPLE_CARDS[0].to_string());
    let info = get_card_info(&card);

    println!("{}", "=".repeat(70));
    println!("  Card identification");
    println!("{}", "=".repeat(70));
    println!("  Input:      {}", card);
    println!("  Formatted:  {}", info.card_number());
    println!("  Brand:      {}", info.brand());
    println!(
        "  Status:     {}",
        if info.is_valid() { "valid" } else { "invalid" }
    );
    println!("{}", "-".repeat(70));

    println!("\nSample numbers:\n");
    for (i, number) in SAMPLE_CARDS.iter().enumerate() {
        let info = get_card_info(number);
        println!(
            "  {:02}. {:<17} -> {:<10} {}",
            i + 1,
            number,
            info.brand(),
            if info.is_valid() { "valid" } else { "invalid" }
        );
    }
    println!();
}
