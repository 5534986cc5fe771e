//! Card Ledger CLI
//!
//! Without arguments, walks through the list operations on a built-in set
//! of cards and prints the list after each step. With a CSV path
//! (`name,bank,account_no,limit`), imports the cards and prints them.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- cards.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use card_ledger::{CreditCard, CreditCardList, Money, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let stdout = io::stdout();
    let handle = stdout.lock();

    match args.get(1) {
        Some(input_path) => import(input_path, handle),
        None => walkthrough(handle),
    }
}

fn import<W: Write>(input_path: &str, mut out: W) -> Result<()> {
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut cards = CreditCardList::new();
    cards.extend_from_csv(reader)?;

    write!(out, "{}", cards)?;
    Ok(())
}

fn walkthrough<W: Write>(mut out: W) -> Result<()> {
    let mut cards = CreditCardList::new();
    cards.append(CreditCard::new(
        "Ali",
        "Meezan Bank",
        "323 989 323 782 665",
        Money::whole(4000),
    ))?;
    cards.extend(vec![
        CreditCard::new("Shahid", "HBL", "173 069 126 333 009", Money::whole(8000)),
        CreditCard::new("Umer", "Faysal Bank", "887 223 173 691 263", Money::whole(12000)),
        CreditCard::new("Umer", "Meezan Bank", "240 349 232 778 887", Money::whole(12000)),
    ])?;
    writeln!(out, "{}", cards)?;

    let sliced = cards.slice(1..9);
    writeln!(out, "sliced_list:\n{}", sliced)?;

    cards.remove("323 989 323 782 665")?;
    writeln!(out, "{}", cards)?;

    cards.insert(
        1,
        CreditCard::new("Zahid", "Bank Alfalah", "323 989 323 213 817", Money::whole(4000)),
    )?;
    writeln!(out, "{}", cards)?;

    cards.delete(2)?;
    writeln!(out, "{}", cards)?;

    cards.pop()?;
    writeln!(out, "{}", cards)?;

    cards.get_mut(-1)?.charge("250.75")?;
    write!(out, "{}", cards)?;

    Ok(())
}
