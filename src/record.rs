//! Card records as read from CSV.

use crate::card::CreditCard;
use crate::money::Money;
use serde::Deserialize;

/// Raw card row: `name,bank,account_no,limit`.
///
/// The balance is never imported; every card starts at zero.
#[derive(Debug, Deserialize)]
pub struct CardRecord {
    /// Cardholder name
    #[serde(rename = "name")]
    pub customer_name: String,

    /// Issuing bank
    pub bank: String,

    /// Account number, grouping spaces allowed
    pub account_no: String,

    /// Credit limit
    pub limit: Money,
}

impl CardRecord {
    /// Builds the card described by this row.
    pub fn into_card(self) -> CreditCard {
        CreditCard::new(self.customer_name, self.bank, self.account_no, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_one(csv: &str) -> csv::Result<CardRecord> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        reader
            .deserialize::<CardRecord>()
            .next()
            .expect("one row")
    }

    #[test]
    fn test_deserialize_card_row() {
        let record = read_one("name,bank,account_no,limit\nShahid,HBL,173 069 126 333 009,8000\n")
            .unwrap();

        assert_eq!(record.customer_name, "Shahid");
        assert_eq!(record.bank, "HBL");
        assert_eq!(record.account_no, "173 069 126 333 009");
        assert_eq!(record.limit.to_string(), "8000.00");
    }

    #[test]
    fn test_into_card_starts_with_zero_balance() {
        let card = read_one("name,bank,account_no,limit\nUmer, Faysal Bank , 887 223 ,12000.5\n")
            .unwrap()
            .into_card();

        assert_eq!(card.bank(), "Faysal Bank");
        assert_eq!(card.account_no(), "887 223");
        assert_eq!(card.limit().to_string(), "12000.50");
        assert_eq!(card.balance(), Money::ZERO);
    }

    #[test]
    fn test_rejects_non_numeric_limit() {
        assert!(read_one("name,bank,account_no,limit\nAli,HBL,1,plenty\n").is_err());
    }
}
