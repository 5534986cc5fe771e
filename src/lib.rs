//! # Card Ledger
//!
//! Credit card records and an ordered list that keeps them unique by
//! account number.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Uses 2 decimal places via `rust_decimal`
//! - **Sequence-style indexing**: Negative indices count from the end
//! - **Strict invariants**: A charge never pushes a balance over its limit;
//!   no two cards in a list share an account number
//! - **Errors, not flags**: Every rejected operation returns a [`CardError`]
//!   and leaves state unchanged
//!
//! ## Example
//!
//! ```
//! use card_ledger::{CreditCard, CreditCardList, Money};
//!
//! let mut cards = CreditCardList::new();
//! cards.append(CreditCard::new("Ali", "Meezan Bank", "323 989 323", Money::whole(4000))).unwrap();
//! cards.get_mut(-1).unwrap().charge("150").unwrap();
//! assert_eq!(cards.to_string(), "Name: Ali, Bank: Meezan Bank, Balance: 150.00\n");
//! ```

pub mod account_no;
pub mod card;
pub mod error;
pub mod list;
pub mod money;
pub mod record;

pub use card::CreditCard;
pub use error::{CardError, Result};
pub use list::CreditCardList;
pub use money::{IntoAmount, Money};
pub use record::CardRecord;
