//! Credit card model and operations.
//!
//! Maintains the invariant: a charge never leaves `balance > limit`.

use crate::error::{CardError, Result};
use crate::money::{IntoAmount, Money};
use log::debug;
use std::fmt;

/// A single credit card entry.
///
/// All fields are read-only from outside; `balance` changes only through
/// [`CreditCard::charge`] and [`CreditCard::make_payment`].
///
/// # Negative Balance
///
/// Payments are applied without a floor, so paying more than is owed
/// leaves a negative balance (a credit on the card). Charges are still
/// checked against `limit` from that negative starting point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCard {
    customer_name: String,
    bank: String,
    account_no: String,
    limit: Money,
    balance: Money,
}

impl CreditCard {
    /// Creates a new card with a zero balance.
    ///
    /// The account number is stored as given and is not validated here.
    pub fn new(
        customer_name: impl Into<String>,
        bank: impl Into<String>,
        account_no: impl Into<String>,
        limit: Money,
    ) -> Self {
        CreditCard {
            customer_name: customer_name.into(),
            bank: bank.into(),
            account_no: account_no.into(),
            limit,
            balance: Money::ZERO,
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn bank(&self) -> &str {
        &self.bank
    }

    /// The account number exactly as it was supplied, grouping spaces included.
    pub fn account_no(&self) -> &str {
        &self.account_no
    }

    pub fn limit(&self) -> Money {
        self.limit
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Adds a charge to the balance.
    ///
    /// Fails with [`CardError::InvalidInput`] if the amount is not numeric,
    /// finer than a cent or not strictly positive, and with
    /// [`CardError::LimitExceeded`] if the new balance would be above the
    /// limit. The balance is untouched on every failure.
    pub fn charge(&mut self, amount: impl IntoAmount) -> Result<()> {
        let amount = amount.into_amount()?;
        if !amount.is_positive() {
            return Err(CardError::invalid_input(format!(
                "charge amount must be greater than zero, got {}",
                amount
            )));
        }

        if self.balance + amount > self.limit {
            debug!(
                "Rejected charge of {} on account {}: balance {}, limit {}",
                amount, self.account_no, self.balance, self.limit
            );
            return Err(CardError::LimitExceeded {
                requested: amount,
                available: self.limit - self.balance,
            });
        }

        self.balance += amount;
        debug!("Charged {} to account {}", amount, self.account_no);
        Ok(())
    }

    /// Subtracts a payment from the balance.
    ///
    /// Only fails with [`CardError::InvalidInput`] if the amount is not numeric
    /// or is finer than a cent.
    pub fn make_payment(&mut self, amount: impl IntoAmount) -> Result<()> {
        let amount = amount.into_amount()?;
        self.balance -= amount;
        debug!("Applied payment of {} to account {}", amount, self.account_no);
        Ok(())
    }
}

impl fmt::Display for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Bank: {}, Balance: {}",
            self.customer_name, self.bank, self.balance
        )
    }
}
