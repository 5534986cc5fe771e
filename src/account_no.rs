//! Account number normalization.
//!
//! Account numbers are stored as typed (`"323 989 323 782 665"`), but
//! compared with all whitespace removed.

use crate::error::{CardError, Result};

/// Strips all whitespace from an account number.
pub fn compact(account_no: &str) -> String {
    account_no.split_whitespace().collect()
}

/// Normalizes a lookup key and checks that it is a plain digit string.
///
/// Returns the compacted key, or [`CardError::InvalidInput`] if anything
/// other than digits remains after whitespace removal.
pub fn parse_key(account_no: &str) -> Result<String> {
    let key = compact(account_no);
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CardError::invalid_input(format!(
            "account number can contain digits only, got {:?}",
            account_no
        )));
    }
    Ok(key)
}

/// Returns `true` if two account numbers are equal once whitespace is ignored.
pub fn same(a: &str, b: &str) -> bool {
    fn significant(s: &str) -> impl Iterator<Item = char> + '_ {
        s.chars().filter(|c| !c.is_whitespace())
    }

    significant(a).eq(significant(b))
}
