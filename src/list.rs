//! Ordered, duplicate-free list of credit cards.
//!
//! Indices follow sequence conventions: negative values count back from the
//! end (`-1` is the last card). Account numbers are unique within a list,
//! compared with grouping whitespace ignored.

use crate::account_no;
use crate::card::CreditCard;
use crate::error::{CardError, Result};
use crate::record::CardRecord;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::fmt;
use std::io::Read;
use std::ops::{Bound, RangeBounds};

/// An ordered collection of [`CreditCard`]s.
///
/// # Invariants
///
/// - No two cards share an account number
/// - Order only changes through the list's own operations
///
/// Slices are independent copies; nothing outside the list can alias its
/// storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditCardList {
    cards: Vec<CreditCard>,
}

/// Applies the negative-index rule without any bounds check.
fn adjust(index: isize, len: usize) -> isize {
    if index < 0 {
        index.saturating_add(len as isize)
    } else {
        index
    }
}

impl CreditCardList {
    /// Creates an empty list.
    pub fn new() -> Self {
        CreditCardList { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CreditCard> {
        self.cards.iter()
    }

    /// Resolves `index` to a position of an existing card.
    fn resolve_index(&self, index: isize) -> Result<usize> {
        let len = self.cards.len();
        let adjusted = adjust(index, len);
        if adjusted < 0 || adjusted as usize >= len {
            return Err(CardError::IndexOutOfRange { index, len });
        }
        Ok(adjusted as usize)
    }

    /// Fails if a card other than the one at `skip` uses `account_no`.
    fn ensure_unique(&self, account_no: &str, skip: Option<usize>) -> Result<()> {
        let clash = self
            .cards
            .iter()
            .enumerate()
            .any(|(i, c)| Some(i) != skip && account_no::same(c.account_no(), account_no));

        if clash {
            warn!("Rejected duplicate account number {}", account_no);
            return Err(CardError::DuplicateKey {
                account_no: account_no.to_string(),
            });
        }
        Ok(())
    }

    /// Returns the card at `index`.
    pub fn get(&self, index: isize) -> Result<&CreditCard> {
        let pos = self.resolve_index(index)?;
        Ok(&self.cards[pos])
    }

    /// Returns the card at `index` for charging or paying in place.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut CreditCard> {
        let pos = self.resolve_index(index)?;
        Ok(&mut self.cards[pos])
    }

    /// Returns a new list holding copies of the cards in `range`.
    ///
    /// Bounds behave like sequence slicing: negative bounds count from the
    /// end, out-of-range bounds clamp, and an empty or inverted range yields
    /// an empty list.
    pub fn slice<R: RangeBounds<isize>>(&self, range: R) -> CreditCardList {
        let len = self.cards.len();
        let clamp = |i: isize| i.clamp(0, len as isize) as usize;

        let start = match range.start_bound() {
            Bound::Included(&s) => clamp(adjust(s, len)),
            Bound::Excluded(&s) => clamp(adjust(s, len).saturating_add(1)),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => clamp(adjust(e, len).saturating_add(1)),
            Bound::Excluded(&e) => clamp(adjust(e, len)),
            Bound::Unbounded => len,
        };

        if start >= end {
            return CreditCardList::new();
        }
        CreditCardList {
            cards: self.cards[start..end].to_vec(),
        }
    }

    /// Replaces the card at `index`, returning the card it displaced.
    ///
    /// The new card may reuse the displaced card's account number but no
    /// other card's.
    pub fn set(&mut self, index: isize, card: CreditCard) -> Result<CreditCard> {
        let pos = self.resolve_index(index)?;
        self.ensure_unique(card.account_no(), Some(pos))?;

        debug!("Replaced card at {} with account {}", pos, card.account_no());
        Ok(std::mem::replace(&mut self.cards[pos], card))
    }

    /// Adds a card at the end of the list.
    pub fn append(&mut self, card: CreditCard) -> Result<()> {
        self.ensure_unique(card.account_no(), None)?;

        debug!("Appended account {}", card.account_no());
        self.cards.push(card);
        Ok(())
    }

    /// Appends each card in order.
    ///
    /// Stops at the first card that fails validation; cards appended before
    /// it stay in the list.
    pub fn extend<I>(&mut self, cards: I) -> Result<()>
    where
        I: IntoIterator<Item = CreditCard>,
    {
        for card in cards {
            self.append(card)?;
        }
        Ok(())
    }

    /// Appends cards read from `name,bank,account_no,limit` CSV rows.
    ///
    /// Has the same partial-effect behavior as [`CreditCardList::extend`].
    /// A row that is not a card record fails with
    /// [`CardError::TypeMismatch`]. Returns the number of cards appended.
    pub fn extend_from_csv<R: Read>(&mut self, reader: R) -> Result<usize> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let mut appended = 0;

        for (row_idx, result) in csv_reader.deserialize::<CardRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!("Row {}: not a card record: {}", row_num, e);
                    return Err(CardError::TypeMismatch {
                        row: row_num,
                        message: e.to_string(),
                    });
                }
            };

            if let Err(e) = self.append(record.into_card()) {
                warn!("Row {}: {}", row_num, e);
                return Err(e);
            }
            appended += 1;
        }

        debug!("Imported {} cards", appended);
        Ok(appended)
    }

    /// Inserts a card before `index`, shifting later cards one place right.
    ///
    /// `index == len()` appends. Anything past that is out of range.
    pub fn insert(&mut self, index: isize, card: CreditCard) -> Result<()> {
        let len = self.cards.len();
        let adjusted = adjust(index, len);
        if adjusted < 0 || adjusted as usize > len {
            return Err(CardError::IndexOutOfRange { index, len });
        }
        self.ensure_unique(card.account_no(), None)?;

        let pos = adjusted as usize;
        debug!("Inserted account {} at {}", card.account_no(), pos);
        self.cards.insert(pos, card);
        Ok(())
    }

    /// Removes and returns the first card with the given account number.
    ///
    /// The key may contain grouping whitespace but must otherwise be digits.
    pub fn remove(&mut self, account_no: &str) -> Result<CreditCard> {
        let key = account_no::parse_key(account_no)?;

        let pos = self
            .cards
            .iter()
            .position(|c| account_no::same(c.account_no(), &key))
            .ok_or(CardError::KeyNotFound { account_no: key })?;

        let card = self.cards.remove(pos);
        debug!("Removed account {} from {}", card.account_no(), pos);
        Ok(card)
    }

    /// Deletes the card at `index`; the rest keep their relative order.
    pub fn delete(&mut self, index: isize) -> Result<()> {
        self.pop_at(index).map(|_| ())
    }

    /// Removes and returns the last card.
    pub fn pop(&mut self) -> Result<CreditCard> {
        self.pop_at(-1)
    }

    /// Removes and returns the card at `index`.
    pub fn pop_at(&mut self, index: isize) -> Result<CreditCard> {
        let pos = self.resolve_index(index)?;
        let card = self.cards.remove(pos);
        debug!("Deleted account {} at {}", card.account_no(), pos);
        Ok(card)
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the position of the first card with `account_no` in `[start, end)`.
    ///
    /// A negative `start` counts from the end and clamps to 0 when it would
    /// still be negative. `end` defaults to `len()`, follows the normal
    /// negative-index rule and clamps to `len()`. An empty range is reported
    /// as [`CardError::KeyNotFound`].
    ///
    /// The key is not format-checked, so cards stored with non-digit
    /// account numbers can still be found; grouping whitespace is ignored.
    pub fn find_index(&self, account_no: &str, start: isize, end: Option<isize>) -> Result<usize> {
        let not_found = || CardError::KeyNotFound {
            account_no: account_no.to_string(),
        };
        let len = self.cards.len();

        let start = adjust(start, len).max(0) as usize;
        let end = match end {
            None => len,
            Some(e) => {
                let adjusted = adjust(e, len);
                if adjusted < 0 {
                    return Err(CardError::IndexOutOfRange { index: e, len });
                }
                (adjusted as usize).min(len)
            }
        };

        if start >= end {
            return Err(not_found());
        }

        self.cards[start..end]
            .iter()
            .position(|c| account_no::same(c.account_no(), account_no))
            .map(|offset| start + offset)
            .ok_or_else(not_found)
    }
}

impl fmt::Display for CreditCardList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CreditCardList {
    type Item = &'a CreditCard;
    type IntoIter = std::slice::Iter<'a, CreditCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for CreditCardList {
    type Item = CreditCard;
    type IntoIter = std::vec::IntoIter<CreditCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
