use std::convert::TryFrom;

use crate::error::Error;

/// Child slots per node, one per letter.
pub(crate) const ALPHABET: usize = 26;

/// Which characters a set accepts and how they map to child slots.
///
/// Fixed at construction for the set's whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseMode {
    /// `A`..=`Z` only.
    Upper,
    /// `a`..=`z` only.
    Lower,
    /// Both cases, folded to one slot per letter.
    Insensitive,
}

impl Default for CaseMode {
    fn default() -> Self {
        CaseMode::Upper
    }
}

impl TryFrom<u8> for CaseMode {
    type Error = Error;

    /// The raw encoding: 0 uppercase, 1 lowercase, 2 case-insensitive.
    fn try_from(raw: u8) -> Result<Self, Error> {
        match raw {
            0 => Ok(CaseMode::Upper),
            1 => Ok(CaseMode::Lower),
            2 => Ok(CaseMode::Insensitive),
            _ => Err(Error::BadMode(raw)),
        }
    }
}

impl CaseMode {
    /// Slot index for `c`, or `BadCharacter` if this mode rejects it.
    pub(crate) fn index_of(self, c: char) -> Result<u8, Error> {
        match (self, c) {
            (CaseMode::Upper, 'A'..='Z') | (CaseMode::Insensitive, 'A'..='Z') => {
                Ok(c as u8 - b'A')
            }
            (CaseMode::Lower, 'a'..='z') | (CaseMode::Insensitive, 'a'..='z') => {
                Ok(c as u8 - b'a')
            }
            _ => Err(Error::BadCharacter(c)),
        }
    }

    /// Inverse of `index_of`, used when enumerating. Insensitive mode folds
    /// both cases into one slot, so it renders its canonical case: uppercase.
    pub(crate) fn char_at(self, ix: u8) -> char {
        debug_assert!((ix as usize) < ALPHABET);
        match self {
            CaseMode::Upper | CaseMode::Insensitive => (b'A' + ix) as char,
            CaseMode::Lower => (b'a' + ix) as char,
        }
    }
}

/// Next slot after `i` in ascending order, if any.
pub(crate) fn next_slot(i: u8) -> Option<u8> {
    if (i + 1) as usize == ALPHABET {
        None
    } else {
        Some(i + 1)
    }
}
