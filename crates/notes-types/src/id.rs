use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Store-assigned note identifier.
///
/// Ids are handed out by a counter starting at [`NoteId::FIRST`]. On the wire
/// an id is a bare JSON integer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// The first id a fresh (or cleared) store assigns.
    pub const FIRST: NoteId = NoteId(1);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(&self) -> i64 {
        self.0
    }

    /// The id that follows this one.
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl FromStr for NoteId {
    type Err = TypeError;

    /// Parse an id from request text the way a browser's `parseInt` reads it.
    ///
    /// Leading whitespace and an optional sign are skipped, then the longest
    /// run of digits is taken and anything after it is ignored, so `"1abc"`
    /// and `"1.5"` both read as 1. A `0x` prefix switches to hexadecimal.
    /// Values beyond the `i64` range saturate. Text with no leading digit is
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TypeError::InvalidNoteId(s.to_string());

        let rest = s.trim_start();
        let (negative, rest) = match rest.as_bytes().first() {
            Some(b'-') => (true, &rest[1..]),
            Some(b'+') => (false, &rest[1..]),
            _ => (false, rest),
        };
        let (radix, rest) = match rest.get(..2) {
            Some("0x" | "0X") => (16, &rest[2..]),
            _ => (10, rest),
        };

        let digits: Vec<i64> = rest
            .chars()
            .map_while(|c| c.to_digit(radix))
            .map(i64::from)
            .collect();
        if digits.is_empty() {
            return Err(invalid());
        }

        let value = digits.iter().fold(0i64, |acc, &d| {
            let acc = acc.saturating_mul(i64::from(radix));
            if negative {
                acc.saturating_sub(d)
            } else {
                acc.saturating_add(d)
            }
        });
        Ok(Self(value))
    }
}

impl From<i64> for NoteId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
