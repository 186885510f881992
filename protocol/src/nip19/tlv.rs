//! Type-length-value framing for `nprofile` and `nevent` payloads.
//!
//! Each entry is one type byte, one length byte, then `length` bytes of
//! value. Lengths are a single byte, so values top out at 255 bytes.

use super::error::Nip19Error;
use crate::config::{TLV_HEADER_LENGTH, TLV_MAX_VALUE_LENGTH};

/// One decoded entry, borrowing its value from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvEntry<'a> {
    pub kind: u8,
    pub value: &'a [u8],
}

/// Append one entry to `out`.
pub fn write_entry(out: &mut Vec<u8>, kind: u8, value: &[u8]) -> Result<(), Nip19Error> {
    if value.len() > TLV_MAX_VALUE_LENGTH {
        return Err(Nip19Error::ValueTooLong {
            kind,
            len: value.len(),
        });
    }
    out.reserve(TLV_HEADER_LENGTH + value.len());
    out.push(kind);
    out.push(value.len() as u8);
    out.extend_from_slice(value);
    Ok(())
}

/// Iterator over the entries of a TLV payload.
///
/// Yields `Err(TruncatedEntry)` once if the trailing bytes do not form a
/// complete entry, then stops. Whether that is fatal is up to the caller.
#[derive(Debug, Clone)]
pub struct TlvReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> TlvReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }
}

impl<'a> Iterator for TlvReader<'a> {
    type Item = Result<TlvEntry<'a>, Nip19Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let data: &'a [u8] = self.data;
        let rest = &data[self.offset..];
        if rest.is_empty() {
            return None;
        }

        let offset = self.offset;
        let truncated = |needed: usize| Nip19Error::TruncatedEntry {
            offset,
            needed,
            available: rest.len(),
        };

        if rest.len() < TLV_HEADER_LENGTH {
            self.offset = self.data.len();
            return Some(Err(truncated(TLV_HEADER_LENGTH)));
        }
        let kind = rest[0];
        let len = usize::from(rest[1]);
        let needed = TLV_HEADER_LENGTH + len;
        if rest.len() < needed {
            self.offset = self.data.len();
            return Some(Err(truncated(needed)));
        }

        self.offset += needed;
        Some(Ok(TlvEntry {
            kind,
            value: &rest[TLV_HEADER_LENGTH..needed],
        }))
    }
}
