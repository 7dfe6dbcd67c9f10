use core::fmt;

use super::Nucleotide;

/// Character used to render (and parse) the end-of-sequence sentinel.
pub const SENTINEL_CHAR: char = '$';

/// One position of a sequence handed to the repeat-length engine.
///
/// A symbol is either a DNA base or the end-of-sequence sentinel. The
/// sentinel compares unequal to every base, so no suffix of a terminated
/// sequence can be a prefix of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Base(Nucleotide),
    Sentinel,
}

impl Symbol {
    /// Parse a single ASCII byte. Bases are case-insensitive; `$` is the
    /// sentinel.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte == SENTINEL_CHAR as u8 {
            return Some(Self::Sentinel);
        }
        match Nucleotide::from_ascii(byte) {
            Some(base) => Some(Self::Base(base)),
            None => None,
        }
    }

    #[inline(always)]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::Sentinel)
    }

    /// The base behind this symbol, or `None` for the sentinel.
    #[inline(always)]
    pub const fn base(self) -> Option<Nucleotide> {
        match self {
            Self::Base(base) => Some(base),
            Self::Sentinel => None,
        }
    }

    #[inline(always)]
    pub const fn to_char(self) -> char {
        match self {
            Self::Base(base) => base.to_char(),
            Self::Sentinel => SENTINEL_CHAR,
        }
    }
}

impl From<Nucleotide> for Symbol {
    #[inline(always)]
    fn from(base: Nucleotide) -> Self {
        Self::Base(base)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
