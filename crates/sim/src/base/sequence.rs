use super::{Nucleotide, Symbol};
use crate::errors::{Error, MalformedSequence};
use std::fmt;
use std::str::FromStr;

/// Immutable sequence of symbols, normally terminated by the sentinel.
///
/// `Sequence` is the input of the repeat-length engine. It is built either
/// from bases (`terminated`, which appends the sentinel), from text
/// (`FromStr`/`from_ascii`, where `$` denotes the sentinel), or from raw
/// symbols (`from_symbols`). Only `terminated` guarantees well-formedness;
/// the other constructors defer that check to `validate`, which the engine
/// calls before touching any trie state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<Symbol>);

impl Sequence {
    /// Build a well-formed sequence: the given bases followed by one sentinel.
    ///
    /// ```rust
    /// # use longrep_sim::base::{Nucleotide, Sequence};
    /// let seq = Sequence::terminated([Nucleotide::A, Nucleotide::C]);
    /// assert_eq!(seq.to_string(), "AC$");
    /// ```
    pub fn terminated<I>(bases: I) -> Self
    where
        I: IntoIterator<Item = Nucleotide>,
    {
        let mut symbols: Vec<Symbol> = bases.into_iter().map(Symbol::Base).collect();
        symbols.push(Symbol::Sentinel);
        Self(symbols)
    }

    /// Wrap raw symbols without checking sentinel placement.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    /// Parse ASCII bytes. Bases are case-insensitive and `$` is the sentinel.
    ///
    /// Any other byte yields `Error::InvalidSymbol` with its position.
    pub fn from_ascii(bytes: &[u8]) -> Result<Self, Error> {
        let symbols = bytes
            .iter()
            .enumerate()
            .map(|(position, &byte)| {
                Symbol::from_ascii(byte).ok_or(Error::InvalidSymbol {
                    symbol: byte as char,
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(symbols))
    }

    /// Return the length of the sequence, sentinel included.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.0.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Symbol] {
        &self.0
    }

    /// Iterate over the bases, skipping the sentinel.
    pub fn bases(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        self.0.iter().filter_map(|s| s.base())
    }

    /// Check that the sequence is non-empty and that the sentinel occurs
    /// exactly once, as the final symbol.
    pub fn validate(&self) -> Result<(), MalformedSequence> {
        if self.0.is_empty() {
            return Err(MalformedSequence::Empty);
        }
        match self.0.iter().position(|s| s.is_sentinel()) {
            None => Err(MalformedSequence::MissingSentinel),
            Some(position) if position + 1 != self.0.len() => {
                Err(MalformedSequence::MisplacedSentinel { position })
            }
            Some(_) => Ok(()),
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = Error;

    /// Parse a textual representation (e.g. "ACGT$") into a `Sequence`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .enumerate()
            .map(|(position, c)| {
                u8::try_from(c)
                    .ok()
                    .and_then(Symbol::from_ascii)
                    .ok_or(Error::InvalidSymbol { symbol: c, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(symbols))
    }
}

impl AsRef<[Symbol]> for Sequence {
    fn as_ref(&self) -> &[Symbol] {
        &self.0
    }
}
