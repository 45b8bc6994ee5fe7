use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{GenerateError, GenerateResult};

/// The default alphabet: the visually ambiguous pair of uppercase 'I' and
/// lowercase 'l', which render near-identically in most sans-serif fonts.
static CONFUSABLE_SYMBOLS: Lazy<Vec<char>> = Lazy::new(|| vec!['I', 'l']);

/// An ordered, duplicate-free set of symbols that generated strings are
/// built from. The generator is written against this type rather than a
/// hard-coded pair, so any finite alphabet of two or more symbols works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<char>", into = "Vec<char>")]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet from an ordered list of symbols.
    ///
    /// Fails if fewer than two symbols are supplied or any symbol repeats;
    /// a repeated symbol would make distinct symbol indices produce the
    /// same string, breaking the disjoint-subtree partitioning.
    pub fn new(symbols: Vec<char>) -> GenerateResult<Self> {
        if symbols.len() < 2 {
            return Err(GenerateError::invalid_alphabet(
                "an alphabet needs at least two symbols",
            ));
        }
        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(symbol) {
                return Err(GenerateError::invalid_alphabet(format!(
                    "duplicate symbol '{}'",
                    symbol
                )));
            }
        }
        Ok(Self { symbols })
    }

    /// The default two-symbol confusable alphabet, {'I', 'l'}.
    pub fn confusable() -> Self {
        Self {
            symbols: CONFUSABLE_SYMBOLS.clone(),
        }
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; construction rejects alphabets with fewer than two symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol at `index`. Panics if `index >= len()`; callers iterate
    /// over `0..len()` so an out-of-range index is a bug, not an input error.
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// The symbols in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// How many distinct strings of exactly `length` symbols this alphabet
    /// can produce, or `None` if the count does not fit in a `u128`.
    pub fn capacity(&self, length: usize) -> Option<u128> {
        let exponent = u32::try_from(length).ok()?;
        (self.symbols.len() as u128).checked_pow(exponent)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::confusable()
    }
}

impl TryFrom<Vec<char>> for Alphabet {
    type Error = GenerateError;

    fn try_from(symbols: Vec<char>) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl From<Alphabet> for Vec<char> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}
