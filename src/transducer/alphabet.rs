use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// Declared alphabet of a transducer.
///
/// Symbols outside the alphabet are what the reserved `?` and `@` range
/// over. The alphabet may itself contain reserved symbols.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alphabet {
    pub(crate) symbols: HashSet<Symbol>,
}

impl Alphabet {
    /// Creates an empty alphabet.
    pub fn new() -> Alphabet {
        Alphabet {
            symbols: HashSet::new(),
        }
    }

    /// Creates an alphabet from the given symbols.
    pub fn from_symbols<I: IntoIterator<Item = Symbol>>(symbols: I) -> Alphabet {
        Alphabet {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// Adds a symbol, returning whether it was new.
    pub fn insert(&mut self, symbol: Symbol) -> bool {
        self.symbols.insert(symbol)
    }

    /// Whether the symbol is declared.
    #[inline(always)]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    /// Number of declared symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether no symbols are declared.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over the declared symbols in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// The union of two alphabets.
    pub fn union(&self, other: &Alphabet) -> Alphabet {
        Alphabet {
            symbols: self.symbols.union(&other.symbols).cloned().collect(),
        }
    }

    /// Ordinary symbols the other alphabet declares that this one lacks.
    ///
    /// Reserved symbols never count as missing; they are not symbols one
    /// machine can know and the other not. The result is sorted so that
    /// downstream expansion is deterministic.
    pub fn missing_from(&self, other: &Alphabet) -> Vec<Symbol> {
        let mut missing: Vec<Symbol> = other
            .symbols
            .iter()
            .filter(|sym| sym.is_concrete() && !self.symbols.contains(*sym))
            .cloned()
            .collect();
        missing.sort();
        missing
    }
}
