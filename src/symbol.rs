//! Symbols carried on transducer arcs.
use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// One symbol on a transducer tape.
///
/// A symbol is either an ordinary token or one of the three reserved
/// symbols of the Xerox conventions. An arc labeled `?:?` stands for the
/// non-identity relation over unknown symbols; `@:@` for the identity
/// relation over them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// Empty string; consumes or produces nothing on its tape
    Epsilon,
    /// Some symbol outside the currently declared alphabet
    Unknown,
    /// An unknown symbol paired with itself on both tapes
    Identity,
    /// Ordinary symbol
    Concrete(SmolStr),
}

impl Symbol {
    /// Decodes a token from the grammar parser into a symbol.
    ///
    /// The reserved spellings `ε`, `?` and `@` map to the reserved
    /// symbols; everything else is an ordinary symbol.
    pub fn from_token(token: &str) -> Symbol {
        match token {
            "ε" => Symbol::Epsilon,
            "?" => Symbol::Unknown,
            "@" => Symbol::Identity,
            _ => Symbol::Concrete(token.into()),
        }
    }

    /// Creates an ordinary symbol.
    pub fn concrete(token: &str) -> Symbol {
        Symbol::Concrete(token.into())
    }

    /// Whether this is one of the reserved symbols.
    #[inline(always)]
    pub fn is_reserved(&self) -> bool {
        !matches!(self, Symbol::Concrete(_))
    }

    /// Whether this is an ordinary symbol.
    #[inline(always)]
    pub fn is_concrete(&self) -> bool {
        matches!(self, Symbol::Concrete(_))
    }

    #[inline(always)]
    pub(crate) fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    #[inline(always)]
    pub(crate) fn is_unknown(&self) -> bool {
        matches!(self, Symbol::Unknown)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Epsilon => write!(f, "ε"),
            Symbol::Unknown => write!(f, "?"),
            Symbol::Identity => write!(f, "@"),
            Symbol::Concrete(s) => write!(f, "{}", s),
        }
    }
}
