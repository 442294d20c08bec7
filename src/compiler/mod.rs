//! The construction algebra and the parse-tree compiler.
use serde::{Deserialize, Serialize};

use crate::ast::ParseNode;
use crate::transducer::Fst;

pub mod determinize;
pub mod harmonize;
pub mod product;
pub mod prune;
pub mod thompson;

mod error;
mod eval;

pub use self::error::{CompilerError, EvalError};
pub use self::product::ProductOp;

/// finetuning configuration of the regex compilation
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CompilerConfig {
    /// upper limit on the states of any intermediate machine; the
    /// powerset and product constructions can blow up on adversarial
    /// expressions
    #[serde(default = "default_max_states")]
    pub max_states: Option<usize>,
}

impl CompilerConfig {
    /// create a default configuration with following values:
    /// * max_states = 65536
    pub const fn default_const() -> CompilerConfig {
        CompilerConfig {
            max_states: default_max_states(),
        }
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self::default_const()
    }
}

const fn default_max_states() -> Option<usize> {
    Some(65_536)
}

/// Compiles parse trees from the external grammar parser into
/// transducers.
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    /// Creates a compiler with the given configuration.
    pub fn new(config: CompilerConfig) -> Compiler {
        Compiler { config }
    }

    /// Compiles one parse tree into a transducer.
    ///
    /// The accumulator seeding the evaluation is the ε-language, so an
    /// empty top-level node compiles to the machine accepting only the
    /// empty string.
    pub fn compile(&self, node: &ParseNode) -> Result<Fst, EvalError> {
        eval::evaluate(node, Fst::epsilon_language(), &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_deserializes_with_defaults() {
        let config: CompilerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_states, Some(65_536));
    }

    #[test]
    fn config_accepts_kebab_case_keys() {
        let config: CompilerConfig = serde_json::from_str(r#"{"max-states": 128}"#).unwrap();
        assert_eq!(config.max_states, Some(128));
    }
}
