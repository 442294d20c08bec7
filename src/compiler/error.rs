use smol_str::SmolStr;

/// Error in one of the transducer constructions.
#[derive(Debug, thiserror::Error)]
pub enum CompilerError {
    /// A product construction received an operand with free moves.
    #[error("{operation} requires epsilon-free operands")]
    EpsilonInput {
        /// The operation whose precondition was violated.
        operation: &'static str,
    },
}

/// Error while evaluating a parse tree.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// The parser produced a node tag this core does not know.
    #[error("unknown node tag {tag:?}")]
    UnknownTag {
        /// The offending tag.
        tag: SmolStr,
    },

    /// A node carried the wrong number of children.
    #[error("node {tag:?} expects {expected} children, found {found}")]
    Arity {
        /// Tag of the offending node.
        tag: SmolStr,
        /// What the tag requires.
        expected: &'static str,
        /// What the node carried.
        found: usize,
    },

    /// A node that should carry a symbol token did not.
    #[error("expected a symbol leaf under {tag:?}")]
    BadSymbol {
        /// Tag of the offending node.
        tag: SmolStr,
    },

    /// An intermediate machine outgrew the configured state budget.
    #[error("state budget of {limit} exceeded: {reached} states reached")]
    StateBudget {
        /// The configured limit.
        limit: usize,
        /// The size of the intermediate machine.
        reached: usize,
    },

    /// A construction failed underneath the evaluator.
    #[error("construction error")]
    Compiler(#[from] CompilerError),
}
