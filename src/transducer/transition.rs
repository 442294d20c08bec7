use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;
use crate::types::StateId;

/// One arc of a transducer.
///
/// From `source`, consume `input`, produce `output`, go to `target`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Transition {
    source: StateId,
    input: Symbol,
    target: StateId,
    output: Symbol,
}

impl Transition {
    /// Creates an arc.
    pub fn new(source: StateId, input: Symbol, target: StateId, output: Symbol) -> Transition {
        Transition {
            source,
            input,
            target,
            output,
        }
    }

    /// Creates an arc consuming and producing nothing.
    pub fn epsilon(source: StateId, target: StateId) -> Transition {
        Transition::new(source, Symbol::Epsilon, target, Symbol::Epsilon)
    }

    /// Source state of the arc.
    #[inline(always)]
    pub fn source(&self) -> StateId {
        self.source
    }

    /// Symbol consumed on the input tape.
    #[inline(always)]
    pub fn input(&self) -> &Symbol {
        &self.input
    }

    /// Target state of the arc.
    #[inline(always)]
    pub fn target(&self) -> StateId {
        self.target
    }

    /// Symbol produced on the output tape.
    #[inline(always)]
    pub fn output(&self) -> &Symbol {
        &self.output
    }

    /// The `(input, output)` label of the arc.
    #[inline(always)]
    pub fn label(&self) -> (&Symbol, &Symbol) {
        (&self.input, &self.output)
    }

    /// Whether the arc consumes and produces nothing, a free move.
    #[inline(always)]
    pub fn is_epsilon(&self) -> bool {
        self.input.is_epsilon() && self.output.is_epsilon()
    }

    /// The same arc with both endpoints mapped through `f`.
    pub(crate) fn map_states<F: Fn(StateId) -> StateId>(&self, f: F) -> Transition {
        Transition {
            source: f(self.source),
            input: self.input.clone(),
            target: f(self.target),
            output: self.output.clone(),
        }
    }

    /// The same arc with a different label.
    pub(crate) fn relabel(&self, input: Symbol, output: Symbol) -> Transition {
        Transition {
            source: self.source,
            input,
            target: self.target,
            output,
        }
    }
}
