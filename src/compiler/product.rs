//! Product construction for union, intersection and subtraction.
//!
//! Explores the joint state space of two machines lazily from the joint
//! initial state. When one side has no arc for a label the other side
//! moves on, the missing move is simulated into an absorbing sink; the
//! sink side is never final and contributes no arcs, so the operator's
//! finality rule decides what survives.
use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};

use crate::transducer::{Fst, Transition};
use crate::types::{StateId, StateSet};

use super::error::CompilerError;
use super::harmonize::harmonize;
use super::prune::prune;

/// One side of a joint state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Side {
    State(StateId),
    Sink,
}

impl Side {
    fn is_final(self, fst: &Fst) -> bool {
        match self {
            Side::State(s) => fst.is_final(s),
            Side::Sink => false,
        }
    }
}

/// Binary operator realized by the product construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductOp {
    /// Joint state final when either side is.
    Union,
    /// Joint state final when both sides are.
    Intersect,
    /// Joint state final when the left side is and the right is not.
    Subtract,
}

impl ProductOp {
    fn joint_final(self, left: bool, right: bool) -> bool {
        match self {
            ProductOp::Union => left || right,
            ProductOp::Intersect => left && right,
            ProductOp::Subtract => left && !right,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ProductOp::Union => "union",
            ProductOp::Intersect => "intersection",
            ProductOp::Subtract => "subtraction",
        }
    }
}

/// Computes the product of two harmonized, ε-free machines.
///
/// Joint states are flattened to fresh dense identifiers in first-seen
/// order, the joint initial state at 0; the numbering counter lives and
/// dies inside this call. Dead joint states, the sink included, are
/// pruned before the result is returned.
///
/// Fails when either operand carries a free move: Kleene closure is the
/// only producer of those and it determinizes its own output, so an
/// ε-bearing operand here is a caller error.
pub fn product(l1: &Fst, l2: &Fst, op: ProductOp) -> Result<Fst, CompilerError> {
    if l1.has_epsilon_arcs() || l2.has_epsilon_arcs() {
        return Err(CompilerError::EpsilonInput {
            operation: op.name(),
        });
    }

    let start = (Side::State(l1.initial()), Side::State(l2.initial()));
    let mut index: HashMap<(Side, Side), StateId> = HashMap::new();
    index.insert(start, StateId::ZERO);
    let mut next_id = StateId::ZERO.incr();

    let mut agenda = VecDeque::from([start]);
    let mut finals = StateSet::new();
    let mut transitions: Vec<Transition> = vec![];
    let mut emitted: HashSet<Transition> = HashSet::new();

    while let Some(joint) = agenda.pop_front() {
        let (p, q) = joint;
        let id = index[&joint];
        log::trace!("product: joint {:?} as state {}", joint, id);

        if op.joint_final(p.is_final(l1), q.is_final(l2)) {
            finals.insert(id);
        }

        // scan each side's arcs against the other, sink for the misses
        for (this, other, this_fst, other_fst, swapped) in
            [(p, q, l1, l2, false), (q, p, l2, l1, true)]
        {
            let Side::State(this_state) = this else {
                continue;
            };

            for arc in this_fst.arcs_from(this_state) {
                let mut other_targets: Vec<Side> = vec![];
                if let Side::State(other_state) = other {
                    for other_arc in other_fst.arcs_from(other_state) {
                        if other_arc.label() == arc.label() {
                            other_targets.push(Side::State(other_arc.target()));
                        }
                    }
                }
                if other_targets.is_empty() {
                    other_targets.push(Side::Sink);
                }

                for other_target in other_targets {
                    let target = if swapped {
                        (other_target, Side::State(arc.target()))
                    } else {
                        (Side::State(arc.target()), other_target)
                    };

                    let target_id = *index.entry(target).or_insert_with(|| {
                        let fresh = next_id;
                        next_id = next_id.incr();
                        agenda.push_back(target);
                        fresh
                    });

                    let joint_arc = Transition::new(
                        id,
                        arc.input().clone(),
                        target_id,
                        arc.output().clone(),
                    );
                    if emitted.insert(joint_arc.clone()) {
                        transitions.push(joint_arc);
                    }
                }
            }
        }
    }

    let out = Fst {
        alphabet: l1.alphabet().union(l2.alphabet()),
        states: (0..next_id.0).map(StateId).collect(),
        initial: StateId::ZERO,
        finals,
        transitions,
    };

    log::debug!(
        "product ({}): {}x{} joint space, {} reached",
        op.name(),
        l1.states().len(),
        l2.states().len(),
        out.states.len()
    );
    Ok(prune(&out))
}

/// Union of two machines: harmonizes, then runs the product.
pub fn union(l1: &Fst, l2: &Fst) -> Result<Fst, CompilerError> {
    let (h1, h2) = harmonize(l1, l2);
    product(&h1, &h2, ProductOp::Union)
}

/// Intersection of two machines: harmonizes, then runs the product.
pub fn intersect(l1: &Fst, l2: &Fst) -> Result<Fst, CompilerError> {
    let (h1, h2) = harmonize(l1, l2);
    product(&h1, &h2, ProductOp::Intersect)
}

/// Subtraction of the second machine from the first.
pub fn subtract(l1: &Fst, l2: &Fst) -> Result<Fst, CompilerError> {
    let (h1, h2) = harmonize(l1, l2);
    product(&h1, &h2, ProductOp::Subtract)
}
