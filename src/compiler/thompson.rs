//! Thompson-style constructions: single mappings, concatenation, the
//! ε-based union and Kleene closure.
use crate::symbol::Symbol;
use crate::transducer::{rename, Alphabet, Fst, Transition};
use crate::types::{StateId, StateSet};

use super::determinize::determinize;

/// Builds the two-state transducer for a single mapping `a:b`.
///
/// When exactly one side is the unknown symbol, the machine also keeps an
/// auxiliary `?:?` arc and an identity arc on the concrete side, so that
/// later harmonization can expand the unknown case correctly. Whenever a
/// side is unknown, `@` joins the declared alphabet.
pub fn symbol_pair(input: Symbol, output: Symbol) -> Fst {
    let mut alphabet = Alphabet::new();
    alphabet.insert(input.clone());
    alphabet.insert(output.clone());
    if input.is_unknown() || output.is_unknown() {
        alphabet.insert(Symbol::Identity);
    }

    let one_side_unknown = input.is_unknown() != output.is_unknown();
    let mut transitions = vec![Transition::new(
        StateId(0),
        input.clone(),
        StateId(1),
        output.clone(),
    )];

    if one_side_unknown {
        // keep a record that the unknown case may also pass through as
        // identity; harmonization materializes it later
        let concrete = if input.is_unknown() { output } else { input };
        transitions.push(Transition::new(
            StateId(0),
            Symbol::Unknown,
            StateId(1),
            Symbol::Unknown,
        ));
        transitions.push(Transition::new(
            StateId(0),
            concrete.clone(),
            StateId(1),
            concrete,
        ));
    }

    let fst = Fst {
        alphabet,
        states: [StateId(0), StateId(1)].into_iter().collect(),
        initial: StateId::ZERO,
        finals: [StateId(1)].into_iter().collect(),
        transitions,
    };

    log::debug!(
        "symbol_pair: {} states, {} arcs",
        fst.states.len(),
        fst.transitions.len()
    );
    fst
}

/// Concatenates two transducers.
///
/// The second machine is renamed apart, ε-bridges run from the first
/// machine's finals to the second machine's initial state, and the first
/// machine's finals become intermediate.
pub fn concatenate(l1: &Fst, l2: &Fst) -> Fst {
    let l2 = rename::rename_apart(l2, &l1.states);

    let mut transitions = l1.transitions.clone();
    transitions.extend(l2.transitions.iter().cloned());
    for f in &l1.finals {
        transitions.push(Transition::epsilon(*f, l2.initial));
    }

    let fst = Fst {
        alphabet: l1.alphabet.union(&l2.alphabet),
        states: l1.states.union(&l2.states).copied().collect(),
        initial: l1.initial,
        finals: l2.finals.clone(),
        transitions,
    };

    log::debug!(
        "concatenate: {} states, {} arcs",
        fst.states.len(),
        fst.transitions.len()
    );
    fst
}

/// Unions two transducers with a fresh ε-forking initial state.
///
/// This is the classical Thompson construction. The compiler itself uses
/// the product-construction union instead, which stays ε-free; this one
/// remains as a reference machine for equivalence checks.
pub fn union_epsilon(l1: &Fst, l2: &Fst) -> Fst {
    let l1 = rename::shift_states(l1, 1);

    let mut forbidden: StateSet = l1.states.clone();
    forbidden.insert(StateId::ZERO);
    let l2 = rename::rename_apart(l2, &forbidden);

    let mut states: StateSet = l1.states.union(&l2.states).copied().collect();
    states.insert(StateId::ZERO);

    let mut transitions = l1.transitions.clone();
    transitions.extend(l2.transitions.iter().cloned());
    transitions.push(Transition::epsilon(StateId::ZERO, l1.initial));
    transitions.push(Transition::epsilon(StateId::ZERO, l2.initial));

    Fst {
        alphabet: l1.alphabet.union(&l2.alphabet),
        states,
        initial: StateId::ZERO,
        finals: l1.finals.union(&l2.finals).copied().collect(),
        transitions,
    }
}

/// Kleene closure of a transducer.
///
/// A fresh state 0 becomes both the initial and the sole final state,
/// with ε-arcs into the old initial state and back from the old finals.
/// The result is determinized so that downstream product constructions
/// see an ε-free machine.
pub fn kleene_star(l: &Fst) -> Fst {
    let l = rename::shift_states(l, 1);

    let mut states = l.states.clone();
    states.insert(StateId::ZERO);

    let mut transitions = l.transitions.clone();
    transitions.push(Transition::epsilon(StateId::ZERO, l.initial));
    for f in &l.finals {
        transitions.push(Transition::epsilon(*f, StateId::ZERO));
    }

    let mut alphabet = l.alphabet.clone();
    alphabet.insert(Symbol::Epsilon);

    let looped = Fst {
        alphabet,
        states,
        initial: StateId::ZERO,
        finals: [StateId::ZERO].into_iter().collect(),
        transitions,
    };

    let fst = determinize(&looped);
    log::debug!(
        "kleene_star: {} states, {} arcs after determinization",
        fst.states.len(),
        fst.transitions.len()
    );
    fst
}
