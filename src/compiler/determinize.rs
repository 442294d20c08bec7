//! Subset-construction determinization.
//!
//! The classical powerset construction extended to transducers by
//! treating the `(input, output)` pair as the arc label. Invoked as the
//! post-pass of Kleene closure, so downstream product constructions see
//! ε-free, deterministic machines.
use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::symbol::Symbol;
use crate::transducer::{Fst, Transition};
use crate::types::{StateId, StateSet};

/// States reachable from `seed` through free moves alone, sorted.
fn epsilon_closure<I: IntoIterator<Item = StateId>>(fst: &Fst, seed: I) -> Vec<StateId> {
    let mut closure = StateSet::new();
    let mut agenda: Vec<StateId> = seed.into_iter().collect();

    while let Some(state) = agenda.pop() {
        if !closure.insert(state) {
            continue;
        }
        for arc in fst.arcs_from(state) {
            if arc.is_epsilon() {
                agenda.push(arc.target());
            }
        }
    }

    let mut closure: Vec<StateId> = closure.into_iter().collect();
    closure.sort();
    closure
}

/// Determinizes a transducer over its `(input, output)` label space.
///
/// Breadth-first over sets of source states; each reachable set becomes
/// one output state, numbered in first-seen order with the start set at
/// 0. ε-closures are taken before and after every move. An output state
/// is final when any member of its set was final. The result carries no
/// free moves.
pub fn determinize(fst: &Fst) -> Fst {
    let start = epsilon_closure(fst, [fst.initial()]);

    let mut index: HashMap<Vec<StateId>, StateId> = HashMap::new();
    index.insert(start.clone(), StateId::ZERO);
    let mut next_id = StateId::ZERO.incr();

    let mut agenda = VecDeque::from([start]);
    let mut finals = StateSet::new();
    let mut transitions = vec![];

    while let Some(subset) = agenda.pop_front() {
        let id = index[&subset];
        log::trace!("determinize: subset {:?} as state {}", subset, id);

        if subset.iter().any(|s| fst.is_final(*s)) {
            finals.insert(id);
        }

        let mut moves: HashMap<(Symbol, Symbol), Vec<StateId>> = HashMap::new();
        for state in &subset {
            for arc in fst.arcs_from(*state) {
                if arc.is_epsilon() {
                    continue;
                }
                moves
                    .entry((arc.input().clone(), arc.output().clone()))
                    .or_default()
                    .push(arc.target());
            }
        }

        // sorted labels keep the output numbering reproducible
        let mut moves: Vec<_> = moves.into_iter().collect();
        moves.sort_by(|a, b| a.0.cmp(&b.0));

        for ((input, output), targets) in moves {
            let target_set = epsilon_closure(fst, targets);
            let target_id = *index.entry(target_set.clone()).or_insert_with(|| {
                let fresh = next_id;
                next_id = next_id.incr();
                agenda.push_back(target_set.clone());
                fresh
            });
            transitions.push(Transition::new(id, input, target_id, output));
        }
    }

    let out = Fst {
        alphabet: fst.alphabet().clone(),
        states: (0..next_id.0).map(StateId).collect(),
        initial: StateId::ZERO,
        finals,
        transitions,
    };

    log::debug!(
        "determinize: {} states in, {} states out",
        fst.states().len(),
        out.states.len()
    );
    out
}
