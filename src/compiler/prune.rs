//! Dead-state pruning.
//!
//! Removes the sink and any limbo states left behind by the product
//! construction. A state is live when it can both be entered and left:
//! self-loops count for neither direction.
use crate::transducer::Fst;
use crate::types::StateSet;

/// Drops states that cannot be entered or cannot be left.
///
/// A state is *ingressible* when it is the initial state or some arc
/// from a different state enters it, and *egressible* when it is final
/// or some arc leaves it for a different state. Non-live states and all
/// arcs touching them are removed; finals are cut down to the
/// survivors. The initial state is always retained so the record stays
/// well-formed.
pub fn prune(fst: &Fst) -> Fst {
    let mut ingressible = StateSet::new();
    ingressible.insert(fst.initial());
    let mut egressible: StateSet = fst.finals().clone();

    for arc in fst.transitions() {
        if arc.source() != arc.target() {
            ingressible.insert(arc.target());
            egressible.insert(arc.source());
        }
    }

    let mut live: StateSet = fst
        .states()
        .iter()
        .filter(|s| ingressible.contains(*s) && egressible.contains(*s))
        .copied()
        .collect();
    live.insert(fst.initial());

    let out = Fst {
        alphabet: fst.alphabet().clone(),
        states: live.clone(),
        initial: fst.initial(),
        finals: fst.finals().intersection(&live).copied().collect(),
        transitions: fst
            .transitions()
            .iter()
            .filter(|t| live.contains(&t.source()) && live.contains(&t.target()))
            .cloned()
            .collect(),
    };

    log::debug!(
        "prune: {} states in, {} live",
        fst.states().len(),
        out.states.len()
    );
    out
}
