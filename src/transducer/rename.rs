//! State renaming utilities.
//!
//! State identifiers are only meaningful within one transducer, so two
//! values must be renamed apart before their state sets are combined.
use crate::types::StateSet;

use super::Fst;

/// Maps every state of the transducer through `offset` added to its id.
///
/// Initial state, final states and both endpoints of each arc move
/// simultaneously. Used to free low state ids for a fresh initial state.
pub fn shift_states(fst: &Fst, offset: u32) -> Fst {
    if offset == 0 {
        return fst.clone();
    }

    Fst {
        alphabet: fst.alphabet.clone(),
        states: fst.states.iter().map(|s| s.offset(offset)).collect(),
        initial: fst.initial.offset(offset),
        finals: fst.finals.iter().map(|s| s.offset(offset)).collect(),
        transitions: fst
            .transitions
            .iter()
            .map(|t| t.map_states(|s| s.offset(offset)))
            .collect(),
    }
}

/// Renames the transducer's states away from a forbidden set.
///
/// Starts from the states as they are; while any state collides with the
/// forbidden set, every state is shifted by one and the check repeats.
/// Terminates because the shifted minimum eventually exceeds the
/// forbidden maximum.
pub fn rename_apart(fst: &Fst, forbidden: &StateSet) -> Fst {
    let mut offset = 0u32;

    while fst
        .states
        .iter()
        .any(|s| forbidden.contains(&s.offset(offset)))
    {
        offset += 1;
    }

    shift_states(fst, offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;
    use crate::transducer::{Alphabet, Transition};
    use crate::types::StateId;

    fn two_state_fst() -> Fst {
        let a = Symbol::concrete("a");
        Fst {
            alphabet: Alphabet::from_symbols([a.clone()]),
            states: [StateId(0), StateId(1)].into_iter().collect(),
            initial: StateId(0),
            finals: [StateId(1)].into_iter().collect(),
            transitions: vec![Transition::new(StateId(0), a.clone(), StateId(1), a)],
        }
    }

    #[test]
    fn shift_moves_everything_together() {
        let fst = shift_states(&two_state_fst(), 3);

        assert_eq!(fst.initial(), StateId(3));
        assert!(fst.states().contains(&StateId(3)));
        assert!(fst.states().contains(&StateId(4)));
        assert!(fst.is_final(StateId(4)));
        assert_eq!(fst.transitions()[0].source(), StateId(3));
        assert_eq!(fst.transitions()[0].target(), StateId(4));
        assert!(fst.is_consistent());
    }

    #[test]
    fn rename_apart_without_conflict_is_identity() {
        let forbidden: StateSet = [StateId(5), StateId(6)].into_iter().collect();
        let fst = rename_apart(&two_state_fst(), &forbidden);
        assert_eq!(fst.initial(), StateId(0));
    }

    #[test]
    fn rename_apart_clears_overlap() {
        let forbidden: StateSet = [StateId(0), StateId(1), StateId(2)].into_iter().collect();
        let fst = rename_apart(&two_state_fst(), &forbidden);

        assert!(fst.states().iter().all(|s| !forbidden.contains(s)));
        assert_eq!(fst.states().len(), 2);
        assert!(fst.is_consistent());
    }

}
