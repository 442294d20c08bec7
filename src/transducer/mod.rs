//! The finite-state transducer value and its leaf utilities.
pub mod alphabet;
pub mod rename;
mod transition;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;
use crate::types::{StateId, StateSet};

pub use self::alphabet::Alphabet;
pub use self::transition::Transition;

/// A finite-state transducer as an immutable value.
///
/// The record is the 5-tuple `(Σ, Q, s₀, F, Δ)`: declared alphabet,
/// states, initial state, final states and transitions. Every operation
/// of the calculus returns a fresh value; state identifiers are opaque
/// and only comparable within one value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fst {
    pub(crate) alphabet: Alphabet,
    pub(crate) states: StateSet,
    pub(crate) initial: StateId,
    pub(crate) finals: StateSet,
    pub(crate) transitions: Vec<Transition>,
}

impl Fst {
    /// The transducer accepting only the empty string, mapped to itself.
    pub fn epsilon_language() -> Fst {
        let mut states = StateSet::new();
        states.insert(StateId::ZERO);
        let mut finals = StateSet::new();
        finals.insert(StateId::ZERO);

        Fst {
            alphabet: Alphabet::new(),
            states,
            initial: StateId::ZERO,
            finals,
            transitions: vec![],
        }
    }

    /// The transducer accepting nothing.
    pub fn empty_language() -> Fst {
        let mut states = StateSet::new();
        states.insert(StateId::ZERO);

        Fst {
            alphabet: Alphabet::new(),
            states,
            initial: StateId::ZERO,
            finals: StateSet::new(),
            transitions: vec![],
        }
    }

    /// Declared alphabet of the transducer.
    #[inline(always)]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// States of the transducer.
    #[inline(always)]
    pub fn states(&self) -> &StateSet {
        &self.states
    }

    /// Initial state.
    #[inline(always)]
    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// Final states.
    #[inline(always)]
    pub fn finals(&self) -> &StateSet {
        &self.finals
    }

    /// Transitions of the transducer.
    #[inline(always)]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Whether the state is final.
    #[inline(always)]
    pub fn is_final(&self, state: StateId) -> bool {
        self.finals.contains(&state)
    }

    /// Iterates over the arcs leaving `state`.
    pub fn arcs_from(&self, state: StateId) -> impl Iterator<Item = &Transition> {
        self.transitions.iter().filter(move |t| t.source() == state)
    }

    /// Whether any arc is a free move consuming and producing nothing.
    ///
    /// The product construction requires its operands to be free of such
    /// arcs.
    pub fn has_epsilon_arcs(&self) -> bool {
        self.transitions.iter().any(|t| t.is_epsilon())
    }

    /// Checks the record's internal invariants.
    ///
    /// The initial state and all finals lie in the state set, every arc
    /// endpoint lies in the state set, and ordinary arc symbols are
    /// declared in the alphabet.
    pub fn is_consistent(&self) -> bool {
        if !self.states.contains(&self.initial) {
            return false;
        }
        if !self.finals.is_subset(&self.states) {
            return false;
        }

        self.transitions.iter().all(|t| {
            self.states.contains(&t.source())
                && self.states.contains(&t.target())
                && (t.input().is_reserved() || self.alphabet.contains(t.input()))
                && (t.output().is_reserved() || self.alphabet.contains(t.output()))
        })
    }

    /// Whether `input` lies in the input projection of the relation.
    ///
    /// Walks the transducer over the input tape only: ε-arcs on the
    /// input side consume nothing, and `?`/`@` on the input side match
    /// any symbol outside the declared alphabet.
    pub fn accepts_input(&self, input: &[Symbol]) -> bool {
        let mut seen: HashSet<(StateId, usize)> = HashSet::new();
        let mut agenda = vec![(self.initial, 0usize)];

        while let Some((state, pos)) = agenda.pop() {
            if !seen.insert((state, pos)) {
                continue;
            }

            if pos == input.len() && self.is_final(state) {
                return true;
            }

            for arc in self.arcs_from(state) {
                match arc.input() {
                    Symbol::Epsilon => agenda.push((arc.target(), pos)),
                    Symbol::Unknown | Symbol::Identity => {
                        if pos < input.len() && !self.alphabet.contains(&input[pos]) {
                            agenda.push((arc.target(), pos + 1));
                        }
                    }
                    sym => {
                        if pos < input.len() && &input[pos] == sym {
                            agenda.push((arc.target(), pos + 1));
                        }
                    }
                }
            }
        }

        false
    }

    /// Whether `text` is accepted on the input tape, one symbol per char.
    pub fn accepts_text(&self, text: &str) -> bool {
        let symbols: Vec<Symbol> = text
            .chars()
            .map(|c| Symbol::Concrete(c.to_string().into()))
            .collect();
        self.accepts_input(&symbols)
    }

    /// Whether every state has at most one arc per `(input, output)` label.
    pub fn is_deterministic(&self) -> bool {
        let mut seen = HashSet::new();
        self.transitions
            .iter()
            .all(|t| seen.insert((t.source(), t.input().clone(), t.output().clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(token: &str) -> Symbol {
        Symbol::concrete(token)
    }

    fn single_arc_fst() -> Fst {
        let mut states = StateSet::new();
        states.insert(StateId(0));
        states.insert(StateId(1));
        let mut finals = StateSet::new();
        finals.insert(StateId(1));

        Fst {
            alphabet: Alphabet::from_symbols([sym("a")]),
            states,
            initial: StateId(0),
            finals,
            transitions: vec![Transition::new(StateId(0), sym("a"), StateId(1), sym("a"))],
        }
    }

    #[test]
    fn epsilon_language_accepts_only_empty() {
        let fst = Fst::epsilon_language();
        assert!(fst.is_consistent());
        assert!(fst.accepts_text(""));
        assert!(!fst.accepts_text("a"));
    }

    #[test]
    fn empty_language_accepts_nothing() {
        let fst = Fst::empty_language();
        assert!(fst.is_consistent());
        assert!(!fst.accepts_text(""));
        assert!(!fst.accepts_text("a"));
    }

    #[test]
    fn single_arc_acceptance() {
        let fst = single_arc_fst();
        assert!(fst.is_consistent());
        assert!(fst.accepts_text("a"));
        assert!(!fst.accepts_text(""));
        assert!(!fst.accepts_text("b"));
        assert!(!fst.accepts_text("aa"));
    }

    #[test]
    fn unknown_arc_matches_only_outside_alphabet() {
        let mut fst = single_arc_fst();
        fst.transitions.push(Transition::new(
            StateId(0),
            Symbol::Unknown,
            StateId(1),
            Symbol::Unknown,
        ));

        // "a" still goes through its own arc, everything else through ?
        assert!(fst.accepts_text("a"));
        assert!(fst.accepts_text("b"));
        assert!(fst.accepts_text("z"));
    }

    #[test]
    fn inconsistent_when_arc_leaves_state_set() {
        let mut fst = single_arc_fst();
        fst.transitions
            .push(Transition::new(StateId(0), sym("a"), StateId(7), sym("a")));
        assert!(!fst.is_consistent());
    }

    #[test]
    fn inconsistent_when_symbol_undeclared() {
        let mut fst = single_arc_fst();
        fst.transitions
            .push(Transition::new(StateId(0), sym("b"), StateId(1), sym("b")));
        assert!(!fst.is_consistent());
    }

    #[test]
    fn epsilon_arcs_detected() {
        let mut fst = single_arc_fst();
        assert!(!fst.has_epsilon_arcs());
        fst.transitions
            .push(Transition::epsilon(StateId(0), StateId(1)));
        assert!(fst.has_epsilon_arcs());
    }

    #[test]
    fn serde_round_trip() {
        let fst = single_arc_fst();
        let json = serde_json::to_string(&fst).unwrap();
        let back: Fst = serde_json::from_str(&json).unwrap();

        assert_eq!(back.initial(), fst.initial());
        assert_eq!(back.states(), fst.states());
        assert_eq!(back.finals(), fst.finals());
        assert_eq!(back.transitions(), fst.transitions());
        assert!(back.accepts_text("a"));
    }
}
