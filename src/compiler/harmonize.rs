//! Alphabet harmonization.
//!
//! Before intersection, subtraction or the product-construction union,
//! both machines must agree on what "unknown" means: each machine's
//! wildcard arcs are expanded against the ordinary symbols the other
//! machine declares and this one lacks.
use crate::symbol::Symbol;
use crate::transducer::{Fst, Transition};

/// Harmonizes two machines against each other's alphabets.
///
/// Each side's wildcard arcs are expanded over the ordinary symbols only
/// the other side declares. Neither alphabet is enlarged here; the
/// product construction that follows computes the union alphabet.
pub fn harmonize(l1: &Fst, l2: &Fst) -> (Fst, Fst) {
    let n1 = l1.alphabet().missing_from(l2.alphabet());
    let n2 = l2.alphabet().missing_from(l1.alphabet());

    log::debug!(
        "harmonize: expanding {} symbols left, {} right",
        n1.len(),
        n2.len()
    );
    (expand_unknowns(l1, &n1), expand_unknowns(l2, &n2))
}

/// Expands the wildcard arcs of one machine over `missing` symbols.
///
/// `@:@` gains one identity arc per missing symbol; `x:?` and `?:x`
/// gain the corresponding one-sided arcs; `?:?` gains every non-identity
/// pair of missing symbols plus the half-unknown arcs. The original
/// wildcard arcs are kept: `?` continues to denote symbols outside the
/// now-enlarged alphabet. Arc symbols added here are declared by the
/// caller, not by this pass.
pub fn expand_unknowns(fst: &Fst, missing: &[Symbol]) -> Fst {
    let mut transitions = fst.transitions.clone();

    for arc in &fst.transitions {
        match (arc.input(), arc.output()) {
            (Symbol::Identity, Symbol::Identity) => {
                for n in missing {
                    transitions.push(arc.relabel(n.clone(), n.clone()));
                }
            }
            (Symbol::Unknown, Symbol::Unknown) => {
                for n1 in missing {
                    for n2 in missing {
                        if n1 != n2 {
                            transitions.push(arc.relabel(n1.clone(), n2.clone()));
                        }
                    }
                }
                for n in missing {
                    transitions.push(arc.relabel(n.clone(), Symbol::Unknown));
                    transitions.push(arc.relabel(Symbol::Unknown, n.clone()));
                }
            }
            (Symbol::Unknown, output) => {
                for n in missing {
                    transitions.push(arc.relabel(n.clone(), output.clone()));
                }
            }
            (input, Symbol::Unknown) => {
                for n in missing {
                    transitions.push(arc.relabel(input.clone(), n.clone()));
                }
            }
            _ => {}
        }
    }

    Fst {
        alphabet: fst.alphabet().clone(),
        states: fst.states().clone(),
        initial: fst.initial(),
        finals: fst.finals().clone(),
        transitions,
    }
}
