//! Parse-tree evaluation.
//!
//! Walks the tree the external parser produced and calls the
//! constructions in the right order. Dispatch is on the node tag;
//! anything unrecognized is an error carrying the offending fragment.
use crate::ast::{ParseNode, SYMBOL_TAG};
use crate::symbol::Symbol;
use crate::transducer::Fst;

use super::determinize::determinize;
use super::error::EvalError;
use super::product;
use super::thompson;
use super::CompilerConfig;

/// Tag of the top-level marker node.
const REGEX_TAG: &str = "regex";
/// Tag of a mapping node with one or two symbol leaves.
const PAIR_TAG: &str = "pair";
/// Tag of a concatenation node.
const CONCAT_TAG: &str = "concat";
/// Tag of a union node.
const UNION_TAG: &str = "union";
/// Tag of a Kleene-star node.
const STAR_TAG: &str = "star";

/// Decodes the token of a symbol leaf.
fn leaf_symbol(node: &ParseNode) -> Result<Symbol, EvalError> {
    match node.token() {
        Some(token) if node.tag() == SYMBOL_TAG => Ok(Symbol::from_token(token)),
        _ => Err(EvalError::BadSymbol {
            tag: node.tag().into(),
        }),
    }
}

/// A union operand must be ε-free before the product construction; the
/// bridges of an inner concatenation are folded away here.
fn epsilon_free(fst: Fst) -> Fst {
    if fst.has_epsilon_arcs() {
        log::debug!("evaluate: determinizing an epsilon-bearing union operand");
        determinize(&fst)
    } else {
        fst
    }
}

/// Evaluates one parse-tree node against an accumulator machine.
///
/// The top-level marker threads the accumulator through its children;
/// every other node builds its value from its own children alone.
pub(crate) fn evaluate(
    node: &ParseNode,
    acc: Fst,
    config: &CompilerConfig,
) -> Result<Fst, EvalError> {
    let fst = match node.tag() {
        REGEX_TAG => {
            let mut acc = acc;
            for child in node.children() {
                acc = evaluate(child, acc, config)?;
            }
            acc
        }
        SYMBOL_TAG => {
            // a bare symbol is the mapping of that symbol to itself
            let symbol = leaf_symbol(node)?;
            thompson::symbol_pair(symbol.clone(), symbol)
        }
        PAIR_TAG => match node.children() {
            [x] => {
                let symbol = leaf_symbol(x)?;
                thompson::symbol_pair(symbol.clone(), symbol)
            }
            [x, y] => thompson::symbol_pair(leaf_symbol(x)?, leaf_symbol(y)?),
            children => {
                return Err(EvalError::Arity {
                    tag: node.tag().into(),
                    expected: "1 or 2",
                    found: children.len(),
                })
            }
        },
        CONCAT_TAG => {
            let mut children = node.children().iter();
            let Some(first) = children.next() else {
                return Err(EvalError::Arity {
                    tag: node.tag().into(),
                    expected: "at least 1",
                    found: 0,
                });
            };

            let mut result = evaluate(first, acc.clone(), config)?;
            for child in children {
                let rhs = evaluate(child, acc.clone(), config)?;
                result = thompson::concatenate(&result, &rhs);
                check_budget(&result, config)?;
            }
            result
        }
        UNION_TAG => match node.children() {
            [a, b] => {
                let lhs = epsilon_free(evaluate(a, acc.clone(), config)?);
                let rhs = epsilon_free(evaluate(b, acc, config)?);
                product::union(&lhs, &rhs)?
            }
            children => {
                return Err(EvalError::Arity {
                    tag: node.tag().into(),
                    expected: "2",
                    found: children.len(),
                })
            }
        },
        STAR_TAG => match node.children() {
            [child] => thompson::kleene_star(&evaluate(child, acc, config)?),
            children => {
                return Err(EvalError::Arity {
                    tag: node.tag().into(),
                    expected: "1",
                    found: children.len(),
                })
            }
        },
        _ => {
            return Err(EvalError::UnknownTag {
                tag: node.tag().into(),
            })
        }
    };

    check_budget(&fst, config)?;
    Ok(fst)
}

fn check_budget(fst: &Fst, config: &CompilerConfig) -> Result<(), EvalError> {
    if let Some(limit) = config.max_states {
        if fst.states().len() > limit {
            return Err(EvalError::StateBudget {
                limit,
                reached: fst.states().len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::Compiler;
    use crate::types::StateId;

    fn compile(node: &ParseNode) -> Result<Fst, EvalError> {
        Compiler::default().compile(node)
    }

    #[test]
    fn single_symbol() {
        let fst = compile(&ParseNode::leaf("a")).unwrap();

        assert_eq!(fst.states().len(), 2);
        assert_eq!(fst.transitions().len(), 1);
        assert!(fst.is_final(StateId(1)));
        assert!(fst.accepts_text("a"));
        assert!(!fst.accepts_text("b"));
    }

    #[test]
    fn explicit_mapping() {
        let tree = ParseNode::interior("pair", vec![ParseNode::leaf("a"), ParseNode::leaf("b")]);
        let fst = compile(&tree).unwrap();

        assert!(fst.accepts_text("a"));
        assert!(!fst.accepts_text("b"));
        assert_eq!(fst.transitions()[0].output(), &Symbol::concrete("b"));
    }

    #[test]
    fn concatenation() {
        let tree = ParseNode::interior("concat", vec![ParseNode::leaf("a"), ParseNode::leaf("b")]);
        let fst = compile(&tree).unwrap();

        assert!(fst.states().len() >= 3);
        assert!(fst.transitions().iter().any(|t| t.is_epsilon()));
        assert!(fst.accepts_text("ab"));
        assert!(!fst.accepts_text("a"));
        assert!(!fst.accepts_text("ba"));
    }

    #[test]
    fn union_of_two_symbols() {
        let tree = ParseNode::interior("union", vec![ParseNode::leaf("a"), ParseNode::leaf("b")]);
        let fst = compile(&tree).unwrap();

        assert!(fst.accepts_text("a"));
        assert!(fst.accepts_text("b"));
        assert!(!fst.accepts_text(""));
        assert!(!fst.has_epsilon_arcs());
    }

    #[test]
    fn union_over_concatenations() {
        let ab = ParseNode::interior("concat", vec![ParseNode::leaf("a"), ParseNode::leaf("b")]);
        let tree = ParseNode::interior("union", vec![ab, ParseNode::leaf("c")]);
        let fst = compile(&tree).unwrap();

        assert!(fst.accepts_text("ab"));
        assert!(fst.accepts_text("c"));
        assert!(!fst.accepts_text("a"));
        assert!(!fst.accepts_text("abc"));
    }

    #[test]
    fn kleene_star() {
        let tree = ParseNode::interior("star", vec![ParseNode::leaf("a")]);
        let fst = compile(&tree).unwrap();

        for text in ["", "a", "aa", "aaa"] {
            assert!(fst.accepts_text(text), "rejected {:?}", text);
        }
        assert!(!fst.accepts_text("b"));
        assert!(fst.is_deterministic());
        assert!(!fst.has_epsilon_arcs());
    }

    #[test]
    fn star_under_union() {
        let star = ParseNode::interior("star", vec![ParseNode::leaf("a")]);
        let tree = ParseNode::interior("union", vec![star, ParseNode::leaf("b")]);
        let fst = compile(&tree).unwrap();

        for text in ["", "a", "aa", "b"] {
            assert!(fst.accepts_text(text), "rejected {:?}", text);
        }
        assert!(!fst.accepts_text("ba"));
    }

    #[test]
    fn top_level_marker_passes_the_accumulator() {
        let fst = compile(&ParseNode::interior("regex", vec![])).unwrap();
        assert!(fst.accepts_text(""));

        let tree = ParseNode::interior("regex", vec![ParseNode::leaf("a")]);
        let fst = compile(&tree).unwrap();
        assert!(fst.accepts_text("a"));
    }

    #[test]
    fn reserved_epsilon_leaf() {
        let tree = ParseNode::interior("concat", vec![ParseNode::leaf("ε"), ParseNode::leaf("a")]);
        let fst = compile(&tree).unwrap();

        assert!(fst.accepts_text("a"));
        assert!(!fst.accepts_text(""));
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let tree = ParseNode::interior("compose", vec![ParseNode::leaf("a")]);
        let err = compile(&tree).unwrap_err();
        assert!(matches!(err, EvalError::UnknownTag { .. }));
        assert!(err.to_string().contains("compose"));
    }

    #[test]
    fn wrong_arity_is_an_error() {
        let tree = ParseNode::interior("star", vec![ParseNode::leaf("a"), ParseNode::leaf("b")]);
        let err = compile(&tree).unwrap_err();
        assert!(matches!(err, EvalError::Arity { found: 2, .. }));
    }

    #[test]
    fn pair_with_interior_child_is_an_error() {
        let inner = ParseNode::interior("union", vec![ParseNode::leaf("a"), ParseNode::leaf("b")]);
        let tree = ParseNode::interior("pair", vec![inner]);
        let err = compile(&tree).unwrap_err();
        assert!(matches!(err, EvalError::BadSymbol { .. }));
    }

    #[test]
    fn state_budget_is_enforced() {
        use crate::compiler::CompilerConfig;

        let config = CompilerConfig {
            max_states: Some(2),
        };
        let tree = ParseNode::interior("concat", vec![ParseNode::leaf("a"), ParseNode::leaf("b")]);
        let err = Compiler::new(config).compile(&tree).unwrap_err();
        assert!(matches!(err, EvalError::StateBudget { limit: 2, .. }));
    }
}
