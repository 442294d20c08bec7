//! Parse trees handed over by the external grammar parser.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Tag of a leaf node carrying a symbol token.
pub const SYMBOL_TAG: &str = "symbol";

/// One node of a parse tree.
///
/// Interior nodes carry a tag and children; leaves carry a symbol token.
/// The compiler dispatches on the tag and rejects tags it does not know,
/// so parsers may extend the tree format without breaking older cores.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseNode {
    tag: SmolStr,
    children: Vec<ParseNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<SmolStr>,
}

impl ParseNode {
    /// Creates an interior node.
    pub fn interior(tag: &str, children: Vec<ParseNode>) -> ParseNode {
        ParseNode {
            tag: tag.into(),
            children,
            token: None,
        }
    }

    /// Creates a leaf node carrying one symbol token.
    pub fn leaf(token: &str) -> ParseNode {
        ParseNode {
            tag: SYMBOL_TAG.into(),
            children: vec![],
            token: Some(token.into()),
        }
    }

    /// The node's tag.
    #[inline(always)]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Children of an interior node; empty for leaves.
    #[inline(always)]
    pub fn children(&self) -> &[ParseNode] {
        &self.children
    }

    /// The symbol token of a leaf node.
    #[inline(always)]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
