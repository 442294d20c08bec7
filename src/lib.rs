/*! Regular expressions over rational relations, compiled to finite-state transducers.

Implements the transducer calculus of the Xerox tool family: transitions
carry an input and an output symbol, and the reserved symbols `?` and `@`
denote symbols outside the declared alphabet and the identity relation on
such symbols. Expressions arrive as parse trees from an external grammar
parser and are compiled with the rational operations: single-symbol
mappings, concatenation, union, intersection, subtraction and Kleene
closure.

# Usage examples

```
use rexfst::ast::ParseNode;
use rexfst::compiler::Compiler;

let tree = ParseNode::interior(
    "union",
    vec![ParseNode::leaf("a"), ParseNode::leaf("b")],
);
let compiler = Compiler::default();
let fst = compiler.compile(&tree).unwrap();
assert!(fst.accepts_text("a"));
assert!(fst.accepts_text("b"));
```

The compiled value is a plain record; serialization and graph rendering
live in consumer crates.

*/

#![warn(missing_docs)]
pub mod ast;
pub mod compiler;
pub mod symbol;
pub mod transducer;

/// Core types for states and state sets.
///
/// This module contains type aliases and newtypes used throughout the
/// transducer API.
pub mod types;
