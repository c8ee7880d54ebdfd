#![deny(warnings)]

//! Probabilistic context-free grammars in Chomsky Normal Form.
//!
//! A `GrammarEstimator` counts productions over binarized treebank trees
//! and turns them into conditional log-probabilities plus a `ParsingIndex`
//! (rhs -> lhs). A `CkyParser` uses that index to find the most probable
//! derivation of a token sequence.
//!
//! ```
//! let trees = treebank::read_trees("(S (NP I) (VP run))").unwrap();
//! let grammar = pcfg::train(&trees).unwrap();
//! let parser = pcfg::CkyParser::new(grammar.parsing_index());
//! let best = parser.parse(&["I", "run"], "S").unwrap().unwrap();
//! assert_eq!(best.to_string(), "(S (NP I) (VP run))");
//! assert_eq!(best.score, 0.0);
//! ```

mod error;
pub use crate::error::Error;

mod grammar;
pub use crate::grammar::{Production, Rhs, Symbol};

mod cnf;
pub use crate::cnf::CnfTree;

mod index;
pub use crate::index::ParsingIndex;

mod estimator;
pub use crate::estimator::{train, GrammarEstimator};

mod chart;
pub use crate::chart::{Cell, Chart, Children, Derivation};

mod parser;
pub use crate::parser::{CkyParser, ParserConfig};
