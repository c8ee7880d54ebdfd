use thiserror::Error;

/// Errors reading bracketed trees. `tree` is the 0-based position of the
/// offending tree within the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    #[error("Empty input: no tree found")]
    Empty,

    #[error("Expected a single tree, found {count}")]
    NotSingle { count: usize },

    #[error("Unbalanced ')' in tree {tree}")]
    UnbalancedClose { tree: usize },

    #[error("Unclosed '(' for node '{label}' in tree {tree}")]
    Unclosed { label: String, tree: usize },

    #[error("Expected '(' but found '{atom}' in tree {tree}")]
    UnexpectedAtom { atom: String, tree: usize },

    #[error("Node without a label in tree {tree}")]
    MissingLabel { tree: usize },
}
