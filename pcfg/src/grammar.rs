#![deny(warnings)]

use std::fmt;
use std::sync::Arc;

/// Grammar label or word. Compared and hashed by string value; cheap to
/// clone and shareable across threads.
pub type Symbol = Arc<str>;

/// Right-hand side of a CNF production: one word or two nonterminals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rhs {
    Terminal(Symbol),
    Binary(Symbol, Symbol),
}

impl Rhs {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Rhs::Terminal(_))
    }
}

impl fmt::Display for Rhs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rhs::Terminal(word) => write!(f, "'{}'", word),
            Rhs::Binary(left, right) => write!(f, "{} {}", left, right),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Production {
    pub lhs: Symbol,
    pub rhs: Rhs,
}

impl Production {
    /// `lhs -> 'word'`
    pub fn terminal(lhs: &str, word: &str) -> Production {
        Production{lhs: lhs.into(), rhs: Rhs::Terminal(word.into())}
    }

    /// `lhs -> left right`
    pub fn binary(lhs: &str, left: &str, right: &str) -> Production {
        Production{lhs: lhs.into(), rhs: Rhs::Binary(left.into(), right.into())}
    }

    pub fn is_lexical(&self) -> bool {
        self.rhs.is_terminal()
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.lhs, self.rhs)
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Production, Rhs};
    use std::collections::HashSet;

    #[test]
    fn production_display() {
        assert_eq!(Production::binary("S", "NP+PRP", "VP").to_string(), "S -> NP+PRP VP");
        assert_eq!(Production::terminal("NN", "food").to_string(), "NN -> 'food'");
    }

    #[test]
    fn production_value_identity() {
        let a = Production::binary("NP", "DT", "NN");
        let b = Production{lhs: "NP".into(), rhs: Rhs::Binary("DT".into(), "NN".into())};
        assert_eq!(a, b);
        let set: HashSet<_> = vec![a, b, Production::terminal("NP", "DT")].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(Production::terminal("DT", "a").is_lexical());
        assert!(!Production::binary("NP", "DT", "NN").is_lexical());
    }
}
