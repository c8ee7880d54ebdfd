#![deny(warnings)]

use crate::error::Error;
use crate::grammar::{Production, Rhs, Symbol};
use treebank::Tree;

/// A tree in Chomsky Normal Form. Every node either covers a single word or
/// has exactly two nonterminal children, so counting and parsing never have
/// to re-check arity.
#[derive(Debug, Clone, PartialEq)]
pub enum CnfTree {
    Preterminal {
        label: Symbol,
        word: Symbol,
    },
    Binary {
        label: Symbol,
        left: Box<CnfTree>,
        right: Box<CnfTree>,
    },
}

impl CnfTree {
    pub fn label(&self) -> &Symbol {
        match self {
            CnfTree::Preterminal{label, ..} => label,
            CnfTree::Binary{label, ..} => label,
        }
    }

    /// The production rooted at this node.
    pub fn production(&self) -> Production {
        match self {
            CnfTree::Preterminal{label, word} =>
                Production{lhs: label.clone(), rhs: Rhs::Terminal(word.clone())},
            CnfTree::Binary{label, left, right} => Production{
                lhs: label.clone(),
                rhs: Rhs::Binary(left.label().clone(), right.label().clone()),
            },
        }
    }

    /// Every local production in pre-order: node, left subtree, right subtree.
    pub fn productions(&self) -> Vec<Production> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(tree) = stack.pop() {
            out.push(tree.production());
            if let CnfTree::Binary{left, right, ..} = tree {
                stack.push(right);
                stack.push(left);
            }
        }
        out
    }

    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(tree) = stack.pop() {
            match tree {
                CnfTree::Preterminal{word, ..} => out.push(word.as_ref()),
                CnfTree::Binary{left, right, ..} => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        out
    }
}

fn invalid(label: &str, arity: usize, reason: &'static str) -> Error {
    Error::InvalidTree{label: label.to_string(), arity, reason}
}

impl TryFrom<&Tree> for CnfTree {
    type Error = Error;

    fn try_from(tree: &Tree) -> Result<CnfTree, Error> {
        let (label, children) = match tree {
            Tree::Leaf(word) =>
                return Err(invalid(word, 0, "bare word where a labeled node was expected")),
            Tree::Node(label, children) => (label, children),
        };
        match children.as_slice() {
            [Tree::Leaf(word)] => Ok(CnfTree::Preterminal{
                label: label.as_str().into(),
                word: word.as_str().into(),
            }),
            [left @ Tree::Node(..), right @ Tree::Node(..)] => Ok(CnfTree::Binary{
                label: label.as_str().into(),
                left: Box::new(CnfTree::try_from(left)?),
                right: Box::new(CnfTree::try_from(right)?),
            }),
            [] => Err(invalid(label, 0, "node without children")),
            [Tree::Node(..)] => Err(invalid(label, 1, "unary nonterminal production")),
            [_, _] => Err(invalid(label, 2, "binary production with a terminal child")),
            more => Err(invalid(label, more.len(), "more than two children")),
        }
    }
}

impl From<&CnfTree> for Tree {
    fn from(tree: &CnfTree) -> Tree {
        match tree {
            CnfTree::Preterminal{label, word} =>
                Tree::node(label.as_ref(), vec![Tree::leaf(word.as_ref())]),
            CnfTree::Binary{label, left, right} =>
                Tree::node(label.as_ref(), vec![Tree::from(&**left), Tree::from(&**right)]),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::CnfTree;
    use crate::{Error, Production};
    use pretty_assertions::assert_eq;
    use treebank::Tree;

    fn cnf(src: &str) -> Result<CnfTree, Error> {
        let tree: Tree = src.parse().expect("well formed brackets");
        CnfTree::try_from(&tree)
    }

    #[test]
    fn accepts_cnf() -> Result<(), Error> {
        let src = "(S (NP+PRP I) (VP (VBP eat) (NP+NN food)))";
        let t = cnf(src)?;
        assert_eq!(t.label().as_ref(), "S");
        assert_eq!(t.leaves(), vec!["I", "eat", "food"]);
        assert_eq!(Tree::from(&t).to_string(), src);
        Ok(())
    }

    #[test]
    fn productions_preorder() -> Result<(), Error> {
        let t = cnf("(S (NP+PRP I) (VP (VBP eat) (NP+NN food)))")?;
        assert_eq!(t.productions(), vec![
            Production::binary("S", "NP+PRP", "VP"),
            Production::terminal("NP+PRP", "I"),
            Production::binary("VP", "VBP", "NP+NN"),
            Production::terminal("VBP", "eat"),
            Production::terminal("NP+NN", "food"),
        ]);
        Ok(())
    }

    #[test]
    fn rejects_non_cnf() {
        let reject = |src: &str, label: &str, arity: usize| match cnf(src) {
            Err(Error::InvalidTree{label: l, arity: a, ..}) => {
                assert_eq!(l, label);
                assert_eq!(a, arity);
            }
            other => panic!("{} should be rejected, got {:?}", src, other),
        };
        // unary chain
        reject("(S (NP (PRP I)) (VP run))", "NP", 1);
        // ternary node
        reject("(S (NP I) (VP run) (PU .))", "S", 3);
        // word beside a node
        reject("(S (NP I) run)", "S", 2);
        reject("(S I run)", "S", 2);
        reject("(S (NP I) (VP))", "VP", 0);
    }

    #[test]
    fn rejects_bare_leaf() {
        assert!(matches!(CnfTree::try_from(&Tree::leaf("word")),
                         Err(Error::InvalidTree{arity: 0, ..})));
    }
}
