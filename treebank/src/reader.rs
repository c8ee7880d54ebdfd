#![deny(warnings)]

use crate::error::TreeError;
use crate::tree::Tree;
use lexers::{BracketToken, BracketTokenizer, Scanner};
use std::str::{Chars, FromStr};


struct TreeReader<'a> {
    tokens: Scanner<BracketTokenizer<Chars<'a>>>,
    tree: usize, // index of the tree being read
}

impl<'a> TreeReader<'a> {
    fn new(src: &'a str) -> Self {
        TreeReader{tokens: BracketTokenizer::scanner(src), tree: 0}
    }

    // Read the next top-level tree, None at end of input
    fn read_tree(&mut self) -> Result<Option<Tree>, TreeError> {
        let tree = match self.tokens.next() {
            None => return Ok(None),
            Some(BracketToken::Open) => self.read_node(true)?,
            Some(BracketToken::Close) =>
                return Err(TreeError::UnbalancedClose{tree: self.tree}),
            Some(BracketToken::Atom(atom)) =>
                return Err(TreeError::UnexpectedAtom{atom, tree: self.tree}),
        };
        // done with this tree, drop buffered tokens
        self.tokens.ignore();
        self.tree += 1;
        Ok(Some(tree))
    }

    // Called right after consuming an opening bracket
    fn read_node(&mut self, top: bool) -> Result<Tree, TreeError> {
        let mut label = String::new();
        if let Some(BracketToken::Atom(atom)) = self.tokens.peek() {
            self.tokens.next();
            label = atom;
        }
        let mut children = Vec::new();
        loop {
            match self.tokens.next() {
                None => return Err(TreeError::Unclosed{label, tree: self.tree}),
                Some(BracketToken::Close) => break,
                Some(BracketToken::Open) => children.push(self.read_node(false)?),
                Some(BracketToken::Atom(word)) => children.push(Tree::Leaf(word)),
            }
        }
        if !label.is_empty() {
            return Ok(Tree::Node(label, children));
        }
        // Treebanks often wrap each tree in an unlabeled bracket: ( (S ...) )
        if top && children.len() == 1 && !children[0].is_leaf() {
            return Ok(children.swap_remove(0));
        }
        Err(TreeError::MissingLabel{tree: self.tree})
    }
}

/// Read every tree in `src`. Trees may span several lines and several trees
/// may share a line; only the bracket structure delimits them.
pub fn read_trees(src: &str) -> Result<Vec<Tree>, TreeError> {
    let mut reader = TreeReader::new(src);
    let mut trees = Vec::new();
    while let Some(tree) = reader.read_tree()? {
        trees.push(tree);
    }
    Ok(trees)
}

impl FromStr for Tree {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Tree, TreeError> {
        let mut trees = read_trees(s)?;
        match trees.len() {
            0 => Err(TreeError::Empty),
            1 => Ok(trees.swap_remove(0)),
            count => Err(TreeError::NotSingle{count}),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
