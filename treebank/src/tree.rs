#![deny(warnings)]

use std::fmt;

/// A constituency tree of arbitrary arity.
///   `(NP (DT a) (NN knife))` is
///   `Node("NP", [Node("DT", [Leaf("a")]), Node("NN", [Leaf("knife")])])`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tree {
    Leaf(String),
    Node(String, Vec<Tree>),
}

impl Tree {
    pub fn leaf(word: impl Into<String>) -> Tree {
        Tree::Leaf(word.into())
    }

    pub fn node(label: impl Into<String>, children: Vec<Tree>) -> Tree {
        Tree::Node(label.into(), children)
    }

    /// Node label, or the word itself for leaves.
    pub fn label(&self) -> &str {
        match self {
            Tree::Leaf(word) => word,
            Tree::Node(label, _) => label,
        }
    }

    pub fn children(&self) -> &[Tree] {
        match self {
            Tree::Leaf(_) => &[],
            Tree::Node(_, children) => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    /// A node whose only child is a word, eg: `(NN knife)`
    pub fn is_preterminal(&self) -> bool {
        matches!(self, Tree::Node(_, children) if matches!(children.as_slice(), [Tree::Leaf(_)]))
    }

    /// Words under this tree, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'t>(&'t self, out: &mut Vec<&'t str>) {
        match self {
            Tree::Leaf(word) => out.push(word),
            Tree::Node(_, children) => children.iter().for_each(|c| c.collect_leaves(out)),
        }
    }

    /// Leaves have height 1, a preterminal has height 2.
    pub fn height(&self) -> usize {
        1 + self.children().iter().map(Tree::height).max().unwrap_or(0)
    }

    /// Local productions as `(lhs, [rhs labels])`, in pre-order.
    pub fn productions(&self) -> Vec<(&str, Vec<&str>)> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(tree) = stack.pop() {
            if let Tree::Node(label, children) = tree {
                out.push((label.as_str(), children.iter().map(Tree::label).collect()));
                stack.extend(children.iter().rev());
            }
        }
        out
    }

    /// Multi-line rendering with box-drawing guides
    pub fn pretty(&self) -> String {
        let mut out = format!("{}\n", self.label());
        self.pretty_children("", &mut out);
        out
    }

    fn pretty_children(&self, indent: &str, out: &mut String) {
        if let Some((last, rest)) = self.children().split_last() {
            for child in rest {
                *out += &format!("{}\u{251c}\u{2500} {}\n", indent, child.label());
                child.pretty_children(&format!("{}\u{2502}  ", indent), out);
            }
            *out += &format!("{}\u{2570}\u{2500} {}\n", indent, last.label());
            last.pretty_children(&format!("{}   ", indent), out);
        }
    }
}

// Bracketed one-line form, the same notation read by `FromStr`
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tree::Leaf(word) => write!(f, "{}", word),
            Tree::Node(label, children) => {
                write!(f, "({}", label)?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Tree;
    use pretty_assertions::assert_eq;

    fn knife() -> Tree {
        Tree::node("NP", vec![
            Tree::node("DT", vec![Tree::leaf("a")]),
            Tree::node("NN", vec![Tree::leaf("knife")]),
        ])
    }

    #[test]
    fn tree_accessors() {
        let t = knife();
        assert_eq!(t.label(), "NP");
        assert_eq!(t.children().len(), 2);
        assert!(!t.is_preterminal());
        assert!(t.children()[0].is_preterminal());
        assert!(t.children()[0].children()[0].is_leaf());
        assert_eq!(t.leaves(), vec!["a", "knife"]);
        assert_eq!(t.height(), 3);
    }

    #[test]
    fn tree_productions_preorder() {
        assert_eq!(knife().productions(), vec![
            ("NP", vec!["DT", "NN"]),
            ("DT", vec!["a"]),
            ("NN", vec!["knife"]),
        ]);
    }

    #[test]
    fn tree_display() {
        assert_eq!(knife().to_string(), "(NP (DT a) (NN knife))");
    }

    #[test]
    fn tree_pretty() {
        assert_eq!(knife().pretty(), concat!(
            "NP\n",
            "\u{251c}\u{2500} DT\n",
            "\u{2502}  \u{2570}\u{2500} a\n",
            "\u{2570}\u{2500} NN\n",
            "   \u{2570}\u{2500} knife\n",
        ));
    }
}
