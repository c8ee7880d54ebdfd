#![deny(warnings)]

use crate::tree::Tree;

/// Options for joining unary chains `A -> B -> ...` into a single `A+B` node.
#[derive(Debug, Clone)]
pub struct CollapseOptions {
    /// Also absorb preterminals, eg: `(NP (PRP I))` -> `(NP+PRP I)`
    pub collapse_pos: bool,
    /// Also collapse a unary chain starting at the root
    pub collapse_root: bool,
    pub join_char: char,
}

impl Default for CollapseOptions {
    fn default() -> Self {
        CollapseOptions{collapse_pos: true, collapse_root: true, join_char: '+'}
    }
}

/// Markovization used to factor n-ary nodes into binary ones.
#[derive(Debug, Clone)]
pub struct MarkovOptions {
    /// Number of siblings kept in synthetic labels, None keeps them all.
    pub horizontal: Option<usize>,
    /// Ancestors annotated on phrasal labels, 0 means none.
    pub vertical: usize,
    pub child_char: char,
    pub parent_char: char,
    pub unary_char: char,
}

impl Default for MarkovOptions {
    fn default() -> Self {
        MarkovOptions{
            horizontal: None,
            vertical: 0,
            child_char: '|',
            parent_char: '^',
            unary_char: '+',
        }
    }
}

impl Tree {
    /// Collapse unary chains in place. After this (with `collapse_pos`) every
    /// node has either a single word or two or more nodes below it.
    pub fn collapse_unary(&mut self, opts: &CollapseOptions) {
        match self {
            Tree::Node(_, children) if !opts.collapse_root && children.len() == 1 =>
                children[0].collapse_below(opts),
            _ => self.collapse_below(opts),
        }
    }

    fn collapse_below(&mut self, opts: &CollapseOptions) {
        let Tree::Node(label, children) = self else { return };
        loop {
            let absorb = match children.as_slice() {
                [Tree::Node(_, grandchildren)] =>
                    opts.collapse_pos || matches!(grandchildren.first(), Some(Tree::Node(_, _))),
                _ => false,
            };
            if !absorb { break; }
            match children.pop() {
                Some(Tree::Node(child_label, grandchildren)) => {
                    label.push(opts.join_char);
                    label.push_str(&child_label);
                    *children = grandchildren;
                }
                _ => break,
            }
        }
        for child in children.iter_mut() {
            child.collapse_below(opts);
        }
    }

    /// Right-factor every node with more than two children into a chain of
    /// synthetic binary nodes, in place.
    ///   `(A B C D)` -> `(A B (A|<C-D> C D))`
    /// With `vertical > 0` phrasal nodes also carry their ancestors: `NP^<S>`.
    pub fn chomsky_normal_form(&mut self, opts: &MarkovOptions) {
        let root = vec![self.label().to_string()];
        self.factor(opts, &root, true);
    }

    fn factor(&mut self, opts: &MarkovOptions, parents: &[String], is_root: bool) {
        let Tree::Node(label, children) = self else { return };
        let original = label.clone();

        let mut parent_suffix = String::new();
        let mut parents = parents.to_vec();
        if opts.vertical > 0 && !is_root && matches!(children.first(), Some(Tree::Node(_, _))) {
            parent_suffix = format!("{}<{}>", opts.parent_char, parents.join("-"));
            label.push_str(&parent_suffix);
            parents = std::iter::once(original.clone())
                .chain(parents.into_iter().take(opts.vertical - 1))
                .collect();
        }

        // synthetic labels name the siblings as they were before annotation
        let sibling_labels: Vec<String> = children.iter()
            .map(|c| c.label().to_string())
            .collect();
        for child in children.iter_mut() {
            child.factor(opts, &parents, false);
        }

        let n = children.len();
        if n <= 2 { return; }
        let window = opts.horizontal.unwrap_or(usize::MAX);
        let synthetic = |i: usize| format!("{}{}<{}>{}",
            original, opts.child_char,
            sibling_labels[i..].iter().take(window).cloned().collect::<Vec<_>>().join("-"),
            parent_suffix);

        let mut kids = std::mem::take(children).into_iter();
        let mut head: Vec<Tree> = kids.by_ref().take(n - 2).collect();
        let mut tail = Tree::Node(synthetic(n - 2), kids.collect());
        let first = head.remove(0);
        for (i, child) in head.into_iter().enumerate().rev() {
            tail = Tree::Node(synthetic(i + 1), vec![child, tail]);
        }
        *children = vec![first, tail];
    }

    /// Undo `chomsky_normal_form` and `collapse_unary`: splice synthetic
    /// nodes into their parents, drop parent annotations and expand joined
    /// unary chains.
    pub fn un_chomsky_normal_form(&mut self, opts: &MarkovOptions) {
        let tree = std::mem::replace(self, Tree::Leaf(String::new()));
        *self = tree.unfactor(opts);
    }

    fn unfactor(self, opts: &MarkovOptions) -> Tree {
        let (label, children) = match self {
            Tree::Leaf(word) => return Tree::Leaf(word),
            Tree::Node(label, children) => (label, children),
        };
        let mut flat = Vec::with_capacity(children.len());
        for child in children {
            match child.unfactor(opts) {
                Tree::Node(l, grandchildren) if l.contains(opts.child_char) =>
                    flat.extend(grandchildren),
                other => flat.push(other),
            }
        }
        if label.contains(opts.child_char) {
            // keep it for the parent to splice
            return Tree::Node(label, flat);
        }
        let label = match label.find(opts.parent_char) {
            Some(idx) => label[..idx].to_string(),
            None => label,
        };
        // "A+B+C" -> (A (B (C ...)))
        let mut chain = label.split(opts.unary_char).rev();
        let innermost = chain.next().unwrap_or_default().to_string();
        chain.fold(Tree::Node(innermost, flat),
                   |inner, outer| Tree::Node(outer.to_string(), vec![inner]))
    }
}
