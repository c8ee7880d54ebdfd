#![deny(warnings)]

use crate::grammar::Symbol;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use treebank::Tree;

#[derive(Debug, Clone, PartialEq)]
pub enum Children {
    Terminal(Symbol),
    Binary(Arc<Derivation>, Arc<Derivation>),
}

/// Best way found to derive `label` over some span. Subderivations are
/// shared with the chart cells they came from and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    pub label: Symbol,
    /// Cumulative log-probability of the whole subtree.
    pub score: f64,
    pub children: Children,
}

impl Derivation {
    pub fn leaf(label: Symbol, score: f64, word: Symbol) -> Derivation {
        Derivation{label, score, children: Children::Terminal(word)}
    }

    pub fn binary(label: Symbol, score: f64,
                  left: Arc<Derivation>, right: Arc<Derivation>) -> Derivation {
        Derivation{label, score, children: Children::Binary(left, right)}
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.children, Children::Terminal(_))
    }

    pub fn probability(&self) -> f64 {
        self.score.exp()
    }

    /// Words covered, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(d) = stack.pop() {
            match &d.children {
                Children::Terminal(word) => out.push(word.as_ref()),
                Children::Binary(left, right) => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        out
    }

    /// Number of tokens covered.
    pub fn width(&self) -> usize {
        match &self.children {
            Children::Terminal(_) => 1,
            Children::Binary(left, right) => left.width() + right.width(),
        }
    }

    /// Binarized tree with the same labels, see `Tree::un_chomsky_normal_form`
    /// to recover the original shape.
    pub fn to_tree(&self) -> Tree {
        match &self.children {
            Children::Terminal(word) =>
                Tree::node(self.label.as_ref(), vec![Tree::leaf(word.as_ref())]),
            Children::Binary(left, right) =>
                Tree::node(self.label.as_ref(), vec![left.to_tree(), right.to_tree()]),
        }
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.children {
            Children::Terminal(word) => write!(f, "({} {})", self.label, word),
            Children::Binary(left, right) => write!(f, "({} {} {})", self.label, left, right),
        }
    }
}

/// Best derivation per nonterminal over one span, in discovery order.
pub type Cell = IndexMap<Symbol, Arc<Derivation>>;

/// Triangular table of cells for every half-open span `[start, end)` of the
/// input, `0 <= start < end <= n`.
#[derive(Debug, Clone)]
pub struct Chart {
    n: usize,
    cells: Vec<Cell>,
}

impl Chart {
    pub fn new(n: usize) -> Chart {
        Chart{n, cells: vec![Cell::new(); n * (n + 1) / 2]}
    }

    // cells laid out by start position, each row holding end = start+1..=n
    fn offset(&self, start: usize, end: usize) -> Option<usize> {
        if start >= end || end > self.n {
            return None;
        }
        Some(start * (2 * self.n - start + 1) / 2 + (end - start - 1))
    }

    /// Number of input tokens the chart spans.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn cell(&self, start: usize, end: usize) -> Option<&Cell> {
        self.offset(start, end).map(|idx| &self.cells[idx])
    }

    pub(crate) fn set_cell(&mut self, start: usize, end: usize, cell: Cell) {
        if let Some(idx) = self.offset(start, end) {
            self.cells[idx] = cell;
        }
    }

    pub fn best(&self, start: usize, end: usize, label: &str) -> Option<&Arc<Derivation>> {
        self.cell(start, end).and_then(|cell| cell.get(label))
    }

    /// Best derivation of `label` over the whole input.
    pub fn root(&self, label: &str) -> Option<&Arc<Derivation>> {
        self.best(0, self.n, label)
    }

    /// Everything covering the whole input, highest score first.
    pub fn root_candidates(&self) -> Vec<&Arc<Derivation>> {
        let mut roots: Vec<_> = self.cell(0, self.n)
            .map(|cell| cell.values().collect())
            .unwrap_or_default();
        roots.sort_by(|a, b| b.score.total_cmp(&a.score));
        roots
    }

    /// Total derivations stored across all cells.
    pub fn num_entries(&self) -> usize {
        self.cells.iter().map(Cell::len).sum()
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Cell, Chart, Derivation};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn leaf(label: &str, score: f64, word: &str) -> Arc<Derivation> {
        Arc::new(Derivation::leaf(label.into(), score, word.into()))
    }

    #[test]
    fn derivation_helpers() {
        let dt = leaf("DT", -0.5, "a");
        let nn = leaf("NN", -1.0, "knife");
        let np = Derivation::binary("NP".into(), -2.0, dt.clone(), nn);
        assert_eq!(np.leaves(), vec!["a", "knife"]);
        assert_eq!(np.width(), 2);
        assert!(!np.is_terminal());
        assert!(dt.is_terminal());
        assert_eq!(np.to_string(), "(NP (DT a) (NN knife))");
        assert_eq!(np.to_tree().to_string(), np.to_string());
        assert!((np.probability() - (-2.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn chart_spans() {
        let mut chart = Chart::new(3);
        assert_eq!(chart.len(), 3);
        let mut seen = std::collections::HashSet::new();
        for start in 0..3 {
            for end in start + 1..=3 {
                assert!(seen.insert(chart.offset(start, end)));
            }
        }
        assert_eq!(seen.len(), 6);
        assert!(chart.cell(1, 1).is_none());
        assert!(chart.cell(2, 4).is_none());

        let mut cell = Cell::new();
        cell.insert("A".into(), leaf("A", -3.0, "x"));
        cell.insert("B".into(), leaf("B", -1.0, "x"));
        chart.set_cell(0, 3, cell);
        assert_eq!(chart.num_entries(), 2);
        assert_eq!(chart.root("A").map(|d| d.score), Some(-3.0));
        assert!(chart.best(0, 1, "A").is_none());
        let order: Vec<_> = chart.root_candidates().iter().map(|d| d.label.to_string()).collect();
        assert_eq!(order, vec!["B", "A"]);
    }
}
