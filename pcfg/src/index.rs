#![deny(warnings)]

use crate::grammar::{Production, Rhs, Symbol};
use indexmap::IndexMap;

/// Inverse of a scored grammar: for each right-hand side, the left-hand
/// sides that produce it along with the rule's log-probability.
///
/// Entries under one key keep the scored grammar's order, which is the
/// order the parser tries them in.
#[derive(Debug, Default, Clone)]
pub struct ParsingIndex {
    entries: IndexMap<Rhs, Vec<(Symbol, f64)>>,
    rules: usize,
}

impl ParsingIndex {
    pub fn from_scores(scores: &IndexMap<Production, f64>) -> ParsingIndex {
        let mut index = ParsingIndex::default();
        index.rebuild(scores);
        index
    }

    /// Drop everything and re-derive from `scores`.
    pub fn rebuild(&mut self, scores: &IndexMap<Production, f64>) {
        self.entries.clear();
        for (production, &score) in scores {
            self.entries.entry(production.rhs.clone())
                .or_default()
                .push((production.lhs.clone(), score));
        }
        self.rules = scores.len();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.rules = 0;
    }

    /// `(lhs, score)` pairs producing `rhs`, empty if none.
    pub fn get(&self, rhs: &Rhs) -> &[(Symbol, f64)] {
        self.entries.get(rhs).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn terminal(&self, word: &str) -> &[(Symbol, f64)] {
        self.get(&Rhs::Terminal(word.into()))
    }

    pub fn binary(&self, left: &Symbol, right: &Symbol) -> &[(Symbol, f64)] {
        self.get(&Rhs::Binary(left.clone(), right.clone()))
    }

    pub fn contains(&self, rhs: &Rhs) -> bool {
        self.entries.contains_key(rhs)
    }

    /// Number of indexed rules, ie: `(lhs, rhs)` pairs.
    pub fn len(&self) -> usize {
        self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules == 0
    }

    /// Number of distinct right-hand sides.
    pub fn num_keys(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item=(&Rhs, &[(Symbol, f64)])> {
        self.entries.iter().map(|(rhs, lhss)| (rhs, lhss.as_slice()))
    }

    /// Flatten back into `(production, score)` pairs.
    pub fn rules(&self) -> impl Iterator<Item=(Production, f64)> + '_ {
        self.iter().flat_map(|(rhs, lhss)| lhss.iter().map(move |(lhs, score)|
            (Production{lhs: lhs.clone(), rhs: rhs.clone()}, *score)))
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ParsingIndex;
    use crate::{Production, Rhs, Symbol};
    use indexmap::IndexMap;

    fn scores() -> IndexMap<Production, f64> {
        vec![
            (Production::terminal("NN", "food"), -1.0),
            (Production::binary("NP", "DT", "NN"), -0.5),
            (Production::terminal("NP+NN", "food"), -2.0),
        ].into_iter().collect()
    }

    #[test]
    fn index_groups_by_rhs() {
        let index = ParsingIndex::from_scores(&scores());
        assert_eq!(index.len(), 3);
        assert_eq!(index.num_keys(), 2);
        let food: Vec<_> = index.terminal("food").iter()
            .map(|(lhs, score)| (lhs.as_ref(), *score))
            .collect();
        assert_eq!(food, vec![("NN", -1.0), ("NP+NN", -2.0)]);
        let (dt, nn): (Symbol, Symbol) = ("DT".into(), "NN".into());
        assert_eq!(index.binary(&dt, &nn).len(), 1);
        assert!(index.binary(&nn, &dt).is_empty());
        assert!(index.terminal("Food").is_empty());
        assert!(index.contains(&Rhs::Terminal("food".into())));
    }

    #[test]
    fn index_rebuild_replaces() {
        let mut index = ParsingIndex::from_scores(&scores());
        let mut fewer = IndexMap::new();
        fewer.insert(Production::terminal("NN", "knife"), 0.0);
        index.rebuild(&fewer);
        assert_eq!(index.len(), 1);
        assert!(index.terminal("food").is_empty());
        assert_eq!(index.rules().collect::<Vec<_>>(),
                   vec![(Production::terminal("NN", "knife"), 0.0)]);
        index.clear();
        assert!(index.is_empty());
    }
}
