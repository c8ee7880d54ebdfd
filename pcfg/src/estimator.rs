#![deny(warnings)]

use crate::cnf::CnfTree;
use crate::error::Error;
use crate::grammar::{Production, Symbol};
use crate::index::ParsingIndex;
use indexmap::IndexMap;
use tracing::{debug, info};
use treebank::Tree;

/// Accumulates production counts from CNF trees and derives a PCFG from
/// them: relative-frequency log-probabilities and the parsing index.
///
/// Counts are frozen once scores are computed. Training on more trees
/// needs a fresh estimator or a `reset`.
#[derive(Debug, Default, Clone)]
pub struct GrammarEstimator {
    production_counts: IndexMap<Production, u64>,
    lhs_counts: IndexMap<Symbol, u64>,
    scores: IndexMap<Production, f64>,
    index: ParsingIndex,
}

impl GrammarEstimator {
    pub fn new() -> Self {
        GrammarEstimator::default()
    }

    /// Count every production in `tree`. The tree is validated before
    /// anything is counted, a rejected tree leaves the estimator untouched.
    pub fn update_counts(&mut self, tree: &Tree) -> Result<(), Error> {
        self.check_unfrozen()?;
        let tree = CnfTree::try_from(tree)?;
        self.update_counts_cnf(&tree)
    }

    pub fn update_counts_cnf(&mut self, tree: &CnfTree) -> Result<(), Error> {
        self.check_unfrozen()?;
        for production in tree.productions() {
            *self.lhs_counts.entry(production.lhs.clone()).or_insert(0) += 1;
            *self.production_counts.entry(production).or_insert(0) += 1;
        }
        Ok(())
    }

    fn check_unfrozen(&self) -> Result<(), Error> {
        if self.is_frozen() {
            return Err(Error::GrammarFrozen);
        }
        Ok(())
    }

    /// Scores have been computed, counting is no longer allowed.
    pub fn is_frozen(&self) -> bool {
        !self.scores.is_empty()
    }

    /// Log of the relative frequency of each production among those sharing
    /// its left-hand side.
    pub fn compute_scores(&mut self) -> Result<&IndexMap<Production, f64>, Error> {
        if self.production_counts.is_empty() {
            return Err(Error::UntrainedGrammar);
        }
        let mut scores = IndexMap::with_capacity(self.production_counts.len());
        for (production, &count) in &self.production_counts {
            let total = match self.lhs_counts.get(&production.lhs) {
                Some(&total) if total > 0 => total,
                _ => return Err(Error::ZeroLhsCount{lhs: production.lhs.to_string()}),
            };
            scores.insert(production.clone(), (count as f64 / total as f64).ln());
        }
        self.scores = scores;
        debug!(productions = self.scores.len(), nonterminals = self.lhs_counts.len(),
               "scored grammar");
        Ok(&self.scores)
    }

    /// Re-derive the parsing index from the current scores.
    pub fn build_index(&mut self) -> Result<&ParsingIndex, Error> {
        if self.production_counts.is_empty() {
            return Err(Error::UntrainedGrammar);
        }
        if self.scores.is_empty() {
            return Err(Error::ScoresNotComputed);
        }
        self.index.rebuild(&self.scores);
        debug!(rules = self.index.len(), rhs = self.index.num_keys(), "built parsing index");
        Ok(&self.index)
    }

    /// The `n` most frequent productions, ties in first-seen order.
    pub fn top_productions(&self, n: usize) -> Vec<(&Production, u64)> {
        let mut ranked: Vec<_> = self.production_counts.iter()
            .map(|(production, &count)| (production, count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Forget everything and start training from scratch.
    pub fn reset(&mut self) {
        *self = GrammarEstimator::default();
    }

    pub fn production_counts(&self) -> &IndexMap<Production, u64> {
        &self.production_counts
    }

    pub fn lhs_counts(&self) -> &IndexMap<Symbol, u64> {
        &self.lhs_counts
    }

    /// Empty until `compute_scores`.
    pub fn scores(&self) -> &IndexMap<Production, f64> {
        &self.scores
    }

    /// Empty until `build_index`.
    pub fn parsing_index(&self) -> &ParsingIndex {
        &self.index
    }

    pub fn num_productions(&self) -> usize {
        self.production_counts.len()
    }

    pub fn nonterminals(&self) -> impl Iterator<Item=&Symbol> {
        self.lhs_counts.keys()
    }

    pub fn is_trained(&self) -> bool {
        !self.production_counts.is_empty()
    }
}

/// Count `trees`, score the grammar and index it, ready for parsing.
pub fn train<'t, I>(trees: I) -> Result<GrammarEstimator, Error>
    where I: IntoIterator<Item=&'t Tree>
{
    let mut estimator = GrammarEstimator::new();
    let mut count = 0;
    for tree in trees {
        estimator.update_counts(tree)?;
        count += 1;
    }
    estimator.compute_scores()?;
    estimator.build_index()?;
    info!(trees = count, productions = estimator.num_productions(),
          nonterminals = estimator.lhs_counts.len(), "trained grammar");
    Ok(estimator)
}
