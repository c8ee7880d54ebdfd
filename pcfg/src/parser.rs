#![deny(warnings)]

use crate::chart::{Cell, Chart, Derivation};
use crate::error::Error;
use crate::grammar::{Rhs, Symbol};
use crate::index::ParsingIndex;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Reject inputs longer than this many tokens.
    pub max_tokens: Option<usize>,
    /// Fill all cells of one span length concurrently.
    pub parallel: bool,
}

/// Viterbi CKY over a frozen parsing index.
pub struct CkyParser<'g> {
    index: &'g ParsingIndex,
    config: ParserConfig,
}

impl<'g> CkyParser<'g> {
    pub fn new(index: &'g ParsingIndex) -> Self {
        CkyParser::with_config(index, ParserConfig::default())
    }

    pub fn with_config(index: &'g ParsingIndex, config: ParserConfig) -> Self {
        CkyParser{index, config}
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Highest scoring derivation of `start` covering all of `tokens`, or
    /// `None` if the grammar can't derive them.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S], start: &str)
        -> Result<Option<Arc<Derivation>>, Error>
    {
        let chart = self.chart(tokens)?;
        let best = chart.root(start).cloned();
        match &best {
            Some(d) => debug!(start, score = d.score, "parsed {} tokens", tokens.len()),
            None => debug!(start, candidates = chart.root_candidates().len(), "no parse"),
        }
        Ok(best)
    }

    /// Fill a chart for `tokens`: words first, then spans of increasing length.
    pub fn chart<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Chart, Error> {
        if self.index.is_empty() {
            return Err(Error::UntrainedGrammar);
        }
        let n = tokens.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if let Some(max) = self.config.max_tokens {
            if n > max {
                return Err(Error::InputTooLong{len: n, max});
            }
        }

        let mut chart = Chart::new(n);
        for (i, token) in tokens.iter().enumerate() {
            let token = token.as_ref();
            let cell = self.lexical_cell(token);
            if cell.is_empty() {
                warn!(token, position = i, "unknown token");
            }
            chart.set_cell(i, i + 1, cell);
        }

        for len in 2..=n {
            let spans = 0..n - len + 1;
            // each length only reads shorter spans, so a length's cells are
            // independent of each other
            let cells: Vec<Cell> = if self.config.parallel {
                spans.into_par_iter().map(|start| self.span_cell(&chart, start, start + len)).collect()
            } else {
                spans.map(|start| self.span_cell(&chart, start, start + len)).collect()
            };
            for (start, cell) in cells.into_iter().enumerate() {
                trace!(start, end = start + len,
                       labels = ?cell.keys().map(|l| l.as_ref()).collect::<Vec<&str>>());
                chart.set_cell(start, start + len, cell);
            }
        }
        debug!(tokens = n, entries = chart.num_entries(), "filled chart");
        Ok(chart)
    }

    fn lexical_cell(&self, word: &str) -> Cell {
        let mut cell = Cell::new();
        let word: Symbol = word.into();
        for (lhs, score) in self.index.get(&Rhs::Terminal(word.clone())) {
            cell.entry(lhs.clone()).or_insert_with(||
                Arc::new(Derivation::leaf(lhs.clone(), *score, word.clone())));
        }
        cell
    }

    // Best derivation per label over [start, end). Candidates are visited by
    // split point, then left cell order, right cell order and index order;
    // only a strictly better score replaces an earlier one.
    fn span_cell(&self, chart: &Chart, start: usize, end: usize) -> Cell {
        let mut cell = Cell::new();
        for split in start + 1..end {
            let (left_cell, right_cell) = match (chart.cell(start, split), chart.cell(split, end)) {
                (Some(l), Some(r)) if !l.is_empty() && !r.is_empty() => (l, r),
                _ => continue,
            };
            for (b, left) in left_cell {
                for (c, right) in right_cell {
                    for (a, rule) in self.index.binary(b, c) {
                        let score = rule + left.score + right.score;
                        if matches!(cell.get(a), Some(best) if best.score >= score) {
                            continue;
                        }
                        cell.insert(a.clone(), Arc::new(
                            Derivation::binary(a.clone(), score, left.clone(), right.clone())));
                    }
                }
            }
        }
        cell
    }
}
