#![deny(warnings)]

use crate::scanner::Scanner;
use std::str::Chars;


/// Tokens of bracketed (Penn Treebank style) trees: `(S (NP I) (VP run))`
#[derive(Clone, PartialEq, Debug)]
pub enum BracketToken {
    Open,
    Close,
    Atom(String),
}

pub struct BracketTokenizer<I: Iterator<Item=char>>(Scanner<I>);

impl<'a> BracketTokenizer<Chars<'a>> {
    pub fn scanner(source: &'a str) -> Scanner<BracketTokenizer<Chars<'a>>> {
        Scanner::new(BracketTokenizer(Scanner::new(source.chars())))
    }
}

impl<I: Iterator<Item=char>> Iterator for BracketTokenizer<I> {
    type Item = BracketToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.ignore_ws();
        if let Some(t) = self.0.accept_any(&['(', ')']) {
            self.0.ignore();
            Some(if t == '(' { BracketToken::Open } else { BracketToken::Close })
        } else {
            self.0.scan_atom(&['(', ')']).map(BracketToken::Atom)
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{BracketToken, BracketTokenizer};

    fn atom(s: &str) -> BracketToken { BracketToken::Atom(s.to_string()) }

    #[test]
    fn tokenize_tree() {
        let tokens: Vec<_> = BracketTokenizer::scanner(
            "(S (NP+PRP I)\n   (VP (VBP eat) (NP|<JJ-NN> food)))").collect();
        assert_eq!(tokens, vec![
            BracketToken::Open, atom("S"),
            BracketToken::Open, atom("NP+PRP"), atom("I"), BracketToken::Close,
            BracketToken::Open, atom("VP"),
            BracketToken::Open, atom("VBP"), atom("eat"), BracketToken::Close,
            BracketToken::Open, atom("NP|<JJ-NN>"), atom("food"), BracketToken::Close,
            BracketToken::Close, BracketToken::Close,
        ]);
    }

    #[test]
    fn tokenize_unlabeled_wrapper() {
        let mut lx = BracketTokenizer::scanner("( (X y) )");
        assert_eq!(lx.next(), Some(BracketToken::Open));
        assert_eq!(lx.next(), Some(BracketToken::Open));
        assert_eq!(lx.next(), Some(atom("X")));
        assert_eq!(lx.next(), Some(atom("y")));
        assert_eq!(lx.next(), Some(BracketToken::Close));
        assert_eq!(lx.next(), Some(BracketToken::Close));
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn tokenize_blank() {
        assert_eq!(BracketTokenizer::scanner(" \n\t ").next(), None);
    }
}
