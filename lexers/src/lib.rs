mod scanner;
mod char_scanner;
mod bracket_tokenizer;

pub use scanner::Scanner;
pub use bracket_tokenizer::{BracketTokenizer, BracketToken};

#[cfg(test)]
mod scanner_test;
