#![deny(warnings)]

use crate::scanner::Scanner;

pub static WHITE: &[char] = &[' ', '\n', '\r', '\t'];


impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    /// Skip whitespace and forget about it. Returns if anything was skipped.
    pub fn ignore_ws(&mut self) -> bool {
        let skipped = self.skip_all(WHITE);
        self.ignore();
        skipped
    }

    // scan a run of chars until whitespace or any of `stop` (or EOF)
    pub fn scan_atom(&mut self, stop: &[char]) -> Option<String> {
        let backtrack = self.pos();
        let mut advanced = false;
        while let Some(next) = self.peek() {
            if WHITE.contains(&next) || stop.contains(&next) { break; }
            self.next();
            advanced = true;
        }
        if !advanced {
            self.set_pos(backtrack);
            return None;
        }
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_atoms() {
        let mut s = Scanner::new("NP|<JJ-NN> (".chars());
        assert_eq!(s.scan_atom(&['(', ')']), Some("NP|<JJ-NN>".to_string()));
        assert!(s.ignore_ws());
        assert_eq!(s.scan_atom(&['(', ')']), None);
        assert_eq!(s.next(), Some('('));
    }

    #[test]
    fn ignore_whitespace() {
        let mut s = Scanner::new("  \n\tword".chars());
        assert!(s.ignore_ws());
        assert!(!s.ignore_ws());
        assert_eq!(s.extract_string(), "");
        assert_eq!(s.scan_atom(&[]), Some("word".to_string()));
    }
}
