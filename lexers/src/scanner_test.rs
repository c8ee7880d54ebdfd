use crate::scanner::Scanner;

#[test]
fn test_extremes() {
    let mut s = Scanner::new("(NP dog)@".chars());
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some('('));
    while s.next() != Some('@') {}
    assert_eq!(s.curr(), Some('@'));
    assert_eq!(s.next(), None);
    assert_eq!(s.next(), None);
    assert_eq!(s.curr(), None);
    // cursor past the end still views the whole buffer
    assert_eq!(s.view().len(), 9);
}

#[test]
fn test_extract() {
    let mut s = Scanner::new("(NP dog)".chars());
    assert_eq!(s.accept_any(&['(']), Some('('));
    s.ignore();
    for _ in 0..2 { assert!(s.next().is_some()); }
    assert_eq!(s.extract_string(), "NP");
    assert_eq!(s.peek(), Some(' '));
    assert_eq!(s.curr(), None);
    assert!(s.skip_all(&[' ']));
    s.ignore();
    assert_eq!(s.next(), Some('d'));
}

#[test]
fn test_accept_any() {
    let mut s = Scanner::new("((  S".chars());
    assert_eq!(s.accept_any(&[')']), None);
    assert_eq!(s.curr(), None);
    assert_eq!(s.accept_any(&['(', ')']), Some('('));
    assert!(s.skip_all(&['(', ' ']));
    assert!(!s.skip_all(&['(', ' ']));
    assert_eq!(s.curr(), Some(' '));
    assert_eq!(s.peek(), Some('S'));
    assert_eq!(s.extract().len(), 4);
    assert_eq!(s.next(), Some('S'));
}

#[test]
fn test_backtrack() {
    let mut s = Scanner::new("abc".chars());
    let start = s.pos();
    assert_eq!(s.next(), Some('a'));
    assert_eq!(s.next(), Some('b'));
    assert!(s.set_pos(start));
    assert_eq!(s.next(), Some('a'));
    assert!(!s.set_pos(10));
    assert!(!s.set_pos(-2));
}
