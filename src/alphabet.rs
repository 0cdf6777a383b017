//! The symbol alphabet.
//!
//! Tables are indexed by slot: `A` through `Z` occupy slots 0 through 25, space is slot 26.

use crate::Error;

pub const ALPHABET_SIZE: usize = 27;
const SPACE_SLOT: usize = 26;

/// table slot of symbol `c`
pub fn slot(c: char) -> Result<usize,Error> {
    match c {
        'A'..='Z' => Ok(c as usize - 'A' as usize),
        ' ' => Ok(SPACE_SLOT),
        _ => Err(Error::UnknownSymbol(c))
    }
}

/// symbol in table slot `i`, panics if `i` is out of range
pub fn symbol(i: usize) -> char {
    match i {
        SPACE_SLOT => ' ',
        0..=25 => (b'A' + i as u8) as char,
        _ => panic!("slot {} is outside the alphabet",i)
    }
}

/// all symbols in slot order
pub fn symbols() -> impl Iterator<Item=char> {
    (0..ALPHABET_SIZE).map(symbol)
}

#[test]
fn slots_invert() {
    for (i,c) in symbols().enumerate() {
        assert_eq!(slot(c),Ok(i));
    }
    assert_eq!(symbol(0),'A');
    assert_eq!(symbol(25),'Z');
    assert_eq!(symbol(26),' ');
}

#[test]
fn rejects_foreign() {
    assert_eq!(slot('a'),Err(Error::UnknownSymbol('a')));
    assert_eq!(slot('.'),Err(Error::UnknownSymbol('.')));
    assert_eq!(slot('\n'),Err(Error::UnknownSymbol('\n')));
}
