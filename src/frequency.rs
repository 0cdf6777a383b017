//! Symbol counting

use std::fmt;
use crate::alphabet::{self,ALPHABET_SIZE};
use crate::Error;

/// Occurrence count for each symbol, indexed by slot.
#[derive(Clone,Debug,PartialEq,Eq)]
pub struct Frequencies {
    counts: [u64;ALPHABET_SIZE]
}

impl Frequencies {
    pub fn new() -> Self {
        Self {
            counts: [0;ALPHABET_SIZE]
        }
    }
    pub fn get(&self,c: char) -> Result<u64,Error> {
        Ok(self.counts[alphabet::slot(c)?])
    }
    pub fn set(&mut self,c: char,count: u64) -> Result<(),Error> {
        self.counts[alphabet::slot(c)?] = count;
        Ok(())
    }
    fn bump(&mut self,c: char) -> Result<(),Error> {
        self.counts[alphabet::slot(c)?] += 1;
        Ok(())
    }
    /// sum over all symbols
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
    /// symbols with a nonzero count, in slot order
    pub fn nonzero(&self) -> impl Iterator<Item=(char,u64)> + '_ {
        self.counts.iter()
            .enumerate()
            .filter(|(_,n)| **n > 0)
            .map(|(i,n)| (alphabet::symbol(i),*n))
    }
}

impl Default for Frequencies {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Frequencies {
    fn fmt(&self,f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c,n) in self.nonzero() {
            writeln!(f,"{:?} : {}",c,n)?;
        }
        Ok(())
    }
}

/// Count the symbols in `text` in a single pass.
/// Any character outside the alphabet is an error.
pub fn count_frequencies(text: &str) -> Result<Frequencies,Error> {
    let mut ans = Frequencies::new();
    for c in text.chars() {
        ans.bump(c)?;
    }
    log::debug!("counted {} symbols",ans.total());
    Ok(ans)
}

#[test]
fn counting_works() {
    let freq = count_frequencies("AAAAB").expect("counting failed");
    assert_eq!(freq.get('A'),Ok(4));
    assert_eq!(freq.get('B'),Ok(1));
    assert_eq!(freq.get('Z'),Ok(0));
    assert_eq!(freq.total(),5);
    assert_eq!(freq.nonzero().collect::<Vec<_>>(),vec![('A',4),('B',1)]);

    let freq = count_frequencies("I AM SAM").expect("counting failed");
    assert_eq!(freq.get(' '),Ok(2));
    assert_eq!(freq.get('M'),Ok(2));
    assert_eq!(freq.nonzero().last(),Some((' ',2)));
}

#[test]
fn empty_text() {
    let freq = count_frequencies("").expect("counting failed");
    assert_eq!(freq,Frequencies::new());
    assert_eq!(freq.nonzero().count(),0);
}

#[test]
fn foreign_symbol() {
    assert_eq!(count_frequencies("I am Sam"),Err(Error::UnknownSymbol('a')));
    assert_eq!(count_frequencies("SAM\n"),Err(Error::UnknownSymbol('\n')));
}
