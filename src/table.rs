//! Encoding table
//!
//! The table is read off the finished tree, appending a 0 bit for every step to a left son
//! and a 1 bit for every step to a right son.  Codes are kept as `BitVec`, most significant
//! (first transmitted) bit first.

use std::fmt;
use bit_vec::BitVec;
use crate::alphabet::{self,ALPHABET_SIZE};
use crate::frequency::Frequencies;
use crate::tree::Node;
use crate::Error;

/// Map from symbol slot to code, symbols that are not in the tree have no entry.
#[derive(Clone,Debug,PartialEq)]
pub struct EncodingTable {
    codes: Vec<Option<BitVec>>
}

fn bits_to_string(bits: &BitVec) -> String {
    bits.iter().map(|b| if b { '1' } else { '0' }).collect()
}

impl EncodingTable {
    fn new() -> Self {
        Self {
            codes: vec![None;ALPHABET_SIZE]
        }
    }
    fn put(&mut self,c: char,code: BitVec) {
        match alphabet::slot(c) {
            Ok(i) => self.codes[i] = Some(code),
            Err(_) => log::warn!("leaf symbol {:?} is not in the alphabet, skipping",c)
        }
    }
    /// code for symbol `c`, error if `c` has no entry
    pub fn get(&self,c: char) -> Result<&BitVec,Error> {
        match &self.codes[alphabet::slot(c)?] {
            Some(code) => Ok(code),
            None => Err(Error::UnknownSymbol(c))
        }
    }
    pub fn code_string(&self,c: char) -> Option<String> {
        self.get(c).ok().map(bits_to_string)
    }
    /// entries in slot order
    pub fn iter(&self) -> impl Iterator<Item=(char,&BitVec)> + '_ {
        self.codes.iter()
            .enumerate()
            .filter_map(|(i,code)| code.as_ref().map(|v| (alphabet::symbol(i),v)))
    }
    pub fn len(&self) -> usize {
        self.iter().count()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Total bits needed to encode a text with the given counts.
    /// Symbols without an entry contribute nothing.
    pub fn cost(&self,freq: &Frequencies) -> u64 {
        freq.nonzero()
            .filter_map(|(c,n)| self.get(c).ok().map(|code| n * code.len() as u64))
            .sum()
    }
}

impl fmt::Display for EncodingTable {
    fn fmt(&self,f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c,code) in self.iter() {
            writeln!(f,"{:?} : {}",c,bits_to_string(code))?;
        }
        Ok(())
    }
}

/// Walk every path from the root to a leaf and record the path as that leaf's code.
/// If the root is itself a leaf there is no path, so its symbol is given the code `0`.
pub fn build_encoding_table(root: &Node) -> EncodingTable {
    let mut table = EncodingTable::new();
    if let Node::Leaf { symbol, .. } = root {
        log::debug!("lone symbol {:?} gets code 0",symbol);
        table.put(*symbol,BitVec::from_elem(1,false));
        return table;
    }
    let mut stack: Vec<(&Node,BitVec)> = vec![(root,BitVec::new())];
    while let Some((node,path)) = stack.pop() {
        match node {
            Node::Leaf { symbol, .. } => {
                table.put(*symbol,path);
            },
            Node::Internal { left, right, .. } => {
                let mut rpath = path.clone();
                rpath.push(true);
                stack.push((right.as_ref(),rpath));
                let mut lpath = path;
                lpath.push(false);
                stack.push((left.as_ref(),lpath));
            }
        }
    }
    log::debug!("table has {} entries",table.len());
    table
}

#[cfg(test)]
fn table_for(text: &str) -> EncodingTable {
    let freq = crate::frequency::count_frequencies(text).expect("counting failed");
    build_encoding_table(&crate::tree::build_tree(&freq).expect("build failed"))
}

#[test]
fn two_symbols() {
    let table = table_for("AAAAB");
    assert_eq!(table.code_string('A'),Some("1".to_string()));
    assert_eq!(table.code_string('B'),Some("0".to_string()));
    assert_eq!(table.code_string('C'),None);
    assert_eq!(table.get('C'),Err(Error::UnknownSymbol('C')));
    assert_eq!(table.len(),2);
}

#[test]
fn lone_symbol() {
    let table = table_for("AAAA");
    assert_eq!(table.code_string('A'),Some("0".to_string()));
    assert_eq!(table.len(),1);
}

#[test]
fn lengths_follow_weights() {
    // weights 1,1,2,4: lengths 3,3,2,1
    let table = table_for("ABCCDDDD");
    assert_eq!(table.get('A').map(|c| c.len()),Ok(3));
    assert_eq!(table.get('B').map(|c| c.len()),Ok(3));
    assert_eq!(table.get('C').map(|c| c.len()),Ok(2));
    assert_eq!(table.get('D').map(|c| c.len()),Ok(1));
    let freq = crate::frequency::count_frequencies("ABCCDDDD").unwrap();
    assert_eq!(table.cost(&freq),3+3+2*2+4);
}

#[test]
fn prefix_free() {
    let table = table_for("THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG");
    let codes: Vec<String> = table.iter().map(|(_,c)| bits_to_string(c)).collect();
    assert_eq!(codes.len(),ALPHABET_SIZE);
    for (i,a) in codes.iter().enumerate() {
        assert!(!a.is_empty());
        for (j,b) in codes.iter().enumerate() {
            if i != j {
                assert!(!b.starts_with(a.as_str()),"{} is a prefix of {}",a,b);
            }
        }
    }
}

#[test]
fn display_lists_entries() {
    let table = table_for("AAAAB");
    assert_eq!(table.to_string(),"'A' : 1\n'B' : 0\n");
}
