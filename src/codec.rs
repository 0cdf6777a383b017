//! Encoding and decoding
//!
//! Encoding goes through the table, decoding goes through the tree.  The encoded form is
//! a string of `'0'` and `'1'` characters.

use crate::frequency::{Frequencies,count_frequencies};
use crate::table::{EncodingTable,build_encoding_table};
use crate::tree::{Node,build_tree};
use crate::Error;

/// Concatenate the code of every character in `text`.
pub fn encode(text: &str,table: &EncodingTable) -> Result<String,Error> {
    let mut ans = String::new();
    for c in text.chars() {
        for bit in table.get(c)?.iter() {
            ans.push(if bit { '1' } else { '0' });
        }
    }
    Ok(ans)
}

/// Walk the tree from the root, `1` going right and `0` going left.
/// Each leaf reached emits its symbol and sends us back to the root.
/// Running out of bits anywhere but the root is an error, as is any other character.
pub fn decode(bits: &str,root: &Node) -> Result<String,Error> {
    let mut ans = String::new();
    // a lone leaf is reached with the single bit 0
    if let Node::Leaf { symbol, .. } = root {
        for (pos,bit) in bits.chars().enumerate() {
            match bit {
                '0' => ans.push(*symbol),
                _ => return Err(Error::InvalidEncoding { pos })
            }
        }
        return Ok(ans);
    }
    let mut curs = root;
    let mut pos = 0;
    for bit in bits.chars() {
        curs = match (bit,curs) {
            ('0',Node::Internal { left, .. }) => left.as_ref(),
            ('1',Node::Internal { right, .. }) => right.as_ref(),
            _ => return Err(Error::InvalidEncoding { pos })
        };
        pos += 1;
        if let Node::Leaf { symbol, .. } = curs {
            ans.push(*symbol);
            curs = root;
        }
    }
    if !std::ptr::eq(curs,root) {
        log::debug!("bit stream ends inside a code after {} symbols",ans.len());
        return Err(Error::InvalidEncoding { pos });
    }
    Ok(ans)
}

/// A tree together with the table derived from it.
pub struct Codec {
    tree: Node,
    table: EncodingTable
}

impl Codec {
    pub fn new(tree: Node) -> Self {
        let table = build_encoding_table(&tree);
        Self {
            tree,
            table
        }
    }
    /// Build the code from the symbol counts of `sample`.
    pub fn from_sample(sample: &str) -> Result<Self,Error> {
        let freq = count_frequencies(sample)?;
        Ok(Self::new(build_tree(&freq)?))
    }
    pub fn tree(&self) -> &Node {
        &self.tree
    }
    pub fn table(&self) -> &EncodingTable {
        &self.table
    }
    /// counts the tree was built from
    pub fn frequencies(&self) -> Frequencies {
        fn collect(node: &Node,freq: &mut Frequencies) {
            match node {
                Node::Leaf { freq: n, symbol } => {
                    // leaves built from counts always hold alphabet symbols
                    let _ = freq.set(*symbol,*n);
                },
                Node::Internal { left, right, .. } => {
                    collect(left,freq);
                    collect(right,freq);
                }
            }
        }
        let mut ans = Frequencies::new();
        collect(&self.tree,&mut ans);
        ans
    }
    pub fn encode(&self,text: &str) -> Result<String,Error> {
        encode(text,&self.table)
    }
    pub fn decode(&self,bits: &str) -> Result<String,Error> {
        decode(bits,&self.tree)
    }
    /// number of bits `text` would encode to
    pub fn encoded_len(&self,text: &str) -> Result<usize,Error> {
        let mut ans = 0;
        for c in text.chars() {
            ans += self.table.get(c)?.len();
        }
        Ok(ans)
    }
}

#[test]
fn two_symbols() {
    let codec = Codec::from_sample("AAAAB").expect("build failed");
    let bits = codec.encode("AAAAB").expect("encoding failed");
    assert_eq!(bits,"11110");
    assert_eq!(codec.decode(&bits).expect("decoding failed"),"AAAAB");
    assert_eq!(codec.encoded_len("AAAAB"),Ok(5));
}

#[test]
fn lone_symbol() {
    let codec = Codec::from_sample("AAAA").expect("build failed");
    let bits = codec.encode("AAAA").expect("encoding failed");
    assert_eq!(bits,"0000");
    assert_eq!(codec.decode(&bits).expect("decoding failed"),"AAAA");
    assert_eq!(codec.decode("001"),Err(Error::InvalidEncoding { pos: 2 }));
}

#[test]
fn invertibility() {
    let sample = "I AM SAM SAM I AM I DO NOT LIKE THIS SAM I AM";
    let codec = Codec::from_sample(sample).expect("build failed");
    let bits = codec.encode(sample).expect("encoding failed");
    assert_eq!(codec.decode(&bits).expect("decoding failed"),sample);
    // any text over the symbols of the sample works
    let bits = codec.encode("MAKE SIT").expect("encoding failed");
    assert_eq!(codec.decode(&bits).expect("decoding failed"),"MAKE SIT");
    assert_eq!(codec.decode("").expect("decoding failed"),"");
}

#[test]
fn unknown_symbol() {
    let codec = Codec::from_sample("AAAAB").expect("build failed");
    assert_eq!(codec.encode("ABC"),Err(Error::UnknownSymbol('C')));
    assert_eq!(codec.encode("ab"),Err(Error::UnknownSymbol('a')));
    assert_eq!(codec.encoded_len("AZ"),Err(Error::UnknownSymbol('Z')));
}

#[test]
fn truncation() {
    // weights 1,1,2,4 give D=0, C=10, A=110, B=111
    let codec = Codec::from_sample("ABCCDDDD").expect("build failed");
    assert_eq!(codec.table().code_string('A'),Some("110".to_string()));
    assert_eq!(codec.table().code_string('D'),Some("0".to_string()));
    assert_eq!(codec.decode("1"),Err(Error::InvalidEncoding { pos: 1 }));
    assert_eq!(codec.decode("011"),Err(Error::InvalidEncoding { pos: 3 }));
    assert_eq!(codec.decode("1x"),Err(Error::InvalidEncoding { pos: 1 }));
    assert_eq!(codec.decode("011010").expect("decoding failed"),"DAC");
}

#[test]
fn frequencies_survive() {
    let freq = count_frequencies("HELLO WORLD").expect("counting failed");
    let codec = Codec::new(build_tree(&freq).expect("build failed"));
    assert_eq!(codec.frequencies(),freq);
    assert_eq!(codec.table().cost(&freq),codec.encoded_len("HELLO WORLD").unwrap() as u64);
}
