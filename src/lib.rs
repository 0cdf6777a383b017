//! # statichuff
//!
//! Static Huffman coding over a 27 symbol alphabet, the uppercase letters `A-Z` plus space.
//! A code is derived from the symbol counts of a sample text, and then used to turn strings
//! over the alphabet into strings of `'0'` and `'1'`, and back.
//!
//! ```rust
//! use statichuff::{count_frequencies,build_tree,build_encoding_table,encode,decode};
//! let freq = count_frequencies("AAAAB").unwrap();
//! let root = build_tree(&freq).unwrap();
//! let table = build_encoding_table(&root);
//! let bits = encode("AAAAB",&table).unwrap();
//! assert_eq!(bits,"11110");
//! assert_eq!(decode(&bits,&root).unwrap(),"AAAAB");
//! ```

pub mod alphabet;
pub mod frequency;
pub mod tree;
pub mod table;
pub mod codec;
pub mod sample;

pub use frequency::{Frequencies,count_frequencies};
pub use tree::{Node,build_forest,build_tree};
pub use table::{EncodingTable,build_encoding_table};
pub use codec::{Codec,encode,decode};

type DYNERR = Box<dyn std::error::Error>;

/// Coding Errors
#[derive(thiserror::Error,Debug,PartialEq)]
pub enum Error {
    #[error("no symbols with nonzero frequency")]
    InvalidInput,
    #[error("symbol {0:?} is not in the alphabet")]
    UnknownSymbol(char),
    #[error("bit stream does not resolve to a symbol at bit {pos}")]
    InvalidEncoding { pos: usize },
    #[error("input is too large")]
    FileTooLarge
}

/// Options controlling how text is loaded
pub struct Options {
    /// return error if input is larger
    pub max_file_size: u64,
    /// strip trailing CR and LF from loaded text
    pub trim_line_ends: bool
}

pub const STD_OPTIONS: Options = Options {
    max_file_size: u32::MAX as u64/4,
    trim_line_ends: true
};
