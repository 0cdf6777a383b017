//! Huffman tree construction
//!
//! The tree is built greedily from a forest of leaves, one leaf per symbol that occurs.
//! At each step the two lightest trees are removed and joined under a new parent,
//! which goes back into the forest.  When one tree remains it is the root.
//!
//! Ties are resolved by position in the forest: the scan keeps the first minimum it finds.
//! Leaves start out in slot order (`A..Z` then space), and merged trees are appended at the end.
//! The first tree removed becomes the left son.  This fixes the values of the codes,
//! the code lengths do not depend on it.

use std::cmp::Ordering;
use crate::frequency::Frequencies;
use crate::Error;

/// Element of the forest, and eventually of the finished tree.
/// Sons are owned by their parent, so the tree can be neither shared nor cyclic.
#[derive(Clone,Debug)]
pub enum Node {
    Leaf {
        freq: u64,
        symbol: char
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>
    }
}

impl Node {
    pub fn leaf(symbol: char,freq: u64) -> Self {
        Node::Leaf { freq, symbol }
    }
    /// join two trees, `left` is the one that was removed from the forest first
    pub fn merge(left: Node,right: Node) -> Self {
        Node::Internal {
            freq: left.freq() + right.freq(),
            left: Box::new(left),
            right: Box::new(right)
        }
    }
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq
        }
    }
    /// symbol if this is a leaf
    pub fn symbol(&self) -> Option<char> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None
        }
    }
    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Internal { left, .. } => Some(left.as_ref()),
            Node::Leaf { .. } => None
        }
    }
    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Internal { right, .. } => Some(right.as_ref()),
            Node::Leaf { .. } => None
        }
    }
    pub fn is_leaf(&self) -> bool {
        matches!(self,Node::Leaf { .. })
    }
    /// number of leaves below and including this node
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count()
        }
    }
    /// length of the longest path to a leaf
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + usize::max(left.depth(),right.depth())
        }
    }
}

// Nodes are ordered by weight alone, which is all the forest scan needs.

impl PartialEq for Node {
    fn eq(&self,other: &Self) -> bool {
        self.freq() == other.freq()
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self,other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self,other: &Self) -> Ordering {
        self.freq().cmp(&other.freq())
    }
}

/// Leaves for every symbol that occurs, in slot order.
pub fn build_forest(freq: &Frequencies) -> Vec<Node> {
    freq.nonzero().map(|(c,n)| Node::leaf(c,n)).collect()
}

/// Remove the lightest tree, on ties the one nearest the front.
fn take_smallest(forest: &mut Vec<Node>) -> Option<Node> {
    let mut smallest = 0;
    for i in 1..forest.len() {
        if forest[i] < forest[smallest] {
            smallest = i;
        }
    }
    match smallest < forest.len() {
        true => Some(forest.remove(smallest)),
        false => None
    }
}

/// Merge the forest down to a single tree.
pub fn build_tree_from_forest(mut forest: Vec<Node>) -> Result<Node,Error> {
    while forest.len() > 1 {
        // length check means both of these succeed
        let x = take_smallest(&mut forest).ok_or(Error::InvalidInput)?;
        let y = take_smallest(&mut forest).ok_or(Error::InvalidInput)?;
        log::trace!("merge {} + {}",x.freq(),y.freq());
        forest.push(Node::merge(x,y));
    }
    let root = forest.pop().ok_or(Error::InvalidInput)?;
    log::debug!("tree has {} leaves, weight {}, depth {}",root.leaf_count(),root.freq(),root.depth());
    Ok(root)
}

/// Build the Huffman tree for the given counts.
/// Fails with `InvalidInput` if every count is zero.
pub fn build_tree(freq: &Frequencies) -> Result<Node,Error> {
    build_tree_from_forest(build_forest(freq))
}

#[cfg(test)]
fn freqs(pairs: &[(char,u64)]) -> Frequencies {
    let mut ans = Frequencies::new();
    for (c,n) in pairs {
        ans.set(*c,*n).expect("bad symbol");
    }
    ans
}

#[test]
fn forest_skips_absent() {
    let forest = build_forest(&freqs(&[('Q',3),(' ',5),('C',1)]));
    let syms: Vec<Option<char>> = forest.iter().map(|n| n.symbol()).collect();
    assert_eq!(syms,vec![Some('C'),Some('Q'),Some(' ')]);
    assert!(forest.iter().all(|n| n.is_leaf()));
}

#[test]
fn two_symbols() {
    let root = build_tree(&freqs(&[('A',4),('B',1)])).expect("build failed");
    assert_eq!(root.freq(),5);
    assert_eq!(root.symbol(),None);
    // lighter B is removed first and goes left
    assert_eq!(root.left().and_then(|n| n.symbol()),Some('B'));
    assert_eq!(root.right().and_then(|n| n.symbol()),Some('A'));
}

#[test]
fn ties_go_to_first() {
    let root = build_tree(&freqs(&[('A',1),('B',1),('C',1)])).expect("build failed");
    // A,B merge first; then C (weight 1) is lighter than AB (weight 2)
    assert_eq!(root.freq(),3);
    assert_eq!(root.left().and_then(|n| n.symbol()),Some('C'));
    let ab = root.right().expect("missing right son");
    assert_eq!(ab.left().and_then(|n| n.symbol()),Some('A'));
    assert_eq!(ab.right().and_then(|n| n.symbol()),Some('B'));
}

#[test]
fn single_leaf() {
    let root = build_tree(&freqs(&[('E',7)])).expect("build failed");
    assert!(root.is_leaf());
    assert_eq!(root.symbol(),Some('E'));
    assert_eq!(root.freq(),7);
    assert_eq!(root.depth(),0);
}

#[test]
fn empty_counts() {
    assert_eq!(build_tree(&Frequencies::new()).unwrap_err(),Error::InvalidInput);
    assert_eq!(build_tree_from_forest(Vec::new()).unwrap_err(),Error::InvalidInput);
}

#[test]
fn weights_add_up() {
    let f = freqs(&[('A',10),('B',3),('C',3),('D',7),(' ',20),('Z',1)]);
    let root = build_tree(&f).expect("build failed");
    assert_eq!(root.freq(),f.total());
    assert_eq!(root.leaf_count(),6);
    fn check(n: &Node) {
        if let Node::Internal { freq, left, right } = n {
            assert_eq!(*freq,left.freq()+right.freq());
            check(left);
            check(right);
        }
    }
    check(&root);
}
