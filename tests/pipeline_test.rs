use std::cmp::Reverse;
use std::collections::BinaryHeap;
use statichuff::*;

const FRANKENSTEIN: &str = include_str!("frankenstein.txt");

fn sample() -> &'static str {
    FRANKENSTEIN.trim_end_matches(['\r','\n'])
}

/// Huffman cost computed independently: the sum of all merged weights.
fn reference_cost(freq: &Frequencies) -> u64 {
    let mut heap: BinaryHeap<Reverse<u64>> = freq.nonzero().map(|(_,n)| Reverse(n)).collect();
    let mut cost = 0;
    while heap.len() > 1 {
        let Reverse(a) = heap.pop().unwrap();
        let Reverse(b) = heap.pop().unwrap();
        cost += a + b;
        heap.push(Reverse(a + b));
    }
    cost
}

#[test]
fn frankenstein_pipeline() {
    let txt = sample();
    let freq = count_frequencies(txt).expect("counting failed");
    assert_eq!(freq.get(' '),Ok(97));
    assert_eq!(freq.get('E'),Ok(50));
    assert_eq!(freq.get('Q'),Ok(0));
    let root = build_tree(&freq).expect("build failed");
    assert_eq!(root.freq(),txt.len() as u64);
    let table = build_encoding_table(&root);
    assert_eq!(table.len(),freq.nonzero().count());
    assert_eq!(table.code_string(' '),Some("111".to_string()));
    assert_eq!(table.code_string('E'),Some("001".to_string()));
    assert_eq!(table.code_string('K'),Some("00000110".to_string()));
    let bits = encode(txt,&table).expect("encoding failed");
    assert_eq!(bits.len(),2147);
    assert_eq!(decode(&bits,&root).expect("decoding failed"),txt);
}

#[test]
fn optimal_length() {
    for txt in [sample(),"AAAAB","ABCCDDDD","THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG","MISSISSIPPI RIVER"] {
        let freq = count_frequencies(txt).expect("counting failed");
        let table = build_encoding_table(&build_tree(&freq).expect("build failed"));
        let bits = encode(txt,&table).expect("encoding failed");
        assert_eq!(bits.len() as u64,table.cost(&freq));
        assert_eq!(table.cost(&freq),reference_cost(&freq),"not optimal for {}",txt);
    }
}

#[test]
fn deterministic() {
    let freq = count_frequencies(sample()).expect("counting failed");
    let t1 = build_tree(&freq).expect("build failed");
    let t2 = build_tree(&freq).expect("build failed");
    assert_eq!(format!("{:?}",t1),format!("{:?}",t2));
    assert_eq!(build_encoding_table(&t1),build_encoding_table(&t2));
}

#[test]
fn prefix_free() {
    let codec = Codec::from_sample(sample()).expect("build failed");
    let codes: Vec<String> = codec.table().iter()
        .map(|(c,_)| codec.table().code_string(c).unwrap())
        .collect();
    for (i,a) in codes.iter().enumerate() {
        for (j,b) in codes.iter().enumerate() {
            assert!(i==j || !b.starts_with(a.as_str()),"{} is a prefix of {}",a,b);
        }
    }
}

#[test]
fn round_trip_with_borrowed_code() {
    // the message only needs symbols that occur in the sample
    let codec = Codec::from_sample(sample()).expect("build failed");
    for msg in ["","A","THE MONSTER LIVES","I SAW THE DULL YELLOW EYE"] {
        let bits = codec.encode(msg).expect("encoding failed");
        assert_eq!(codec.decode(&bits).expect("decoding failed"),msg);
    }
    assert_eq!(codec.encode("QUIZ"),Err(Error::UnknownSymbol('Q')));
}

#[test]
fn lone_symbol() {
    let freq = count_frequencies("     ").expect("counting failed");
    let root = build_tree(&freq).expect("build failed");
    let table = build_encoding_table(&root);
    assert_eq!(table.code_string(' '),Some("0".to_string()));
    let bits = encode("     ",&table).expect("encoding failed");
    assert_eq!(bits,"00000");
    assert_eq!(decode(&bits,&root).expect("decoding failed"),"     ");
}

#[test]
fn failures() {
    assert_eq!(build_tree(&count_frequencies("").unwrap()).unwrap_err(),Error::InvalidInput);
    assert_eq!(count_frequencies("Hello"),Err(Error::UnknownSymbol('e')));
    let freq = count_frequencies("ABCCDDDD").expect("counting failed");
    let root = build_tree(&freq).expect("build failed");
    assert!(matches!(decode("1",&root),Err(Error::InvalidEncoding { .. })));
    assert!(matches!(decode("01 0",&root),Err(Error::InvalidEncoding { pos: 2 })));
}
