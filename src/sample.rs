//! Loading sample and message text.
//!
//! Text is expected to be over the alphabet already, the only change made here is
//! removing the trailing line ending that text files usually carry.

use std::io::Read;
use crate::{DYNERR,Options};

/// Read all of `reader` as text, subject to the size limit in `opt`.
pub fn load<R: Read>(reader: &mut R,opt: &Options) -> Result<String,DYNERR> {
    let mut ans = String::new();
    let count = reader.by_ref().take(opt.max_file_size + 1).read_to_string(&mut ans)?;
    if count as u64 > opt.max_file_size {
        return Err(Box::new(crate::Error::FileTooLarge));
    }
    if opt.trim_line_ends {
        let keep = ans.trim_end_matches(['\r','\n']).len();
        ans.truncate(keep);
    }
    log::debug!("loaded {} characters",ans.len());
    Ok(ans)
}

/// Convenience function, calls `load` on the file at `path`
pub fn load_path(path: &str,opt: &Options) -> Result<String,DYNERR> {
    let mut f = std::fs::File::open(path)?;
    load(&mut f,opt)
}

#[test]
fn strips_line_ends() {
    let mut src = std::io::Cursor::new("I AM SAM\r\n\n");
    assert_eq!(load(&mut src,&crate::STD_OPTIONS).expect("load failed"),"I AM SAM");
    let opt = Options {
        max_file_size: 100,
        trim_line_ends: false
    };
    let mut src = std::io::Cursor::new("I AM SAM\n");
    assert_eq!(load(&mut src,&opt).expect("load failed"),"I AM SAM\n");
}

#[test]
fn size_limit() {
    let opt = Options {
        max_file_size: 4,
        trim_line_ends: true
    };
    let mut src = std::io::Cursor::new("ABCD");
    assert_eq!(load(&mut src,&opt).expect("load failed"),"ABCD");
    let mut src = std::io::Cursor::new("ABCDE");
    let err = load(&mut src,&opt).expect_err("limit not enforced");
    assert_eq!(err.downcast_ref::<crate::Error>(),Some(&crate::Error::FileTooLarge));
}
