use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*;
use std::path::{PathBuf,Path};
use std::process::Command; // Run programs
use tempfile;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

fn sample_path() -> PathBuf {
    Path::new("tests").join("frankenstein.txt")
}

// Write text into the temporary directory, with or without a trailing CRLF.
// This checks that line endings added by editors or git do not reach the coder.
fn write_temp(txt: &str,name: &str,temp_dir: &tempfile::TempDir,crlf: bool) -> Result<PathBuf,Box<dyn std::error::Error>> {
    let path = temp_dir.path().join(name);
    let contents = match crlf {
        true => [txt,"\r\n"].concat(),
        false => txt.to_string()
    };
    std::fs::write(&path,contents)?;
    Ok(path)
}

#[test]
fn table_lists_codes() -> STDRESULT {
    let mut cmd = Command::cargo_bin("statichuff")?;
    cmd.arg("table")
        .arg("-s").arg(sample_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("encoding table:"))
        .stdout(predicate::str::contains("' ' : 111"))
        .stdout(predicate::str::contains("'E' : 50"));
    Ok(())
}

#[test]
fn round_trip_through_files() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let msg = "I SAW THE CREATURE OPEN ITS EYE";
    let in_path = write_temp(msg,"message.txt",&temp_dir,true)?;
    let bits_path = temp_dir.path().join("message.bits");
    let out_path = temp_dir.path().join("expanded.txt");
    Command::cargo_bin("statichuff")?
        .arg("encode")
        .arg("-s").arg(sample_path())
        .arg("-i").arg(&in_path)
        .arg("-o").arg(&bits_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("encoded 31 symbols"));
    let bits = std::fs::read_to_string(&bits_path)?;
    assert!(bits.chars().all(|c| c=='0' || c=='1'));
    Command::cargo_bin("statichuff")?
        .arg("decode")
        .arg("-s").arg(sample_path())
        .arg("-i").arg(&bits_path)
        .arg("-o").arg(&out_path)
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(&out_path)?,msg);
    Ok(())
}

#[test]
fn encode_sample_to_stdout() -> STDRESULT {
    Command::cargo_bin("statichuff")?
        .arg("encode")
        .arg("-s").arg(sample_path())
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[01]{2147}\n$")?);
    Ok(())
}

#[test]
fn foreign_symbol_fails() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let in_path = write_temp("It was on a dreary night","lower.txt",&temp_dir,false)?;
    Command::cargo_bin("statichuff")?
        .arg("encode")
        .arg("-s").arg(sample_path())
        .arg("-i").arg(&in_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("UnknownSymbol"));
    Ok(())
}

#[test]
fn truncated_bits_fail() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    // the code for space is 111, so two ones stop inside a code
    let in_path = write_temp("11","short.bits",&temp_dir,false)?;
    Command::cargo_bin("statichuff")?
        .arg("decode")
        .arg("-s").arg(sample_path())
        .arg("-i").arg(&in_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidEncoding"));
    Ok(())
}

#[test]
fn empty_sample_fails() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let sample = write_temp("","empty.txt",&temp_dir,true)?;
    Command::cargo_bin("statichuff")?
        .arg("table")
        .arg("-s").arg(&sample)
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidInput"));
    Ok(())
}
