use clap::{arg,crate_version,Command};
use statichuff::{sample,Codec,STD_OPTIONS};
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

const RCH: &str = "unreachable was reached";

fn ok_to_overwrite(path_out: &str) -> bool {
    if let Ok(_f) = std::fs::File::open(path_out) {
        let mut ans = String::new();
        eprint!("{} exists, overwrite? (y/n) ",path_out);
        std::io::stdin().read_line(&mut ans).expect("could not read stdin");
        if ans.trim_end()=="y" || ans.trim_end()=="Y" {
            log::warn!("overwriting {}",path_out);
            return true;
        }
        return false;
    }
    true
}

/// send result to the output file if there is one, otherwise stdout
fn emit(txt: &str,path_out: Option<&String>) -> STDRESULT {
    match path_out {
        Some(path) => {
            if !ok_to_overwrite(path) {
                eprintln!("abort operation");
                return Ok(());
            }
            std::fs::write(path,txt)?;
        },
        None => println!("{}",txt)
    }
    Ok(())
}

fn main() -> STDRESULT
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let long_help =
"The code is always built from the sample, so the same sample must be given
to decode as was given to encode.  Text must contain only A-Z and space.

Examples:
---------
Show code:     `statichuff table -s sample.txt`
Encode:        `statichuff encode -s sample.txt -i message.txt -o message.bits`
Decode:        `statichuff decode -s sample.txt -i message.bits -o message.txt`";

    let mut main_cmd = Command::new("statichuff")
        .about("Static Huffman coding of uppercase text")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(Command::new("table")
        .arg(arg!(-s --sample <PATH> "sample text defining the code").required(true))
        .about("print symbol counts and codes"));

    main_cmd = main_cmd.subcommand(Command::new("encode")
        .arg(arg!(-s --sample <PATH> "sample text defining the code").required(true))
        .arg(arg!(-i --input <PATH> "text to encode, default is the sample").required(false))
        .arg(arg!(-o --output <PATH> "output path, default is stdout").required(false))
        .about("encode text as a string of bits"));

    main_cmd = main_cmd.subcommand(Command::new("decode")
        .arg(arg!(-s --sample <PATH> "sample text defining the code").required(true))
        .arg(arg!(-i --input <PATH> "bits to decode").required(true))
        .arg(arg!(-o --output <PATH> "output path, default is stdout").required(false))
        .about("decode a string of bits"));

    let matches = main_cmd.get_matches();

    if let Some(cmd) = matches.subcommand_matches("table") {
        let path_sample = cmd.get_one::<String>("sample").expect(RCH);
        let codec = Codec::from_sample(&sample::load_path(path_sample,&STD_OPTIONS)?)?;
        println!("frequencies:");
        print!("{}",codec.frequencies());
        println!("encoding table:");
        print!("{}",codec.table());
    }

    if let Some(cmd) = matches.subcommand_matches("encode") {
        let path_sample = cmd.get_one::<String>("sample").expect(RCH);
        let txt_sample = sample::load_path(path_sample,&STD_OPTIONS)?;
        let codec = Codec::from_sample(&txt_sample)?;
        let txt = match cmd.get_one::<String>("input") {
            Some(path_in) => sample::load_path(path_in,&STD_OPTIONS)?,
            None => txt_sample
        };
        let bits = codec.encode(&txt)?;
        emit(&bits,cmd.get_one::<String>("output"))?;
        eprintln!("encoded {} symbols into {} bits",txt.chars().count(),bits.len());
    }

    if let Some(cmd) = matches.subcommand_matches("decode") {
        let path_sample = cmd.get_one::<String>("sample").expect(RCH);
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let codec = Codec::from_sample(&sample::load_path(path_sample,&STD_OPTIONS)?)?;
        let bits = sample::load_path(path_in,&STD_OPTIONS)?;
        let txt = codec.decode(&bits)?;
        emit(&txt,cmd.get_one::<String>("output"))?;
        eprintln!("decoded {} bits into {} symbols",bits.len(),txt.chars().count());
    }

    Ok(())
}
