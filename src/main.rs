use clap::Parser;
use crock32::{c32dec, c32enc};
use std::fs::File;
use std::io::{self, Read, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
struct Args {
    /// File to read; stdin when omitted
    #[arg()]
    input: Option<String>,

    /// Decode Crock32 text back to raw bytes
    #[arg(short, long)]
    decode: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut raw = Vec::new();
    let read = match args.input {
        Some(ref path) => File::open(path).and_then(|mut file| file.read_to_end(&mut raw)),
        None => io::stdin().read_to_end(&mut raw),
    };
    if let Err(err) = read {
        match args.input {
            Some(ref path) => eprintln!("crock32: {}: {}", path, err),
            None => eprintln!("crock32: read error: {}", err),
        }
        return ExitCode::FAILURE;
    }

    let mut stdout = io::stdout();
    let written = if args.decode {
        let text = match std::str::from_utf8(&raw) {
            Ok(text) => text.trim_end(),
            Err(_) => {
                eprintln!("crock32: input is not valid UTF-8");
                return ExitCode::FAILURE;
            }
        };
        match c32dec(text) {
            Ok(bytes) => stdout.write_all(&bytes),
            Err(err) => {
                eprintln!("crock32: {}", err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        writeln!(stdout, "{}", c32enc(&raw))
    };
    if let Err(err) = written {
        eprintln!("crock32: write error: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
