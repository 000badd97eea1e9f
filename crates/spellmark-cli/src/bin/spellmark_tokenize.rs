// spellmark-tokenize: print word spans for lines from stdin.
//
// Segmentation follows the same UAX #29 word boundaries the engine uses,
// so the printed byte ranges are exactly the ranges a recheck would
// classify.
//
// Usage:
//   spellmark-tokenize

use std::io::{self, BufRead, Write};

use spellmark_engine::tokenizer;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if spellmark_cli::wants_help(&args) {
        println!("spellmark-tokenize: print word spans for lines from stdin.");
        println!();
        println!("Usage: spellmark-tokenize");
        println!();
        println!("Reads lines from stdin and prints one `<start>..<end> <word>`");
        println!("line per word span (byte offsets).");
        return;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        for span in tokenizer::tokenize(&line) {
            let _ = writeln!(out, "{}..{} {}", span.start, span.end, span.text);
        }
        let _ = writeln!(out);
    }
}
