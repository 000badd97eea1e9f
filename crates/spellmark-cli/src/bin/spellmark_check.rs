// spellmark-check: flag misspelled words in lines from stdin.
//
// Reads text from stdin (one line at a time) and reports the misspelled
// ranges of each line:
//   C: <line>                      (no misspellings)
//   W: <line>                      (has misspellings)
//      <start>..<end> <word>       (one per misspelled range)
//
// Usage:
//   spellmark-check [-d DICT_PATH] [-l TAGS] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Directory containing <tag>.txt wordlists
//   -l, --lang TAGS        Comma-separated language tags to activate
//   -s, --suggest          Also print suggestions for misspelled words
//   -h, --help             Print help

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use spellmark_engine::{SpellEngine, TextBuffer};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = spellmark_cli::parse_dict_path(&args);
    let (langs, args) = spellmark_cli::parse_langs(&args);

    if spellmark_cli::wants_help(&args) {
        println!("spellmark-check: flag misspelled words in lines from stdin.");
        println!();
        println!("Usage: spellmark-check [-d DICT_PATH] [-l TAGS] [OPTIONS]");
        println!();
        println!("Reads lines from stdin. Prints:");
        println!("  C: <line>                 (no misspellings)");
        println!("  W: <line>                 (has misspellings)");
        println!("     <start>..<end> <word>  (one per misspelled range)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory containing <tag>.txt wordlists");
        println!("  -l, --lang TAGS        Comma-separated language tags to activate");
        println!("  -s, --suggest          Also print suggestions for misspelled words");
        println!("  -h, --help             Print this help");
        return;
    }

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");

    let registry = spellmark_cli::load_registry(dict_path.as_deref())
        .unwrap_or_else(|e| spellmark_cli::fatal(&e));

    let buffer = Rc::new(RefCell::new(TextBuffer::new("")));
    let mut engine = SpellEngine::new(Box::new(Rc::clone(&buffer)), Box::new(registry));

    match langs {
        Some(langs) => {
            if let Err(e) = engine.set_active_languages(&langs) {
                spellmark_cli::fatal(&e.to_string());
            }
        }
        None => engine.activate_default_languages(),
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

        buffer.borrow_mut().set_text(line.as_str());
        engine.text_changed();

        if engine.misspelled_ranges().is_empty() {
            let _ = writeln!(out, "C: {line}");
            continue;
        }

        let _ = writeln!(out, "W: {line}");
        let ranges: Vec<_> = engine.misspelled_ranges().to_vec();
        for span in &ranges {
            let _ = writeln!(out, "   {}..{} {}", span.start, span.end, span.text);
            if show_suggestions {
                for (tag, candidates) in engine.suggestions(span) {
                    if candidates.is_empty() {
                        continue;
                    }
                    let _ = writeln!(out, "   S[{tag}]: {}", candidates.join(", "));
                }
            }
        }
    }
}
