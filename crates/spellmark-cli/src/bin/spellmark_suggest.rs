// spellmark-suggest: print correction candidates for words from stdin.
//
// Reads words from stdin (one per line). Correct words print `C: word`;
// misspelled words print one `S[tag]:` line per active dictionary with
// that dictionary's ranked candidates.
//
// Usage:
//   spellmark-suggest [-d DICT_PATH] [-l TAGS]

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use spellmark_engine::{SpellEngine, TextBuffer};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = spellmark_cli::parse_dict_path(&args);
    let (langs, args) = spellmark_cli::parse_langs(&args);

    if spellmark_cli::wants_help(&args) {
        println!("spellmark-suggest: print correction candidates for words from stdin.");
        println!();
        println!("Usage: spellmark-suggest [-d DICT_PATH] [-l TAGS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word            (correct)");
        println!("  W: word            (misspelled)");
        println!("  S[tag]: a, b, c    (candidates per active dictionary)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory containing <tag>.txt wordlists");
        println!("  -l, --lang TAGS        Comma-separated language tags to activate");
        println!("  -h, --help             Print this help");
        return;
    }

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
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        buffer.borrow_mut().set_text(word);
        engine.text_changed();

        let Some(span) = engine.word_at(0) else {
            let _ = writeln!(out, "C: {word}");
            continue;
        };

        if engine.is_word_correct(&span.text) {
            let _ = writeln!(out, "C: {word}");
            continue;
        }

        let _ = writeln!(out, "W: {word}");
        for (tag, candidates) in engine.suggestions(&span) {
            if candidates.is_empty() {
                let _ = writeln!(out, "S[{tag}]: (no suggestions)");
            } else {
                let _ = writeln!(out, "S[{tag}]: {}", candidates.join(", "));
            }
        }
    }
}
