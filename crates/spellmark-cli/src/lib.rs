// spellmark-cli: shared utilities for the CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use spellmark_core::LanguageTag;
use spellmark_wordlist::WordlistRegistry;

/// File extension for wordlist files (`en.txt`, `de_DE.txt`, ...).
const WORDLIST_EXT: &str = "txt";

/// Build a registry from the first search-path directory that contains
/// wordlist files.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `SPELLMARK_DICT_PATH` environment variable
/// 3. `~/.spellmark`
/// 4. Current working directory
///
/// A wordlist file is named `<tag>.txt` and holds one word per line;
/// blank lines and lines starting with `#` are skipped.
pub fn load_registry(dict_path: Option<&str>) -> Result<WordlistRegistry, String> {
    let search_paths = build_search_paths(dict_path);

    for dir in &search_paths {
        if !dir.is_dir() {
            continue;
        }
        let registry = load_dir(dir)?;
        if !registry.is_empty() {
            return Ok(registry);
        }
    }

    Err(format!(
        "could not find any wordlist (*.{}) in the search paths:\n{}",
        WORDLIST_EXT,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Load every `<tag>.txt` in `dir` into a registry.
fn load_dir(dir: &Path) -> Result<WordlistRegistry, String> {
    let mut registry = WordlistRegistry::new();

    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("failed to read {}: {}", dir.display(), e))?;
    for entry in entries {
        let entry = entry.map_err(|e| format!("failed to read {}: {}", dir.display(), e))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(WORDLIST_EXT) {
            continue;
        }
        let Some(tag) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string);
        registry.insert_language(LanguageTag::new(tag), words);
    }

    Ok(registry)
}

/// Build the list of directories to search for wordlist files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    // 2. SPELLMARK_DICT_PATH environment variable
    if let Ok(env_path) = std::env::var("SPELLMARK_DICT_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".spellmark"));
    }

    // 4. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Parse a `--lang=TAGS` or `-l TAGS` argument (comma-separated tags).
///
/// Returns `(tags, remaining_args)`; `None` means the engine should fall
/// back to its default language activation.
pub fn parse_langs(args: &[String]) -> (Option<Vec<LanguageTag>>, Vec<String>) {
    let mut langs = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--lang=") {
            langs = Some(split_tags(val));
        } else if arg == "--lang" || arg == "-l" {
            if i + 1 < args.len() {
                langs = Some(split_tags(&args[i + 1]));
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (langs, remaining)
}

fn split_tags(value: &str) -> Vec<LanguageTag> {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(LanguageTag::new)
        .collect()
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
