// lexcop-spell: Check words from stdin against the validity oracle.
//
// Reads words from stdin (one per line) and reports whether each word
// is recognized:
//   C: word    (correct)
//   W: word    (unrecognized)
//
// Usage:
//   lexcop-spell [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Word-list file or directory (repeatable)
//   -s, --suggest          Also print suggestions for unrecognized words
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_paths, args) = lexcop_cli::parse_dict_paths(&args);

    if lexcop_cli::wants_help(&args) {
        println!("lexcop-spell: Check words from stdin.");
        println!();
        println!("Usage: lexcop-spell [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (unrecognized)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Word-list file or directory (repeatable)");
        println!("  -s, --suggest          Also print suggestions for unrecognized words");
        println!("  -h, --help             Print this help");
        return;
    }

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");

    let handle = lexcop_cli::load_handle(&dict_paths).unwrap_or_else(|e| lexcop_cli::fatal(&e));

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

        if handle.spell(word) {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_suggestions {
                for suggestion in handle.suggest(word) {
                    let _ = writeln!(out, "S: {suggestion}");
                }
            }
        }
    }
}
