// lexcop-suggest: Generate correction suggestions for words.
//
// Suggests corrections for each WORD argument, or for words read from
// stdin (one per line) when no arguments are given. Recognized words are
// reported as correct.
//
// Usage:
//   lexcop-suggest [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH     Word-list file or directory (repeatable)
//   -n, --max-suggestions N  Maximum number of suggestions (default: 5)
//   -h, --help               Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_paths, args) = lexcop_cli::parse_dict_paths(&args);

    if lexcop_cli::wants_help(&args) {
        println!("lexcop-suggest: Generate correction suggestions.");
        println!();
        println!("Usage: lexcop-suggest [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Word-list file or directory (repeatable)");
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 5)");
        println!("  -h, --help               Print this help");
        return;
    }

    let mut max_suggestions: usize = 5;
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-suggestions" {
            if i + 1 < args.len() {
                max_suggestions = args[i + 1]
                    .parse()
                    .unwrap_or_else(|_| lexcop_cli::fatal("invalid number for --max-suggestions"));
                skip_next = true;
            } else {
                lexcop_cli::fatal("--max-suggestions requires a value");
            }
        } else if !arg.starts_with('-') {
            words.push(arg.clone());
        }
    }

    let mut handle = lexcop_cli::load_handle(&dict_paths).unwrap_or_else(|e| lexcop_cli::fatal(&e));
    handle.set_max_suggestions(max_suggestions);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let suggest_word = |word: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        if handle.spell(word) {
            let _ = writeln!(out, "{word} (correct)");
        } else {
            let suggestions = handle.suggest(word);
            if suggestions.is_empty() {
                let _ = writeln!(out, "{word}: (no suggestions)");
            } else {
                let _ = writeln!(out, "{word}:");
                for s in &suggestions {
                    let _ = writeln!(out, "  {s}");
                }
            }
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
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
            suggest_word(word, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(word, &mut out);
        }
    }
}
