// lexcop-check: flag unknown identifier fragments from stdin.
//
// Reads text from stdin, splits each line into identifier word units
// (non-alphabetic runs first, then camelCase boundaries), and reports
// every distinct unit that is not a recognizable English word, with
// ranked correction suggestions and a final count.
//
// Usage:
//   lexcop-check [OPTIONS] [DICT_PATH...] < input
//
// Positional arguments are word-list files or directories; with none
// given the standard search paths are used (see lexcop_cli::load_handle).
//
// Options:
//   -d, --dict-path PATH     Word-list file or directory (repeatable)
//   -n, --max-suggestions N  Maximum number of suggestions (default: 5)
//   -h, --help               Print help

use std::io::{self, BufRead, Write};

use lexcop_cli::TypoReport;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (mut dict_paths, args) = lexcop_cli::parse_dict_paths(&args);

    if lexcop_cli::wants_help(&args) {
        println!("lexcop-check: Flag unknown identifier fragments.");
        println!();
        println!("Usage: lexcop-check [OPTIONS] [DICT_PATH...] < input");
        println!();
        println!("Reads text from stdin. Prints every distinct unrecognized");
        println!("word unit with its suggestions, then a final count.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Word-list file or directory (repeatable)");
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 5)");
        println!("  -h, --help               Print this help");
        return;
    }

    let mut max_suggestions: Option<usize> = None;
    let mut skip_next = false;
    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-suggestions" {
            if i + 1 < args.len() {
                max_suggestions = Some(args[i + 1].parse().unwrap_or_else(|_| {
                    lexcop_cli::fatal("invalid number for --max-suggestions")
                }));
                skip_next = true;
            } else {
                lexcop_cli::fatal("--max-suggestions requires a value");
            }
        } else if !arg.starts_with('-') {
            // Positional arguments are dictionary paths, as in the classic
            // word-list tools.
            dict_paths.push(arg.clone());
        } else {
            lexcop_cli::fatal(&format!("unknown option: {arg}"));
        }
    }

    let mut handle = lexcop_cli::load_handle(&dict_paths).unwrap_or_else(|e| lexcop_cli::fatal(&e));
    if let Some(n) = max_suggestions {
        handle.set_max_suggestions(n);
    }

    let mut report = TypoReport::new();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        for token in handle.check_line(&line) {
            report.record(&token);
        }
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for typo in report.iter() {
        let suggestions = handle.suggest(typo);
        if suggestions.is_empty() {
            let _ = writeln!(out, "{typo}: (no suggestions)");
        } else {
            let _ = writeln!(out, "{typo}: {}", suggestions.join(", "));
        }
    }
    let _ = writeln!(out, "{} typo(s) found.", report.len());
}
