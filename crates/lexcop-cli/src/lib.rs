// lexcop-cli: shared utilities for CLI tools.

use std::collections::HashSet;
use std::path::PathBuf;
use std::process;

use lexcop_en::handle::LexcopHandle;

/// Environment variable naming a dictionary file or directory.
const DICT_ENV: &str = "LEXCOP_DICT_PATH";

/// Per-user dictionary directory under the home directory.
const USER_DICT_SUBDIR: &str = ".lexcop/dict";

/// Conventional system word-list directory.
const SYSTEM_DICT_DIR: &str = "/usr/share/dict";

/// Load word lists and create a LexcopHandle.
///
/// If `paths` is non-empty, exactly those files/directories are loaded.
/// Otherwise the search order is:
/// 1. `LEXCOP_DICT_PATH` environment variable (file or directory)
/// 2. `~/.lexcop/dict`
/// 3. `/usr/share/dict`
pub fn load_handle(paths: &[String]) -> Result<LexcopHandle, String> {
    if !paths.is_empty() {
        return LexcopHandle::from_paths(paths).map_err(|e| e.to_string());
    }

    let search_paths = build_search_paths();
    for dir in &search_paths {
        if dir.exists() {
            return LexcopHandle::from_paths(std::slice::from_ref(dir))
                .map_err(|e| e.to_string());
        }
    }

    Err(format!(
        "no dictionary found; pass word-list paths or set {DICT_ENV}.\nSearched:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of locations to search when no paths are given.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(DICT_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(USER_DICT_SUBDIR));
    }

    paths.push(PathBuf::from(SYSTEM_DICT_DIR));
    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse repeatable `-d PATH` / `--dict-path PATH` / `--dict-path=PATH`
/// arguments from the command line.
///
/// Returns `(dict_paths, remaining_args)`.
pub fn parse_dict_paths(args: &[String]) -> (Vec<String>, Vec<String>) {
    let mut dict_paths = Vec::new();
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_paths.push(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_paths.push(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_paths, remaining)
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

/// Distinct rejected tokens, case-sensitive, in first-seen order.
#[derive(Debug, Default)]
pub struct TypoReport {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl TypoReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejected token; repeats collapse silently.
    pub fn record(&mut self, token: &str) {
        if self.seen.insert(token.to_string()) {
            self.order.push(token.to_string());
        }
    }

    /// The distinct tokens in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of distinct rejected tokens.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing was rejected.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typo_report_dedupes_case_sensitively() {
        let mut report = TypoReport::new();
        report.record("quikc");
        report.record("Quikc");
        report.record("quikc");
        let tokens: Vec<&str> = report.iter().collect();
        assert_eq!(tokens, ["quikc", "Quikc"]);
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn typo_report_keeps_first_seen_order() {
        let mut report = TypoReport::new();
        for token in ["zeta", "alpha", "midl"] {
            report.record(token);
        }
        let tokens: Vec<&str> = report.iter().collect();
        assert_eq!(tokens, ["zeta", "alpha", "midl"]);
    }

    #[test]
    fn parse_dict_paths_variants() {
        let args: Vec<String> = ["-d", "one", "--dict-path=two", "--dict-path", "three", "rest"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (paths, remaining) = parse_dict_paths(&args);
        assert_eq!(paths, ["one", "two", "three"]);
        assert_eq!(remaining, ["rest"]);
    }
}
