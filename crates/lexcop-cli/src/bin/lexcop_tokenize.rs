// lexcop-tokenize: Dump the identifier token stream for stdin.
//
// Reads text from stdin and prints each token with its type. Needs no
// dictionary: tokenization is independent of the word list.
//
// Usage:
//   lexcop-tokenize [-h]

use std::io::{self, Read, Write};

use lexcop_core::enums::TokenType;
use lexcop_en::tokenizer;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if lexcop_cli::wants_help(&args) {
        println!("lexcop-tokenize: Dump the identifier token stream.");
        println!();
        println!("Usage: lexcop-tokenize < input");
        println!();
        println!("Reads text from stdin, prints tokens with types:");
        println!("  WORD:      <text>");
        println!("  SEPARATOR: <text>");
        return;
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| lexcop_cli::fatal(&format!("failed to read stdin: {e}")));

    let chars: Vec<char> = input.chars().collect();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut pos = 0;
    loop {
        let (kind, len) = tokenizer::next_token(&chars, pos);
        if kind == TokenType::None {
            break;
        }
        let text: String = chars[pos..pos + len].iter().collect();
        let type_str = match kind {
            TokenType::Word => "WORD",
            TokenType::Separator => "SEPARATOR",
            TokenType::None => "NONE",
        };
        let display_text = text
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t");
        let _ = writeln!(out, "{type_str:9} [{:>4}..{:>4}]: {display_text}", pos, pos + len);
        pos += len;
    }
}
