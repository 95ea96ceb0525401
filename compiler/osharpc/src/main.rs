//! O# developer driver CLI.

use osharpc::commands::{lex_file, parse_lex_args};
use osharpc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let (path, options) = match parse_lex_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!(
                        "Usage: osharp lex <file.os> [--trivia] [--spans] [--check] [--format=plain|debug]"
                    );
                    std::process::exit(1);
                }
            };
            if let Err(e) = lex_file(&path, &options) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("osharp {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("O# front end");
    println!();
    println!("Usage: osharp <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>     Print the token stream of a file");
    println!("  help           Show this message");
    println!("  version        Show version information");
    println!();
    println!("Lex options:");
    println!("  --trivia             Include whitespace and comment tokens");
    println!("  --spans              Print byte spans");
    println!("  --check              Report lexical errors and exit non-zero if any");
    println!("  --format=<format>    Output format: plain (default), debug");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=osharp_lexer=trace) to enable logging.");
}
