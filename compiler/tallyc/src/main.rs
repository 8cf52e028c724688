//! Tally CLI
//!
//! Evaluate and inspect Tally notation documents from the terminal.

use tallyc::commands::{classify_file, eval_file};
use tallyc::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: tally eval <file|-> [--var name=expr]... [--max-depth=N]");
                std::process::exit(1);
            }
            eval_file(&args[2..]);
        }
        "classify" => {
            if args.len() < 3 {
                eprintln!("Usage: tally classify <file|->");
                std::process::exit(1);
            }
            classify_file(&args[2]);
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("tally {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Tally - line-oriented notation language");
    println!();
    println!("Usage: tally <command> [options]");
    println!();
    println!("Commands:");
    println!("  eval <file>       Evaluate a document, one result per line");
    println!("  classify <file>   Show how each line is classified");
    println!("  help              Show this message");
    println!("  version           Show version information");
    println!();
    println!("Eval options:");
    println!("  --var name=expr   Provide an external variable (math functions only)");
    println!("  --max-depth=N     User function call depth limit (default 10000)");
    println!();
    println!("Use '-' as the file to read from stdin.");
    println!();
    println!("Environment:");
    println!("  RUST_LOG              Enable tracing output (e.g. RUST_LOG=tally_eval=debug)");
    println!("  TALLY_LOG_TREE        Render tracing spans as a tree");
    println!("  TALLY_MAX_CALL_DEPTH  Default call depth limit");
}
