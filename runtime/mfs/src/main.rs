//! MFS CLI
//!
//! Runs, inspects and disassembles precompiled module repositories.

mod commands;

use std::path::PathBuf;
use std::sync::Once;

use commands::{disassemble_file, find_module, run_module};

static TRACING_INIT: Once = Once::new();

/// Install a tree-shaped tracing subscriber when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 4 {
                eprintln!("Usage: mfs run <repo> <module> [--path <dir>]...");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --path <dir>   Extra repository searched after <repo>");
                std::process::exit(1);
            }

            let mut extra = Vec::new();
            let mut i = 4;
            while i < args.len() {
                if args[i] == "--path" && i + 1 < args.len() {
                    extra.push(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else if let Some(dir) = args[i].strip_prefix("--path=") {
                    extra.push(PathBuf::from(dir));
                    i += 1;
                } else {
                    eprintln!("error: unexpected argument '{}'", args[i]);
                    std::process::exit(1);
                }
            }

            run_module(&args[2], &args[3], &extra);
        }
        "find" => {
            if args.len() < 4 {
                eprintln!("Usage: mfs find <repo> <name>");
                std::process::exit(1);
            }
            find_module(&args[2], &args[3]);
        }
        "dis" => {
            if args.len() < 3 {
                eprintln!("Usage: mfs dis <artifact.pyf>");
                std::process::exit(1);
            }
            disassemble_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("mfs {}", env!("CARGO_PKG_VERSION"));
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
    println!("MFS module repository tool");
    println!();
    println!("Usage: mfs <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <repo> <module>   Run a module as __main__");
    println!("  find <repo> <name>    Show how a name resolves in a repository");
    println!("  dis <artifact.pyf>    Disassemble a compiled artifact");
    println!("  help                  Show this help message");
    println!("  version               Show version information");
    println!();
    println!("Run options:");
    println!("  --path <dir>          Extra repository to search (repeatable)");
    println!();
    println!("Set RUST_LOG=mfs_import=debug to trace resolution and loading.");
}
