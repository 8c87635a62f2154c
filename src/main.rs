//! ReDoS Hunter CLI - Analyze one encoded expression.

use std::path::PathBuf;

use redos_hunter::{
    analysis::{RunMode, decode_input, evaluate_expression_with_progress, render},
    schema::SearchConfig,
};

fn print_usage(program: &str) {
    eprintln!("Usage: {} <encoded-expression> [--config <config.json>] [--diagnostic]", program);
    eprintln!();
    eprintln!("Search for inputs that trigger catastrophic backtracking.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  encoded-expression  Base64 protobuf payload (Root envelope)");
    eprintln!("  --config <path>     JSON search configuration (default: built-in)");
    eprintln!("  --diagnostic        Read a bare Expression, print progress and");
    eprintln!("                      a readable result instead of the payload");
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let mut encoded = None;
    let mut config_path = None;
    let mut mode = RunMode::Production;

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--diagnostic" => mode = RunMode::Diagnostic,
            "--config" => match rest.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => {
                    print_usage(&args[0]);
                    std::process::exit(1);
                }
            },
            "-h" | "--help" => {
                print_usage(&args[0]);
                return;
            }
            _ if encoded.is_none() => encoded = Some(arg.clone()),
            _ => {
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    let Some(encoded) = encoded else {
        print_usage(&args[0]);
        std::process::exit(1);
    };

    // Load configuration
    let config = match config_path {
        Some(path) => SearchConfig::from_file(&path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }),
        None => SearchConfig::default(),
    };

    let pattern = decode_input(&encoded, mode).unwrap_or_else(|e| {
        eprintln!("Error decoding input: {}", e);
        std::process::exit(1);
    });

    let print_interval = config.print_interval.max(1);
    let analysis = evaluate_expression_with_progress(&pattern, &config, |progress| {
        if mode == RunMode::Diagnostic && progress.generation % print_interval == 0 {
            println!("----- Generation {} -----", progress.generation);
            println!("   {:?}", progress.worst_candidate);
            println!("   {}", progress.worst_time);
        }
    })
    .unwrap_or_else(|e| {
        eprintln!("Error analyzing expression: {}", e);
        std::process::exit(1);
    });

    // Outcome travels in the payload only; exit status stays 0
    println!("{}", render(&analysis, mode));
}
