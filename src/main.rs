use clap::Parser;
use esatan_reader::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    if let Err(error) = commands::run(command) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("ESATAN Reader - FX/T extraction for ESATAN node output");
    println!("======================================================");
    println!();
    println!("Extract the FX and T columns from ESATAN thermal output listings.");
    println!("Nodes 99998 and 99999 are always skipped.");
    println!();
    println!("USAGE:");
    println!("    esatan-reader <COMMAND> [OPTIONS] <INPUT>...");
    println!();
    println!("COMMANDS:");
    println!("    extract     Write FX/T values as CSV, JSON or a table");
    println!("    summary     Report record counts and FX/T ranges per file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Extract FX/T from one file as CSV:");
    println!("    esatan-reader extract model.out > fx_t.csv");
    println!();
    println!("    # Extract from every run, excluding extra nodes, as JSON:");
    println!("    esatan-reader extract 'runs/*.out' --exclude 1,2 --format json -o fx_t.json");
    println!();
    println!("    # Summarise a set of runs:");
    println!("    esatan-reader summary 'runs/*.out'");
    println!();
    println!("For detailed help on any command, use:");
    println!("    esatan-reader <COMMAND> --help");
}
