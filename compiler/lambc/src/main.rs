//! Lamb CLI
//!
//! Runs, analyzes, and shows the built-in program catalog.

use lambc::commands::{
    analyze_program, list_programs, parse_run_args, run_program, show_program, CommandError,
};
use lamb_eval::stdout_handler;

fn main() {
    lambc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: lamb run <program> [--debug-input=<file>]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --debug-input=<file>  Answer breakpoint prompts from <file>");
                std::process::exit(1);
            }

            let (name, options) = parse_run_args(&args[2..]).unwrap_or_else(|e| fail(&e));
            let handler = stdout_handler();
            match run_program(name, &options, &handler) {
                Ok(outcome) if outcome.is_success() => {}
                Ok(_) => std::process::exit(1),
                Err(e) => fail(&e),
            }
        }
        "analyze" => {
            if args.len() < 3 {
                eprintln!("Usage: lamb analyze <program>");
                std::process::exit(1);
            }
            if let Err(e) = analyze_program(&args[2], &stdout_handler()) {
                fail(&e);
            }
        }
        "show" => {
            if args.len() < 3 {
                eprintln!("Usage: lamb show <program>");
                std::process::exit(1);
            }
            match show_program(&args[2]) {
                Ok(rendered) => print!("{rendered}"),
                Err(e) => fail(&e),
            }
        }
        "list" => {
            println!("Programs:");
            print!("{}", list_programs());
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Lamb {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn fail(error: &CommandError) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Lamb interpreter and debugger");
    println!();
    println!("Usage: lamb <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <program>        Run a catalog program and print its final environment");
    println!("  analyze <program>    Report unused variables and reads before initialization");
    println!("  show <program>       Print a catalog program");
    println!("  list                 List the catalog");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --debug-input=<file> Answer breakpoint prompts from <file> instead of stdin");
    println!();
    println!("At a breakpoint, enter a variable name to inspect it, or \"Continue\" to resume.");
    println!();
    println!("Environment:");
    println!("  LAMB_LOG             Log filter, e.g. LAMB_LOG=lamb_eval=trace (logs go to stderr)");
    println!();
    println!("Examples:");
    println!("  lamb run countdown");
    println!("  lamb run inspect --debug-input=answers.txt");
    println!("  lamb analyze analysis");
}
