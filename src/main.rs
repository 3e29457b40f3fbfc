use std::fs;

use clap::Parser;
use plex::{
    cli::{
        console::{StdinInput, TerminalOutput},
        logger::Logger,
        repl::start_repl,
    },
    interpreter::{program::statements, session::Session},
};

/// plex is a tiny scripting language of comma-separated statements with
/// variables, saved folders and conditionals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells plex to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints diagnostics about each run to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Suppresses everything except program output and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// The program to run, or a file path with `--file`. Starts the
    /// interactive prompt when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    let logger = Logger::new(args.verbose, args.quiet);
    let mut session = Session::new();

    let Some(contents) = args.contents else {
        if let Err(e) = start_repl(&mut session, &logger) {
            logger.error(&format!("The interactive prompt failed: {e}"));
            std::process::exit(1);
        }
        return;
    };

    // Files hold one statement per line, like folder content.
    let program = if args.file {
        logger.detail(&format!("Reading program from '{contents}'"));
        let source = fs::read_to_string(&contents).unwrap_or_else(|_| {
            logger.error(&format!("Failed to read the input file '{contents}'. Perhaps this file does not exist?"));
            std::process::exit(1);
        });
        source.replace('\n', ",")
    } else {
        contents
    };

    logger.detail_item("statements", &statements(&program).count().to_string());

    let mut output = TerminalOutput::new(&logger);
    session.run_with(&program, &mut StdinInput, &mut output);

    logger.detail_item("output lines", &output.lines().to_string());
    logger.detail_item("errors", &output.errors().to_string());
}
