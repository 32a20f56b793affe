use std::{fs, path::PathBuf};

use clap::Parser;
use log::warn;
use rustyline::{DefaultEditor, error::ReadlineError};
use tally::{
    console::Command,
    session::{Session, was_recorded},
    storage::{DEFAULT_STATE_FILE, State, StateFile},
};

/// tally is an interactive calculator with numeric and textual variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Where variables and history are kept between sessions.
    #[arg(short, long, default_value = DEFAULT_STATE_FILE)]
    state: PathBuf,

    /// Neither load nor save the state file.
    #[arg(short, long)]
    ephemeral: bool,

    /// Runs every line of a script file instead of reading from the prompt.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let store = (!args.ephemeral).then(|| StateFile::new(&args.state));
    let state = match &store {
        Some(store) => store.load().unwrap_or_else(|e| {
                                       warn!("starting with an empty session, {} is not loaded: {e}",
                                             store.path().display());
                                       State::default()
                                   }),
        None => State::default(),
    };
    let mut session = Session::from_state(state);

    if let Some(path) = &args.file {
        let script = fs::read_to_string(path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            std::process::exit(1);
        });
        for line in script.lines() {
            if !dispatch(&mut session, line, store.as_ref()) {
                break;
            }
        }
        return;
    }

    if let Err(e) = repl(&mut session, store.as_ref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Reads commands from the prompt until `exit` or end of input.
fn repl(session: &mut Session, store: Option<&StateFile>) -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;

    let history = session.history();
    if !history.is_empty() {
        print_history(&history);
    }

    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        };
        let command = line.trim();
        if !command.is_empty() {
            editor.add_history_entry(command)?;
        }

        if !dispatch(session, command, store) {
            break;
        }
    }

    Ok(())
}

/// Handles one input line from the prompt or a script.
///
/// Returns `false` once the line asks to end the session.
fn dispatch(session: &mut Session, line: &str, store: Option<&StateFile>) -> bool {
    match Command::classify(line) {
        Command::Blank => {},
        Command::Exit => return false,
        Command::History => print_history(&session.history()),
        Command::Evaluate(command) => run_command(session, command, store),
    }
    true
}

/// Executes one command and prints its outcome.
///
/// The session is saved whenever the command entered the history, which
/// includes commands that parsed but failed to evaluate.
fn run_command(session: &mut Session, command: &str, store: Option<&StateFile>) {
    let outcome = session.execute(command);
    match &outcome {
        Ok(value) => println!("{value}"),
        Err(e) => print_error(e),
    }

    if let Some(store) = store
       && was_recorded(&outcome)
       && let Err(e) = store.save(&session.to_state())
    {
        print_error(&e);
    }
}

fn print_error(error: &dyn std::error::Error) {
    println!("Error: {error}");
}

fn print_history(history: &[String]) {
    if history.is_empty() {
        println!("History is empty.");
        return;
    }
    println!("Recent commands:");
    for (i, command) in history.iter().enumerate() {
        println!("{}. {command}", i + 1);
    }
}
