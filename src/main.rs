use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use crate::commands::read_command;
use crate::game::quiz::definition::QuizDefinition;
use crate::game::quiz::settings::Settings;
use crate::game::quiz::Quiz;
use crate::game::{Flow, Game};
use crate::output::terminal::TerminalOutput;

mod commands;
mod game;
mod output;

#[derive(Parser, Debug)]
#[command(author, version, about = "Multiple-choice quiz trainer for the terminal")]
struct Cli {
    /// Question set to load (.json or .csv). Defaults to the built-in set.
    #[arg(long)]
    questions: Option<PathBuf>,

    /// Allow submitting a question with nothing selected.
    #[arg(long, env = "QUIZ_ALLOW_SKIP")]
    allow_skip: bool,
}

fn run(cli: Cli) -> Result<()> {
    let definition = match &cli.questions {
        Some(path) => QuizDefinition::open(path)?,
        None => QuizDefinition::embedded()?,
    };

    let settings = Settings {
        allow_skip: cli.allow_skip,
        ..Settings::default()
    };
    let quiz = Quiz::new(definition.into_questions(), settings)?;
    let mut game = Game::new(quiz, TerminalOutput::new()?);
    info!(
        "Starting quiz with {} questions",
        game.quiz().session().order().len()
    );
    game.begin()?;
    loop {
        let command = read_command()?;
        if game.handle(command)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
