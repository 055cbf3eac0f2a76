#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! teatime — interactive kettle-and-brew countdown timer.

mod app;
mod cli;
mod console;
mod countdown;
mod duration;
mod messages;
mod sound;

use clap::Parser;

use app::TimerError;
use cli::Cli;
use console::{Console, TermConsole};
use messages::Messages;
use sound::RodioPlayer;

fn main() {
    let cli = Cli::parse();
    let messages = Messages::default();
    let console = TermConsole::new();
    let player = RodioPlayer::new();

    match app::run(
        cli.kettle.as_deref(),
        cli.brew.as_deref(),
        &messages,
        &console,
        &player,
    ) {
        Ok(()) => {}
        Err(err) => {
            match &err {
                TimerError::InvalidDuration { stage, .. } => {
                    console.error(messages.invalid_format(*stage));
                }
                TimerError::Io(io_err) => {
                    console.error(&format!("Could not read input: {io_err}"));
                }
            }
            std::process::exit(err.exit_code());
        }
    }
}
