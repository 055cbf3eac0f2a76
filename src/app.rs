/// Top-level timer flow: input resolution, stage sequencing, notification
/// and confirmation.
use std::io;

use thiserror::Error;

use crate::console::Console;
use crate::countdown::{self, Stage};
use crate::duration::{self, InvalidDurationFormat};
use crate::messages::Messages;
use crate::sound::{Cue, SoundPlayer};

/// Kettle duration used when the interactive prompt is left blank.
const DEFAULT_KETTLE: &str = "3m";

/// Errors that end a run early.
#[derive(Debug, Error)]
pub enum TimerError {
    /// A duration string failed to parse for the named stage.
    #[error("invalid {} duration '{}'", .stage.name(), .source.input)]
    InvalidDuration {
        /// Which stage was being parsed.
        stage: Stage,
        #[source]
        source: InvalidDurationFormat,
    },

    /// Stdin could not be read while prompting.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl TimerError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidDuration { .. } => 2,
            Self::Io(_) => 1,
        }
    }
}

/// The duration strings resolved for this run.
struct Inputs {
    kettle: Option<String>,
    brew: Option<String>,
    /// Whether the values came from the interactive prompts.
    interactive: bool,
}

/// Run the timer flow end to end.
///
/// Both configured durations are validated before the first countdown
/// starts, so a bad brew string never leaves a half-finished run.
///
/// # Errors
///
/// Returns `TimerError::InvalidDuration` when either duration string is
/// malformed, `TimerError::Io` when stdin cannot be read.
pub fn run(
    kettle_flag: Option<&str>,
    brew_flag: Option<&str>,
    messages: &Messages,
    console: &dyn Console,
    sound: &dyn SoundPlayer,
) -> Result<(), TimerError> {
    let inputs = resolve_inputs(kettle_flag, brew_flag, messages, console)?;

    let kettle_secs = parse_stage(inputs.kettle.as_deref(), Stage::Kettle)?;
    let brew_secs = parse_stage(inputs.brew.as_deref(), Stage::Brew)?;

    match (kettle_secs, brew_secs) {
        (Some(secs), _) => kettle_first(secs, brew_secs, &inputs, messages, console, sound),
        (None, Some(secs)) => brew_only(secs, &inputs, messages, console, sound),
        (None, None) => Ok(()),
    }
}

/// Determine the (kettle, brew) duration strings for this run.
///
/// Flags win when at least one is present: a single flag means "fully
/// specified" and the other stage is simply absent, with no interactive
/// top-up for the missing value. Only a completely bare invocation falls
/// back to the prompts, where a blank kettle answer takes the default and
/// a blank brew answer skips the brew stage entirely.
fn resolve_inputs(
    kettle_flag: Option<&str>,
    brew_flag: Option<&str>,
    messages: &Messages,
    console: &dyn Console,
) -> Result<Inputs, TimerError> {
    console.header(messages);

    if kettle_flag.is_some() || brew_flag.is_some() {
        return Ok(Inputs {
            kettle: kettle_flag.map(ToOwned::to_owned),
            brew: brew_flag.map(ToOwned::to_owned),
            interactive: false,
        });
    }

    console.note(messages.no_timers);
    console.wait_for_enter()?;

    console.header(messages);
    let kettle_answer = console.ask_text(messages.kettle_prompt)?;
    let kettle = if kettle_answer.is_empty() {
        DEFAULT_KETTLE.to_owned()
    } else {
        kettle_answer
    };

    console.header(messages);
    let brew_answer = console.ask_text(messages.brew_prompt)?;
    let brew = if brew_answer.is_empty() {
        None
    } else {
        Some(brew_answer)
    };

    console.header(messages);
    Ok(Inputs {
        kettle: Some(kettle),
        brew,
        interactive: true,
    })
}

fn parse_stage(spec: Option<&str>, stage: Stage) -> Result<Option<u64>, TimerError> {
    spec.map(|text| {
        duration::parse(text).map_err(|source| TimerError::InvalidDuration { stage, source })
    })
    .transpose()
}

/// Kettle countdown, then the optional confirmation-gated brew stage.
fn kettle_first(
    kettle_secs: u64,
    brew_secs: Option<u64>,
    inputs: &Inputs,
    messages: &Messages,
    console: &dyn Console,
    sound: &dyn SoundPlayer,
) -> Result<(), TimerError> {
    if inputs.interactive {
        console.blank();
    } else {
        console.wait_for_enter()?;
    }

    console.summary(inputs.kettle.as_deref(), inputs.brew.as_deref());
    console.blank();
    countdown::run(Stage::Kettle, messages.task(Stage::Kettle), kettle_secs, console);
    console.success(messages.kettle_boiled);
    console.blank();
    sound.play(Cue::Ding);

    let Some(brew_secs) = brew_secs else {
        // Kettle-only run: done right after the notification.
        return Ok(());
    };

    if console.ask_confirm(messages.brew_confirm, true)? {
        console.header(messages);
        console.blank();
        console.summary(inputs.kettle.as_deref(), inputs.brew.as_deref());
        console.blank();
        brew_finish(brew_secs, messages, console, sound)?;
    } else {
        console.line(messages.brew_cancelled);
        console.wait_for_enter()?;
        console.clear();
    }
    Ok(())
}

/// Brew-only run: no kettle countdown, no confirmation gate.
fn brew_only(
    brew_secs: u64,
    inputs: &Inputs,
    messages: &Messages,
    console: &dyn Console,
    sound: &dyn SoundPlayer,
) -> Result<(), TimerError> {
    console.header(messages);
    console.blank();
    console.summary(inputs.kettle.as_deref(), inputs.brew.as_deref());
    console.blank();
    brew_finish(brew_secs, messages, console, sound)
}

fn brew_finish(
    brew_secs: u64,
    messages: &Messages,
    console: &dyn Console,
    sound: &dyn SoundPlayer,
) -> Result<(), TimerError> {
    countdown::run(Stage::Brew, messages.task(Stage::Brew), brew_secs, console);
    console.success(messages.tea_brewed);
    sound.play(Cue::Ring);
    console.wait_for_enter()?;
    console.clear();
    Ok(())
}
