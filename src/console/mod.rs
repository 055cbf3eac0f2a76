/// Console capability layer: everything the flow needs from a terminal,
/// behind a minimal trait so the core logic is testable without one.
pub mod term;

use std::io;

use crate::countdown::Stage;
use crate::messages::Messages;

pub use term::TermConsole;

/// Terminal interaction surface used by the timer flow.
pub trait Console {
    /// Clear the screen.
    fn clear(&self);

    /// Clear the screen and render the boxed header panel.
    fn header(&self, messages: &Messages);

    /// Print a plain line.
    fn line(&self, text: &str);

    /// Print a secondary (de-emphasized) line.
    fn note(&self, text: &str);

    /// Print a success line.
    fn success(&self, text: &str);

    /// Print an error line to stderr.
    fn error(&self, text: &str);

    /// Print an empty line.
    fn blank(&self);

    /// Print the configured-timer summary shown before a countdown.
    fn summary(&self, kettle: Option<&str>, brew: Option<&str>);

    /// Block until the user presses Enter.
    ///
    /// # Errors
    ///
    /// Returns the underlying `io::Error` when stdin cannot be read.
    fn wait_for_enter(&self) -> io::Result<()>;

    /// Ask a free-text question. Returns the trimmed answer, which may be
    /// empty when the user just presses Enter.
    ///
    /// # Errors
    ///
    /// Returns the underlying `io::Error` when stdin cannot be read.
    fn ask_text(&self, prompt: &str) -> io::Result<String>;

    /// Ask a yes/no question. An empty answer takes the default.
    ///
    /// # Errors
    ///
    /// Returns the underlying `io::Error` when stdin cannot be read.
    fn ask_confirm(&self, prompt: &str, default_yes: bool) -> io::Result<bool>;

    /// Open a determinate progress display for one countdown stage.
    fn progress(&self, stage: Stage, task: &str, total_secs: u64) -> Box<dyn Progress>;
}

/// Handle to a running progress display.
pub trait Progress {
    /// Report elapsed seconds since the stage started.
    fn set_elapsed(&self, secs: u64);

    /// Tear the display down, removing it from the screen.
    fn clear(&self);
}
