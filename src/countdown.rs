/// Countdown domain layer: per-stage session state machine and the
/// blocking once-per-second tick runner.
use std::thread;
use std::time::{Duration, Instant};

use crate::console::Console;

/// How often the runner refreshes the progress display.
const TICK: Duration = Duration::from_secs(1);

/// Which countdown a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// First countdown: waiting for the kettle to boil.
    Kettle,
    /// Optional second countdown: waiting for the tea to steep.
    Brew,
}

impl Stage {
    /// Lowercase stage name for display and error scoping.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Kettle => "kettle",
            Self::Brew => "brew",
        }
    }
}

/// Lifecycle of a countdown session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, clock not consulted yet.
    Idle,
    /// Ticking; elapsed < total.
    Running,
    /// Elapsed reached total. Terminal.
    Complete,
}

/// Ephemeral state for one running countdown.
///
/// Owned exclusively by the stage that runs it; never outlives the stage
/// and never shared between the kettle and brew runs.
#[derive(Debug)]
pub struct Session {
    stage: Stage,
    total_secs: u64,
    elapsed_secs: u64,
    state: SessionState,
}

impl Session {
    /// Create an idle session targeting `total_secs`.
    #[must_use]
    pub fn new(stage: Stage, total_secs: u64) -> Self {
        Self {
            stage,
            total_secs,
            elapsed_secs: 0,
            state: SessionState::Idle,
        }
    }

    /// Feed the current wall-clock elapsed seconds into the session.
    ///
    /// Elapsed is monotonic and saturating: a tick can never under-report
    /// a prior tick. The session becomes `Complete` exactly when elapsed
    /// reaches the total (a zero-second total completes on the first call).
    pub fn advance(&mut self, wall_elapsed_secs: u64) -> SessionState {
        if self.state == SessionState::Idle {
            self.state = SessionState::Running;
        }
        if wall_elapsed_secs > self.elapsed_secs {
            self.elapsed_secs = wall_elapsed_secs;
        }
        if self.elapsed_secs >= self.total_secs {
            self.state = SessionState::Complete;
        }
        self.state
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }
}

/// Run one countdown to completion, blocking the calling thread.
///
/// Opens a progress handle on the console, advances the session once per
/// second against a monotonic clock, and tears the display down when the
/// session completes. There is no mid-countdown cancellation; the only
/// early exit is process termination.
pub fn run(stage: Stage, task: &str, total_secs: u64, console: &dyn Console) {
    let mut session = Session::new(stage, total_secs);
    let progress = console.progress(session.stage(), task, total_secs);
    let started = Instant::now();

    loop {
        let state = session.advance(started.elapsed().as_secs());
        progress.set_elapsed(session.elapsed_secs());
        if state == SessionState::Complete {
            break;
        }
        thread::sleep(TICK);
    }

    progress.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let session = Session::new(Stage::Kettle, 10);
        assert_eq!(session.state, SessionState::Idle);
        assert_eq!(session.elapsed_secs(), 0);
    }

    #[test]
    fn test_running_until_total_reached() {
        let mut session = Session::new(Stage::Kettle, 3);
        assert_eq!(session.advance(0), SessionState::Running);
        assert_eq!(session.advance(1), SessionState::Running);
        assert_eq!(session.advance(2), SessionState::Running);
        assert_eq!(session.advance(3), SessionState::Complete);
    }

    #[test]
    fn test_never_complete_before_total() {
        let mut session = Session::new(Stage::Brew, 100);
        for elapsed in 0..100 {
            assert_eq!(session.advance(elapsed), SessionState::Running);
        }
        assert_eq!(session.advance(100), SessionState::Complete);
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let mut session = Session::new(Stage::Kettle, 10);
        session.advance(5);
        // A clock hiccup must not roll elapsed backwards.
        session.advance(3);
        assert_eq!(session.elapsed_secs(), 5);
    }

    #[test]
    fn test_overshoot_completes() {
        let mut session = Session::new(Stage::Brew, 4);
        assert_eq!(session.advance(9), SessionState::Complete);
    }

    #[test]
    fn test_zero_total_completes_immediately() {
        let mut session = Session::new(Stage::Kettle, 0);
        assert_eq!(session.advance(0), SessionState::Complete);
    }

    #[test]
    fn test_complete_is_terminal() {
        let mut session = Session::new(Stage::Brew, 2);
        session.advance(2);
        assert_eq!(session.advance(0), SessionState::Complete);
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::Kettle.name(), "kettle");
        assert_eq!(Stage::Brew.name(), "brew");
    }
}
