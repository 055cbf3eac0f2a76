/// Audio notification layer: named cues played to completion.
pub mod embedded;
pub mod player;

pub use player::RodioPlayer;

/// Which notification sound to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Kettle-boiled notification.
    Ding,
    /// Tea-brewed notification.
    Ring,
}

/// Plays a cue, blocking until playback finishes.
///
/// Playback failures (no output device, missing or undecodable file) are
/// ignored.
pub trait SoundPlayer {
    fn play(&self, cue: Cue);
}
