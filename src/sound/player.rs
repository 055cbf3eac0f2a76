/// `rodio`-backed sound playback.
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::PathBuf;

use rodio::{Decoder, OutputStream, Sink};

use super::{Cue, SoundPlayer, embedded};

/// Plays the bundled notification files, falling back to embedded tones.
///
/// Sound files are resolved relative to the working directory, matching
/// where the bundled `lib/` directory sits when the program is run from
/// its install root.
pub struct RodioPlayer {
    ding: PathBuf,
    ring: PathBuf,
}

impl RodioPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ding: PathBuf::from("lib/ding.mp3"),
            ring: PathBuf::from("lib/ring.mp3"),
        }
    }
}

impl Default for RodioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundPlayer for RodioPlayer {
    fn play(&self, cue: Cue) {
        let Ok((_stream, stream_handle)) = OutputStream::try_default() else {
            return;
        };
        let Ok(sink) = Sink::try_new(&stream_handle) else {
            return;
        };

        let path = match cue {
            Cue::Ding => &self.ding,
            Cue::Ring => &self.ring,
        };
        if let Ok(file) = File::open(path) {
            if let Ok(source) = Decoder::new(BufReader::new(file)) {
                sink.append(source);
                sink.sleep_until_end();
                return;
            }
        }

        // Bundled file absent or undecodable: play the embedded tone.
        let data = match cue {
            Cue::Ding => embedded::DING_WAV,
            Cue::Ring => embedded::RING_WAV,
        };
        let Ok(source) = Decoder::new(Cursor::new(data)) else {
            return;
        };
        sink.append(source);
        sink.sleep_until_end();
    }
}
