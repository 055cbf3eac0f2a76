/// Embedded fallback tones, generated at compile time.
///
/// Used when the bundled `lib/*.mp3` files are not present next to the
/// working directory. Plain PCM WAV: 44.1 kHz, mono, 16-bit, 0.4 s. The
/// two cues differ in pitch and pattern: a single high "ding" for the
/// kettle, a double "ring-ring" for the brew.
const SAMPLE_RATE: u32 = 44_100;
const DURATION_MS: u32 = 400;
const NUM_SAMPLES: usize = (SAMPLE_RATE * DURATION_MS / 1000) as usize;
const WAV_HEADER_SIZE: usize = 44;
const WAV_FILE_SIZE: usize = WAV_HEADER_SIZE + NUM_SAMPLES * 2;

/// Edge fade per tone burst (10 ms) so the gate doesn't click.
const FADE_SAMPLES: usize = 441;

/// Peak sample amplitude, kept below i16::MAX to leave headroom.
const PEAK: i64 = 22_000;

/// Kettle notification: one sustained high tone (B5).
pub const DING_WAV: &[u8] = &tone_wav(988, 1);

/// Brew notification: two short bursts (E5) with a gap between them.
pub const RING_WAV: &[u8] = &tone_wav(659, 2);

const fn put_u16(data: &mut [u8; WAV_FILE_SIZE], offset: usize, value: u16) {
    let bytes = value.to_le_bytes();
    data[offset] = bytes[0];
    data[offset + 1] = bytes[1];
}

const fn put_u32(data: &mut [u8; WAV_FILE_SIZE], offset: usize, value: u32) {
    let bytes = value.to_le_bytes();
    data[offset] = bytes[0];
    data[offset + 1] = bytes[1];
    data[offset + 2] = bytes[2];
    data[offset + 3] = bytes[3];
}

const fn put_tag(data: &mut [u8; WAV_FILE_SIZE], offset: usize, tag: &[u8; 4]) {
    data[offset] = tag[0];
    data[offset + 1] = tag[1];
    data[offset + 2] = tag[2];
    data[offset + 3] = tag[3];
}

/// Generate a gated triangle-wave tone as a complete WAV file.
///
/// `bursts` on-windows are separated by equal silent gaps; `bursts = 1`
/// fills the whole buffer with tone.
const fn tone_wav(freq: u32, bursts: usize) -> [u8; WAV_FILE_SIZE] {
    let mut data = [0u8; WAV_FILE_SIZE];

    // RIFF/WAVE header: PCM, mono, 16-bit.
    put_tag(&mut data, 0, b"RIFF");
    put_u32(&mut data, 4, (WAV_FILE_SIZE - 8) as u32);
    put_tag(&mut data, 8, b"WAVE");
    put_tag(&mut data, 12, b"fmt ");
    put_u32(&mut data, 16, 16);
    put_u16(&mut data, 20, 1);
    put_u16(&mut data, 22, 1);
    put_u32(&mut data, 24, SAMPLE_RATE);
    put_u32(&mut data, 28, SAMPLE_RATE * 2);
    put_u16(&mut data, 32, 2);
    put_u16(&mut data, 34, 16);
    put_tag(&mut data, 36, b"data");
    put_u32(&mut data, 40, (NUM_SAMPLES * 2) as u32);

    let period = (SAMPLE_RATE / freq) as usize;
    let half = (period / 2) as i64;
    let window = NUM_SAMPLES / (bursts * 2 - 1);

    let mut i = 0;
    while i < NUM_SAMPLES {
        let w = i / window;
        let on = w % 2 == 0 && w < bursts * 2 - 1;
        if on && half > 0 {
            // Triangle wave centered on zero, range [-half, half].
            let pos = (i % period) as i64;
            let raw = if pos < half {
                pos * 2 - half
            } else {
                (period as i64 - pos) * 2 - half
            };
            let amp = raw * PEAK / half;

            // Linear fade at both edges of the window.
            let in_window = i % window;
            let from_end = window - 1 - in_window;
            let edge = if in_window < from_end { in_window } else { from_end };
            let env = if edge < FADE_SAMPLES {
                edge as i64
            } else {
                FADE_SAMPLES as i64
            };

            let sample = (amp * env / FADE_SAMPLES as i64) as i16;
            put_u16(&mut data, WAV_HEADER_SIZE + i * 2, sample as u16);
        }
        i += 1;
    }

    data
}
