//! Audio seam and asset loading
//!
//! The game needs two tracks: a short paddle-hit effect and a looping
//! background track. Both are checked at startup; a missing or malformed
//! file aborts the process instead of running silent.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail, ensure};

use crate::sim::GameEvent;

/// File name of the paddle-hit effect inside the assets directory
pub const HIT_SOUND: &str = "hit.wav";
/// File name of the background track inside the assets directory
pub const MUSIC_TRACK: &str = "menu.wav";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
}

impl SoundEffect {
    /// Effect triggered by a game event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PaddleHit => Some(SoundEffect::PaddleHit),
            _ => None,
        }
    }
}

/// Consumer of sound requests
pub trait AudioSink {
    /// Play a short effect once
    fn play(&mut self, effect: SoundEffect);
    /// Start the background track looping
    fn play_music_loop(&mut self);
}

/// Format details of a PCM WAV file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavInfo {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    /// Length of the sample data in bytes
    pub data_len: u32,
}

impl WavInfo {
    /// Playback length in seconds
    pub fn duration_secs(&self) -> f32 {
        let frame_bytes = self.channels as u32 * (self.bits_per_sample as u32 / 8);
        if frame_bytes == 0 || self.sample_rate == 0 {
            return 0.0;
        }
        self.data_len as f32 / (frame_bytes * self.sample_rate) as f32
    }
}

fn u16_at(bytes: &[u8], at: usize) -> Option<u16> {
    Some(u16::from_le_bytes(bytes.get(at..at + 2)?.try_into().ok()?))
}

fn u32_at(bytes: &[u8], at: usize) -> Option<u32> {
    Some(u32::from_le_bytes(bytes.get(at..at + 4)?.try_into().ok()?))
}

/// Parse the header of a RIFF/WAVE PCM file
pub fn parse_wav(bytes: &[u8]) -> Result<WavInfo> {
    ensure!(bytes.len() >= 12, "file too short for a RIFF header");
    ensure!(&bytes[0..4] == b"RIFF", "missing RIFF tag");
    ensure!(&bytes[8..12] == b"WAVE", "not a WAVE file");

    let mut format: Option<(u16, u16, u32, u16)> = None;
    let mut data_len: Option<u32> = None;

    // Walk the chunk list
    let mut at = 12;
    while at + 8 <= bytes.len() {
        let id = &bytes[at..at + 4];
        let len = u32_at(bytes, at + 4).context("truncated chunk header")?;
        let body = at + 8;
        match id {
            b"fmt " => {
                let audio_format = u16_at(bytes, body).context("truncated fmt chunk")?;
                let channels = u16_at(bytes, body + 2).context("truncated fmt chunk")?;
                let sample_rate = u32_at(bytes, body + 4).context("truncated fmt chunk")?;
                let bits = u16_at(bytes, body + 14).context("truncated fmt chunk")?;
                format = Some((audio_format, channels, sample_rate, bits));
            }
            b"data" => data_len = Some(len),
            _ => {}
        }
        // Chunks are padded to even length
        at = body + len as usize + (len as usize & 1);
    }

    let Some((audio_format, channels, sample_rate, bits_per_sample)) = format else {
        bail!("no fmt chunk");
    };
    ensure!(audio_format == 1, "unsupported encoding {audio_format} (PCM only)");
    ensure!(channels > 0 && sample_rate > 0, "invalid channel count or sample rate");
    let data_len = data_len.context("no data chunk")?;
    ensure!(data_len > 0, "empty data chunk");

    Ok(WavInfo {
        channels,
        sample_rate,
        bits_per_sample,
        data_len,
    })
}

/// A validated sound file
#[derive(Debug, Clone)]
pub struct Sound {
    pub name: String,
    pub info: WavInfo,
    pub bytes: Vec<u8>,
}

impl Sound {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let info = parse_wav(&bytes).with_context(|| format!("invalid sound {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { name, info, bytes })
    }
}

/// Both tracks the game needs
#[derive(Debug, Clone)]
pub struct AudioAssets {
    pub hit: Sound,
    pub music: Sound,
}

impl AudioAssets {
    /// Load and validate both tracks from `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        let hit = Sound::load(&dir.join(HIT_SOUND)).context("loading paddle-hit sound")?;
        let music = Sound::load(&dir.join(MUSIC_TRACK)).context("loading background track")?;
        log::info!(
            "Loaded audio: {} ({:.2}s), {} ({:.2}s)",
            hit.name,
            hit.info.duration_secs(),
            music.name,
            music.info.duration_secs()
        );
        Ok(Self { hit, music })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal 8-bit mono PCM file
    fn wav(samples: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + samples.len() as u32).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&1u16.to_le_bytes()); // mono
        out.extend_from_slice(&8000u32.to_le_bytes());
        out.extend_from_slice(&8000u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&8u16.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&(samples.len() as u32).to_le_bytes());
        out.extend_from_slice(samples);
        out
    }

    #[test]
    fn test_parse_wav() {
        let info = parse_wav(&wav(&[128; 4000])).unwrap();
        assert_eq!(info.channels, 1);
        assert_eq!(info.sample_rate, 8000);
        assert_eq!(info.bits_per_sample, 8);
        assert_eq!(info.data_len, 4000);
        assert!((info.duration_secs() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_parse_wav_rejects_garbage() {
        assert!(parse_wav(b"ID3\x03\x00").is_err());
        assert!(parse_wav(b"RIFF\x00\x00\x00\x00AVI LIST").is_err());
    }

    #[test]
    fn test_parse_wav_rejects_empty_data() {
        let err = parse_wav(&wav(&[])).unwrap_err();
        assert!(err.to_string().contains("empty data"));
    }

    #[test]
    fn test_parse_wav_rejects_compressed() {
        let mut bytes = wav(&[0; 10]);
        bytes[20] = 3; // IEEE float
        assert!(parse_wav(&bytes).is_err());
    }

    #[test]
    fn test_load_missing_asset_names_file() {
        let dir = std::env::temp_dir().join("advanced-pong-missing-assets");
        let err = AudioAssets::load(&dir).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains(HIT_SOUND), "{message}");
    }

    #[test]
    fn test_load_bundled_assets() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let assets = AudioAssets::load(&dir).unwrap();
        assert_eq!(assets.hit.name, HIT_SOUND);
        assert!(assets.music.info.duration_secs() > assets.hit.info.duration_secs());
    }

    #[test]
    fn test_only_paddle_hits_make_sound() {
        assert_eq!(
            SoundEffect::for_event(&GameEvent::PaddleHit),
            Some(SoundEffect::PaddleHit)
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::WallBounce), None);
        assert_eq!(SoundEffect::for_event(&GameEvent::Restarted), None);
    }
}
