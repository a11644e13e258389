//! Whisper.cpp speech-to-text backend
//!
//! Compiled in behind the `whisper` feature. Without the feature the
//! transcriber still constructs so text-only builds keep working, but every
//! transcription reports unavailable.

use std::env;
use std::path::PathBuf;

use log::warn;

#[cfg(feature = "whisper")]
use std::path::Path;

#[cfg(feature = "whisper")]
use anyhow::{anyhow, Context};
#[cfg(feature = "whisper")]
use log::{debug, info};
#[cfg(feature = "whisper")]
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use super::transcriber::Transcriber;
use crate::error::Result;
#[cfg(feature = "whisper")]
use crate::error::PulseError;

/// Default Whisper GGML model location.
const DEFAULT_MODEL_PATH: &str = "models/ggml-base.en.bin";

/// Whisper expects 16 kHz mono input.
#[cfg(feature = "whisper")]
const WHISPER_SAMPLE_RATE: u32 = 16_000;

fn default_model_path() -> PathBuf {
    env::var("PULSEUX_WHISPER_MODEL")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH))
}

/// Speech-to-text over a local Whisper GGML model.
pub struct WhisperTranscriber {
    #[cfg(feature = "whisper")]
    context: WhisperContext,
}

impl WhisperTranscriber {
    /// Load the model from the environment-configured location.
    pub fn new() -> Result<Self> {
        Self::with_model(default_model_path())
    }

    /// Load a Whisper GGML model from the given path.
    #[cfg(feature = "whisper")]
    pub fn with_model(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(PulseError::ModelLoad {
                path: path.display().to_string(),
                reason: "file not found".to_string(),
            });
        }

        info!("loading whisper model from {}", path.display());
        let context = WhisperContext::new_with_params(
            &path.to_string_lossy(),
            WhisperContextParameters::default(),
        )
        .map_err(|e| PulseError::ModelLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { context })
    }

    #[cfg(not(feature = "whisper"))]
    pub fn with_model(_path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {})
    }

    /// Decode the audio file into a transcript.
    #[cfg(feature = "whisper")]
    fn run_whisper(&self, audio: &Path) -> anyhow::Result<String> {
        let samples = load_audio(audio)?;
        if samples.is_empty() {
            return Err(anyhow!("audio file contains no samples"));
        }
        debug!(
            "transcribing {} samples from {}",
            samples.len(),
            audio.display()
        );

        let mut state = self
            .context
            .create_state()
            .context("cannot create decode state")?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_language(Some("en"));
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        state.full(params, &samples).context("decode failed")?;

        let segments = state
            .full_n_segments()
            .context("cannot read segment count")?;
        let mut transcript = String::new();
        for i in 0..segments {
            let text = state
                .full_get_segment_text(i)
                .context("cannot read segment text")?;
            transcript.push_str(&text);
        }

        Ok(transcript.trim().to_string())
    }
}

#[cfg(feature = "whisper")]
impl Transcriber for WhisperTranscriber {
    fn name(&self) -> &str {
        "whisper"
    }

    fn transcribe(&self, audio: &Path) -> Option<String> {
        match self.run_whisper(audio) {
            Ok(text) if text.is_empty() => {
                warn!("whisper produced no text for {}", audio.display());
                None
            }
            Ok(text) => Some(text),
            Err(e) => {
                warn!("whisper transcription failed: {:#}", e);
                None
            }
        }
    }
}

#[cfg(not(feature = "whisper"))]
impl Transcriber for WhisperTranscriber {
    fn name(&self) -> &str {
        "whisper"
    }

    fn transcribe(&self, audio: &std::path::Path) -> Option<String> {
        warn!(
            "whisper support not compiled in, cannot transcribe {}. Build with --features whisper",
            audio.display()
        );
        None
    }
}

/// Read a WAV file as 16 kHz mono f32 samples.
#[cfg(feature = "whisper")]
fn load_audio(path: &Path) -> anyhow::Result<Vec<f32>> {
    let mut reader = hound::WavReader::open(path).context("cannot open audio file")?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()
            .context("cannot read float samples")?,
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<std::result::Result<_, _>>()
                .context("cannot read integer samples")?
        }
    };

    let mono = downmix(&samples, spec.channels as usize);
    Ok(resample(&mono, spec.sample_rate, WHISPER_SAMPLE_RATE))
}

/// Average interleaved channels down to mono.
#[cfg(feature = "whisper")]
fn downmix(samples: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return samples.to_vec();
    }
    samples
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect()
}

/// Linear-interpolation resample between sample rates.
#[cfg(feature = "whisper")]
fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    if from_rate == to_rate || samples.is_empty() {
        return samples.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let out_len = (samples.len() as f64 / ratio).floor() as usize;
    let mut out = Vec::with_capacity(out_len);

    for i in 0..out_len {
        let pos = i as f64 * ratio;
        let idx = pos.floor() as usize;
        let frac = (pos - idx as f64) as f32;
        let a = samples[idx];
        let b = if idx + 1 < samples.len() {
            samples[idx + 1]
        } else {
            a
        };
        out.push(a + (b - a) * frac);
    }

    out
}


#[cfg(all(test, not(feature = "whisper")))]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_stub_constructs_without_model() {
        assert!(WhisperTranscriber::with_model("/nonexistent/ggml-model.bin").is_ok());
        assert!(WhisperTranscriber::new().is_ok());
    }

    #[test]
    fn test_stub_reports_unavailable() {
        let mut audio = tempfile::NamedTempFile::new().expect("temp file");
        audio.write_all(b"RIFF").expect("write");

        let transcriber = WhisperTranscriber::new().expect("stub constructs");
        assert_eq!(transcriber.transcribe(audio.path()), None);
    }
}
