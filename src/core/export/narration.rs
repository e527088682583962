use crate::error::{Error, Result};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::info;

/// Spanish narration via a local piper voice: the script goes to piper's
/// stdin and a WAV lands at `out_path`. The voice model carries the
/// language, so only Spanish voices make sense here.
pub struct NarrationSynthesizer {
    model_path: String,
}

impl NarrationSynthesizer {
    pub fn new(model_path: impl Into<String>) -> Self {
        Self {
            model_path: model_path.into(),
        }
    }

    /// Synthesizes the full script and returns the audio duration in
    /// seconds.
    pub fn synthesize(&self, text: &str, out_path: &Path) -> Result<f64> {
        let out = out_path
            .to_str()
            .ok_or_else(|| Error::custom("Narration output path is not valid UTF-8"))?;

        let mut child = Command::new("piper")
            .args(["--model", &self.model_path, "--output_file", out])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        {
            let stdin = child
                .stdin
                .as_mut()
                .ok_or_else(|| Error::custom("Failed to open piper stdin"))?;
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(Error::custom(
                "piper terminó con error al sintetizar la narración",
            ));
        }

        let duration = wav_duration_seconds(out_path)?;
        info!(seconds = duration, "narration synthesized");
        Ok(duration)
    }
}

fn wav_duration_seconds(path: &Path) -> Result<f64> {
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let frames = reader.len() as f64 / spec.channels as f64;
    Ok(frames / spec.sample_rate as f64)
}

#[cfg(test)]
mod tests {
    use super::wav_duration_seconds;
    use hound::{SampleFormat, WavSpec, WavWriter};

    #[test]
    fn duration_from_sample_count() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tone.wav");

        let spec = WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&path, spec).expect("writer");
        for _ in 0..22050 {
            writer.write_sample(0i16).expect("sample");
        }
        writer.finalize().expect("finalize");

        let duration = wav_duration_seconds(&path).expect("duration");
        assert!((duration - 1.0).abs() < 1e-6);
    }
}
