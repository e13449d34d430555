use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::LLMError;

/// Rate of audio chunks received from the model.
pub const PLAYBACK_SAMPLE_RATE: u32 = 24_000;
/// Rate the microphone stream is captured and sent at.
pub const CAPTURE_SAMPLE_RATE: u32 = 16_000;
pub const CAPTURE_MIME_TYPE: &str = "audio/pcm;rate=16000";

const I16_SCALE: f32 = 32_768.0;

/// Base64 payload ready to send on the live channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub data: String,
    pub mime_type: String,
}

/// Mono float samples at a known rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl AudioBuffer {
    /// Length in seconds.
    pub fn duration(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }
}

/// Decodes a base64 chunk of little-endian signed 16-bit mono PCM at
/// [`PLAYBACK_SAMPLE_RATE`] into samples in `[-1, 1)`.
pub fn decode_pcm16(data: &str) -> Result<AudioBuffer, LLMError> {
    let bytes = STANDARD
        .decode(data.trim())
        .map_err(|e| LLMError::ResponseFormatError {
            message: format!("audio chunk is not valid base64: {e}"),
            raw_response: String::new(),
        })?;
    if bytes.len() % 2 != 0 {
        return Err(LLMError::ResponseFormatError {
            message: format!("audio chunk has odd byte length {}", bytes.len()),
            raw_response: String::new(),
        });
    }

    let samples = bytes
        .chunks_exact(2)
        .map(|pair| f32::from(i16::from_le_bytes([pair[0], pair[1]])) / I16_SCALE)
        .collect();
    Ok(AudioBuffer {
        samples,
        sample_rate: PLAYBACK_SAMPLE_RATE,
    })
}

/// Encodes captured samples as 16-bit little-endian PCM.
///
/// Samples are clamped to `[-1, 1]`; NaN encodes as silence.
pub fn encode_pcm16(samples: &[f32]) -> Blob {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        // `as` saturates, so +1.0 lands on i16::MAX
        let value = (sample.clamp(-1.0, 1.0) * I16_SCALE) as i16;
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    Blob {
        data: STANDARD.encode(bytes),
        mime_type: CAPTURE_MIME_TYPE.to_string(),
    }
}
