use std::num::NonZeroU32;
use std::time::Duration;

/// Sample rate used when nothing else says otherwise.
pub const DEFAULT_SAMPLE_RATE: NonZeroU32 = match NonZeroU32::new(44100) {
    Some(rate) => rate,
    None => panic!("default sample rate must be non-zero"),
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AudioSpec {
    /// Number of audio channels (e.g. 2 for stereo)
    pub channels: u16,
    /// Number of samples per second
    pub sample_rate: u32,
}

impl Default for AudioSpec {
    fn default() -> Self {
        AudioSpec {
            channels: 1,
            sample_rate: DEFAULT_SAMPLE_RATE.get(),
        }
    }
}

/// A whole file's worth of 16 bit samples.
///
/// Samples are kept interleaved, exactly as the wav container stores them.
#[derive(Clone, Debug, PartialEq)]
pub struct Audio {
    pub samples: Vec<i16>,
    pub spec: AudioSpec,
}

impl Audio {
    pub fn new(samples: Vec<i16>, spec: AudioSpec) -> Audio {
        Audio { samples, spec }
    }

    /// Duration in samples per channel
    pub fn frames(&self) -> usize {
        if self.spec.channels == 0 {
            return 0;
        }
        self.samples.len() / self.spec.channels as usize
    }

    pub fn duration(&self) -> Duration {
        if self.spec.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frames() as f64 / self.spec.sample_rate as f64)
    }

    /// Smallest and largest sample, or `None` for silence of zero length.
    pub fn peak_range(&self) -> Option<(i16, i16)> {
        let min = self.samples.iter().copied().min()?;
        let max = self.samples.iter().copied().max()?;
        Some((min, max))
    }
}
