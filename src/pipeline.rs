//! The two conversions: wav to sample text, and sample text back to wav.
//!
//! Both read their whole input into memory, transform it, and write their
//! whole output in one go.

use std::num::{NonZeroU32, NonZeroUsize};
use std::path::PathBuf;
use std::time::Duration;

use stopwatch::Stopwatch;

use crate::audio::{Audio, AudioSpec, DEFAULT_SAMPLE_RATE};
use crate::audio_files::{check_writable_spec, read_spec, read_wav, write_wav};
use crate::errors::Result;
use crate::sample_text;
use crate::text_files::{read_text, write_text};

const PREVIEW_LEN: usize = 8;

#[derive(Clone, Debug)]
pub struct ExportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Keep every `jump`th sample in the text dump.
    pub jump: NonZeroUsize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExportSummary {
    pub spec: AudioSpec,
    pub samples_read: usize,
    pub samples_written: usize,
    pub elapsed: Duration,
}

pub fn export(config: &ExportConfig) -> Result<ExportSummary> {
    let sw = Stopwatch::start_new();

    let audio = read_wav(&config.input)?;
    info!(
        "read {} samples ({} channels at {} Hz, {:?}) from {}",
        audio.samples.len(),
        audio.spec.channels,
        audio.spec.sample_rate,
        audio.duration(),
        config.input.display()
    );
    log_samples(&audio);

    let text = sample_text::encode(&audio.samples, config.jump);
    write_text(&config.output, &text)?;
    let samples_written = (audio.samples.len() + config.jump.get() - 1) / config.jump.get();
    info!(
        "wrote {} samples to {} in {:?}",
        samples_written,
        config.output.display(),
        sw.elapsed()
    );

    Ok(ExportSummary {
        spec: audio.spec,
        samples_read: audio.samples.len(),
        samples_written,
        elapsed: sw.elapsed(),
    })
}

/// Where the importer gets its container parameters from, since the text
/// carries none.
#[derive(Clone, Debug, PartialEq)]
pub enum RateSource {
    Fixed(NonZeroU32),
    /// Copy the sample rate and channel count out of an existing wav header.
    Reference(PathBuf),
}

impl Default for RateSource {
    fn default() -> Self {
        RateSource::Fixed(DEFAULT_SAMPLE_RATE)
    }
}

#[derive(Clone, Debug)]
pub struct ImportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rate: RateSource,
    /// Overrides the channel count; mono when neither this nor a reference
    /// file says otherwise.
    pub channels: Option<u16>,
}

impl ImportConfig {
    pub fn resolve_spec(&self) -> Result<AudioSpec> {
        let mut spec = match &self.rate {
            RateSource::Fixed(sample_rate) => AudioSpec {
                channels: 1,
                sample_rate: sample_rate.get(),
            },
            RateSource::Reference(path) => {
                let spec = read_spec(path)?;
                debug!(
                    "using {} Hz, {} channels from {}",
                    spec.sample_rate,
                    spec.channels,
                    path.display()
                );
                spec
            }
        };
        if let Some(channels) = self.channels {
            spec.channels = channels;
        }
        check_writable_spec(&spec)?;
        Ok(spec)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImportSummary {
    pub spec: AudioSpec,
    pub samples_written: usize,
    pub elapsed: Duration,
}

pub fn import(config: &ImportConfig) -> Result<ImportSummary> {
    let sw = Stopwatch::start_new();
    let spec = config.resolve_spec()?;

    let text = read_text(&config.input)?;
    let samples = sample_text::decode(&text)?;
    let audio = Audio::new(samples, spec);
    info!(
        "decoded {} samples from {}",
        audio.samples.len(),
        config.input.display()
    );
    log_samples(&audio);

    write_wav(&config.output, &audio)?;
    info!(
        "wrote {} ({} channels at {} Hz, {:?}) in {:?}",
        config.output.display(),
        spec.channels,
        spec.sample_rate,
        audio.duration(),
        sw.elapsed()
    );

    Ok(ImportSummary {
        spec,
        samples_written: audio.samples.len(),
        elapsed: sw.elapsed(),
    })
}

fn log_samples(audio: &Audio) {
    if let Some((min, max)) = audio.peak_range() {
        info!("sample range: {} to {}", min, max);
    }
    let preview_len = audio.samples.len().min(PREVIEW_LEN);
    debug!(
        "first samples: {:?}{}",
        &audio.samples[..preview_len],
        if audio.samples.len() > preview_len {
            " ..."
        } else {
            ""
        }
    );
}
