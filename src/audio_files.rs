use crate::audio::{Audio, AudioSpec};
use crate::errors::{codec_open_error, Result, WavTextError};
use crate::quantize::{quantize_pcm, Quantize};
use std::fs;
use std::io::{self, Read, Seek, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const BYTES_PER_SAMPLE: u16 = 2;

pub trait AudioReader<R>
where
    R: Read,
{
    /// Create a new decoding reader from an existing data reader.
    ///
    /// Audio metadata is read immediately, while sample data will be done on demand.
    fn new(reader: R) -> Result<Self>
    where
        Self: Sized;

    /// Total number in samples. This will be `duration * channels`.
    fn num_samples(&self) -> u32;

    fn spec(&self) -> AudioSpec;

    /// Decode every remaining sample, quantized to 16 bits.
    fn read_all(self) -> Result<Audio>;
}

pub trait AudioWriter<W>: Sized
where
    W: Write + Seek,
{
    fn new(writer: W, spec: AudioSpec) -> Result<Self>;

    fn write(&mut self, sample: i16) -> Result<()>;

    fn finalize(self) -> Result<()>;

    fn write_all(&mut self, samples: &[i16]) -> Result<()> {
        for sample in samples {
            self.write(*sample)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct WavReader<R> {
    underlier: hound::WavReader<R>,
}

impl WavReader<io::BufReader<fs::File>> {
    pub fn open(path: &Path) -> Result<Self> {
        let underlier = hound::WavReader::open(path).map_err(|e| codec_open_error(path, e))?;
        Ok(WavReader { underlier })
    }
}

impl<R> WavReader<R>
where
    R: Read,
{
    pub fn bits_per_sample(&self) -> u16 {
        self.underlier.spec().bits_per_sample
    }
}

impl<R> AudioReader<R> for WavReader<R>
where
    R: Read,
{
    fn new(reader: R) -> Result<Self> {
        let underlier = hound::WavReader::new(reader)?;
        Ok(WavReader { underlier })
    }

    fn num_samples(&self) -> u32 {
        self.underlier.len()
    }

    fn spec(&self) -> AudioSpec {
        let hound_spec = self.underlier.spec();
        AudioSpec {
            channels: hound_spec.channels,
            sample_rate: hound_spec.sample_rate,
        }
    }

    fn read_all(mut self) -> Result<Audio> {
        let spec = self.spec();
        let hound_spec = self.underlier.spec();
        let samples = match hound_spec.sample_format {
            hound::SampleFormat::Float => self
                .underlier
                .samples::<f32>()
                .map(|s| s.map(Quantize::quantize))
                .collect::<std::result::Result<Vec<i16>, hound::Error>>()?,
            hound::SampleFormat::Int => {
                let bits = hound_spec.bits_per_sample;
                self.underlier
                    .samples::<i32>()
                    .map(|s| s.map(|v| quantize_pcm(v, bits)))
                    .collect::<std::result::Result<Vec<i16>, hound::Error>>()?
            }
        };
        Ok(Audio { samples, spec })
    }
}

/// Read only the header of a wav file.
pub fn read_spec(path: &Path) -> Result<AudioSpec> {
    Ok(WavReader::open(path)?.spec())
}

pub fn read_wav(path: &Path) -> Result<Audio> {
    WavReader::open(path)?.read_all()
}

pub struct WavWriter<W>
where
    W: Seek + Write,
{
    pub spec: AudioSpec,
    underlier: hound::WavWriter<W>,
}

impl<W> AudioWriter<W> for WavWriter<W>
where
    W: Write + Seek,
{
    fn new(writer: W, spec: AudioSpec) -> Result<Self> {
        let hound_spec = hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let underlier = hound::WavWriter::new(writer, hound_spec)?;
        Ok(WavWriter { spec, underlier })
    }

    fn write(&mut self, sample: i16) -> Result<()> {
        self.underlier.write_sample(sample).map_err(WavTextError::from)
    }

    fn finalize(self) -> Result<()> {
        self.underlier.finalize().map_err(WavTextError::from)
    }
}

/// Write `audio` as 16 bit PCM to `path`, replacing whatever is there.
///
/// Samples go to a temporary file next to `path` which is only moved into
/// place once the header has been finalized, so a failed write never leaves a
/// truncated wav behind.
pub fn write_wav(path: &Path, audio: &Audio) -> Result<()> {
    check_writable_spec(&audio.spec)?;
    let channels = audio.spec.channels;
    if audio.samples.len() % channels as usize != 0 {
        return Err(WavTextError::InvalidChannelLayout {
            samples: audio.samples.len(),
            channels,
        });
    }

    let mut tmp = sibling_temp_file(path)?;
    {
        let buf_writer = io::BufWriter::new(tmp.as_file_mut());
        let mut writer = WavWriter::new(buf_writer, audio.spec)?;
        writer.write_all(&audio.samples)?;
        writer.finalize()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| WavTextError::from(e.error))?;
    Ok(())
}

/// Reject specs the 16 bit wav header cannot describe: no channels, a zero
/// sample rate, or a block align / byte rate that overflows its header field.
pub fn check_writable_spec(spec: &AudioSpec) -> Result<()> {
    let block_align = spec.channels.checked_mul(BYTES_PER_SAMPLE);
    let byte_rate = block_align.and_then(|align| spec.sample_rate.checked_mul(align as u32));
    match byte_rate {
        Some(rate) if rate > 0 => Ok(()),
        _ => Err(WavTextError::UnsupportedAudioSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
        }),
    }
}

/// Create the temporary file that will later be persisted over `path`.
///
/// It takes the permissions of the file it replaces, or the usual mode for a
/// freshly created file, rather than the owner-only mode of a temp file.
pub(crate) fn sibling_temp_file(path: &Path) -> Result<NamedTempFile> {
    let dir = parent_dir(path);
    match fs::metadata(path) {
        Ok(existing) => {
            let tmp = NamedTempFile::new_in(dir)?;
            tmp.as_file().set_permissions(existing.permissions())?;
            Ok(tmp)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => new_file_temp(dir),
        Err(e) => Err(WavTextError::from(e)),
    }
}

#[cfg(unix)]
fn new_file_temp(dir: &Path) -> Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    // 0o666 is filtered through the umask at creation, like File::create.
    Ok(tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)?)
}

#[cfg(not(unix))]
fn new_file_temp(dir: &Path) -> Result<NamedTempFile> {
    Ok(NamedTempFile::new_in(dir)?)
}

/// Directory a temporary sibling of `path` should be created in.
pub(crate) fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
