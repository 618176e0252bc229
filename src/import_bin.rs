use wavtext::audio::DEFAULT_SAMPLE_RATE;
use wavtext::pipeline::{self, ImportConfig, RateSource};
use wavtext::project::{self, path_or_resource};
use wavtext::runtime_setup;

use anyhow::{Context, Result};
use std::num::NonZeroU32;
use std::path::PathBuf;
use structopt::StructOpt;

#[macro_use]
extern crate log;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "txt2wav",
    about = "Rebuild a 16 bit wav file from comma separated integer samples."
)]
struct Opt {
    #[structopt(
        short = "r",
        long = "root",
        parse(from_os_str),
        help = "Project root holding the resources/ directory. Defaults to the nearest enclosing git checkout."
    )]
    root: Option<PathBuf>,

    #[structopt(
        short = "i",
        long = "input",
        parse(from_os_str),
        help = "Input text file. Defaults to resources/new_data_array.txt under the project root."
    )]
    input: Option<PathBuf>,

    #[structopt(
        short = "o",
        long = "output",
        parse(from_os_str),
        help = "Output .wav file, overwritten if present. Defaults to resources/new_data_array.wav under the project root."
    )]
    output: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "sample-rate",
        help = "Sample rate of the output in Hz [default: 44100]",
        conflicts_with = "rate-from"
    )]
    sample_rate: Option<NonZeroU32>,

    #[structopt(
        long = "rate-from",
        parse(from_os_str),
        help = "Take the sample rate and channel count from this .wav file's header"
    )]
    rate_from: Option<PathBuf>,

    #[structopt(
        short = "c",
        long = "channels",
        help = "Number of interleaved channels in the text [default: 1, or the --rate-from file's]"
    )]
    channels: Option<u16>,

    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,

    #[structopt(short = "q", long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

impl Opt {
    fn into_config(self) -> Result<ImportConfig> {
        let rate = match self.rate_from {
            Some(path) => RateSource::Reference(path),
            None => RateSource::Fixed(self.sample_rate.unwrap_or(DEFAULT_SAMPLE_RATE)),
        };
        Ok(ImportConfig {
            input: path_or_resource(self.input, &self.root, project::IMPORT_INPUT)?,
            output: path_or_resource(self.output, &self.root, project::IMPORT_OUTPUT)?,
            rate,
            channels: self.channels,
        })
    }
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    runtime_setup::setup_logging(runtime_setup::level_from_flags(opt.quiet, opt.verbose))?;

    let config = opt.into_config()?;
    debug!("{:?}", config);
    pipeline::import(&config).with_context(|| {
        format!(
            "failed to import {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;
    Ok(())
}
