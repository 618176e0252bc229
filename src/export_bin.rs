use wavtext::pipeline::{self, ExportConfig};
use wavtext::project::{self, path_or_resource};
use wavtext::runtime_setup;

use anyhow::{Context, Result};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use structopt::StructOpt;

#[macro_use]
extern crate log;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "wav2txt",
    about = "Dump the samples of a wav file as comma separated 16 bit integers."
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
        help = "Input .wav file. Defaults to resources/train_short.wav under the project root."
    )]
    input: Option<PathBuf>,

    #[structopt(
        short = "o",
        long = "output",
        parse(from_os_str),
        help = "Output text file, overwritten if present. Defaults to resources/data_array.txt under the project root."
    )]
    output: Option<PathBuf>,

    #[structopt(
        short = "j",
        long = "jump",
        default_value = "1",
        help = "Write only every n-th sample"
    )]
    jump: NonZeroUsize,

    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,

    #[structopt(short = "q", long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

impl Opt {
    fn into_config(self) -> Result<ExportConfig> {
        Ok(ExportConfig {
            input: path_or_resource(self.input, &self.root, project::EXPORT_INPUT)?,
            output: path_or_resource(self.output, &self.root, project::EXPORT_OUTPUT)?,
            jump: self.jump,
        })
    }
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    runtime_setup::setup_logging(runtime_setup::level_from_flags(opt.quiet, opt.verbose))?;

    let config = opt.into_config()?;
    debug!("{:?}", config);
    pipeline::export(&config).with_context(|| {
        format!(
            "failed to export {} to {}",
            config.input.display(),
            config.output.display()
        )
    })?;
    Ok(())
}
