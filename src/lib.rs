#[macro_use]
extern crate log;

#[cfg(test)]
mod test_utils;

pub mod audio;
pub mod audio_files;
pub mod errors;
pub mod pipeline;
pub mod project;
pub mod quantize;
pub mod runtime_setup;
pub mod sample_text;
pub mod text_files;
