use std::fs;
use std::path::Path;

pub fn write_int_fixture(
    path: &Path,
    bits_per_sample: u16,
    channels: u16,
    sample_rate: u32,
    samples: &[i32],
) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    samples
        .iter()
        .for_each(|s| writer.write_sample(*s).unwrap());
    writer.finalize().unwrap();
}

pub fn write_float_fixture(path: &Path, channels: u16, sample_rate: u32, samples: &[f32]) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    samples
        .iter()
        .for_each(|s| writer.write_sample(*s).unwrap());
    writer.finalize().unwrap();
}

/// Zero the sample rate and byte rate fields of a plain PCM wav header, which
/// hound still accepts on read but refuses to write.
pub fn zero_sample_rate(path: &Path) {
    let mut bytes = fs::read(path).unwrap();
    assert_eq!(&bytes[12..16], b"fmt ");
    bytes[24..32].fill(0);
    fs::write(path, bytes).unwrap();
}

/// Permission bits of `path`, without the file type.
#[cfg(unix)]
pub fn file_mode(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).unwrap().permissions().mode() & 0o777
}

/// Assert `dir` holds exactly the named entries, e.g. no stray temp files.
pub fn assert_dir_holds_only(dir: &Path, expected: &[&str]) {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    expected.sort();
    assert_eq!(
        names, expected,
        "unexpected directory contents in {}",
        dir.display()
    );
}
