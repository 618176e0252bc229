use std::fs;
use std::io::Write;
use std::path::Path;

use crate::audio_files::sibling_temp_file;
use crate::errors::{read_text_error, Result, WavTextError};

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| read_text_error(path, e))
}

/// Replace the contents of `path` with `text`, byte for byte.
///
/// The file either ends up holding all of `text` or is left as it was. An
/// existing file keeps its permissions.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    let mut tmp = sibling_temp_file(path)?;
    tmp.write_all(text.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| WavTextError::from(e.error))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_write_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_array.txt");
        write_text(&path, "1,2,3").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"1,2,3");
        assert_dir_holds_only(dir.path(), &["data_array.txt"]);
    }

    #[test]
    fn test_write_empty_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        write_text(&path, "").unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_array.txt");
        fs::write(&path, "9,9,9,9,9,9,9,9,9").unwrap();
        write_text(&path, "1").unwrap();
        assert_eq!(read_text(&path).unwrap(), "1");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.txt");
        assert!(matches!(
            write_text(&path, "1"),
            Err(WavTextError::Io { .. })
        ));
    }

    #[test]
    fn test_read_invalid_utf8_is_not_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_array.txt");
        fs::write(&path, b"1,\xff,3").unwrap();
        match read_text(&path) {
            Err(WavTextError::NotText { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected NotText, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        for mode in [0o644, 0o640, 0o664] {
            let path = dir.path().join(format!("data_{:o}.txt", mode));
            fs::write(&path, "9,9").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();

            write_text(&path, "1,2").unwrap();

            assert_eq!(file_mode(&path), mode);
            assert_eq!(read_text(&path).unwrap(), "1,2");
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_gets_regular_creation_mode() {
        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("plain.txt");
        fs::File::create(&reference).unwrap();
        let path = dir.path().join("data_array.txt");

        write_text(&path, "1").unwrap();

        assert_eq!(file_mode(&path), file_mode(&reference));
    }

    #[test]
    fn test_read_missing_is_source_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        match read_text(&path) {
            Err(WavTextError::SourceNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected SourceNotFound, got {:?}", other),
        }
    }
}
