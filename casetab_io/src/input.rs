//! Case description file reader.

use std::path::Path;

use casetab_core::{CasePair, pair_lines};
use tracing::info;

use crate::error::{Error, Result};

/// Reads `path` and groups its non-blank lines into (header, narrative) pairs.
pub fn read_case_pairs(path: &Path) -> Result<Vec<CasePair>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let pairs = pair_lines(content.lines())?;
    info!("Read {} cases from {}", pairs.len(), path.display());
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn reads_pairs_separated_by_blank_lines() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("patients.txt");
        std::fs::write(
            &path,
            "Case 1\r\nHe is 30 years old.\r\n\r\nCase 2\nShe stayed at home.\n\n",
        )
        .expect("write input");

        let pairs = read_case_pairs(&path).expect("pairs should be read");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].header, "Case 1");
        assert_eq!(pairs[0].narrative, "He is 30 years old.");
        assert_eq!(pairs[1].narrative, "She stayed at home.");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = read_case_pairs(Path::new("/definitely/not/here.txt"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn odd_line_count_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("patients.txt");
        std::fs::write(&path, "Case 1\nText.\nCase 2\n").expect("write input");

        assert!(matches!(
            read_case_pairs(&path),
            Err(Error::Core(casetab_core::Error::DanglingHeader { .. }))
        ));
    }
}
