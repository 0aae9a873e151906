//! Output file naming.
//!
//! The output sits next to the base document and records which pages were
//! swapped: `report.pdf` with pages 3 to 5 replaced becomes
//! `report_swap003-005.pdf`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Build the `_swapAAA-BBB` suffix from 1-based page numbers.
///
/// Numbers are zero-padded to three digits; wider numbers are kept whole.
pub fn swap_suffix(first_page: usize, last_page: usize) -> String {
    format!("_swap{first_page:03}-{last_page:03}")
}

/// Derive the output path for a swap.
///
/// The suffix goes in front of the last `.` of the file name, so a
/// dotfile such as `.hidden` becomes `_swapAAA-BBB.hidden`. Dots in parent
/// directories are never treated as extension separators. A file name
/// without a dot gets the suffix appended and no extension.
///
/// # Examples
///
/// ```
/// use pdfswap::naming::derive_output_path;
/// use std::path::{Path, PathBuf};
///
/// let out = derive_output_path(Path::new("doc.pdf"), 3, 5);
/// assert_eq!(out, PathBuf::from("doc_swap003-005.pdf"));
///
/// let out = derive_output_path(Path::new("scans/doc"), 1, 2);
/// assert_eq!(out, PathBuf::from("scans/doc_swap001-002"));
/// ```
pub fn derive_output_path(original: &Path, first_page: usize, last_page: usize) -> PathBuf {
    let suffix = swap_suffix(first_page, last_page);

    let Some(file_name) = original.file_name() else {
        // No file name component ("", "..", "/"): nothing to split.
        let mut name = original.as_os_str().to_owned();
        name.push(&suffix);
        return PathBuf::from(name);
    };

    if let Some((stem, extension)) = file_name.to_str().and_then(|n| n.rsplit_once('.')) {
        return original.with_file_name(format!("{stem}{suffix}.{extension}"));
    }

    // Not valid UTF-8: fall back to the platform's own split.
    let mut name = OsString::from(original.file_stem().unwrap_or(file_name));
    name.push(&suffix);
    if let Some(extension) = original.extension() {
        name.push(".");
        name.push(extension);
    }

    original.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_swap_suffix() {
        assert_eq!(swap_suffix(3, 5), "_swap003-005");
        assert_eq!(swap_suffix(1, 1), "_swap001-001");
        assert_eq!(swap_suffix(120, 1204), "_swap120-1204");
    }

    #[rstest]
    #[case("doc.pdf", 3, 5, "doc_swap003-005.pdf")]
    #[case("a.b.pdf", 1, 2, "a.b_swap001-002.pdf")]
    #[case("out/dir.v2/report.PDF", 10, 12, "out/dir.v2/report_swap010-012.PDF")]
    #[case("noext", 1, 4, "noext_swap001-004")]
    #[case("dir.d/noext", 1, 4, "dir.d/noext_swap001-004")]
    #[case(".hidden", 2, 2, "_swap002-002.hidden")]
    #[case("dir/.config.pdf", 1, 1, "dir/.config_swap001-001.pdf")]
    #[case("trailing.", 1, 3, "trailing_swap001-003.")]
    fn test_derive_output_path(
        #[case] original: &str,
        #[case] first: usize,
        #[case] last: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(
            derive_output_path(Path::new(original), first, last),
            PathBuf::from(expected)
        );
    }

    #[test]
    fn test_degenerate_path_does_not_panic() {
        let out = derive_output_path(Path::new(""), 1, 1);
        assert_eq!(out, PathBuf::from("_swap001-001"));
    }
}
