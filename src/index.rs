//! Start-page resolution.
//!
//! Users name the first replaced page the way they read a document:
//! positive numbers are 1-based page numbers, negative numbers count back
//! from the end (`-1` is the last page), and `0` is the first page.
//!
//! [`FromPage::resolve`] turns the human-facing number into the zero-based
//! index of the first replaced page of a given base document. It does not
//! check bounds; that is left to [`SplicePlan`](crate::splice::SplicePlan).

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SwapError};

/// Raw `--frompage` value as typed by the user.
///
/// # Examples
///
/// ```
/// use pdfswap::index::FromPage;
///
/// let page: FromPage = "3".parse().unwrap();
/// assert_eq!(page.resolve(10), 2);
///
/// let page: FromPage = "-1".parse().unwrap();
/// assert_eq!(page.resolve(10), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FromPage(i64);

impl FromPage {
    /// Wrap an already parsed page number.
    pub fn new(page: i64) -> Self {
        Self(page)
    }

    /// The number the user typed.
    pub fn get(&self) -> i64 {
        self.0
    }

    /// Resolve against a base document of `base_count` pages.
    ///
    /// `n > 0` is the 1-based page `n`. Zero is the first page. Strictly
    /// negative values count back from the end, so the result is still
    /// negative when they reach further back than the document is long.
    pub fn resolve(&self, base_count: usize) -> i64 {
        effective_index(self.to_index(), base_count)
    }

    /// Signed zero-based index, before end-relative folding.
    fn to_index(&self) -> i64 {
        if self.0 > 0 { self.0 - 1 } else { self.0 }
    }
}

impl FromStr for FromPage {
    type Err = SwapError;

    /// Parse a page number.
    ///
    /// Surrounding whitespace is ignored and an empty string reads as `0`.
    /// A leading `+` is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidPageIndex`] for anything that is not a
    /// whole number.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self(0));
        }

        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|e| SwapError::invalid_page_index(s, format!("expected a whole number ({e})")))
    }
}

impl fmt::Display for FromPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fold an end-relative index against the base page count.
///
/// Strictly negative indices count from the end: `-1` on a ten page
/// document is `9`. The result can still be negative when the request
/// reaches further back than the document is long.
fn effective_index(index: i64, base_count: usize) -> i64 {
    if index < 0 {
        base_count as i64 + index
    } else {
        index
    }
}
