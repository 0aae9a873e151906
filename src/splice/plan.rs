//! Page range arithmetic for a swap.
//!
//! A swap splits the output into three runs: base pages before the start
//! index ("pre"), every page of the embed document, and the base pages after
//! the replaced span ("post"). [`SplicePlan`] validates the start index once
//! and then answers every range question from that.

use serde::Serialize;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::error::{Result, SwapError};
use crate::naming::derive_output_path;

/// Validated page ranges for replacing part of a base document.
///
/// # Examples
///
/// ```
/// use pdfswap::splice::SplicePlan;
///
/// // Ten page base, three page embed, start at the third page.
/// let plan = SplicePlan::new(2, 10, 3).unwrap();
/// assert_eq!(plan.pre_range(), 0..2);
/// assert_eq!(plan.replaced_range(), 2..5);
/// assert_eq!(plan.post_range(), 5..10);
/// assert_eq!(plan.output_page_count(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplicePlan {
    base_count: usize,
    embed_count: usize,
    effective_from: usize,
}

impl SplicePlan {
    /// Build a plan from an effective zero-based start index, as returned
    /// by [`FromPage::resolve`](crate::index::FromPage::resolve).
    ///
    /// A start equal to the base page count appends the embed document.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::IndexOutOfRange`] if the start index is negative
    /// or lies past the end of the base document.
    pub fn new(effective_from: i64, base_count: usize, embed_count: usize) -> Result<Self> {
        let effective_from = usize::try_from(effective_from)
            .ok()
            .filter(|&from| from <= base_count)
            .ok_or_else(|| SwapError::index_out_of_range(effective_from, base_count))?;

        Ok(Self {
            base_count,
            embed_count,
            effective_from,
        })
    }

    /// Page count of the base document.
    pub fn base_count(&self) -> usize {
        self.base_count
    }

    /// Page count of the embed document.
    pub fn embed_count(&self) -> usize {
        self.embed_count
    }

    /// Zero-based index of the first replaced base page.
    pub fn effective_from(&self) -> usize {
        self.effective_from
    }

    /// Base pages kept ahead of the embed document.
    pub fn pre_range(&self) -> Range<usize> {
        0..self.effective_from
    }

    /// Embed pages, always the whole document.
    pub fn embed_range(&self) -> Range<usize> {
        0..self.embed_count
    }

    /// Base pages dropped in favour of the embed document.
    ///
    /// Clipped to the base document; the nominal span may run past its end.
    pub fn replaced_range(&self) -> Range<usize> {
        self.effective_from..self.replaced_end()
    }

    /// Base pages kept after the embed document.
    pub fn post_range(&self) -> Range<usize> {
        self.replaced_end()..self.base_count
    }

    /// Number of pages the output will have.
    pub fn output_page_count(&self) -> usize {
        self.pre_range().len() + self.embed_count + self.post_range().len()
    }

    /// 1-based number of the first replaced page, as used in file names.
    pub fn first_page(&self) -> usize {
        self.effective_from + 1
    }

    /// 1-based number of the last replaced page, clipped to the base.
    pub fn last_page(&self) -> usize {
        self.replaced_end()
    }

    /// Output path next to `base_path`, tagged with the replaced range.
    pub fn output_path(&self, base_path: &Path) -> PathBuf {
        derive_output_path(base_path, self.first_page(), self.last_page())
    }

    fn replaced_end(&self) -> usize {
        (self.effective_from + self.embed_count).min(self.base_count)
    }
}
