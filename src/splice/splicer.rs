//! Page splicing.
//!
//! Assembles a fresh document from three runs of pages, in this order:
//! base pages before the start index, all embed pages, and base pages after
//! the replaced span. The algorithm is written against [`PageDocument`] so it
//! does not depend on the PDF library behind it.

use std::time::{Duration, Instant};

use crate::document::PageDocument;
use crate::error::Result;
use crate::splice::SplicePlan;

/// Statistics about a splice.
#[derive(Debug, Clone)]
pub struct SpliceStatistics {
    /// Base pages copied ahead of the embed document.
    pub pre_pages: usize,

    /// Embed pages inserted.
    pub embedded_pages: usize,

    /// Base pages copied after the embed document.
    pub post_pages: usize,

    /// Base pages dropped.
    pub replaced_pages: usize,

    /// Time taken to assemble the output.
    pub splice_time: Duration,
}

impl SpliceStatistics {
    /// Total pages in the assembled document.
    pub fn total_pages(&self) -> usize {
        self.pre_pages + self.embedded_pages + self.post_pages
    }
}

/// Result of a splice.
pub struct SpliceResult<D> {
    /// The assembled document, not yet serialized.
    pub document: D,

    /// The plan the document was built from.
    pub plan: SplicePlan,

    /// Statistics about the splice.
    pub statistics: SpliceStatistics,
}

/// Replace pages of `base` starting at `effective_from` with all pages of
/// `embed`.
///
/// `effective_from` is the zero-based index returned by
/// [`FromPage::resolve`](crate::index::FromPage::resolve). Neither source
/// document is modified.
///
/// # Errors
///
/// Returns [`SwapError::IndexOutOfRange`](crate::SwapError::IndexOutOfRange)
/// if the start index falls outside `base`, or any error the document model
/// raises while copying pages.
///
/// # Examples
///
/// ```
/// use pdfswap::document::{PageDocument, PdfDocument};
/// use pdfswap::index::FromPage;
/// use pdfswap::splice::splice;
///
/// # fn example(base: PdfDocument, embed: PdfDocument) -> pdfswap::Result<()> {
/// // Replace starting at the last page.
/// let from = FromPage::new(-1).resolve(base.page_count());
/// let mut result = splice(&base, &embed, from)?;
/// let _bytes = result.document.save()?;
/// # Ok(())
/// # }
/// ```
pub fn splice<D: PageDocument>(
    base: &D,
    embed: &D,
    effective_from: i64,
) -> Result<SpliceResult<D>> {
    let start = Instant::now();

    let embed_count = embed.page_count();
    let plan = SplicePlan::new(effective_from, base.page_count(), embed_count)?;

    log::debug!(
        "Splicing {} embed page(s) into {} base page(s) at index {}",
        embed_count,
        plan.base_count(),
        plan.effective_from()
    );

    let mut document = D::create();

    let pre: Vec<usize> = base
        .page_indices()
        .filter(|&idx| idx < plan.effective_from())
        .collect();
    append_pages(&mut document, base, &pre)?;

    let embedded: Vec<usize> = plan.embed_range().collect();
    append_pages(&mut document, embed, &embedded)?;

    let post_start = plan.effective_from() + embed_count;
    let post: Vec<usize> = base
        .page_indices()
        .filter(|&idx| idx >= post_start)
        .collect();
    append_pages(&mut document, base, &post)?;

    let statistics = SpliceStatistics {
        pre_pages: pre.len(),
        embedded_pages: embedded.len(),
        post_pages: post.len(),
        replaced_pages: plan.replaced_range().len(),
        splice_time: start.elapsed(),
    };

    Ok(SpliceResult {
        document,
        plan,
        statistics,
    })
}

fn append_pages<D: PageDocument>(target: &mut D, source: &D, indices: &[usize]) -> Result<()> {
    if indices.is_empty() {
        return Ok(());
    }

    for page in target.copy_pages(source, indices)? {
        target.add_page(page)?;
    }

    Ok(())
}
