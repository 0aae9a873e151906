//! User-facing output for pdfswap.
//!
//! [`OutputFormatter`] prints status lines in quiet, normal and verbose
//! modes. The `display_*` helpers render a [`SwapReport`].

pub mod formatter;

pub use formatter::OutputFormatter;

use crate::io::reader::format_file_size;
use crate::swap::SwapReport;

/// Describe the replaced range in words.
pub fn describe_range(report: &SwapReport) -> String {
    let plan = &report.plan;
    if plan.replaced_range().is_empty() {
        format!(
            "insert {} page(s) after page {}",
            plan.embed_count(),
            plan.effective_from()
        )
    } else {
        format!(
            "replace pages {}-{} with {} page(s)",
            report.first_page,
            report.last_page,
            plan.embed_count()
        )
    }
}

/// Display the plan and, in verbose mode, its details.
pub fn display_plan(formatter: &OutputFormatter, report: &SwapReport) {
    let plan = &report.plan;

    formatter.info(&format!(
        "{}: {}",
        report.base.display(),
        describe_range(report)
    ));

    if formatter.is_verbose() {
        formatter.section("Plan");
    }
    formatter.detail("Base", &format!("{} page(s)", plan.base_count()));
    formatter.detail(
        "Embed",
        &format!("{} ({} page(s))", report.embed.display(), plan.embed_count()),
    );
    formatter.detail("Kept before", &format_range(plan.pre_range()));
    formatter.detail("Kept after", &format_range(plan.post_range()));
    formatter.detail("Output pages", &report.output_pages.to_string());
}

/// Display the final report.
pub fn display_report(formatter: &OutputFormatter, report: &SwapReport) {
    display_plan(formatter, report);

    match report.bytes_written {
        Some(bytes) => {
            formatter.success(&format!(
                "Wrote {} ({})",
                report.output.display(),
                format_file_size(bytes)
            ));
            formatter.debug(&format!(
                "Finished in {:.2}s",
                report.elapsed.as_secs_f64()
            ));
        }
        None => formatter.info(&format!(
            "Dry run: would write {}",
            report.output.display()
        )),
    }
}

/// 1-based, inclusive rendering of a zero-based page range.
fn format_range(range: std::ops::Range<usize>) -> String {
    match range.len() {
        0 => "none".to_string(),
        1 => format!("page {}", range.start + 1),
        _ => format!("pages {}-{}", range.start + 1, range.end),
    }
}
