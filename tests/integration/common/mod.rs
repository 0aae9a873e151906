//! Shared fixtures for the integration tests.
//!
//! Fixture PDFs are built in memory and written to a scratch directory.
//! Every page carries a `Tag` string naming its document and position so
//! page order can be read back from the output file.

use lopdf::{Dictionary, Document, Object, Stream, StringFormat, dictionary};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use pdfswap::config::Config;
use pdfswap::index::FromPage;

/// Scratch directory holding a base and an embed document.
pub struct Workspace {
    pub dir: TempDir,
    pub base: PathBuf,
    pub embed: PathBuf,
}

impl Workspace {
    /// Create `base.pdf` with `base_pages` pages tagged `b1..` and
    /// `embed.pdf` with `embed_pages` pages tagged `e1..`.
    pub fn new(base_pages: usize, embed_pages: usize) -> Self {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("base.pdf");
        let embed = dir.path().join("embed.pdf");
        write_tagged_pdf(&base, "b", base_pages);
        write_tagged_pdf(&embed, "e", embed_pages);
        Self { dir, base, embed }
    }

    /// Quiet configuration swapping from `from_page`.
    pub fn config(&self, from_page: i64) -> Config {
        let mut config = Config::new(&self.base, &self.embed, FromPage::new(from_page));
        config.quiet = true;
        config
    }

    /// Path inside the scratch directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Names of every file in the scratch directory, sorted.
    pub fn files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Write a PDF whose pages are tagged `{prefix}1`, `{prefix}2`, ...
///
/// Pages inherit their media box and font resources from the page tree
/// root, the way many producers lay documents out.
pub fn write_tagged_pdf(path: &Path, prefix: &str, pages: usize) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids = Vec::with_capacity(pages);
    for n in 1..=pages {
        let tag = format!("{prefix}{n}");
        let content = format!("BT /F1 24 Tf 72 720 Td ({tag}) Tj ET");
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Tag" => Object::String(tag.into_bytes(), StringFormat::Literal),
        });
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        }
        .into(),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).unwrap();
}

/// Read the page tags of a PDF in page order.
pub fn page_tags(path: &Path) -> Vec<String> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .into_values()
        .map(|id| match doc.get_dictionary(id).and_then(|d| d.get(b"Tag")) {
            Ok(Object::String(bytes, _)) => String::from_utf8_lossy(bytes).into_owned(),
            _ => String::from("?"),
        })
        .collect()
}

/// Tags `{prefix}{n}` for every `n` in `range`.
pub fn tags(prefix: &str, range: std::ops::RangeInclusive<usize>) -> Vec<String> {
    range.map(|n| format!("{prefix}{n}")).collect()
}
