//! Page-addressable document model.
//!
//! The splice algorithm only needs a handful of capabilities from a PDF
//! library: load a document, count and enumerate its pages, copy pages from
//! another document, append pages, and serialize. [`PageDocument`] captures
//! exactly that, and [`PdfDocument`] implements it on top of `lopdf`.
//!
//! # Page copies
//!
//! Copying pages deep-copies each page dictionary together with every object
//! it reaches (content streams, resources, fonts, images, annotations) into
//! the destination under fresh object ids. Within one `copy_pages` call an
//! object shared by several pages is copied once. Inherited page attributes
//! are written onto the copied page so it renders the same outside its
//! original page tree. References from a copied page to source pages that
//! are not part of the same copy batch become `null`.

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};
use std::collections::BTreeMap;
use std::ops::Range;
use std::path::PathBuf;

use crate::config::CompressionLevel;
use crate::error::{Result, SwapError};

/// PDF version written for assembled documents.
pub const OUTPUT_VERSION: &str = "1.7";

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE_ATTRIBUTES: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against cyclic `Parent` chains in malformed page trees.
const MAX_TREE_DEPTH: usize = 64;

/// Minimal capabilities the splicer needs from a document model.
pub trait PageDocument: Sized {
    /// Handle to a page copied into this document but not yet placed.
    type Page;

    /// Create an empty document with no pages.
    fn create() -> Self;

    /// Parse a document from bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::DocumentParse`] if `bytes` is not a valid
    /// document.
    fn load(bytes: &[u8]) -> Result<Self>;

    /// Number of pages, in page tree order.
    fn page_count(&self) -> usize;

    /// Zero-based indices of all pages.
    fn page_indices(&self) -> Range<usize> {
        0..self.page_count()
    }

    /// Copy the pages at `indices` of `source` into this document.
    ///
    /// The copies are returned in the order requested and are not part of
    /// the page sequence until passed to [`add_page`](Self::add_page).
    ///
    /// # Errors
    ///
    /// Returns an error if an index is out of bounds for `source`.
    fn copy_pages(&mut self, source: &Self, indices: &[usize]) -> Result<Vec<Self::Page>>;

    /// Append a copied page to the end of the page sequence.
    fn add_page(&mut self, page: Self::Page) -> Result<()>;

    /// Serialize the document.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Serialization`] if the document cannot be
    /// encoded.
    fn save(&mut self) -> Result<Vec<u8>>;
}

/// A page copied into a [`PdfDocument`], identified by its object id there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfPage(ObjectId);

impl PdfPage {
    /// Object id of the page dictionary in the destination document.
    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

/// `lopdf`-backed document.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    inner: Document,
    compression: CompressionLevel,
}

impl PdfDocument {
    /// Wrap an existing `lopdf` document.
    pub fn from_document(inner: Document) -> Self {
        Self {
            inner,
            compression: CompressionLevel::default(),
        }
    }

    /// Set how streams are treated when saving.
    pub fn with_compression(mut self, compression: CompressionLevel) -> Self {
        self.compression = compression;
        self
    }

    /// Page object ids in page tree order.
    fn page_ids(&self) -> Vec<ObjectId> {
        self.inner.get_pages().into_values().collect()
    }

    /// Object id of the root `Pages` node.
    fn pages_root(&self) -> Result<ObjectId> {
        self.inner
            .catalog()
            .and_then(|catalog| catalog.get(b"Pages"))
            .and_then(Object::as_reference)
            .map_err(|e| SwapError::other(format!("Document has no page tree: {e}")))
    }
}

impl PageDocument for PdfDocument {
    type Page = PdfPage;

    fn create() -> Self {
        let mut doc = Document::with_version(OUTPUT_VERSION);

        let pages_id = doc.new_object_id();
        doc.objects.insert(
            pages_id,
            dictionary! {
                "Type" => "Pages",
                "Kids" => Vec::<Object>::new(),
                "Count" => 0i64,
            }
            .into(),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        Self::from_document(doc)
    }

    fn load(bytes: &[u8]) -> Result<Self> {
        let doc = Document::load_mem(bytes)
            .map_err(|e| SwapError::document_parse(PathBuf::from("<memory>"), e.to_string()))?;

        if doc.is_encrypted() {
            return Err(SwapError::encrypted_pdf(PathBuf::from("<memory>")));
        }

        Ok(Self::from_document(doc))
    }

    fn page_count(&self) -> usize {
        self.inner.get_pages().len()
    }

    fn copy_pages(&mut self, source: &Self, indices: &[usize]) -> Result<Vec<PdfPage>> {
        let source_pages = source.page_ids();
        let pages_root = self.pages_root()?;

        let requested = indices
            .iter()
            .map(|&idx| {
                source_pages
                    .get(idx)
                    .copied()
                    .ok_or_else(|| SwapError::index_out_of_range(idx as i64, source_pages.len()))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut copier = ObjectCopier::new(&source.inner, &mut self.inner);

        // Reserve ids for the whole batch first so links between pages of the
        // batch resolve to the copies.
        let targets: Vec<ObjectId> = requested
            .iter()
            .map(|&page_id| copier.reserve(page_id))
            .collect();

        for (&page_id, &target_id) in requested.iter().zip(&targets) {
            copier.copy_page(page_id, target_id, pages_root)?;
        }

        log::debug!(
            "Copied {} page(s) and {} object(s)",
            requested.len(),
            copier.copied_objects()
        );

        Ok(targets.into_iter().map(PdfPage).collect())
    }

    fn add_page(&mut self, page: PdfPage) -> Result<()> {
        let pages_root = self.pages_root()?;

        let page_dict = self
            .inner
            .get_dictionary_mut(page.object_id())
            .map_err(|_| SwapError::other("Page does not belong to this document"))?;
        page_dict.set("Parent", pages_root);

        let pages = self
            .inner
            .get_dictionary_mut(pages_root)
            .map_err(|e| SwapError::other(format!("Failed to get pages object: {e}")))?;

        match pages.get_mut(b"Kids") {
            Ok(Object::Array(kids)) => kids.push(Object::Reference(page.object_id())),
            _ => return Err(SwapError::other("Pages dictionary missing Kids array")),
        }

        let count = pages.get(b"Count").and_then(Object::as_i64).unwrap_or(0);
        pages.set("Count", Object::Integer(count + 1));

        Ok(())
    }

    fn save(&mut self) -> Result<Vec<u8>> {
        match self.compression {
            CompressionLevel::None => {}
            CompressionLevel::Standard => self.inner.compress(),
            CompressionLevel::Maximum => {
                self.inner.prune_objects();
                self.inner.compress();
            }
        }

        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| SwapError::serialization(e.to_string()))?;

        Ok(buffer)
    }
}

/// Deep-copies objects from one document into another, remapping ids.
struct ObjectCopier<'a> {
    source: &'a Document,
    target: &'a mut Document,
    mapped: BTreeMap<ObjectId, ObjectId>,
    copied: usize,
}

impl<'a> ObjectCopier<'a> {
    fn new(source: &'a Document, target: &'a mut Document) -> Self {
        Self {
            source,
            target,
            mapped: BTreeMap::new(),
            copied: 0,
        }
    }

    fn copied_objects(&self) -> usize {
        self.copied
    }

    /// Allocate (or look up) the target id for a source object.
    fn reserve(&mut self, source_id: ObjectId) -> ObjectId {
        if let Some(&id) = self.mapped.get(&source_id) {
            return id;
        }
        let id = self.target.new_object_id();
        self.mapped.insert(source_id, id);
        id
    }

    fn copy_page(
        &mut self,
        page_id: ObjectId,
        target_id: ObjectId,
        pages_root: ObjectId,
    ) -> Result<()> {
        let source = self.source;
        let page = source
            .get_dictionary(page_id)
            .map_err(|e| SwapError::other(format!("Failed to get page: {e}")))?;

        let mut flattened = page.clone();
        for key in INHERITABLE_ATTRIBUTES {
            if !flattened.has(key) {
                if let Some(value) = inherited_attribute(source, page, key) {
                    flattened.set(key.to_vec(), value.clone());
                }
            }
        }
        flattened.remove(b"Parent");

        let mut copied = self.remap_dictionary(&flattened);
        copied.set("Parent", pages_root);

        self.target.objects.insert(target_id, Object::Dictionary(copied));
        self.copied += 1;
        Ok(())
    }

    fn remap(&mut self, object: &Object) -> Object {
        match object {
            Object::Reference(id) => self.copy_indirect(*id),
            Object::Array(items) => Object::Array(items.iter().map(|o| self.remap(o)).collect()),
            Object::Dictionary(dict) => Object::Dictionary(self.remap_dictionary(dict)),
            Object::Stream(stream) => {
                let mut stream = stream.clone();
                stream.dict = self.remap_dictionary(&stream.dict);
                Object::Stream(stream)
            }
            other => other.clone(),
        }
    }

    fn remap_dictionary(&mut self, dict: &Dictionary) -> Dictionary {
        let mut out = Dictionary::new();
        for (key, value) in dict.iter() {
            out.set(key.clone(), self.remap(value));
        }
        out
    }

    fn copy_indirect(&mut self, id: ObjectId) -> Object {
        if let Some(&mapped) = self.mapped.get(&id) {
            return Object::Reference(mapped);
        }

        let source = self.source;
        let Ok(object) = source.get_object(id) else {
            return Object::Null;
        };

        // Pages outside the batch would drag the whole source tree along.
        if is_page_tree_node(object) {
            return Object::Null;
        }

        let new_id = self.reserve(id);
        let copied = self.remap(object);
        self.target.objects.insert(new_id, copied);
        self.copied += 1;
        Object::Reference(new_id)
    }
}

fn is_page_tree_node(object: &Object) -> bool {
    let Ok(dict) = object.as_dict() else {
        return false;
    };
    match dict.get(b"Type").and_then(Object::as_name) {
        Ok(name) => name == b"Page" || name == b"Pages",
        Err(_) => false,
    }
}

/// Look up a page attribute on the page or its nearest ancestor.
fn inherited_attribute<'a>(doc: &'a Document, page: &'a Dictionary, key: &[u8]) -> Option<&'a Object> {
    let mut node = page;
    for _ in 0..MAX_TREE_DEPTH {
        if let Ok(value) = node.get(key) {
            return Some(value);
        }
        let parent = node.get(b"Parent").and_then(Object::as_reference).ok()?;
        node = doc.get_dictionary(parent).ok()?;
    }
    None
}
