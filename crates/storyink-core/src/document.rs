//! Page document model: the parent-owned source of truth.

use crate::annotation::{PageContent, Stroke, TextLabel};
use crate::reorder::array_move;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for pages.
pub type PageId = Uuid;

/// Document-level errors. Interaction edge cases elsewhere are silent no-ops;
/// these are the operations a caller can meaningfully be refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("a document must keep at least one page")]
    LastPage,
    #[error("no page with id {0}")]
    UnknownPage(PageId),
}

/// One page of the story: an identity plus its committed annotation sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub content: PageContent,
}

impl Page {
    /// Create a new blank page.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            content: PageContent::default(),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

/// An ordered sequence of pages with an active selection.
///
/// The document exclusively owns the committed per-page stroke/text sets.
/// The only mutation entry point for annotations is [`replace_content`],
/// which replaces a page's sets wholesale (never a delta), so calling it
/// twice with the same data is harmless.
///
/// [`replace_content`]: StoryDocument::replace_content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDocument {
    pages: Vec<Page>,
    active: usize,
}

impl StoryDocument {
    /// Create a document with a single blank page.
    pub fn new() -> Self {
        Self {
            pages: vec![Page::new()],
            active: 0,
        }
    }

    /// Number of pages. Never zero.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Pages in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Index of the active page.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active page.
    pub fn active_page(&self) -> &Page {
        &self.pages[self.active]
    }

    /// Look up a page by id.
    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    fn index_of(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    /// Append a blank page and make it active. Returns its id.
    pub fn add_page(&mut self) -> PageId {
        let page = Page::new();
        let id = page.id;
        self.pages.push(page);
        self.active = self.pages.len() - 1;
        log::info!("added page {id}, {} total", self.pages.len());
        id
    }

    /// Delete a page. Refused when it is the last one remaining. The active
    /// selection is moved to a valid index, following the original ordering.
    pub fn delete_page(&mut self, id: PageId) -> Result<(), DocumentError> {
        if self.pages.len() <= 1 {
            return Err(DocumentError::LastPage);
        }
        let index = self.index_of(id).ok_or(DocumentError::UnknownPage(id))?;
        self.pages.remove(index);
        if self.active >= index {
            self.active = self.active.saturating_sub(1);
        }
        log::info!("deleted page {id}, {} remaining", self.pages.len());
        Ok(())
    }

    /// Make the page with the given id active.
    pub fn select(&mut self, id: PageId) -> Result<(), DocumentError> {
        self.active = self.index_of(id).ok_or(DocumentError::UnknownPage(id))?;
        Ok(())
    }

    /// Replace a page's annotation sets with the given ones. This is the
    /// single commit entry point used by the annotation surface: a full
    /// replace, idempotent by construction.
    pub fn replace_content(
        &mut self,
        page_id: PageId,
        strokes: Vec<Stroke>,
        texts: Vec<TextLabel>,
    ) -> Result<(), DocumentError> {
        let index = self
            .index_of(page_id)
            .ok_or(DocumentError::UnknownPage(page_id))?;
        self.pages[index].content = PageContent { strokes, texts };
        Ok(())
    }

    /// Move the page at `from` to position `to`, keeping the active page's
    /// identity stable across the permutation.
    pub fn reorder(&mut self, from: usize, to: usize) {
        let active_id = self.pages[self.active].id;
        array_move(&mut self.pages, from, to);
        if let Some(index) = self.index_of(active_id) {
            self.active = index;
        }
    }
}

impl Default for StoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::SerializableColor;
    use kurbo::Point;

    fn stroke() -> Stroke {
        let mut s = Stroke::begin(Point::new(0.0, 0.0), SerializableColor::black(), 5.0);
        s.add_point(Point::new(10.0, 10.0));
        s
    }

    #[test]
    fn test_new_document_has_one_blank_page() {
        let doc = StoryDocument::new();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.active_index(), 0);
        assert!(doc.active_page().content.is_empty());
    }

    #[test]
    fn test_add_page_selects_it() {
        let mut doc = StoryDocument::new();
        let id = doc.add_page();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.active_page().id, id);
    }

    #[test]
    fn test_delete_last_page_is_refused() {
        let mut doc = StoryDocument::new();
        let id = doc.active_page().id;
        assert_eq!(doc.delete_page(id), Err(DocumentError::LastPage));
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_delete_active_page_moves_selection_to_valid_index() {
        let mut doc = StoryDocument::new();
        let first = doc.active_page().id;
        let second = doc.add_page();

        // Active is the second page; deleting it must land on the first.
        assert_eq!(doc.active_page().id, second);
        doc.delete_page(second).unwrap();
        assert_eq!(doc.active_index(), 0);
        assert_eq!(doc.active_page().id, first);
    }

    #[test]
    fn test_delete_earlier_page_keeps_active_identity() {
        let mut doc = StoryDocument::new();
        let first = doc.active_page().id;
        let second = doc.add_page();

        doc.delete_page(first).unwrap();
        assert_eq!(doc.active_page().id, second);
    }

    #[test]
    fn test_replace_content_is_idempotent() {
        let mut doc = StoryDocument::new();
        let id = doc.active_page().id;

        doc.replace_content(id, vec![stroke()], vec![]).unwrap();
        let once = doc.active_page().content.clone();

        doc.replace_content(id, vec![stroke()], vec![]).unwrap();
        let twice = &doc.active_page().content;

        assert_eq!(once.strokes.len(), twice.strokes.len());
        assert_eq!(once.strokes[0].points, twice.strokes[0].points);
    }

    #[test]
    fn test_replace_content_unknown_page() {
        let mut doc = StoryDocument::new();
        let unknown = Uuid::new_v4();
        assert_eq!(
            doc.replace_content(unknown, vec![], vec![]),
            Err(DocumentError::UnknownPage(unknown))
        );
    }

    #[test]
    fn test_reorder_follows_active_page() {
        let mut doc = StoryDocument::new();
        let first = doc.active_page().id;
        doc.add_page();
        doc.add_page();
        doc.select(first).unwrap();

        doc.reorder(0, 2);
        assert_eq!(doc.active_page().id, first);
        assert_eq!(doc.active_index(), 2);
    }
}
