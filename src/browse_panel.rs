//! Message-driven state for the browse panel.
//!
//! The panel speaks a small bidirectional protocol: the display surface
//! sends [`PanelRequest`]s (scroll, search, copy) and receives
//! [`PanelReply`]s carrying rendered entries and snippet text. All
//! pagination and search bookkeeping lives here, display-agnostic, so
//! the window code stays a thin shell.

use fontsnip_catalog::{FontFamily, import_snippet, link_snippet};

/// Messages from the display surface to the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelRequest {
    /// The view reached the bottom; load the next page.
    Scroll,
    /// Filter the already-fetched catalog by name prefix.
    Search { query: String },
    /// Resolve the `@import` snippet for a family.
    CopyImport { family: String },
    /// Resolve the `<link>` snippet for a family.
    CopyLink { family: String },
}

/// Messages from the panel back to the display surface.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelReply {
    /// Append one page of entries; `css` is the page's concatenated
    /// `@import` block (used to style previews).
    AddContent { entries: Vec<PanelEntry>, css: String },
    /// Replace the display with these filtered entries.
    SearchResults { entries: Vec<PanelEntry> },
    /// Place this snippet on the system clipboard.
    Copy {
        family: String,
        kind: SnippetKind,
        snippet: String,
    },
    /// Nothing to do (catalog exhausted or family unknown).
    None,
}

/// Which snippet flavor a copy request resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetKind {
    Import,
    Link,
}

impl SnippetKind {
    /// Display label, matching the buttons in the panel.
    pub fn label(&self) -> &'static str {
        match self {
            SnippetKind::Import => "@import",
            SnippetKind::Link => "<link>",
        }
    }
}

/// One rendered catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelEntry {
    pub family: String,
    pub category: String,
    pub import_snippet: String,
    pub link_snippet: String,
}

impl PanelEntry {
    fn from_family(family: &FontFamily) -> Self {
        Self {
            family: family.family.clone(),
            category: family.category.clone(),
            import_snippet: import_snippet(family),
            link_snippet: link_snippet(family),
        }
    }
}

/// Panel state: the fetched catalog plus a pagination cursor.
///
/// The cursor only ever moves forward on `Scroll`; search requests do
/// not disturb it, so clearing a query resumes the paged view where it
/// left off.
pub struct BrowsePanel {
    catalog: Vec<FontFamily>,
    page_size: usize,
    loaded: usize,
}

impl BrowsePanel {
    /// Create a panel over a fetched catalog. `page_size` must be >= 1
    /// (enforced by config validation).
    pub fn new(catalog: Vec<FontFamily>, page_size: usize) -> Self {
        Self {
            catalog,
            page_size: page_size.max(1),
            loaded: 0,
        }
    }

    /// Total number of catalog records.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Whether every record has been handed out via `Scroll`.
    pub fn exhausted(&self) -> bool {
        self.loaded >= self.catalog.len()
    }

    /// Handle one request from the display surface.
    pub fn handle(&mut self, request: PanelRequest) -> PanelReply {
        match request {
            PanelRequest::Scroll => self.next_page(),
            PanelRequest::Search { query } => self.search(&query),
            PanelRequest::CopyImport { family } => self.copy(&family, SnippetKind::Import),
            PanelRequest::CopyLink { family } => self.copy(&family, SnippetKind::Link),
        }
    }

    fn next_page(&mut self) -> PanelReply {
        if self.exhausted() {
            return PanelReply::None;
        }
        let end = (self.loaded + self.page_size).min(self.catalog.len());
        let page = &self.catalog[self.loaded..end];
        self.loaded = end;

        let entries: Vec<PanelEntry> = page.iter().map(PanelEntry::from_family).collect();
        let css: String = entries
            .iter()
            .map(|e| format!("{}\n", e.import_snippet))
            .collect();
        PanelReply::AddContent { entries, css }
    }

    /// Case-insensitive prefix match over the whole in-memory catalog
    /// (not just the loaded pages); never triggers a refetch. An empty
    /// query re-renders the pages loaded so far.
    fn search(&self, query: &str) -> PanelReply {
        if query.is_empty() {
            let entries = self.catalog[..self.loaded]
                .iter()
                .map(PanelEntry::from_family)
                .collect();
            return PanelReply::SearchResults { entries };
        }
        let query = query.to_lowercase();
        let entries = self
            .catalog
            .iter()
            .filter(|f| f.family.to_lowercase().starts_with(&query))
            .map(PanelEntry::from_family)
            .collect();
        PanelReply::SearchResults { entries }
    }

    fn copy(&self, family: &str, kind: SnippetKind) -> PanelReply {
        let Some(record) = self.catalog.iter().find(|f| f.family == family) else {
            log::warn!("Copy request for unknown family '{}'", family);
            return PanelReply::None;
        };
        let snippet = match kind {
            SnippetKind::Import => import_snippet(record),
            SnippetKind::Link => link_snippet(record),
        };
        PanelReply::Copy {
            family: family.to_string(),
            kind,
            snippet,
        }
    }
}
