use serde::{Deserialize, Serialize};

/// One documentation module — all entries for one API grouping, rendered
/// as a single page.
///
/// The module's slug (output filename, anchor base) is not part of the
/// YAML; it is derived from the content file stem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Human-readable page title, e.g. "Pixel Wand Methods".
    pub title: String,
    /// Deep link to external per-module documentation, used as the
    /// heading link target for every entry on the page.
    #[serde(default)]
    pub source_href: Option<String>,
    /// Ordered entries. Order defines both the table of contents and the
    /// body order.
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// One documented symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    /// Prose description. Blank-line-separated chunks render as separate
    /// paragraphs.
    pub summary: String,
    /// Preformatted call shape, reproduced verbatim inside `<pre>`.
    pub signature: String,
    /// Declaration-order parameter descriptions. May be empty.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub description: String,
}
