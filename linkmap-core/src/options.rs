/// Flags controlling URL normalization and scope filtering.
///
/// Threaded explicitly through the pipeline instead of living in
/// ambient state, so the transformations stay pure and testable.
/// Defaults match the CLI defaults: strip fragments, collapse
/// `index.html`, drop external URLs.
#[derive(Debug, Clone, Default)]
pub struct SitemapOptions {
    /// Retain URL fragments (`#...`).
    pub keep_anchors: bool,
    /// Retain literal `index.html` filenames instead of collapsing
    /// them to their directory.
    pub keep_index_urls: bool,
    /// Retain URLs outside the base URL's host/path scope.
    pub keep_external_urls: bool,
}
