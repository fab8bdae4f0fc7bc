//! Sitemap assembly and rendering.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.5</priority>
//!   </url>
//! </urlset>
//! ```

use crate::dedupe::dedupe;
use crate::normalize::{in_scope, normalize};
use crate::options::SitemapOptions;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;
use url::Url;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const CHANGE_FREQ: &str = "weekly";
const PRIORITY: &str = "0.5";

/// Ordered, de-duplicated sitemap entries for one scanned page.
pub struct Sitemap {
    pub urls: Vec<String>,
}

impl Sitemap {
    /// Run extracted hrefs through normalization, scope filtering and
    /// de-duplication.
    ///
    /// The page's own URL is always the first entry. Links that
    /// normalize to the page itself (fragment-of-self, `index.html`
    /// of the same directory) count as self links and are dropped so
    /// the page never appears twice.
    pub fn build(
        page_url: &Url,
        hrefs: &[String],
        base_url: &Url,
        options: &SitemapOptions,
    ) -> Self {
        let self_link = normalize(page_url.as_str(), base_url, options);

        let links: Vec<String> = hrefs
            .iter()
            .map(|href| normalize(href, base_url, options))
            .filter(|link| in_scope(link, base_url, options))
            .filter(|link| *link != self_link)
            .collect();

        Self {
            urls: dedupe(page_url.as_str(), &links),
        }
    }

    /// Serialize to the sitemap XML document, entries in input order.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 160);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for url in &self.urls {
            xml.push_str("  <url>\n");
            xml.push_str("    <loc>");
            xml.push_str(&escape_xml(url));
            xml.push_str("</loc>\n");
            xml.push_str("    <changefreq>");
            xml.push_str(CHANGE_FREQ);
            xml.push_str("</changefreq>\n");
            xml.push_str("    <priority>");
            xml.push_str(PRIORITY);
            xml.push_str("</priority>\n");
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write the document, replacing any existing file at `path`.
    pub fn write(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_xml())
    }
}

/// Standard XML text escaping for `loc` content.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    )
}
