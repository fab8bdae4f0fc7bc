pub mod dedupe;
pub mod normalize;
pub mod options;
pub mod sitemap;

pub use dedupe::dedupe;
pub use normalize::{derive_base_url, ensure_trailing_slash, in_scope, normalize};
pub use options::SitemapOptions;
pub use sitemap::Sitemap;
