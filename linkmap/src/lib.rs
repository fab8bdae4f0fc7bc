// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{resolve_base_url, resolve_output_path};

// Re-export the core pipeline types
pub use linkmap_core::{Sitemap, SitemapOptions};
