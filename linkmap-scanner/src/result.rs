use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of fetching one page and pulling its anchor links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageScan {
    pub url: String,
    pub status_code: u16,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub response_time: Duration,
    /// Raw `href` attribute values in document order, untouched.
    pub hrefs: Vec<String>,
}

impl PageScan {
    pub fn new(url: String) -> Self {
        Self {
            url,
            status_code: 0,
            content_type: None,
            content_length: None,
            response_time: Duration::from_secs(0),
            hrefs: Vec::new(),
        }
    }
}
