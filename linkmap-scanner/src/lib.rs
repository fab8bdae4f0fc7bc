pub mod error;
pub mod extract;
pub mod fetch;
pub mod result;

pub use error::FetchError;
pub use extract::extract_hrefs;
pub use fetch::Scanner;
pub use result::PageScan;
