use crate::options::SitemapOptions;
use tracing::warn;
use url::Url;

/// Resolve a raw href into its canonical absolute form.
///
/// Applied in fixed order: backslash cleanup, resolution against the
/// base, optional fragment strip, optional `index.html` collapse,
/// trailing slash for extensionless paths. A href that cannot be
/// resolved is passed through unchanged; one bad link degrades to a
/// no-op transformation instead of aborting the run.
pub fn normalize(raw_href: &str, base_url: &Url, options: &SitemapOptions) -> String {
    // Hand-written pages occasionally carry Windows-style separators.
    let href = raw_href.replace('\\', "/");

    let mut url = match base_url.join(&href) {
        Ok(url) => url,
        Err(e) => {
            warn!("Could not resolve href '{}': {}", raw_href, e);
            return raw_href.to_string();
        }
    };

    if !options.keep_anchors {
        url.set_fragment(None);
    }

    // mailto:, tel: and friends have no path segments to canonicalize.
    if url.cannot_be_a_base() {
        return url.to_string();
    }

    if !options.keep_index_urls
        && let Some(stripped) = strip_index_filename(url.path())
    {
        url.set_path(&stripped);
    }

    if let Some(slashed) = directory_form(url.path()) {
        url.set_path(&slashed);
    }

    url.to_string()
}

// ".../dir/index.html" -> ".../dir/"; only whole terminal segments count.
fn strip_index_filename(path: &str) -> Option<String> {
    path.strip_suffix("index.html")
        .filter(|rest| rest.ends_with('/'))
        .map(str::to_string)
}

// Extensionless terminal segments are directories and gain a trailing slash.
fn directory_form(path: &str) -> Option<String> {
    if path.ends_with('/') {
        return None;
    }
    let last_segment = path.rsplit('/').next().unwrap_or("");
    if last_segment.contains('.') {
        None
    } else {
        Some(format!("{}/", path))
    }
}

/// Whether a normalized URL falls inside the base URL's scope.
///
/// In scope means the host equals the base host or is a subdomain of
/// it, and the path starts with the base path. Strings that do not
/// parse as URLs are out of scope. With `keep_external_urls` set,
/// everything is in scope.
pub fn in_scope(normalized_url: &str, base_url: &Url, options: &SitemapOptions) -> bool {
    if options.keep_external_urls {
        return true;
    }

    let Ok(url) = Url::parse(normalized_url) else {
        return false;
    };
    let (Some(host), Some(base_host)) = (url.host_str(), base_url.host_str()) else {
        return false;
    };

    let same_host = host == base_host || host.ends_with(&format!(".{}", base_host));
    same_host && url.path().starts_with(base_url.path())
}

/// Base URL derived from the page URL by dropping the last path
/// segment. Query and fragment are discarded; the result always ends
/// with `/`.
pub fn derive_base_url(page_url: &Url) -> Url {
    page_url.join(".").unwrap_or_else(|_| page_url.clone())
}

/// Append a trailing slash to the path when missing, so relative
/// links resolve against the directory itself rather than its parent.
pub fn ensure_trailing_slash(url: &Url) -> Url {
    if url.path().ends_with('/') {
        return url.clone();
    }
    let mut slashed = url.clone();
    slashed.set_path(&format!("{}/", url.path()));
    slashed
}
