use anyhow::Context;
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use linkmap_core::{Sitemap, SitemapOptions, derive_base_url, ensure_trailing_slash};
use linkmap_scanner::Scanner;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Expand a user-supplied output path (tilde included) into a concrete path.
pub fn resolve_output_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Effective base URL: the explicit override when given, otherwise the
/// page URL with its last path segment dropped. Either way the result
/// ends with a slash.
pub fn resolve_base_url(page_url: &Url, baseurl: Option<&Url>) -> Url {
    match baseurl {
        Some(base) => ensure_trailing_slash(base),
        None => derive_base_url(page_url),
    }
}

pub async fn handle_generate(matches: &ArgMatches) -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let page_url = matches.get_one::<Url>("url").unwrap();
    let output = matches.get_one::<String>("output").unwrap();
    let baseurl = matches.get_one::<Url>("baseurl");
    let timeout = *matches.get_one::<u64>("timeout").unwrap();
    let quiet = matches.get_flag("quiet");

    let options = SitemapOptions {
        keep_anchors: matches.get_flag("keepanchors"),
        keep_index_urls: matches.get_flag("keepindexurls"),
        keep_external_urls: matches.get_flag("keepexternalurls"),
    };

    let base_url = resolve_base_url(page_url, baseurl);
    let output_path = resolve_output_path(output);

    if !quiet {
        println!();
        println!(
            "Generating sitemap for {}",
            page_url.as_str().bright_white()
        );
        println!("{} Base URL: {}", "→".blue(), base_url.as_str());
        println!("{} Output:   {}", "→".blue(), output_path.display());
        println!();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Fetching {}", page_url));

    let scanner = Scanner::with_timeout(timeout);
    let scan = match scanner.scan(page_url.as_str()).await {
        Ok(scan) => scan,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e).with_context(|| format!("Failed to fetch {}", page_url));
        }
    };
    spinner.finish_and_clear();

    if !quiet {
        println!(
            "{} Fetched {} ({} links, {} ms)",
            "✓".green().bold(),
            scan.url,
            scan.hrefs.len(),
            scan.response_time.as_millis()
        );
    }

    let sitemap = Sitemap::build(page_url, &scan.hrefs, &base_url, &options);
    debug!(
        "{} raw hrefs reduced to {} entries",
        scan.hrefs.len(),
        sitemap.urls.len()
    );

    sitemap
        .write(&output_path)
        .with_context(|| format!("Failed to write sitemap to {}", output_path.display()))?;

    println!(
        "{} Sitemap generated as {} ({} entries)",
        "✓".green().bold(),
        output_path.display().to_string().bright_white(),
        sitemap.urls.len()
    );

    Ok(())
}
