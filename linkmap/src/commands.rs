use crate::CLAP_STYLING;
use clap::arg;
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("linkmap")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("linkmap")
        .styles(CLAP_STYLING)
        .about("Generate an XML sitemap from the anchor links of a single HTML page")
        .arg(
            arg!(-u --"url" <URL>)
                .required(false)
                .help("The HTML page to fetch and extract links from")
                .value_parser(clap::value_parser!(Url))
                .default_value("https://example.com/index.html"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Output file for the generated sitemap")
                .default_value("sitemap1.xml"),
        )
        .arg(
            arg!(-b --"baseurl" <URL>)
                .required(false)
                .help(
                    "Base URL for resolving relative links. Defaults to the page URL \
                with its last path segment dropped.",
                )
                .value_parser(clap::value_parser!(Url)),
        )
        .arg(
            arg!(--"keepanchors")
                .required(false)
                .help("Retain URL fragments instead of stripping them")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"keepindexurls")
                .required(false)
                .help("Retain literal index.html filenames instead of collapsing them to their directory")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"keepexternalurls")
                .required(false)
                .help("Retain URLs outside the base URL's host and path scope")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("30"),
        )
        .arg(arg!(-q --"quiet" "Suppress non-essential output").required(false))
}
