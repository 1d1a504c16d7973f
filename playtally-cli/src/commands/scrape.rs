//! Implementation of the 'scrape' subcommand.
//!
//! Applies the configured extraction rules to a saved page and sums what they
//! find, the same way the page script does in the browser.

use log::{debug, info};
use playtally_core::{AggregateResult, CoreConfigBuilder, CoreError, PlaylistSession, classify_url};

use crate::cli::ScrapeArgs;
use crate::error::{CliResult, InputKind};
use crate::output::print_labels;

pub fn run_scrape(args: &ScrapeArgs) -> CliResult<AggregateResult> {
    if let Some(url) = &args.url {
        let kind = classify_url(url);
        if !kind.has_playlist() {
            return Err(CoreError::NotPlaylistPage(url.clone()));
        }
        debug!("Page kind for {}: {:?}", url, kind);
    }

    let mut builder = CoreConfigBuilder::new();
    if let Some(rules) = &args.rules {
        builder = builder.rules_file(rules);
    }
    let config = builder.build();
    config.validate()?;

    let document = InputKind::SavedPage.read(Some(args.page.as_path()))?;

    let session = PlaylistSession::from_config(&config)?;
    if args.show_labels {
        print_labels(&session.labels(&document));
    }

    let result = session.compute(&document);
    info!(
        "Found {} video duration(s) in {}",
        result.item_count,
        args.page.display()
    );
    Ok(result)
}
