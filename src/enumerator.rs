use globset::GlobSet;
use indicatif::ProgressBar;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::aggregate::ReportBuilder;
use crate::config::Config;
use crate::error::AppError;
use crate::filter::{FilterPolicy, is_excluded};
use crate::model::{DetailRecord, ItemType, Report};
use crate::parsers::{parse_detail, parse_listing};
use crate::runner::CommandRunner;

/// Outcome of the listing → filter pipeline for one item type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeResult {
    pub item_type: ItemType,
    /// Identifiers parsed from the listing, before exclusion and filtering.
    pub found: usize,
    pub identifiers: Vec<String>,
    pub skipped_lines: usize,
    pub rejected_rows: usize,
}

pub struct Enumerator<R: CommandRunner> {
    runner: R,
    config: Config,
    exclude: Option<GlobSet>,
    progress: ProgressBar,
}

impl<R: CommandRunner> Enumerator<R> {
    pub fn new(runner: R, config: Config) -> Result<Self, AppError> {
        let exclude = config.compile_excludes()?;
        Ok(Self { runner, config, exclude, progress: ProgressBar::hidden() })
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Enumerate the given types (deduplicated, in canonical order) into a report.
    pub fn enumerate(&self, item_types: &[ItemType], parallel: bool) -> Report {
        let ordered: Vec<ItemType> =
            ItemType::ALL.into_iter().filter(|item_type| item_types.contains(item_type)).collect();
        self.progress.set_length(ordered.len() as u64);

        let results: Vec<TypeResult> = if parallel {
            ordered.par_iter().map(|item_type| self.enumerate_type(*item_type)).collect()
        } else {
            ordered.iter().map(|item_type| self.enumerate_type(*item_type)).collect()
        };
        self.progress.finish_and_clear();

        let mut builder = ReportBuilder::new();
        for result in &results {
            builder.add(result.item_type, &result.identifiers);
        }
        builder.build()
    }

    pub fn enumerate_type(&self, item_type: ItemType) -> TypeResult {
        self.progress.set_message(item_type.as_str());
        self.progress.suspend(|| info!("Enumerating {item_type} modules..."));

        let output = self.runner.run(&item_type.listing_query());
        let listing = parse_listing(&output, item_type);
        let found = listing.len();
        let (skipped_lines, rejected_rows) = (listing.skipped_lines, listing.rejected_rows);

        self.progress.suspend(|| {
            info!("Found {found} {item_type} modules");
            debug!(%item_type, skipped_lines, rejected_rows, "listing parse statistics");
            if found == 0 && !output.trim().is_empty() {
                warn!(
                    %item_type,
                    rejected_rows,
                    "listing produced no identifiers; console output format may have changed"
                );
            }
        });

        let mut identifiers = listing.into_identifiers();
        identifiers.retain(|identifier| !is_excluded(identifier, self.exclude.as_ref()));

        let policy = FilterPolicy::for_item_type(item_type, &self.config);
        let identifiers = policy.apply(identifiers);
        if !policy.is_identity() {
            let kept = identifiers.len();
            self.progress.suspend(|| {
                info!("Filtered to {kept} {item_type} modules ({})", policy.describe())
            });
        }

        self.progress.inc(1);
        TypeResult { item_type, found, identifiers, skipped_lines, rejected_rows }
    }

    /// Issue the detail query for one identifier.
    pub fn describe(&self, item_type: ItemType, path: &str) -> DetailRecord {
        let path = path.strip_prefix(item_type.path_prefix().as_str()).unwrap_or(path);
        let output = self.runner.run(&item_type.detail_query(path));
        if output.trim().is_empty() {
            warn!(%item_type, path, "console returned no detail output");
        }
        parse_detail(path, &output)
    }
}
