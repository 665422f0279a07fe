use std::fs;
use std::io;
use std::path::Path;

use super::mapping::MappingEntry;
use super::report;
use crate::config::Config;
use crate::convert::convert_to_png;

/// What happened to one mapping entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A PNG was written to the target
    Converted {
        /// Whether the (distinct) source file was deleted afterwards
        source_removed: bool,
    },
    /// Nothing to convert
    SkippedMissingSource,
    /// An earlier run, or an earlier entry, already produced this target
    SkippedTargetExists,
    /// Decode, convert or encode failed; the message is kept for the report
    Failed { reason: String },
}

impl Outcome {
    /// Counted towards "Successfully converted"
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::Converted { .. } | Outcome::SkippedTargetExists
        )
    }
}

/// Result of a full pass over the mapping table
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Every entry with its outcome, in table order
    pub results: Vec<(MappingEntry, Outcome)>,
}

impl BatchSummary {
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|(_, o)| o.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|(_, o)| matches!(o, Outcome::Failed { .. }))
            .count()
    }

    /// Distinct sources deleted after their conversion
    pub fn removed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|(_, o)| {
                matches!(
                    o,
                    Outcome::Converted {
                        source_removed: true
                    }
                )
            })
            .count()
    }

    #[cfg(test)]
    pub fn outcome_of(&self, source: &str) -> Option<&Outcome> {
        self.results
            .iter()
            .find(|(entry, _)| entry.source == source)
            .map(|(_, outcome)| outcome)
    }
}

/// Walk the table strictly in order.
///
/// Entries only affect each other through the filesystem: once an entry has
/// written a target, later entries pointing at the same target are skipped.
pub fn run_batch(entries: &[MappingEntry], config: &Config) -> BatchSummary {
    let mut results = Vec::with_capacity(entries.len());

    for entry in entries {
        let outcome = process_entry(entry, config);
        results.push((*entry, outcome));
    }

    BatchSummary { results }
}

/// Decide and carry out the action for a single entry
pub fn process_entry(entry: &MappingEntry, config: &Config) -> Outcome {
    process_entry_with(entry, config, |path| fs::remove_file(path))
}

/// Same as [`process_entry`], with the source deletion supplied by the caller.
///
/// Deletion is best effort: whatever `remove` returns, a converted target
/// stays and the entry counts as converted.
fn process_entry_with<F>(entry: &MappingEntry, config: &Config, remove: F) -> Outcome
where
    F: Fn(&Path) -> io::Result<()>,
{
    let source = config.resolve(entry.source);
    let target = config.resolve(entry.target);

    if !source.exists() {
        report::skipped_missing(entry);
        return Outcome::SkippedMissingSource;
    }

    if target.exists() && source != target {
        report::skipped_existing(entry);
        return Outcome::SkippedTargetExists;
    }

    report::converting(entry);

    match convert_to_png(&source, &target, config.max_width()) {
        Ok(image) => {
            report::converted(&image);

            let source_removed = source != target && remove(&source).is_ok();
            if source_removed {
                report::cleaned_up();
            }

            Outcome::Converted { source_removed }
        }
        Err(e) => {
            report::failed(&e);
            Outcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}
