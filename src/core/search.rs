//! Value search over enumerated parameters.
//!
//! Each enumerated parameter is resolved once. Path-style names (`/a/b/c`)
//! expand to every parameter under their top-level segment (`/a`), read
//! recursively; the enumerated name counts as a match when any of those
//! values equals the target, and every name seen during the expansion is
//! marked processed so later entries under the same root are skipped.
//! Other names are read directly.
//!
//! Retrieval failures are recorded in the [`Report`] and never stop the
//! scan.

use serde::Serialize;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::core::constants::DEFAULT_PAUSE_MS;
use crate::core::enumerate::list_parameters;
use crate::core::pages::Pages;
use crate::core::store::ParameterStore;
use crate::core::types::ParameterMetadata;
use crate::error::{Error, Result};

/// Receives progress notifications while the search runs.
pub trait Progress {
    /// Called once before the first entry with the number of entries.
    fn start(&mut self, _total: usize) {}

    /// Called once per enumerated entry, including skipped ones.
    fn advance(&mut self) {}

    /// Called once after the last entry.
    fn finish(&mut self) {}
}

/// Progress sink that ignores every notification.
#[derive(Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {}

/// Outcome of a search.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Enumerated names holding the target value, in enumeration order.
    pub found: Vec<String>,
    /// One message per failed retrieval, in enumeration order.
    pub errors: Vec<String>,
    /// Entries looked at.
    pub scanned: usize,
    /// Entries skipped because an earlier path expansion covered them.
    pub skipped: usize,
}

/// Names already resolved during this search.
#[derive(Debug, Default)]
pub struct ProcessedSet(HashSet<String>);

impl ProcessedSet {
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Mark `name` processed. Returns `false` if it already was.
    pub fn mark(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }
}

/// Search for parameters holding a target value.
pub struct Search {
    target: Zeroizing<String>,
    pause: Duration,
}

impl Search {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: Zeroizing::new(target.into()),
            pause: Duration::from_millis(DEFAULT_PAUSE_MS),
        }
    }

    /// Pause before each direct lookup.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Enumerate the store, then search every enumerated parameter.
    ///
    /// An enumeration failure is fatal and nothing is searched.
    pub fn scan<S: ParameterStore + ?Sized>(
        &self,
        store: &S,
        progress: &mut dyn Progress,
    ) -> Result<Report> {
        let params = list_parameters(store).map_err(Error::Enumerate)?;
        Ok(self.run(store, &params, progress))
    }

    /// Resolve every entry of `params` and compare it to the target.
    pub fn run<S: ParameterStore + ?Sized>(
        &self,
        store: &S,
        params: &[ParameterMetadata],
        progress: &mut dyn Progress,
    ) -> Report {
        let mut processed = ProcessedSet::default();
        let mut report = Report::default();

        progress.start(params.len());
        for param in params {
            progress.advance();
            report.scanned += 1;

            if processed.contains(&param.name) {
                trace!(param = %param.name, "already processed");
                report.skipped += 1;
                continue;
            }

            match param.root_path() {
                Some(root) => self.resolve_path(store, param, &root, &mut processed, &mut report),
                None => self.resolve_direct(store, param, &mut processed, &mut report),
            }
        }
        progress.finish();

        debug!(
            scanned = report.scanned,
            skipped = report.skipped,
            found = report.found.len(),
            errors = report.errors.len(),
            "search finished"
        );
        report
    }

    fn resolve_path<S: ParameterStore + ?Sized>(
        &self,
        store: &S,
        param: &ParameterMetadata,
        root: &str,
        processed: &mut ProcessedSet,
        report: &mut Report,
    ) {
        trace!(param = %param.name, root, "expanding path");
        processed.mark(param.name.as_str());

        let mut matched = false;
        for item in Pages::new(|token: Option<&str>| store.get_parameters_by_path(root, token)) {
            match item {
                Ok(value) => {
                    matched |= value.matches(&self.target);
                    processed.mark(value.name.as_str());
                }
                Err(e) => {
                    report.errors.push(format!(
                        "Error getting parameter for path [{}]--->{}",
                        param.name, e
                    ));
                    break;
                }
            }
        }

        // Values read before a failed page still count.
        if matched {
            report.found.push(param.name.clone());
        }
    }

    fn resolve_direct<S: ParameterStore + ?Sized>(
        &self,
        store: &S,
        param: &ParameterMetadata,
        processed: &mut ProcessedSet,
        report: &mut Report,
    ) {
        processed.mark(param.name.as_str());

        if !self.pause.is_zero() {
            std::thread::sleep(self.pause);
        }

        match store.get_parameter(&param.name) {
            Ok(value) if value.matches(&self.target) => report.found.push(param.name.clone()),
            Ok(_) => {}
            Err(e) => report.errors.push(format!(
                "Error getting parameter [{}]--->{}",
                param.name, e
            )),
        }
    }
}
