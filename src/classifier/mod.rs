//! Two-phase classification over parallel text corpora.
//!
//! The normalized (lemmatized) corpus drives all relevance decisions; the
//! raw OCR corpus supplies the files that actually get copied to the output
//! folders. The two corpora share filename stems, with some tolerance for
//! drift introduced by upstream naming conventions.

mod predicates;

pub use predicates::{contains_keywords, contains_table_data};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ClassifyConfig;
use crate::text::read_text_lossy;

/// Extension of corpus text files.
const TEXT_EXTENSION: &str = "txt";

/// Errors from classifier setup. Everything past setup is recovered locally
/// (a bad document is skipped, a failed copy is logged) so a run never
/// aborts halfway through the corpus.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of one classification run.
///
/// `cfo` is always a subset of `budget`: phase 2 only ever examines
/// documents that already passed phase 1 and resolved a source file.
#[derive(Debug, Default)]
pub struct ClassifyOutcome {
    /// Source files matching the budget-domain filter (phase 1).
    pub budget: Vec<PathBuf>,
    /// Source files additionally naming a CFO subject (phase 2).
    pub cfo: Vec<PathBuf>,
    /// Copies that failed; the budget/cfo counts still reflect the
    /// classification decision, not the files actually present on disk.
    pub copy_failures: usize,
}

/// Two-phase document classifier.
pub struct Classifier {
    source_folder: PathBuf,
    normalized_folder: PathBuf,
    output_budget: PathBuf,
    output_cfo: PathBuf,
    config: ClassifyConfig,
}

impl Classifier {
    pub fn new(
        source_folder: PathBuf,
        normalized_folder: PathBuf,
        output_budget: PathBuf,
        output_cfo: PathBuf,
        config: ClassifyConfig,
    ) -> Self {
        Self {
            source_folder,
            normalized_folder,
            output_budget,
            output_cfo,
            config,
        }
    }

    /// Create the output directories. Must run before [`process_documents`];
    /// kept out of the constructor so building a classifier has no side
    /// effects. Existing directories are left as-is, reruns accumulate.
    ///
    /// [`process_documents`]: Classifier::process_documents
    pub fn prepare_outputs(&self) -> Result<(), ClassifyError> {
        for path in [&self.output_budget, &self.output_cfo] {
            fs::create_dir_all(path).map_err(|source| ClassifyError::CreateOutputDir {
                path: path.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Normalized corpus files, sorted by file name.
    pub fn normalized_files(&self) -> Vec<PathBuf> {
        list_text_files(&self.normalized_folder)
    }

    /// Budget-domain relevance: explicit keywords, or a subject/amount
    /// table presenting the same information without the boilerplate
    /// wording.
    fn phase1(&self, text: &str) -> bool {
        contains_keywords(text, &self.config.phase1_keywords) || contains_table_data(text)
    }

    /// Regional-subject relevance, applied only after phase 1 passes.
    fn phase2(&self, text: &str) -> bool {
        contains_keywords(text, &self.config.cfo_keywords)
    }

    /// Resolve the source-corpus file for a normalized file.
    ///
    /// Stems are matched by bidirectional containment because upstream
    /// stages may append suffixes to the stem. When several source files
    /// qualify, the longest stem overlap wins, with ties broken by file
    /// name, so the result never depends on directory enumeration order.
    pub fn find_matching_source_file(&self, normalized_file: &Path) -> Option<PathBuf> {
        let stem = file_stem(normalized_file)?;
        let sources = list_text_files(&self.source_folder);
        find_best_match(&stem, &sources).cloned()
    }

    /// Run the full two-phase funnel and copy matches to the output folders.
    ///
    /// The returned budget/cfo lists reflect classification decisions; see
    /// [`ClassifyOutcome::copy_failures`] for the copy-side caveat.
    pub fn process_documents(&self) -> ClassifyOutcome {
        self.process_documents_with(|_| {})
    }

    /// [`process_documents`] with a per-file progress callback.
    ///
    /// [`process_documents`]: Classifier::process_documents
    pub fn process_documents_with<F>(&self, mut on_file: F) -> ClassifyOutcome
    where
        F: FnMut(&Path),
    {
        let mut outcome = ClassifyOutcome::default();

        for normalized_file in self.normalized_files() {
            on_file(&normalized_file);
            debug!(file = %normalized_file.display(), "processing");

            let text = read_text_lossy(&normalized_file);
            if !self.phase1(&text) {
                continue;
            }

            let Some(source_file) = self.find_matching_source_file(&normalized_file) else {
                // Open question upstream: surfaced as a warning, but the
                // document stays excluded from both outputs.
                warn!(
                    file = %normalized_file.display(),
                    "budget-relevant document has no matching source file, skipping"
                );
                continue;
            };

            if self.phase2(&text) {
                outcome.cfo.push(source_file.clone());
            }
            outcome.budget.push(source_file);
        }

        outcome.copy_failures += copy_matches(&outcome.budget, &self.output_budget);
        outcome.copy_failures += copy_matches(&outcome.cfo, &self.output_cfo);

        info!(
            budget = outcome.budget.len(),
            cfo = outcome.cfo.len(),
            copy_failures = outcome.copy_failures,
            "classification complete"
        );
        outcome
    }
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}

/// Text files in a directory, sorted by file name. A missing or unreadable
/// directory is an empty corpus, not an error.
fn list_text_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "cannot read corpus directory");
            return Vec::new();
        }
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|ext| ext == TEXT_EXTENSION)
        })
        .collect();
    files.sort_by_key(|path| path.file_name().map(|n| n.to_os_string()));
    files
}

/// Pick the source file whose stem overlaps the normalized stem the most.
///
/// Candidates qualify when either stem contains the other; the overlap is
/// the shorter of the two stems. Ties fall to the lexicographically first
/// file name because `sources` arrives sorted.
fn find_best_match<'a>(normalized_stem: &str, sources: &'a [PathBuf]) -> Option<&'a PathBuf> {
    let mut best: Option<(usize, &PathBuf)> = None;
    for path in sources {
        let Some(stem) = file_stem(path) else { continue };
        if !normalized_stem.contains(&stem) && !stem.contains(normalized_stem) {
            continue;
        }
        let overlap = stem.len().min(normalized_stem.len());
        if best.map_or(true, |(best_overlap, _)| overlap > best_overlap) {
            best = Some((overlap, path));
        }
    }
    best.map(|(_, path)| path)
}

/// Copy files into a destination, keeping the original file name and
/// modification time. Returns the number of failed copies; each failure is
/// logged and the rest of the batch still runs.
fn copy_matches(files: &[PathBuf], destination: &Path) -> usize {
    let mut failures = 0;
    for file in files {
        let Some(name) = file.file_name() else {
            continue;
        };
        let target = destination.join(name);
        if let Err(e) = copy_with_mtime(file, &target) {
            warn!(
                file = %file.display(),
                target = %target.display(),
                error = %e,
                "failed to copy document"
            );
            failures += 1;
        }
    }
    failures
}

fn copy_with_mtime(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to)?;
    // Carry the source mtime over; failing to is not worth failing the copy.
    if let Ok(metadata) = fs::metadata(from) {
        let mtime = filetime::FileTime::from_last_modification_time(&metadata);
        let _ = filetime::set_file_mtime(to, mtime);
    }
    Ok(())
}
