//! Batch file processing
//!
//! Files are handled one at a time: read, back up, annotate, overwrite. A
//! failure is recorded in that file's [`FileReport`] and the run moves on.

use crate::annotate::DocumentAnnotator;
use crate::config::SiteConfig;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Result of processing one file
#[derive(Debug)]
pub struct FileReport {
    /// File name as listed in the directory
    pub file_name: String,
    /// Full path of the processed file
    pub path: PathBuf,
    /// `Ok` when the file was backed up and rewritten
    pub outcome: Result<()>,
}

impl FileReport {
    /// Whether the file was processed successfully
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Totals for a batch run
#[derive(Debug, Default)]
pub struct ProcessSummary {
    /// Files annotated and written back
    pub processed: usize,
    /// Files skipped because of an error
    pub failed: usize,
    /// Per-file reports in processing order
    pub reports: Vec<FileReport>,
}

impl ProcessSummary {
    /// Number of files attempted
    pub fn total(&self) -> usize {
        self.processed + self.failed
    }

    /// Whether any file failed
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Reports of the failed files
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.reports.iter().filter(|r| !r.is_success())
    }
}

/// Progress notifications emitted during a run
#[derive(Debug)]
pub enum ProcessEvent<'a> {
    /// Files were discovered and processing is about to begin
    Started {
        /// Number of matching files
        total: usize,
    },
    /// A file finished, successfully or not
    File(&'a FileReport),
    /// All files were attempted
    Finished(&'a ProcessSummary),
}

/// Sequential read/backup/annotate/write loop
pub struct FileProcessor {
    config: SiteConfig,
}

impl FileProcessor {
    /// Create a processor, validating the configuration
    pub fn new(config: SiteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Regular files in `dir` whose name ends with the configured
    /// extension, sorted by name
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if name.to_string_lossy().ends_with(&self.config.extension) {
                files.push(entry.path());
            }
        }

        files.sort();
        debug!("Discovered {} files in {}", files.len(), dir.display());
        Ok(files)
    }

    /// Create the backup directory if it does not exist
    pub fn prepare_backup_dir(&self) -> Result<()> {
        let dir = &self.config.backup_dir;
        fs::create_dir_all(dir).map_err(|source| Error::Backup {
            path: dir.clone(),
            source,
        })
    }

    /// Back up, annotate and overwrite a single file
    #[instrument(skip(self))]
    pub fn process_file(&self, path: &Path) -> Result<()> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::generic(format!("Invalid file name: {}", path.display())))?;

        let original = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let backup = self.config.backup_dir.join(file_name);
        fs::write(&backup, &original).map_err(|source| Error::Backup {
            path: backup.clone(),
            source,
        })?;
        debug!("Backed up {} to {}", file_name, backup.display());

        let annotated = DocumentAnnotator::new(&self.config).annotate(&original, file_name)?;

        fs::write(path, annotated).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }

    /// Process every matching file in `dir`.
    ///
    /// Only a failure to list `dir` or to create the backup directory aborts
    /// the run; per-file errors end up in the summary.
    #[instrument(skip(self, on_event))]
    pub fn process_all<F>(&self, dir: &Path, mut on_event: F) -> Result<ProcessSummary>
    where
        F: FnMut(ProcessEvent<'_>),
    {
        let files = self.discover(dir)?;
        self.prepare_backup_dir()?;

        info!(
            "Processing {} files from {} (backups in {})",
            files.len(),
            dir.display(),
            self.config.backup_dir.display()
        );
        on_event(ProcessEvent::Started { total: files.len() });

        let mut summary = ProcessSummary::default();
        for path in files {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let outcome = self.process_file(&path);

            match &outcome {
                Ok(()) => summary.processed += 1,
                Err(e) => {
                    warn!("Failed to process {}: {}", file_name, e);
                    summary.failed += 1;
                }
            }

            let report = FileReport {
                file_name,
                path,
                outcome,
            };
            on_event(ProcessEvent::File(&report));
            summary.reports.push(report);
        }

        info!(
            "Finished: {} processed, {} failed",
            summary.processed, summary.failed
        );
        on_event(ProcessEvent::Finished(&summary));
        Ok(summary)
    }
}
