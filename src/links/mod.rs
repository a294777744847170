// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Flat symlink farm
//!
//! Links every regular file found directly inside the subdirectories of an
//! input directory into one output directory. Hidden entries and symlinks are
//! ignored, and existing names in the output directory are never replaced.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::error::{HostkeepError, Result};

/// A symlink to create: `name` will point at `target`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub name: PathBuf,
    pub target: PathBuf,
}

/// What happened to one planned link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Created(Link),
    /// The name already existed
    Skipped(Link),
}

impl LinkOutcome {
    pub fn link(&self) -> &Link {
        match self {
            LinkOutcome::Created(link) | LinkOutcome::Skipped(link) => link,
        }
    }
}

/// What [`make_links`] did, in link order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LinkReport {
    pub outcomes: Vec<LinkOutcome>,
}

impl LinkReport {
    pub fn created(&self) -> impl Iterator<Item = &Link> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            LinkOutcome::Created(link) => Some(link),
            LinkOutcome::Skipped(_) => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Link> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            LinkOutcome::Skipped(link) => Some(link),
            LinkOutcome::Created(_) => None,
        })
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|s| s.starts_with('.'))
            .unwrap_or(false)
}

/// Regular files one level below the subdirectories of `in_dir`, sorted by path.
pub fn collect_files(in_dir: &Path) -> Result<Vec<PathBuf>> {
    if !in_dir.is_dir() {
        return Err(HostkeepError::InvalidInput(format!(
            "{} is not a directory",
            in_dir.display()
        )));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(in_dir)
        .min_depth(1)
        .max_depth(2)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        // Depth 1 is only walked so hidden subdirectories get pruned.
        if entry.depth() < 2 || entry.path_is_symlink() || !entry.file_type().is_file() {
            continue;
        }
        files.push(entry.into_path());
    }

    Ok(files)
}

/// One link per file, named after the file's basename inside `out_dir`.
pub fn plan_links(files: &[PathBuf], out_dir: &Path) -> Vec<Link> {
    files
        .iter()
        .filter_map(|file| {
            let name = file.file_name()?;
            Some(Link {
                name: out_dir.join(name),
                target: file.clone(),
            })
        })
        .collect()
}

/// Create the planned links in order, skipping names that already exist.
///
/// A dangling symlink counts as existing.
pub fn make_links(links: &[Link]) -> Result<LinkReport> {
    make_links_with(links, |_| {})
}

/// Like [`make_links`], calling `on_outcome` as soon as each link is handled.
///
/// Outcomes reported before a failing link have already happened on disk.
pub fn make_links_with<F>(links: &[Link], mut on_outcome: F) -> Result<LinkReport>
where
    F: FnMut(&LinkOutcome),
{
    let mut report = LinkReport::default();

    for link in links {
        let outcome = if link.name.symlink_metadata().is_ok() {
            debug!("{} already exists", link.name.display());
            LinkOutcome::Skipped(link.clone())
        } else {
            create_symlink(&link.target, &link.name).map_err(|e| {
                HostkeepError::Link(format!(
                    "cannot link {} -> {}: {}",
                    link.name.display(),
                    link.target.display(),
                    e
                ))
            })?;
            info!(
                "Created link {} -> {}",
                link.name.display(),
                link.target.display()
            );
            LinkOutcome::Created(link.clone())
        };
        on_outcome(&outcome);
        report.outcomes.push(outcome);
    }

    Ok(report)
}

/// Plan and create links for every file below `in_dir` into `out_dir`.
pub fn link_subdir_files(in_dir: &Path, out_dir: &Path) -> Result<LinkReport> {
    link_subdir_files_with(in_dir, out_dir, |_| {})
}

/// Like [`link_subdir_files`], reporting each outcome as it happens.
pub fn link_subdir_files_with<F>(in_dir: &Path, out_dir: &Path, on_outcome: F) -> Result<LinkReport>
where
    F: FnMut(&LinkOutcome),
{
    let in_dir = std::path::absolute(in_dir)?;
    let out_dir = std::path::absolute(out_dir)?;

    if !out_dir.is_dir() {
        return Err(HostkeepError::InvalidInput(format!(
            "{} is not a directory",
            out_dir.display()
        )));
    }

    let files = collect_files(&in_dir)?;
    make_links_with(&plan_links(&files, &out_dir), on_outcome)
}

#[cfg(unix)]
fn create_symlink(target: &Path, name: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, name)
}

#[cfg(windows)]
fn create_symlink(target: &Path, name: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, name)
}
