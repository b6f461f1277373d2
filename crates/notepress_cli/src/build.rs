//! Full-site payload generation.
//!
//! # Responsibility
//! - Render every registered folder and note route to a JSON file.
//!
//! # Invariants
//! - Each registered route is rendered exactly once.
//! - The first failing route aborts the build.

use anyhow::{Context, Result};
use log::info;
use notepress_core::{AssetRepository, PageService, RouteFamily, StaticPath};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Counts of rendered routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub folders: usize,
    pub notes: usize,
}

/// Writes all route payloads under `out_dir`.
pub fn build_site<R: AssetRepository>(
    service: &PageService<R>,
    out_dir: &Path,
) -> Result<BuildSummary> {
    let started_at = Instant::now();

    let folder_paths = service.folder_paths()?;
    for path in &folder_paths {
        let page = service
            .folder_page(Some(path.segments()))
            .with_context(|| format!("failed to build folder route `{}`", route_label(path)))?;
        write_json(&output_path(out_dir, path), &page)?;
    }

    let note_paths = service.note_paths()?;
    for path in &note_paths {
        let page = service
            .note_page(Some(path.segments()))
            .with_context(|| format!("failed to build note route `{}`", route_label(path)))?;
        write_json(&output_path(out_dir, path), &page)?;
    }

    let summary = BuildSummary {
        folders: folder_paths.len(),
        notes: note_paths.len(),
    };
    info!(
        "event=build module=cli status=ok folders={} notes={} out_dir={} duration_ms={}",
        summary.folders,
        summary.notes,
        out_dir.display(),
        started_at.elapsed().as_millis()
    );
    Ok(summary)
}

/// `folders/<segments>/index.json` or `notes/<segments>.json`.
pub fn output_path(out_dir: &Path, path: &StaticPath) -> PathBuf {
    let mut target = out_dir.join(path.family().as_str());
    match path.family() {
        RouteFamily::Folders => {
            target.extend(path.segments());
            target.push("index.json");
        }
        RouteFamily::Notes => {
            if let Some((last, parents)) = path.segments().split_last() {
                target.extend(parents);
                target.push(format!("{last}.json"));
            }
        }
    }
    target
}

fn route_label(path: &StaticPath) -> String {
    format!("/{}", path.segments().join("/"))
}

pub fn write_json<T: Serialize>(target: &Path, value: &T) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(target, json).with_context(|| format!("failed to write `{}`", target.display()))
}
