//! Catalog file watching.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

/// Whether a filesystem event path refers to the watched catalog
fn is_catalog_path(event_path: &Path, canonical: &Path, file_name: Option<&std::ffi::OsStr>) -> bool {
    if let Ok(path) = event_path.canonicalize() {
        if path == canonical {
            return true;
        }
    }
    // Editors that replace the file can report a path that no longer resolves
    match (file_name, event_path.file_name()) {
        (Some(expected), Some(actual)) => expected == actual,
        _ => false,
    }
}

/// Set up a file watcher that flags `needs_reload` when the catalog changes
pub fn setup_catalog_watcher(
    catalog_path: PathBuf,
    needs_reload: Arc<Mutex<bool>>,
) -> Option<RecommendedWatcher> {
    let config = Config::default().with_poll_interval(Duration::from_millis(500));

    let canonical = catalog_path
        .canonicalize()
        .unwrap_or_else(|_| catalog_path.clone());
    let file_name = catalog_path.file_name().map(|s| s.to_os_string());

    let watcher_result = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            let Ok(event) = res else {
                return;
            };
            let matches = event
                .paths
                .iter()
                .any(|p| is_catalog_path(p, &canonical, file_name.as_deref()));
            if matches {
                if let Ok(mut flag) = needs_reload.lock() {
                    *flag = true;
                }
            }
        },
        config,
    );

    match watcher_result {
        Ok(mut watcher) => {
            // Watch the parent directory since some editors replace files
            let parent = match catalog_path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
                _ => PathBuf::from("."),
            };
            if let Err(e) = watcher.watch(&parent, RecursiveMode::NonRecursive) {
                tracing::warn!(path = %parent.display(), error = %e, "catalog watch failed");
                return None;
            }
            tracing::debug!(path = %catalog_path.display(), "watching catalog");
            Some(watcher)
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not create catalog watcher");
            None
        }
    }
}
