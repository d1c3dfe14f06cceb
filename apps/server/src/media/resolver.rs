//! Media resolver
//!
//! Derives the public media URLs for a listing from the directory named by
//! its id under the configured media root. The result is computed on every
//! read; it is never persisted. Media absence or any enumeration failure
//! degrades to an empty list: a broken media area must never fail a listing
//! lookup.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::config::MediaConfig;

/// Extensions served as listing media, matched case-insensitively.
const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

#[derive(Debug, Clone)]
pub struct MediaResolver {
    root_dir: PathBuf,
    base_url: String,
}

impl MediaResolver {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            root_dir: config.root_dir.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the ordered media URLs for one listing.
    ///
    /// Direct regular files with a whitelisted extension, sorted by byte
    /// order of the original filename, each filename percent-encoded as a
    /// path segment.
    pub async fn resolve(&self, listing_id: i64) -> Vec<String> {
        let dir = self.root_dir.join(listing_id.to_string());

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!(listing_id, error = %err, "Failed to open media directory");
                return Vec::new();
            }
        };

        let mut names: Vec<String> = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    let file_type = match entry.file_type().await {
                        Ok(file_type) => file_type,
                        Err(err) => {
                            tracing::warn!(listing_id, error = %err, "Failed to stat media entry");
                            continue;
                        }
                    };
                    if !file_type.is_file() {
                        continue;
                    }
                    let Ok(name) = entry.file_name().into_string() else {
                        // Non-UTF-8 names cannot be represented in a URL
                        // faithfully; skip them.
                        tracing::warn!(listing_id, "Skipping media file with non-UTF-8 name");
                        continue;
                    };
                    if has_allowed_extension(&name) {
                        names.push(name);
                    }
                }
                Ok(None) => break,
                Err(err) => {
                    tracing::warn!(listing_id, error = %err, "Failed to enumerate media directory");
                    return Vec::new();
                }
            }
        }

        names.sort_unstable();
        names
            .iter()
            .map(|name| {
                format!(
                    "{}/{}/{}",
                    self.base_url,
                    listing_id,
                    urlencoding::encode(name)
                )
            })
            .collect()
    }
}

fn has_allowed_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}
