//! Configuration scanning for certificate references

use crate::error::{Result, ScanError};
use crate::nginx::directives::DirectiveTree;
use std::path::{Path, PathBuf};
use tracing::warn;

/// One certificate reference extracted from an `ssl_certificate` directive,
/// labeled with the site it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveReference {
    pub certificate_path: PathBuf,
    pub label: String,
}

/// Collect certificate references from every `*.<suffix>` file directly
/// inside `folder`. Matching is non-recursive and the suffix is compared
/// literally.
///
/// A file that cannot be read or parsed is logged and skipped; only a
/// directory that cannot be enumerated at all fails the scan. References
/// whose certificate file is missing or empty are dropped. Re-invoking
/// re-reads the filesystem.
pub fn scan(folder: &Path, suffix: &str) -> Result<Vec<DirectiveReference>> {
    let entries = std::fs::read_dir(folder).map_err(|e| ScanError::DirectoryUnreadable {
        path: folder.display().to_string(),
        message: e.to_string(),
    })?;

    let wanted = format!(".{}", suffix);
    let mut references = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry in {}: {}", folder.display(), e);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches_suffix = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&wanted));
        if !matches_suffix {
            continue;
        }

        match scan_file(&path) {
            Ok(mut found) => references.append(&mut found),
            Err(e) => warn!("{}", e),
        }
    }

    Ok(references)
}

/// Extract every usable certificate reference from a single config file.
fn scan_file(path: &Path) -> Result<Vec<DirectiveReference>> {
    let raw = std::fs::read_to_string(path).map_err(|e| ScanError::FileUnreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let tree = DirectiveTree::parse(&raw).map_err(|e| ScanError::ConfigParseFailure {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    // The first server_name in the file labels every certificate found in it.
    let server_name = tree
        .find_directives("server_name")
        .first()
        .and_then(|directive| directive.first_parameter())
        .map(str::to_string);

    let mut references = Vec::new();
    for directive in tree.find_directives("ssl_certificate") {
        let Some(certificate) = directive.first_parameter() else {
            continue;
        };
        let certificate_path = PathBuf::from(certificate);

        if !has_content(&certificate_path) {
            continue;
        }

        // Without a server_name the certificate path itself is the label.
        let label = match &server_name {
            Some(name) => format!("https://{}", name),
            None => certificate.to_string(),
        };

        references.push(DirectiveReference {
            certificate_path,
            label,
        });
    }

    Ok(references)
}

/// Placeholder files and dangling symlinks are not worth evaluating.
fn has_content(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|metadata| metadata.len() > 0)
        .unwrap_or(false)
}
