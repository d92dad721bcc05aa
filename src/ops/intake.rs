//! Media intake validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;

use crate::types::session::MediaDescriptor;

/// Upload cap carried over from the review backend.
pub const MAX_MEDIA_BYTES: u64 = 500 * 1024 * 1024;

const ALLOWED_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "jpg", "jpeg", "png"];

/// Check a candidate evidence file and describe it for the session.
///
/// Rejects unsupported extensions and files over the size cap before any
/// analysis state is touched.
pub fn validate_media_file(path: &Path) -> Result<MediaDescriptor> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext) => {}
        Some(ext) => bail!("unsupported media type .{ext} (expected mp4, avi, mov, jpg or png)"),
        None => bail!("{} has no file extension", path.display()),
    }

    let meta = fs::metadata(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    if !meta.is_file() {
        bail!("{} is not a regular file", path.display());
    }
    if meta.len() > MAX_MEDIA_BYTES {
        bail!(
            "{} is {} MB, over the {} MB limit",
            path.display(),
            meta.len() / (1024 * 1024),
            MAX_MEDIA_BYTES / (1024 * 1024)
        );
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("evidence")
        .to_string();
    info!("accepted media file {} ({} bytes)", file_name, meta.len());

    Ok(MediaDescriptor {
        file_name,
        path: path.to_path_buf(),
        size: meta.len(),
    })
}
