use crate::archive::contained_file;
use crate::error::{Error, Result};
use crate::media::MediaMap;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// MIME type used when the extension is missing or unrecognised.
pub const DEFAULT_MIME: &str = "image/jpeg";

/// Which side of a card an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Prompt,
    Answer,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Prompt => f.write_str("prompt"),
            Side::Answer => f.write_str("answer"),
        }
    }
}

/// MIME type for `path`, chosen by its case-insensitive extension.
pub fn mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => DEFAULT_MIME,
    }
}

pub fn data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Path of the media file `reference` points at, if it exists inside `root`.
///
/// Filenames that are absolute, climb out of `root`, or are symlinks to
/// somewhere outside it never resolve.
pub fn resolve_file(reference: &str, media: &MediaMap, root: &Path) -> Option<PathBuf> {
    contained_file(root, Path::new(media.resolve(reference)))
}

/// Encode the first of `references` that resolves to an existing file.
///
/// Later references are never looked at once one resolves, even if the
/// file fails to read.
pub fn first_image(
    side: Side,
    references: &[String],
    media: &MediaMap,
    root: &Path,
) -> Result<Option<String>> {
    for reference in references {
        let Some(path) = resolve_file(reference, media, root) else {
            debug!("No {} image file for reference: {}", side, reference);
            continue;
        };

        info!("Found {} image: {}", side, media.resolve(reference));
        let bytes = fs::read(&path).map_err(|e| Error::io(&path, e))?;
        return Ok(Some(data_uri(&bytes, mime_type(&path))));
    }

    Ok(None)
}
