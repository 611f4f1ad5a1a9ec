//! Unpacking of `.apkg` deck archives into a scratch directory.

use crate::error::{Error, Result};
use std::fs::File;
use std::path::{Component, Path, PathBuf};
use tempfile::TempDir;
use tracing::info;
use zip::result::ZipError;
use zip::ZipArchive;

/// Collection database names, newest export format first.
const DATABASE_NAMES: [&str; 2] = ["collection.anki21", "collection.anki2"];

/// Name of the JSON file mapping media references to stored filenames.
const MEDIA_MANIFEST: &str = "media";

/// A deck archive extracted into its own temporary directory.
///
/// The directory is removed when this value is dropped, whichever way the
/// conversion ends.
pub struct ExtractedArchive {
    dir: TempDir,
}

impl ExtractedArchive {
    /// Extract `path` into a fresh directory under the system temp dir.
    pub fn unpack(path: &Path) -> Result<Self> {
        Self::unpack_in(path, &std::env::temp_dir())
    }

    /// Extract `path` into a fresh directory under `parent`.
    pub fn unpack_in(path: &Path, parent: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let mut archive = ZipArchive::new(file).map_err(|source| Error::Archive {
            path: path.to_path_buf(),
            source,
        })?;

        let dir = tempfile::Builder::new()
            .prefix("apkg2json-")
            .tempdir_in(parent)
            .map_err(|e| Error::io(parent, e))?;
        info!("Extracting to temporary directory: {}", dir.path().display());

        archive.extract(dir.path()).map_err(|e| match e {
            ZipError::Io(source) => Error::io(dir.path(), source),
            source => Error::Archive {
                path: path.to_path_buf(),
                source,
            },
        })?;

        Ok(Self { dir })
    }

    /// Root of the extracted contents; media files live directly under it.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn database_path(&self) -> Result<PathBuf> {
        DATABASE_NAMES
            .iter()
            .find_map(|name| contained_file(self.path(), Path::new(name)))
            .ok_or_else(|| Error::MissingDatabase {
                path: self.path().to_path_buf(),
            })
    }

    /// Location of the media manifest. The file may not exist.
    pub fn media_manifest_path(&self) -> PathBuf {
        self.path().join(MEDIA_MANIFEST)
    }

    /// Remove the scratch directory now, reporting failures instead of
    /// ignoring them as drop does.
    pub fn close(self) -> Result<()> {
        let path = self.path().to_path_buf();
        self.dir.close().map_err(|e| Error::io(path, e))
    }
}

/// `root.join(relative)` if it names a regular file that stays inside `root`
/// once symlinks are followed.
///
/// `relative` may only hold plain names and `.`; absolute paths and `..`
/// never resolve.
pub fn contained_file(root: &Path, relative: &Path) -> Option<PathBuf> {
    let lexical = relative
        .components()
        .all(|component| matches!(component, Component::CurDir | Component::Normal(_)));
    if !lexical {
        return None;
    }

    let path = root.join(relative);
    let canonical_root = root.canonicalize().ok()?;
    let canonical = path.canonicalize().ok()?;
    (canonical.starts_with(&canonical_root) && canonical.is_file()).then_some(path)
}
