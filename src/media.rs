use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

/// Maps media references used in note markup (`<img src="0">`) to the
/// filenames stored in the archive.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MediaMap {
    entries: HashMap<String, String>,
}

impl MediaMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the manifest at `path`. An absent manifest yields an empty map.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(Error::io(path, e)),
        };

        let entries: HashMap<String, String> =
            serde_json::from_str(&content).map_err(|source| Error::Media {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Found {} media files in mapping", entries.len());

        Ok(Self { entries })
    }

    /// Filename for `reference`, falling back to the reference itself.
    pub fn resolve<'a>(&'a self, reference: &'a str) -> &'a str {
        self.entries
            .get(reference)
            .map(String::as_str)
            .unwrap_or(reference)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for MediaMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
