use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One flashcard in the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub prompt: String,
    pub answer: String,
    /// Data URI of the first prompt image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_image: Option<String>,
    /// Data URI of the first answer image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_image: Option<String>,
}

/// Serialize `cards` as a pretty-printed JSON array (2-space indent, UTF-8,
/// non-ASCII left as is).
pub fn to_json(cards: &[Card]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(cards)
}

/// Write `cards` to `path`, replacing any existing file. The whole document
/// is serialized before the file is touched.
pub fn write_cards(path: &Path, cards: &[Card]) -> Result<()> {
    let json = to_json(cards).map_err(|e| Error::io(path, e.into()))?;
    fs::write(path, json).map_err(|e| Error::io(path, e))
}
