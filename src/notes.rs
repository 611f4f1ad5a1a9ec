use crate::error::{Error, Result};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// Separator between fields in the `flds` column.
pub const FIELD_SEPARATOR: char = '\x1f';

/// One row of the `notes` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub fields: Vec<String>,
}

impl Note {
    pub fn new(id: impl Into<String>, flds: &str) -> Self {
        Self {
            id: id.into(),
            fields: flds.split(FIELD_SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// Raw markup of the first two fields, or `None` when the note has
    /// fewer than two. Further fields are ignored.
    pub fn prompt_and_answer(&self) -> Option<(&str, &str)> {
        match self.fields.as_slice() {
            [prompt, answer, ..] => Some((prompt.as_str(), answer.as_str())),
            _ => None,
        }
    }
}

/// Read every note from the collection database in storage order.
pub fn read_notes(db_path: &Path) -> Result<Vec<Note>> {
    let to_error = |source: rusqlite::Error| Error::Database {
        path: db_path.to_path_buf(),
        source,
    };

    let conn = Connection::open_with_flags(db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(to_error)?;
    let mut stmt = conn
        .prepare("SELECT id, flds FROM notes")
        .map_err(to_error)?;

    let rows = stmt
        .query_map([], |row| {
            let id = match row.get_ref(0)? {
                ValueRef::Integer(i) => i.to_string(),
                ValueRef::Text(text) => String::from_utf8_lossy(text).into_owned(),
                other => {
                    return Err(rusqlite::Error::InvalidColumnType(
                        0,
                        "id".to_string(),
                        other.data_type(),
                    ))
                }
            };
            let flds: String = row.get(1)?;
            Ok(Note::new(id, &flds))
        })
        .map_err(to_error)?;

    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(to_error)
}
