//! # apkg2json
//!
//! Convert an Anki deck archive (`.apkg`) into a flat JSON array of
//! flashcards, keeping the text of the first two note fields and the first
//! image on each side as a data URI.
//!
//! ```text
//! .apkg
//!  ├─ archive   unzip into a scratch directory (removed on drop)
//!  ├─ notes     SELECT id, flds FROM notes
//!  ├─ media     "media" manifest: reference → stored filename
//!  ├─ html      visible text + <img src> references
//!  ├─ image     first resolvable reference → data URI
//!  └─ card      pretty-printed JSON array
//! ```
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let summary = apkg2json::convert(Path::new("deck.apkg"), Path::new("cards.json"))?;
//! println!("{} cards", summary.cards);
//! # Ok::<(), apkg2json::Error>(())
//! ```

pub mod archive;
pub mod card;
pub mod cli;
pub mod converter;
pub mod error;
pub mod html;
pub mod image;
pub mod media;
pub mod notes;

pub use archive::ExtractedArchive;
pub use card::Card;
pub use converter::{convert, convert_deck, convert_in, ConversionSummary, ConvertedDeck};
pub use error::{Error, Result};
pub use media::MediaMap;
pub use notes::Note;
