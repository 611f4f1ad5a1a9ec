use crate::archive::ExtractedArchive;
use crate::card::{self, Card};
use crate::error::Result;
use crate::html;
use crate::image::{self, Side};
use crate::media::MediaMap;
use crate::notes::{self, Note};
use std::path::Path;
use tracing::{debug, info};

/// Counts gathered while converting one archive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Notes read from the collection.
    pub notes: usize,
    /// Cards emitted.
    pub cards: usize,
    /// Notes dropped for having fewer than two fields.
    pub skipped: usize,
    /// Images embedded across both sides of all cards.
    pub images: usize,
}

pub struct ConvertedDeck {
    pub cards: Vec<Card>,
    pub summary: ConversionSummary,
}

/// Convert the archive at `input` and write the cards as JSON to `output`.
///
/// The scratch directory is created under the system temp dir and removed on
/// every path out of this function.
pub fn convert(input: &Path, output: &Path) -> Result<ConversionSummary> {
    convert_in(input, output, &std::env::temp_dir())
}

/// Like [`convert`], with the scratch directory created under `scratch_parent`.
pub fn convert_in(
    input: &Path,
    output: &Path,
    scratch_parent: &Path,
) -> Result<ConversionSummary> {
    let archive = ExtractedArchive::unpack_in(input, scratch_parent)?;
    let deck = convert_deck(&archive)?;

    card::write_cards(output, &deck.cards)?;
    let summary = deck.summary;
    debug!(
        notes = summary.notes,
        skipped = summary.skipped,
        images = summary.images,
        "Conversion summary"
    );
    info!("Converted {} cards to {}", summary.cards, output.display());

    archive.close()?;
    Ok(summary)
}

/// Build cards for every usable note in an extracted archive.
pub fn convert_deck(archive: &ExtractedArchive) -> Result<ConvertedDeck> {
    let media = MediaMap::load(&archive.media_manifest_path())?;
    let notes = notes::read_notes(&archive.database_path()?)?;

    let mut summary = ConversionSummary {
        notes: notes.len(),
        ..Default::default()
    };
    let mut cards = Vec::new();

    for note in &notes {
        let Some(card) = build_card(note, &media, archive.path())? else {
            debug!("Skipping note {} with {} field(s)", note.id, note.fields.len());
            summary.skipped += 1;
            continue;
        };

        summary.images +=
            usize::from(card.prompt_image.is_some()) + usize::from(card.answer_image.is_some());
        cards.push(card);
    }
    summary.cards = cards.len();

    Ok(ConvertedDeck { cards, summary })
}

/// Card for `note`, or `None` if it has fewer than two fields.
pub fn build_card(note: &Note, media: &MediaMap, root: &Path) -> Result<Option<Card>> {
    let Some((prompt_html, answer_html)) = note.prompt_and_answer() else {
        return Ok(None);
    };

    let prompt_image =
        image::first_image(Side::Prompt, &html::image_sources(prompt_html), media, root)?;
    let answer_image =
        image::first_image(Side::Answer, &html::image_sources(answer_html), media, root)?;

    Ok(Some(Card {
        id: note.id.clone(),
        prompt: html::extract_text(prompt_html),
        answer: html::extract_text(answer_html),
        prompt_image,
        answer_image,
    }))
}
