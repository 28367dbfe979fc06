use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotesError, Result};
use crate::model::Note;
use crate::store::{NoteStore, StorageBackend};
use chrono::{DateTime, Utc};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

const JSON_EXPORT_FILENAME: &str = "notes.json";
const ENTRY_TITLE_CHARS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// The collection verbatim, pretty-printed, in the persisted shape.
    Json,
    /// A `.tar.gz` with one readable text file per note.
    Archive,
}

/// Writes every note, archived ones included, in storage order into `dir`.
///
/// JSON always writes the file (`[]` for an empty collection); an archive of nothing is
/// skipped with a warning.
pub fn run<B: StorageBackend>(
    store: &NoteStore<B>,
    format: ExportFormat,
    dir: &Path,
) -> Result<CmdResult> {
    let notes = store.notes();
    if notes.is_empty() && format == ExportFormat::Archive {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::warning("No notes to export."));
        return Ok(res);
    }

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(NotesError::Io)?;
    }

    let filename = match format {
        ExportFormat::Json => JSON_EXPORT_FILENAME.to_string(),
        ExportFormat::Archive => format!(
            "notes-{}.tar.gz",
            Utc::now().format("%Y-%m-%d_%H-%M-%S")
        ),
    };
    let path = dir.join(filename);
    let file = File::create(&path).map_err(NotesError::Io)?;

    match format {
        ExportFormat::Json => write_json(file, notes)?,
        ExportFormat::Archive => write_archive(file, notes)?,
    }
    tracing::info!(path = %path.display(), count = notes.len(), "exported notes");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} notes to {}",
        notes.len(),
        path.display()
    )));
    Ok(result.with_export_path(path))
}

fn write_json<W: Write>(mut writer: W, notes: &[Note]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, notes).map_err(NotesError::Serialization)?;
    writer.flush().map_err(NotesError::Io)?;
    Ok(())
}

fn write_archive<W: Write>(writer: W, notes: &[Note]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for (position, note) in notes.iter().enumerate() {
        let entry_name = format!(
            "notes/{:03}-{}.txt",
            position + 1,
            sanitize_filename(&note.text)
        );
        let content = render_note(note);

        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, content.as_bytes())
            .map_err(NotesError::Io)?;
    }

    tar.into_inner()
        .and_then(|enc| enc.finish())
        .map_err(NotesError::Io)?;
    Ok(())
}

fn render_note(note: &Note) -> String {
    let date = DateTime::<Utc>::from_timestamp_millis(note.timestamp)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| note.timestamp.to_string());

    let mut flags = Vec::new();
    if note.pinned {
        flags.push("pinned");
    }
    if note.archived {
        flags.push("archived");
    }

    let mut details = format!(
        "Category: {} | Priority: {} | Date: {} | Color: {}",
        note.category, note.priority, date, note.color
    );
    if !flags.is_empty() {
        details.push_str(&format!(" | {}", flags.join(", ")));
    }

    format!("{}\n\n{}\n", note.text, details)
}

fn sanitize_filename(text: &str) -> String {
    let title: String = text
        .chars()
        .take(ENTRY_TITLE_CHARS)
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let title = title.trim_matches('_');
    if title.is_empty() {
        "note".to_string()
    } else {
        title.to_string()
    }
}
