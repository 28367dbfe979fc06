use notekeep::api::{visible_sorted, ExportFormat, NotesApi};
use notekeep::config::NotesConfig;
use notekeep::error::NotesError;
use notekeep::index::NoteSelector;
use notekeep::model::{Note, NoteDraft};
use notekeep::store::fs_backend::FsBackend;
use std::path::Path;

fn open(root: &Path) -> NotesApi<FsBackend> {
    NotesApi::new(FsBackend::new(root), NotesConfig::default())
}

fn texts(notes: &[impl AsRef<Note>]) -> Vec<String> {
    notes.iter().map(|n| n.as_ref().text.clone()).collect()
}

#[test]
fn test_pin_then_archive_scenario() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut api = open(temp_dir.path());
    assert!(api.notes().is_empty());

    api.create(NoteDraft::new("Buy milk", "Personal", "Low", "#fff"))
        .unwrap();
    assert_eq!(api.notes().len(), 1);
    assert_eq!(api.notes()[0].text, "Buy milk");
    assert!(!api.notes()[0].pinned);
    assert!(!api.notes()[0].archived);

    api.toggle_pin(0usize).unwrap();
    assert!(api.notes()[0].pinned);

    api.create(NoteDraft::new("Call bank", "Work", "High", "#ffeb3b"))
        .unwrap();
    assert_eq!(texts(&visible_sorted(api.notes())), vec!["Buy milk", "Call bank"]);

    api.toggle_archive(1usize).unwrap();
    assert_eq!(texts(&visible_sorted(api.notes())), vec!["Buy milk"]);

    // archived notes are hidden, not gone
    assert_eq!(api.notes().len(), 2);
    assert_eq!(api.query("").len(), 2);
}

#[test]
fn test_edit_out_of_bounds_scenario() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut api = open(temp_dir.path());
    for text in ["a", "b", "c"] {
        api.create_text(text).unwrap();
    }
    let before = api.notes().to_vec();

    let err = api.edit(5usize, "x").unwrap_err();

    assert!(matches!(
        err,
        NotesError::IndexOutOfBounds { index: 5, len: 3 }
    ));
    assert_eq!(api.notes(), before.as_slice());
}

#[test]
fn test_collection_survives_reopen() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut api = open(temp_dir.path());
    api.create(NoteDraft::new("Buy milk", "Personal", "Low", "#fff"))
        .unwrap();
    api.create(NoteDraft::new("Call bank", "Work", "High", "#ffeb3b"))
        .unwrap();
    api.create_text("Water plants").unwrap();
    api.toggle_pin(2usize).unwrap();
    api.toggle_archive(0usize).unwrap();
    api.edit(1usize, "Call the bank").unwrap();
    let saved = api.notes().to_vec();

    let reopened = open(temp_dir.path());

    assert_eq!(reopened.notes().len(), saved.len());
    for (a, b) in saved.iter().zip(reopened.notes()) {
        assert!(a.same_content(b), "{:?} != {:?}", a, b);
    }
}

#[test]
fn test_stored_blob_has_persisted_shape() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut api = open(temp_dir.path());
    api.create(NoteDraft::new("Buy milk", "Personal", "Low", "#fff"))
        .unwrap();

    let raw = std::fs::read_to_string(temp_dir.path().join("notes.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &value.as_array().unwrap()[0];

    assert_eq!(entry["text"], "Buy milk");
    assert_eq!(entry["category"], "Personal");
    assert_eq!(entry["priority"], "Low");
    assert_eq!(entry["color"], "#fff");
    assert_eq!(entry["pinned"], false);
    assert_eq!(entry["archived"], false);
    assert!(entry["timestamp"].is_i64());
    assert_eq!(entry.as_object().unwrap().len(), 7);
}

#[test]
fn test_corrupt_store_starts_empty_and_recovers() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("notes.json"), "this is not json").unwrap();

    let mut api = open(temp_dir.path());
    assert!(api.notes().is_empty());

    api.create_text("fresh start").unwrap();
    let reopened = open(temp_dir.path());
    assert_eq!(texts(reopened.notes()), vec!["fresh start"]);
}

#[test]
fn test_ids_stay_valid_when_display_order_diverges() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut api = open(temp_dir.path());
    for text in ["first", "second", "third", "fourth"] {
        api.create_text(text).unwrap();
    }
    api.toggle_pin(3usize).unwrap();
    api.toggle_archive(0usize).unwrap();

    // display: fourth (pinned), second, third
    let shown = api.visible("");
    assert_eq!(texts(&shown), vec!["fourth", "second", "third"]);

    // acting on display row 1 must hit "second", which sits at storage position 1
    let row = shown[1].clone();
    api.edit(&row, "second, edited").unwrap();
    assert_eq!(api.notes()[1].text, "second, edited");
    assert_eq!(api.notes()[3].text, "fourth");

    // deleting an earlier note shifts positions but not ids
    api.delete(NoteSelector::Position(0)).unwrap();
    assert_eq!(api.position_of(row.note.id), Some(0));
    api.toggle_pin(&row).unwrap();
    assert!(api.notes()[0].pinned);
}

#[test]
fn test_search_then_sort_for_display() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut api = open(temp_dir.path());
    for text in ["Milk", "Bread", "oat milk", "Almond MILK"] {
        api.create_text(text).unwrap();
    }
    api.toggle_pin(3usize).unwrap();
    api.toggle_archive(0usize).unwrap();

    let found = api.query("milk");
    assert_eq!(texts(&found), vec!["Milk", "oat milk", "Almond MILK"]);

    let shown = api.visible("milk");
    assert_eq!(texts(&shown), vec!["Almond MILK", "oat milk"]);
    let positions: Vec<_> = shown.iter().map(|dn| dn.position).collect();
    assert_eq!(positions, vec![3, 2]);
}

#[test]
fn test_json_export_includes_archived() {
    let temp_dir = tempfile::tempdir().unwrap();
    let export_dir = temp_dir.path().join("exports");
    let mut api = open(&temp_dir.path().join("data"));
    api.create_text("kept").unwrap();
    api.create_text("archived").unwrap();
    api.toggle_archive(1usize).unwrap();

    let result = api.export(ExportFormat::Json, &export_dir).unwrap();

    let path = result.export_path.unwrap();
    let exported: Vec<Note> =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(texts(&exported), vec!["kept", "archived"]);
    assert!(exported[1].archived);
}

#[test]
fn test_empty_collection_exports_empty_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    let export_dir = temp_dir.path().join("exports");
    let api = open(&temp_dir.path().join("data"));

    let result = api.export(ExportFormat::Json, &export_dir).unwrap();

    let path = result.export_path.unwrap();
    let exported: Vec<Note> =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert!(exported.is_empty());
}
