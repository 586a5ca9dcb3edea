//! Integration tests for editor crate
//!
//! Drive the mutation engine and the HTML compiler together the way an
//! editor front end does.

use mailgrid_compiler_html::{compile_to_html, CompileOptions};
use mailgrid_editor::{
    ops, ColumnPath, ComponentKind, Document, EditorState, Mutation, MutationError, ViewMode,
};
use mailgrid_model::{IdCollector, SettingsPatch, TreeStats, Visitor};
use pretty_assertions::assert_eq;

fn first_column(doc: &Document, section: usize) -> ColumnPath {
    let section = &doc.sections[section];
    let row = &section.rows[0];
    ColumnPath::new(&section.id, &row.id, &row.columns[0].id)
}

fn texts(doc: &Document, path: &ColumnPath, contents: &[&str]) -> anyhow::Result<Document> {
    let mut doc = doc.clone();
    for content in contents {
        doc = ops::add_component(&doc, path, ComponentKind::Text)?;
        let id = doc
            .find_section(&path.section_id)
            .and_then(|s| s.find_row(&path.row_id))
            .and_then(|r| r.find_column(&path.column_id))
            .and_then(|c| c.components.last())
            .map(|c| c.id.clone())
            .ok_or_else(|| anyhow::anyhow!("component was not added"))?;
        doc = ops::update_component_content(&doc, path, &id, content)?;
    }
    Ok(doc)
}

#[test]
fn test_new_section_to_html() -> anyhow::Result<()> {
    // A new section already carries its [6, 6] row; the text goes in column 1
    let doc = ops::add_section(&Document::new("scenario"));
    let path = first_column(&doc, 0);
    let doc = ops::add_component(&doc, &path, ComponentKind::Text)?;

    let html = compile_to_html(&doc, &CompileOptions::default());

    assert_eq!(html.matches("<div class=\"section\">").count(), 1);
    assert_eq!(html.matches("<div class=\"row\">").count(), 1);
    assert_eq!(html.matches("<div class=\"column\" style='flex: 0.5;'>").count(), 2);

    let columns: Vec<_> = html.match_indices("<div class=\"column\"").map(|(i, _)| i).collect();
    let text = html.find("Default Text").unwrap();
    assert!(columns[0] < text && text < columns[1]);
    Ok(())
}

#[test]
fn test_add_row_appends_to_default_row() -> anyhow::Result<()> {
    let doc = ops::add_section(&Document::new("scenario"));
    let section_id = doc.sections[0].id.clone();
    let doc = ops::add_row_with_layout(&doc, &section_id, &[6, 6])?;

    let html = compile_to_html(&doc, &CompileOptions::default());

    assert_eq!(html.matches("<div class=\"row\">").count(), 2);
    assert_eq!(html.matches("style='flex: 0.5;'").count(), 4);
    Ok(())
}

#[test]
fn test_button_color_reaches_html() -> anyhow::Result<()> {
    let doc = ops::add_section(&Document::new("button"));
    let path = first_column(&doc, 0);
    let doc = ops::add_component(&doc, &path, ComponentKind::Button)?;
    let id = doc.sections[0].rows[0].columns[0].components[0].id.clone();

    let patch = SettingsPatch {
        button_color: Some("#112233".to_string()),
        ..Default::default()
    };
    let doc = ops::update_component_settings(&doc, &path, &id, &patch)?;
    let html = compile_to_html(&doc, &CompileOptions::default());

    let start = html.find("<button").unwrap();
    let end = start + html[start..].find('>').unwrap();
    assert!(html[start..end].contains("background-color: #112233"));
    Ok(())
}

#[test]
fn test_remove_missing_row_is_noop() -> anyhow::Result<()> {
    let doc = Document::starter("noop");
    let section_id = doc.sections[0].id.clone();

    let next = ops::remove_row(&doc, &section_id, "does-not-exist")?;

    assert_eq!(next, doc);
    Ok(())
}

#[test]
fn test_removal_is_idempotent() -> anyhow::Result<()> {
    let doc = ops::add_section(&Document::starter("idempotent"));
    let path = first_column(&doc, 1);

    let once = ops::remove_column(&doc, &path.section_id, &path.row_id, &path.column_id)?;
    let twice = ops::remove_column(&once, &path.section_id, &path.row_id, &path.column_id)?;
    assert_eq!(once, twice);

    let once = ops::remove_row(&doc, &path.section_id, &path.row_id)?;
    let twice = ops::remove_row(&once, &path.section_id, &path.row_id)?;
    assert_eq!(once, twice);

    let once = ops::remove_section(&doc, &path.section_id);
    let twice = ops::remove_section(&once, &path.section_id);
    assert_eq!(once, twice);
    assert_eq!(once.sections.len(), 1);
    Ok(())
}

#[test]
fn test_duplicate_row_mints_disjoint_ids() -> anyhow::Result<()> {
    let doc = Document::starter("duplicate");
    let section = &doc.sections[0];
    let before = doc.node_ids();

    let next = ops::duplicate_row(&doc, &section.id, &section.rows[0].id)?;
    let copy = &next.sections[0].rows[1];

    let mut collector = IdCollector::default();
    collector.visit_row(copy);
    assert!(collector.duplicates.is_empty());
    assert_eq!(collector.ids.len(), 5);
    assert!(collector.ids.is_disjoint(&before));

    let mut whole = IdCollector::default();
    whole.visit_document(&next);
    assert!(whole.duplicates.is_empty());
    Ok(())
}

#[test]
fn test_ids_never_reused_after_removal() -> anyhow::Result<()> {
    let doc = ops::add_section(&Document::new("reuse"));
    let removed_id = doc.sections[0].id.clone();

    let doc = ops::remove_section(&doc, &removed_id);
    let doc = ops::add_section(&doc);

    assert_ne!(doc.sections[0].id, removed_id);
    Ok(())
}

#[test]
fn test_column_overflow_is_noop() -> anyhow::Result<()> {
    let doc = Document::starter("overflow");
    let section = &doc.sections[0];

    for size in 1..=12 {
        let next = ops::add_column(&doc, &section.id, &section.rows[0].id, size)?;
        assert_eq!(next, doc, "size {} should not fit in a full row", size);
    }
    Ok(())
}

#[test]
fn test_move_component_round_trip() -> anyhow::Result<()> {
    let doc = ops::add_section(&Document::new("moves"));
    let path = first_column(&doc, 0);
    let doc = texts(&doc, &path, &["a", "b", "c", "d"])?;

    for i in 0..4 {
        for j in 0..4 {
            if i == j {
                continue;
            }
            let there = ops::move_component(&doc, &path, i, j)?;
            let back = ops::move_component(&there, &path, j, i)?;
            assert_eq!(back, doc, "move {} -> {} did not round-trip", i, j);
        }
    }
    Ok(())
}

#[test]
fn test_cross_column_move() -> anyhow::Result<()> {
    let doc = ops::add_section(&Document::new("cross"));
    let left = first_column(&doc, 0);
    let right = ColumnPath {
        column_id: doc.sections[0].rows[0].columns[1].id.clone(),
        ..left.clone()
    };
    let doc = texts(&doc, &left, &["moving"])?;
    let id = doc.sections[0].rows[0].columns[0].components[0].id.clone();

    let doc = ops::remove_component(&doc, &left, &id)?;
    let doc = ops::add_component(&doc, &right, ComponentKind::Text)?;

    let row = &doc.sections[0].rows[0];
    assert!(row.columns[0].components.is_empty());
    assert_eq!(row.columns[1].components.len(), 1);
    Ok(())
}

#[test]
fn test_move_row_is_document_wide() -> anyhow::Result<()> {
    let mut doc = Document::new("rows");
    for _ in 0..2 {
        doc = ops::add_section(&doc);
        let section_id = doc.sections.last().unwrap().id.clone();
        doc = ops::add_preset_row(&doc, &section_id, "1 Column")?;
    }

    let next = ops::move_row(&doc, 0, 1)?;

    for section in &next.sections {
        assert_eq!(section.rows[0].columns.len(), 1);
        assert_eq!(section.rows[1].columns.len(), 2);
    }
    Ok(())
}

#[test]
fn test_serializer_is_deterministic() -> anyhow::Result<()> {
    let doc = ops::add_section(&Document::starter("deterministic"));
    let path = first_column(&doc, 1);
    let doc = ops::add_component(&doc, &path, ComponentKind::Table)?;
    let options = CompileOptions::default();

    assert_eq!(compile_to_html(&doc, &options), compile_to_html(&doc, &options));
    Ok(())
}

#[test]
fn test_script_content_is_escaped() -> anyhow::Result<()> {
    let doc = ops::add_section(&Document::new("escape"));
    let path = first_column(&doc, 0);
    let doc = texts(&doc, &path, &["<script>alert(1)</script>"])?;

    let html = compile_to_html(&doc, &CompileOptions::default());

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    Ok(())
}

#[test]
fn test_mutation_requests_from_json() -> anyhow::Result<()> {
    let doc = Document::starter("requests");
    let section_id = &doc.sections[0].id;
    let json = format!(
        r#"[
            {{ "op": "addRow", "sectionId": "{section_id}", "sizes": [4, 8] }},
            {{ "op": "addPresetRow", "sectionId": "{section_id}", "preset": "Wide Center" }},
            {{ "op": "dropComponentOnSection", "sectionId": "{section_id}", "kind": "Img" }}
        ]"#
    );
    let mutations: Vec<Mutation> = serde_json::from_str(&json)?;

    let mut state = EditorState::new(doc, CompileOptions::default());
    let version = state.apply_batch(&mutations)?;

    assert_eq!(version, 3);
    let stats = TreeStats::of(state.document());
    assert_eq!(stats.rows, 3);
    assert_eq!(stats.columns, 7);
    assert_eq!(stats.components, 3);
    assert!(state.html().contains("<img src="));
    Ok(())
}

#[test]
fn test_code_view_is_lossless() -> anyhow::Result<()> {
    let mut state = EditorState::starter("code", CompileOptions::default());
    let path = first_column(state.document(), 0);
    state.apply(&Mutation::AddComponent {
        path,
        kind: ComponentKind::Menu,
    })?;
    state.set_view_mode(ViewMode::Code);

    let reloaded = Document::from_json(&state.render_view()?)?;
    assert_eq!(&reloaded, state.document());

    // Ids minted after a reload continue the counter
    let next = ops::add_section(&reloaded);
    assert!(!reloaded.node_ids().contains(&next.sections[1].id));
    Ok(())
}

#[test]
fn test_unknown_kind_is_rejected_but_preserved() -> anyhow::Result<()> {
    let doc = Document::starter("unknown");
    let mut json: serde_json::Value = serde_json::from_str(&doc.to_json_pretty()?)?;
    json["sections"][0]["rows"][0]["columns"][0]["components"][0]["type"] = "Carousel".into();
    let doc: Document = serde_json::from_value(json)?;

    let html = compile_to_html(&doc, &CompileOptions::default());
    assert!(html.contains("Welcome to the Email Editor!"));

    let path = first_column(&doc, 0);
    let err = ops::add_component(&doc, &path, ComponentKind::from("Carousel".to_string())).unwrap_err();
    assert!(matches!(err, MutationError::Model(_)));
    Ok(())
}
