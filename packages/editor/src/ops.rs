//! # Tree operations
//!
//! Pure, path-addressed edits. Each function takes the current document by
//! reference and returns a new one; on error the caller still holds the
//! untouched original, so an edit is either applied completely or not at
//! all.
//!
//! Lookups scan each level in order for a matching id. A missing parent is
//! always [`MutationError::NodeNotFound`]; removing an id that is already
//! gone from an existing parent is a no-op.

use crate::mutations::{MutationError, MutationResult, NodeKind};
use mailgrid_model::{
    find_preset, Column, Component, ComponentKind, Document, Row, Section, SettingsPatch, Settings,
    GRID_COLUMNS,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Address of a column: `(sectionId, rowId, columnId)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnPath {
    pub section_id: String,
    pub row_id: String,
    pub column_id: String,
}

impl ColumnPath {
    pub fn new(
        section_id: impl Into<String>,
        row_id: impl Into<String>,
        column_id: impl Into<String>,
    ) -> Self {
        Self {
            section_id: section_id.into(),
            row_id: row_id.into(),
            column_id: column_id.into(),
        }
    }
}

// Lookup helpers. They take the section list rather than the whole document
// so callers can keep minting ids from `doc.ids` while holding the result.

fn section_mut<'a>(sections: &'a mut [Section], section_id: &str) -> MutationResult<&'a mut Section> {
    sections
        .iter_mut()
        .find(|s| s.id == section_id)
        .ok_or_else(|| MutationError::not_found(NodeKind::Section, section_id))
}

fn row_mut<'a>(
    sections: &'a mut [Section],
    section_id: &str,
    row_id: &str,
) -> MutationResult<&'a mut Row> {
    section_mut(sections, section_id)?
        .rows
        .iter_mut()
        .find(|r| r.id == row_id)
        .ok_or_else(|| MutationError::not_found(NodeKind::Row, row_id))
}

fn column_mut<'a>(sections: &'a mut [Section], path: &ColumnPath) -> MutationResult<&'a mut Column> {
    row_mut(sections, &path.section_id, &path.row_id)?
        .columns
        .iter_mut()
        .find(|c| c.id == path.column_id)
        .ok_or_else(|| MutationError::not_found(NodeKind::Column, &path.column_id))
}

fn component_mut<'a>(
    sections: &'a mut [Section],
    path: &ColumnPath,
    component_id: &str,
) -> MutationResult<&'a mut Component> {
    column_mut(sections, path)?
        .components
        .iter_mut()
        .find(|c| c.id == component_id)
        .ok_or_else(|| MutationError::not_found(NodeKind::Component, component_id))
}

fn check_index(index: usize, len: usize) -> MutationResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(MutationError::IndexOutOfRange { index, len })
    }
}

fn reorder<T>(items: &mut Vec<T>, from_index: usize, to_index: usize) {
    if from_index != to_index {
        let item = items.remove(from_index);
        items.insert(to_index, item);
    }
}

/// Append a default section. Always succeeds.
pub fn add_section(doc: &Document) -> Document {
    let mut next = doc.clone();
    let section = Section::new(&mut next.ids);
    next.sections.push(section);
    next
}

/// Remove a section by id; absent ids are a no-op.
pub fn remove_section(doc: &Document, section_id: &str) -> Document {
    let mut next = doc.clone();
    next.sections.retain(|s| s.id != section_id);
    next
}

/// Append a default two-column row to a section.
pub fn add_row(doc: &Document, section_id: &str) -> MutationResult<Document> {
    let mut next = doc.clone();
    let section = section_mut(&mut next.sections, section_id)?;
    section.rows.push(Row::default_layout(&mut next.ids));
    Ok(next)
}

/// Append a row pre-populated with one column per size.
pub fn add_row_with_layout(
    doc: &Document,
    section_id: &str,
    column_sizes: &[u32],
) -> MutationResult<Document> {
    let mut next = doc.clone();
    let section = section_mut(&mut next.sections, section_id)?;
    let row = Row::new(column_sizes, &mut next.ids)?;
    section.rows.push(row);
    Ok(next)
}

/// Append a row built from a named layout preset, keeping its labels.
pub fn add_preset_row(doc: &Document, section_id: &str, preset: &str) -> MutationResult<Document> {
    let preset = find_preset(preset).ok_or_else(|| MutationError::not_found(NodeKind::Preset, preset))?;
    let mut next = doc.clone();
    let section = section_mut(&mut next.sections, section_id)?;
    let row = Row::from_preset(preset, &mut next.ids)?;
    section.rows.push(row);
    Ok(next)
}

/// Remove a row from a section; an absent row id is a no-op.
pub fn remove_row(doc: &Document, section_id: &str, row_id: &str) -> MutationResult<Document> {
    let mut next = doc.clone();
    section_mut(&mut next.sections, section_id)?
        .rows
        .retain(|r| r.id != row_id);
    Ok(next)
}

/// Deep-copy a row with fresh ids and insert it right after the original.
pub fn duplicate_row(doc: &Document, section_id: &str, row_id: &str) -> MutationResult<Document> {
    let mut next = doc.clone();
    let section = section_mut(&mut next.sections, section_id)?;
    let position = section
        .rows
        .iter()
        .position(|r| r.id == row_id)
        .ok_or_else(|| MutationError::not_found(NodeKind::Row, row_id))?;

    let copy = section.rows[position].duplicate(&mut next.ids);
    section.rows.insert(position + 1, copy);
    Ok(next)
}

/// Reorder rows at the same positions in every section of the document.
///
/// Dragging a row handle reorders that position everywhere; see
/// [`move_row_in_section`] for the reorder scoped to one section.
/// Sections too short for either index are left as they are. Fails with
/// [`MutationError::IndexOutOfRange`] only when no section can take the move.
pub fn move_row(doc: &Document, from_index: usize, to_index: usize) -> MutationResult<Document> {
    let mut next = doc.clone();
    let mut moved = false;
    let mut longest = 0;

    for section in &mut next.sections {
        let len = section.rows.len();
        longest = longest.max(len);
        if from_index < len && to_index < len {
            reorder(&mut section.rows, from_index, to_index);
            moved = true;
        }
    }

    if !moved {
        let index = if from_index >= longest { from_index } else { to_index };
        return Err(MutationError::IndexOutOfRange { index, len: longest });
    }
    Ok(next)
}

/// Reorder rows within a single section.
pub fn move_row_in_section(
    doc: &Document,
    section_id: &str,
    from_index: usize,
    to_index: usize,
) -> MutationResult<Document> {
    let mut next = doc.clone();
    let section = section_mut(&mut next.sections, section_id)?;
    check_index(from_index, section.rows.len())?;
    check_index(to_index, section.rows.len())?;
    reorder(&mut section.rows, from_index, to_index);
    Ok(next)
}

/// Append a column if the row has room for it.
///
/// A column that would push the row past the grid width is not added and
/// the document comes back unchanged; that is not an error.
pub fn add_column(doc: &Document, section_id: &str, row_id: &str, size: u32) -> MutationResult<Document> {
    let mut next = doc.clone();
    let row = row_mut(&mut next.sections, section_id, row_id)?;

    let used = row.used_width();
    if used + u64::from(size) > u64::from(GRID_COLUMNS) {
        debug!(row_id, used, size, "Column does not fit, leaving row unchanged");
        return Ok(doc.clone());
    }

    let label = Column::default_label(row.columns.len());
    let column = Column::new(size, label, &mut next.ids)?;
    row.columns.push(column);
    Ok(next)
}

/// Remove a column and its components; an absent column id is a no-op.
pub fn remove_column(
    doc: &Document,
    section_id: &str,
    row_id: &str,
    column_id: &str,
) -> MutationResult<Document> {
    let mut next = doc.clone();
    row_mut(&mut next.sections, section_id, row_id)?
        .columns
        .retain(|c| c.id != column_id);
    Ok(next)
}

/// Append a new component of `kind` to a column.
pub fn add_component(doc: &Document, path: &ColumnPath, kind: ComponentKind) -> MutationResult<Document> {
    let mut next = doc.clone();
    let column = column_mut(&mut next.sections, path)?;
    let component = Component::new(kind, &mut next.ids)?;
    column.components.push(component);
    Ok(next)
}

/// A component dropped on a section body lands in the first column of the
/// first row. Sections without any column are left unchanged.
pub fn drop_component_on_section(
    doc: &Document,
    section_id: &str,
    kind: ComponentKind,
) -> MutationResult<Document> {
    let mut next = doc.clone();
    let section = section_mut(&mut next.sections, section_id)?;

    let Some(column) = section.rows.first_mut().and_then(|r| r.columns.first_mut()) else {
        debug!(section_id, "Section has no column to receive the component");
        return Ok(doc.clone());
    };

    let component = Component::new(kind, &mut next.ids)?;
    column.components.push(component);
    Ok(next)
}

/// Remove a component from a column; an absent component id is a no-op.
pub fn remove_component(doc: &Document, path: &ColumnPath, component_id: &str) -> MutationResult<Document> {
    let mut next = doc.clone();
    column_mut(&mut next.sections, path)?
        .components
        .retain(|c| c.id != component_id);
    Ok(next)
}

/// Move the component at `from_index` to `to_index` within one column.
pub fn move_component(
    doc: &Document,
    path: &ColumnPath,
    from_index: usize,
    to_index: usize,
) -> MutationResult<Document> {
    let mut next = doc.clone();
    let column = column_mut(&mut next.sections, path)?;
    check_index(from_index, column.components.len())?;
    check_index(to_index, column.components.len())?;
    reorder(&mut column.components, from_index, to_index);
    Ok(next)
}

/// Replace the component with the same id inside the addressed column.
///
/// Only that column is searched.
pub fn update_component(doc: &Document, path: &ColumnPath, updated: Component) -> MutationResult<Document> {
    let mut next = doc.clone();
    let slot = component_mut(&mut next.sections, path, &updated.id)?;
    *slot = updated;
    Ok(next)
}

pub fn update_component_content(
    doc: &Document,
    path: &ColumnPath,
    component_id: &str,
    content: &str,
) -> MutationResult<Document> {
    let mut next = doc.clone();
    component_mut(&mut next.sections, path, component_id)?.content = content.to_string();
    Ok(next)
}

/// Shallow-merge a settings patch onto a component's settings.
pub fn update_component_settings(
    doc: &Document,
    path: &ColumnPath,
    component_id: &str,
    patch: &SettingsPatch,
) -> MutationResult<Document> {
    let mut next = doc.clone();
    component_mut(&mut next.sections, path, component_id)?
        .settings
        .merge(patch);
    Ok(next)
}

/// Restore a component's settings to the defaults.
pub fn reset_component_settings(
    doc: &Document,
    path: &ColumnPath,
    component_id: &str,
) -> MutationResult<Document> {
    let mut next = doc.clone();
    component_mut(&mut next.sections, path, component_id)?.settings = Settings::default();
    Ok(next)
}
