//! # Template Mutations
//!
//! Serializable edit requests against a template tree.
//!
//! ## Design Principles
//!
//! 1. **Pure**: Applying a mutation never touches its input document
//! 2. **Atomic**: A rejected mutation leaves no partial edit behind
//! 3. **Path-addressed**: Columns and components are located through their
//!    section and row, never by a global search
//!
//! ## Mutation Semantics
//!
//! ### Remove
//! - Removing an id that is already gone is a no-op
//! - A missing parent is an error
//!
//! ### AddColumn
//! - A column that would overflow the 12-unit grid is silently skipped
//!
//! ### MoveRow
//! - Reorders rows at the same positions in every section;
//!   `MoveRowInSection` is the section-scoped variant

use crate::ops::{self, ColumnPath};
use mailgrid_model::{Component, ComponentKind, Document, ModelError, SettingsPatch};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Semantic edits of a template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    AddSection,

    RemoveSection {
        section_id: String,
    },

    /// Append a row; `sizes` defaults to two half-width columns
    AddRow {
        section_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sizes: Option<Vec<u32>>,
    },

    /// Append a row from a named layout preset
    AddPresetRow {
        section_id: String,
        preset: String,
    },

    RemoveRow {
        section_id: String,
        row_id: String,
    },

    DuplicateRow {
        section_id: String,
        row_id: String,
    },

    /// Reorder rows in every section
    MoveRow {
        from_index: usize,
        to_index: usize,
    },

    MoveRowInSection {
        section_id: String,
        from_index: usize,
        to_index: usize,
    },

    AddColumn {
        section_id: String,
        row_id: String,
        size: u32,
    },

    RemoveColumn {
        section_id: String,
        row_id: String,
        column_id: String,
    },

    AddComponent {
        path: ColumnPath,
        kind: ComponentKind,
    },

    /// Drop a component on a section body
    DropComponentOnSection {
        section_id: String,
        kind: ComponentKind,
    },

    RemoveComponent {
        path: ColumnPath,
        component_id: String,
    },

    MoveComponent {
        path: ColumnPath,
        from_index: usize,
        to_index: usize,
    },

    /// Replace a component wholesale, matched by id
    UpdateComponent {
        path: ColumnPath,
        component: Box<Component>,
    },

    UpdateComponentContent {
        path: ColumnPath,
        component_id: String,
        content: String,
    },

    UpdateComponentSettings {
        path: ColumnPath,
        component_id: String,
        settings: SettingsPatch,
    },

    ResetComponentSettings {
        path: ColumnPath,
        component_id: String,
    },
}

/// Tree level a lookup failed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Section,
    Row,
    Column,
    Component,
    Preset,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Section => "Section",
            NodeKind::Row => "Row",
            NodeKind::Column => "Column",
            NodeKind::Component => "Component",
            NodeKind::Preset => "Layout preset",
        };
        f.write_str(name)
    }
}

/// Node ids a mutation is addressed to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Target<'a> {
    pub section_id: Option<&'a str>,
    pub row_id: Option<&'a str>,
    pub column_id: Option<&'a str>,
    pub component_id: Option<&'a str>,
}

impl<'a> Target<'a> {
    fn column(path: &'a ColumnPath) -> Self {
        Self {
            section_id: Some(&path.section_id),
            row_id: Some(&path.row_id),
            column_id: Some(&path.column_id),
            component_id: None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("{kind} not found: {id}")]
    NodeNotFound { kind: NodeKind, id: String },

    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl MutationError {
    pub fn not_found(kind: NodeKind, id: impl Into<String>) -> Self {
        MutationError::NodeNotFound { kind, id: id.into() }
    }
}

pub type MutationResult<T> = Result<T, MutationError>;

impl Mutation {
    /// Apply the mutation, returning the edited copy
    pub fn apply(&self, doc: &Document) -> MutationResult<Document> {
        let target = self.target();
        debug!(
            op = self.name(),
            section_id = ?target.section_id,
            row_id = ?target.row_id,
            column_id = ?target.column_id,
            component_id = ?target.component_id,
            "Applying mutation"
        );

        match self {
            Mutation::AddSection => Ok(ops::add_section(doc)),
            Mutation::RemoveSection { section_id } => Ok(ops::remove_section(doc, section_id)),
            Mutation::AddRow { section_id, sizes } => match sizes {
                Some(sizes) => ops::add_row_with_layout(doc, section_id, sizes),
                None => ops::add_row(doc, section_id),
            },
            Mutation::AddPresetRow { section_id, preset } => {
                ops::add_preset_row(doc, section_id, preset)
            }
            Mutation::RemoveRow { section_id, row_id } => ops::remove_row(doc, section_id, row_id),
            Mutation::DuplicateRow { section_id, row_id } => {
                ops::duplicate_row(doc, section_id, row_id)
            }
            Mutation::MoveRow { from_index, to_index } => ops::move_row(doc, *from_index, *to_index),
            Mutation::MoveRowInSection { section_id, from_index, to_index } => {
                ops::move_row_in_section(doc, section_id, *from_index, *to_index)
            }
            Mutation::AddColumn { section_id, row_id, size } => {
                ops::add_column(doc, section_id, row_id, *size)
            }
            Mutation::RemoveColumn { section_id, row_id, column_id } => {
                ops::remove_column(doc, section_id, row_id, column_id)
            }
            Mutation::AddComponent { path, kind } => ops::add_component(doc, path, kind.clone()),
            Mutation::DropComponentOnSection { section_id, kind } => {
                ops::drop_component_on_section(doc, section_id, kind.clone())
            }
            Mutation::RemoveComponent { path, component_id } => {
                ops::remove_component(doc, path, component_id)
            }
            Mutation::MoveComponent { path, from_index, to_index } => {
                ops::move_component(doc, path, *from_index, *to_index)
            }
            Mutation::UpdateComponent { path, component } => {
                ops::update_component(doc, path, component.as_ref().clone())
            }
            Mutation::UpdateComponentContent { path, component_id, content } => {
                ops::update_component_content(doc, path, component_id, content)
            }
            Mutation::UpdateComponentSettings { path, component_id, settings } => {
                ops::update_component_settings(doc, path, component_id, settings)
            }
            Mutation::ResetComponentSettings { path, component_id } => {
                ops::reset_component_settings(doc, path, component_id)
            }
        }
    }

    /// Ids the mutation addresses, outermost first
    pub fn target(&self) -> Target<'_> {
        let mut target = Target::default();
        match self {
            Mutation::AddSection | Mutation::MoveRow { .. } => {}
            Mutation::RemoveSection { section_id }
            | Mutation::AddRow { section_id, .. }
            | Mutation::AddPresetRow { section_id, .. }
            | Mutation::MoveRowInSection { section_id, .. }
            | Mutation::DropComponentOnSection { section_id, .. } => {
                target.section_id = Some(section_id);
            }
            Mutation::RemoveRow { section_id, row_id }
            | Mutation::DuplicateRow { section_id, row_id }
            | Mutation::AddColumn { section_id, row_id, .. } => {
                target.section_id = Some(section_id);
                target.row_id = Some(row_id);
            }
            Mutation::RemoveColumn { section_id, row_id, column_id } => {
                target.section_id = Some(section_id);
                target.row_id = Some(row_id);
                target.column_id = Some(column_id);
            }
            Mutation::AddComponent { path, .. } | Mutation::MoveComponent { path, .. } => {
                target = Target::column(path);
            }
            Mutation::UpdateComponent { path, component } => {
                target = Target::column(path);
                target.component_id = Some(&component.id);
            }
            Mutation::RemoveComponent { path, component_id }
            | Mutation::UpdateComponentContent { path, component_id, .. }
            | Mutation::UpdateComponentSettings { path, component_id, .. }
            | Mutation::ResetComponentSettings { path, component_id } => {
                target = Target::column(path);
                target.component_id = Some(component_id);
            }
        }
        target
    }

    /// Wire name of the operation
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddSection => "addSection",
            Mutation::RemoveSection { .. } => "removeSection",
            Mutation::AddRow { .. } => "addRow",
            Mutation::AddPresetRow { .. } => "addPresetRow",
            Mutation::RemoveRow { .. } => "removeRow",
            Mutation::DuplicateRow { .. } => "duplicateRow",
            Mutation::MoveRow { .. } => "moveRow",
            Mutation::MoveRowInSection { .. } => "moveRowInSection",
            Mutation::AddColumn { .. } => "addColumn",
            Mutation::RemoveColumn { .. } => "removeColumn",
            Mutation::AddComponent { .. } => "addComponent",
            Mutation::DropComponentOnSection { .. } => "dropComponentOnSection",
            Mutation::RemoveComponent { .. } => "removeComponent",
            Mutation::MoveComponent { .. } => "moveComponent",
            Mutation::UpdateComponent { .. } => "updateComponent",
            Mutation::UpdateComponentContent { .. } => "updateComponentContent",
            Mutation::UpdateComponentSettings { .. } => "updateComponentSettings",
            Mutation::ResetComponentSettings { .. } => "resetComponentSettings",
        }
    }
}
