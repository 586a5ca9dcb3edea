//! # Editor State
//!
//! The explicit state an editor front end drives: the current template,
//! which component is selected, which view is showing, and the HTML compiled
//! from the current template.
//!
//! Every accepted mutation runs the pipeline Mutate → Recompile, so `html`
//! always matches `document`.

use crate::{EditorError, Mutation, MutationError, NodeKind};
use mailgrid_compiler_html::{compile_to_html, CompileOptions};
use mailgrid_model::{Document, NodeId};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Which pane the editor is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    /// Drag-and-drop canvas
    #[default]
    Editor,
    /// Raw template JSON
    Code,
    /// Compiled HTML preview
    Browser,
}

pub struct EditorState {
    document: Document,
    selected_component: Option<NodeId>,
    view_mode: ViewMode,
    html: String,
    version: u64,
    options: CompileOptions,
}

impl EditorState {
    pub fn new(document: Document, options: CompileOptions) -> Self {
        let html = compile_to_html(&document, &options);
        Self {
            document,
            selected_component: None,
            view_mode: ViewMode::default(),
            html,
            version: 0,
            options,
        }
    }

    /// Open the starter template, with its first component selected
    pub fn starter(name: &str, options: CompileOptions) -> Self {
        let mut state = Self::new(Document::starter(name), options);
        state.selected_component = state
            .document
            .sections
            .iter()
            .flat_map(|s| &s.rows)
            .flat_map(|r| &r.columns)
            .flat_map(|c| &c.components)
            .map(|c| c.id.clone())
            .next();
        state
    }

    /// Apply one mutation
    ///
    /// On success the document is replaced, the version bumped and the HTML
    /// recompiled. On failure nothing changes.
    #[instrument(skip(self, mutation), fields(op = mutation.name(), version = self.version))]
    pub fn apply(&mut self, mutation: &Mutation) -> Result<u64, EditorError> {
        let next = mutation.apply(&self.document).map_err(|err| {
            warn!(error = %err, "Mutation rejected");
            err
        })?;

        self.commit(next, 1);
        Ok(self.version)
    }

    /// Apply mutations in order as a single step
    ///
    /// If any mutation is rejected, none of them take effect.
    #[instrument(skip(self, mutations), fields(count = mutations.len(), version = self.version))]
    pub fn apply_batch(&mut self, mutations: &[Mutation]) -> Result<u64, EditorError> {
        let mut next = self.document.clone();
        for (index, mutation) in mutations.iter().enumerate() {
            next = mutation.apply(&next).map_err(|source| {
                warn!(index, op = mutation.name(), error = %source, "Batch rejected");
                EditorError::Batch { index, source }
            })?;
        }

        if !mutations.is_empty() {
            self.commit(next, mutations.len() as u64);
        }
        Ok(self.version)
    }

    fn commit(&mut self, document: Document, applied: u64) {
        self.document = document;
        self.version += applied;
        self.html = compile_to_html(&self.document, &self.options);

        if let Some(id) = &self.selected_component {
            if !self.document.contains_component(id) {
                debug!(component_id = %id, "Selected component removed, clearing selection");
                self.selected_component = None;
            }
        }
    }

    pub fn select(&mut self, component_id: &str) -> Result<(), EditorError> {
        if !self.document.contains_component(component_id) {
            return Err(MutationError::not_found(NodeKind::Component, component_id).into());
        }
        self.selected_component = Some(component_id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_component = None;
    }

    pub fn selected_component(&self) -> Option<&str> {
        self.selected_component.as_deref()
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Swap in a different template, e.g. after loading from disk
    ///
    /// Counts as a new version; the selection is cleared.
    pub fn replace_document(&mut self, document: Document) {
        self.selected_component = None;
        self.commit(document, 1);
    }

    /// Pretty JSON of the template, parseable with [`Document::from_json`]
    pub fn code_view(&self) -> Result<String, EditorError> {
        Ok(self.document.to_json_pretty()?)
    }

    /// Text shown by the current view mode
    pub fn render_view(&self) -> Result<String, EditorError> {
        match self.view_mode {
            ViewMode::Code => self.code_view(),
            ViewMode::Editor | ViewMode::Browser => Ok(self.html.clone()),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColumnPath;
    use mailgrid_model::ComponentKind;

    fn first_path(doc: &Document) -> ColumnPath {
        let section = &doc.sections[0];
        let row = &section.rows[0];
        ColumnPath::new(&section.id, &row.id, &row.columns[0].id)
    }

    #[test]
    fn test_state_creation() {
        let state = EditorState::starter("welcome", CompileOptions::default());

        assert_eq!(state.version(), 0);
        assert_eq!(state.view_mode(), ViewMode::Editor);
        assert!(state.selected_component().is_some());
        assert!(state.html().contains("Welcome to the Email Editor!"));
    }

    #[test]
    fn test_apply_recompiles_html() {
        let mut state = EditorState::starter("welcome", CompileOptions::default());
        let path = first_path(state.document());

        let version = state
            .apply(&Mutation::AddComponent {
                path,
                kind: ComponentKind::Header2,
            })
            .unwrap();

        assert_eq!(version, 1);
        assert!(state.html().contains("<h2 class=\"component\""));
    }

    #[test]
    fn test_rejected_mutation_changes_nothing() {
        let mut state = EditorState::starter("welcome", CompileOptions::default());
        let before = state.document().clone();
        let html = state.html().to_string();

        let result = state.apply(&Mutation::AddRow {
            section_id: "missing".to_string(),
            sizes: None,
        });

        assert!(matches!(
            result,
            Err(EditorError::Mutation(MutationError::NodeNotFound { kind: NodeKind::Section, .. }))
        ));
        assert_eq!(state.document(), &before);
        assert_eq!(state.html(), html);
        assert_eq!(state.version(), 0);
    }

    #[test]
    fn test_removing_selected_component_clears_selection() {
        let mut state = EditorState::starter("welcome", CompileOptions::default());
        let selected = state.selected_component().unwrap().to_string();
        let path = first_path(state.document());

        state
            .apply(&Mutation::RemoveComponent {
                path,
                component_id: selected,
            })
            .unwrap();

        assert_eq!(state.selected_component(), None);
    }

    #[test]
    fn test_select_unknown_component() {
        let mut state = EditorState::starter("welcome", CompileOptions::default());
        assert!(state.select("nope").is_err());
    }

    #[test]
    fn test_batch_is_all_or_nothing() {
        let mut state = EditorState::starter("welcome", CompileOptions::default());
        let before = state.document().clone();
        let section_id = before.sections[0].id.clone();

        let err = state
            .apply_batch(&[
                Mutation::AddRow {
                    section_id: section_id.clone(),
                    sizes: None,
                },
                Mutation::MoveRowInSection {
                    section_id,
                    from_index: 0,
                    to_index: 9,
                },
            ])
            .unwrap_err();

        assert!(matches!(err, EditorError::Batch { index: 1, .. }));
        assert_eq!(state.document(), &before);
        assert_eq!(state.version(), 0);
    }

    #[test]
    fn test_render_view_follows_mode() {
        let mut state = EditorState::starter("welcome", CompileOptions::default());

        assert!(state.render_view().unwrap().starts_with("<!DOCTYPE html>"));

        state.set_view_mode(ViewMode::Code);
        let code = state.render_view().unwrap();
        assert_eq!(&Document::from_json(&code).unwrap(), state.document());
    }
}
