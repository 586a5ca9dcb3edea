//! # Mailgrid Editor
//!
//! Core editing engine for Mailgrid email templates.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document → Section → Row → Column    │
//! │        → Component, ids, settings, presets  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mutations + editor state            │
//! │  - Pure copy-on-write tree operations       │
//! │  - Serializable Mutation requests           │
//! │  - Selection and view mode                  │
//! │  - Coordinate mutate → recompile pipeline   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: Document → HTML              │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Tree is source of truth**: HTML and the code view are derived views
//! 2. **Immutable history**: an operation never modifies the document it is given
//! 3. **All or nothing**: rejected edits leave the state as it was
//!
//! ## Usage
//!
//! ```rust
//! use mailgrid_compiler_html::CompileOptions;
//! use mailgrid_editor::{EditorState, Mutation};
//!
//! let mut state = EditorState::starter("newsletter", CompileOptions::default());
//! let section_id = state.document().sections[0].id.clone();
//!
//! state.apply(&Mutation::AddPresetRow {
//!     section_id,
//!     preset: "Left Sidebar".to_string(),
//! })?;
//!
//! assert_eq!(state.version(), 1);
//! assert!(state.html().contains("flex: 0.6666666666666666;"));
//! # Ok::<(), mailgrid_editor::EditorError>(())
//! ```

mod errors;
mod mutations;
pub mod ops;
mod state;

pub use errors::EditorError;
pub use mutations::{Mutation, MutationError, MutationResult, NodeKind, Target};
pub use ops::ColumnPath;
pub use state::{EditorState, ViewMode};

// Re-export model types for convenience
pub use mailgrid_model::{Component, ComponentKind, Document};
