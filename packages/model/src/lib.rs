//! # Mailgrid Model
//!
//! Typed tree for email templates: sections hold rows, rows hold columns on
//! a 12-unit grid, columns hold content components.
//!
//! ## Example
//!
//! ```rust
//! use mailgrid_model::{Component, ComponentKind, Document, Row};
//!
//! let mut doc = Document::new("newsletter");
//! let mut row = Row::new(&[4, 8], &mut doc.ids).unwrap();
//! let text = Component::new(ComponentKind::Text, &mut doc.ids).unwrap();
//! row.columns[0].components.push(text);
//! assert_eq!(row.used_width(), 12);
//! ```

pub mod ast;
pub mod error;
pub mod id_generator;
pub mod kind;
pub mod layouts;
pub mod settings;
pub mod visitor;

pub use ast::{
    validate_column_size, Column, Component, Document, NodeId, Row, Section, GRID_COLUMNS,
};
pub use error::{ModelError, ModelResult};
pub use id_generator::{get_template_seed, IDGenerator};
pub use kind::ComponentKind;
pub use layouts::{find_preset, LayoutPreset, PRESETS};
pub use settings::{Font, Settings, SettingsPatch, Sides};
pub use visitor::{IdCollector, IdRemapper, TreeStats, Visitor, VisitorMut};
