//! # Template tree
//!
//! ```text
//! Document
//!   └── Section*
//!         └── Row*        (column sizes sum to at most 12)
//!               └── Column*  (size 1..=12)
//!                     └── Component*
//! ```
//!
//! Every level exclusively owns its children. Nodes are built by the
//! constructors below, which mint fresh ids from the document's
//! [`IDGenerator`].

use crate::error::{ModelError, ModelResult};
use crate::id_generator::IDGenerator;
use crate::kind::{ComponentKind, HTML_SKELETON, MENU_SKELETON, TABLE_SKELETON};
use crate::layouts::LayoutPreset;
use crate::settings::{Font, Settings};
use crate::visitor::{IdCollector, IdRemapper, Visitor, VisitorMut};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub type NodeId = String;

/// Width of the row grid
pub const GRID_COLUMNS: u32 = 12;

pub const DEFAULT_ROW_SIZES: [u32; 2] = [6, 6];
pub const PLACEHOLDER_IMAGE_URL: &str = "https://dummyimage.com/100x50/cccccc/000000.png";
pub const DEFAULT_LINK_URL: &str = "https://example.com";
pub const DEFAULT_VIDEO_URL: &str = "https://example.com/video.mp4";
pub const DEFAULT_SPACE_HEIGHT: u32 = 20;

/// An email template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub ids: IDGenerator,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: NodeId,
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: NodeId,
    #[serde(default)]
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: NodeId,
    #[serde(default)]
    pub label: String,
    /// Grid units; saved documents may carry any value and it is preserved
    pub size: u32,
    #[serde(default)]
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// CSV rows, newline separated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
    /// One entry per line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_items: Option<String>,
    #[serde(default)]
    pub font: Font,
    #[serde(default)]
    pub settings: Settings,
}

impl Component {
    /// Create a component with kind-appropriate defaults
    pub fn new(kind: ComponentKind, ids: &mut IDGenerator) -> ModelResult<Self> {
        if !kind.is_known() {
            return Err(ModelError::UnsupportedComponentType(kind.name().to_string()));
        }

        let mut component = Self {
            id: ids.new_id(),
            content: kind.default_content().to_string(),
            image_url: None,
            link_url: None,
            video_url: None,
            table_data: None,
            height: None,
            icon_name: None,
            html_content: None,
            menu_items: None,
            font: Font::default(),
            settings: Settings::for_new_component(),
            kind,
        };

        match component.kind {
            ComponentKind::Image => component.image_url = Some(PLACEHOLDER_IMAGE_URL.to_string()),
            ComponentKind::Link => component.link_url = Some(DEFAULT_LINK_URL.to_string()),
            ComponentKind::Video => component.video_url = Some(DEFAULT_VIDEO_URL.to_string()),
            ComponentKind::Table => component.table_data = Some(TABLE_SKELETON.to_string()),
            ComponentKind::Space => component.height = Some(DEFAULT_SPACE_HEIGHT),
            ComponentKind::Icon => component.icon_name = Some("star".to_string()),
            ComponentKind::HtmlBlock => component.html_content = Some(HTML_SKELETON.to_string()),
            ComponentKind::Menu => component.menu_items = Some(MENU_SKELETON.to_string()),
            _ => {}
        }

        Ok(component)
    }

    /// Same as [`Component::new`] with custom content
    pub fn with_content(
        kind: ComponentKind,
        content: impl Into<String>,
        ids: &mut IDGenerator,
    ) -> ModelResult<Self> {
        let mut component = Self::new(kind, ids)?;
        component.content = content.into();
        Ok(component)
    }
}

impl Column {
    pub fn new(size: u32, label: impl Into<String>, ids: &mut IDGenerator) -> ModelResult<Self> {
        validate_column_size(size)?;
        Ok(Self {
            id: ids.new_id(),
            label: label.into(),
            size,
            components: Vec::new(),
        })
    }

    /// "Column 1", "Column 2", ... for the zero-based `index`
    pub fn default_label(index: usize) -> String {
        format!("Column {}", index + 1)
    }

    pub fn find_component(&self, component_id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == component_id)
    }
}

impl Row {
    /// One column per size, labeled "Column 1", "Column 2", ...
    ///
    /// All sizes are validated before any id is minted.
    pub fn new(column_sizes: &[u32], ids: &mut IDGenerator) -> ModelResult<Self> {
        for size in column_sizes {
            validate_column_size(*size)?;
        }
        Ok(Self::with_sizes(column_sizes, ids))
    }

    /// Sizes must already be validated
    fn with_sizes(column_sizes: &[u32], ids: &mut IDGenerator) -> Self {
        let id = ids.new_id();
        let columns = column_sizes
            .iter()
            .enumerate()
            .map(|(index, size)| Column {
                id: ids.new_id(),
                label: Column::default_label(index),
                size: *size,
                components: Vec::new(),
            })
            .collect();
        Self { id, columns }
    }

    /// Row with the preset's sizes and labels
    pub fn from_preset(preset: &LayoutPreset, ids: &mut IDGenerator) -> ModelResult<Self> {
        let id = ids.new_id();
        let mut columns = Vec::with_capacity(preset.columns.len());
        for (size, label) in preset.columns {
            columns.push(Column::new(*size, *label, ids)?);
        }
        Ok(Self { id, columns })
    }

    pub fn default_layout(ids: &mut IDGenerator) -> Self {
        Self::with_sizes(&DEFAULT_ROW_SIZES, ids)
    }

    /// Sum of column sizes in grid units
    ///
    /// Widened to `u64` since loaded documents may carry any stored size.
    pub fn used_width(&self) -> u64 {
        self.columns.iter().map(|c| u64::from(c.size)).sum()
    }

    /// Deep copy with fresh ids at every level; content and settings are
    /// copied by value.
    pub fn duplicate(&self, ids: &mut IDGenerator) -> Self {
        let mut copy = self.clone();
        IdRemapper::new(ids).visit_row_mut(&mut copy);
        copy
    }

    pub fn find_column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }
}

impl Section {
    /// A section holding one default two-column row
    pub fn new(ids: &mut IDGenerator) -> Self {
        let id = ids.new_id();
        Self {
            id,
            rows: vec![Row::default_layout(ids)],
        }
    }

    pub fn find_row(&self, row_id: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == row_id)
    }
}

impl Document {
    /// Empty template
    pub fn new(name: &str) -> Self {
        Self {
            ids: IDGenerator::new(name),
            sections: Vec::new(),
        }
    }

    /// The template a new editor session opens with: one row holding a
    /// welcome text and a call-to-action button.
    pub fn starter(name: &str) -> Self {
        let mut doc = Self::new(name);
        let ids = &mut doc.ids;

        let section_id = ids.new_id();
        let mut row = Row::default_layout(ids);

        let welcome = Component {
            id: ids.new_id(),
            kind: ComponentKind::Text,
            content: "Welcome to the Email Editor!".to_string(),
            image_url: None,
            link_url: None,
            video_url: None,
            table_data: None,
            height: None,
            icon_name: None,
            html_content: None,
            menu_items: None,
            font: Font::default(),
            settings: Settings::for_new_component(),
        };
        let button = Component {
            id: ids.new_id(),
            kind: ComponentKind::Button,
            content: "Click Me".to_string(),
            settings: Settings::for_starter_button(),
            ..welcome.clone()
        };

        row.columns[0].components.push(welcome);
        row.columns[1].components.push(button);

        doc.sections.push(Section {
            id: section_id,
            rows: vec![row],
        });
        doc
    }

    pub fn find_section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    /// Locate a component anywhere in the tree
    pub fn find_component(&self, component_id: &str) -> Option<&Component> {
        self.sections
            .iter()
            .flat_map(|s| &s.rows)
            .flat_map(|r| &r.columns)
            .flat_map(|c| &c.components)
            .find(|c| c.id == component_id)
    }

    pub fn contains_component(&self, component_id: &str) -> bool {
        self.find_component(component_id).is_some()
    }

    /// Every node id in the tree, sections through components
    pub fn node_ids(&self) -> HashSet<NodeId> {
        let mut collector = IdCollector::default();
        collector.visit_document(self);
        collector.ids
    }

    /// Pretty-printed structural dump, re-parseable with [`Document::from_json`]
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a saved template
    ///
    /// The stored id counter is advanced past every node id minted from the
    /// same seed, so a stale or hand-edited counter never reissues a live id.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut doc: Self = serde_json::from_str(json)?;
        doc.reserve_node_ids();
        Ok(doc)
    }

    fn reserve_node_ids(&mut self) {
        let prefix = format!("{}-", self.ids.seed());
        let highest = self
            .node_ids()
            .iter()
            .filter_map(|id| id.strip_prefix(&prefix))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max();

        if let Some(highest) = highest {
            self.ids.reserve(highest);
        }
    }
}

pub fn validate_column_size(size: u32) -> ModelResult<()> {
    if (1..=GRID_COLUMNS).contains(&size) {
        Ok(())
    } else {
        Err(ModelError::InvalidColumnSize(size))
    }
}
