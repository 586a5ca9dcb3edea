//! Component kinds and their per-kind defaults.
//!
//! Every place that needs to branch on a component's kind (palette titles,
//! default content, HTML rendering) matches on [`ComponentKind`] exhaustively,
//! so adding a kind is a compile error everywhere it still has to be handled.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TABLE_SKELETON: &str =
    "Header 1,Header 2,Header 3\nRow 1 Col 1,Row 1 Col 2,Row 1 Col 3\nRow 2 Col 1,Row 2 Col 2,Row 2 Col 3";
pub const MENU_SKELETON: &str = "Home\nAbout\nServices\nContact";
pub const HTML_SKELETON: &str = "<div>Custom HTML content</div>";

/// Content block kinds a column can hold
///
/// Serialized by wire name (`"Img"`, `"HR"`, `"Html"`, ...) so saved
/// templates keep their shape. Names outside the table deserialize into
/// [`ComponentKind::Other`] instead of failing, which keeps documents
/// lossless; only creating a new component of such a kind is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentKind {
    Text,
    Heading,
    Header1,
    Header2,
    Header3,
    Paragraph,
    OrderedList,
    UnorderedList,
    Image,
    Link,
    Button,
    HorizontalRule,
    Video,
    Table,
    Space,
    Icon,
    HtmlBlock,
    Menu,
    SocialLink,
    SocialIcons,
    Other(String),
}

impl ComponentKind {
    /// All creatable kinds, in palette order
    pub const ALL: [ComponentKind; 20] = [
        ComponentKind::Button,
        ComponentKind::Text,
        ComponentKind::Image,
        ComponentKind::Link,
        ComponentKind::Heading,
        ComponentKind::HorizontalRule,
        ComponentKind::Paragraph,
        ComponentKind::OrderedList,
        ComponentKind::UnorderedList,
        ComponentKind::Header1,
        ComponentKind::Header2,
        ComponentKind::Header3,
        ComponentKind::SocialLink,
        ComponentKind::SocialIcons,
        ComponentKind::Video,
        ComponentKind::Table,
        ComponentKind::Space,
        ComponentKind::Icon,
        ComponentKind::HtmlBlock,
        ComponentKind::Menu,
    ];

    /// Name used in saved templates
    pub fn name(&self) -> &str {
        match self {
            ComponentKind::Text => "Text",
            ComponentKind::Heading => "Heading",
            ComponentKind::Header1 => "Header1",
            ComponentKind::Header2 => "Header2",
            ComponentKind::Header3 => "Header3",
            ComponentKind::Paragraph => "Paragraph",
            ComponentKind::OrderedList => "OrderedList",
            ComponentKind::UnorderedList => "UnorderedList",
            ComponentKind::Image => "Img",
            ComponentKind::Link => "Link",
            ComponentKind::Button => "Button",
            ComponentKind::HorizontalRule => "HR",
            ComponentKind::Video => "Video",
            ComponentKind::Table => "Table",
            ComponentKind::Space => "Space",
            ComponentKind::Icon => "Icon",
            ComponentKind::HtmlBlock => "Html",
            ComponentKind::Menu => "Menu",
            ComponentKind::SocialLink => "SocialLink",
            ComponentKind::SocialIcons => "SocialIcons",
            ComponentKind::Other(name) => name,
        }
    }

    /// Palette hover title
    pub fn title(&self) -> &str {
        match self {
            ComponentKind::Text => "Text Block",
            ComponentKind::Heading => "Heading",
            ComponentKind::Header1 => "Header 1",
            ComponentKind::Header2 => "Header 2",
            ComponentKind::Header3 => "Header 3",
            ComponentKind::Paragraph => "Paragraph",
            ComponentKind::OrderedList => "Ordered List",
            ComponentKind::UnorderedList => "Unordered List",
            ComponentKind::Image => "Image",
            ComponentKind::Link => "Link",
            ComponentKind::Button => "Button",
            ComponentKind::HorizontalRule => "Horizontal Rule",
            ComponentKind::Video => "Video",
            ComponentKind::Table => "Table",
            ComponentKind::Space => "Space",
            ComponentKind::Icon => "Icon",
            ComponentKind::HtmlBlock => "HTML",
            ComponentKind::Menu => "Menu",
            ComponentKind::SocialLink => "Social Link",
            ComponentKind::SocialIcons => "Social Icons",
            ComponentKind::Other(_) => "",
        }
    }

    /// Content a freshly dropped component starts with
    pub fn default_content(&self) -> &'static str {
        match self {
            ComponentKind::Text => "Default Text",
            ComponentKind::Heading => "Default Heading",
            ComponentKind::Paragraph => "Default Paragraph",
            ComponentKind::OrderedList => "1. Item 1\n2. Item 2",
            ComponentKind::UnorderedList => "- Item 1\n- Item 2",
            ComponentKind::Image => "Default Image",
            ComponentKind::Link => "Default Link",
            ComponentKind::Video => "Default Video",
            ComponentKind::Table => TABLE_SKELETON,
            ComponentKind::Icon => "star",
            ComponentKind::HtmlBlock => HTML_SKELETON,
            ComponentKind::Menu => MENU_SKELETON,
            ComponentKind::Header1
            | ComponentKind::Header2
            | ComponentKind::Header3
            | ComponentKind::Button
            | ComponentKind::HorizontalRule
            | ComponentKind::Space
            | ComponentKind::SocialLink
            | ComponentKind::SocialIcons
            | ComponentKind::Other(_) => "",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ComponentKind::Other(_))
    }

    fn lookup(name: &str) -> Option<ComponentKind> {
        let kind = match name {
            "Text" => ComponentKind::Text,
            "Heading" => ComponentKind::Heading,
            "Header1" => ComponentKind::Header1,
            "Header2" => ComponentKind::Header2,
            "Header3" => ComponentKind::Header3,
            "Paragraph" => ComponentKind::Paragraph,
            "OrderedList" => ComponentKind::OrderedList,
            "UnorderedList" => ComponentKind::UnorderedList,
            "Img" => ComponentKind::Image,
            "Link" => ComponentKind::Link,
            "Button" => ComponentKind::Button,
            "HR" => ComponentKind::HorizontalRule,
            "Video" => ComponentKind::Video,
            "Table" => ComponentKind::Table,
            "Space" => ComponentKind::Space,
            "Icon" => ComponentKind::Icon,
            "Html" => ComponentKind::HtmlBlock,
            "Menu" => ComponentKind::Menu,
            "SocialLink" => ComponentKind::SocialLink,
            "SocialIcons" => ComponentKind::SocialIcons,
            _ => return None,
        };
        Some(kind)
    }
}

impl FromStr for ComponentKind {
    type Err = ModelError;

    /// Strict parse: accepts wire names and the long-form aliases
    /// `Image`, `HorizontalRule` and `HtmlBlock`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = match s {
            "Image" => "Img",
            "HorizontalRule" => "HR",
            "HtmlBlock" => "Html",
            other => other,
        };
        Self::lookup(canonical).ok_or_else(|| ModelError::UnsupportedComponentType(s.to_string()))
    }
}

impl From<String> for ComponentKind {
    fn from(name: String) -> Self {
        Self::lookup(&name).unwrap_or(ComponentKind::Other(name))
    }
}

impl From<ComponentKind> for String {
    fn from(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_round_trips_its_name() {
        for kind in ComponentKind::ALL.iter() {
            let parsed: ComponentKind = kind.name().parse().unwrap();
            assert_eq!(&parsed, kind);
            assert!(kind.is_known());
            assert!(!kind.title().is_empty());
        }
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(ComponentKind::Image.name(), "Img");
        assert_eq!(ComponentKind::HorizontalRule.name(), "HR");
        assert_eq!(ComponentKind::HtmlBlock.name(), "Html");

        let json = serde_json::to_string(&ComponentKind::Image).unwrap();
        assert_eq!(json, "\"Img\"");
    }

    #[test]
    fn test_aliases_parse() {
        assert_eq!("Image".parse::<ComponentKind>().unwrap(), ComponentKind::Image);
        assert_eq!(
            "HorizontalRule".parse::<ComponentKind>().unwrap(),
            ComponentKind::HorizontalRule
        );
    }

    #[test]
    fn test_unknown_name_is_rejected_by_parse() {
        let err = "Carousel".parse::<ComponentKind>().unwrap_err();
        assert_eq!(err, ModelError::UnsupportedComponentType("Carousel".to_string()));
    }

    #[test]
    fn test_unknown_name_survives_deserialization() {
        let kind: ComponentKind = serde_json::from_str("\"Carousel\"").unwrap();
        assert_eq!(kind, ComponentKind::Other("Carousel".to_string()));
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"Carousel\"");
    }

    #[test]
    fn test_default_contents() {
        assert_eq!(ComponentKind::Text.default_content(), "Default Text");
        assert_eq!(ComponentKind::Table.default_content().lines().count(), 3);
        assert_eq!(ComponentKind::Menu.default_content().lines().count(), 4);
        // Headers and buttons start empty; the compiler labels empty buttons
        assert_eq!(ComponentKind::Header2.default_content(), "");
        assert_eq!(ComponentKind::Button.default_content(), "");
    }
}
