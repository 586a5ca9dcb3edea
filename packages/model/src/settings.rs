use serde::{Deserialize, Serialize};

/// Four-sided box values, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sides {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Sides {
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Typography carried by every component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub size: String,
    pub weight: String,
    pub family: String,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            size: "md".to_string(),
            weight: "normal".to_string(),
            family: "Arial".to_string(),
        }
    }
}

/// Style attribute bag attached to every component
///
/// Fields missing from saved JSON fall back to [`Settings::default`], so
/// consumers never observe an unset value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub padding: Sides,
    pub margin: Sides,
    pub font_size: String,
    pub font_weight: String,
    pub text_align: String,
    pub text_color: String,
    pub background_color: String,
    pub width: String,
    pub height: String,
    /// Border style keyword; `"none"` disables the border
    pub border: String,
    pub border_color: String,
    pub border_width: u32,
    pub border_radius: u32,
    pub link_color: String,
    pub button_color: String,
    pub button_text_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            padding: Sides::uniform(0),
            margin: Sides::uniform(0),
            font_size: "md".to_string(),
            font_weight: "normal".to_string(),
            text_align: "left".to_string(),
            text_color: "#000000".to_string(),
            background_color: "#ffffff".to_string(),
            width: "100%".to_string(),
            height: "auto".to_string(),
            border: "none".to_string(),
            border_color: "#000000".to_string(),
            border_width: 0,
            border_radius: 0,
            link_color: "#0066cc".to_string(),
            button_color: "#0066cc".to_string(),
            button_text_color: "#ffffff".to_string(),
        }
    }
}

impl Settings {
    /// Defaults for a freshly dropped component
    pub fn for_new_component() -> Self {
        Self {
            padding: Sides::uniform(10),
            ..Self::default()
        }
    }

    /// Defaults for the starter template's call-to-action button
    pub fn for_starter_button() -> Self {
        Self {
            padding: Sides::new(10, 20, 10, 20),
            text_align: "center".to_string(),
            text_color: "#ffffff".to_string(),
            background_color: "#0066cc".to_string(),
            width: "auto".to_string(),
            border_color: "#0066cc".to_string(),
            border_radius: 4,
            ..Self::default()
        }
    }

    pub fn has_border(&self) -> bool {
        self.border != "none"
    }

    /// Shallow merge: every field present in `patch` replaces the current
    /// value wholesale (a patched `padding` replaces all four sides).
    pub fn merge(&mut self, patch: &SettingsPatch) {
        fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }

        set(&mut self.padding, &patch.padding);
        set(&mut self.margin, &patch.margin);
        set(&mut self.font_size, &patch.font_size);
        set(&mut self.font_weight, &patch.font_weight);
        set(&mut self.text_align, &patch.text_align);
        set(&mut self.text_color, &patch.text_color);
        set(&mut self.background_color, &patch.background_color);
        set(&mut self.width, &patch.width);
        set(&mut self.height, &patch.height);
        set(&mut self.border, &patch.border);
        set(&mut self.border_color, &patch.border_color);
        set(&mut self.border_width, &patch.border_width);
        set(&mut self.border_radius, &patch.border_radius);
        set(&mut self.link_color, &patch.link_color);
        set(&mut self.button_color, &patch.button_color);
        set(&mut self.button_text_color, &patch.button_text_color);
    }
}

/// Partial settings update produced by the style editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Sides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Sides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<String>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r##"{ "textColor": "#ff0000" }"##).unwrap();

        assert_eq!(settings.text_color, "#ff0000");
        assert_eq!(settings.font_size, "md");
        assert_eq!(settings.button_color, "#0066cc");
        assert_eq!(settings.padding, Sides::uniform(0));
    }

    #[test]
    fn test_partial_sides_fall_back_to_zero() {
        let settings: Settings =
            serde_json::from_str(r#"{ "padding": { "top": 4 } }"#).unwrap();
        assert_eq!(settings.padding, Sides::new(4, 0, 0, 0));
    }

    #[test]
    fn test_merge_is_shallow() {
        let mut settings = Settings::for_new_component();
        let patch = SettingsPatch {
            padding: Some(Sides::new(1, 0, 0, 0)),
            button_color: Some("#112233".to_string()),
            ..Default::default()
        };

        settings.merge(&patch);

        assert_eq!(settings.padding, Sides::new(1, 0, 0, 0));
        assert_eq!(settings.button_color, "#112233");
        assert_eq!(settings.text_align, "left");
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut settings = Settings::for_starter_button();
        let before = settings.clone();
        let patch = SettingsPatch::default();

        assert!(patch.is_empty());
        settings.merge(&patch);
        assert_eq!(settings, before);
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = SettingsPatch {
            text_align: Some("center".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"textAlign":"center"}"#);
    }
}
