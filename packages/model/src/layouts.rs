/// A named row layout offered by the layout picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPreset {
    pub name: &'static str,
    /// `(size, label)` per column, left to right
    pub columns: &'static [(u32, &'static str)],
}

pub const PRESETS: &[LayoutPreset] = &[
    LayoutPreset {
        name: "1 Column",
        columns: &[(12, "Column 1")],
    },
    LayoutPreset {
        name: "2 Columns",
        columns: &[(6, "Column 1"), (6, "Column 2")],
    },
    LayoutPreset {
        name: "3 Columns",
        columns: &[(4, "Column 1"), (4, "Column 2"), (4, "Column 3")],
    },
    LayoutPreset {
        name: "Left Sidebar",
        columns: &[(4, "Sidebar"), (8, "Content")],
    },
    LayoutPreset {
        name: "Right Sidebar",
        columns: &[(8, "Content"), (4, "Sidebar")],
    },
    LayoutPreset {
        name: "Three Equal",
        columns: &[(4, "Left"), (4, "Center"), (4, "Right")],
    },
    LayoutPreset {
        name: "Wide Center",
        columns: &[(3, "Left"), (6, "Center"), (3, "Right")],
    },
];

/// Look up a preset by name (case-insensitive)
pub fn find_preset(name: &str) -> Option<&'static LayoutPreset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl LayoutPreset {
    pub fn sizes(&self) -> Vec<u32> {
        self.columns.iter().map(|(size, _)| *size).collect()
    }

    /// One-line sketch of the layout, e.g. `│███│██████│███│`
    pub fn preview(&self) -> String {
        let mut out = String::from("│");
        for (size, _) in self.columns {
            out.push_str(&"█".repeat(*size as usize));
            out.push('│');
        }
        out
    }
}
