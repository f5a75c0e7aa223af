// SPDX-License-Identifier: MPL-2.0
//! Tabs the sidebar navigates between.

/// Feature screens of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Members,
    Coaches,
    Plans,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Members, Tab::Coaches, Tab::Plans];

    /// i18n key of the sidebar label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Members => "tab-members",
            Tab::Coaches => "tab-coaches",
            Tab::Plans => "tab-plans",
        }
    }

    /// Tab selected by a bare key press (`m`, `c`, `p`).
    #[must_use]
    pub fn from_shortcut(key: &str) -> Option<Self> {
        match key {
            "m" | "M" => Some(Tab::Members),
            "c" | "C" => Some(Tab::Coaches),
            "p" | "P" => Some(Tab::Plans),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_map_to_tabs() {
        assert_eq!(Tab::from_shortcut("m"), Some(Tab::Members));
        assert_eq!(Tab::from_shortcut("C"), Some(Tab::Coaches));
        assert_eq!(Tab::from_shortcut("p"), Some(Tab::Plans));
        assert_eq!(Tab::from_shortcut("x"), None);
    }
}
