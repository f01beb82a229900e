/// The fixed catalog of timeline event categories
use crate::error::UnknownCategory;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Category of a timeline event. Serialized as its upper-case name ("BUG").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Speech,
    Issue,
    Bug,
    Features,
    Wip,
    Zap,
    Tada,
    Ambulance,
    Rocket,
    Checkmark,
    Lock,
    Pencil,
    Rewind,
    Bulb,
    Phone,
    Rubbish,
}

impl Category {
    /// All categories, in dropdown order
    pub const ALL: [Category; 16] = [
        Category::Speech,
        Category::Issue,
        Category::Bug,
        Category::Features,
        Category::Wip,
        Category::Zap,
        Category::Tada,
        Category::Ambulance,
        Category::Rocket,
        Category::Checkmark,
        Category::Lock,
        Category::Pencil,
        Category::Rewind,
        Category::Bulb,
        Category::Phone,
        Category::Rubbish,
    ];

    /// Wire name, also used as the `<option>` value
    pub fn name(self) -> &'static str {
        match self {
            Category::Speech => "SPEECH",
            Category::Issue => "ISSUE",
            Category::Bug => "BUG",
            Category::Features => "FEATURES",
            Category::Wip => "WIP",
            Category::Zap => "ZAP",
            Category::Tada => "TADA",
            Category::Ambulance => "AMBULANCE",
            Category::Rocket => "ROCKET",
            Category::Checkmark => "CHECKMARK",
            Category::Lock => "LOCK",
            Category::Pencil => "PENCIL",
            Category::Rewind => "REWIND",
            Category::Bulb => "BULB",
            Category::Phone => "PHONE",
            Category::Rubbish => "RUBBISH",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Category::Speech => "💬",
            Category::Issue => "🔥",
            Category::Bug => "🐛",
            Category::Features => "✨",
            Category::Wip => "🚧",
            Category::Zap => "⚡️",
            Category::Tada => "🎉",
            Category::Ambulance => "🚨",
            Category::Rocket => "🚀",
            Category::Checkmark => "✅",
            Category::Lock => "🔒️",
            Category::Pencil => "✏️",
            Category::Rewind => "⏪️",
            Category::Bulb => "💡",
            Category::Phone => "📱",
            Category::Rubbish => "🗑️",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Speech => "Chat",
            Category::Issue => "Issue",
            Category::Bug => "Bug",
            Category::Features => "Features",
            Category::Wip => "Work in Progress",
            Category::Zap => "Performance",
            Category::Tada => "Start",
            Category::Ambulance => "Alarm",
            Category::Rocket => "Deployment",
            Category::Checkmark => "Completion",
            Category::Lock => "Security",
            Category::Pencil => "Sketch",
            Category::Rewind => "Revert",
            Category::Bulb => "Idea",
            Category::Phone => "Mobile",
            Category::Rubbish => "Rubbish",
        }
    }

    /// Text shown in the dropdown, e.g. "🐛 Bug"
    pub fn display_text(self) -> String {
        format!("{} {}", self.emoji(), self.label())
    }

    /// `<option>` value for a selection; the placeholder is ""
    pub fn option_value(selected: Option<Category>) -> &'static str {
        selected.map(Category::name).unwrap_or("")
    }

    /// Parse a dropdown value. The empty placeholder and unknown names give `None`.
    pub fn from_option_value(value: &str) -> Option<Category> {
        value.parse().ok()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_sixteen_unique_names() {
        let names: HashSet<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), 16);
    }

    #[test]
    fn test_catalog_order() {
        assert_eq!(Category::ALL[0], Category::Speech);
        assert_eq!(Category::ALL[2], Category::Bug);
        assert_eq!(Category::ALL[15], Category::Rubbish);
    }

    #[test]
    fn test_names_parse_back() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_placeholder_and_unknown_values() {
        assert_eq!(Category::from_option_value(""), None);
        assert_eq!(Category::from_option_value("bug"), None);
        assert_eq!(Category::from_option_value("DEPLOY"), None);
        assert_eq!(Category::from_option_value("WIP"), Some(Category::Wip));
    }

    #[test]
    fn test_option_value() {
        assert_eq!(Category::option_value(None), "");
        assert_eq!(Category::option_value(Some(Category::Checkmark)), "CHECKMARK");
        for category in Category::ALL {
            let value = Category::option_value(Some(category));
            assert_eq!(Category::from_option_value(value), Some(category));
        }
    }

    #[test]
    fn test_unknown_category_error() {
        let err = "DEPLOY".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), r#"Unknown category "DEPLOY""#);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(Category::Bug.display_text(), "🐛 Bug");
        assert_eq!(Category::Wip.display_text(), "🚧 Work in Progress");
    }

    #[test]
    fn test_serde_uses_wire_name() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.name()));
        }
    }
}
