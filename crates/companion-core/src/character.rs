//! Character profiles and browse categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Browse category a character is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Girls,
    Guys,
    Anime,
}

impl Category {
    /// All categories, in the order the browse tabs show them.
    pub const ALL: [Category; 3] = [Category::Girls, Category::Anime, Category::Guys];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Girls => "girls",
            Self::Guys => "guys",
            Self::Anime => "anime",
        }
    }

    /// Heading shown above the character grid for this category.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Girls => "AI Girlfriend",
            Self::Guys => "AI Boyfriend",
            Self::Anime => "Anime",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == wanted)
            .ok_or(ParseError::Category(wanted))
    }
}

/// A companion profile, either from the built-in catalog or user-created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique id. A fixed slug for built-ins, `custom-<millis>` for custom entries.
    pub id: String,
    pub name: String,
    /// Image reference (asset path, URL or data URL).
    pub image: String,
    pub category: Category,
    pub description: String,
    pub personality: String,
    /// First message sent when a chat with this character is opened.
    pub greeting: String,
    pub likes: u32,
    #[serde(default)]
    pub is_custom: bool,
}

impl Character {
    /// Case-insensitive match of `query` against name or description.
    ///
    /// An empty query matches every character.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

/// The user-supplied fields of a custom character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDraft {
    pub name: String,
    pub description: String,
    pub personality: String,
    pub greeting: String,
    pub image: String,
    pub category: Category,
}

impl CharacterDraft {
    /// Turn the draft into a custom character with the given id.
    pub fn into_character(self, id: impl Into<String>) -> Character {
        Character {
            id: id.into(),
            name: self.name,
            image: self.image,
            category: self.category,
            description: self.description,
            personality: self.personality,
            greeting: self.greeting,
            likes: 0,
            is_custom: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("girls".parse::<Category>().unwrap(), Category::Girls);
        assert_eq!(" Anime ".parse::<Category>().unwrap(), Category::Anime);
        assert_eq!("GUYS".parse::<Category>().unwrap(), Category::Guys);
        assert_eq!(
            "robots".parse::<Category>().unwrap_err(),
            ParseError::Category("robots".to_string())
        );
    }

    #[test]
    fn test_every_category_parses_from_its_name() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_titles() {
        assert_eq!(Category::Girls.title(), "AI Girlfriend");
        assert_eq!(Category::Guys.title(), "AI Boyfriend");
        assert_eq!(Category::Anime.title(), "Anime");
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Anime).unwrap();
        assert_eq!(json, "\"anime\"");
    }

    #[test]
    fn test_draft_into_character() {
        let draft = CharacterDraft {
            name: "Mira".to_string(),
            description: "Night owl".to_string(),
            personality: "Calm".to_string(),
            greeting: "Still up?".to_string(),
            image: "mira.png".to_string(),
            category: Category::Anime,
        };

        let character = draft.into_character("custom-42");
        assert_eq!(character.id, "custom-42");
        assert_eq!(character.likes, 0);
        assert!(character.is_custom);
        assert_eq!(character.greeting, "Still up?");
        assert_eq!(character.category, Category::Anime);
    }

    #[test]
    fn test_matches_query() {
        let character = CharacterDraft {
            name: "Mira".to_string(),
            description: "A quiet night owl".to_string(),
            ..Default::default()
        }
        .into_character("x");

        assert!(character.matches_query(""));
        assert!(character.matches_query("mIR"));
        assert!(character.matches_query("NIGHT"));
        assert!(!character.matches_query("sunny"));
    }
}
