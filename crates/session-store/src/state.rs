//! Application state shape.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use companion_core::{Category, Character, ChatSession, ParseError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Top-level navigation section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Discover,
    Chat,
    Collection,
    Generate,
    Create,
    #[serde(rename = "myai")]
    MyAi,
    Premium,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::Discover,
        Section::Chat,
        Section::Collection,
        Section::Generate,
        Section::Create,
        Section::MyAi,
        Section::Premium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Discover => "discover",
            Self::Chat => "chat",
            Self::Collection => "collection",
            Self::Generate => "generate",
            Self::Create => "create",
            Self::MyAi => "myai",
            Self::Premium => "premium",
        }
    }

    /// Whether the section shows a sign-in prompt instead of content when
    /// nobody is signed in. Navigation itself is never blocked.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Chat | Self::Collection | Self::MyAi)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|section| section.as_str() == wanted)
            .ok_or(ParseError::Section(wanted))
    }
}

/// Which authentication dialog is on screen.
///
/// A single enum makes "sign-in and sign-up both shown" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthPrompt {
    #[default]
    None,
    SignIn,
    SignUp,
}

/// The signed-in user. Exists only while authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub is_premium: bool,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            is_premium: false,
        }
    }
}

/// Everything the store tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    pub user: Option<User>,
    pub auth_prompt: AuthPrompt,
    pub current_section: Section,
    /// Character shown in the chat view. Always has an entry in `chat_sessions`.
    pub active_chat: Option<Character>,
    /// Sessions keyed by character id, in the order they were first opened.
    pub chat_sessions: IndexMap<String, ChatSession>,
    pub favorites: HashSet<String>,
    pub custom_characters: Vec<Character>,
    pub sidebar_open: bool,
    pub active_category: Category,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: None,
            auth_prompt: AuthPrompt::None,
            current_section: Section::Home,
            active_chat: None,
            chat_sessions: IndexMap::new(),
            favorites: HashSet::new(),
            custom_characters: Vec::new(),
            sidebar_open: true,
            active_category: Category::Girls,
        }
    }
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn show_sign_in(&self) -> bool {
        self.auth_prompt == AuthPrompt::SignIn
    }

    pub fn show_sign_up(&self) -> bool {
        self.auth_prompt == AuthPrompt::SignUp
    }

    pub fn session(&self, character_id: &str) -> Option<&ChatSession> {
        self.chat_sessions.get(character_id)
    }

    pub fn is_favorite(&self, character_id: &str) -> bool {
        self.favorites.contains(character_id)
    }

    pub fn custom_character(&self, character_id: &str) -> Option<&Character> {
        self.custom_characters.iter().find(|c| c.id == character_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert!(!state.is_authenticated());
        assert!(!state.show_sign_in());
        assert!(!state.show_sign_up());
        assert_eq!(state.current_section, Section::Home);
        assert!(state.active_chat.is_none());
        assert!(state.chat_sessions.is_empty());
        assert!(state.favorites.is_empty());
        assert!(state.custom_characters.is_empty());
        assert!(state.sidebar_open);
        assert_eq!(state.active_category, Category::Girls);
    }

    #[test]
    fn test_section_round_trip_names() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>().unwrap(), section);
        }
        assert_eq!("MyAI".parse::<Section>().unwrap(), Section::MyAi);
        assert!("settings".parse::<Section>().is_err());
    }

    #[test]
    fn test_section_serde_names() {
        assert_eq!(serde_json::to_string(&Section::MyAi).unwrap(), "\"myai\"");
        assert_eq!(serde_json::to_string(&Section::Collection).unwrap(), "\"collection\"");
    }

    #[test]
    fn test_requires_auth() {
        let gated: Vec<_> = Section::ALL.iter().filter(|s| s.requires_auth()).collect();
        assert_eq!(gated, vec![&Section::Chat, &Section::Collection, &Section::MyAi]);
    }

    #[test]
    fn test_new_user_is_not_premium() {
        let user = User::new("a@b.com");
        assert_eq!(user.email, "a@b.com");
        assert!(!user.is_premium);
    }
}
