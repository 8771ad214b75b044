//! Mock image generation wizard.
//!
//! Walks the user through character -> style -> options -> result. Nothing is
//! actually generated: after a pause the chosen character's portrait is
//! returned three times.

use std::fmt;
use std::str::FromStr;

use companion_core::{Catalog, Category, Character, ParseError};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::debug;

use crate::error::StoreError;
use crate::store::SessionStore;

/// Number of images a generation run produces.
pub const IMAGES_PER_RUN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Character,
    Style,
    Options,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    #[default]
    Realistic,
    Anime,
}

impl ImageStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Realistic => "realistic",
            Self::Anime => "anime",
        }
    }

    /// Portrait shown on the style card.
    pub fn preview<'a>(&self, catalog: &'a Catalog) -> Option<&'a Character> {
        match self {
            Self::Realistic => catalog.featured(Category::Guys),
            Self::Anime => catalog.featured(Category::Anime),
        }
    }
}

impl fmt::Display for ImageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "realistic" => Ok(Self::Realistic),
            "anime" => Ok(Self::Anime),
            other => Err(ParseError::Style(other.to_string())),
        }
    }
}

/// State of one pass through the generation wizard.
#[derive(Debug, Clone, Default)]
pub struct ImageWizard {
    step: WizardStep,
    selected_character: Option<String>,
    style: ImageStyle,
    images: Vec<String>,
}

impl ImageWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn selected_character(&self) -> Option<&str> {
        self.selected_character.as_deref()
    }

    pub fn style(&self) -> ImageStyle {
        self.style
    }

    /// Images from the last generation run.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Characters offered on the first step: built-ins in the active category.
    pub async fn candidates(&self, store: &SessionStore) -> Vec<Character> {
        let category = store.active_category().await;
        store.catalog().by_category(category).cloned().collect()
    }

    /// Pick a character and move on to style selection.
    pub fn select_character(&mut self, character_id: impl Into<String>) {
        self.selected_character = Some(character_id.into());
        self.step = WizardStep::Style;
    }

    pub fn select_style(&mut self, style: ImageStyle) {
        self.style = style;
    }

    /// Move from style selection to the options step.
    pub fn continue_to_options(&mut self) -> Result<(), StoreError> {
        if self.step != WizardStep::Style {
            return Err(StoreError::Wizard(format!(
                "cannot continue to options from {:?}",
                self.step
            )));
        }
        self.step = WizardStep::Options;
        Ok(())
    }

    /// Step back one page. The first page stays put.
    pub fn go_back(&mut self) {
        self.step = match self.step {
            WizardStep::Character | WizardStep::Style => WizardStep::Character,
            WizardStep::Options => WizardStep::Style,
            WizardStep::Result => WizardStep::Options,
        };
    }

    /// Run the mock generator.
    ///
    /// Signed out: raises the sign-in prompt and returns `NotAuthenticated`
    /// without changing the wizard.
    pub async fn generate(&mut self, store: &SessionStore) -> Result<&[String], StoreError> {
        if !store.is_authenticated().await {
            store.prompt_sign_in().await;
            return Err(StoreError::NotAuthenticated);
        }

        let character_id = self
            .selected_character
            .clone()
            .ok_or_else(|| StoreError::Wizard("no character selected".to_string()))?;

        debug!("Generating {} images of {}", self.style, character_id);
        sleep(store.config().generation_delay).await;

        let character = store
            .catalog()
            .get(&character_id)
            .ok_or_else(|| StoreError::UnknownCharacter(character_id.clone()))?;

        self.images = vec![character.image.clone(); IMAGES_PER_RUN];
        self.step = WizardStep::Result;
        Ok(&self.images)
    }
}
