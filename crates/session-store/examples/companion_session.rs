//! Scripted walkthrough of a companion session.
//!
//! Signs in, chats with Amelia, favorites a few characters, creates a custom
//! companion and runs the image wizard, logging each step.
//!
//! Run with: cargo run -p session-store --example companion_session
//!
//! Configuration via .env file or environment variables:
//!   COMPANION_REPLY_MIN_DELAY_MS  - Shortest reply delay (default: 1000)
//!   COMPANION_REPLY_MAX_DELAY_MS  - Longest reply delay, exclusive (default: 3000)
//!   COMPANION_REPLY_TARGET        - "captured" or "active" (default: captured)
//!   COMPANION_GENERATION_DELAY_MS - Mock image generation time (default: 2000)
//!   COMPANION_MIN_PASSWORD_LEN    - Minimum password length (default: 6)

use session_store::{
    CharacterDraft, ImageStyle, ImageWizard, LoggingListener, Section, SessionStore, StoreConfig,
    FEATURES, MESSAGE_SUGGESTIONS, PLANS,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("session_store=debug".parse()?)
                .add_directive("mock_companion=info".parse()?),
        )
        .init();

    let config = StoreConfig::from_env()?;
    info!("Reply delay: {:?}, target: {}", config.reply_delay, config.reply_target);

    let store = SessionStore::builder(config)
        .listener(LoggingListener)
        .build();
    info!("Using reply engine: {}", store.engine_name());

    // Gated pages prompt before anything else happens
    store.open_chat_by_id("amelia").await?;
    info!("Auth prompt after opening a chat signed out: {:?}", store.auth_prompt().await);

    if let Err(e) = store.submit_credentials("you@example.com", "short").await {
        warn!("Sign in rejected: {}", e);
    }
    let user = store.submit_credentials("you@example.com", "secret123").await?;
    info!("Signed in as {}", user.email);

    store.open_chat_by_id("amelia").await?;
    for suggestion in MESSAGE_SUGGESTIONS.iter().take(2) {
        if let Some(pending) = store.submit_message(suggestion).await {
            pending.settled().await;
        }
    }

    if let Some(session) = store.session("amelia").await {
        for message in session.messages() {
            info!("[{:?}] {}", message.sender, message.content);
        }
    }

    for id in ["amelia", "hiro", "ken"] {
        store.toggle_favorite(id).await;
    }
    let favorites: Vec<_> = store
        .favorite_characters()
        .await
        .into_iter()
        .map(|c| c.name)
        .collect();
    info!("Favorites: {}", favorites.join(", "));

    let mira = store
        .submit_character(CharacterDraft {
            name: "Mira".to_string(),
            description: "Stargazer who keeps odd hours".to_string(),
            personality: "Calm, curious".to_string(),
            greeting: "Still up? Me too.".to_string(),
            ..Default::default()
        })
        .await?;
    info!("Created {} with image {}", mira.id, mira.image);

    let mut wizard = ImageWizard::new();
    wizard.select_character("sakura");
    wizard.select_style(ImageStyle::Anime);
    wizard.continue_to_options()?;
    let images = wizard.generate(&store).await?;
    info!("Generated {} images", images.len());

    store.navigate(Section::Premium).await;
    for feature in FEATURES.iter() {
        info!("{}: {}", feature.title, feature.description);
    }
    for plan in PLANS.iter() {
        info!("{}: {} (was {})", plan.name, plan.per_month, plan.original_price);
    }

    store.sign_out().await;
    info!(
        "Signed out with {} chat sessions kept",
        store.chat_sessions().await.len()
    );

    Ok(())
}
