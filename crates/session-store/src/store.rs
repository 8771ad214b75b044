//! The session store: auth, navigation, chat, collections and UI flags.

use std::sync::Arc;

use companion_core::{
    Catalog, Category, Character, CharacterDraft, ChatSession, IdGenerator, Message, ReplyEngine,
    ReplyRequest, Sender,
};
use mock_companion::{CannedReplies, DelayedReplies};
use tokio::sync::{RwLock, RwLockReadGuard};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::{ReplyTarget, StoreConfig};
use crate::error::StoreError;
use crate::forms::{validate_draft, Credentials};
use crate::listener::{NoOpListener, StoreEvent, StoreListener};
use crate::state::{AppState, AuthPrompt, Section, User};

/// Prompts offered under the chat input.
pub const MESSAGE_SUGGESTIONS: [&str; 3] = [
    "Hey! What's your favorite way to relax after a long day?",
    "Tell me something interesting about yourself!",
    "What are you thinking about right now?",
];

/// Handle to a scheduled companion reply.
///
/// The reply cannot be cancelled. Dropping the handle leaves it running;
/// awaiting [`PendingReply::settled`] waits until it has been delivered
/// or dropped.
#[derive(Debug)]
pub struct PendingReply {
    character_id: String,
    handle: JoinHandle<()>,
}

impl PendingReply {
    /// Character the reply was requested for.
    pub fn character_id(&self) -> &str {
        &self.character_id
    }

    /// Wait for the reply task to finish.
    pub async fn settled(self) {
        if let Err(err) = self.handle.await {
            warn!("Reply task for {} failed: {}", self.character_id, err);
        }
    }
}

struct Inner {
    state: RwLock<AppState>,
    catalog: Catalog,
    engine: Arc<dyn ReplyEngine>,
    listener: Arc<dyn StoreListener>,
    ids: IdGenerator,
    config: StoreConfig,
}

/// Single source of truth for the application's in-memory state.
///
/// Cheap to clone; clones share the same state. Every action runs inside one
/// write-lock critical section, so no caller ever observes a half-applied
/// transition. Nothing is persisted.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// Create a store with canned replies delayed per `config.reply_delay`.
    pub fn new(config: StoreConfig) -> Self {
        Self::builder(config).build()
    }

    /// Start building a store with custom collaborators.
    pub fn builder(config: StoreConfig) -> SessionStoreBuilder {
        SessionStoreBuilder {
            config,
            catalog: None,
            engine: None,
            listener: None,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// The built-in character catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Name of the engine producing companion replies.
    pub fn engine_name(&self) -> &str {
        self.inner.engine.name()
    }

    async fn notify(&self, event: StoreEvent) {
        self.inner.listener.on_event(&event).await;
    }

    // ------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------

    /// Borrow the live state for several reads at once.
    pub async fn read(&self) -> RwLockReadGuard<'_, AppState> {
        self.inner.state.read().await
    }

    /// Copy of the entire state.
    pub async fn snapshot(&self) -> AppState {
        self.inner.state.read().await.clone()
    }

    pub async fn user(&self) -> Option<User> {
        self.read().await.user.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.read().await.is_authenticated()
    }

    pub async fn auth_prompt(&self) -> AuthPrompt {
        self.read().await.auth_prompt
    }

    pub async fn show_sign_in(&self) -> bool {
        self.read().await.show_sign_in()
    }

    pub async fn show_sign_up(&self) -> bool {
        self.read().await.show_sign_up()
    }

    pub async fn current_section(&self) -> Section {
        self.read().await.current_section
    }

    pub async fn active_chat(&self) -> Option<Character> {
        self.read().await.active_chat.clone()
    }

    /// The session for one character, if it was ever opened.
    pub async fn session(&self, character_id: &str) -> Option<ChatSession> {
        self.read().await.session(character_id).cloned()
    }

    /// All sessions in the order they were first opened.
    pub async fn chat_sessions(&self) -> Vec<ChatSession> {
        self.read().await.chat_sessions.values().cloned().collect()
    }

    pub async fn favorites(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.read().await.favorites.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub async fn custom_characters(&self) -> Vec<Character> {
        self.read().await.custom_characters.clone()
    }

    pub async fn sidebar_open(&self) -> bool {
        self.read().await.sidebar_open
    }

    pub async fn active_category(&self) -> Category {
        self.read().await.active_category
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// Sign in. Credentials are not checked against anything.
    pub async fn sign_in(&self, email: &str, _password: &str) {
        {
            let mut state = self.inner.state.write().await;
            apply_sign_in(&mut state, email, AuthPrompt::SignIn);
        }
        info!("Signed in as {}", email);
        self.notify(StoreEvent::SignedIn {
            email: email.to_string(),
        })
        .await;
    }

    /// Sign up. Same effect as [`sign_in`](Self::sign_in) but closes the sign-up prompt.
    pub async fn sign_up(&self, email: &str, _password: &str) {
        {
            let mut state = self.inner.state.write().await;
            apply_sign_in(&mut state, email, AuthPrompt::SignUp);
        }
        info!("Signed up as {}", email);
        self.notify(StoreEvent::SignedIn {
            email: email.to_string(),
        })
        .await;
    }

    /// Sign out. Sessions, favorites and custom characters are kept.
    pub async fn sign_out(&self) {
        {
            let mut state = self.inner.state.write().await;
            state.user = None;
            state.active_chat = None;
        }
        info!("Signed out");
        self.notify(StoreEvent::SignedOut).await;
    }

    /// Show or hide the sign-in prompt. Showing it hides the sign-up prompt.
    pub async fn set_show_sign_in(&self, show: bool) {
        self.set_prompt(AuthPrompt::SignIn, show).await;
    }

    /// Show or hide the sign-up prompt. Showing it hides the sign-in prompt.
    pub async fn set_show_sign_up(&self, show: bool) {
        self.set_prompt(AuthPrompt::SignUp, show).await;
    }

    async fn set_prompt(&self, prompt: AuthPrompt, show: bool) {
        let current = {
            let mut state = self.inner.state.write().await;
            if show {
                state.auth_prompt = prompt;
            } else if state.auth_prompt == prompt {
                state.auth_prompt = AuthPrompt::None;
            }
            state.auth_prompt
        };
        debug!("Auth prompt now {:?}", current);
        self.notify(StoreEvent::AuthPromptChanged(current)).await;
    }

    /// Raise the sign-in prompt. Used by pages gated behind auth.
    pub async fn prompt_sign_in(&self) {
        self.set_show_sign_in(true).await;
    }

    /// Hide whichever auth prompt is showing.
    pub async fn close_auth_prompt(&self) {
        {
            let mut state = self.inner.state.write().await;
            state.auth_prompt = AuthPrompt::None;
        }
        self.notify(StoreEvent::AuthPromptChanged(AuthPrompt::None))
            .await;
    }

    /// Flip between the sign-in and sign-up prompts.
    ///
    /// Opens the sign-up prompt unless it is already showing.
    pub async fn switch_auth_mode(&self) {
        let current = {
            let mut state = self.inner.state.write().await;
            state.auth_prompt = if state.show_sign_up() {
                AuthPrompt::SignIn
            } else {
                AuthPrompt::SignUp
            };
            state.auth_prompt
        };
        debug!("Auth prompt now {:?}", current);
        self.notify(StoreEvent::AuthPromptChanged(current)).await;
    }

    /// Validate the auth form and submit it to whichever prompt is showing.
    ///
    /// Signs up when the sign-up prompt is open, otherwise signs in.
    pub async fn submit_credentials(&self, email: &str, password: &str) -> Result<User, StoreError> {
        let credentials = Credentials::validate(email, password, self.inner.config.min_password_len)?;

        let (user, prompt) = {
            let mut state = self.inner.state.write().await;
            let prompt = if state.show_sign_up() {
                AuthPrompt::SignUp
            } else {
                AuthPrompt::SignIn
            };
            let user = apply_sign_in(&mut state, &credentials.email, prompt);
            (user, prompt)
        };

        info!("Submitted {:?} form for {}", prompt, user.email);
        self.notify(StoreEvent::SignedIn {
            email: user.email.clone(),
        })
        .await;
        Ok(user)
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Switch section. Never guarded; gated pages render their own prompt.
    pub async fn navigate(&self, section: Section) {
        {
            let mut state = self.inner.state.write().await;
            state.current_section = section;
        }
        debug!("Navigated to {}", section);
        self.notify(StoreEvent::Navigated(section)).await;
    }

    // ------------------------------------------------------------------
    // Chat
    // ------------------------------------------------------------------

    /// Open the chat view for a character.
    ///
    /// Signed out: only raises the sign-in prompt. First open: creates the
    /// session seeded with the character's greeting. Later opens keep the
    /// existing history.
    pub async fn open_chat(&self, character: &Character) {
        let created = {
            let mut state = self.inner.state.write().await;
            if !state.is_authenticated() {
                state.auth_prompt = AuthPrompt::SignIn;
                None
            } else {
                let created = !state.chat_sessions.contains_key(&character.id);
                if created {
                    let greeting = Message::ai(self.inner.ids.message_id(), &character.greeting);
                    state.chat_sessions.insert(
                        character.id.clone(),
                        ChatSession::with_greeting(&character.id, greeting),
                    );
                }
                state.active_chat = Some(character.clone());
                state.current_section = Section::Chat;
                Some(created)
            }
        };

        match created {
            None => {
                debug!("Chat with {} needs sign in", character.id);
                self.notify(StoreEvent::AuthPromptChanged(AuthPrompt::SignIn))
                    .await;
            }
            Some(created) => {
                debug!("Opened chat with {} (new session: {})", character.id, created);
                self.notify(StoreEvent::ChatOpened {
                    character_id: character.id.clone(),
                    created,
                })
                .await;
            }
        }
    }

    /// Open a chat by character id, looking in built-ins then custom characters.
    pub async fn open_chat_by_id(&self, character_id: &str) -> Result<(), StoreError> {
        let character = self
            .find_character(character_id)
            .await
            .ok_or_else(|| StoreError::UnknownCharacter(character_id.to_string()))?;
        self.open_chat(&character).await;
        Ok(())
    }

    /// Leave the chat view. History is kept.
    pub async fn close_chat(&self) {
        {
            let mut state = self.inner.state.write().await;
            state.active_chat = None;
        }
        self.notify(StoreEvent::ChatClosed).await;
    }

    /// Send a message to the active character.
    ///
    /// Does nothing and returns `None` when no chat is active. Otherwise the
    /// user message is appended before this returns and a companion reply is
    /// scheduled in the background.
    pub async fn send_message(&self, content: impl Into<String>) -> Option<PendingReply> {
        let content = content.into();
        let character = {
            let mut state = self.inner.state.write().await;
            let character = state.active_chat.clone()?;
            let message = Message::user(self.inner.ids.message_id(), content.clone());
            state
                .chat_sessions
                .entry(character.id.clone())
                .or_insert_with(|| ChatSession::new(&character.id))
                .push(message);
            character
        };

        debug!("User message to {}", character.id);
        self.notify(StoreEvent::MessageAppended {
            character_id: character.id.clone(),
            sender: Sender::User,
        })
        .await;

        let request = ReplyRequest::new(&character.id, &character.name, content);
        let store = self.clone();
        let handle = tokio::spawn(async move { store.deliver_reply(request).await });

        Some(PendingReply {
            character_id: character.id,
            handle,
        })
    }

    /// Trim chat input and send it. Blank input is ignored.
    pub async fn submit_message(&self, input: &str) -> Option<PendingReply> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.send_message(text).await
    }

    async fn deliver_reply(&self, request: ReplyRequest) {
        let text = match self.inner.engine.reply(request.clone()).await {
            Ok(text) => text,
            Err(err) => {
                warn!("Reply engine {} failed: {}", self.inner.engine.name(), err);
                self.notify(StoreEvent::ReplyDropped {
                    character_id: request.character_id,
                    reason: err.to_string(),
                })
                .await;
                return;
            }
        };

        let target = {
            let mut state = self.inner.state.write().await;
            let target = match self.inner.config.reply_target {
                ReplyTarget::Captured => Some(request.character_id.clone()),
                ReplyTarget::ActiveAtDelivery => state.active_chat.as_ref().map(|c| c.id.clone()),
            };
            if let Some(id) = &target {
                let message = Message::ai(self.inner.ids.message_id(), text);
                state
                    .chat_sessions
                    .entry(id.clone())
                    .or_insert_with(|| ChatSession::new(id))
                    .push(message);
            }
            target
        };

        match target {
            Some(character_id) => {
                debug!("Reply delivered to {}", character_id);
                self.notify(StoreEvent::MessageAppended {
                    character_id,
                    sender: Sender::Ai,
                })
                .await;
            }
            None => {
                warn!("Reply for {} dropped: no active chat", request.character_id);
                self.notify(StoreEvent::ReplyDropped {
                    character_id: request.character_id,
                    reason: "no active chat".to_string(),
                })
                .await;
            }
        }
    }

    /// Whether the character's last message is the user's (typing indicator).
    pub async fn is_awaiting_reply(&self, character_id: &str) -> bool {
        self.read()
            .await
            .session(character_id)
            .and_then(|session| session.last())
            .map(|message| message.sender == Sender::User)
            .unwrap_or(false)
    }

    /// Built-in characters for the chat list, filtered by name.
    pub fn chat_contacts(&self, query: &str) -> Vec<Character> {
        let query = query.to_lowercase();
        self.inner
            .catalog
            .all()
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    // ------------------------------------------------------------------
    // Collections
    // ------------------------------------------------------------------

    /// Add or remove a character id from favorites. The id is not checked.
    pub async fn toggle_favorite(&self, character_id: &str) -> bool {
        let favorite = {
            let mut state = self.inner.state.write().await;
            if state.favorites.remove(character_id) {
                false
            } else {
                state.favorites.insert(character_id.to_string());
                true
            }
        };
        self.notify(StoreEvent::FavoriteToggled {
            character_id: character_id.to_string(),
            favorite,
        })
        .await;
        favorite
    }

    pub async fn is_favorite(&self, character_id: &str) -> bool {
        self.read().await.is_favorite(character_id)
    }

    /// Favorited characters that still exist, built-ins first in catalog order.
    ///
    /// Ids left behind by deleted custom characters are skipped.
    pub async fn favorite_characters(&self) -> Vec<Character> {
        let state = self.read().await;
        self.inner
            .catalog
            .all()
            .iter()
            .chain(state.custom_characters.iter())
            .filter(|c| state.favorites.contains(&c.id))
            .cloned()
            .collect()
    }

    /// Look a character up among built-ins and custom characters.
    pub async fn find_character(&self, character_id: &str) -> Option<Character> {
        if let Some(character) = self.inner.catalog.get(character_id) {
            return Some(character.clone());
        }
        self.read().await.custom_character(character_id).cloned()
    }

    // ------------------------------------------------------------------
    // Custom characters
    // ------------------------------------------------------------------

    /// Add a custom character and switch to the "My AI" section.
    ///
    /// The draft is taken as-is; see [`submit_character`](Self::submit_character)
    /// for the validating entry point.
    pub async fn create_character(&self, draft: CharacterDraft) -> Character {
        let character = draft.into_character(self.inner.ids.custom_character_id());
        {
            let mut state = self.inner.state.write().await;
            insert_character(&mut state, character.clone());
        }
        self.character_created(&character).await;
        character
    }

    /// Validate a creation form and create the character.
    ///
    /// Signed out: raises the sign-in prompt and returns `NotAuthenticated`.
    /// The auth check and the insert happen under one lock.
    pub async fn submit_character(&self, draft: CharacterDraft) -> Result<Character, StoreError> {
        let created = {
            let mut state = self.inner.state.write().await;
            if !state.is_authenticated() {
                state.auth_prompt = AuthPrompt::SignIn;
                None
            } else {
                let draft = validate_draft(draft)?;
                let character = draft.into_character(self.inner.ids.custom_character_id());
                insert_character(&mut state, character.clone());
                Some(character)
            }
        };

        match created {
            Some(character) => {
                self.character_created(&character).await;
                Ok(character)
            }
            None => {
                debug!("Character creation needs sign in");
                self.notify(StoreEvent::AuthPromptChanged(AuthPrompt::SignIn))
                    .await;
                Err(StoreError::NotAuthenticated)
            }
        }
    }

    async fn character_created(&self, character: &Character) {
        info!("Created character {} ({})", character.name, character.id);
        self.notify(StoreEvent::CharacterCreated {
            character_id: character.id.clone(),
        })
        .await;
        self.notify(StoreEvent::Navigated(Section::MyAi)).await;
    }

    /// Remove a custom character. Built-ins are never removed.
    ///
    /// Sessions and favorites referring to it are left in place.
    pub async fn delete_character(&self, character_id: &str) -> bool {
        let removed = {
            let mut state = self.inner.state.write().await;
            let before = state.custom_characters.len();
            state.custom_characters.retain(|c| c.id != character_id);
            state.custom_characters.len() != before
        };
        if removed {
            info!("Deleted character {}", character_id);
            self.notify(StoreEvent::CharacterDeleted {
                character_id: character_id.to_string(),
            })
            .await;
        }
        removed
    }

    // ------------------------------------------------------------------
    // UI flags
    // ------------------------------------------------------------------

    pub async fn toggle_sidebar(&self) -> bool {
        let open = {
            let mut state = self.inner.state.write().await;
            state.sidebar_open = !state.sidebar_open;
            state.sidebar_open
        };
        self.notify(StoreEvent::SidebarToggled { open }).await;
        open
    }

    pub async fn set_active_category(&self, category: Category) {
        {
            let mut state = self.inner.state.write().await;
            state.active_category = category;
        }
        self.notify(StoreEvent::CategoryChanged(category)).await;
    }

    /// Built-in characters for the active category, filtered by a search query.
    pub async fn discover(&self, query: &str) -> Vec<Character> {
        let category = self.active_category().await;
        self.inner.catalog.discover(category, query).cloned().collect()
    }

    // ------------------------------------------------------------------
    // Premium
    // ------------------------------------------------------------------

    /// Handle a "Get Premium" click.
    ///
    /// Signed out: raises the sign-up prompt and returns false. No payment is
    /// ever taken.
    pub async fn request_premium(&self) -> bool {
        if self.is_authenticated().await {
            return true;
        }
        self.set_show_sign_up(true).await;
        false
    }
}

/// Install a signed-in user and close `closes` if it is the open prompt.
fn apply_sign_in(state: &mut AppState, email: &str, closes: AuthPrompt) -> User {
    let user = User::new(email);
    state.user = Some(user.clone());
    if state.auth_prompt == closes {
        state.auth_prompt = AuthPrompt::None;
    }
    user
}

fn insert_character(state: &mut AppState, character: Character) {
    state.custom_characters.push(character);
    state.current_section = Section::MyAi;
}

/// Builder for SessionStore.
pub struct SessionStoreBuilder {
    config: StoreConfig,
    catalog: Option<Catalog>,
    engine: Option<Arc<dyn ReplyEngine>>,
    listener: Option<Arc<dyn StoreListener>>,
}

impl SessionStoreBuilder {
    /// Use a custom built-in catalog.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use a custom reply engine. Its own timing is used as-is; the configured
    /// reply delay only applies to the default engine.
    pub fn engine(mut self, engine: impl ReplyEngine + 'static) -> Self {
        self.engine = Some(Arc::new(engine));
        self
    }

    /// Use a custom reply engine, delayed per the configured reply delay.
    pub fn delayed_engine(mut self, engine: impl ReplyEngine + 'static) -> Self {
        let delayed = DelayedReplies::new(engine, self.config.reply_delay);
        self.engine = Some(Arc::new(delayed));
        self
    }

    pub fn listener(mut self, listener: impl StoreListener + 'static) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    pub fn build(self) -> SessionStore {
        let engine: Arc<dyn ReplyEngine> = match self.engine {
            Some(engine) => engine,
            None => Arc::new(DelayedReplies::new(CannedReplies::new(), self.config.reply_delay)),
        };
        let listener: Arc<dyn StoreListener> = match self.listener {
            Some(listener) => listener,
            None => Arc::new(NoOpListener),
        };
        SessionStore {
            inner: Arc::new(Inner {
                state: RwLock::new(AppState::default()),
                catalog: self.catalog.unwrap_or_default(),
                engine,
                listener,
                ids: IdGenerator::new(),
                config: self.config,
            }),
        }
    }
}
