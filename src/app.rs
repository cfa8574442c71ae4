//! Root Dioxus application component
//!
//! This module contains the main App component and the global state shared
//! across the UI tree.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::generation::GeminiClient;
use crate::speech::{AudioPlayer, TtsClient};
use crate::storage::history::{load_history, save_history, HistoryStore};
use crate::storage::settings::{load_settings, save_settings, AppSettings};
use crate::ui::Layout;

/// Top-level tabs of the studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Voiceovers,
    Batch,
    Images,
    History,
    Dashboard,
}

impl Tab {
    /// Tab order, also the Ctrl+1..5 shortcut order.
    pub const ALL: [Tab; 5] = [
        Tab::Voiceovers,
        Tab::Batch,
        Tab::Images,
        Tab::History,
        Tab::Dashboard,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Voiceovers => "Voiceovers",
            Tab::Batch => "Lotes",
            Tab::Images => "Imágenes",
            Tab::History => "Historial",
            Tab::Dashboard => "Dashboard",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Voiceovers => "🎙️",
            Tab::Batch => "📦",
            Tab::Images => "🖼️",
            Tab::History => "🕘",
            Tab::Dashboard => "📊",
        }
    }
}

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<GeminiClient>,
    pub tts: Arc<TtsClient>,
    pub player: AudioPlayer,
    pub settings: Signal<AppSettings>,
    pub history: Signal<HistoryStore>,
    pub active_tab: Signal<Tab>,
    pub show_shortcuts: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        tracing::info!("AppState initialized");
        Self {
            gemini: Arc::new(GeminiClient::new()),
            tts: Arc::new(TtsClient::new()),
            player: AudioPlayer::new(),
            settings: Signal::new(load_settings()),
            history: Signal::new(load_history()),
            active_tab: Signal::new(Tab::Voiceovers),
            show_shortcuts: Signal::new(false),
        }
    }

    /// Persist the current settings, logging failures.
    pub fn persist_settings(&self) {
        if let Err(e) = save_settings(&self.settings.read()) {
            tracing::error!("Failed to save settings: {}", e);
        }
    }

    /// Persist the current history, logging failures.
    pub fn persist_history(&self) {
        if let Err(e) = save_history(&self.history.read()) {
            tracing::error!("Failed to save history: {}", e);
        }
    }
}

#[component]
pub fn App() -> Element {
    let app_state = AppState::new();
    use_context_provider(|| app_state);

    rsx! {
        Layout {}
    }
}
