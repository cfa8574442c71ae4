//! UI components
//!
//! This module contains all user interface components built with Dioxus.

pub mod batch;
pub mod dashboard;
pub mod generator;
pub mod history;
pub mod images;
pub mod keys;

use dioxus::prelude::*;

use crate::app::{AppState, Tab};
use crate::ui::batch::BatchView;
use crate::ui::dashboard::DashboardView;
use crate::ui::generator::CopyGeneratorView;
use crate::ui::history::HistoryView;
use crate::ui::images::ImagesView;
use crate::ui::keys::ApiKeyPanel;

/// Put text on the system clipboard, logging failures.
pub(crate) fn copy_to_clipboard(text: &str) {
    let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string()));
    if let Err(e) = result {
        tracing::error!("Clipboard error: {}", e);
    }
}

/// Application shell: header, key panel, tab strip, active view, footer.
pub fn Layout() -> Element {
    let state = use_context::<AppState>();
    let theme = state.settings.read().theme;
    let active_tab = *state.active_tab.read();

    let mut tab_signal = state.active_tab;
    let mut shortcuts_signal = state.show_shortcuts;
    let mut theme_state = state.clone();

    let panel = match active_tab {
        Tab::Voiceovers => rsx! { CopyGeneratorView {} },
        Tab::Batch => rsx! { BatchView {} },
        Tab::Images => rsx! { ImagesView {} },
        Tab::History => rsx! { HistoryView {} },
        Tab::Dashboard => rsx! { DashboardView {} },
    };

    rsx! {
        style { {include_str!("../../assets/style.css")} }

        div {
            class: "app",
            "data-theme": theme.resolved(),
            tabindex: "0",
            onkeydown: move |evt: KeyboardEvent| {
                let mods = evt.modifiers();
                if mods.contains(Modifiers::CONTROL) || mods.contains(Modifiers::META) {
                    if let Key::Character(c) = evt.key() {
                        match c.as_str() {
                            "1" => tab_signal.set(Tab::Voiceovers),
                            "2" => tab_signal.set(Tab::Batch),
                            "3" => tab_signal.set(Tab::Images),
                            "4" => tab_signal.set(Tab::History),
                            "5" => tab_signal.set(Tab::Dashboard),
                            "k" => shortcuts_signal.set(true),
                            _ => {}
                        }
                    }
                } else if evt.key() == Key::Escape {
                    shortcuts_signal.set(false);
                }
            },

            header { class: "header",
                div { class: "header-brand",
                    div { class: "logo",
                        span { class: "logo-renova", "RENOVA" }
                        span { class: "logo-facil", "FÁCIL" }
                    }
                    div { class: "header-sub",
                        div { class: "header-tagline", "Generador de Contenido con IA" }
                        div { class: "header-badges",
                            span { class: "badge-version", "V6.0 PRO" }
                            span { class: "badge-stack", "Google TTS + Gemini Flash" }
                        }
                    }
                }
                div { class: "header-actions",
                    button {
                        class: "icon-btn",
                        title: "Tema: {theme.label()}",
                        onclick: move |_| {
                            let mut settings = theme_state.settings.write();
                            settings.theme = settings.theme.next();
                            drop(settings);
                            theme_state.persist_settings();
                        },
                        if theme.resolved() == "light" { "☀️" } else { "🌙" }
                    }
                    button {
                        class: "icon-btn",
                        title: "Atajos de teclado (Ctrl+K)",
                        onclick: move |_| shortcuts_signal.set(true),
                        "⌨️"
                    }
                }
            }

            main { class: "main",
                ApiKeyPanel {}

                nav { class: "tab-strip",
                    for tab in Tab::ALL {
                        button {
                            class: if tab == active_tab { "tab-btn active" } else { "tab-btn" },
                            onclick: move |_| tab_signal.set(tab),
                            span { class: "tab-icon", "{tab.icon()}" }
                            span { class: "tab-label", "{tab.label()}" }
                        }
                    }
                }

                section { class: "panel", {panel} }
            }

            footer { class: "footer",
                div { class: "logo logo-small",
                    span { class: "logo-renova", "RENOVA" }
                    span { class: "logo-facil", "FÁCIL" }
                }
                p { "Generador v6.0 Pro — Voiceovers con Google TTS + Gemini Flash" }
                a {
                    href: "https://renovafacil.store",
                    target: "_blank",
                    "renovafacil.store"
                }
            }

            if *state.show_shortcuts.read() {
                div {
                    class: "modal-backdrop",
                    onclick: move |_| shortcuts_signal.set(false),
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        div { class: "modal-header",
                            h3 { "⌨️ Atajos de Teclado" }
                            button {
                                class: "icon-btn",
                                onclick: move |_| shortcuts_signal.set(false),
                                "×"
                            }
                        }
                        div { class: "shortcut-row",
                            span { "Cambiar pestaña" }
                            kbd { "Ctrl + 1-5" }
                        }
                        div { class: "shortcut-row",
                            span { "Mostrar atajos" }
                            kbd { "Ctrl + K" }
                        }
                        div { class: "shortcut-row",
                            span { "Cerrar modal" }
                            kbd { "Esc" }
                        }
                    }
                }
            }
        }
    }
}
