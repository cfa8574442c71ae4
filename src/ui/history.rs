//! History and favorites view
//!
//! Search box over the stored copies, tabs for recents/favorites/images,
//! favorite toggles and a two-step clear-all.

use chrono::Local;
use dioxus::prelude::*;

use crate::app::AppState;
use crate::export;
use crate::types::{GeneratedCopy, ImageCombo};
use crate::ui::copy_to_clipboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryTab {
    Recent,
    Favorites,
    Images,
}

pub fn HistoryView() -> Element {
    let state = use_context::<AppState>();
    let mut search = use_signal(String::new);
    let mut tab = use_signal(|| HistoryTab::Recent);
    let mut confirm_clear = use_signal(|| false);
    let mut export_note = use_signal(|| Option::<String>::None);

    let history = state.history.read().clone();
    let term = search.read().clone();

    let copies_count = history.copies.len();
    let images_count = history.images.len();
    let favorites_count =
        history.favorite_copies().count() + history.favorite_images().count();

    let active = *tab.read();
    let content = match active {
        HistoryTab::Recent => {
            let filtered: Vec<GeneratedCopy> = if term.is_empty() {
                history.copies.clone()
            } else {
                history.search_copies(&term).into_iter().cloned().collect()
            };
            render_copy_list(&state, filtered, "No hay copies en el historial")
        }
        HistoryTab::Favorites => {
            let favorites: Vec<GeneratedCopy> = history.favorite_copies().cloned().collect();
            render_copy_list(&state, favorites, "Todavía no marcaste favoritos")
        }
        HistoryTab::Images => {
            let images: Vec<ImageCombo> = history.images.clone();
            render_image_list(&state, images)
        }
    };

    let mut clear_state = state.clone();
    let json_state = state.clone();

    let export_banner = export_note
        .read()
        .as_ref()
        .map(|note| rsx! { div { class: "info-banner", "{note}" } });

    rsx! {
        div { class: "view-header",
            h2 { "Historial y Favoritos" }
            p { class: "muted", "Tus copies e imágenes generados" }
        }

        div { class: "history-toolbar",
            input {
                class: "input input-search",
                placeholder: "Buscar en historial...",
                value: "{term}",
                oninput: move |evt| search.set(evt.value()),
            }
            button {
                class: "btn btn-outline btn-small",
                onclick: move |_| {
                    let copies = json_state.history.read().copies.clone();
                    let now = Local::now();
                    let result = export::export_dir(&json_state.settings.read())
                        .and_then(|dir| export::write_copies_json(&copies, &dir, now));
                    match result {
                        Ok(path) => export_note.set(Some(format!("✓ Exportado a {}", path.display()))),
                        Err(e) => {
                            tracing::error!("JSON export failed: {}", e);
                            export_note.set(Some(format!("✗ No se pudo exportar: {e}")));
                        }
                    }
                },
                "⬇ Exportar JSON"
            }
            button {
                class: if *confirm_clear.read() { "btn btn-danger btn-small" } else { "btn btn-outline btn-small" },
                onclick: move |_| {
                    if *confirm_clear.read() {
                        clear_state.history.write().clear();
                        clear_state.persist_history();
                        confirm_clear.set(false);
                    } else {
                        confirm_clear.set(true);
                    }
                },
                if *confirm_clear.read() {
                    "¿Borrar todo? Esto permitirá que se repitan copies. Click de nuevo"
                } else {
                    "🗑 Borrar historial"
                }
            }
        }

        {export_banner}

        div { class: "history-tabs",
            button {
                class: if active == HistoryTab::Recent { "tab-btn active" } else { "tab-btn" },
                onclick: move |_| tab.set(HistoryTab::Recent),
                "🕘 Recientes ({copies_count})"
            }
            button {
                class: if active == HistoryTab::Favorites { "tab-btn active" } else { "tab-btn" },
                onclick: move |_| tab.set(HistoryTab::Favorites),
                "❤️ Favoritos ({favorites_count})"
            }
            button {
                class: if active == HistoryTab::Images { "tab-btn active" } else { "tab-btn" },
                onclick: move |_| tab.set(HistoryTab::Images),
                "🖼️ Imágenes ({images_count})"
            }
        }

        div { class: "history-list", {content} }
    }
}

fn render_copy_list(state: &AppState, copies: Vec<GeneratedCopy>, empty_message: &str) -> Element {
    if copies.is_empty() {
        return rsx! {
            div { class: "empty-state", "{empty_message}" }
        };
    }

    let rows: Vec<Element> = copies
        .into_iter()
        .map(|copy| {
            let mut favorite_state = state.clone();
            let favorite_id = copy.id.clone();
            let clip_text = copy.full_text.clone();
            let preview = preview_text(&copy.full_text, 140);
            let date = copy.timestamp.format("%d/%m/%Y %H:%M");
            rsx! {
                div { class: "history-row",
                    div { class: "history-row-head",
                        span {
                            class: "tag tag-funnel",
                            style: "background: {copy.funnel.color()}",
                            "{copy.funnel.label()}"
                        }
                        span { class: "muted", "{copy.persona.emoji} {copy.persona.name}" }
                        span { class: "muted", "{date}" }
                        span { class: "muted", "{copy.words} pal" }
                    }
                    p { class: "history-preview", "{preview}" }
                    div { class: "action-row",
                        button {
                            class: "btn btn-ghost btn-small",
                            onclick: move |_| copy_to_clipboard(&clip_text),
                            "Copiar"
                        }
                        button {
                            class: if copy.is_favorite { "icon-btn favorite active" } else { "icon-btn favorite" },
                            onclick: move |_| {
                                favorite_state.history.write().toggle_favorite_copy(&favorite_id);
                                favorite_state.persist_history();
                            },
                            if copy.is_favorite { "❤️" } else { "🤍" }
                        }
                    }
                }
            }
        })
        .collect();

    rsx! {
        for row in rows {
            {row}
        }
    }
}

fn render_image_list(state: &AppState, images: Vec<ImageCombo>) -> Element {
    if images.is_empty() {
        return rsx! {
            div { class: "empty-state", "No hay combos de imagen en el historial" }
        };
    }

    let rows: Vec<Element> = images
        .into_iter()
        .map(|image| {
            let mut favorite_state = state.clone();
            let favorite_id = image.id.clone();
            let clip_text = image.scene_prompt.clone();
            let preview = preview_text(&image.scene_prompt, 140);
            rsx! {
                div { class: "history-row",
                    div { class: "history-row-head",
                        span { class: "tag", "🖼️ {image.combo_code}" }
                        span { class: "muted", "{image.headline}" }
                    }
                    p { class: "history-preview", "{preview}" }
                    div { class: "action-row",
                        button {
                            class: "btn btn-ghost btn-small",
                            onclick: move |_| copy_to_clipboard(&clip_text),
                            "Copiar prompt"
                        }
                        button {
                            class: if image.is_favorite { "icon-btn favorite active" } else { "icon-btn favorite" },
                            onclick: move |_| {
                                favorite_state.history.write().toggle_favorite_image(&favorite_id);
                                favorite_state.persist_history();
                            },
                            if image.is_favorite { "❤️" } else { "🤍" }
                        }
                    }
                }
            }
        })
        .collect();

    rsx! {
        for row in rows {
            {row}
        }
    }
}

fn preview_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}
