//! Image-combo view
//!
//! Rolls a randomized scene combo from the variable tables and pairs it
//! with an LLM-generated headline. The composed prompt is ready to paste
//! into an image generator.

use chrono::Local;
use dioxus::prelude::*;

use crate::app::AppState;
use crate::catalog::roll_combo;
use crate::types::ImageCombo;
use crate::ui::copy_to_clipboard;

pub fn ImagesView() -> Element {
    let state = use_context::<AppState>();
    let mut combo = use_signal(|| Option::<ImageCombo>::None);
    let mut is_loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let roll_state = state.clone();
    let on_roll = move |_: MouseEvent| {
        if *is_loading.read() {
            return;
        }
        let mut state = roll_state.clone();
        spawn(async move {
            is_loading.set(true);
            error.set(None);

            let mut rolled = roll_combo();
            let key = state.settings.read().gemini_api_key.clone();
            match state
                .gemini
                .generate_headline(&key, Local::now().date_naive())
                .await
            {
                Ok(headline) => {
                    rolled.headline = headline.text.clone();
                    rolled.headline_context = headline.context.clone();
                    state.history.write().add_headline(headline);
                }
                Err(e) => {
                    // The combo is still usable without a headline
                    tracing::warn!("Headline generation failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }

            state.history.write().add_image(rolled.clone());
            state.persist_history();
            combo.set(Some(rolled));
            is_loading.set(false);
        });
    };

    let error_banner = error
        .read()
        .as_ref()
        .map(|message| rsx! { div { class: "error-banner", "{message}" } });

    let combo_card = combo.read().clone().map(|combo| {
        let prompt = combo.scene_prompt.clone();
        let has_headline = !combo.headline.is_empty();
        let picks: Vec<Element> = combo
            .picks
            .iter()
            .map(|pick| {
                let codes: Vec<String> = pick
                    .variables
                    .iter()
                    .map(|v| format!("{} {}", v.code, v.name))
                    .collect();
                let codes = codes.join(", ");
                let group = pick.group.clone();
                rsx! {
                    div { class: "pick-row",
                        span { class: "pick-group", "{group}" }
                        span { class: "pick-codes", "{codes}" }
                    }
                }
            })
            .collect();

        rsx! {
            div { class: "result",
                div { class: "result-meta",
                    span { class: "tag", "🎛 {combo.combo_code}" }
                }
                if has_headline {
                    div { class: "headline-card",
                        div { class: "headline-text", "“{combo.headline}”" }
                        div { class: "muted", "{combo.headline_context}" }
                    }
                }
                div { class: "pick-list",
                    for pick in picks {
                        {pick}
                    }
                }
                div { class: "full-copy-card",
                    div { class: "full-copy-label", "🖼️ Prompt de escena" }
                    p { "{combo.scene_prompt}" }
                    div { class: "action-row",
                        button {
                            class: "btn btn-outline btn-small",
                            onclick: move |_| copy_to_clipboard(&prompt),
                            "Copiar prompt"
                        }
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "view-header",
            h2 { "Combos de Imagen" }
            p { class: "muted",
                "Una variable de cada grupo (ambiente, luz, ángulo...) + headline con IA"
            }
        }

        button {
            class: "btn btn-primary btn-generate",
            disabled: *is_loading.read(),
            onclick: on_roll,
            if *is_loading.read() {
                span { class: "spinner" }
                "Armando combo..."
            } else {
                "🎲 Armar Combo de Imagen"
            }
        }

        {error_banner}
        {combo_card}
    }
}
