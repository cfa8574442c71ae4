//! Single-copy generator view
//!
//! Funnel selector, persona grid, generate button, and the result card with
//! AIDA scenes, clipboard actions, favoriting and voiceover playback.

use dioxus::prelude::*;
use std::time::Duration;

use crate::app::AppState;
use crate::catalog::{all_personas, funnel_config, persona_by_id, weighted_random_persona};
use crate::types::{FunnelStage, GeneratedCopy};
use crate::ui::copy_to_clipboard;

/// Scene accents: heading, time window, color.
const SCENE_META: [(&str, &str, &str); 4] = [
    ("🎯 ATENCIÓN", "0-5 seg", "#ff6b35"),
    ("🧲 INTERÉS", "5-15 seg", "#2D8BC9"),
    ("🔥 DESEO", "15-35 seg", "#ffd700"),
    ("🚀 ACCIÓN", "35-45 seg", "#4ade80"),
];

/// Marker for the "copy everything" clipboard button.
const FULL_SECTION: usize = usize::MAX;

pub fn CopyGeneratorView() -> Element {
    let state = use_context::<AppState>();
    let mut selected_funnel = use_signal(|| FunnelStage::Tof);
    let mut selected_persona = use_signal(|| Option::<String>::None);
    let mut result = use_signal(|| Option::<GeneratedCopy>::None);
    let mut is_loading = use_signal(|| false);
    let mut is_synthesizing = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut copied_section = use_signal(|| Option::<usize>::None);
    let mut audio_clip = use_signal(|| Option::<Vec<u8>>::None);

    let funnel = *selected_funnel.read();
    let cfg = funnel_config(funnel);

    let generate_state = state.clone();
    let on_generate = move |_: MouseEvent| {
        if *is_loading.read() {
            return;
        }
        let mut state = generate_state.clone();
        let persona = selected_persona
            .read()
            .as_deref()
            .and_then(persona_by_id)
            .unwrap_or_else(weighted_random_persona)
            .clone();
        spawn(async move {
            is_loading.set(true);
            error.set(None);
            let key = state.settings.read().gemini_api_key.clone();
            match state.gemini.generate_copy(&key, &persona, funnel).await {
                Ok(copy) => {
                    // Same script as an earlier one counts toward the
                    // duplicates stat the dashboard reports.
                    let repeated = state
                        .history
                        .read()
                        .copies
                        .iter()
                        .any(|c| c.full_text == copy.full_text);
                    let mut history = state.history.write();
                    if repeated {
                        history.increment_duplicates_avoided();
                    }
                    history.add_copy(copy.clone());
                    drop(history);
                    state.persist_history();
                    audio_clip.set(None);
                    result.set(Some(copy));
                }
                Err(e) => {
                    tracing::error!("Copy generation failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            is_loading.set(false);
        });
    };
    let regenerate = on_generate.clone();

    let mark_copied = move |section: usize| {
        copied_section.set(Some(section));
        spawn(async move {
            tokio::time::sleep(Duration::from_secs(2)).await;
            if *copied_section.read() == Some(section) {
                copied_section.set(None);
            }
        });
    };

    let error_banner = error
        .read()
        .as_ref()
        .map(|message| rsx! { div { class: "error-banner", "{message}" } });

    let result_card = result.read().clone().map(|copy| {
        render_result(
            &state,
            copy,
            mark_copied.clone(),
            copied_section,
            is_synthesizing,
            audio_clip,
            error,
            regenerate.clone(),
        )
    });

    rsx! {
        div { class: "view-header",
            h2 { "Generador de Voiceovers" }
            p { class: "muted", "Creá copies únicos con IA para tus videos" }
        }

        // Funnel selector
        div { class: "field",
            label { class: "field-label", "Etapa del Funnel" }
            div { class: "funnel-strip",
                for stage in FunnelStage::ALL {
                    button {
                        class: if stage == funnel { "funnel-btn active" } else { "funnel-btn" },
                        style: "--accent: {stage.color()}",
                        onclick: move |_| selected_funnel.set(stage),
                        "{stage.label()}"
                    }
                }
            }
            p { class: "funnel-desc", "{cfg.name}: {cfg.desc}" }
        }

        // Persona selector
        div { class: "field",
            label { class: "field-label", "Buyer Persona" }
            div { class: "persona-grid",
                button {
                    class: if selected_persona.read().is_none() { "persona-card active" } else { "persona-card" },
                    onclick: move |_| selected_persona.set(None),
                    div { class: "persona-emoji", "🎲" }
                    div { class: "persona-name", "Aleatorio" }
                    div { class: "persona-desc", "Ponderado por data" }
                }
                for persona in all_personas() {
                    button {
                        class: if selected_persona.read().as_deref() == Some(persona.id.as_str()) { "persona-card active" } else { "persona-card" },
                        onclick: {
                            let id = persona.id.clone();
                            move |_| selected_persona.set(Some(id.clone()))
                        },
                        div { class: "persona-emoji", "{persona.emoji}" }
                        div { class: "persona-name", "{persona.name}" }
                        div { class: "persona-desc", "{persona.desc}" }
                    }
                }
            }
        }

        button {
            class: "btn btn-primary btn-generate",
            disabled: *is_loading.read(),
            onclick: on_generate,
            if *is_loading.read() {
                span { class: "spinner" }
                "Generando con IA..."
            } else {
                "✨ Generar Copy con IA"
            }
        }

        {error_banner}
        {result_card}
    }
}

#[allow(clippy::too_many_arguments)]
fn render_result(
    state: &AppState,
    copy: GeneratedCopy,
    mark_copied: impl FnMut(usize) + Clone + 'static,
    copied_section: Signal<Option<usize>>,
    mut is_synthesizing: Signal<bool>,
    mut audio_clip: Signal<Option<Vec<u8>>>,
    mut error: Signal<Option<String>>,
    regenerate: impl FnMut(MouseEvent) + 'static,
) -> Element {
    let is_favorite = state
        .history
        .read()
        .copies
        .iter()
        .find(|c| c.id == copy.id)
        .map(|c| c.is_favorite)
        .unwrap_or(copy.is_favorite);

    let mut favorite_state = state.clone();
    let favorite_id = copy.id.clone();
    let full_text = copy.full_text.clone();
    let synth_text = copy.full_text.clone();
    let synth_state = state.clone();
    let player = state.player.clone();
    let playing = player.is_playing();
    let has_clip = audio_clip.read().is_some();

    let scenes: Vec<Element> = SCENE_META
        .iter()
        .zip(copy.scenes())
        .enumerate()
        .map(|(index, ((heading, window, color), (_, text, visual)))| {
            let visual_note = visual.map(|visual| {
                rsx! {
                    div { class: "visual-note",
                        div { class: "visual-label", "🎬 VISUAL" }
                        p { class: "visual-text", "{visual}" }
                    }
                }
            });
            let mut mark = mark_copied.clone();
            let text = text.to_string();
            let text_for_button = text.clone();
            rsx! {
                div { class: "scene-card",
                    div {
                        class: "scene-head",
                        style: "color: {color}; background: {color}20",
                        span { "{heading}" }
                        span { class: "scene-window", "{window}" }
                    }
                    div { class: "scene-body",
                        p { "{text}" }
                        {visual_note}
                        button {
                            class: "btn btn-ghost btn-small",
                            onclick: move |_| {
                                copy_to_clipboard(&text_for_button);
                                mark(index);
                            },
                            if *copied_section.read() == Some(index) { "✓ Copiado" } else { "Copiar" }
                        }
                    }
                }
            }
        })
        .collect();

    let mut mark_full = mark_copied;

    rsx! {
        div { class: "result",
            div { class: "result-meta",
                span {
                    class: "tag tag-funnel",
                    style: "background: {copy.funnel.color()}",
                    "{copy.funnel.label()}"
                }
                span { class: "tag", "{copy.persona.emoji} {copy.persona.name}" }
                span { class: "tag", "{copy.words} palabras · ~{copy.time_secs}s" }
                button {
                    class: if is_favorite { "icon-btn favorite active" } else { "icon-btn favorite" },
                    title: "Favorito",
                    onclick: move |_| {
                        favorite_state.history.write().toggle_favorite_copy(&favorite_id);
                        favorite_state.persist_history();
                    },
                    if is_favorite { "❤️" } else { "🤍" }
                }
            }

            for scene in scenes {
                {scene}
            }

            div { class: "full-copy-card",
                div { class: "full-copy-label", "📝 Copy Completo para ElevenLabs" }
                p { "{copy.full_text}" }
                div { class: "action-row",
                    button {
                        class: "btn btn-outline btn-small",
                        onclick: move |_| {
                            copy_to_clipboard(&full_text);
                            mark_full(FULL_SECTION);
                        },
                        if *copied_section.read() == Some(FULL_SECTION) { "✓ Copiado" } else { "Copiar Todo" }
                    }
                    button {
                        class: "btn btn-outline btn-small",
                        disabled: *is_synthesizing.read(),
                        onclick: move |_| {
                            if *is_synthesizing.read() {
                                return;
                            }
                            let state = synth_state.clone();
                            let text = synth_text.clone();
                            spawn(async move {
                                is_synthesizing.set(true);
                                error.set(None);
                                let (key, voice) = {
                                    let settings = state.settings.read();
                                    (settings.tts_api_key.clone(), settings.voice.clone())
                                };
                                match state.tts.synthesize(&key, &text, &voice).await {
                                    Ok(bytes) => {
                                        state.player.play(bytes.clone());
                                        audio_clip.set(Some(bytes));
                                    }
                                    Err(e) => {
                                        tracing::error!("Synthesis failed: {}", e);
                                        error.set(Some(e.user_message()));
                                    }
                                }
                                is_synthesizing.set(false);
                            });
                        },
                        if *is_synthesizing.read() {
                            span { class: "spinner spinner-small" }
                            "Generando Audio..."
                        } else {
                            "🔊 Generar Audio"
                        }
                    }
                    if has_clip {
                        button {
                            class: "btn btn-outline btn-small",
                            onclick: move |_| {
                                if player.is_playing() {
                                    player.pause();
                                } else {
                                    player.resume();
                                }
                            },
                            if playing { "⏸ Pausar" } else { "▶ Escuchar" }
                        }
                    }
                    button {
                        class: "btn btn-outline btn-small",
                        onclick: regenerate,
                        "🔄 Generar Otro"
                    }
                }
            }
        }
    }
}
