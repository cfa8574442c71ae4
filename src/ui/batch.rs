//! Batch generator view
//!
//! Count + style controls, one aggregated generation call, result list with
//! per-item clipboard/listen actions, and the three export buttons.

use chrono::{Local, Utc};
use dioxus::prelude::*;
use uuid::Uuid;

use crate::app::AppState;
use crate::catalog::weighted_random_persona;
use crate::export;
use crate::generation::BatchSpec;
use crate::types::{Batch, BatchStyle, FunnelStage, GeneratedCopy};
use crate::ui::copy_to_clipboard;

const MIN_COUNT: u32 = 1;
const MAX_COUNT: u32 = 12;

/// Style selector entries: key, label.
const STYLE_OPTIONS: [(&str, &str); 7] = [
    ("uno-cada-uno", "🎯 1 de cada + random (recomendado)"),
    ("mixto", "🎲 Mixto clásico (TOF/MOF/BOF)"),
    ("tof", "🎯 Solo TOF"),
    ("mof", "🔍 Solo MOF"),
    ("bof", "🔥 Solo BOF"),
    ("metralleta", "⚡ Solo METRALLETA"),
    ("hibrido", "💫 Solo HÍBRIDO"),
];

pub fn BatchView() -> Element {
    let state = use_context::<AppState>();
    let mut count = use_signal(|| 6u32);
    let mut style_key = use_signal(|| "uno-cada-uno".to_string());
    let mut results = use_signal(Vec::<GeneratedCopy>::new);
    let mut is_generating = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut export_note = use_signal(|| Option::<String>::None);
    let mut copied_index = use_signal(|| Option::<usize>::None);

    let generate_state = state.clone();
    let on_generate = move |_: MouseEvent| {
        if *is_generating.read() {
            return;
        }
        let mut state = generate_state.clone();
        let style = BatchStyle::from_key(&style_key.read()).unwrap_or(BatchStyle::Assorted);
        let n = (*count.read()).clamp(MIN_COUNT, MAX_COUNT) as usize;
        spawn(async move {
            is_generating.set(true);
            error.set(None);
            export_note.set(None);
            results.set(Vec::new());

            let funnels = style.funnel_list(n, random_stage);
            let specs: Vec<BatchSpec> = funnels
                .into_iter()
                .map(|funnel| BatchSpec {
                    persona: weighted_random_persona().clone(),
                    funnel,
                })
                .collect();

            let key = state.settings.read().gemini_api_key.clone();
            match state.gemini.generate_batch(&key, &specs).await {
                Ok(copies) => {
                    let batch = Batch {
                        id: Uuid::new_v4().to_string(),
                        copies: copies.clone(),
                        timestamp: Utc::now(),
                        count: copies.len(),
                        style,
                    };
                    state.history.write().add_batch(batch);
                    state.persist_history();
                    results.set(copies);
                }
                Err(e) => {
                    tracing::error!("Batch generation failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            is_generating.set(false);
        });
    };

    let copies = results.read().clone();
    let has_results = !copies.is_empty();

    let error_banner = error.read().as_ref().map(|message| {
        rsx! {
            div { class: "error-banner",
                p { "⚠️ El lote no se pudo generar: {message}" }
                p { class: "muted",
                    "Probablemente por límite de cuota de Gemini. Intentá de nuevo en unos minutos o con otra API key."
                }
            }
        }
    });

    let export_banner = export_note
        .read()
        .as_ref()
        .map(|note| rsx! { div { class: "info-banner", "{note}" } });

    let export_buttons = has_results.then(|| {
        let audio_state = state.clone();
        let guide_state = state.clone();
        let sheet_state = state.clone();
        let audio_copies = copies.clone();
        let guide_copies = copies.clone();
        let sheet_copies = copies.clone();
        rsx! {
            div { class: "action-row export-row",
                button {
                    class: "btn btn-outline btn-small",
                    onclick: move |_| {
                        run_export(&audio_state, &audio_copies, ExportKind::AudioScript, export_note)
                    },
                    "🎙️ Solo Copies (para audio)"
                }
                button {
                    class: "btn btn-outline btn-small",
                    onclick: move |_| {
                        run_export(&guide_state, &guide_copies, ExportKind::EditorGuide, export_note)
                    },
                    "📄 Guía Completa (TXT)"
                }
                button {
                    class: "btn btn-outline btn-small",
                    onclick: move |_| {
                        run_export(&sheet_state, &sheet_copies, ExportKind::EditorSheet, export_note)
                    },
                    "🎨 Planilla Visual (HTML)"
                }
            }
        }
    });

    let items: Vec<Element> = copies
        .iter()
        .enumerate()
        .map(|(i, copy)| render_batch_item(&state, copy, i, copied_index, error))
        .collect();

    rsx! {
        div { class: "view-header",
            h2 { "Generador de Lotes" }
            p { class: "muted", "Generá múltiples copies de una vez" }
        }

        div { class: "batch-controls",
            div { class: "field",
                label { class: "field-label", "Cantidad" }
                input {
                    class: "input",
                    r#type: "number",
                    min: "{MIN_COUNT}",
                    max: "{MAX_COUNT}",
                    value: "{count}",
                    oninput: move |evt| {
                        let value = evt.value().parse::<u32>().unwrap_or(6);
                        count.set(value.clamp(MIN_COUNT, MAX_COUNT));
                    },
                }
            }
            div { class: "field field-grow",
                label { class: "field-label", "Estilo de Lote" }
                select {
                    class: "input",
                    value: "{style_key}",
                    onchange: move |evt| style_key.set(evt.value()),
                    for (key, label) in STYLE_OPTIONS {
                        option { value: key, selected: *style_key.read() == key, "{label}" }
                    }
                }
            }
        }

        button {
            class: "btn btn-primary btn-generate",
            disabled: *is_generating.read(),
            onclick: on_generate,
            if *is_generating.read() {
                span { class: "spinner" }
                "Generando {count} copies..."
            } else {
                "📦 Generar Lote con IA"
            }
        }

        {error_banner}
        {export_banner}
        {export_buttons}

        for item in items {
            {item}
        }
    }
}

#[derive(Clone, Copy)]
enum ExportKind {
    AudioScript,
    EditorGuide,
    EditorSheet,
}

fn run_export(
    state: &AppState,
    copies: &[GeneratedCopy],
    kind: ExportKind,
    mut note: Signal<Option<String>>,
) {
    let now = Local::now();
    let result = export::export_dir(&state.settings.read()).and_then(|dir| match kind {
        ExportKind::AudioScript => export::write_audio_script(copies, &dir, now),
        ExportKind::EditorGuide => export::write_editor_guide(copies, &dir, now),
        ExportKind::EditorSheet => export::write_editor_sheet(copies, &dir, now),
    });
    match result {
        Ok(path) => note.set(Some(format!("✓ Exportado a {}", path.display()))),
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            note.set(Some(format!("✗ No se pudo exportar: {e}")));
        }
    }
}

fn render_batch_item(
    state: &AppState,
    copy: &GeneratedCopy,
    index: usize,
    mut copied_index: Signal<Option<usize>>,
    mut error: Signal<Option<String>>,
) -> Element {
    let full_text = copy.full_text.clone();
    let listen_text = copy.full_text.clone();
    let listen_state = state.clone();
    let number = index + 1;

    let previews = [
        ("A", "#ff6b35", truncate(&copy.attention, 60)),
        ("I", "#2D8BC9", truncate(&copy.interest, 60)),
        ("D", "#ffd700", truncate(&copy.desire, 60)),
        ("A", "#4ade80", truncate(&copy.action, 60)),
    ];

    rsx! {
        div { class: "batch-item",
            div { class: "batch-item-head",
                span { class: "batch-number", "#{number}" }
                span {
                    class: "tag tag-funnel",
                    style: "background: {copy.funnel.color()}",
                    "{copy.funnel.label()}"
                }
                span { class: "tag", "{copy.persona.emoji} {copy.persona.name}" }
                span { class: "muted", "{copy.words} pal · ~{copy.time_secs}s" }
            }

            div { class: "batch-previews",
                for (letter, color, preview) in previews {
                    div { class: "batch-preview",
                        span { class: "preview-letter", style: "color: {color}", "{letter}:" }
                        " {preview}"
                    }
                }
            }

            div { class: "action-row",
                button {
                    class: "btn btn-ghost btn-small",
                    onclick: move |_| {
                        copy_to_clipboard(&full_text);
                        copied_index.set(Some(index));
                    },
                    if *copied_index.read() == Some(index) { "✓ Copiado" } else { "Copiar" }
                }
                button {
                    class: "btn btn-ghost btn-small",
                    onclick: move |_| {
                        let state = listen_state.clone();
                        let text = listen_text.clone();
                        spawn(async move {
                            let (key, voice) = {
                                let settings = state.settings.read();
                                (settings.tts_api_key.clone(), settings.voice.clone())
                            };
                            match state.tts.synthesize(&key, &text, &voice).await {
                                Ok(bytes) => state.player.play(bytes),
                                Err(e) => {
                                    tracing::error!("Synthesis failed: {}", e);
                                    error.set(Some(e.user_message()));
                                }
                            }
                        });
                    },
                    "🔊 Escuchar"
                }
            }
        }
    }
}

/// Uniform random stage for the extra copies of an assorted batch.
fn random_stage() -> FunnelStage {
    use rand::seq::SliceRandom;
    *FunnelStage::ALL
        .choose(&mut rand::thread_rng())
        .expect("stage list is never empty")
}

/// First `max` characters of a section, with an ellipsis when trimmed.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}
