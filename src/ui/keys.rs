//! API key panel
//!
//! Masked inputs for the Gemini and Google TTS keys, persisted on every
//! edit, plus a live key tester against the Gemini API.

use dioxus::prelude::*;

use crate::app::AppState;
use crate::generation::prompts::VOICE_GUIDE;
use crate::ui::copy_to_clipboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TestStatus {
    Idle,
    Testing,
    Success,
    Failed,
}

pub fn ApiKeyPanel() -> Element {
    let state = use_context::<AppState>();
    let mut show_gemini = use_signal(|| false);
    let mut show_tts = use_signal(|| false);
    let mut show_voice_guide = use_signal(|| false);
    let mut test_status = use_signal(|| TestStatus::Idle);

    let settings = state.settings.read().clone();
    let mut gemini_state = state.clone();
    let mut tts_state = state.clone();
    let test_state = state.clone();

    let test_label = match *test_status.read() {
        TestStatus::Idle => "Probar",
        TestStatus::Testing => "Probando...",
        TestStatus::Success => "✓ Funciona",
        TestStatus::Failed => "✗ Falló",
    };

    rsx! {
        div { class: "key-panel",
            div { class: "key-row",
                label { class: "key-label", "🔑 API Key de Gemini (Generación de Copies)" }
                a {
                    class: "key-link",
                    href: "https://aistudio.google.com/app/apikey",
                    target: "_blank",
                    "Conseguir key ↗"
                }
            }
            div { class: "key-input-row",
                input {
                    class: "key-input",
                    r#type: if *show_gemini.read() { "text" } else { "password" },
                    placeholder: "AIza...",
                    value: "{settings.gemini_api_key}",
                    oninput: move |evt| {
                        gemini_state.settings.write().gemini_api_key = evt.value();
                        gemini_state.persist_settings();
                    },
                }
                button {
                    class: "icon-btn",
                    title: if *show_gemini.read() { "Ocultar" } else { "Mostrar" },
                    onclick: move |_| {
                        let shown = *show_gemini.read();
                        show_gemini.set(!shown);
                    },
                    if *show_gemini.read() { "🙈" } else { "👁️" }
                }
                button {
                    class: "btn btn-small",
                    disabled: *test_status.read() == TestStatus::Testing,
                    onclick: move |_| {
                        let state = test_state.clone();
                        spawn(async move {
                            test_status.set(TestStatus::Testing);
                            let key = state.settings.read().gemini_api_key.clone();
                            match state.gemini.check_key(&key).await {
                                Ok(()) => test_status.set(TestStatus::Success),
                                Err(e) => {
                                    tracing::warn!("Key test failed: {}", e);
                                    test_status.set(TestStatus::Failed);
                                }
                            }
                        });
                    },
                    "{test_label}"
                }
            }

            div { class: "key-row",
                label { class: "key-label", "🔑 API Key de Google TTS (Voiceovers)" }
                a {
                    class: "key-link",
                    href: "https://console.cloud.google.com/apis/credentials",
                    target: "_blank",
                    "Conseguir key ↗"
                }
            }
            div { class: "key-input-row",
                input {
                    class: "key-input",
                    r#type: if *show_tts.read() { "text" } else { "password" },
                    placeholder: "AIza...",
                    value: "{settings.tts_api_key}",
                    oninput: move |evt| {
                        tts_state.settings.write().tts_api_key = evt.value();
                        tts_state.persist_settings();
                    },
                }
                button {
                    class: "icon-btn",
                    title: if *show_tts.read() { "Ocultar" } else { "Mostrar" },
                    onclick: move |_| {
                        let shown = *show_tts.read();
                        show_tts.set(!shown);
                    },
                    if *show_tts.read() { "🙈" } else { "👁️" }
                }
            }

            div { class: "key-row",
                button {
                    class: "btn btn-ghost btn-small",
                    onclick: move |_| {
                        let shown = *show_voice_guide.read();
                        show_voice_guide.set(!shown);
                    },
                    if *show_voice_guide.read() {
                        "▾ Guía de voz para ElevenLabs"
                    } else {
                        "▸ Guía de voz para ElevenLabs"
                    }
                }
            }
            if *show_voice_guide.read() {
                div { class: "voice-guide",
                    pre { "{VOICE_GUIDE}" }
                    button {
                        class: "btn btn-outline btn-small",
                        onclick: move |_| copy_to_clipboard(VOICE_GUIDE),
                        "Copiar guía"
                    }
                }
            }
        }
    }
}
