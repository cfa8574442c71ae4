//! Plain-text exports
//!
//! The editor guide mirrors the HTML sheet in plain text; the audio script
//! is just the full texts, ready to paste into a TTS tool in one go.

use chrono::{DateTime, Local};
use std::fmt::Write;

use crate::export::spanish_date;
use crate::types::GeneratedCopy;

const SCENE_EMOJI: [&str; 4] = ["🎯", "🧲", "🔥", "🚀"];

/// Render the per-video text guide for the editor.
pub fn render_editor_guide(copies: &[GeneratedCopy], now: DateTime<Local>) -> String {
    let mut out = format!(
        "🎬 LOTE DE COPIES - RENOVAFÁCIL\n\
         📅 Fecha: {date}\n\
         🕐 Hora: {time}\n\
         📹 Total de videos: {count}\n\
         {rule}\n\n",
        date = spanish_date(now),
        time = now.format("%H:%M"),
        count = copies.len(),
        rule = "=".repeat(60),
    );

    for (i, copy) in copies.iter().enumerate() {
        write!(
            out,
            "\n🔷 VIDEO {number} - {funnel}\n\
             👤 Persona: {emoji} {persona}\n\
             ⏱️ Duración: ~{time}s | 📝 {words} palabras\n\
             {rule}\n",
            number = i + 1,
            funnel = copy.funnel.label(),
            emoji = copy.persona.emoji,
            persona = copy.persona.name,
            time = copy.time_secs,
            words = copy.words,
            rule = "-".repeat(50),
        )
        .expect("writing to String never fails");

        for (scene_emoji, (heading, text, visual)) in SCENE_EMOJI.iter().zip(copy.scenes()) {
            write!(
                out,
                "\n{scene_emoji} {heading}:\n{text}\n\n🎬 Visual: {visual}\n",
                visual = visual.unwrap_or("Sin sugerencia"),
            )
            .expect("writing to String never fails");
        }

        write!(
            out,
            "\n📝 COPY COMPLETO:\n{full}\n\n{rule}\n",
            full = copy.full_text,
            rule = "=".repeat(60),
        )
        .expect("writing to String never fails");
    }

    out
}

/// Render the audio-only script: one full text per paragraph.
pub fn render_audio_script(copies: &[GeneratedCopy]) -> String {
    copies
        .iter()
        .map(|c| c.full_text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::persona_by_id;
    use crate::types::FunnelStage;
    use chrono::{TimeZone, Utc};

    fn copy(n: u32) -> GeneratedCopy {
        GeneratedCopy {
            id: format!("c{n}"),
            attention: format!("Atención {n}."),
            interest: "Interés.".into(),
            desire: "Deseo.".into(),
            action: "Acción.".into(),
            visual_attention: Some("Pared".into()),
            visual_interest: None,
            visual_desire: None,
            visual_action: None,
            full_text: format!("Atención {n}. Interés. Deseo. Acción."),
            words: 5,
            time_secs: 2,
            persona: persona_by_id("practica").unwrap().clone(),
            funnel: FunnelStage::Tof,
            timestamp: Utc::now(),
            is_favorite: false,
        }
    }

    #[test]
    fn test_editor_guide_lists_every_video_and_scene() {
        let now = Local.with_ymd_and_hms(2026, 8, 7, 9, 5, 0).unwrap();
        let guide = render_editor_guide(&[copy(1), copy(2)], now);

        assert!(guide.contains("Total de videos: 2"));
        assert!(guide.contains("🔷 VIDEO 1 - TOF"));
        assert!(guide.contains("🔷 VIDEO 2 - TOF"));
        assert!(guide.contains("🎯 ATENCIÓN:"));
        assert!(guide.contains("🚀 ACCIÓN:"));
        assert!(guide.contains("🎬 Visual: Pared"));
        assert!(guide.contains("🎬 Visual: Sin sugerencia"));
        assert!(guide.contains("🕐 Hora: 09:05"));
    }

    #[test]
    fn test_audio_script_is_just_the_scripts() {
        let script = render_audio_script(&[copy(1), copy(2)]);
        assert_eq!(
            script,
            "Atención 1. Interés. Deseo. Acción.\n\nAtención 2. Interés. Deseo. Acción."
        );
        assert!(!script.contains("VIDEO"));
    }

    #[test]
    fn test_empty_selection_renders_empty_script() {
        assert_eq!(render_audio_script(&[]), "");
    }
}
