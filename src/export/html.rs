//! HTML editor sheet
//!
//! A standalone dark-styled page the video editor opens in any browser: one
//! card per copy with the four AIDA scenes, their visual directions and the
//! full script. Print-friendly so it can double as a PDF via the browser.

use chrono::{DateTime, Local};
use std::fmt::Write;

use crate::export::spanish_date;
use crate::types::{FunnelStage, GeneratedCopy};

/// Scene presentation order: css class, emoji, heading, time window.
const SCENE_META: [(&str, &str, &str, &str); 4] = [
    ("atencion", "🎯", "ATENCIÓN", "0-5 seg"),
    ("interes", "🧲", "INTERÉS", "5-15 seg"),
    ("deseo", "🔥", "DESEO", "15-35 seg"),
    ("accion", "🚀", "ACCIÓN", "35-45 seg"),
];

/// Escape text for interpolation into HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_card(copy: &GeneratedCopy, index: usize) -> String {
    let mut scenes = String::new();
    for ((class, emoji, heading, window), (_, text, visual)) in
        SCENE_META.iter().zip(copy.scenes())
    {
        let visual = visual.unwrap_or("Sin sugerencia");
        write!(
            scenes,
            r#"
            <div class="scene">
              <div class="scene-header {class}">{emoji} {heading} <span class="scene-time">({window})</span></div>
              <div class="scene-content">
                <div class="copy-section">
                  <div class="section-label">🎤 COPY:</div>
                  <div class="copy-text">{text}</div>
                </div>
                <div class="visual-section">
                  <div class="section-label">🎬 VISUAL:</div>
                  <div class="visual-text">{visual}</div>
                </div>
              </div>
            </div>"#,
            class = class,
            emoji = emoji,
            heading = heading,
            window = window,
            text = escape_html(text),
            visual = escape_html(visual),
        )
        .expect("writing to String never fails");
    }

    let mof_text = if copy.funnel == FunnelStage::Mof { "#1a1a1a" } else { "white" };
    format!(
        r#"
        <div class="video-card">
          <div class="video-header" style="border-left-color: {color}">
            <div class="video-number">VIDEO {number}</div>
            <div class="video-meta">
              <span class="tag persona">{emoji} {persona}</span>
              <span class="tag funnel" style="background: {color}; color: {mof_text}">{funnel}</span>
              <span class="tag time">~{time}s</span>
              <span class="tag words">{words} palabras</span>
            </div>
          </div>
          <div class="scenes">{scenes}
          </div>
          <div class="full-copy">
            <div class="full-copy-label">📝 COPY COMPLETO:</div>
            <div class="full-copy-text">{full_text}</div>
          </div>
        </div>"#,
        color = copy.funnel.color(),
        number = index + 1,
        emoji = escape_html(&copy.persona.emoji),
        persona = escape_html(&copy.persona.name),
        mof_text = mof_text,
        funnel = copy.funnel.label(),
        time = copy.time_secs,
        words = copy.words,
        scenes = scenes,
        full_text = escape_html(&copy.full_text),
    )
}

/// Render the full editor sheet.
pub fn render_editor_sheet(copies: &[GeneratedCopy], now: DateTime<Local>) -> String {
    let cards: String = copies
        .iter()
        .enumerate()
        .map(|(i, c)| render_card(c, i))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <title>Planilla Editora - RenovaFácil</title>
    <link href="https://fonts.googleapis.com/css2?family=Bebas+Neue&family=Space+Grotesk:wght@400;500;600;700&display=swap" rel="stylesheet">
    <style>
      :root {{ --verde: #3D6B4B; --azul: #2D8BC9; --bg: #0a0f0a; --card: rgba(15, 25, 15, 0.95); --text: #e8e8e8; --muted: #888; --tof: #ff6b35; --mof: #ffd700; --bof: #4ade80; --ai: #a855f7; }}
      * {{ margin: 0; padding: 0; box-sizing: border-box; }}
      body {{ font-family: 'Space Grotesk', sans-serif; background: var(--bg); color: var(--text); padding: 20px; max-width: 900px; margin: 0 auto; }}
      .header {{ text-align: center; padding: 30px; background: linear-gradient(135deg, var(--verde), var(--azul)); border-radius: 16px; margin-bottom: 30px; }}
      .logo {{ font-family: 'Bebas Neue', sans-serif; font-size: 2.5rem; letter-spacing: 3px; }}
      .logo .renova {{ color: #90EE90; }} .logo .facil {{ color: #87CEEB; }}
      .header h1 {{ font-size: 1.2rem; margin-top: 10px; opacity: 0.9; }}
      .video-card {{ background: var(--card); border-radius: 16px; margin-bottom: 30px; overflow: hidden; border: 1px solid rgba(255,255,255,0.1); }}
      .video-header {{ padding: 20px; background: rgba(0,0,0,0.3); border-left: 5px solid; display: flex; align-items: center; gap: 15px; flex-wrap: wrap; }}
      .video-number {{ font-family: 'Bebas Neue', sans-serif; font-size: 1.5rem; letter-spacing: 2px; }}
      .video-meta {{ display: flex; gap: 8px; flex-wrap: wrap; flex: 1; }}
      .tag {{ padding: 6px 12px; border-radius: 20px; font-size: 0.7rem; font-weight: 600; }}
      .tag.persona {{ background: rgba(45,139,201,0.2); color: var(--azul); }}
      .tag.time {{ background: rgba(61,107,75,0.2); color: var(--verde); }}
      .tag.words {{ background: rgba(255,255,255,0.1); color: var(--muted); }}
      .scenes {{ padding: 20px; display: flex; flex-direction: column; gap: 15px; }}
      .scene {{ background: rgba(0,0,0,0.2); border-radius: 10px; overflow: hidden; }}
      .scene-header {{ padding: 12px 15px; font-size: 0.8rem; font-weight: 700; text-transform: uppercase; letter-spacing: 1px; }}
      .scene-header.atencion {{ background: rgba(255,107,53,0.2); color: var(--tof); }}
      .scene-header.interes {{ background: rgba(45,139,201,0.2); color: var(--azul); }}
      .scene-header.deseo {{ background: rgba(255,215,0,0.15); color: var(--mof); }}
      .scene-header.accion {{ background: rgba(74,222,128,0.15); color: var(--bof); }}
      .scene-time {{ font-weight: 400; opacity: 0.7; font-size: 0.7rem; }}
      .scene-content {{ padding: 15px; display: grid; gap: 12px; }}
      .section-label {{ font-size: 0.7rem; font-weight: 600; text-transform: uppercase; letter-spacing: 1px; margin-bottom: 6px; color: var(--muted); }}
      .copy-section .section-label {{ color: var(--verde); }}
      .visual-section .section-label {{ color: var(--ai); }}
      .copy-text {{ font-size: 1rem; line-height: 1.6; color: var(--text); padding: 12px; background: rgba(61,107,75,0.1); border-radius: 8px; border-left: 3px solid var(--verde); }}
      .visual-text {{ font-size: 0.9rem; line-height: 1.5; color: var(--ai); padding: 12px; background: rgba(168,85,247,0.1); border-radius: 8px; border: 1px dashed rgba(168,85,247,0.3); font-style: italic; }}
      .full-copy {{ padding: 20px; background: rgba(0,0,0,0.3); border-top: 1px solid rgba(255,255,255,0.1); }}
      .full-copy-label {{ font-size: 0.75rem; font-weight: 700; color: var(--verde); text-transform: uppercase; letter-spacing: 1px; margin-bottom: 10px; }}
      .full-copy-text {{ font-size: 0.95rem; line-height: 1.7; color: var(--text); padding: 15px; background: rgba(61,107,75,0.1); border-radius: 8px; border: 1px solid rgba(61,107,75,0.3); }}
      .footer {{ text-align: center; padding: 30px; color: var(--muted); font-size: 0.8rem; }}
      @media print {{ body {{ background: white; color: black; }} .video-card {{ break-inside: avoid; border: 1px solid #ccc; }} }}
    </style>
</head>
<body>
    <div class="header">
        <div class="logo"><span class="renova">RENOVA</span><span class="facil">FÁCIL</span></div>
        <h1>📋 Planilla para Editora</h1>
        <div>{date}</div>
        <div style="margin-top: 15px; background: rgba(255,255,255,0.2); padding: 8px 20px; border-radius: 20px; display: inline-block; font-weight: 600;">📹 {count} videos para editar</div>
    </div>
    {cards}
    <div class="footer">
        <div class="logo" style="font-size: 1.3rem; margin-bottom: 8px;"><span class="renova">RENOVA</span><span class="facil">FÁCIL</span></div>
        Generado automáticamente
    </div>
</body>
</html>"#,
        date = spanish_date(now),
        count = copies.len(),
        cards = cards,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::persona_by_id;
    use chrono::{TimeZone, Utc};

    fn sample_copy() -> GeneratedCopy {
        GeneratedCopy {
            id: "c1".into(),
            attention: "Esa pared <fea> & vieja.".into(),
            interest: "Interés.".into(),
            desire: "Deseo.".into(),
            action: "Acción.".into(),
            visual_attention: Some("Close-up".into()),
            visual_interest: None,
            visual_desire: Some("Time-lapse".into()),
            visual_action: None,
            full_text: "Esa pared <fea> & vieja. Interés. Deseo. Acción.".into(),
            words: 8,
            time_secs: 3,
            persona: persona_by_id("anfitriona").unwrap().clone(),
            funnel: FunnelStage::Mof,
            timestamp: Utc::now(),
            is_favorite: false,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c\"'"), "a&lt;b&gt;&amp;&quot;c&quot;&#39;");
    }

    #[test]
    fn test_sheet_contains_every_scene_and_escapes_text() {
        let now = Local.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap();
        let html = render_editor_sheet(&[sample_copy()], now);

        assert!(html.contains("VIDEO 1"));
        assert!(html.contains("ATENCIÓN"));
        assert!(html.contains("INTERÉS"));
        assert!(html.contains("DESEO"));
        assert!(html.contains("ACCIÓN"));
        assert!(html.contains("Esa pared &lt;fea&gt; &amp; vieja."));
        assert!(!html.contains("<fea>"));
        // Missing visuals fall back to the placeholder
        assert!(html.contains("Sin sugerencia"));
        assert!(html.contains("1 videos para editar"));
    }

    #[test]
    fn test_mof_tag_uses_dark_text_on_yellow() {
        let now = Local.with_ymd_and_hms(2026, 8, 7, 10, 0, 0).unwrap();
        let html = render_editor_sheet(&[sample_copy()], now);
        assert!(html.contains("background: #ffd700; color: #1a1a1a"));
    }
}
