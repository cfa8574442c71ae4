//! Dashboard view
//!
//! Stat tiles plus two CSS-sized bar charts: 7-day activity and the funnel
//! distribution. No chart crate, the bars are plain divs.

use chrono::Utc;
use dioxus::prelude::*;

use crate::app::AppState;

struct DayBar {
    label: &'static str,
    copies: usize,
    images: usize,
    copies_pct: usize,
    images_pct: usize,
}

struct FunnelBar {
    label: String,
    color: &'static str,
    count: usize,
    pct: usize,
}

pub fn DashboardView() -> Element {
    let state = use_context::<AppState>();
    let history = state.history.read();

    let stats = history.stats(Utc::now());
    let week = history.weekly_activity(Utc::now());
    let distribution = history.funnel_distribution();

    let max_day = week
        .iter()
        .map(|d| d.copies.max(d.images))
        .max()
        .unwrap_or(0)
        .max(1);
    let day_bars: Vec<DayBar> = week
        .into_iter()
        .map(|d| DayBar {
            label: d.label,
            copies: d.copies,
            images: d.images,
            copies_pct: d.copies * 100 / max_day,
            images_pct: d.images * 100 / max_day,
        })
        .collect();

    let max_funnel = distribution.iter().map(|&(_, n)| n).max().unwrap_or(0).max(1);
    let funnel_bars: Vec<FunnelBar> = distribution
        .into_iter()
        .map(|(stage, count)| FunnelBar {
            label: stage.label(),
            color: stage.color(),
            count,
            pct: count * 100 / max_funnel,
        })
        .collect();
    let has_funnel_data = !funnel_bars.is_empty();

    let tiles = [
        ("📝", "Total generado", stats.total_generated.to_string()),
        ("📅", "Copies esta semana", stats.copies_this_week.to_string()),
        ("🖼️", "Imágenes esta semana", stats.images_this_week.to_string()),
        ("🎯", "Funnel más usado", stats.favorite_funnel.label()),
        ("📏", "Palabras promedio", stats.average_words.to_string()),
        ("♻️", "Duplicados evitados", stats.duplicates_avoided.to_string()),
    ];

    rsx! {
        div { class: "view-header",
            h2 { "Dashboard" }
            p { class: "muted", "Estadísticas y métricas de uso" }
        }

        div { class: "stat-grid",
            for (icon, label, value) in tiles {
                div { class: "stat-tile",
                    div { class: "stat-icon", "{icon}" }
                    div { class: "stat-value", "{value}" }
                    div { class: "stat-label", "{label}" }
                }
            }
        }

        div { class: "chart-card",
            h3 { "Actividad últimos 7 días" }
            div { class: "bar-chart",
                for day in day_bars {
                    div { class: "bar-col",
                        div { class: "bar-stack",
                            div {
                                class: "bar bar-copies",
                                style: "height: {day.copies_pct}%",
                                title: "{day.copies} copies",
                            }
                            div {
                                class: "bar bar-images",
                                style: "height: {day.images_pct}%",
                                title: "{day.images} imágenes",
                            }
                        }
                        div { class: "bar-label", "{day.label}" }
                    }
                }
            }
        }

        div { class: "chart-card",
            h3 { "Distribución por funnel" }
            if has_funnel_data {
                div { class: "funnel-chart",
                    for bar in funnel_bars {
                        div { class: "funnel-row",
                            span { class: "funnel-row-label", "{bar.label}" }
                            div { class: "funnel-row-track",
                                div {
                                    class: "funnel-row-bar",
                                    style: "width: {bar.pct}%; background: {bar.color}",
                                }
                            }
                            span { class: "funnel-row-count", "{bar.count}" }
                        }
                    }
                }
            } else {
                div { class: "empty-state", "Generá copies para ver la distribución" }
            }
        }
    }
}
