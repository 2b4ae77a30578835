//! Colored badges for scores, USP categories and platforms

use adintel_client::models::{Platform, UspCategory};
use leptos::prelude::*;

use crate::format::{self, ScoreTier};

const NEUTRAL: (&str, &str) = ("#383d41", "#e2e3e5");

fn badge_style((color, bg): (&str, &str)) -> String {
    format!(
        "display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; \
         font-size: 0.85em; font-weight: 600; color: {}; background-color: {};",
        color, bg
    )
}

/// Green from 70, amber from 40, red below, gray when unscored
#[component]
pub fn ScoreBadge(score: Option<f64>) -> impl IntoView {
    let colors = score.map_or(NEUTRAL, |s| ScoreTier::of(s).colors());
    view! { <span style=badge_style(colors)>{format::score(score)}</span> }
}

#[component]
pub fn UspBadge(category: Option<UspCategory>) -> impl IntoView {
    let colors = match category {
        Some(UspCategory::Price) => ("#0c5460", "#d1ecf1"),
        Some(UspCategory::Quality) => ("#155724", "#d4edda"),
        Some(UspCategory::Speed) => ("#856404", "#fff3cd"),
        Some(UspCategory::Trust) => ("#004085", "#cce5ff"),
        Some(UspCategory::Exclusivity) => ("#721c24", "#f8d7da"),
        Some(UspCategory::Convenience) => ("#1b1e21", "#d6d8d9"),
        Some(UspCategory::Other) | None => NEUTRAL,
    };
    let label = category.map_or_else(|| format::MISSING.to_string(), |c| c.to_string());
    view! { <span style=badge_style(colors)>{label}</span> }
}

#[component]
pub fn PlatformBadge(platform: Platform) -> impl IntoView {
    let colors = match platform {
        Platform::Youtube => ("#ffffff", "#c4302b"),
        Platform::Tiktok => ("#ffffff", "#010101"),
        Platform::Instagram => ("#ffffff", "#c13584"),
        Platform::Facebook => ("#ffffff", "#3b5998"),
        Platform::X => ("#ffffff", "#14171a"),
        Platform::Line => ("#ffffff", "#00b900"),
        Platform::Other => NEUTRAL,
    };
    view! { <span style=badge_style(colors)>{platform.to_string()}</span> }
}
