//! Analytics summary and advertiser rankings

use adintel_client::models::{AnalyticsSummary, Platform, Ranking};
use adintel_client::Message;
use leptos::prelude::*;

use super::badges::ScoreBadge;
use super::{or_empty, HEAD_ROW_STYLE, ROW_STYLE, TABLE_STYLE, TD_STYLE, TH_STYLE};
use crate::api::client;
use crate::context::{use_app_context, AppContext};

const CARD_STYLE: &str =
    "flex: 1; padding: 1rem; border: 1px solid #dee2e6; border-radius: 0.25rem; text-align: center;";

/// Platform label for a `by_platform` key, keeping unknown keys verbatim
fn platform_label(key: &str) -> String {
    Platform::parse(key).map_or_else(|| key.to_string(), |p| p.to_string())
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let ctx = use_app_context();

    let summary = LocalResource::new(move || async move {
        or_empty(ctx, "load analytics summary", client().analytics_summary().await)
    });
    let rankings = LocalResource::new(move || async move {
        or_empty(ctx, "list rankings", client().list_rankings().await)
    });

    view! {
        <section>
            <h2>"Analytics"</h2>
            <Suspense fallback=move || view! { <p>{ctx.text(Message::Loading)}</p> }>
                {move || summary.get().map(summary_cards)}
            </Suspense>
            <h3>"Advertiser Rankings"</h3>
            <Suspense fallback=move || view! { <p>{ctx.text(Message::Loading)}</p> }>
                {move || rankings.get().map(|list| ranking_table(ctx, list))}
            </Suspense>
        </section>
    }
}

fn summary_cards(summary: AnalyticsSummary) -> impl IntoView {
    let cards = [
        ("Ads", summary.total_ads),
        ("Advertisers", summary.total_advertisers),
        ("Analyzed ads", summary.analyzed_ads),
        ("Analyzed LPs", summary.analyzed_landing_pages),
    ];

    view! {
        <div style="display: flex; gap: 1rem; margin-bottom: 1rem;">
            {cards.into_iter().map(|(label, value)| view! {
                <div style=CARD_STYLE>
                    <div style="font-size: 1.5em; font-weight: 600;">{value}</div>
                    <div>{label}</div>
                </div>
            }).collect_view()}
        </div>
        <table style=TABLE_STYLE>
            <thead>
                <tr style=HEAD_ROW_STYLE>
                    <th style=TH_STYLE>"Platform"</th>
                    <th style=TH_STYLE>"Ads"</th>
                </tr>
            </thead>
            <tbody>
                {summary.by_platform.into_iter().map(|(key, count)| view! {
                    <tr style=ROW_STYLE>
                        <td style=TD_STYLE>{platform_label(&key)}</td>
                        <td style=TD_STYLE>{count}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

fn ranking_table(ctx: AppContext, list: Vec<Ranking>) -> AnyView {
    if list.is_empty() {
        return view! { <p>{ctx.text(Message::NoData)}</p> }.into_any();
    }

    view! {
        <table style=TABLE_STYLE>
            <thead>
                <tr style=HEAD_ROW_STYLE>
                    <th style=TH_STYLE>"#"</th>
                    <th style=TH_STYLE>"Advertiser"</th>
                    <th style=TH_STYLE>"Ads"</th>
                    <th style=TH_STYLE>"Score"</th>
                </tr>
            </thead>
            <tbody>
                {list.into_iter().map(|r| view! {
                    <tr style=ROW_STYLE>
                        <td style=TD_STYLE>{r.rank}</td>
                        <td style=TD_STYLE>{r.advertiser}</td>
                        <td style=TD_STYLE>{r.ad_count}</td>
                        <td style=TD_STYLE><ScoreBadge score=r.score /></td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_platform_keys_get_display_names() {
        assert_eq!(platform_label("youtube"), "YouTube");
        assert_eq!(platform_label("line"), "LINE");
    }

    #[test]
    fn unknown_keys_are_kept() {
        assert_eq!(platform_label("pinterest"), "pinterest");
    }
}
