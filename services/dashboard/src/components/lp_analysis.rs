//! Landing-page analysis table and "analyze URL" form

use adintel_client::models::LandingPage;
use adintel_client::Message;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::badges::{ScoreBadge, UspBadge};
use super::{or_empty, HEAD_ROW_STYLE, ROW_STYLE, TABLE_STYLE, TD_STYLE, TH_STYLE};
use crate::api::client;
use crate::context::use_app_context;
use crate::format;

/// Newest analysis first, replacing an earlier entry for the same page
fn merge_analyzed(pages: &mut Vec<LandingPage>, analyzed: LandingPage) {
    pages.retain(|p| p.id != analyzed.id);
    pages.insert(0, analyzed);
}

/// Row identity for `For`: a re-analyzed page gets a fresh key so its row
/// is rebuilt with the new scores
type RowKey = (String, Option<String>, [Option<u64>; 3]);

fn row_key(page: &LandingPage) -> RowKey {
    (
        page.id.clone(),
        page.analyzed_at.clone(),
        [page.quality_score, page.conversion_score, page.trust_score].map(|s| s.map(f64::to_bits)),
    )
}

#[component]
pub fn LpAnalysisPage() -> impl IntoView {
    let ctx = use_app_context();
    let pages = RwSignal::new(Vec::<LandingPage>::new());
    let (url, set_url) = signal(String::new());
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            let loaded = or_empty(ctx, "list landing pages", client().list_landing_pages().await);
            pages.set(loaded);
        });
    });

    let analyze = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let target = url.get();
        set_busy.set(true);
        spawn_local(async move {
            match client().analyze_landing_page(&target).await {
                Ok(page) => {
                    pages.update(|list| merge_analyzed(list, page));
                    set_url.set(String::new());
                }
                Err(err) => ctx.report("analyze landing page", err),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section>
            <h2>"Landing Page Analysis"</h2>
            <form style="display: flex; gap: 0.5rem; margin-bottom: 1rem;" on:submit=analyze>
                <input
                    type="url"
                    placeholder="https://example.com/lp"
                    style="flex: 1;"
                    prop:value=move || url.get()
                    on:input=move |ev| set_url.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Analyzing..." } else { "Analyze URL" }}
                </button>
            </form>
            <Show
                when=move || !pages.read().is_empty()
                fallback=move || view! { <p>{ctx.text(Message::NoData)}</p> }
            >
                <table style=TABLE_STYLE>
                    <thead>
                        <tr style=HEAD_ROW_STYLE>
                            <th style=TH_STYLE>"Page"</th>
                            <th style=TH_STYLE>"USP"</th>
                            <th style=TH_STYLE>"Quality"</th>
                            <th style=TH_STYLE>"Conversion"</th>
                            <th style=TH_STYLE>"Trust"</th>
                            <th style=TH_STYLE>"Overall"</th>
                            <th style=TH_STYLE>"Analyzed"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || pages.get()
                            key=row_key
                            children=move |page| {
                                let overall = page.overall_score();
                                let label = page.title.clone().unwrap_or_else(|| page.url.clone());
                                view! {
                                    <tr style=ROW_STYLE>
                                        <td style=TD_STYLE>
                                            <a href=page.url.clone() target="_blank" rel="noopener">{label}</a>
                                            <br />
                                            <small>{page.usp_summary.clone().unwrap_or_default()}</small>
                                        </td>
                                        <td style=TD_STYLE><UspBadge category=page.usp_category /></td>
                                        <td style=TD_STYLE><ScoreBadge score=page.quality_score /></td>
                                        <td style=TD_STYLE><ScoreBadge score=page.conversion_score /></td>
                                        <td style=TD_STYLE><ScoreBadge score=page.trust_score /></td>
                                        <td style=TD_STYLE><ScoreBadge score=overall /></td>
                                        <td style=TD_STYLE>{format::date(page.analyzed_at.as_deref())}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
