//! Tracked competitors and their landing pages

use adintel_client::models::{Competitor, LandingPage};
use adintel_client::Message;
use leptos::prelude::*;

use super::badges::{ScoreBadge, UspBadge};
use super::{or_empty, HEAD_ROW_STYLE, ROW_STYLE, TABLE_STYLE, TD_STYLE, TH_STYLE};
use crate::api::client;
use crate::context::{use_app_context, AppContext};
use crate::format;

#[component]
pub fn CompetitorsPage() -> impl IntoView {
    let ctx = use_app_context();
    let selected = RwSignal::new(None::<Competitor>);

    let competitors = LocalResource::new(move || async move {
        or_empty(ctx, "list competitors", client().list_competitors().await)
    });

    let landing_pages = LocalResource::new(move || {
        let id = selected.read().as_ref().map(|c| c.id.clone());
        async move {
            match id {
                Some(id) => or_empty(
                    ctx,
                    "list competitor landing pages",
                    client().competitor_landing_pages(&id).await,
                ),
                None => Vec::new(),
            }
        }
    });

    view! {
        <section>
            <h2>"Competitors"</h2>
            <Suspense fallback=move || view! { <p>{ctx.text(Message::Loading)}</p> }>
                {move || competitors.get().map(|list| competitor_table(ctx, list, selected))}
            </Suspense>
            {move || selected.get().map(|competitor| view! {
                <h3>{format!("Landing pages: {}", competitor.name)}</h3>
                <Suspense fallback=move || view! { <p>{ctx.text(Message::Loading)}</p> }>
                    {move || landing_pages.get().map(|pages| landing_page_list(ctx, pages))}
                </Suspense>
            })}
        </section>
    }
}

fn competitor_table(
    ctx: AppContext,
    list: Vec<Competitor>,
    selected: RwSignal<Option<Competitor>>,
) -> AnyView {
    if list.is_empty() {
        return view! { <p>{ctx.text(Message::NoData)}</p> }.into_any();
    }

    view! {
        <table style=TABLE_STYLE>
            <thead>
                <tr style=HEAD_ROW_STYLE>
                    <th style=TH_STYLE>"Name"</th>
                    <th style=TH_STYLE>"Domain"</th>
                    <th style=TH_STYLE>"Ads"</th>
                    <th style=TH_STYLE>"Landing pages"</th>
                    <th style=TH_STYLE>"Last activity"</th>
                </tr>
            </thead>
            <tbody>
                {list.into_iter().map(|c| {
                    let domain = c.domain.clone().unwrap_or_else(|| format::MISSING.to_string());
                    let last = format::date(c.last_activity_at.as_deref());
                    let (name, ads, pages) = (c.name.clone(), c.ad_count, c.landing_page_count);
                    view! {
                        <tr style=ROW_STYLE>
                            <td style=TD_STYLE>
                                <button on:click=move |_| selected.set(Some(c.clone()))>{name}</button>
                            </td>
                            <td style=TD_STYLE>{domain}</td>
                            <td style=TD_STYLE>{ads}</td>
                            <td style=TD_STYLE>{pages}</td>
                            <td style=TD_STYLE>{last}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

fn landing_page_list(ctx: AppContext, pages: Vec<LandingPage>) -> AnyView {
    if pages.is_empty() {
        return view! { <p>{ctx.text(Message::NoData)}</p> }.into_any();
    }

    view! {
        <ul style="list-style: none; padding: 0;">
            {pages.into_iter().map(|page| {
                let overall = page.overall_score();
                let label = page.title.clone().unwrap_or_else(|| page.url.clone());
                view! {
                    <li style="padding: 0.25rem 0;">
                        <ScoreBadge score=overall /> " " <UspBadge category=page.usp_category /> " "
                        <a href=page.url target="_blank" rel="noopener">{label}</a>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
    .into_any()
}
