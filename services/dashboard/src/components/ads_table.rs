//! Ads list with platform filter and search

use adintel_client::models::{Ad, Platform, SaveItemRequest, SavedItemType};
use adintel_client::{AdQuery, ListEnvelope, Message, SavedItems};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::badges::PlatformBadge;
use super::{or_empty, HEAD_ROW_STYLE, ROW_STYLE, TABLE_STYLE, TD_STYLE, TH_STYLE};
use crate::api::client;
use crate::context::{use_app_context, AppContext};
use crate::format;

const PER_PAGE: u32 = 20;

/// Query for the current filter state. A blank search means "no search".
fn build_query(platform: Option<Platform>, search: &str, page: u32) -> AdQuery {
    let search = search.trim();
    AdQuery {
        platform,
        search: (!search.is_empty()).then(|| search.to_string()),
        page: Some(page),
        per_page: Some(PER_PAGE),
    }
}

#[component]
pub fn AdsPage() -> impl IntoView {
    let ctx = use_app_context();
    let (platform, set_platform) = signal(None::<Platform>);
    let (draft, set_draft) = signal(String::new());
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1u32);
    let saved = RwSignal::new(SavedItems::default());

    Effect::new(move |_| {
        if !ctx.authenticated.get() {
            return;
        }
        spawn_local(async move {
            let loaded = or_empty(ctx, "list saved items", client().list_saved().await);
            saved.set(SavedItems::from(loaded));
        });
    });

    let ads = LocalResource::new(move || {
        let query = build_query(platform.get(), &search.get(), page.get());
        async move { or_empty(ctx, "list ads", client().list_ads(&query).await) }
    });

    let apply_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_page.set(1);
        set_search.set(draft.get());
    };

    view! {
        <section>
            <h2>"Ads"</h2>
            <form style="display: flex; gap: 0.5rem; margin-bottom: 1rem;" on:submit=apply_search>
                <select on:change=move |ev| {
                    set_page.set(1);
                    set_platform.set(Platform::parse(&event_target_value(&ev)));
                }>
                    <option value="">"All platforms"</option>
                    {Platform::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.as_str()>{p.to_string()}</option> })
                        .collect_view()}
                </select>
                <input
                    type="search"
                    placeholder="Search advertiser or title"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>
            <Suspense fallback=move || view! { <p>{ctx.text(Message::Loading)}</p> }>
                {move || ads.get().map(|envelope| ads_table(ctx, envelope, saved))}
            </Suspense>
            <div style="display: flex; gap: 0.5rem; margin-top: 1rem;">
                <button
                    disabled=move || page.get() <= 1
                    on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span>{move || format!("Page {}", page.get())}</span>
                <button on:click=move |_| set_page.update(|p| *p += 1)>"Next"</button>
            </div>
        </section>
    }
}

fn ads_table(ctx: AppContext, envelope: ListEnvelope<Ad>, saved: RwSignal<SavedItems>) -> AnyView {
    if envelope.is_empty() {
        return view! { <p>{ctx.text(Message::NoData)}</p> }.into_any();
    }

    let shown = envelope.len();
    let summary = match envelope.total {
        Some(total) => format!("Showing {} of {} ads", shown, total),
        None => format!("Showing {} ads", shown),
    };

    view! {
        <p>{summary}</p>
        <table style=TABLE_STYLE>
            <thead>
                <tr style=HEAD_ROW_STYLE>
                    <th style=TH_STYLE>"Platform"</th>
                    <th style=TH_STYLE>"Advertiser"</th>
                    <th style=TH_STYLE>"Title"</th>
                    <th style=TH_STYLE>"Views"</th>
                    <th style=TH_STYLE>"First seen"</th>
                    <th style=TH_STYLE></th>
                </tr>
            </thead>
            <tbody>
                {envelope.into_items().into_iter().map(|ad| ad_row(ctx, ad, saved)).collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

fn ad_row(ctx: AppContext, ad: Ad, saved: RwSignal<SavedItems>) -> impl IntoView {
    let href = format!("/ads/{}", ad.id);
    let title = ad.title.clone().unwrap_or_else(|| format::MISSING.to_string());
    let views = format::count(ad.view_count.or(ad.impressions));
    let first_seen = format::date(ad.first_seen_at.as_deref());
    let ad_id = ad.id.clone();
    let is_saved = {
        let ad_id = ad.id.clone();
        move || saved.read().is_saved(SavedItemType::Ad, &ad_id)
    };
    let save_label = is_saved.clone();

    let save = move |_: leptos::ev::MouseEvent| {
        let request = SaveItemRequest {
            item_type: SavedItemType::Ad,
            item_id: ad_id.clone(),
            note: None,
        };
        spawn_local(async move {
            match client().save_item(&request).await {
                Ok(mut item) => {
                    if item.item_id.is_empty() {
                        item.item_type = request.item_type;
                        item.item_id = request.item_id;
                    }
                    saved.update(|items| {
                        items.insert(item);
                    });
                    ctx.confirm(Message::Saved);
                }
                Err(err) => ctx.report("save ad", err),
            }
        });
    };

    view! {
        <tr style=ROW_STYLE>
            <td style=TD_STYLE><PlatformBadge platform=ad.platform /></td>
            <td style=TD_STYLE>{ad.advertiser}</td>
            <td style=TD_STYLE><A href=href>{title}</A></td>
            <td style=TD_STYLE>{views}</td>
            <td style=TD_STYLE>{first_seen}</td>
            <td style=TD_STYLE>
                <button disabled=is_saved on:click=save>
                    {move || if save_label() { "Saved" } else { "Save" }}
                </button>
            </td>
        </tr>
    }
}
