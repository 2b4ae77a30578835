//! Saved items list

use adintel_client::models::{SavedItem, SavedItemType};
use adintel_client::{Message, SavedItems};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::{or_empty, HEAD_ROW_STYLE, ROW_STYLE, TABLE_STYLE, TD_STYLE, TH_STYLE};
use crate::api::client;
use crate::context::use_app_context;
use crate::format;

fn type_label(item_type: SavedItemType) -> &'static str {
    match item_type {
        SavedItemType::Ad => "Ad",
        SavedItemType::LandingPage => "Landing page",
        SavedItemType::Creative => "Creative",
        SavedItemType::Other => "Other",
    }
}

/// In-app link to the saved item, when it has a page of its own
fn item_href(item: &SavedItem) -> Option<String> {
    match item.item_type {
        SavedItemType::Ad => Some(format!("/ads/{}", item.item_id)),
        SavedItemType::LandingPage => Some("/lp-analysis".to_string()),
        SavedItemType::Creative | SavedItemType::Other => None,
    }
}

#[component]
pub fn SavedPage() -> impl IntoView {
    let ctx = use_app_context();
    let saved = RwSignal::new(SavedItems::default());

    Effect::new(move |_| {
        spawn_local(async move {
            let loaded = or_empty(ctx, "list saved items", client().list_saved().await);
            saved.set(SavedItems::from(loaded));
        });
    });

    let remove = move |id: String| {
        spawn_local(async move {
            match client().remove_saved(&id).await {
                Ok(()) => {
                    saved.update(|items| {
                        items.remove(&id);
                    });
                    ctx.confirm(Message::Removed);
                }
                Err(err) => ctx.report("remove saved item", err),
            }
        });
    };

    view! {
        <section>
            <h2>"Saved"</h2>
            <Show
                when=move || !saved.read().is_empty()
                fallback=move || view! { <p>{ctx.text(Message::NoData)}</p> }
            >
                <table style=TABLE_STYLE>
                    <thead>
                        <tr style=HEAD_ROW_STYLE>
                            <th style=TH_STYLE>"Type"</th>
                            <th style=TH_STYLE>"Item"</th>
                            <th style=TH_STYLE>"Note"</th>
                            <th style=TH_STYLE>"Saved"</th>
                            <th style=TH_STYLE></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || saved.read().items().to_vec()
                            key=|item| item.id.clone()
                            children=move |item| {
                                let label = item.title.clone().unwrap_or_else(|| item.item_id.clone());
                                let link = match item_href(&item) {
                                    Some(href) => view! { <A href=href>{label}</A> }.into_any(),
                                    None => view! { <span>{label}</span> }.into_any(),
                                };
                                let id = item.id.clone();
                                view! {
                                    <tr style=ROW_STYLE>
                                        <td style=TD_STYLE>{type_label(item.item_type)}</td>
                                        <td style=TD_STYLE>{link}</td>
                                        <td style=TD_STYLE>{item.note.unwrap_or_default()}</td>
                                        <td style=TD_STYLE>{format::date(item.saved_at.as_deref())}</td>
                                        <td style=TD_STYLE>
                                            <button on:click=move |_| remove(id.clone())>"Remove"</button>
                                        </td>
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
