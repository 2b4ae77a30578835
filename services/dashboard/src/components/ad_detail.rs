//! Single ad with its AI analysis and performance prediction

use adintel_client::models::{Ad, AdAnalysis, Prediction};
use adintel_client::{ApiError, Message};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use super::badges::{PlatformBadge, ScoreBadge};
use crate::api::client;
use crate::context::use_app_context;
use crate::format;

/// A 404 means "not produced yet", not a failure worth a banner
fn absent_if_missing<T>(result: Result<T, ApiError>) -> Result<Option<T>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.status() == Some(404) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Placeholder while the ad itself is absent
fn ad_placeholder(failed: bool) -> Message {
    if failed {
        Message::NoData
    } else {
        Message::Loading
    }
}

#[component]
pub fn AdDetailPage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let ad_id = move || params.read().get("id").unwrap_or_default();

    let ad = RwSignal::new(None::<Ad>);
    let analysis = RwSignal::new(None::<AdAnalysis>);
    let prediction = RwSignal::new(None::<Prediction>);
    let (analyzing, set_analyzing) = signal(false);
    let (load_failed, set_load_failed) = signal(false);

    Effect::new(move |_| {
        let id = ad_id();
        if id.is_empty() {
            set_load_failed.set(true);
            return;
        }
        set_load_failed.set(false);
        spawn_local(async move {
            let api = client();
            match api.get_ad(&id).await {
                Ok(found) => ad.set(Some(found)),
                Err(err) => {
                    ad.set(None);
                    set_load_failed.set(true);
                    ctx.report("load ad", err);
                    return;
                }
            }
            match absent_if_missing(api.get_ad_analysis(&id).await) {
                Ok(found) => analysis.set(found),
                Err(err) => ctx.report("load analysis", err),
            }
            match absent_if_missing(api.get_prediction(&id).await) {
                Ok(found) => prediction.set(found),
                Err(err) => ctx.report("load prediction", err),
            }
        });
    });

    let analyze = move |_: leptos::ev::MouseEvent| {
        let id = ad_id();
        set_analyzing.set(true);
        spawn_local(async move {
            match client().analyze_ad(&id).await {
                Ok(result) => analysis.set(Some(result)),
                Err(err) => ctx.report("analyze ad", err),
            }
            set_analyzing.set(false);
        });
    };

    view! {
        <section>
            {move || match ad.get() {
                None => view! { <p>{ctx.text(ad_placeholder(load_failed.get()))}</p> }.into_any(),
                Some(ad) => view! {
                    <h2>{ad.title.clone().unwrap_or_else(|| ad.advertiser.clone())}</h2>
                    <p>
                        <PlatformBadge platform=ad.platform />
                        " " {ad.advertiser.clone()}
                    </p>
                    <p>{ad.description.clone().unwrap_or_default()}</p>
                    <dl>
                        <dt>"Views"</dt>
                        <dd>{format::count(ad.view_count)}</dd>
                        <dt>"Likes"</dt>
                        <dd>{format::count(ad.like_count)}</dd>
                        <dt>"Seen"</dt>
                        <dd>
                            {format::date(ad.first_seen_at.as_deref())} " to "
                            {format::date(ad.last_seen_at.as_deref())}
                        </dd>
                    </dl>
                    {ad.landing_page_url.clone().map(|url| {
                        let href = url.clone();
                        view! { <p><a href=href target="_blank" rel="noopener">{url}</a></p> }
                    })}
                }
                .into_any(),
            }}

            <h3>"Analysis"</h3>
            {move || match analysis.get() {
                None => view! { <p>"Not analyzed yet."</p> }.into_any(),
                Some(a) => view! {
                    <p><ScoreBadge score=a.score /> " " {a.summary.clone()}</p>
                    <dl>
                        <dt>"Hook"</dt>
                        <dd>{a.hook.clone().unwrap_or_else(|| format::MISSING.to_string())}</dd>
                        <dt>"Target audience"</dt>
                        <dd>{a.target_audience.clone().unwrap_or_else(|| format::MISSING.to_string())}</dd>
                        <dt>"Tone"</dt>
                        <dd>{a.tone.clone().unwrap_or_else(|| format::MISSING.to_string())}</dd>
                    </dl>
                    <ul>
                        {a.appeal_points.into_iter().map(|point| view! { <li>{point}</li> }).collect_view()}
                    </ul>
                }
                .into_any(),
            }}
            <button disabled=move || analyzing.get() on:click=analyze>
                {move || if analyzing.get() { "Analyzing..." } else { "Run analysis" }}
            </button>

            <h3>"Prediction"</h3>
            {move || match prediction.get() {
                None => view! { <p>{ctx.text(Message::NoData)}</p> }.into_any(),
                Some(p) => view! {
                    <dl>
                        <dt>"Predicted CTR"</dt>
                        <dd>{format::percent(p.predicted_ctr)}</dd>
                        <dt>"Predicted CVR"</dt>
                        <dd>{format::percent(p.predicted_cvr)}</dd>
                        <dt>"Confidence"</dt>
                        <dd>{format::percent(p.confidence)}</dd>
                    </dl>
                }
                .into_any(),
            }}
        </section>
    }
}
