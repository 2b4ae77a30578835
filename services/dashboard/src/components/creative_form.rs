//! AI ad-creative generator

use adintel_client::models::{Creative, CreativeRequest, Platform};
use adintel_client::Message;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::client;
use crate::context::use_app_context;

const TONES: &[&str] = &["friendly", "professional", "playful", "urgent", "luxury"];

/// Count field as typed; anything unparsable becomes 0 and fails validation
fn parse_count(raw: &str) -> u8 {
    raw.trim().parse().unwrap_or(0)
}

#[component]
pub fn CreativePage() -> impl IntoView {
    let ctx = use_app_context();
    let (product, set_product) = signal(String::new());
    let (audience, set_audience) = signal(String::new());
    let (tone, set_tone) = signal(TONES[0].to_string());
    let (platform, set_platform) = signal(Platform::Youtube);
    let (count, set_count) = signal(3u8);
    let (busy, set_busy) = signal(false);
    let creatives = RwSignal::new(Vec::<Creative>::new());

    let generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = CreativeRequest {
            product_name: product.get(),
            target_audience: audience.get(),
            tone: tone.get(),
            platform: platform.get(),
            count: count.get(),
        };
        set_busy.set(true);
        spawn_local(async move {
            match client().generate_creative(&request).await {
                Ok(response) => {
                    creatives.set(response.creatives);
                    ctx.error.set(None);
                }
                Err(err) => ctx.report("generate creative", err),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section>
            <h2>"Creative Generator"</h2>
            <form style="display: grid; gap: 0.5rem; max-width: 480px;" on:submit=generate>
                <label>
                    "Product name"
                    <input
                        type="text"
                        prop:value=move || product.get()
                        on:input=move |ev| set_product.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Target audience"
                    <input
                        type="text"
                        prop:value=move || audience.get()
                        on:input=move |ev| set_audience.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Tone"
                    <select on:change=move |ev| set_tone.set(event_target_value(&ev))>
                        {TONES.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
                    </select>
                </label>
                <label>
                    "Platform"
                    <select on:change=move |ev| {
                        if let Some(p) = Platform::parse(&event_target_value(&ev)) {
                            set_platform.set(p);
                        }
                    }>
                        {Platform::ALL
                            .into_iter()
                            .map(|p| view! { <option value=p.as_str()>{p.to_string()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Variations"
                    <input
                        type="number"
                        min="1"
                        max=CreativeRequest::MAX_COUNT.to_string()
                        prop:value=move || count.get().to_string()
                        on:input=move |ev| set_count.set(parse_count(&event_target_value(&ev)))
                    />
                </label>
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Generating..." } else { "Generate" }}
                </button>
            </form>
            <Show
                when=move || !creatives.read().is_empty()
                fallback=move || view! { <p>{ctx.text(Message::NoData)}</p> }
            >
                <div style="display: grid; gap: 1rem; margin-top: 1rem;">
                    {move || creatives.get().into_iter().map(|c| view! {
                        <article style="border: 1px solid #dee2e6; border-radius: 0.25rem; padding: 1rem;">
                            <h3>{c.headline}</h3>
                            <p>{c.body}</p>
                            {c.call_to_action.map(|cta| view! { <strong>{cta}</strong> })}
                        </article>
                    }).collect_view()}
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_parses_digits() {
        assert_eq!(parse_count(" 5 "), 5);
    }

    #[test]
    fn bad_count_fails_validation() {
        let request = CreativeRequest {
            product_name: "Sneakers".into(),
            target_audience: String::new(),
            tone: TONES[0].into(),
            platform: Platform::Tiktok,
            count: parse_count("lots"),
        };
        assert!(request.validate().is_err());
    }
}
