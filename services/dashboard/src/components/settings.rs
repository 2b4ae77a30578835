//! API keys and notification preferences

use adintel_client::models::{ApiKeyStatus, ApiKeyUpdate, NotificationSettings};
use adintel_client::Message;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{or_empty, HEAD_ROW_STYLE, ROW_STYLE, TABLE_STYLE, TD_STYLE, TH_STYLE};
use crate::api::client;
use crate::context::use_app_context;
use crate::format;

const PROVIDERS: &[&str] = &["openai", "anthropic", "google", "meta", "tiktok"];
const DIGESTS: &[&str] = &["daily", "weekly", "never"];

/// Replace the provider's row, or append it if it wasn't listed
fn upsert_key(keys: &mut Vec<ApiKeyStatus>, status: ApiKeyStatus) {
    match keys.iter_mut().find(|k| k.provider == status.provider) {
        Some(existing) => *existing = status,
        None => keys.push(status),
    }
}

/// Digest choice from the select; the blank option means "not set"
fn parse_digest(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn clear_key(keys: &mut [ApiKeyStatus], provider: &str) {
    if let Some(key) = keys.iter_mut().find(|k| k.provider == provider) {
        key.configured = false;
        key.masked_key = None;
        key.last_validated_at = None;
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <section>
            <h2>"Settings"</h2>
            <ApiKeySettings />
            <NotificationPreferences />
        </section>
    }
}

#[component]
fn ApiKeySettings() -> impl IntoView {
    let ctx = use_app_context();
    let keys = RwSignal::new(Vec::<ApiKeyStatus>::new());
    let (provider, set_provider) = signal(PROVIDERS[0].to_string());
    let (secret, set_secret) = signal(String::new());

    Effect::new(move |_| {
        spawn_local(async move {
            keys.set(or_empty(ctx, "load API keys", client().api_keys().await));
        });
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let update = ApiKeyUpdate {
            provider: provider.get(),
            api_key: secret.get(),
        };
        spawn_local(async move {
            match client().update_api_key(&update).await {
                Ok(status) => {
                    keys.update(|list| upsert_key(list, status));
                    set_secret.set(String::new());
                    ctx.confirm(Message::Saved);
                }
                Err(err) => ctx.report("update API key", err),
            }
        });
    };

    let remove = move |name: String| {
        spawn_local(async move {
            match client().delete_api_key(&name).await {
                Ok(()) => {
                    keys.update(|list| clear_key(list, &name));
                    ctx.confirm(Message::Removed);
                }
                Err(err) => ctx.report("delete API key", err),
            }
        });
    };

    view! {
        <h3>"API Keys"</h3>
        <Show
            when=move || !keys.read().is_empty()
            fallback=move || view! { <p>{ctx.text(Message::NoData)}</p> }
        >
            <table style=TABLE_STYLE>
                <thead>
                    <tr style=HEAD_ROW_STYLE>
                        <th style=TH_STYLE>"Provider"</th>
                        <th style=TH_STYLE>"Key"</th>
                        <th style=TH_STYLE>"Validated"</th>
                        <th style=TH_STYLE></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || keys.get()
                        key=|k| (k.provider.clone(), k.configured, k.masked_key.clone())
                        children=move |k| {
                            let masked = k.masked_key.clone().unwrap_or_else(|| "not set".to_string());
                            let validated = format::date(k.last_validated_at.as_deref());
                            let configured = k.configured;
                            let name = k.provider.clone();
                            view! {
                                <tr style=ROW_STYLE>
                                    <td style=TD_STYLE>{k.provider}</td>
                                    <td style=TD_STYLE><code>{masked}</code></td>
                                    <td style=TD_STYLE>{validated}</td>
                                    <td style=TD_STYLE>
                                        <Show when=move || configured>
                                            <button on:click={
                                                let name = name.clone();
                                                move |_| remove(name.clone())
                                            }>"Delete"</button>
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
        <form style="display: flex; gap: 0.5rem; margin: 1rem 0;" on:submit=submit>
            <select on:change=move |ev| set_provider.set(event_target_value(&ev))>
                {PROVIDERS.iter().map(|p| view! { <option value=*p>{*p}</option> }).collect_view()}
            </select>
            <input
                type="password"
                placeholder="API key"
                autocomplete="off"
                prop:value=move || secret.get()
                on:input=move |ev| set_secret.set(event_target_value(&ev))
            />
            <button type="submit">"Save key"</button>
        </form>
    }
}

#[component]
fn NotificationPreferences() -> impl IntoView {
    let ctx = use_app_context();
    let settings = RwSignal::new(NotificationSettings::default());

    Effect::new(move |_| {
        spawn_local(async move {
            let loaded = or_empty(
                ctx,
                "load notification settings",
                client().notification_settings().await,
            );
            settings.set(loaded);
        });
    });

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = settings.get();
        spawn_local(async move {
            match client().update_notification_settings(&current).await {
                Ok(stored) => {
                    settings.set(stored);
                    ctx.confirm(Message::Saved);
                }
                Err(err) => ctx.report("update notification settings", err),
            }
        });
    };

    view! {
        <h3>"Notifications"</h3>
        <form style="display: grid; gap: 0.5rem; max-width: 480px;" on:submit=save>
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || settings.read().email_enabled
                    on:change=move |ev| {
                        let on = event_target_checked(&ev);
                        settings.update(|s| s.email_enabled = on);
                    }
                />
                " Email alerts"
            </label>
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || settings.read().slack_enabled
                    on:change=move |ev| {
                        let on = event_target_checked(&ev);
                        settings.update(|s| s.slack_enabled = on);
                    }
                />
                " Slack alerts"
            </label>
            <label>
                "Slack webhook URL"
                <input
                    type="url"
                    prop:value=move || settings.read().slack_webhook_url.clone().unwrap_or_default()
                    on:input=move |ev| {
                        let url = event_target_value(&ev);
                        settings.update(|s| {
                            s.slack_webhook_url = (!url.trim().is_empty()).then_some(url);
                        });
                    }
                />
            </label>
            <label>
                "Digest"
                <select on:change=move |ev| {
                    let digest = parse_digest(&event_target_value(&ev));
                    settings.update(|s| s.digest_frequency = digest);
                }>
                    <option value="" selected=move || settings.read().digest_frequency.is_none()>
                        "Not set"
                    </option>
                    {DIGESTS.iter().map(|d| {
                        let value = *d;
                        view! {
                            <option
                                value=value
                                selected=move || settings.read().digest_frequency.as_deref() == Some(value)
                            >
                                {value}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
            <button type="submit">"Save preferences"</button>
        </form>
    }
}
