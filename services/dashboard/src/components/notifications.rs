//! Notification inbox

use adintel_client::models::{Notification, NotificationLevel};
use adintel_client::Message;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{or_empty, ROW_STYLE, TABLE_STYLE, TD_STYLE};
use crate::api::client;
use crate::context::use_app_context;
use crate::format;

fn level_color(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "#0c5460",
        NotificationLevel::Success => "#155724",
        NotificationLevel::Warning => "#856404",
        NotificationLevel::Error => "#721c24",
    }
}

fn mark_read(list: &mut [Notification], id: &str) {
    if let Some(n) = list.iter_mut().find(|n| n.id == id) {
        n.read = true;
    }
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let ctx = use_app_context();
    let notifications = RwSignal::new(Vec::<Notification>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            let loaded = or_empty(ctx, "list notifications", client().list_notifications().await);
            notifications.set(loaded);
        });
    });

    let unread = move || notifications.read().iter().filter(|n| !n.read).count();

    let on_read = move |id: String| {
        spawn_local(async move {
            match client().mark_notification_read(&id).await {
                Ok(()) => notifications.update(|list| mark_read(list, &id)),
                Err(err) => ctx.report("mark notification read", err),
            }
        });
    };

    let on_delete = move |id: String| {
        spawn_local(async move {
            match client().delete_notification(&id).await {
                Ok(()) => {
                    notifications.update(|list| list.retain(|n| n.id != id));
                    ctx.confirm(Message::Removed);
                }
                Err(err) => ctx.report("delete notification", err),
            }
        });
    };

    view! {
        <section>
            <h2>{move || format!("Notifications ({} unread)", unread())}</h2>
            <Show
                when=move || !notifications.read().is_empty()
                fallback=move || view! { <p>{ctx.text(Message::NoData)}</p> }
            >
                <table style=TABLE_STYLE>
                    <tbody>
                        <For
                            each=move || notifications.get()
                            key=|n| (n.id.clone(), n.read)
                            children=move |n| {
                                let is_read = n.read;
                                let weight = if is_read { "normal" } else { "600" };
                                let style = format!("{} font-weight: {};", TD_STYLE, weight);
                                let (read_id, delete_id) = (n.id.clone(), n.id.clone());
                                view! {
                                    <tr style=ROW_STYLE>
                                        <td style=style>
                                            <span style=format!("color: {};", level_color(n.level))>
                                                {n.title}
                                            </span>
                                            <br />
                                            <span>{n.message}</span>
                                        </td>
                                        <td style=TD_STYLE>{format::date(n.created_at.as_deref())}</td>
                                        <td style=TD_STYLE>
                                            <Show when=move || !is_read>
                                                <button on:click={
                                                    let id = read_id.clone();
                                                    move |_| on_read(id.clone())
                                                }>"Mark read"</button>
                                            </Show>
                                            <button on:click=move |_| on_delete(delete_id.clone())>"Delete"</button>
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
