//! Dismissible banner for request failures and confirmations

use adintel_client::Message;
use leptos::prelude::*;

use crate::context::use_app_context;

const BANNER_STYLE: &str = "display: flex; justify-content: space-between; align-items: center; \
     padding: 0.75rem 1rem; margin-bottom: 1rem; border-radius: 0.25rem;";

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || {
            ctx.error.get().map(|err| {
                let style = format!("{} color: #721c24; background-color: #f8d7da;", BANNER_STYLE);
                view! {
                    <div role="alert" style=style>
                        <span>{err.user_message(ctx.locale)}</span>
                        <button on:click=move |_| ctx.dismiss()>{ctx.text(Message::Dismiss)}</button>
                    </div>
                }
            })
        }}
        {move || {
            ctx.notice.get().map(|text| {
                let style = format!("{} color: #155724; background-color: #d4edda;", BANNER_STYLE);
                view! {
                    <div role="status" style=style>
                        <span>{text}</span>
                        <button on:click=move |_| ctx.dismiss()>{ctx.text(Message::Dismiss)}</button>
                    </div>
                }
            })
        }}
    }
}
