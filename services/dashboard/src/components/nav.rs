//! Top navigation bar

use leptos::prelude::*;
use leptos_router::components::A;

use crate::api::client;
use crate::context::use_app_context;

const LINKS: &[(&str, &str)] = &[
    ("/", "Ads"),
    ("/lp-analysis", "LP Analysis"),
    ("/competitors", "Competitors"),
    ("/creative", "Creative"),
    ("/analytics", "Analytics"),
    ("/notifications", "Notifications"),
    ("/saved", "Saved"),
    ("/settings", "Settings"),
];

const NAV_STYLE: &str = "display: flex; gap: 1rem; align-items: center; padding: 0.5rem 0; \
     margin-bottom: 1rem; border-bottom: 1px solid #dee2e6;";

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    let sign_out = move |_: leptos::ev::MouseEvent| {
        client().logout();
        ctx.authenticated.set(false);
    };

    view! {
        <nav style=NAV_STYLE>
            {LINKS
                .iter()
                .map(|(href, label)| view! { <A href=*href>{*label}</A> })
                .collect_view()}
            <span style="margin-left: auto;">
                <Show
                    when=move || ctx.authenticated.get()
                    fallback=|| view! { <A href="/login">"Sign in"</A> }
                >
                    <button on:click=sign_out>"Sign out"</button>
                </Show>
            </span>
        </nav>
    }
}
