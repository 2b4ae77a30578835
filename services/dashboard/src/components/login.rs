//! Sign-in form

use adintel_client::models::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::client;
use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest {
            email: email.get(),
            password: password.get(),
        };
        let navigate = navigate.clone();
        set_busy.set(true);
        spawn_local(async move {
            match client().login(&request).await {
                Ok(user) => {
                    leptos::logging::log!("signed in as {}", user.email);
                    ctx.authenticated.set(true);
                    ctx.dismiss();
                    set_password.set(String::new());
                    navigate("/", Default::default());
                }
                Err(err) => ctx.report("sign in", err),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section style="max-width: 360px;">
            <h2>"Sign in"</h2>
            <form style="display: grid; gap: 0.5rem;" on:submit=submit>
                <input
                    type="email"
                    placeholder="Email"
                    autocomplete="username"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Sign in"</button>
            </form>
        </section>
    }
}
