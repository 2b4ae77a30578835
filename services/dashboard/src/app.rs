//! Main App component

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::api::browser_locale;
use crate::components::ad_detail::AdDetailPage;
use crate::components::ads_table::AdsPage;
use crate::components::analytics::AnalyticsPage;
use crate::components::competitors::CompetitorsPage;
use crate::components::creative_form::CreativePage;
use crate::components::error_banner::ErrorBanner;
use crate::components::login::LoginPage;
use crate::components::lp_analysis::LpAnalysisPage;
use crate::components::nav::NavBar;
use crate::components::notifications::NotificationsPage;
use crate::components::saved_items::SavedPage;
use crate::components::settings::SettingsPage;
use crate::context::AppContext;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppContext::new(browser_locale()));

    view! {
        <Title text="AdIntel Dashboard" />
        <Router>
            <main style="font-family: system-ui, sans-serif; max-width: 1200px; margin: 0 auto; padding: 1rem;">
                <h1>"AdIntel Dashboard"</h1>
                <NavBar />
                <ErrorBanner />
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=AdsPage />
                    <Route path=path!("/ads/:id") view=AdDetailPage />
                    <Route path=path!("/lp-analysis") view=LpAnalysisPage />
                    <Route path=path!("/competitors") view=CompetitorsPage />
                    <Route path=path!("/creative") view=CreativePage />
                    <Route path=path!("/analytics") view=AnalyticsPage />
                    <Route path=path!("/notifications") view=NotificationsPage />
                    <Route path=path!("/saved") view=SavedPage />
                    <Route path=path!("/settings") view=SettingsPage />
                    <Route path=path!("/login") view=LoginPage />
                </Routes>
            </main>
        </Router>
    }
}
