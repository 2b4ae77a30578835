//! App-wide reactive context

use adintel_client::{ApiError, Locale, Message, TokenStore};
use leptos::prelude::*;

use crate::api::BrowserTokenStore;

/// Shared across all views via `provide_context`
#[derive(Debug, Clone, Copy)]
pub struct AppContext {
    pub locale: Locale,
    /// Error shown in the dismissible banner
    pub error: RwSignal<Option<ApiError>>,
    /// Short confirmation shown after an action succeeds
    pub notice: RwSignal<Option<String>>,
    pub authenticated: RwSignal<bool>,
}

impl AppContext {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            authenticated: RwSignal::new(BrowserTokenStore.get().is_some()),
        }
    }

    pub fn text(&self, message: Message) -> String {
        self.locale.text(message)
    }

    /// Log a failed request and surface it in the banner
    pub fn report(&self, context: &str, err: ApiError) {
        leptos::logging::error!("{}: {}", context, err);
        if err.is_unauthorized() {
            self.authenticated.set(false);
        }
        self.notice.set(None);
        self.error.set(Some(err));
    }

    pub fn confirm(&self, message: Message) {
        self.error.set(None);
        self.notice.set(Some(self.text(message)));
    }

    pub fn dismiss(&self) {
        self.error.set(None);
        self.notice.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
