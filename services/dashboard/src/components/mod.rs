//! Dashboard screens and shared widgets

pub mod ad_detail;
pub mod ads_table;
pub mod analytics;
pub mod badges;
pub mod competitors;
pub mod creative_form;
pub mod error_banner;
pub mod login;
pub mod lp_analysis;
pub mod nav;
pub mod notifications;
pub mod saved_items;
pub mod settings;

use adintel_client::Result;

use crate::context::AppContext;

pub(crate) const TABLE_STYLE: &str = "width: 100%; border-collapse: collapse;";
pub(crate) const HEAD_ROW_STYLE: &str = "border-bottom: 2px solid #dee2e6;";
pub(crate) const ROW_STYLE: &str = "border-bottom: 1px solid #dee2e6;";
pub(crate) const TH_STYLE: &str = "padding: 0.5rem; text-align: left;";
pub(crate) const TD_STYLE: &str = "padding: 0.5rem;";

/// Unwrap a fetch result, reporting the failure and falling back to the
/// empty state
pub(crate) fn or_empty<T: Default>(ctx: AppContext, what: &str, result: Result<T>) -> T {
    result.unwrap_or_else(|err| {
        ctx.report(what, err);
        T::default()
    })
}
