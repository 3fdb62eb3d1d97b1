//! App Root Component
//!
//! Composes the page from the injected dataset and provides it to the tree.

use horizon::{ChartTheme, DashboardData, DashboardPage, StatusTones};
use leptos::*;

use crate::pages::Dashboard;
use crate::state::provide_page;

/// Root application component
#[component]
pub fn App(
    /// Dataset to render; the built-in dataset when omitted
    #[prop(optional)]
    data: Option<DashboardData>,
) -> impl IntoView {
    let data = data.unwrap_or_default();

    // Tone table is built once and reused for every complex table row
    let tones = StatusTones::standard();
    let page = DashboardPage::compose(&data, &tones, &ChartTheme::default());
    provide_page(page);

    view! { <Dashboard /> }
}
