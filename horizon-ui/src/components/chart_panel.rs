//! Chart Panel Component
//!
//! Embeds a chart rendered to SVG by `horizon::chart`.

use horizon::ChartSpec;
use leptos::*;

/// Chart panel; a chart that fails to render leaves an empty placeholder
#[component]
pub fn ChartPanel(
    /// Name used in console messages
    #[prop(into)]
    name: String,
    chart: ChartSpec,
) -> impl IntoView {
    let style = format!("height: {}px", chart.frame().height);

    match chart.render_svg() {
        Ok(svg) => view! { <div class="chart" style=style inner_html=svg /> }.into_view(),
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to render chart {}: {}", name, e).into());
            view! { <div class="chart empty" style=style /> }.into_view()
        }
    }
}
