//! Stat Grid Component
//!
//! One tile per stat card, in dataset order.

use horizon::page::StatTile;
use leptos::*;

#[component]
pub fn StatGrid(stats: Vec<StatTile>) -> impl IntoView {
    view! {
        <div class="grid stats">
            {stats.into_iter().map(|tile| view! { <StatTileView tile=tile /> }).collect_view()}
        </div>
    }
}

#[component]
fn StatTileView(tile: StatTile) -> impl IntoView {
    let accent = tile.accent.map(|color| format!("color: {}", color));

    view! {
        <section class="stat">
            <div class="stat-icon">{tile.icon}</div>
            <div class="stat-body">
                <p class="stat-label">{tile.label}</p>
                <div class="stat-value" style=accent>{tile.value}</div>
                {tile.sub.map(|sub| view! { <p class="stat-sub">{sub}</p> })}
            </div>
        </section>
    }
}
