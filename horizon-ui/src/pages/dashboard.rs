//! Dashboard Page
//!
//! Sidebar, topbar, stat grid and the main card grid.

use horizon::page::{Headline, LegendEntry, PanelBody, PanelCard};
use leptos::*;

use crate::components::{
    Card, ChartPanel, CheckTable, ComplexTable, PromoBody, Sidebar, StatGrid, TaskList,
    TeamRoster, Topbar,
};
use crate::state::use_page;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let page = use_page().get_value();

    view! {
        <div class="page">
            <Sidebar content=page.sidebar />

            <div class="main">
                <Topbar content=page.topbar />

                <StatGrid stats=page.stats />

                <div class="grid main-grid">
                    {page
                        .cards
                        .into_iter()
                        .map(|card| view! { <PanelView card=card /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn PanelView(card: PanelCard) -> impl IntoView {
    let body = match card.body {
        PanelBody::Spending { headline, chart } => view! {
            <div class="big-number">{headline.value}</div>
            <div class="mini-grid">
                <div>
                    <div class="muted">{headline.caption}</div>
                    <div class="accent">{headline.change}</div>
                </div>
                <div class="muted">{headline.note}</div>
            </div>
            <ChartPanel name="spending" chart=chart />
        }
        .into_view(),
        PanelBody::WeeklyRevenue { chart } => view! {
            <ChartPanel name="weekly-revenue" chart=chart />
        }
        .into_view(),
        PanelBody::DailyTraffic { headline, chart } => view! {
            <TrafficHeadline headline=headline />
            <ChartPanel name="daily-traffic" chart=chart />
        }
        .into_view(),
        PanelBody::Donut { chart, legend } => view! {
            <ChartPanel name="storage" chart=chart />
            <Legend entries=legend />
        }
        .into_view(),
        PanelBody::CheckTable { columns, rows } => view! {
            <CheckTable columns=columns rows=rows />
        }
        .into_view(),
        PanelBody::ComplexTable { columns, rows } => view! {
            <ComplexTable columns=columns rows=rows />
        }
        .into_view(),
        PanelBody::Tasks { items } => view! { <TaskList items=items /> }.into_view(),
        PanelBody::Team { members } => view! { <TeamRoster members=members /> }.into_view(),
        PanelBody::Promo {
            body,
            avatars,
            action,
        } => view! { <PromoBody body=body avatars=avatars action=action /> }.into_view(),
    };

    view! {
        <Card title=card.title action=card.action>
            {body}
        </Card>
    }
}

#[component]
fn TrafficHeadline(headline: Headline) -> impl IntoView {
    view! {
        <div class="big-number">{headline.value}</div>
        <p class="muted">{headline.caption}</p>
        <div class="accent">{headline.change}</div>
    }
}

#[component]
fn Legend(entries: Vec<LegendEntry>) -> impl IntoView {
    view! {
        <div class="legend">
            {entries.into_iter().map(|entry| {
                let swatch = format!("background: {}", entry.color);
                view! {
                    <div class="legend-row">
                        <span class="swatch" style=swatch />
                        {entry.text()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
