//! Table Components
//!
//! Check and complex tables. Rows appear in dataset order; there is no
//! sorting, filtering or pagination.

use horizon::page::{CheckRow, ComplexRow};
use leptos::*;

use super::Tag;

#[component]
fn TableHead(columns: [&'static str; 4]) -> impl IntoView {
    view! {
        <div class="table-head">
            {columns.into_iter().map(|column| view! { <span>{column}</span> }).collect_view()}
        </div>
    }
}

/// Name, progress, quantity and date
#[component]
pub fn CheckTable(columns: [&'static str; 4], rows: Vec<CheckRow>) -> impl IntoView {
    view! {
        <div class="table">
            <TableHead columns=columns />
            {rows.into_iter().map(|row| view! {
                <div class="table-row">
                    <span>{row.name}</span>
                    <span class="muted">{row.progress}</span>
                    <span class="muted">{row.quantity}</span>
                    <span class="muted">{row.date}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

/// Name, status tag, date and progress bar
#[component]
pub fn ComplexTable(columns: [&'static str; 4], rows: Vec<ComplexRow>) -> impl IntoView {
    view! {
        <div class="table">
            <TableHead columns=columns />
            {rows.into_iter().map(|row| view! {
                <div class="table-row">
                    <span>{row.name}</span>
                    <span>
                        <Tag label=row.status.label tone=row.status.tone />
                    </span>
                    <span class="muted">{row.date}</span>
                    <span>
                        <div class="progress">
                            <div
                                class="progress-bar"
                                style=format!("width: {}", row.progress_width)
                            />
                        </div>
                    </span>
                </div>
            }).collect_view()}
        </div>
    }
}
