//! Topbar Component

use horizon::page::Topbar as TopbarContent;
use leptos::*;

/// Breadcrumb and title, search input, icon buttons and avatar
#[component]
pub fn Topbar(content: TopbarContent) -> impl IntoView {
    view! {
        <header class="topbar">
            <div>
                <div class="crumbs">{content.breadcrumb}</div>
                <div class="title">{content.title}</div>
            </div>
            <div class="top-actions">
                <input class="search" placeholder=content.search_placeholder />
                {content.icon_buttons.into_iter().map(|icon| view! {
                    <button class="icon-btn">{icon}</button>
                }).collect_view()}
                <div class="avatar">{content.avatar}</div>
            </div>
        </header>
    }
}
