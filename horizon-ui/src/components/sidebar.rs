//! Sidebar Component
//!
//! Brand, navigation links and the upgrade call-to-action.

use horizon::page::Sidebar as SidebarContent;
use leptos::*;

#[component]
pub fn Sidebar(content: SidebarContent) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="brand">
                <span class="dot" />
                " " {content.brand} " "
                <span class="muted">{content.edition}</span>
            </div>

            <nav>
                {content.nav.into_iter().map(|item| view! {
                    <a class="nav-link">
                        <span>"•"</span>
                        {item}
                    </a>
                }).collect_view()}
            </nav>

            <div class="cta">
                <div class="cta-icon">{content.cta_icon}</div>
                <div class="cta-body">
                    <p>{content.cta_text}</p>
                    <button>{content.cta_action}</button>
                </div>
            </div>
        </aside>
    }
}
