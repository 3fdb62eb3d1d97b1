//! Card Component
//!
//! Generic container with an optional header.

use horizon::TagView;
use leptos::*;

/// Card with optional title and header action
///
/// The header is rendered only when a title or an action is present.
#[component]
pub fn Card(
    title: Option<String>,
    action: Option<TagView>,
    children: Children,
) -> impl IntoView {
    let header = (title.is_some() || action.is_some()).then(|| {
        view! {
            <header class="card-head">
                {title.map(|title| view! { <h3>{title}</h3> })}
                {action.map(|action| view! {
                    <span class=format!("pill {}", action.tone.class())>{action.label}</span>
                })}
            </header>
        }
    });

    view! {
        <section class="card">
            {header}
            {children()}
        </section>
    }
}
