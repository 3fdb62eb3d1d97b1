//! Promo Card Body

use leptos::*;

/// Text, optional avatar stack and a primary button
#[component]
pub fn PromoBody(body: String, avatars: Vec<String>, action: String) -> impl IntoView {
    let stack = (!avatars.is_empty()).then(|| {
        view! {
            <div class="avatars">
                {avatars.into_iter().map(|letter| view! {
                    <div class="avatar small">{letter}</div>
                }).collect_view()}
            </div>
        }
    });

    view! {
        <p class="muted">{body}</p>
        {stack}
        <button class="primary">{action}</button>
    }
}
