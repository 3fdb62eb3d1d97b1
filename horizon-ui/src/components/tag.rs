//! Tag Component

use horizon::Tone;
use leptos::*;

/// Short label with one tone class
#[component]
pub fn Tag(
    #[prop(into)]
    label: String,
    /// Visual tone; neutral when omitted
    #[prop(optional)]
    tone: Tone,
) -> impl IntoView {
    view! {
        <span class=format!("tag {}", tone.class())>{label}</span>
    }
}
