//! Task List Component

use leptos::*;

/// Task checkboxes, each with its own local state
#[component]
pub fn TaskList(items: Vec<String>) -> impl IntoView {
    view! {
        <ul class="tasks">
            {items.into_iter().map(|label| view! { <TaskItem label=label /> }).collect_view()}
        </ul>
    }
}

#[component]
fn TaskItem(label: String) -> impl IntoView {
    let done = create_rw_signal(false);

    view! {
        <li class:done=move || done.get()>
            <input
                type="checkbox"
                prop:checked=move || done.get()
                on:change=move |ev| done.set(event_target_checked(&ev))
            />
            " "
            {label}
        </li>
    }
}
