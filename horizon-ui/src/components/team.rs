//! Team Roster Component

use horizon::page::RosterEntry;
use leptos::*;

#[component]
pub fn TeamRoster(members: Vec<RosterEntry>) -> impl IntoView {
    view! {
        <ul class="team">
            {members.into_iter().map(|member| view! {
                <li>
                    <div class="avatar small">{member.initial}</div>
                    <div>
                        <div>{member.name}</div>
                        <div class="muted">{member.role}</div>
                    </div>
                </li>
            }).collect_view()}
        </ul>
    }
}
