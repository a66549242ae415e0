//! Tab strip switching between the creation form and the campaign list.

use leptos::prelude::*;

use crate::state::ui::{Tab, UiState};

#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let class = move || if ui.with(|s| s.active_tab == tab) { "active" } else { "" };
                    view! {
                        <button class=class on:click=move |_| ui.update(|s| s.select(tab))>
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
