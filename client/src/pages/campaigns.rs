//! Campaigns page: the root view switching between create and list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one of the two views is mounted at a time. Creating a campaign
//! bumps the shared reload counter and selects the list, so the list shows
//! the new row on its next fetch.

use leptos::prelude::*;

use crate::components::campaign_form::CampaignForm;
use crate::components::campaign_list::CampaignList;
use crate::components::tab_bar::TabBar;
use crate::state::ui::{Tab, UiState};

#[component]
pub fn CampaignsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let active_tab = Memo::new(move |_| ui.with(|s| s.active_tab));
    let reload_seq = Memo::new(move |_| ui.with(|s| s.reload_seq));
    let on_created = Callback::new(move |()| ui.update(UiState::campaign_created));

    view! {
        <div class="container">
            <h1>"Pathik AI — Campaigns"</h1>

            <TabBar/>

            {move || match active_tab.get() {
                Tab::Create => view! { <CampaignForm on_created=on_created/> }.into_any(),
                Tab::List => view! { <CampaignList reload_seq=reload_seq/> }.into_any(),
            }}
        </div>
    }
}
