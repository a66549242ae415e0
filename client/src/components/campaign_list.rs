//! Campaign table with publish/pause actions.

use leptos::prelude::*;

use crate::components::campaign_row::CampaignRow;
use crate::state::campaigns::{COLUMN_COUNT, CampaignListState, RowAction};

/// Campaign list view.
///
/// Loads on mount, and again whenever `reload_seq` moves past the value seen
/// at mount. While a load is pending only the loading text is rendered.
#[component]
pub fn CampaignList(#[prop(into)] reload_seq: Signal<u64>) -> impl IntoView {
    let state = RwSignal::new(CampaignListState::default());

    #[cfg(feature = "hydrate")]
    {
        spawn_reload(state);
        let seen = StoredValue::new(reload_seq.get_untracked());
        Effect::new(move || {
            let mut last = seen.get_value();
            if crate::state::ui::take_reload(&mut last, reload_seq.get()) {
                seen.set_value(last);
                spawn_reload(state);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = reload_seq;

    let on_action = Callback::new(move |(campaign_id, action): (String, RowAction)| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpCampaignApi::from_config();
            crate::state::campaigns::run_row_action(
                &api,
                &state,
                &campaign_id,
                action,
                &crate::util::alert::blocking_alert,
            )
            .await;
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (campaign_id, action);
    });

    let action_in_progress = Signal::derive(move || state.with(|s| s.action_in_progress.clone()));

    let rows = move || {
        let campaigns = state.with(|s| s.campaigns.clone());
        campaigns
            .into_iter()
            .map(|campaign| {
                view! {
                    <CampaignRow campaign=campaign action_in_progress=action_in_progress on_action=on_action/>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Show
            when=move || !state.with(|s| s.loading)
            fallback=|| view! { <p>"Loading campaigns…"</p> }
        >
            <div class="card">
                <h2>"Campaigns"</h2>

                <table class="campaign-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Objective"</th>
                            <th>"Status"</th>
                            <th>"Google ID"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || state.with(CampaignListState::shows_placeholder)>
                            <tr>
                                <td colspan=COLUMN_COUNT.to_string() style="text-align: center">
                                    "No campaigns found"
                                </td>
                            </tr>
                        </Show>
                        {rows}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn spawn_reload(state: RwSignal<CampaignListState>) {
    leptos::task::spawn_local(async move {
        let api = crate::net::api::HttpCampaignApi::from_config();
        crate::state::campaigns::reload_campaigns(&api, &state, &crate::util::alert::blocking_alert).await;
    });
}
