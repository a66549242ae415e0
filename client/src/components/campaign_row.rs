//! One row of the campaign table.

use leptos::prelude::*;

use crate::net::types::Campaign;
use crate::state::campaigns::{RowAction, is_in_progress};

/// Table row with the campaign summary and its status-specific action.
///
/// `action_in_progress` is the list's single tracked row; the button is
/// disabled and relabelled only while it names this campaign.
#[component]
pub fn CampaignRow(
    campaign: Campaign,
    #[prop(into)] action_in_progress: Signal<Option<String>>,
    on_action: Callback<(String, RowAction)>,
) -> impl IntoView {
    let action = RowAction::for_status(&campaign.status);
    let badge_class = campaign.status.badge_class();
    let status_label = campaign.status.to_string();
    let google_id = campaign.google_id_label().to_owned();
    let id = campaign.id;

    let button = action.map(|action| {
        let in_progress = {
            let id = id.clone();
            move || action_in_progress.with(|current| is_in_progress(current.as_deref(), &id))
        };
        let label = {
            let in_progress = in_progress.clone();
            move || action.label(in_progress())
        };
        view! {
            <button disabled=in_progress on:click=move |_| on_action.run((id.clone(), action))>
                {label}
            </button>
        }
    });

    view! {
        <tr>
            <td>{campaign.name}</td>
            <td>{campaign.objective}</td>
            <td>
                <span class=badge_class>{status_label}</span>
            </td>
            <td class="mono">{google_id}</td>
            <td>{button}</td>
        </tr>
    }
}
