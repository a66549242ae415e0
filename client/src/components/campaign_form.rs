//! Campaign creation form.

use leptos::prelude::*;

use crate::net::types::{CampaignField, Objective};
use crate::state::creation::CreationState;

/// Form collecting every campaign field; calls `on_created` after a
/// successful submit.
///
/// Required inputs rely on the browser's constraint validation; nothing else
/// is checked before the request.
#[component]
pub fn CampaignForm(on_created: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(CreationState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpCampaignApi::from_config();
            crate::state::creation::submit_campaign(&api, &state, || on_created.run(())).await;
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = on_created;
    };

    let error = move || {
        state
            .with(|s| s.visible_error().map(str::to_owned))
            .map(|message| view! { <p class="error">{message}</p> })
    };

    view! {
        <form class="card" on:submit=on_submit>
            <h2>"Create Campaign"</h2>

            {error}

            <div class="section">
                <h3>"Campaign Info"</h3>

                <TextInput state=state field=CampaignField::Name placeholder="Campaign name" required=true/>

                <div class="row">
                    <select
                        name=CampaignField::Objective.name()
                        prop:value=move || field_value(state, CampaignField::Objective)
                        on:change=move |ev| state.update(|s| s.edit(CampaignField::Objective, event_target_value(&ev)))
                    >
                        {Objective::ALL
                            .into_iter()
                            .map(|objective| {
                                view! { <option value=objective.as_str()>{objective.as_str()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>

                    <TextInput
                        state=state
                        field=CampaignField::DailyBudget
                        input_type="number"
                        placeholder="Daily budget"
                        required=true
                    />
                </div>

                <div class="row">
                    <TextInput state=state field=CampaignField::StartDate input_type="date" required=true/>
                    <TextInput state=state field=CampaignField::EndDate input_type="date"/>
                </div>
            </div>

            <div class="section">
                <h3>"Ad Details"</h3>

                <TextInput state=state field=CampaignField::AdGroupName placeholder="Ad group name" required=true/>
                <TextInput state=state field=CampaignField::AdHeadline placeholder="Ad headline" required=true/>

                <textarea
                    name=CampaignField::AdDescription.name()
                    placeholder="Ad description"
                    required=true
                    prop:value=move || field_value(state, CampaignField::AdDescription)
                    on:input=move |ev| state.update(|s| s.edit(CampaignField::AdDescription, event_target_value(&ev)))
                ></textarea>

                <TextInput state=state field=CampaignField::AssetUrl placeholder="Landing page URL"/>
            </div>

            <button class="primary" type="submit" disabled=move || state.with(|s| s.loading)>
                {move || state.with(CreationState::submit_label)}
            </button>
        </form>
    }
}

/// A single `<input>` bound to one form field.
#[component]
fn TextInput(
    state: RwSignal<CreationState>,
    field: CampaignField,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            name=field.name()
            placeholder=placeholder
            required=required
            prop:value=move || field_value(state, field)
            on:input=move |ev| state.update(|s| s.edit(field, event_target_value(&ev)))
        />
    }
}

fn field_value(state: RwSignal<CreationState>, field: CampaignField) -> String {
    state.with(|s| s.fields.get(field).to_owned())
}
