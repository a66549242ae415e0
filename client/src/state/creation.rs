//! Creation form state and its submit flow.

#[cfg(test)]
#[path = "creation_test.rs"]
mod creation_test;

use super::StateCell;
use crate::net::api::{CampaignApi, RequestError};
use crate::net::types::{CampaignAck, CampaignField, CampaignFields};

/// State owned by the creation form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreationState {
    pub fields: CampaignFields,
    pub loading: bool,
    /// Message from the last failed submission, shown above the form.
    pub error: Option<String>,
}

impl CreationState {
    /// Record one input change.
    pub fn edit(&mut self, field: CampaignField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Enter the submitting state and hand out the record to send.
    ///
    /// Returns `None` while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<CampaignFields> {
        if self.loading {
            return None;
        }
        self.error = None;
        self.loading = true;
        Some(self.fields.clone())
    }

    /// Leave the submitting state, keeping the error message on failure.
    pub fn finish_submit(&mut self, result: &Result<CampaignAck, RequestError>) {
        self.loading = false;
        if let Err(err) = result {
            self.error = Some(err.message().to_owned());
        }
    }

    /// Error text to render, if any.
    #[must_use]
    pub fn visible_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Creating…" } else { "Create Campaign" }
    }
}

/// Submit the form record and report completion.
///
/// `on_created` runs once, after loading has been cleared, and only when the
/// backend accepted the campaign. Returns whether it ran.
pub async fn submit_campaign<A, S>(api: &A, state: &S, on_created: impl FnOnce()) -> bool
where
    A: CampaignApi + ?Sized,
    S: StateCell<CreationState>,
{
    let Some(fields) = state.update_state(CreationState::begin_submit).flatten() else {
        return false;
    };

    let result = api.create_campaign(&fields).await;
    let created = result.is_ok();
    state.update_state(|s| s.finish_submit(&result));

    if created {
        on_created();
    }
    created
}
