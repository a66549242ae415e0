//! Campaign list state, row actions, and the reload/publish/pause flows.
//!
//! DESIGN
//! ======
//! The list never patches rows locally. Every successful action is followed
//! by a full reload, so rows always show the backend's latest answer.
//! `action_in_progress` tracks a single row: starting a second action
//! retargets it, and whichever action finishes first clears it.

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use super::StateCell;
use crate::net::api::{CampaignApi, PAUSE_FAILED, PUBLISH_FAILED, RequestError};
use crate::net::types::{Campaign, CampaignStatus};

/// Fallback alert text when a failed load carries no message.
pub const LOAD_FAILED: &str = "Failed to load campaigns";

/// Backend error code for an ads account still waiting on API access.
pub const DEVELOPER_TOKEN_NOT_APPROVED: &str = "DEVELOPER_TOKEN_NOT_APPROVED";

/// Alert shown instead of the raw [`DEVELOPER_TOKEN_NOT_APPROVED`] error.
pub const PUBLISHING_PENDING_APPROVAL: &str =
    "Publishing is disabled until Google Ads developer access is approved.";

/// Name, Objective, Status, Google ID, action.
pub const COLUMN_COUNT: usize = 5;

/// State owned by the campaign list view.
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignListState {
    pub campaigns: Vec<Campaign>,
    pub loading: bool,
    pub action_in_progress: Option<String>,
}

impl Default for CampaignListState {
    fn default() -> Self {
        // The first fetch starts on mount.
        Self { campaigns: Vec::new(), loading: true, action_in_progress: None }
    }
}

impl CampaignListState {
    /// Whether the "No campaigns found" row replaces the table body.
    #[must_use]
    pub fn shows_placeholder(&self) -> bool {
        !self.loading && self.campaigns.is_empty()
    }
}

/// Whether the tracked action marker `current` names `campaign_id`.
#[must_use]
pub fn is_in_progress(current: Option<&str>, campaign_id: &str) -> bool {
    current == Some(campaign_id)
}

/// Status transition a row can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Publish,
    Pause,
}

impl RowAction {
    /// Publish for drafts, Pause for published campaigns, nothing otherwise.
    #[must_use]
    pub fn for_status(status: &CampaignStatus) -> Option<Self> {
        match status {
            CampaignStatus::Draft => Some(Self::Publish),
            CampaignStatus::Published => Some(Self::Pause),
            CampaignStatus::Paused | CampaignStatus::Other(_) => None,
        }
    }

    #[must_use]
    pub fn label(self, in_progress: bool) -> &'static str {
        match (self, in_progress) {
            (Self::Publish, false) => "Publish",
            (Self::Publish, true) => "Publishing…",
            (Self::Pause, false) => "Pause",
            (Self::Pause, true) => "Pausing…",
        }
    }

    /// Alert text for a failed action.
    #[must_use]
    pub fn failure_message(self, err: &RequestError) -> String {
        match self {
            Self::Publish if err.message().contains(DEVELOPER_TOKEN_NOT_APPROVED) => {
                PUBLISHING_PENDING_APPROVAL.to_owned()
            }
            Self::Publish => alert_message(err, PUBLISH_FAILED),
            Self::Pause => alert_message(err, PAUSE_FAILED),
        }
    }
}

/// The error's own message, or `fallback` when it is empty.
#[must_use]
pub fn alert_message(err: &RequestError, fallback: &str) -> String {
    if err.message().is_empty() { fallback.to_owned() } else { err.message().to_owned() }
}

/// Fetch every campaign and replace the held list.
///
/// On failure the previous rows stay and `alert` receives the message.
/// Loading is cleared either way.
pub async fn reload_campaigns<A, S>(api: &A, state: &S, alert: &impl Fn(&str))
where
    A: CampaignApi + ?Sized,
    S: StateCell<CampaignListState>,
{
    state.update_state(|s| s.loading = true);
    match api.get_campaigns().await {
        Ok(campaigns) => {
            state.update_state(|s| {
                s.campaigns = campaigns;
                s.loading = false;
            });
        }
        Err(err) => {
            alert(&alert_message(&err, LOAD_FAILED));
            state.update_state(|s| s.loading = false);
        }
    }
}

/// Run `action` for one row, then reload if the backend accepted it.
///
/// Returns whether the action succeeded.
pub async fn run_row_action<A, S>(
    api: &A,
    state: &S,
    campaign_id: &str,
    action: RowAction,
    alert: &impl Fn(&str),
) -> bool
where
    A: CampaignApi + ?Sized,
    S: StateCell<CampaignListState>,
{
    state.update_state(|s| s.action_in_progress = Some(campaign_id.to_owned()));

    let result = match action {
        RowAction::Publish => api.publish_campaign(campaign_id).await,
        RowAction::Pause => api.pause_campaign(campaign_id).await,
    };
    let succeeded = match result {
        Ok(_) => {
            reload_campaigns(api, state, alert).await;
            true
        }
        Err(err) => {
            alert(&action.failure_message(&err));
            false
        }
    };

    state.update_state(|s| s.action_in_progress = None);
    succeeded
}
