//! In-memory [`CampaignApi`] for view-model tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::api::{CampaignApi, RequestError};
use super::types::{Campaign, CampaignAck, CampaignFields, CampaignStatus};

/// A request the mock received, in call order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Create(CampaignFields),
    List,
    Publish(String),
    Pause(String),
}

/// Replays queued results; an empty queue answers with an error.
#[derive(Default)]
pub(crate) struct MockCampaignApi {
    create_results: RefCell<VecDeque<Result<CampaignAck, RequestError>>>,
    list_results: RefCell<VecDeque<Result<Vec<Campaign>, RequestError>>>,
    action_results: RefCell<VecDeque<Result<CampaignAck, RequestError>>>,
    calls: RefCell<Vec<Call>>,
}

impl MockCampaignApi {
    pub(crate) fn with_create(self, result: Result<CampaignAck, RequestError>) -> Self {
        self.create_results.borrow_mut().push_back(result);
        self
    }

    pub(crate) fn with_list(self, result: Result<Vec<Campaign>, RequestError>) -> Self {
        self.list_results.borrow_mut().push_back(result);
        self
    }

    pub(crate) fn with_action(self, result: Result<CampaignAck, RequestError>) -> Self {
        self.action_results.borrow_mut().push_back(result);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.calls.borrow().iter().filter(|call| **call == Call::List).count()
    }

    fn next<T>(queue: &RefCell<VecDeque<Result<T, RequestError>>>) -> Result<T, RequestError> {
        queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::new("unexpected request")))
    }
}

#[async_trait::async_trait(?Send)]
impl CampaignApi for MockCampaignApi {
    async fn create_campaign(&self, fields: &CampaignFields) -> Result<CampaignAck, RequestError> {
        self.calls.borrow_mut().push(Call::Create(fields.clone()));
        Self::next(&self.create_results)
    }

    async fn get_campaigns(&self) -> Result<Vec<Campaign>, RequestError> {
        self.calls.borrow_mut().push(Call::List);
        Self::next(&self.list_results)
    }

    async fn publish_campaign(&self, campaign_id: &str) -> Result<CampaignAck, RequestError> {
        self.calls.borrow_mut().push(Call::Publish(campaign_id.to_owned()));
        Self::next(&self.action_results)
    }

    async fn pause_campaign(&self, campaign_id: &str) -> Result<CampaignAck, RequestError> {
        self.calls.borrow_mut().push(Call::Pause(campaign_id.to_owned()));
        Self::next(&self.action_results)
    }
}

/// A list row with only the fields the list endpoint returns.
pub(crate) fn campaign(id: &str, status: CampaignStatus) -> Campaign {
    Campaign {
        id: id.to_owned(),
        name: format!("Campaign {id}"),
        objective: "Traffic".to_owned(),
        campaign_type: Some("Search".to_owned()),
        daily_budget: Some(25.0),
        start_date: None,
        end_date: None,
        ad_group_name: None,
        ad_headline: None,
        ad_description: None,
        asset_url: None,
        status,
        google_campaign_id: None,
        created_at: None,
    }
}

pub(crate) fn ack(id: &str, status: CampaignStatus) -> CampaignAck {
    CampaignAck { id: Some(id.to_owned()), status: Some(status), google_campaign_id: None }
}
