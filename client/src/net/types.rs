//! Wire types exchanged with the campaign backend.
//!
//! DESIGN
//! ======
//! The backend owns every campaign record. The UI decodes what the REST
//! endpoints return and encodes the creation form as a flat record of
//! strings, exactly as the inputs hold them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Campaign type sent with every creation request. Not user-editable.
pub const SEARCH_CAMPAIGN_TYPE: &str = "Search";

/// Placeholder shown for campaigns without an ads-platform identifier.
pub const MISSING_GOOGLE_ID: &str = "—";

/// Lifecycle stage reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CampaignStatus {
    /// Created locally, not yet pushed to the ads platform.
    Draft,
    /// Live on the ads platform.
    Published,
    /// Paused on the ads platform.
    Paused,
    /// Any other backend-defined status, kept verbatim.
    Other(String),
}

impl CampaignStatus {
    /// Decode the backend's status string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "DRAFT" => Self::Draft,
            "PUBLISHED" => Self::Published,
            "PAUSED" => Self::Paused,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Status string as the backend spells it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Paused => "PAUSED",
            Self::Other(raw) => raw,
        }
    }

    /// CSS classes for the status badge, e.g. `badge draft`.
    #[must_use]
    pub fn badge_class(&self) -> String {
        format!("badge {}", self.as_str().to_lowercase())
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CampaignStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Campaign goal offered by the creation form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Objective {
    #[default]
    Traffic,
    Leads,
    Sales,
}

impl Objective {
    /// Options in the order the select lists them.
    pub const ALL: [Self; 3] = [Self::Traffic, Self::Leads, Self::Sales];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Traffic => "Traffic",
            Self::Leads => "Leads",
            Self::Sales => "Sales",
        }
    }
}

/// A campaign as returned by `GET /campaigns`.
///
/// The list payload omits schedule and ad details, so those are optional.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Campaign {
    /// Backend identifier (UUID string), opaque to the UI.
    pub id: String,
    pub name: String,
    /// Objective as stored by the backend (normally one of [`Objective`]).
    pub objective: String,
    #[serde(default)]
    pub campaign_type: Option<String>,
    #[serde(default)]
    pub daily_budget: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub ad_group_name: Option<String>,
    #[serde(default)]
    pub ad_headline: Option<String>,
    #[serde(default)]
    pub ad_description: Option<String>,
    #[serde(default)]
    pub asset_url: Option<String>,
    pub status: CampaignStatus,
    /// Ads-platform resource name, set once published.
    #[serde(default)]
    pub google_campaign_id: Option<String>,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Campaign {
    /// Text for the Google ID column; `—` when the campaign has none.
    #[must_use]
    pub fn google_id_label(&self) -> &str {
        match self.google_campaign_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => MISSING_GOOGLE_ID,
        }
    }
}

/// Short record returned by create, publish, and pause.
///
/// Informational only: any JSON body on a success status counts as success,
/// so every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CampaignAck {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<CampaignStatus>,
    #[serde(default)]
    pub google_campaign_id: Option<String>,
}

/// One input of the creation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignField {
    Name,
    Objective,
    CampaignType,
    DailyBudget,
    StartDate,
    EndDate,
    AdGroupName,
    AdHeadline,
    AdDescription,
    AssetUrl,
}

impl CampaignField {
    /// Every field, in wire order.
    #[cfg(test)]
    pub const ALL: [Self; 10] = [
        Self::Name,
        Self::Objective,
        Self::CampaignType,
        Self::DailyBudget,
        Self::StartDate,
        Self::EndDate,
        Self::AdGroupName,
        Self::AdHeadline,
        Self::AdDescription,
        Self::AssetUrl,
    ];

    /// JSON key and HTML `name` attribute for this field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Objective => "objective",
            Self::CampaignType => "campaign_type",
            Self::DailyBudget => "daily_budget",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::AdGroupName => "ad_group_name",
            Self::AdHeadline => "ad_headline",
            Self::AdDescription => "ad_description",
            Self::AssetUrl => "asset_url",
        }
    }
}

/// The creation form record, POSTed verbatim to `/campaigns`.
///
/// Every value is the raw input string; the backend parses budgets and dates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CampaignFields {
    pub name: String,
    pub objective: String,
    pub campaign_type: String,
    pub daily_budget: String,
    pub start_date: String,
    pub end_date: String,
    pub ad_group_name: String,
    pub ad_headline: String,
    pub ad_description: String,
    pub asset_url: String,
}

impl Default for CampaignFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            objective: Objective::default().as_str().to_owned(),
            campaign_type: SEARCH_CAMPAIGN_TYPE.to_owned(),
            daily_budget: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            ad_group_name: String::new(),
            ad_headline: String::new(),
            ad_description: String::new(),
            asset_url: String::new(),
        }
    }
}

impl CampaignFields {
    #[must_use]
    pub fn get(&self, field: CampaignField) -> &str {
        match field {
            CampaignField::Name => &self.name,
            CampaignField::Objective => &self.objective,
            CampaignField::CampaignType => &self.campaign_type,
            CampaignField::DailyBudget => &self.daily_budget,
            CampaignField::StartDate => &self.start_date,
            CampaignField::EndDate => &self.end_date,
            CampaignField::AdGroupName => &self.ad_group_name,
            CampaignField::AdHeadline => &self.ad_headline,
            CampaignField::AdDescription => &self.ad_description,
            CampaignField::AssetUrl => &self.asset_url,
        }
    }

    /// Replace one field, leaving the rest untouched.
    pub fn set(&mut self, field: CampaignField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    fn slot_mut(&mut self, field: CampaignField) -> &mut String {
        match field {
            CampaignField::Name => &mut self.name,
            CampaignField::Objective => &mut self.objective,
            CampaignField::CampaignType => &mut self.campaign_type,
            CampaignField::DailyBudget => &mut self.daily_budget,
            CampaignField::StartDate => &mut self.start_date,
            CampaignField::EndDate => &mut self.end_date,
            CampaignField::AdGroupName => &mut self.ad_group_name,
            CampaignField::AdHeadline => &mut self.ad_headline,
            CampaignField::AdDescription => &mut self.ad_description,
            CampaignField::AssetUrl => &mut self.asset_url,
        }
    }
}
