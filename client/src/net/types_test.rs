use super::*;

fn list_item(google_campaign_id: serde_json::Value) -> Campaign {
    serde_json::from_value(serde_json::json!({
        "id": "c-1",
        "name": "Spring Sale",
        "objective": "Sales",
        "campaign_type": "Search",
        "daily_budget": 50,
        "status": "PUBLISHED",
        "google_campaign_id": google_campaign_id,
        "created_at": "2024-01-01T09:30:00"
    }))
    .unwrap()
}

// =============================================================
// CampaignStatus
// =============================================================

#[test]
fn status_parses_known_values() {
    assert_eq!(CampaignStatus::parse("DRAFT"), CampaignStatus::Draft);
    assert_eq!(CampaignStatus::parse("PUBLISHED"), CampaignStatus::Published);
    assert_eq!(CampaignStatus::parse("PAUSED"), CampaignStatus::Paused);
}

#[test]
fn status_keeps_unknown_values_verbatim() {
    let status = CampaignStatus::parse("REMOVED");
    assert_eq!(status, CampaignStatus::Other("REMOVED".to_owned()));
    assert_eq!(status.to_string(), "REMOVED");
}

#[test]
fn status_match_is_case_sensitive() {
    assert_eq!(CampaignStatus::parse("draft"), CampaignStatus::Other("draft".to_owned()));
}

#[test]
fn status_badge_class_lowercases() {
    assert_eq!(CampaignStatus::Published.badge_class(), "badge published");
    assert_eq!(CampaignStatus::Other("ENDED".to_owned()).badge_class(), "badge ended");
}

#[test]
fn status_decodes_from_backend_string() {
    let status: CampaignStatus = serde_json::from_str(r#""PAUSED""#).unwrap();
    assert_eq!(status, CampaignStatus::Paused);
}

// =============================================================
// Campaign
// =============================================================

#[test]
fn campaign_decodes_list_payload() {
    let campaign = list_item(serde_json::json!("customers/1/campaigns/2"));
    assert_eq!(campaign.id, "c-1");
    assert_eq!(campaign.objective, "Sales");
    assert_eq!(campaign.daily_budget, Some(50.0));
    assert_eq!(campaign.status, CampaignStatus::Published);
    assert!(campaign.start_date.is_none());
    assert!(campaign.ad_headline.is_none());
}

#[test]
fn google_id_label_shows_dash_when_null() {
    let campaign = list_item(serde_json::Value::Null);
    assert_eq!(campaign.google_id_label(), "—");
}

#[test]
fn google_id_label_shows_dash_when_empty() {
    let campaign = list_item(serde_json::json!(""));
    assert_eq!(campaign.google_id_label(), MISSING_GOOGLE_ID);
}

#[test]
fn google_id_label_shows_identifier() {
    let campaign = list_item(serde_json::json!("123"));
    assert_eq!(campaign.google_id_label(), "123");
}

#[test]
fn google_id_label_shows_dash_when_key_missing() {
    let campaign: Campaign = serde_json::from_value(serde_json::json!({
        "id": "c-2",
        "name": "Draft",
        "objective": "Leads",
        "status": "DRAFT"
    }))
    .unwrap();
    assert_eq!(campaign.google_id_label(), "—");
}

#[test]
fn ack_decodes_create_response() {
    let ack: CampaignAck = serde_json::from_str(r#"{"id":"c-9","status":"DRAFT"}"#).unwrap();
    assert_eq!(ack.id.as_deref(), Some("c-9"));
    assert_eq!(ack.status, Some(CampaignStatus::Draft));
    assert!(ack.google_campaign_id.is_none());
}

#[test]
fn ack_tolerates_missing_and_extra_fields() {
    let ack: CampaignAck = serde_json::from_str(r#"{"id":"c-1","name":"Sale","objective":"Sales"}"#).unwrap();
    assert_eq!(ack.id.as_deref(), Some("c-1"));
    assert!(ack.status.is_none());

    let empty: CampaignAck = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, CampaignAck::default());
}

// =============================================================
// CampaignFields
// =============================================================

#[test]
fn fields_default_to_traffic_search() {
    let fields = CampaignFields::default();
    assert_eq!(fields.objective, "Traffic");
    assert_eq!(fields.campaign_type, "Search");
    assert!(fields.name.is_empty());
    assert!(fields.daily_budget.is_empty());
}

#[test]
fn fields_set_touches_only_one_field() {
    let mut fields = CampaignFields::default();
    fields.set(CampaignField::AdHeadline, "Big savings");
    let before = fields.clone();

    fields.set(CampaignField::DailyBudget, "50");

    for field in CampaignField::ALL {
        if field == CampaignField::DailyBudget {
            assert_eq!(fields.get(field), "50");
        } else {
            assert_eq!(fields.get(field), before.get(field), "{} changed", field.name());
        }
    }
}

#[test]
fn fields_serialize_with_wire_keys() {
    let value = serde_json::to_value(CampaignFields::default()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), CampaignField::ALL.len());
    for field in CampaignField::ALL {
        assert!(object.contains_key(field.name()), "missing {}", field.name());
    }
    assert_eq!(object["daily_budget"], serde_json::json!(""));
}

#[test]
fn objective_options_in_select_order() {
    let labels: Vec<_> = Objective::ALL.iter().map(|o| o.as_str()).collect();
    assert_eq!(labels, ["Traffic", "Leads", "Sales"]);
}
