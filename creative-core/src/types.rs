use serde::{Deserialize, Serialize};

/// One ad creative with its aggregated performance numbers, as supplied by
/// the dashboard's data layer. Field names follow the camelCase JSON export.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreativeRecord {
    pub id: Option<String>,
    /// Reporting date (YYYY-MM-DD)
    pub date: String,
    pub campaign_name: String,
    pub ad_group_name: String,
    pub ad_name: String,
    pub ad_text: String,
    pub thumbnail_url: Option<String>,
    /// Embeddable player URL
    pub media_url: Option<String>,

    pub impressions: u64,
    pub clicks: u64,
    /// Spend in the account currency
    pub cost: f64,
    pub cpc: f64,
    pub cpm: f64,
    pub reach: u64,
    pub frequency: f64,
    pub results: u64,

    pub video_views: u64,
    pub two_second_video_views: u64,
    pub video_views_25: u64,
    pub video_views_50: u64,
    pub video_views_75: u64,
    pub video_views_100: u64,

    pub profile_visits: u64,
    pub paid_likes: u64,
    pub paid_comments: u64,
    pub paid_shares: u64,
    pub paid_follows: u64,
}

impl CreativeRecord {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("creative parse: {e}"))
    }

    /// Ad name, falling back to the id when the name is blank.
    pub fn display_name(&self) -> String {
        let name = self.ad_name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
        match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => format!("Ad {id}"),
            _ => "Untitled ad".to_string(),
        }
    }

    pub fn media_url(&self) -> Option<&str> {
        non_empty(self.media_url.as_deref())
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        non_empty(self.thumbnail_url.as_deref())
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a list of records from either a bare JSON array or an object with a
/// `creatives` array.
pub fn parse_records(json: &str) -> Result<Vec<CreativeRecord>, String> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| format!("creatives parse: {e}"))?;
    let list = match &value {
        serde_json::Value::Array(_) => value,
        serde_json::Value::Object(map) => map
            .get("creatives")
            .cloned()
            .ok_or("No creatives array in document")?,
        _ => return Err("Expected an array of creatives".to_string()),
    };
    serde_json::from_value(list).map_err(|e| format!("creatives parse: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{
            "adName": "Spring promo",
            "campaignName": "Q2",
            "videoViews25": 800,
            "videoViews100": 120,
            "twoSecondVideoViews": 900,
            "mediaUrl": "https://example.com/embed/1",
            "cost": 12.5
        }"#;
        let rec = CreativeRecord::from_json(json).unwrap();
        assert_eq!(rec.ad_name, "Spring promo");
        assert_eq!(rec.campaign_name, "Q2");
        assert_eq!(rec.video_views_25, 800);
        assert_eq!(rec.video_views_100, 120);
        assert_eq!(rec.two_second_video_views, 900);
        assert_eq!(rec.media_url(), Some("https://example.com/embed/1"));
        assert_eq!(rec.cost, 12.5);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let rec = CreativeRecord::from_json(r#"{"adName": "Bare"}"#).unwrap();
        assert_eq!(rec.impressions, 0);
        assert_eq!(rec.video_views, 0);
        assert_eq!(rec.cost, 0.0);
        assert!(rec.thumbnail_url().is_none());
    }

    #[test]
    fn test_malformed_record_is_an_error() {
        assert!(CreativeRecord::from_json(r#"{"impressions": "lots"}"#).is_err());
        assert!(CreativeRecord::from_json("not json").is_err());
    }

    #[test]
    fn test_blank_urls_are_absent() {
        let rec = CreativeRecord {
            media_url: Some("  ".into()),
            thumbnail_url: Some(String::new()),
            ..Default::default()
        };
        assert!(rec.media_url().is_none());
        assert!(rec.thumbnail_url().is_none());
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut rec = CreativeRecord::default();
        assert_eq!(rec.display_name(), "Untitled ad");
        rec.id = Some("7301".into());
        assert_eq!(rec.display_name(), "Ad 7301");
        rec.ad_name = "  Launch teaser ".into();
        assert_eq!(rec.display_name(), "Launch teaser");
    }

    #[test]
    fn test_parse_records_array_and_wrapped() {
        let arr = parse_records(r#"[{"adName": "A"}, {"adName": "B"}]"#).unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[1].ad_name, "B");

        let wrapped = parse_records(r#"{"config": {}, "creatives": [{"adName": "C"}]}"#).unwrap();
        assert_eq!(wrapped.len(), 1);
        assert_eq!(wrapped[0].ad_name, "C");

        assert!(parse_records(r#"{"items": []}"#).is_err());
        assert!(parse_records("42").is_err());
    }
}
