//! Records fetched from the portfolio data source.
//!
//! Field names follow the wire format (camelCase JSON). These are read-only
//! inputs to the population pass; all mutation happens on the document tree.

use serde::{Deserialize, Serialize};

/// JSON envelope both data-source endpoints wrap their payload in.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub job: String,
    pub description: String,
    pub skill_description: Vec<String>,
    pub licenses: Vec<String>,
    pub pr: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    pub organization: String,
    pub start_month: YearMonth,
    /// `None` means the engagement is ongoing and renders as the fixed
    /// ongoing label, never as a date.
    pub end_month: Option<YearMonth>,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub title: String,
    pub start_month: YearMonth,
    pub end_month: Option<YearMonth>,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    /// 1–12.
    pub month: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_envelope_deserializes_camel_case() {
        let json = r#"{
            "data": {
                "job": "バックエンドエンジニア",
                "description": "Webアプリケーションの設計・開発",
                "skillDescription": ["Rust", "TypeScript"],
                "licenses": ["基本情報技術者"],
                "pr": "自走できます"
            }
        }"#;
        let envelope: Envelope<Profile> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.job, "バックエンドエンジニア");
        assert_eq!(envelope.data.skill_description.len(), 2);
        assert_eq!(envelope.data.licenses, vec!["基本情報技術者"]);
    }

    #[test]
    fn test_history_null_end_month_is_ongoing() {
        let json = r#"{
            "data": [{
                "organization": "株式会社Example",
                "startMonth": {"year": 2021, "month": 4},
                "endMonth": null,
                "products": [{
                    "title": "社内ポータル",
                    "startMonth": {"year": 2021, "month": 6},
                    "endMonth": {"year": 2022, "month": 3},
                    "description": ["API設計"],
                    "technologies": ["Rust"]
                }]
            }]
        }"#;
        let envelope: Envelope<Vec<History>> = serde_json::from_str(json).unwrap();
        let history = &envelope.data[0];
        assert!(history.end_month.is_none());
        assert_eq!(history.start_month, YearMonth { year: 2021, month: 4 });
        assert_eq!(
            history.products[0].end_month,
            Some(YearMonth { year: 2022, month: 3 })
        );
    }

    #[test]
    fn test_history_missing_end_month_field_is_ongoing() {
        // Some sources omit the field instead of sending null.
        let json = r#"{
            "organization": "Example",
            "startMonth": {"year": 2020, "month": 1},
            "products": []
        }"#;
        let history: History = serde_json::from_str(json).unwrap();
        assert!(history.end_month.is_none());
        assert!(history.products.is_empty());
    }
}
