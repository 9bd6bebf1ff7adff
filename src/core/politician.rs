use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Political affiliation as published in the source data.
///
/// Only `DEMOCRAT` and `REPUBLICAN` are recognized. Any other value is kept
/// verbatim in `Other` and is folded into the non-Democrat bucket by the
/// tally and the plot colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Affiliation {
    Democrat,
    Republican,
    Other(String),
}

impl Affiliation {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Democrat => "DEMOCRAT",
            Self::Republican => "REPUBLICAN",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_democrat(&self) -> bool {
        matches!(self, Self::Democrat)
    }

    pub fn is_republican(&self) -> bool {
        matches!(self, Self::Republican)
    }
}

impl From<String> for Affiliation {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "DEMOCRAT" => Self::Democrat,
            "REPUBLICAN" => Self::Republican,
            _ => Self::Other(raw),
        }
    }
}

impl From<Affiliation> for String {
    fn from(affiliation: Affiliation) -> Self {
        match affiliation {
            Affiliation::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A politician record from the scraped source list.
///
/// Only the fields the pipeline reads are typed. Everything else, including
/// `primaryRole`, `profilePictureUrlDimensions` and the other passthrough
/// metadata, stays in `extra` exactly as it was read and is written back
/// unchanged. `age` is the only field curation writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Politician {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub political_affiliation_category: Option<Affiliation>,
    #[serde(default)]
    pub computed_stance_score: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Politician {
    /// Minimal record, mostly useful for tests and fixtures.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            age: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            political_affiliation_category: None,
            computed_stance_score: None,
            extra: Map::new(),
        }
    }

    pub fn with_affiliation(mut self, affiliation: Affiliation) -> Self {
        self.political_affiliation_category = Some(affiliation);
        self
    }

    pub fn with_stance_score(mut self, score: Option<f64>) -> Self {
        self.computed_stance_score = score;
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// "First Last", used in log lines.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_democrat(&self) -> bool {
        self.political_affiliation_category
            .as_ref()
            .is_some_and(Affiliation::is_democrat)
    }

    pub fn is_republican(&self) -> bool {
        self.political_affiliation_category
            .as_ref()
            .is_some_and(Affiliation::is_republican)
    }

    pub fn has_stance_score(&self) -> bool {
        self.computed_stance_score.is_some()
    }

    /// Untyped passthrough field such as `slug` or `primaryRole`.
    pub fn passthrough(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_affiliation_round_trips_unknown_values() {
        let parsed: Affiliation = serde_json::from_value(json!("INDEPENDENT")).unwrap();
        assert_eq!(parsed, Affiliation::Other("INDEPENDENT".into()));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json!("INDEPENDENT"));
        assert!(!parsed.is_democrat());
        assert!(!parsed.is_republican());
    }

    #[test]
    fn test_deserialize_source_record() {
        let raw = json!({
            "id": "1",
            "slug": "ana-silva",
            "firstName": "Ana",
            "lastName": "Silva",
            "firstNickname": "",
            "nameSuffix": "",
            "politicalAffiliationCategory": "DEMOCRAT",
            "computedStanceScore": 0.8,
            "manuallyOverriddenStanceScore": null,
            "profilePictureUrl": "https://example.org/ana.png",
            "profilePictureUrlDimensions": { "width": 400, "height": 400 },
            "promotedPositioning": null,
            "primaryRole": {
                "dateEnd": "2027-01-03",
                "dateStart": "2021-01-03",
                "id": "role-1",
                "primaryCity": "",
                "primaryCountryCode": "US",
                "primaryDistrict": "7",
                "primaryState": "CA",
                "roleCategory": "CONGRESS",
                "status": "HELD",
                "title": "US House of Representatives"
            }
        });

        let politician: Politician = serde_json::from_value(raw).unwrap();
        assert_eq!(politician.display_name(), "Ana Silva");
        assert!(politician.is_democrat());
        assert_eq!(politician.computed_stance_score, Some(0.8));
        assert_eq!(politician.age, None);
        assert_eq!(
            politician
                .passthrough("primaryRole")
                .and_then(|role| role.get("primaryState")),
            Some(&json!("CA"))
        );
        assert_eq!(politician.passthrough("slug"), Some(&json!("ana-silva")));
        assert_eq!(
            politician.passthrough("manuallyOverriddenStanceScore"),
            Some(&Value::Null)
        );
    }

    #[test]
    fn test_null_stance_score_is_written_back_as_null() {
        let politician = Politician::new("2", "Bob", "Lima")
            .with_affiliation(Affiliation::Republican)
            .with_stance_score(None);

        let value = serde_json::to_value(&politician).unwrap();
        assert_eq!(value["computedStanceScore"], Value::Null);
        assert!(value.get("age").is_none());
        assert_eq!(value["politicalAffiliationCategory"], json!("REPUBLICAN"));
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let raw = json!({
            "id": "3",
            "firstName": "Cid",
            "lastName": "Moreira",
            "computedStanceScore": -1.5,
            "twitterHandle": "@cid",
            "age": 71
        });

        let politician: Politician = serde_json::from_value(raw).unwrap();
        assert_eq!(politician.age, Some(71));
        assert_eq!(politician.extra.get("twitterHandle"), Some(&json!("@cid")));

        let written = serde_json::to_value(&politician).unwrap();
        assert_eq!(written["twitterHandle"], json!("@cid"));
        assert_eq!(written["age"], json!(71));
    }

    #[test]
    fn test_passthrough_metadata_is_written_back_verbatim() {
        let raw = json!({
            "id": "4",
            "firstName": "Dora",
            "lastName": "Reis",
            "politicalAffiliationCategory": "DEMOCRAT",
            "computedStanceScore": 0.25,
            "profilePictureUrlDimensions": { "width": 400.5, "height": "auto" },
            "promotedPositioning": [1, "two"],
            "primaryRole": { "title": "Senator", "jurisdiction": "CA" }
        });

        let mut politician: Politician = serde_json::from_value(raw.clone()).unwrap();
        let written = serde_json::to_value(&politician).unwrap();
        assert_eq!(written, raw);

        politician.age = Some(52);
        let written = serde_json::to_value(&politician).unwrap();
        assert_eq!(written["primaryRole"]["jurisdiction"], json!("CA"));
        assert_eq!(written["profilePictureUrlDimensions"]["width"], json!(400.5));
        assert_eq!(written["age"], json!(52));
        assert!(written.get("slug").is_none());
        assert!(written.get("nameSuffix").is_none());
    }
}
