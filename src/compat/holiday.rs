use serde::Serialize;
use serde_json::Value;

use super::fields::Fields;
use super::Normalize;
use crate::entity::Entity;
use crate::error::Result;
use crate::resolve::Probe;
use crate::version::SchemaVersion;

/// National holiday; one shape in every version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub title: String,
    pub date: String,
    pub day_of_week: i64,
    pub day_of_week_text: String,
}

impl Normalize for Holiday {
    const ENTITY: Entity = Entity::Holiday;
    const PROBE: Probe = Probe::Introduction;

    fn normalize_as(payload: &Value, _version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of(Self::ENTITY.name(), payload)?;
        Ok(Self {
            title: f.required("title")?,
            date: f.required("date")?,
            day_of_week: f.required("day_of_week")?,
            day_of_week_text: f.required("day_of_week_text")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidaySearchResult {
    pub data: Vec<Holiday>,
}

impl Normalize for HolidaySearchResult {
    const ENTITY: Entity = Entity::Holiday;
    const PROBE: Probe = Probe::Introduction;

    fn normalize_as(payload: &Value, version: &SchemaVersion) -> Result<Self> {
        let f = Fields::of("HolidaySearchResult", payload)?;
        Ok(Self {
            data: f.list("data", |item| Holiday::normalize_as(item, version))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_holiday_drops_unknown_keys() {
        let payload = json!({
            "data": [{
                "title": "元日",
                "date": "2022-01-01",
                "day_of_week": 6,
                "day_of_week_text": "saturday",
                "observed": true
            }]
        });
        let result = HolidaySearchResult::normalize(&payload, None).unwrap();
        assert_eq!(result.data[0].title, "元日");
        let json = serde_json::to_value(&result.data[0]).unwrap();
        assert!(json.get("observed").is_none());
    }
}
