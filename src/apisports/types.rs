//! Endpoint names and response inspection for API-Football payloads.
//!
//! Payloads are kept as raw `serde_json::Value`; only the `response` array
//! and the id of its first fixture are ever looked at.

use serde_json::Value;

use crate::{FetchError, FixtureId, Result};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-apisports-key";

pub const FIXTURES_PATH: &str = "fixtures";
pub const INJURIES_PATH: &str = "injuries";
pub const LINEUPS_PATH: &str = "fixtures/lineups";

/// Which API resource a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Fixtures,
    Injuries,
    Lineups,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Fixtures => FIXTURES_PATH,
            Endpoint::Injuries => INJURIES_PATH,
            Endpoint::Lineups => LINEUPS_PATH,
        }
    }
}

/// The `response` array of a payload, if present and an array.
pub fn response_items(payload: &Value) -> Option<&Vec<Value>> {
    payload.get("response").and_then(Value::as_array)
}

/// `response[0].fixture.id` of a fixtures payload.
///
/// Returns `Ok(None)` when `response` is missing, not an array, or empty.
/// A first record without an integer `fixture.id` is an error.
pub fn first_fixture_id(payload: &Value) -> Result<Option<FixtureId>> {
    let Some(first) = response_items(payload).and_then(|items| items.first()) else {
        return Ok(None);
    };

    first
        .pointer("/fixture/id")
        .and_then(Value::as_u64)
        .map(|id| Some(FixtureId::new(id)))
        .ok_or_else(|| FetchError::UnexpectedShape {
            detail: "first fixture record has no integer fixture.id".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Fixtures.path(), "fixtures");
        assert_eq!(Endpoint::Injuries.path(), "injuries");
        assert_eq!(Endpoint::Lineups.path(), "fixtures/lineups");
    }

    #[test]
    fn test_first_fixture_id_found() {
        let payload = json!({
            "response": [
                {"fixture": {"id": 4521, "date": "2024-05-01T18:00:00+00:00"}, "teams": {}},
                {"fixture": {"id": 4522}}
            ]
        });
        assert_eq!(
            first_fixture_id(&payload).unwrap(),
            Some(FixtureId::new(4521))
        );
    }

    #[test]
    fn test_first_fixture_id_empty_or_absent() {
        assert_eq!(first_fixture_id(&json!({"response": []})).unwrap(), None);
        assert_eq!(first_fixture_id(&json!({"errors": []})).unwrap(), None);
        assert_eq!(first_fixture_id(&json!({"response": null})).unwrap(), None);
        assert_eq!(first_fixture_id(&json!([])).unwrap(), None);
    }

    #[test]
    fn test_first_fixture_id_malformed_record() {
        let payload = json!({"response": [{"fixture": {"id": "4521"}}]});
        assert!(matches!(
            first_fixture_id(&payload),
            Err(FetchError::UnexpectedShape { .. })
        ));

        let payload = json!({"response": [{"teams": {}}]});
        assert!(first_fixture_id(&payload).is_err());
    }

    #[test]
    fn test_response_items() {
        let payload = json!({"response": [1, 2, 3]});
        assert_eq!(response_items(&payload).map(Vec::len), Some(3));
        assert!(response_items(&json!({"response": {}})).is_none());
    }
}
