use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of `GET /api/authenticated/`. Only a JSON object is accepted; extra
/// fields are ignored, a missing or non-boolean `authenticated` fails decoding.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Map<String, Value>")]
pub struct AuthCheckResponse {
    pub authenticated: bool,
}

impl TryFrom<Map<String, Value>> for AuthCheckResponse {
    type Error = String;

    fn try_from(body: Map<String, Value>) -> Result<Self, Self::Error> {
        match body.get("authenticated") {
            Some(Value::Bool(authenticated)) => Ok(Self {
                authenticated: *authenticated,
            }),
            Some(other) => Err(format!("`authenticated` must be a boolean, got {other}")),
            None => Err("missing field `authenticated`".to_string()),
        }
    }
}

/// Decoded result of one authentication check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthVerdict {
    Authenticated,
    Unauthenticated,
}

impl From<AuthCheckResponse> for AuthVerdict {
    fn from(response: AuthCheckResponse) -> Self {
        if response.authenticated {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{AuthCheckResponse, AuthVerdict};

    #[test]
    fn decodes_verdict_and_ignores_extra_fields() {
        let response: AuthCheckResponse =
            serde_json::from_str(r#"{"authenticated": true, "user": "ana"}"#).unwrap();
        assert_eq!(AuthVerdict::from(response), AuthVerdict::Authenticated);

        let response: AuthCheckResponse =
            serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
        assert_eq!(AuthVerdict::from(response), AuthVerdict::Unauthenticated);
    }

    #[test]
    fn rejects_missing_or_non_boolean_field() {
        assert!(serde_json::from_str::<AuthCheckResponse>("{}").is_err());
        assert!(serde_json::from_str::<AuthCheckResponse>(r#"{"authenticated": "yes"}"#).is_err());
        assert!(serde_json::from_str::<AuthCheckResponse>(r#"{"authenticated": 1}"#).is_err());
    }

    #[test]
    fn rejects_non_object_bodies() {
        for body in ["[true]", "[false]", "true", "null", r#""authenticated""#] {
            assert!(
                serde_json::from_str::<AuthCheckResponse>(body).is_err(),
                "{body} should not decode"
            );
        }
    }
}
