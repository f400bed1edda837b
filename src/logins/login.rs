//! Login record and its stored JSON form.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{LoginError, LoginResult};

/// One stored login entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub id: String,
    pub service_name: String,
    pub email: String,
    pub password: String,
}

/// Decode a stored payload into a login list.
///
/// The whole payload is rejected if any entry is incomplete or if two
/// entries share an id.
pub fn parse_logins(raw: &str) -> LoginResult<Vec<LoginData>> {
    let logins: Vec<LoginData> =
        serde_json::from_str(raw).map_err(|e| LoginError::StorageCorruption(e.to_string()))?;

    let mut seen = HashSet::with_capacity(logins.len());
    if let Some(dup) = logins.iter().find(|l| !seen.insert(l.id.as_str())) {
        return Err(LoginError::StorageCorruption(format!("duplicate id {}", dup.id)));
    }

    Ok(logins)
}

/// Encode a login list for storage
pub fn serialize_logins(logins: &[LoginData]) -> LoginResult<String> {
    serde_json::to_string(logins).map_err(|e| LoginError::StorageCorruption(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_logins() {
        let raw = r#"[
            {"id":"1","service_name":"GitHub","email":"a@x.com","password":"p1"},
            {"id":"2","service_name":"GitLab","email":"b@x.com","password":"p2"}
        ]"#;

        let logins = parse_logins(raw).unwrap();
        assert_eq!(logins.len(), 2);
        assert_eq!(logins[0].service_name, "GitHub");
        assert_eq!(logins[1].id, "2");
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_logins("[]").unwrap().is_empty());
    }

    #[test]
    fn test_reject_missing_field() {
        let raw = r#"[{"id":"1","service_name":"GitHub","email":"a@x.com"}]"#;
        assert!(matches!(parse_logins(raw), Err(LoginError::StorageCorruption(_))));
    }

    #[test]
    fn test_reject_non_array() {
        let raw = r#"{"id":"1","service_name":"GitHub","email":"a@x.com","password":"p"}"#;
        assert!(matches!(parse_logins(raw), Err(LoginError::StorageCorruption(_))));
        assert!(matches!(parse_logins("not json"), Err(LoginError::StorageCorruption(_))));
    }

    #[test]
    fn test_reject_duplicate_ids() {
        let raw = r#"[
            {"id":"1","service_name":"GitHub","email":"a@x.com","password":"p1"},
            {"id":"1","service_name":"GitLab","email":"b@x.com","password":"p2"}
        ]"#;

        let err = parse_logins(raw).unwrap_err();
        assert!(err.to_string().contains("duplicate id 1"));
    }
}
