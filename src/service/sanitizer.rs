use crate::error::BrokerError;
use uuid::Uuid;

pub const USERNAME_PREFIX: &str = "u";
pub const PASSWORD_PREFIX: &str = "P";

/// Strip everything outside `[a-zA-Z0-9]`. Absent input yields an empty string.
pub fn clean(s: Option<&str>) -> String {
    s.unwrap_or_default()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Pass `s` through only if cleaning would not change it.
pub fn check_string(s: &str) -> Result<&str, BrokerError> {
    if clean(Some(s)) == s {
        Ok(s)
    } else {
        Err(BrokerError::InvalidIdentifier(s.to_string()))
    }
}

/// `prefix` followed by a UUID v4 with the hyphens stripped.
pub fn generate_identifier(prefix: &str) -> String {
    let token = clean(Some(&Uuid::new_v4().to_string()));
    format!("{prefix}{token}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn clean_strips_and_is_idempotent() {
        for s in ["a-b_c d", "x'; DROP TABLE t; --", "héllo", "", "abc123"] {
            let once = clean(Some(s));
            assert!(once.chars().all(|c| c.is_ascii_alphanumeric()));
            assert_eq!(clean(Some(&once)), once);
        }
        assert_eq!(clean(Some("a-b_c d")), "abcd");
        assert_eq!(clean(None), "");
    }

    #[test]
    fn check_string_accepts_only_alphanumerics() {
        assert_eq!(check_string("alice42").unwrap(), "alice42");
        assert_eq!(check_string("").unwrap(), "");
        for bad in ["al ice", "bob'", "x;y", "naïve"] {
            assert!(matches!(
                check_string(bad),
                Err(BrokerError::InvalidIdentifier(ref s)) if s == bad
            ));
        }
    }

    #[test]
    fn generated_identifiers_are_prefixed_and_unique() {
        let ids: HashSet<String> = (0..256).map(|_| generate_identifier(USERNAME_PREFIX)).collect();
        assert_eq!(ids.len(), 256);
        for id in &ids {
            assert!(id.starts_with(USERNAME_PREFIX));
            assert_eq!(id.len(), 33);
            assert!(check_string(id).is_ok());
        }
        assert!(generate_identifier(PASSWORD_PREFIX).starts_with('P'));
    }
}
