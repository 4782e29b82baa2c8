//! LINE channel credential registry.

use secrecy::Secret;
use std::collections::HashMap;
use tracing::warn;

use crate::models::Reservation;
use crate::{Error, Result};

/// A resolved credential for one dispatch.
#[derive(Debug, Clone, Copy)]
pub struct Credential<'a> {
    pub label: &'a str,
    pub token: &'a Secret<String>,
}

/// Immutable mapping from account label to channel access token.
///
/// The default credential is held outside the map so resolution never fails.
#[derive(Debug)]
pub struct CredentialRegistry {
    default_label: String,
    default_token: Secret<String>,
    accounts: HashMap<String, Secret<String>>,
}

impl CredentialRegistry {
    /// Build a registry, failing if `default_label` has no token.
    pub fn new(
        default_label: impl Into<String>,
        mut accounts: HashMap<String, Secret<String>>,
    ) -> Result<Self> {
        let default_label = default_label.into();
        let default_token = accounts.remove(&default_label).ok_or_else(|| {
            Error::Config(format!(
                "no LINE channel access token configured for default account '{}'",
                default_label
            ))
        })?;

        Ok(Self {
            default_label,
            default_token,
            accounts,
        })
    }

    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    /// Every configured account label, default first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.default_label.as_str()).chain(self.accounts.keys().map(String::as_str))
    }

    /// Resolve a label, falling back to the default credential.
    pub fn resolve(&self, label: Option<&str>) -> Credential<'_> {
        match label {
            Some(label) if label == self.default_label => self.default_credential(),
            Some(label) => match self.accounts.get_key_value(label) {
                Some((label, token)) => Credential { label, token },
                None => {
                    warn!(account = %label, "Unknown LINE account, using default credential");
                    self.default_credential()
                }
            },
            None => self.default_credential(),
        }
    }

    /// Pick the credential that owns the user of this reservation.
    pub fn select(&self, reservation: &Reservation) -> Credential<'_> {
        self.resolve(reservation.line_account())
    }

    fn default_credential(&self) -> Credential<'_> {
        Credential {
            label: &self.default_label,
            token: &self.default_token,
        }
    }
}

/// Parse a `label=token,label=token` list.
pub fn parse_account_tokens(raw: &str) -> Result<HashMap<String, Secret<String>>> {
    let mut accounts = HashMap::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (label, token) = entry.split_once('=').ok_or_else(|| {
            Error::Config("LINE_ACCOUNT_TOKENS entries must be label=token".to_string())
        })?;
        let (label, token) = (label.trim(), token.trim());
        if label.is_empty() || token.is_empty() {
            return Err(Error::Config(
                "LINE_ACCOUNT_TOKENS entries need a non-empty label and token".to_string(),
            ));
        }
        accounts.insert(label.to_string(), Secret::new(token.to_string()));
    }

    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serde_json::json;

    fn registry() -> CredentialRegistry {
        let accounts = parse_account_tokens(
            "default=token-default, 980hrcnx=token-980, ltf8289j=token-ltf",
        )
        .unwrap();
        CredentialRegistry::new("default", accounts).unwrap()
    }

    fn reservation(fields: serde_json::Value) -> Reservation {
        serde_json::from_value(json!({"id": "rec1", "fields": fields})).unwrap()
    }

    #[test]
    fn test_sequence_label_resolves() {
        let registry = registry();
        let credential = registry.select(&reservation(json!({"lineAccount": ["980hrcnx"]})));
        assert_eq!(credential.label, "980hrcnx");
        assert_eq!(credential.token.expose_secret(), "token-980");
    }

    #[test]
    fn test_scalar_label_resolves() {
        let registry = registry();
        let credential = registry.select(&reservation(json!({"lineAccount": "ltf8289j"})));
        assert_eq!(credential.label, "ltf8289j");
        assert_eq!(credential.token.expose_secret(), "token-ltf");
    }

    #[test]
    fn test_unknown_and_absent_labels_use_default() {
        let registry = registry();

        let unknown = registry.select(&reservation(json!({"lineAccount": "zzz"})));
        assert_eq!(unknown.label, "default");
        assert_eq!(unknown.token.expose_secret(), "token-default");

        let absent = registry.select(&reservation(json!({})));
        assert_eq!(absent.token.expose_secret(), "token-default");

        let empty = registry.select(&reservation(json!({"lineAccount": []})));
        assert_eq!(empty.token.expose_secret(), "token-default");
    }

    #[test]
    fn test_missing_default_is_config_error() {
        let accounts = parse_account_tokens("980hrcnx=token-980").unwrap();
        let err = CredentialRegistry::new("default", accounts).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_default_only_registry() {
        let mut accounts = HashMap::new();
        accounts.insert("default".to_string(), Secret::new("only".to_string()));
        let registry = CredentialRegistry::new("default", accounts).unwrap();

        assert_eq!(registry.labels().collect::<Vec<_>>(), vec!["default"]);
        assert_eq!(
            registry.resolve(Some("980hrcnx")).token.expose_secret(),
            "only"
        );
    }

    #[test]
    fn test_parse_account_tokens_rejects_malformed() {
        assert!(parse_account_tokens("980hrcnx").is_err());
        assert!(parse_account_tokens("=token").is_err());
        assert!(parse_account_tokens("label=").is_err());
        assert!(parse_account_tokens(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let debug_output = format!("{:?}", registry());
        assert!(!debug_output.contains("token-980"));
        assert!(debug_output.contains("REDACTED"));
    }
}
