use axum::http::{header, HeaderMap};
use std::time::{SystemTime, UNIX_EPOCH};
use subtle::ConstantTimeEq;

/// Capability required for every admin page.
pub const MANAGE_OPTIONS: &str = "manage_options";

/// Length of the hex nonce embedded in forms.
const NONCE_LENGTH: usize = 10;

/// Constant-time string comparison to prevent timing attacks
/// Use this for comparing admin tokens, nonces, and other sensitive values
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Capabilities of the user behind a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    can_manage_options: bool,
}

impl CurrentUser {
    /// Resolve the user from the `Authorization: Bearer <token>` header
    pub fn from_headers(headers: &HeaderMap, admin_token: &str) -> Self {
        let presented = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim);

        let can_manage_options = match presented {
            Some(token) if !admin_token.is_empty() => constant_time_compare(token, admin_token),
            _ => false,
        };

        Self { can_manage_options }
    }

    pub fn can(&self, capability: &str) -> bool {
        capability == MANAGE_OPTIONS && self.can_manage_options
    }
}

/// Issues and verifies form nonces.
///
/// A nonce is the keyed BLAKE3 hash of the action name and the current
/// tick, truncated to [`NONCE_LENGTH`] hex characters. A tick lasts half
/// the configured lifetime, and nonces from the previous tick are still
/// accepted.
#[derive(Clone)]
pub struct NonceIssuer {
    key: [u8; 32],
    tick_secs: u64,
}

impl NonceIssuer {
    pub fn new(secret: &str, lifetime_secs: u64) -> Self {
        Self {
            key: blake3::derive_key("i18nly 2026-01-01 form nonce", secret.as_bytes()),
            tick_secs: (lifetime_secs / 2).max(1),
        }
    }

    pub fn create(&self, action: &str) -> String {
        self.create_at(action, now_secs())
    }

    pub fn verify(&self, nonce: &str, action: &str) -> bool {
        self.verify_at(nonce, action, now_secs())
    }

    fn create_at(&self, action: &str, now: u64) -> String {
        self.hash(action, now / self.tick_secs)
    }

    fn verify_at(&self, nonce: &str, action: &str, now: u64) -> bool {
        if nonce.is_empty() {
            return false;
        }

        let tick = now / self.tick_secs;
        let current = self.hash(action, tick);
        let previous = self.hash(action, tick.saturating_sub(1));

        // Both comparisons always run
        let matches_current = constant_time_compare(nonce, &current);
        let matches_previous = constant_time_compare(nonce, &previous);
        matches_current | matches_previous
    }

    fn hash(&self, action: &str, tick: u64) -> String {
        let mut hasher = blake3::Hasher::new_keyed(&self.key);
        hasher.update(action.as_bytes());
        hasher.update(b"|");
        hasher.update(&tick.to_le_bytes());
        let hex = hasher.finalize().to_hex();
        hex.as_str()[..NONCE_LENGTH].to_string()
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).expect("header"));
        headers
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("secret123", "secret123"));
        assert!(!constant_time_compare("secret123", "secret124"));
        assert!(!constant_time_compare("secret123", "secret12"));
        assert!(!constant_time_compare("", "secret"));
    }

    // ==================== Capability Tests ====================

    #[test]
    fn test_matching_bearer_token_grants_manage_options() {
        let user = CurrentUser::from_headers(&headers_with("Bearer s3cret"), "s3cret");
        assert!(user.can(MANAGE_OPTIONS));
    }

    #[test]
    fn test_wrong_token_denies() {
        let user = CurrentUser::from_headers(&headers_with("Bearer nope"), "s3cret");
        assert!(!user.can(MANAGE_OPTIONS));
    }

    #[test]
    fn test_missing_header_denies() {
        let user = CurrentUser::from_headers(&HeaderMap::new(), "s3cret");
        assert!(!user.can(MANAGE_OPTIONS));
    }

    #[test]
    fn test_non_bearer_scheme_denies() {
        let user = CurrentUser::from_headers(&headers_with("Basic s3cret"), "s3cret");
        assert!(!user.can(MANAGE_OPTIONS));
    }

    #[test]
    fn test_empty_admin_token_never_matches() {
        let user = CurrentUser::from_headers(&headers_with("Bearer "), "");
        assert!(!user.can(MANAGE_OPTIONS));
    }

    #[test]
    fn test_unknown_capability_denied() {
        let user = CurrentUser::from_headers(&headers_with("Bearer s3cret"), "s3cret");
        assert!(!user.can("delete_everything"));
    }

    // ==================== Nonce Tests ====================

    #[test]
    fn test_nonce_roundtrip() {
        let issuer = NonceIssuer::new("secret", 86_400);
        let nonce = issuer.create("i18nly_create_translation");

        assert_eq!(nonce.len(), NONCE_LENGTH);
        assert!(issuer.verify(&nonce, "i18nly_create_translation"));
    }

    #[test]
    fn test_nonce_bound_to_action() {
        let issuer = NonceIssuer::new("secret", 86_400);
        let nonce = issuer.create("i18nly_create_translation");

        assert!(!issuer.verify(&nonce, "some_other_action"));
    }

    #[test]
    fn test_nonce_bound_to_secret() {
        let nonce = NonceIssuer::new("secret", 86_400).create("action");
        assert!(!NonceIssuer::new("other", 86_400).verify(&nonce, "action"));
    }

    #[test]
    fn test_nonce_valid_for_previous_tick_only() {
        let issuer = NonceIssuer::new("secret", 100);
        let issued_at = 1_000;
        let nonce = issuer.create_at("action", issued_at);

        assert!(issuer.verify_at(&nonce, "action", issued_at + 50));
        assert!(!issuer.verify_at(&nonce, "action", issued_at + 100));
    }

    #[test]
    fn test_empty_nonce_rejected() {
        let issuer = NonceIssuer::new("secret", 86_400);
        assert!(!issuer.verify("", "action"));
    }
}
