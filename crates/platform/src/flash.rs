//! Flash Messages
//!
//! One-shot notifications that survive exactly one redirect. The message is
//! carried in its own short-lived cookie: a mutating handler sets it
//! alongside the redirect, and the next rendered view reads it and clears
//! the cookie in the same response.
//!
//! Payload is base64url-encoded JSON so arbitrary message text is safe in a
//! cookie value.

use axum::http::HeaderMap;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::cookie::{CookieConfig, SameSite, extract_cookie};

/// Cookie name carrying the pending flash message
pub const FLASH_COOKIE: &str = "flash";

/// Upper bound on how long an unconsumed flash survives
const FLASH_MAX_AGE_SECS: i64 = 60;

/// Message severity, rendered as the alert style of the next view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Danger,
    Info,
}

impl Severity {
    /// CSS class suffix used by the views
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Info => "info",
        }
    }
}

/// A pending one-shot message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub severity: Severity,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Danger,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    /// Encode the payload for a cookie value.
    pub fn encode(&self) -> String {
        // Serialization of two plain fields cannot fail
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    /// Decode a cookie value; malformed values are treated as no message.
    pub fn decode(value: &str) -> Option<Self> {
        let json = URL_SAFE_NO_PAD.decode(value).ok()?;
        serde_json::from_slice(&json).ok()
    }

    /// Read the pending flash from request headers, if any.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let value = extract_cookie(headers, FLASH_COOKIE)?;
        Self::decode(&value)
    }

    /// Set-Cookie header value installing this flash for the next render.
    ///
    /// Secure is left off so the message also survives plain-HTTP
    /// development runs; the session cookie is the one that carries
    /// authority.
    pub fn set_cookie(&self) -> String {
        cookie_config().build_set_cookie(&self.encode())
    }

    /// Set-Cookie header value clearing the consumed flash.
    pub fn clear_cookie() -> String {
        cookie_config().build_delete_cookie()
    }
}

fn cookie_config() -> CookieConfig {
    CookieConfig {
        name: FLASH_COOKIE.to_string(),
        secure: false,
        http_only: true,
        same_site: SameSite::Lax,
        path: "/".to_string(),
        max_age_secs: Some(FLASH_MAX_AGE_SECS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};

    #[test]
    fn encode_decode_roundtrip() {
        let flash = Flash::success("Carro agregado con éxito.");
        let decoded = Flash::decode(&flash.encode()).unwrap();
        assert_eq!(decoded, flash);
    }

    #[test]
    fn decode_rejects_malformed_values() {
        assert_eq!(Flash::decode("not base64 !!!"), None);

        let not_json = URL_SAFE_NO_PAD.encode(b"plain text");
        assert_eq!(Flash::decode(&not_json), None);
    }

    #[test]
    fn from_headers_reads_flash_cookie() {
        let flash = Flash::danger("No se encontró el carro.");

        let mut headers = HeaderMap::new();
        let cookie = format!("{}={}", FLASH_COOKIE, flash.encode());
        headers.insert(header::COOKIE, HeaderValue::from_str(&cookie).unwrap());

        assert_eq!(Flash::from_headers(&headers), Some(flash));
    }

    #[test]
    fn from_headers_without_cookie_is_none() {
        let headers = HeaderMap::new();
        assert_eq!(Flash::from_headers(&headers), None);
    }

    #[test]
    fn clear_cookie_expires_the_flash() {
        let cookie = Flash::clear_cookie();
        assert!(cookie.starts_with("flash=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn severity_maps_to_alert_class() {
        assert_eq!(Severity::Success.as_str(), "success");
        assert_eq!(Severity::Danger.as_str(), "danger");
        assert_eq!(Severity::Info.as_str(), "info");
    }
}
