//! Application Configuration

use std::time::Duration;

use platform::cookie::{CookieConfig, SameSite};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session TTL
    pub session_ttl: Duration,
    /// Whether to require the Secure cookie attribute
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "dealer_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(12 * 3600),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret.
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie, random secret).
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Cookie attributes for the session cookie.
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs() as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_secret_differs_between_configs() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.session_secret, b.session_secret);
    }

    #[test]
    fn development_config_is_insecure_cookie_only() {
        let config = AuthConfig::development();
        assert!(!config.cookie_secure);
        assert_ne!(config.session_secret, [0u8; 32]);
    }

    #[test]
    fn session_cookie_reflects_config() {
        let config = AuthConfig::development();
        let cookie = config.session_cookie();
        assert_eq!(cookie.name, "dealer_session");
        assert!(cookie.http_only);
        assert_eq!(
            cookie.max_age_secs,
            Some(config.session_ttl.as_secs() as i64)
        );
    }
}
