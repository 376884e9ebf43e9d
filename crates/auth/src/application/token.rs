//! Session Tokens
//!
//! The cookie value is `<session_id>.<base64url(hmac_sha256(secret, id))>`.
//! The database row keyed by the id is the session; the signature only
//! proves the id was issued by this server and not guessed.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Sign a session id into a cookie token.
pub fn sign_session_id(secret: &[u8; 32], session_id: Uuid) -> String {
    let session_id = session_id.to_string();

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", session_id, URL_SAFE_NO_PAD.encode(signature))
}

/// Verify a cookie token and extract the session id.
///
/// Any structural problem yields `SessionInvalid`; callers cannot tell a
/// tampered token from a garbled one.
pub fn verify_session_token(secret: &[u8; 32], token: &str) -> AuthResult<Uuid> {
    let Some((session_id_str, signature_b64)) = token.split_once('.') else {
        return Err(AuthError::SessionInvalid);
    };

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id_str.as_bytes());

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AuthError::SessionInvalid)?;

    mac.verify_slice(&signature)
        .map_err(|_| AuthError::SessionInvalid)?;

    session_id_str
        .parse()
        .map_err(|_| AuthError::SessionInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn sign_then_verify_recovers_id() {
        let id = Uuid::new_v4();
        let token = sign_session_id(&SECRET, id);
        assert_eq!(verify_session_token(&SECRET, &token).unwrap(), id);
    }

    #[test]
    fn tampered_id_is_rejected() {
        let token = sign_session_id(&SECRET, Uuid::new_v4());
        let other_id = Uuid::new_v4().to_string();
        let signature = token.split_once('.').unwrap().1;

        let forged = format!("{}.{}", other_id, signature);
        assert!(matches!(
            verify_session_token(&SECRET, &forged),
            Err(AuthError::SessionInvalid)
        ));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = sign_session_id(&SECRET, Uuid::new_v4());
        let other_secret = [8u8; 32];
        assert!(verify_session_token(&other_secret, &token).is_err());
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        for token in ["", "no-dot", "a.b.c", "id.!!!not-base64!!!"] {
            assert!(
                verify_session_token(&SECRET, token).is_err(),
                "token {:?} should be rejected",
                token
            );
        }
    }
}
