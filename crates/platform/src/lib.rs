//! Platform Infrastructure
//!
//! Cross-cutting infrastructure shared by the feature crates:
//! - `password` - Argon2id hashing with zeroized plaintext handling
//! - `cookie` - cookie building and extraction
//! - `flash` - one-shot notification messages carried across a redirect

pub mod cookie;
pub mod flash;
pub mod password;
