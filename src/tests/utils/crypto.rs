use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::services::token::SigningKey;

pub fn generate_signing_key() -> SigningKey {
    SigningKey::from_base64_secret(&BASE64.encode("storemark-test-signing-key-0123456789")).unwrap()
}
