use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues signed, time-bounded credential tokens.
///
/// Uses HS256 (HMAC with SHA-256). The signing secret and validity window
/// are fixed at construction; issuance never reads the environment.
///
/// # Security Notes
/// - The secret should be at least 256 bits (32 bytes) for HS256
/// - Store secrets in environment variables or secure vaults, never in code
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
    validity: Duration,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `validity` - Window after which issued tokens expire
    ///
    /// # Returns
    /// TokenIssuer configured with HS256
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty; tokens are never signed with an
    ///   empty key
    pub fn new(secret: &[u8], validity: Duration) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            validity,
        })
    }

    /// Issue a token for a verified identity.
    ///
    /// The embedded claims are exactly `{tenant, email, exp}` with
    /// `exp` = issuance time + the configured validity window.
    ///
    /// # Arguments
    /// * `tenant` - Tenant of the authenticated identity
    /// * `email` - Email of the authenticated identity
    ///
    /// # Returns
    /// Signed JWT string
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    pub fn issue(&self, tenant: &str, email: &str) -> Result<String, TokenError> {
        let claims = Claims::new(tenant, email, Utc::now() + self.validity);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::decode;
    use jsonwebtoken::DecodingKey;
    use jsonwebtoken::Validation;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn decode_claims(token: &str) -> Claims {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(SECRET),
            &Validation::new(Algorithm::HS256),
        )
        .expect("Failed to decode token")
        .claims
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        let result = TokenIssuer::new(b"", Duration::days(30));
        assert!(matches!(result, Err(TokenError::MissingSecret)));
    }

    #[test]
    fn test_issued_token_carries_identity_claims() {
        let issuer = TokenIssuer::new(SECRET, Duration::days(30)).unwrap();

        let token = issuer
            .issue("Family", "email@server.com")
            .expect("Failed to issue token");
        let claims = decode_claims(&token);

        assert_eq!(claims.tenant, "Family");
        assert_eq!(claims.email, "email@server.com");
    }

    #[test]
    fn test_expiry_is_issuance_plus_validity() {
        let validity = Duration::days(30);
        let issuer = TokenIssuer::new(SECRET, validity).unwrap();

        let before = Utc::now().timestamp();
        let token = issuer
            .issue("Family", "email@server.com")
            .expect("Failed to issue token");
        let after = Utc::now().timestamp();

        let claims = decode_claims(&token);
        assert!(claims.exp >= before + validity.num_seconds());
        assert!(claims.exp <= after + validity.num_seconds());
    }

    #[test]
    fn test_token_is_rejected_with_other_secret() {
        let issuer = TokenIssuer::new(SECRET, Duration::days(30)).unwrap();
        let token = issuer
            .issue("Family", "email@server.com")
            .expect("Failed to issue token");

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"some_other_secret_32_bytes_long!!"),
            &Validation::new(Algorithm::HS256),
        );
        assert!(result.is_err());
    }
}
