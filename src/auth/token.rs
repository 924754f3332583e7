use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::{ConfigError, JwtConfig};
use crate::state::AppState;
use crate::users::repo::User;

/// HS256 needs at least as many secret bytes as the digest size.
const MIN_SECRET_BYTES: usize = 32;

/// Fixed validity window: one year from issuance, UTC wall clock. There is no
/// refresh or revocation; a leaked token stays valid until natural expiry.
const TOKEN_VALIDITY: Duration = Duration::days(365);

/// Claim set embedded in every issued token. Identity attributes use the
/// salon claim names; `Role` is the integer value of the role enum in string
/// form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Login")]
    pub login: String,
    #[serde(rename = "Role")]
    pub role: String,
    pub iat: usize,
    pub exp: usize,
}

/// Signs and decodes salon tokens. Construction fails fast on a missing or
/// weak secret, so a misconfigured process never serves.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer").finish_non_exhaustive()
    }
}

impl TokenIssuer {
    pub fn new(config: &JwtConfig) -> Result<Self, ConfigError> {
        let secret = config.secret.as_bytes();
        if secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::WeakJwtSecret {
                min: MIN_SECRET_BYTES,
                got: secret.len(),
            });
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        })
    }

    pub fn generate_token(&self, user: &User) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let claims = Claims {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            login: user.login.clone(),
            role: (user.role as i32).to_string(),
            iat: now.unix_timestamp() as usize,
            exp: (now + TOKEN_VALIDITY).unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user.id, login = %user.login, "token issued");
        Ok(token)
    }

    pub fn decode(&self, token: &str) -> anyhow::Result<Claims> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        Ok(data.claims)
    }
}

impl FromRef<AppState> for TokenIssuer {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

/// Extracts the authenticated user's id from a Bearer token. Verification of
/// inbound tokens lives here at the HTTP boundary; the core only issues them.
pub struct AuthUser(pub Uuid);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    TokenIssuer: FromRef<S>,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let tokens = TokenIssuer::from_ref(state);
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or((
                StatusCode::UNAUTHORIZED,
                "Missing Authorization header".to_string(),
            ))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or((
            StatusCode::UNAUTHORIZED,
            "Invalid Authorization header".to_string(),
        ))?;

        let claims = match tokens.decode(token) {
            Ok(c) => c,
            Err(_) => {
                warn!("invalid or expired token");
                return Err((
                    StatusCode::UNAUTHORIZED,
                    "Invalid or expired token".to_string(),
                ));
            }
        };

        let user_id = claims.id.parse::<Uuid>().map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                "Invalid or expired token".to_string(),
            )
        })?;

        Ok(AuthUser(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::repo::testing::fake_user;
    use crate::users::repo::Role;

    fn make_issuer() -> TokenIssuer {
        TokenIssuer::new(&JwtConfig {
            secret: "SuperSecretKeyForTokenGenerationThatIsLongEnough".into(),
        })
        .expect("secret long enough")
    }

    #[test]
    fn rejects_short_secret() {
        let err = TokenIssuer::new(&JwtConfig {
            secret: "too-short".into(),
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::WeakJwtSecret { .. }));
    }

    #[test]
    fn generates_a_well_formed_token() {
        let issuer = make_issuer();
        let user = fake_user("Robert", "hash", Role::Admin);

        let token = issuer.generate_token(&user).expect("token issued");

        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn embeds_user_claims_in_token() {
        let issuer = make_issuer();
        let user = fake_user("Robert", "hash", Role::Admin);

        let token = issuer.generate_token(&user).expect("token issued");
        let claims = issuer.decode(&token).expect("token decodes");

        assert_eq!(claims.id, user.id.to_string());
        assert_eq!(claims.name, user.name);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.login, user.login);
        assert_eq!(claims.role, "0");
    }

    #[test]
    fn sets_expiry_one_year_out() {
        let issuer = make_issuer();
        let user = fake_user("Robert", "hash", Role::User);

        let token = issuer.generate_token(&user).expect("token issued");
        let claims = issuer.decode(&token).expect("token decodes");

        let expected = (OffsetDateTime::now_utc() + Duration::days(365)).unix_timestamp();
        let skew = (claims.exp as i64 - expected).abs();
        assert!(skew < 300, "expiry off by {skew}s");
    }

    #[test]
    fn distinct_users_get_distinct_tokens() {
        let issuer = make_issuer();
        let robert = fake_user("Robert", "hash", Role::Admin);
        let tony = fake_user("Tony", "hash", Role::User);

        let token1 = issuer.generate_token(&robert).expect("token issued");
        let token2 = issuer.generate_token(&tony).expect("token issued");

        assert_ne!(token1, token2);
    }

    #[test]
    fn decode_rejects_a_foreign_signature() {
        let issuer = make_issuer();
        let other = TokenIssuer::new(&JwtConfig {
            secret: "ADifferentSecretKeyThatIsAlsoLongEnough!!".into(),
        })
        .unwrap();
        let user = fake_user("Robert", "hash", Role::User);

        let token = issuer.generate_token(&user).expect("token issued");
        assert!(other.decode(&token).is_err());
    }
}
