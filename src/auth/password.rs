use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::rngs::OsRng;
use tracing::error;

/// Produces the stored credential representation: an argon2id PHC string
/// with a fresh random salt.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "password hashing failed");
            anyhow::anyhow!("password hashing failed: {e}")
        })?;
    Ok(hash.to_string())
}

/// Checks a submitted plaintext against the stored representation. A wrong
/// password is `Ok(false)`; a stored hash that does not parse is an
/// infrastructure error, not a failed login.
pub fn verify_password(plain: &str, stored: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(stored).map_err(|e| {
        error!(error = %e, "stored password hash is malformed");
        anyhow::anyhow!("stored password hash is malformed: {e}")
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSWORD_ROBERT: &str = "RobertsPassword1";
    const PASSWORD_TONY: &str = "TonysPassword2";

    #[test]
    fn verifies_the_password_it_hashed() {
        let stored = hash_password(PASSWORD_ROBERT).unwrap();
        assert!(verify_password(PASSWORD_ROBERT, &stored).unwrap());
    }

    #[test]
    fn rejects_another_users_password() {
        let stored = hash_password(PASSWORD_ROBERT).unwrap();
        assert!(!verify_password(PASSWORD_TONY, &stored).unwrap());
    }

    #[test]
    fn salting_makes_repeat_hashes_differ_yet_both_verify() {
        let first = hash_password(PASSWORD_ROBERT).unwrap();
        let second = hash_password(PASSWORD_ROBERT).unwrap();
        assert_ne!(first, second);
        assert!(verify_password(PASSWORD_ROBERT, &first).unwrap());
        assert!(verify_password(PASSWORD_ROBERT, &second).unwrap());
    }

    #[test]
    fn malformed_stored_hash_is_an_error_not_a_failed_login() {
        assert!(verify_password(PASSWORD_ROBERT, "plaintext-not-a-hash").is_err());
    }
}
