use argon2::{
    Algorithm, Argon2, Params, ParamsBuilder, Version,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
};
use password_hash::Error as PasswordHashError;
use rand::{TryRngCore, rngs::OsRng};
use thiserror::Error;
use zeroize::Zeroizing;

use crate::error::AtelierError;

/// Argon2id password hashing with a server-side pepper.
///
/// The pepper is appended to the password before hashing so a leaked
/// database alone is not enough to mount an offline attack.
#[derive(Debug)]
pub struct PasswordCrypto {
    argon2: Argon2<'static>,
    password_pepper: Zeroizing<Vec<u8>>,
}

#[derive(Debug, Error)]
pub enum PasswordCryptoError {
    #[error("password pepper must not be empty")]
    EmptyPasswordPepper,
    #[error("invalid Argon2 parameters: {0}")]
    InvalidArgon2Params(String),
    #[error("password hashing error: {0}")]
    PasswordHash(String),
}

impl From<PasswordHashError> for PasswordCryptoError {
    fn from(err: PasswordHashError) -> Self {
        PasswordCryptoError::PasswordHash(err.to_string())
    }
}

impl From<PasswordCryptoError> for AtelierError {
    fn from(err: PasswordCryptoError) -> Self {
        AtelierError::PasswordHash(err.to_string())
    }
}

impl PasswordCrypto {
    const DEFAULT_MEMORY_KIB: u32 = 64 * 1024; // 64 MiB
    const DEFAULT_ITERATIONS: u32 = 3;
    const DEFAULT_PARALLELISM: u32 = 1;
    const SALT_LENGTH: usize = password_hash::Salt::RECOMMENDED_LENGTH;

    /// Build a helper with default Argon2id parameters.
    pub fn new(
        password_pepper: impl AsRef<[u8]>,
    ) -> Result<Self, PasswordCryptoError> {
        Self::with_cost(
            password_pepper,
            Self::DEFAULT_MEMORY_KIB,
            Self::DEFAULT_ITERATIONS,
        )
    }

    /// Build a helper with a custom memory (KiB) and iteration cost. Tests
    /// use the Argon2 minimums to keep registration fast.
    pub fn with_cost(
        password_pepper: impl AsRef<[u8]>,
        memory_kib: u32,
        iterations: u32,
    ) -> Result<Self, PasswordCryptoError> {
        let params = ParamsBuilder::new()
            .m_cost(memory_kib)
            .t_cost(iterations)
            .p_cost(Self::DEFAULT_PARALLELISM)
            .output_len(32)
            .build()
            .map_err(|err| {
                PasswordCryptoError::InvalidArgon2Params(err.to_string())
            })?;
        Self::with_params(password_pepper, params)
    }

    pub fn with_params(
        password_pepper: impl AsRef<[u8]>,
        params: Params,
    ) -> Result<Self, PasswordCryptoError> {
        let pepper = password_pepper.as_ref();
        if pepper.is_empty() {
            return Err(PasswordCryptoError::EmptyPasswordPepper);
        }

        let argon2 =
            Argon2::new(Algorithm::Argon2id, Version::default(), params);

        Ok(Self {
            argon2,
            password_pepper: Zeroizing::new(pepper.to_vec()),
        })
    }

    fn peppered(&self, password: &str) -> Zeroizing<Vec<u8>> {
        let mut material = Zeroizing::new(Vec::with_capacity(
            password.len() + self.password_pepper.len(),
        ));
        material.extend_from_slice(password.as_bytes());
        material.extend_from_slice(&self.password_pepper);
        material
    }

    /// Hash a password with a random salt. The resulting PHC string is
    /// suitable for storage.
    pub fn hash_password(
        &self,
        password: &str,
    ) -> Result<String, PasswordCryptoError> {
        let material = self.peppered(password);

        let mut salt_bytes = [0u8; Self::SALT_LENGTH];
        OsRng.try_fill_bytes(&mut salt_bytes).map_err(|err| {
            PasswordCryptoError::PasswordHash(err.to_string())
        })?;
        let salt = SaltString::encode_b64(&salt_bytes)?;
        let hash = self.argon2.hash_password(&material, &salt)?.to_string();
        Ok(hash)
    }

    /// Verify a password against a stored PHC hash.
    pub fn verify_password(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, PasswordCryptoError> {
        let parsed = PasswordHash::new(password_hash)?;
        let material = self.peppered(password);
        Ok(self.argon2.verify_password(&material, &parsed).is_ok())
    }
}
