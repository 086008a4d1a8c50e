// src/utils/password.rs

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::env;
use thiserror::Error;

/// パスワード関連のエラー
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingError(#[from] argon2::password_hash::Error),

    #[error("Argon2 parameter error: {0}")]
    Argon2Error(#[from] argon2::Error),

    #[error("Weak password: {0}")]
    WeakPassword(String),

    #[error("Password configuration error: {0}")]
    ConfigurationError(String),
}

/// パスワード要件
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 6,
            max_length: 128,
        }
    }
}

impl PasswordPolicy {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            min_length: env::var("PASSWORD_MIN_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_length),
            max_length: env::var("PASSWORD_MAX_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_length),
        }
    }

    pub fn validate(&self) -> Result<(), PasswordError> {
        if self.min_length < 4 {
            return Err(PasswordError::ConfigurationError(
                "Minimum password length must be at least 4".to_string(),
            ));
        }

        if self.max_length < self.min_length {
            return Err(PasswordError::ConfigurationError(
                "Maximum password length must be greater than minimum".to_string(),
            ));
        }

        Ok(())
    }
}

/// Argon2 設定
#[derive(Debug, Clone)]
pub struct Argon2Config {
    /// メモリコスト（KB）
    pub memory_cost: u32,
    /// 反復回数
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_cost: 19456, // 19MB
            time_cost: 2,
            parallelism: 1,
        }
    }
}

impl Argon2Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            memory_cost: env::var("ARGON2_MEMORY_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.memory_cost),
            time_cost: env::var("ARGON2_TIME_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.time_cost),
            parallelism: env::var("ARGON2_PARALLELISM")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.parallelism),
        }
    }
}

/// パスワードハッシュマネージャー
pub struct PasswordManager {
    argon2: Argon2<'static>,
    policy: PasswordPolicy,
}

impl PasswordManager {
    pub fn new(argon2_config: Argon2Config, policy: PasswordPolicy) -> Result<Self, PasswordError> {
        policy.validate()?;

        let argon2 = Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            argon2::Params::new(
                argon2_config.memory_cost,
                argon2_config.time_cost,
                argon2_config.parallelism,
                None,
            )?,
        );

        Ok(Self { argon2, policy })
    }

    pub fn new_default() -> Result<Self, PasswordError> {
        Self::new(Argon2Config::default(), PasswordPolicy::default())
    }

    pub fn from_env() -> Result<Self, PasswordError> {
        Self::new(Argon2Config::from_env(), PasswordPolicy::from_env())
    }

    /// パスワードをハッシュ化
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.validate_password_strength(password)?;

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = self.argon2.hash_password(password.as_bytes(), &salt)?;

        Ok(password_hash.to_string())
    }

    /// パスワードを検証
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash)?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::HashingError(e)),
        }
    }

    pub fn validate_password_strength(&self, password: &str) -> Result<(), PasswordError> {
        let length = password.chars().count();

        if length < self.policy.min_length {
            return Err(PasswordError::WeakPassword(format!(
                "Password must be at least {} characters long",
                self.policy.min_length
            )));
        }

        if length > self.policy.max_length {
            return Err(PasswordError::WeakPassword(format!(
                "Password must be no more than {} characters long",
                self.policy.max_length
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let manager = PasswordManager::new_default().unwrap();
        let hash = manager.hash_password("secret1").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(manager.verify_password("secret1", &hash).unwrap());
        assert!(!manager.verify_password("secret2", &hash).unwrap());
    }

    #[test]
    fn test_short_password_rejected() {
        let manager = PasswordManager::new_default().unwrap();
        assert!(matches!(
            manager.hash_password("abc"),
            Err(PasswordError::WeakPassword(_))
        ));
    }

    #[test]
    fn test_invalid_policy() {
        let policy = PasswordPolicy {
            min_length: 10,
            max_length: 5,
        };
        assert!(PasswordManager::new(Argon2Config::default(), policy).is_err());
    }

    #[test]
    fn test_malformed_hash() {
        let manager = PasswordManager::new_default().unwrap();
        assert!(manager.verify_password("secret1", "not-a-hash").is_err());
    }
}
