use std::fmt;

use anemo_core::AnemoError;

/// HTTP Basic credentials for the Meteomatics API.
///
/// Never compiled in; load them with [`Credentials::from_env`] or pass them
/// from a secret store via [`Credentials::new`].
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Environment variable holding the account name.
    pub const USER_VAR: &'static str = "METEOMATICS_USER";
    /// Environment variable holding the account password.
    pub const PASS_VAR: &'static str = "METEOMATICS_PASS";

    /// Construct from explicit values.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read `METEOMATICS_USER` and `METEOMATICS_PASS` from the process environment.
    ///
    /// # Errors
    /// Returns `MissingCredentials` naming the first variable that is unset or empty.
    pub fn from_env() -> Result<Self, AnemoError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Credentials::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    /// Returns `MissingCredentials` naming the first variable that is unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AnemoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| {
            lookup(var)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AnemoError::missing_credentials(var))
        };
        Ok(Self {
            username: read(Self::USER_VAR)?,
            password: read(Self::PASS_VAR)?,
        })
    }

    /// Account name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Account password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
