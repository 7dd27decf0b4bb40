use crate::error::{Error, Result};
use std::path::PathBuf;

pub const AZURE_AAD_ID: &str = "AZURE_AAD_ID";
pub const AZURE_AAD_ID_TEMP: &str = "AZURE_AAD_ID_TEMP";
pub const GITHUB_WORKSPACE: &str = "GITHUB_WORKSPACE";

/// Values the signing run takes from the CI environment.
///
/// Read once at startup. All values are trimmed, and an empty value is treated the same as a
/// missing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Environment {
    /// Client id, also the subject of the request signing certificate
    pub aad_id: String,
    /// Prefix of the authentication certificate's subject
    pub aad_id_temp: String,
    /// Destination root of the signed output, and working directory of the tool
    pub workspace: PathBuf,
}

impl Environment {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let require = |name: &'static str| -> Result<String> {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
                _ => Err(Error::MissingConfiguration(name)),
            }
        };

        Ok(Self {
            aad_id: require(AZURE_AAD_ID)?,
            aad_id_temp: require(AZURE_AAD_ID_TEMP)?,
            workspace: require(GITHUB_WORKSPACE)?.into(),
        })
    }
}
