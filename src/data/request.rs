use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// One artifact to sign, as requested on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningRequest {
    pub path: PathBuf,
    pub key_code: String,
    pub op_code: String,
    /// Extra operation parameters, in the order given
    pub extra_params: Vec<(String, String)>,
}

impl SigningRequest {
    pub fn new(
        path: impl Into<PathBuf>,
        key_code: impl Into<String>,
        op_code: impl Into<String>,
        params: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            path: path.into(),
            key_code: key_code.into(),
            op_code: op_code.into(),
            extra_params: params.map(parse_params).transpose()?.unwrap_or_default(),
        })
    }

    /// The directory containing the artifact, empty if the path has none.
    pub fn source_location(&self) -> Result<String> {
        self.check_file_name()?;
        let parent = self.path.parent().unwrap_or_else(|| Path::new(""));
        parent
            .to_str()
            .map(ToString::to_string)
            .ok_or_else(|| Error::InvalidArtifactPath(self.path.clone()))
    }

    /// The base name of the artifact.
    pub fn file_to_sign(&self) -> Result<String> {
        self.check_file_name()?;
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .map(ToString::to_string)
            .ok_or_else(|| Error::InvalidArtifactPath(self.path.clone()))
    }

    /// A trailing separator names a directory, even though [`Path::file_name`] ignores it.
    fn check_file_name(&self) -> Result<()> {
        let path = self.path.as_os_str().to_string_lossy();
        match path.chars().last() {
            Some(last) if std::path::is_separator(last) => {
                Err(Error::InvalidArtifactPath(self.path.clone()))
            }
            _ => Ok(()),
        }
    }
}

/// Split a whitespace separated list of tokens into name/value pairs.
///
/// An odd number of tokens is rejected instead of dropping the unmatched last one.
pub fn parse_params(params: &str) -> Result<Vec<(String, String)>> {
    let tokens: Vec<&str> = params.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(Error::MalformedParams {
            count: tokens.len(),
        });
    }

    Ok(tokens
        .chunks_exact(2)
        .map(|pair| (pair[0].to_string(), pair[1].to_string()))
        .collect())
}
