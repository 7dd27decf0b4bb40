use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required environment variable is absent or blank
    #[error("missing required environment variable `{0}`")]
    MissingConfiguration(&'static str),
    /// `--params` must contain name/value pairs
    #[error("--params expects name/value pairs, got {count} tokens")]
    MalformedParams { count: usize },
    #[error("artifact path has no usable file name: {}", .0.display())]
    InvalidArtifactPath(PathBuf),
    #[error("failed to launch {} in {}", tool.display(), cwd.display())]
    ToolLaunch {
        tool: PathBuf,
        cwd: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("signing tool failed: {}", describe_code(.0))]
    ExternalToolFailure(Option<i32>),
    #[error("failed to parse {}", path.display())]
    ResultParseFailure {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
