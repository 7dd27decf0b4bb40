use crate::{
    error::Result,
    utils::runner::{ToolOutput, ToolRunner},
};
use std::path::{Path, PathBuf};

pub const AUTH_FILE: &str = "auth.json";
pub const INPUT_FILE: &str = "input.json";
pub const POLICY_FILE: &str = "policy.json";
pub const OUTPUT_FILE: &str = "esrp_out.json";

/// Location of the client executable, relative to the working directory
pub fn tool_path(base: &Path) -> PathBuf {
    base.join("esrp").join("tools").join("EsrpClient.exe")
}

/// Command line of a signing run, referencing the generated configuration files
pub fn sign_args() -> [&'static str; 11] {
    [
        "sign",
        "-a",
        AUTH_FILE,
        "-i",
        INPUT_FILE,
        "-p",
        POLICY_FILE,
        "-o",
        OUTPUT_FILE,
        "-l",
        "Verbose",
    ]
}

/// Run the ESRP client in `workspace`
pub fn run_client<R: ToolRunner>(runner: &R, tool: &Path, workspace: &Path) -> Result<ToolOutput> {
    log::info!("Running ESRP client: {}", tool.display());
    runner.execute(tool, &sign_args(), workspace)
}
