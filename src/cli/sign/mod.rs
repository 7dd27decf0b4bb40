use crate::{
    data::{AuthConfig, Environment, PolicyConfig, SignInputConfig, SigningRequest},
    error::Error,
    utils::{
        redact::redact,
        runner::{ProcessRunner, ToolRunner},
    },
};
use anyhow::Context;
use serde::Serialize;
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

mod esrp;

pub use esrp::*;

#[derive(Clone, Debug)]
pub struct Options {
    pub path: PathBuf,
    pub keycode: String,
    pub opcode: String,
    pub params: Option<String>,
}

pub(crate) fn run(options: Options) -> anyhow::Result<()> {
    let request = SigningRequest::new(
        options.path,
        options.keycode,
        options.opcode,
        options.params.as_deref(),
    )?;
    let env = Environment::from_env()?;
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;

    log::info!("Signing request: {request:?}");

    sign(&request, &env, &cwd, &ProcessRunner, &mut io::stdout().lock())
}

/// Sign an artifact with the ESRP client.
///
/// The configuration files are written to `dir`, which is also where the client executable and
/// its result file are looked up. The client itself runs inside the workspace.
pub(crate) fn sign<R, W>(
    request: &SigningRequest,
    env: &Environment,
    dir: &Path,
    runner: &R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: ToolRunner,
    W: Write,
{
    let input = SignInputConfig::new(request, env)?;

    write_json(&dir.join(AUTH_FILE), &AuthConfig::new(env))?;
    write_json(&dir.join(INPUT_FILE), &input)?;
    write_json(&dir.join(POLICY_FILE), &PolicyConfig::default())?;

    let output = run_client(runner, &tool_path(dir), &env.workspace)?;

    writeln!(out, "{}", redact(&output.stdout))?;

    if !output.success() {
        writeln!(out, "Failed to run ESRPClient.exe")?;
        return Err(Error::ExternalToolFailure(output.code).into());
    }

    let result = dir.join(OUTPUT_FILE);
    if result.is_file() {
        let data = fs::read_to_string(&result)
            .with_context(|| format!("Failed to read {}", result.display()))?;
        let value: serde_json::Value = serde_json::from_str(&data)
            .map_err(|source| Error::ResultParseFailure {
                path: result.clone(),
                source,
            })?;

        writeln!(out, "ESRP output json:")?;
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        log::debug!("No result file at {}", result.display());
    }

    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Wrote {}", path.display());

    Ok(())
}
