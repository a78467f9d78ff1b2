use std::path::Path;
use std::process::Command;

use log::debug;

use crate::errors::{Result, SearchError};
use crate::task::SearchTask;

///
/// An external peptide search engine.
///
/// Implementations are shared between worker threads.
///
pub trait SearchEngine: Sync {
    fn name(&self) -> &str;

    ///
    /// Run one search to completion. Any error is fatal to the whole
    /// search stage.
    ///
    fn run(&self, task: &SearchTask) -> Result<()>;
}

///
/// Runs a program once per task.
///
/// The placeholders `{spectra}`, `{database}` and `{output}` in the
/// arguments are replaced with the paths of the task.
///
#[derive(Debug, Clone)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ExternalCommand {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExternalCommand {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn command_args(&self, task: &SearchTask) -> Vec<String> {
        let path = |p: &Path| p.to_string_lossy().to_string();
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{spectra}", &path(&task.spectra))
                    .replace("{database}", &path(&task.database))
                    .replace("{output}", &path(&task.output))
            })
            .collect()
    }
}

impl SearchEngine for ExternalCommand {
    fn name(&self) -> &str {
        &self.program
    }

    fn run(&self, task: &SearchTask) -> Result<()> {
        let args = self.command_args(task);
        debug!("Running {} {}", self.program, args.join(" "));

        let failed = |message: String| SearchError::EngineFailed {
            engine: self.program.clone(),
            task: task.to_string(),
            message,
        };

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| failed(format!("could not start: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(failed(format!("{}: {}", output.status, stderr.trim())));
        }
        Ok(())
    }
}
