use std::{
    fs,
    io::{ErrorKind, Write},
    path::PathBuf,
    process::{Command, Stdio},
};

use facelets::FaceletString;
use log::debug;

use crate::{EngineError, RawSolution, SolvingEngine, config::EngineConfig};

/// A solving engine living in another executable.
///
/// Each solve runs the program once. The facelet string and a newline are
/// written to its stdin; whatever it prints to stdout is the raw move string
/// and its exit code is the status.
///
/// ```text
/// $ echo 111111111222222222333333333444444444555555555666666666 | cubex
/// $ echo $?
/// 0
/// ```
#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CommandEngine {
    pub fn new(program: impl Into<String>) -> Self {
        CommandEngine {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        CommandEngine {
            program: config.program.clone(),
            args: config.args.clone(),
            working_dir: config.resolved_working_dir(),
        }
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Engines that dump lookup tables do so here. Created on first use.
    #[must_use]
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl SolvingEngine for CommandEngine {
    fn solve(&mut self, facelets: &FaceletString) -> Result<RawSolution, EngineError> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        if let Some(dir) = &self.working_dir {
            fs::create_dir_all(dir)?;
            command.current_dir(dir);
        }

        debug!(
            target: "command_engine",
            "Starting engine: program={} args={:?}", self.program, self.args
        );
        let mut child = command.spawn().map_err(|source| EngineError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if let Some(mut stdin) = child.stdin.take() {
            match writeln!(stdin, "{facelets}") {
                // The engine is allowed to answer without reading its input
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!(target: "command_engine", "Engine closed its stdin early");
                }
                result => result?,
            }
        }

        let output = child.wait_with_output()?;
        let status = output.status.code().unwrap_or(-1);
        let moves = String::from_utf8_lossy(&output.stdout).trim_end().to_owned();

        debug!(
            target: "command_engine",
            "Engine finished: status={status} moves={moves:?}"
        );

        Ok(RawSolution { status, moves })
    }
}
