//! Fakes shared by the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use lintbridge::{
    AdapterError, CommandChecker, LintObserver, ProcessRunner, RawToolOutput, RunOptions,
};

pub fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

pub fn raw(status: i32, stdout: &str) -> RawToolOutput {
    RawToolOutput {
        status,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

/// Something the fake runner saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start(String),
    End(String),
}

/// Process runner that returns scripted output and records every command.
#[derive(Default)]
pub struct FakeRunner {
    /// (command substring, output) pairs; first match wins.
    responses: Vec<(String, RawToolOutput)>,
    /// How long each command "runs" between its start and end events.
    delay: Option<Duration>,
    events: Mutex<Vec<Event>>,
    options: Mutex<Vec<RunOptions>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, needle: &str, output: RawToolOutput) -> Self {
        self.responses.push((needle.to_string(), output));
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Commands in the order they were started.
    pub fn commands(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                Event::Start(c) => Some(c.clone()),
                Event::End(_) => None,
            })
            .collect()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn options(&self) -> Vec<RunOptions> {
        self.options.lock().unwrap().clone()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, command: &str, options: &RunOptions) -> Result<RawToolOutput, AdapterError> {
        self.events
            .lock()
            .unwrap()
            .push(Event::Start(command.to_string()));
        self.options.lock().unwrap().push(options.clone());

        let output = self
            .responses
            .iter()
            .find(|(needle, _)| command.contains(needle.as_str()))
            .map(|(_, out)| out.clone())
            .unwrap_or_default();

        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }

        self.events
            .lock()
            .unwrap()
            .push(Event::End(command.to_string()));

        if output.status != 0 && !options.ignore_errors {
            return Err(AdapterError::Process {
                command: command.to_string(),
                status: output.status,
                stderr: output.stderr,
            });
        }
        Ok(output)
    }
}

/// Command checker backed by a fixed list of installed executables.
pub struct FakeCommands(pub Vec<&'static str>);

impl FakeCommands {
    pub fn all() -> Self {
        Self(vec![
            "api-linter",
            "npx",
            "flake8",
            "black",
            "go",
            "swiftformat",
        ])
    }

    pub fn none() -> Self {
        Self(Vec::new())
    }
}

impl CommandChecker for FakeCommands {
    fn exists(&self, name: &str) -> bool {
        self.0.contains(&name)
    }
}

/// Observer that keeps a log of hook calls.
#[derive(Default)]
pub struct RecordingObserver {
    pub log: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn entries(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl LintObserver for RecordingObserver {
    fn setup_failed(&self, adapter: &str, _error: &AdapterError) {
        self.log.lock().unwrap().push(format!("setup_failed:{}", adapter));
    }

    fn files_discovered(&self, adapter: &str, _dir: &Path, files: &[String]) {
        self.log
            .lock()
            .unwrap()
            .push(format!("files:{}:{}", adapter, files.len()));
    }

    fn no_files_matched(&self, adapter: &str, _dir: &Path) {
        self.log.lock().unwrap().push(format!("no_files:{}", adapter));
    }

    fn command_built(&self, adapter: &str, _command: &str) {
        self.log.lock().unwrap().push(format!("command:{}", adapter));
    }

    fn raw_output(&self, adapter: &str, output: &RawToolOutput) {
        self.log
            .lock()
            .unwrap()
            .push(format!("raw:{}:{}", adapter, output.status));
    }
}
