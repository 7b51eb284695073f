// Shared test helpers for integration tests
#![allow(dead_code)]

use coral_cts::core::thermal::ThermalSampler;
use coral_cts::infra::command::{Invocation, ProcessOutcome, ProcessRunner};
use coral_cts::suite::TestSuite;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::{tempdir, TempDir};

/// What a scripted program does when "launched".
#[derive(Debug, Clone)]
pub enum Script {
    /// Emits the lines, then exits with the code.
    Exits { lines: Vec<String>, code: i32 },
    /// Fails to launch with this message.
    LaunchError(String),
}

impl Script {
    pub fn exits(lines: &[&str], code: i32) -> Self {
        Script::Exits {
            lines: lines.iter().map(|line| line.to_string()).collect(),
            code,
        }
    }
}

/// A `ProcessRunner` that never spawns anything. Programs are looked up by
/// file name; unknown programs fail to launch like a missing executable.
#[derive(Default)]
pub struct FakeRunner {
    scripts: HashMap<String, Script>,
    calls: Mutex<Vec<Invocation>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, program: &str, script: Script) -> Self {
        self.scripts.insert(program.to_string(), script);
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called_programs(&self) -> Vec<String> {
        self.calls().iter().map(|call| call.name()).collect()
    }
}

impl ProcessRunner for FakeRunner {
    async fn run(
        &self,
        invocation: &Invocation,
        on_line: &mut dyn FnMut(&str),
    ) -> io::Result<ProcessOutcome> {
        self.calls.lock().unwrap().push(invocation.clone());
        match self.scripts.get(&invocation.name()) {
            Some(Script::Exits { lines, code }) => {
                for line in lines {
                    on_line(line);
                }
                Ok(ProcessOutcome::exited(*code))
            }
            Some(Script::LaunchError(message)) => Err(io::Error::other(message.clone())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such file or directory: '{}'", invocation.program.display()),
            )),
        }
    }
}

/// A temporary working directory with an output path inside it.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempdir().expect("Failed to create temporary directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn output(&self) -> PathBuf {
        self.dir.path().join("tflite_utils_test.txt")
    }

    /// A quiet suite whose temperatures come from `thermal_root`.
    pub fn suite_with_sampler(&self, thermal_root: &Path) -> TestSuite {
        TestSuite::create(&self.output(), self.path(), ThermalSampler::new(thermal_root))
            .expect("Failed to create suite")
            .quiet()
    }

    /// A quiet suite with no readable temperatures.
    pub fn suite(&self) -> TestSuite {
        self.suite_with_sampler(&self.dir.path().join("no-thermal"))
    }

    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.output()).expect("Failed to read output file")
    }
}

/// Creates `<root>/apex_<n>/temp` files holding the given millidegree values.
pub fn write_thermal_files(root: &Path, millidegrees: &[&str]) {
    for (index, value) in millidegrees.iter().enumerate() {
        let device = root.join(format!("apex_{index}"));
        std::fs::create_dir_all(&device).unwrap();
        std::fs::write(device.join("temp"), value).unwrap();
    }
}
