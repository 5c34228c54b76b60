use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{AppError, AppResult};

use super::Launcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

/// The process that opens `url` in a named application. The URL is always a
/// single argument handed straight to the program, never through a shell.
pub fn application_command(platform: Platform, url: &str, application: &str) -> LaunchCommand {
    let (program, args) = match platform {
        Platform::MacOs if application.ends_with(".app") => ("open", vec!["-a", application, url]),
        _ => (application, vec![url]),
    };

    LaunchCommand {
        program: program.to_string(),
        args: args.into_iter().map(str::to_string).collect(),
    }
}

/// Opens URLs with the default browser or spawns the named application,
/// returning without waiting on it.
#[derive(Debug, Clone, Copy)]
pub struct SystemLauncher {
    platform: Platform,
}

impl SystemLauncher {
    pub fn new() -> Self {
        Self {
            platform: Platform::current(),
        }
    }
}

impl Default for SystemLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl Launcher for SystemLauncher {
    fn open(&self, url: &str, application: Option<&str>) -> AppResult<()> {
        let Some(application) = application else {
            debug!(url, "opening with default handler");
            return webbrowser::open(url)
                .map_err(|err| AppError::Launch(format!("default handler failed: {err}")));
        };

        let command = application_command(self.platform, url, application);
        debug!(program = %command.program, args = ?command.args, "spawning application");

        Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_child| ())
            .map_err(|err| AppError::Launch(format!("failed to start `{}`: {err}", command.program)))
    }
}
