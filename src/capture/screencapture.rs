//! Launching the OS screenshot tool
//!
//! The tool is invoked with exactly one argument, the flag built from the
//! current [`CaptureSettings`], and the caller blocks until it exits. With
//! the area and window modes that includes the user's interactive selection,
//! so callers on the UI thread should run this on a worker.

use log::{debug, info};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::app::CaptureSettings;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Could not launch {}: {source}", .path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Screenshot tool exited with {status} (flag {flag})")]
    Exited { flag: String, status: ExitStatus },

    #[error("Screenshot worker stopped unexpectedly")]
    Worker,
}

/// Handle to the external screenshot executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotTool {
    path: PathBuf,
}

impl ScreenshotTool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build the command for a capture without running it
    pub fn command(&self, settings: &CaptureSettings) -> Command {
        let mut command = Command::new(&self.path);
        command.arg(settings.flag());
        command
    }

    /// Run the tool and wait for it to exit
    pub fn run(&self, settings: &CaptureSettings) -> Result<(), CaptureError> {
        let flag = settings.flag();
        debug!("Launching {} {}", self.path.display(), flag);

        let status = self
            .command(settings)
            .status()
            .map_err(|source| CaptureError::Launch {
                path: self.path.clone(),
                source,
            })?;

        if !status.success() {
            return Err(CaptureError::Exited { flag, status });
        }

        info!("Screenshot tool finished ({})", flag);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{CaptureMode, PreviewToggle};

    #[test]
    fn test_command_passes_single_flag() {
        let tool = ScreenshotTool::new("/usr/sbin/screencapture");
        let settings = CaptureSettings::new(CaptureMode::Window, PreviewToggle::Yes);

        let command = tool.command(&settings);
        let args: Vec<_> = command.get_args().collect();

        assert_eq!(command.get_program(), "/usr/sbin/screencapture");
        assert_eq!(args, ["-cwP"]);
    }

    #[test]
    fn test_missing_executable_fails_to_launch() {
        let tool = ScreenshotTool::new("/nonexistent/screenshot-tool");
        let result = tool.run(&CaptureSettings::default());

        match result {
            Err(CaptureError::Launch { path, source }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/screenshot-tool"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected launch error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_exit() {
        let tool = ScreenshotTool::new("true");
        assert!(tool.run(&CaptureSettings::default()).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_exit_reports_flag() {
        let tool = ScreenshotTool::new("false");
        let settings = CaptureSettings::new(CaptureMode::Area, PreviewToggle::No);

        match tool.run(&settings) {
            Err(CaptureError::Exited { flag, status }) => {
                assert_eq!(flag, "-cs");
                assert!(!status.success());
            }
            other => panic!("expected exit error, got {:?}", other),
        }
    }
}
