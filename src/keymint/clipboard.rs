use crate::error::{KeymintError, Result};

/// Write-only clipboard collaborator. Production code uses
/// [`SystemClipboard`]; tests substitute doubles that succeed or fail on
/// demand.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        copy_to_system_clipboard(text)
    }
}

fn copy_to_system_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_through("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        // Try xclip first, then xsel
        pipe_through("xclip", &["-selection", "clipboard"], text).or_else(|_| {
            pipe_through("xsel", &["--clipboard", "--input"], text).map_err(|e| {
                KeymintError::Clipboard(format!("{}. Install xclip or xsel.", e))
            })
        })
    }

    #[cfg(target_os = "windows")]
    {
        pipe_through("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(KeymintError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[allow(dead_code)]
fn pipe_through(program: &str, args: &[&str], text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| KeymintError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| KeymintError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| KeymintError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(KeymintError::Clipboard(format!(
            "{} exited with error",
            program
        )))
    }
}
