//! Pager routing for report output.

use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

/// Pipe `content` through the configured pager.
///
/// The pager command comes from `GLANCE_PAGER`, then `PAGER`, then
/// falls back to `less`. When less is used, `LESS=-RFX` is set unless
/// already present:
/// - `-R`: pass ANSI color codes through
/// - `-F`: quit immediately if the content fits on one screen
/// - `-X`: don't clear the screen on exit
///
/// If the pager cannot be spawned, the content is printed directly.
pub fn page(content: &str) {
    let pager = pager_command();
    let mut parts = pager.split_whitespace();
    let Some(program) = parts.next() else {
        print!("{content}");
        return;
    };

    let mut cmd = Command::new(program);
    cmd.args(parts);
    cmd.stdin(Stdio::piped());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());

    if env::var_os("LESS").is_none() {
        cmd.env("LESS", "-RFX");
    }

    match cmd.spawn() {
        Ok(mut child) => {
            if let Some(ref mut stdin) = child.stdin {
                // Ignore write errors (e.g. broken pipe when the user
                // quits the pager early).
                let _ = stdin.write_all(content.as_bytes());
            }
            // Drop stdin to signal EOF to the pager.
            drop(child.stdin.take());
            let _ = child.wait();
        }
        Err(_) => {
            print!("{content}");
        }
    }
}

/// Returns the pager command to use.
fn pager_command() -> String {
    for var in ["GLANCE_PAGER", "PAGER"] {
        if let Ok(pager) = env::var(var) {
            if !pager.is_empty() {
                return pager;
            }
        }
    }
    "less".to_string()
}
