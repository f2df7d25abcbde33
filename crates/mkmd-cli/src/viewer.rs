use std::path::Path;
use std::process::{Command, Stdio};

/// When set, created notes are never opened.
pub const NO_OPEN_ENV: &str = "MKMD_NO_OPEN";

/// Program that opens a path with the desktop's default application.
pub fn opener_program() -> &'static str {
    if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Open `path` in the default viewer without waiting for it.
/// Failing to launch the viewer only logs a warning.
pub fn open_in_viewer(path: &Path) {
    if std::env::var_os(NO_OPEN_ENV).is_some() {
        log::info!("{} is set; not opening {}", NO_OPEN_ENV, path.display());
        return;
    }

    let program = opener_program();
    let spawned = Command::new(program)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(_) => log::debug!("launched {} for {}", program, path.display()),
        Err(err) => log::warn!("could not open {} with {}: {}", path.display(), program, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opener_program_for_platform() {
        let program = opener_program();
        #[cfg(target_os = "linux")]
        assert_eq!(program, "xdg-open");
        assert!(!program.is_empty());
    }
}
