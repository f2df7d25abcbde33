//! mkmd command line layer
//!
//! Loads the config, hands the raw arguments to the core library and
//! reports what happened.

use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};

use mkmd_core::{
    ArgsAssembler, Config, FileSystem, NoteFiles, Outcome, PhysicalFileSystem, Result, Tokens,
};

pub mod config_file;
pub mod viewer;


/// Run one invocation against the real file system, relative to the process's current directory.
pub fn run<I, S>(args: I, config: &Config, out: &mut dyn Write) -> Result<Outcome>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let current_dir = std::env::current_dir()?;
    run_in(args, config, current_dir, &PhysicalFileSystem, out)
}

/// Run one invocation and write its report to `out`.
///
/// The matched note of a rename is announced as soon as it is found, so it
/// is reported even when the rename then fails.
pub fn run_in<I, S>(
    args: I,
    config: &Config,
    current_dir: PathBuf,
    fs: &dyn FileSystem,
    out: &mut dyn Write,
) -> Result<Outcome>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let out = RefCell::new(out);
    let announce_match = |path: &Path| {
        if let Err(err) = writeln!(out.borrow_mut(), "Found matching file: {}", file_name(path)) {
            log::warn!("could not report the matching file: {}", err);
        }
    };

    let invocation = ArgsAssembler::new(config, current_dir).assemble(Tokens::new(args))?;
    let outcome = NoteFiles::new(config, fs)
        .on_match(&announce_match)
        .execute(invocation)?;

    report(&outcome, &mut **out.borrow_mut())?;
    Ok(outcome)
}

/// Print what the file operation did. Creating a note and an unchanged
/// name print nothing beyond the match announcement.
pub fn report(outcome: &Outcome, out: &mut dyn Write) -> std::io::Result<()> {
    match outcome {
        Outcome::Renamed { to, .. } => writeln!(out, "Renaming file to: {}", file_name(to)),
        Outcome::Created { .. } | Outcome::Unchanged { .. } => Ok(()),
    }
}

/// Follow-up actions after a successful run.
pub fn after_run(outcome: &Outcome) {
    if let Outcome::Created {
        path,
        open_after_create: true,
    } = outcome
    {
        viewer::open_in_viewer(path);
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
