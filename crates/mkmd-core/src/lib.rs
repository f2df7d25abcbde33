//! mkmd Core Library
//!
//! Turns command line tokens into a markdown note file name and performs
//! the create or rename operation for it.
//!

pub mod args;
pub mod config;
pub mod error;
pub mod file_ops;
pub mod flags;
pub mod model;
pub mod normalize;
pub mod utils;
pub mod vfs;


use std::path::PathBuf;

pub use args::ArgsAssembler;
pub use config::{Config, ConfigDocument};
pub use error::{MkmdError, Result};
pub use file_ops::NoteFiles;
pub use flags::Tokens;
pub use model::{ArgumentRecord, Invocation, Outcome};
pub use normalize::Normalizer;
pub use vfs::{FileSystem, PhysicalFileSystem};

/// Parse `tokens` and perform the resulting file operation.
pub fn run<I, S>(
    tokens: I,
    config: &Config,
    current_dir: PathBuf,
    fs: &dyn FileSystem,
) -> Result<Outcome>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let invocation = ArgsAssembler::new(config, current_dir).assemble(Tokens::new(tokens))?;
    NoteFiles::new(config, fs).execute(invocation)
}
