use std::path::PathBuf;

use crate::config::Config;
use crate::error::{MkmdError, Result};
use crate::flags::Tokens;
use crate::normalize::Normalizer;

/// Arguments of a single invocation, filled in while the tokens are scanned
/// and completed by [`ArgumentRecord::finalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentRecord {
    /// Absolute directory the note lives in
    pub work_dir: PathBuf,
    /// Glob pattern of the note to rename. Present only in rename mode.
    pub rename_target: Option<String>,
    pub name_prefix: Option<String>,
    /// Title after macro expansion
    pub title: Option<String>,
    /// Title as written in the markdown heading
    pub encoded_title: Option<String>,
    /// File name portion derived from the title
    pub name_part: Option<String>,
    pub join_str: Option<String>,
    pub open_after_create: bool,
    pub final_file_name: Option<String>,
}

/// What the parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Write a new note. The record is already finalized.
    Create(ArgumentRecord),
    /// Rename an existing note. The record is finalized once the title is known.
    Rename(ArgumentRecord),
}

/// Result of the file operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created {
        path: PathBuf,
        open_after_create: bool,
    },
    Renamed {
        from: PathBuf,
        to: PathBuf,
    },
    /// The matched note already has the computed name
    Unchanged {
        path: PathBuf,
    },
}

impl ArgumentRecord {
    pub fn new(work_dir: PathBuf) -> Self {
        Self {
            work_dir,
            ..Self::default()
        }
    }

    /// Derive every field still missing. `remaining` holds the unconsumed
    /// tokens, whose first entry overrides the configured join string.
    pub fn finalize(&mut self, config: &Config, remaining: Option<&Tokens>) -> Result<()> {
        if self.name_part.is_none() {
            let title = self.title.as_deref().ok_or_else(|| {
                MkmdError::InvalidArguments("a note title is required".to_string())
            })?;
            self.name_part = Some(Normalizer::new(config).normalize_name_part(title));
        }

        if self.name_part.as_deref().map_or(true, str::is_empty) {
            return Err(MkmdError::InvalidArguments(format!(
                "the title {:?} leaves nothing to use in a file name",
                self.title.as_deref().unwrap_or_default()
            )));
        }

        let join_str = self
            .join_str
            .get_or_insert_with(|| {
                remaining
                    .and_then(Tokens::front)
                    .map(str::to_string)
                    .unwrap_or_else(|| config.join_str.clone())
            })
            .clone();

        if self.name_prefix.is_none() {
            self.name_prefix = Some(self.prefix_from_rename_target(&join_str)?);
        }

        if self.final_file_name.is_none() {
            let file_name = format!(
                "{}{}{}{}",
                self.name_prefix.as_deref().unwrap_or_default(),
                join_str,
                self.name_part.as_deref().unwrap_or_default(),
                config.md_extension
            );
            log::debug!("final file name: {:?}", file_name);
            self.final_file_name = Some(file_name);
        }

        Ok(())
    }

    /// `101-*` with join string `-` gives `101`. The part before the first `*`
    /// loses as many trailing characters as the join string has.
    fn prefix_from_rename_target(&self, join_str: &str) -> Result<String> {
        let target = self.rename_target.as_deref().ok_or_else(|| {
            MkmdError::InvalidArguments("a note name prefix is required".to_string())
        })?;

        let head = target.split('*').next().unwrap_or_default();
        let keep = head
            .chars()
            .count()
            .checked_sub(join_str.chars().count())
            .ok_or_else(|| {
                MkmdError::InvalidArguments(format!(
                    "cannot derive a name prefix from '{}' with join string '{}'",
                    target, join_str
                ))
            })?;

        Ok(head.chars().take(keep).collect())
    }
}
