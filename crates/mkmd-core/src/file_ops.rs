use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{MkmdError, Result};
use crate::model::{ArgumentRecord, Invocation, Outcome};
use crate::utils::html::html_decode;
use crate::vfs::FileSystem;

const HEADING_PREFIX: &str = "# ";
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Performs the single file operation an invocation asks for.
pub struct NoteFiles<'a> {
    config: &'a Config,
    fs: &'a dyn FileSystem,
    on_match: Option<&'a dyn Fn(&Path)>,
}

impl<'a> NoteFiles<'a> {
    pub fn new(config: &'a Config, fs: &'a dyn FileSystem) -> Self {
        Self {
            config,
            fs,
            on_match: None,
        }
    }

    /// Call `listener` with the note a rename pattern matched, before the
    /// title is recovered or the target name is checked.
    pub fn on_match(mut self, listener: &'a dyn Fn(&Path)) -> Self {
        self.on_match = Some(listener);
        self
    }

    pub fn execute(&self, invocation: Invocation) -> Result<Outcome> {
        match invocation {
            Invocation::Create(record) => self.create(&record),
            Invocation::Rename(record) => self.rename(record),
        }
    }

    /// Write the templated note. An existing file at the path is overwritten.
    pub fn create(&self, record: &ArgumentRecord) -> Result<Outcome> {
        let file_name = record.final_file_name.as_deref().ok_or_else(|| {
            MkmdError::InvalidArguments("the note file name has not been computed".to_string())
        })?;
        let path = record.work_dir.join(file_name);

        let contents = self
            .config
            .render_contents(record.encoded_title.as_deref().unwrap_or_default());
        self.fs.write(&path, &contents)?;

        log::info!("created {}", path.display());
        Ok(Outcome::Created {
            path,
            open_after_create: record.open_after_create,
        })
    }

    /// Rename the single note matching `rename_target` to the name computed from its title.
    pub fn rename(&self, mut record: ArgumentRecord) -> Result<Outcome> {
        let pattern = record.rename_target.clone().unwrap_or_default();
        let source = self.find_single_match(&record.work_dir, &pattern)?;
        log::info!("found matching file {}", source.display());
        if let Some(listener) = self.on_match {
            listener(&source);
        }

        match record.title.clone() {
            None => {
                let encoded = self.read_heading(&source)?;
                record.title = Some(html_decode(&encoded));
                record.encoded_title.get_or_insert(encoded);
            }
            Some(title) => {
                // Decodes rather than encodes; kept as the established behavior
                if record.encoded_title.is_none() {
                    record.encoded_title = Some(html_decode(&title));
                }
            }
        }

        record.finalize(self.config, None)?;

        let file_name = record.final_file_name.as_deref().unwrap_or_default();
        let target = record.work_dir.join(file_name);

        if target == source {
            log::info!("{} already has the expected name", source.display());
            return Ok(Outcome::Unchanged { path: source });
        }

        if self.fs.exists(&target) {
            return Err(MkmdError::NameCollision(target));
        }

        self.fs.rename(&source, &target)?;
        log::info!("renamed {} to {}", source.display(), target.display());

        Ok(Outcome::Renamed {
            from: source,
            to: target,
        })
    }

    /// The pattern is matched against file names directly inside `dir` and must match exactly one.
    fn find_single_match(&self, dir: &Path, pattern: &str) -> Result<PathBuf> {
        let glob = Pattern::new(pattern)?;
        let options = MatchOptions {
            case_sensitive: !cfg!(windows),
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };

        let mut matches: Vec<PathBuf> = self
            .fs
            .list_files(dir)?
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .map(|name| glob.matches_with(&name.to_string_lossy(), options))
                    .unwrap_or(false)
            })
            .collect();

        if matches.len() != 1 {
            log::debug!("pattern {:?} matched {:?}", pattern, matches);
            return Err(MkmdError::AmbiguousTarget {
                pattern: pattern.to_string(),
                count: matches.len(),
            });
        }

        Ok(matches.remove(0))
    }

    /// The text after the first `# ` line, trimmed. This is the encoded title.
    fn read_heading(&self, path: &Path) -> Result<String> {
        let contents = self.fs.read_to_string(path)?;
        let contents = contents.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&contents);

        contents
            .lines()
            .find_map(|line| line.strip_prefix(HEADING_PREFIX))
            .map(|title| title.trim().to_string())
            .ok_or_else(|| MkmdError::MissingHeading(path.to_path_buf()))
    }
}
