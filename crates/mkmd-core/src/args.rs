//! Builds an [`Invocation`] from the raw command line tokens.
//!
//! ```text
//! [:wd:<path>] [:u:<pattern> [<title>] [<joinStr>] | <prefix> [<title>] [:o] [<joinStr>]]
//! ```

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{MkmdError, Result};
use crate::flags::{Flag, Tokens};
use crate::model::{ArgumentRecord, Invocation};
use crate::normalize::Normalizer;
use crate::utils::html::html_encode;

pub struct ArgsAssembler<'a> {
    config: &'a Config,
    normalizer: Normalizer<'a>,
    current_dir: PathBuf,
}

impl<'a> ArgsAssembler<'a> {
    /// `current_dir` anchors relative `:wd:` values and is the default work dir.
    pub fn new(config: &'a Config, current_dir: PathBuf) -> Self {
        Self {
            config,
            normalizer: Normalizer::new(config),
            current_dir,
        }
    }

    pub fn assemble(&self, mut tokens: Tokens) -> Result<Invocation> {
        let work_dir = self.resolve_work_dir(tokens.take_flag(&self.config.work_dir_flag_name));
        let mut record = ArgumentRecord::new(work_dir);

        match tokens.take_flag(&self.config.rename_flag_name) {
            Some(flag) => {
                record.rename_target = Some(flag.into_value().unwrap_or_default());
                self.on_rename(&mut record, tokens);
                log::debug!("rename invocation: {:?}", record);
                Ok(Invocation::Rename(record))
            }
            None => {
                record.open_after_create = tokens.take_flag(&self.config.open_flag_name).is_some();
                self.on_create(&mut record, tokens)?;
                log::debug!("create invocation: {:?}", record);
                Ok(Invocation::Create(record))
            }
        }
    }

    fn resolve_work_dir(&self, flag: Option<Flag>) -> PathBuf {
        match flag.as_ref().and_then(Flag::value) {
            Some(value) if !value.is_empty() => {
                let path = Path::new(value);
                if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    self.current_dir.join(path)
                }
            }
            _ => self.current_dir.clone(),
        }
    }

    /// Tokens after the flags are `[<title>] [<joinStr>]`. Anything past those is ignored.
    fn on_rename(&self, record: &mut ArgumentRecord, mut tokens: Tokens) {
        if let Some(raw_title) = tokens.pop_front() {
            self.set_title(record, &raw_title);
        }

        record.join_str = Some(
            tokens
                .pop_front()
                .unwrap_or_else(|| self.config.join_str.clone()),
        );
    }

    /// Tokens after the flags are `<prefix> [<title>] [<joinStr>]`.
    fn on_create(&self, record: &mut ArgumentRecord, mut tokens: Tokens) -> Result<()> {
        let prefix = tokens
            .pop_front()
            .map(|token| token.trim().to_string())
            .filter(|prefix| !prefix.is_empty())
            .ok_or_else(|| {
                MkmdError::InvalidArguments("a note name prefix is required".to_string())
            })?;
        record.name_prefix = Some(prefix);

        if let Some(raw_title) = tokens.pop_front() {
            self.set_title(record, &raw_title);
        }

        record.finalize(self.config, Some(&tokens))
    }

    fn set_title(&self, record: &mut ArgumentRecord, raw_title: &str) {
        record.title = self.normalizer.normalize_title(raw_title);
        record.encoded_title = record.title.as_deref().map(html_encode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assemble(config: &Config, tokens: &[&str]) -> Result<Invocation> {
        ArgsAssembler::new(config, PathBuf::from("/home/me/notes")).assemble(Tokens::new(tokens.iter().copied()))
    }

    fn expect_create(invocation: Invocation) -> ArgumentRecord {
        match invocation {
            Invocation::Create(record) => record,
            other => panic!("expected create invocation, got {:?}", other),
        }
    }

    fn expect_rename(invocation: Invocation) -> ArgumentRecord {
        match invocation {
            Invocation::Rename(record) => record,
            other => panic!("expected rename invocation, got {:?}", other),
        }
    }

    #[test]
    fn test_create_with_defaults() {
        let config = Config::default();
        let record = expect_create(assemble(&config, &["101", "My Note"]).unwrap());

        assert_eq!(record.work_dir, PathBuf::from("/home/me/notes"));
        assert_eq!(record.name_prefix.as_deref(), Some("101"));
        assert_eq!(record.title.as_deref(), Some("My Note"));
        assert_eq!(record.encoded_title.as_deref(), Some("My Note"));
        assert_eq!(record.final_file_name.as_deref(), Some("101-My Note.md"));
        assert!(!record.open_after_create);
        assert!(record.rename_target.is_none());
    }

    #[test]
    fn test_create_with_flags_anywhere() {
        let config = Config::default();
        let record = expect_create(
            assemble(&config, &["101", ":o", "Rust & C", ":wd:sub/dir", "_"]).unwrap(),
        );

        assert!(record.open_after_create);
        assert_eq!(record.work_dir, PathBuf::from("/home/me/notes/sub/dir"));
        assert_eq!(record.encoded_title.as_deref(), Some("Rust &amp; C"));
        assert_eq!(record.join_str.as_deref(), Some("_"));
        assert_eq!(record.final_file_name.as_deref(), Some("101_Rust & C.md"));
    }

    #[test]
    fn test_absolute_work_dir() {
        let config = Config::default();
        let record = expect_create(assemble(&config, &[":wd:/srv/notes", "1", "T"]).unwrap());
        assert_eq!(record.work_dir, PathBuf::from("/srv/notes"));
    }

    #[test]
    fn test_empty_work_dir_value_uses_current_dir() {
        let config = Config::default();
        let record = expect_create(assemble(&config, &[":wd:", "1", "T"]).unwrap());
        assert_eq!(record.work_dir, PathBuf::from("/home/me/notes"));
    }

    #[test]
    fn test_create_requires_prefix() {
        let config = Config::default();

        let err = assemble(&config, &[]).unwrap_err();
        assert!(matches!(err, MkmdError::InvalidArguments(_)));

        let err = assemble(&config, &["   ", "Title"]).unwrap_err();
        assert!(matches!(err, MkmdError::InvalidArguments(_)));
    }

    #[test]
    fn test_create_requires_title() {
        let config = Config::default();
        let err = assemble(&config, &["101"]).unwrap_err();
        assert!(matches!(err, MkmdError::InvalidArguments(_)));

        let err = assemble(&config, &["101", "  "]).unwrap_err();
        assert!(matches!(err, MkmdError::InvalidArguments(_)));
    }

    #[test]
    fn test_create_title_with_colon_and_macros() {
        let mut config = Config::default();
        config
            .title_macros
            .insert("@rs".to_string(), "Rust".to_string());
        let record = expect_create(assemble(&config, &["5", ":@rs||notes"]).unwrap());

        assert_eq!(record.title.as_deref(), Some("Rust|notes"));
        #[cfg(not(windows))]
        assert_eq!(record.final_file_name.as_deref(), Some("5-Rust|notes.md"));
        #[cfg(windows)]
        assert_eq!(record.final_file_name.as_deref(), Some("5-Rust notes.md"));
    }

    #[test]
    fn test_custom_flag_names() {
        let config = Config::from_json(
            r#"{ "WorkDirCmdArgName": "dir", "OpenMdFileCmdArgName": "open" }"#,
        )
        .unwrap();
        let record = expect_create(assemble(&config, &[":dir:/x", ":open", "1", "T"]).unwrap());
        assert_eq!(record.work_dir, PathBuf::from("/x"));
        assert!(record.open_after_create);
    }

    #[test]
    fn test_rename_without_title() {
        let config = Config::default();
        let record = expect_rename(assemble(&config, &[":u:101-*"]).unwrap());

        assert_eq!(record.rename_target.as_deref(), Some("101-*"));
        assert_eq!(record.title, None);
        assert_eq!(record.encoded_title, None);
        assert_eq!(record.join_str.as_deref(), Some("-"));
        assert_eq!(record.final_file_name, None);
    }

    #[test]
    fn test_rename_with_title_and_join_str() {
        let config = Config::default();
        let record = expect_rename(
            assemble(&config, &[":u:101 *", "<New> Title", " ", "extra"]).unwrap(),
        );

        assert_eq!(record.title.as_deref(), Some("<New> Title"));
        assert_eq!(record.encoded_title.as_deref(), Some("&lt;New&gt; Title"));
        assert_eq!(record.join_str.as_deref(), Some(" "));
    }

    #[test]
    fn test_rename_ignores_open_flag_scan() {
        let config = Config::default();
        let record = expect_rename(assemble(&config, &[":u:1-*", ":o"]).unwrap());
        // Rename mode never scans for the open flag, so ":o" is read as a title
        assert_eq!(record.title.as_deref(), Some("o"));
        assert!(!record.open_after_create);
    }
}
