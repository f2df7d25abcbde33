//! Title and file name normalization.

use crate::config::Config;
use crate::utils::{is_invalid_file_name_char, truncate_chars};

/// Separator users type to get a literal `|` in a title.
const ESCAPED_PIPE: &str = "||";

/// Turns raw titles into the strings used in headings and file names.
pub struct Normalizer<'a> {
    config: &'a Config,
}

impl<'a> Normalizer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Normalize a user supplied title.
    ///
    /// - Blank input is treated as absent
    /// - One leading `:` is stripped, so titles that look like flags can still be passed
    /// - Title macros are applied to each `||`-separated part, then the parts are joined with `|`
    pub fn normalize_title(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let title = trimmed.strip_prefix(':').unwrap_or(trimmed);

        let parts: Vec<String> = title
            .split(ESCAPED_PIPE)
            .map(|part| self.apply_macros(part))
            .collect();

        Some(parts.join("|"))
    }

    fn apply_macros(&self, part: &str) -> String {
        self.config
            .title_macros
            .iter()
            .fold(part.to_string(), |acc, (from, to)| acc.replace(from.as_str(), to))
    }

    /// Derive the file name part from a title.
    ///
    /// `/` becomes `%`, runs of invalid characters collapse into a single space,
    /// and the result is capped at `max_name_part_length` characters.
    /// A trailing `.` gets a `%` appended since some file systems drop it.
    pub fn normalize_name_part(&self, title: &str) -> String {
        let replaced = title.replace('/', "%");

        let joined = replaced
            .split(is_invalid_file_name_char)
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let mut name_part = joined.trim();
        if name_part.chars().count() > self.config.max_name_part_length {
            name_part = truncate_chars(name_part, self.config.max_name_part_length).trim_end();
        }

        let mut name_part = name_part.to_string();
        if name_part.ends_with('.') {
            name_part.push('%');
        }

        log::debug!("name part for {:?}: {:?}", title, name_part);
        name_part
    }
}
