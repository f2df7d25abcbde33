use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_MD_EXTENSION: &str = ".md";
pub const DEFAULT_JOIN_STR: &str = "-";
pub const DEFAULT_WORK_DIR_FLAG: &str = "wd";
pub const DEFAULT_OPEN_FLAG: &str = "o";
pub const DEFAULT_RENAME_FLAG: &str = "u";
pub const DEFAULT_MAX_NAME_PART_LENGTH: usize = 100;
pub const DEFAULT_CONTENT_TEMPLATE: &str = "# {title}\n\n";

/// Slot in `content_template` replaced by the encoded title.
pub const TITLE_SLOT: &str = "{title}";
/// Positional spelling of the title slot, accepted for older config documents.
const POSITIONAL_TITLE_SLOT: &str = "{0}";

/// Normalized configuration. Every field carries an effective value.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub md_extension: String,
    pub join_str: String,
    pub work_dir_flag_name: String,
    pub open_flag_name: String,
    pub rename_flag_name: String,
    pub max_name_part_length: usize,
    pub content_template: String,
    /// Literal substring replacements applied to titles, in document order
    pub title_macros: IndexMap<String, String>,
}

/// The external config document as written by the user.
/// Any key may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigDocument {
    pub md_file_name_extension: Option<String>,
    pub full_file_name_join_str: Option<String>,
    pub work_dir_cmd_arg_name: Option<String>,
    pub open_md_file_cmd_arg_name: Option<String>,
    pub update_md_file_name_cmd_arg_name: Option<String>,
    pub max_dir_name_length: Option<usize>,
    pub md_file_contents_template: Option<String>,
    pub title_macros: Option<IndexMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            md_extension: DEFAULT_MD_EXTENSION.to_string(),
            join_str: DEFAULT_JOIN_STR.to_string(),
            work_dir_flag_name: DEFAULT_WORK_DIR_FLAG.to_string(),
            open_flag_name: DEFAULT_OPEN_FLAG.to_string(),
            rename_flag_name: DEFAULT_RENAME_FLAG.to_string(),
            max_name_part_length: DEFAULT_MAX_NAME_PART_LENGTH,
            content_template: DEFAULT_CONTENT_TEMPLATE.to_string(),
            title_macros: IndexMap::new(),
        }
    }
}

impl Config {
    /// Fill every key the document leaves out with its default.
    /// A `MaxDirNameLength` of 0 counts as missing.
    pub fn from_document(doc: ConfigDocument) -> Self {
        let defaults = Self::default();

        Self {
            md_extension: doc.md_file_name_extension.unwrap_or(defaults.md_extension),
            join_str: doc.full_file_name_join_str.unwrap_or(defaults.join_str),
            work_dir_flag_name: doc
                .work_dir_cmd_arg_name
                .unwrap_or(defaults.work_dir_flag_name),
            open_flag_name: doc
                .open_md_file_cmd_arg_name
                .unwrap_or(defaults.open_flag_name),
            rename_flag_name: doc
                .update_md_file_name_cmd_arg_name
                .unwrap_or(defaults.rename_flag_name),
            max_name_part_length: doc
                .max_dir_name_length
                .filter(|len| *len != 0)
                .unwrap_or(defaults.max_name_part_length),
            content_template: doc
                .md_file_contents_template
                .unwrap_or(defaults.content_template),
            title_macros: doc.title_macros.unwrap_or(defaults.title_macros),
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(Self::from_document(ConfigDocument::from_json(content)?))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(Self::from_document(ConfigDocument::from_yaml(content)?))
    }

    /// Render the new file's contents with the encoded title in the template slot.
    pub fn render_contents(&self, encoded_title: &str) -> String {
        let slot = if self.content_template.contains(TITLE_SLOT) {
            TITLE_SLOT
        } else {
            POSITIONAL_TITLE_SLOT
        };
        self.content_template.replace(slot, encoded_title)
    }
}

impl ConfigDocument {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty YAML file deserializes to unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}
