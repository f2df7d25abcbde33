//! Flag scanning over the raw command line tokens.
//!
//! Flags are written `:<name>` (boolean) or `:<name>:<value>` and may appear
//! anywhere among the positional tokens.

/// A matched flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flag {
    /// `:<name>`
    Bool,
    /// `:<name>:<value>`
    Value(String),
}

impl Flag {
    pub fn value(&self) -> Option<&str> {
        match self {
            Flag::Bool => None,
            Flag::Value(value) => Some(value.as_str()),
        }
    }

    pub fn into_value(self) -> Option<String> {
        match self {
            Flag::Bool => None,
            Flag::Value(value) => Some(value),
        }
    }
}

/// The tokens not yet consumed by flag scans or positional reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    items: Vec<String>,
}

impl Tokens {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Remove and return the first token matching `:<flag_name>` or `:<flag_name>:...`.
    ///
    /// The exact boolean form takes priority for the token it matches; only one
    /// token is consumed per call. Callers decide what a missing flag defaults to.
    pub fn take_flag(&mut self, flag_name: &str) -> Option<Flag> {
        let bool_form = format!(":{}", flag_name);
        let value_prefix = format!("{}:", bool_form);

        let idx = self
            .items
            .iter()
            .position(|token| *token == bool_form || token.starts_with(&value_prefix))?;

        let token = self.items.remove(idx);
        let flag = if token == bool_form {
            Flag::Bool
        } else {
            Flag::Value(token[value_prefix.len()..].to_string())
        };

        log::debug!("flag {:?} matched {:?}", flag_name, flag);
        Some(flag)
    }

    /// Remove and return the next positional token.
    pub fn pop_front(&mut self) -> Option<String> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    pub fn front(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}
