//! Projection rules expressed as select strings.
//!
//! A select string is a whitespace-separated list of field names, as passed
//! to a query's `select`. When any entry starts with `-` the whole string is
//! an exclusion list; otherwise it lists the only fields that are returned
//! (a leading `+` is accepted on inclusions).

use regex::{Regex, RegexBuilder};

use crate::errors::SwaggerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    Inclusive,
    Exclusive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    select: String,
    mode: SelectMode,
}

impl Selection {
    /// Parse a select string; blank strings carry no rule and yield `None`
    #[must_use]
    pub fn parse(select: &str) -> Option<Self> {
        if select.trim().is_empty() {
            return None;
        }
        let mode = if select.split_whitespace().any(|entry| entry.starts_with('-')) {
            SelectMode::Exclusive
        } else {
            SelectMode::Inclusive
        };
        Some(Self {
            select: select.to_string(),
            mode,
        })
    }

    #[must_use]
    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.select
    }

    /// Whether `name` survives this projection.
    ///
    /// `id_field` is always returned by an inclusive projection.
    ///
    /// # Errors
    ///
    /// Returns [`SwaggerError::InvalidSelect`] if the per-field pattern
    /// cannot be compiled.
    pub fn allows(&self, name: &str, id_field: &str) -> Result<bool, SwaggerError> {
        let escaped = regex::escape(name);
        match self.mode {
            SelectMode::Exclusive => {
                let excluded = field_pattern(name, &format!(r"\B-{escaped}\b"))?;
                Ok(!excluded.is_match(&self.select))
            }
            SelectMode::Inclusive => {
                if name == id_field {
                    return Ok(true);
                }
                let included = field_pattern(name, &format!(r"(?:\B[+]|\b){escaped}\b"))?;
                Ok(included.is_match(&self.select))
            }
        }
    }
}

fn field_pattern(field: &str, pattern: &str) -> Result<Regex, SwaggerError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| SwaggerError::InvalidSelect {
            field: field.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_select_has_no_rule() {
        assert!(Selection::parse("").is_none());
        assert!(Selection::parse("   ").is_none());
    }

    #[test]
    fn test_mode_detection() {
        assert_eq!(Selection::parse("name age").unwrap().mode(), SelectMode::Inclusive);
        assert_eq!(Selection::parse("+name").unwrap().mode(), SelectMode::Inclusive);
        assert_eq!(Selection::parse("-salt").unwrap().mode(), SelectMode::Exclusive);
        assert_eq!(Selection::parse("name -salt").unwrap().mode(), SelectMode::Exclusive);
        // A hyphen inside a name is not an exclusion marker
        assert_eq!(Selection::parse("first-name").unwrap().mode(), SelectMode::Inclusive);
    }

    #[test]
    fn test_exclusive_drops_listed_fields_only() {
        let selection = Selection::parse("-salt -hash").unwrap();
        assert!(!selection.allows("salt", "_id").unwrap());
        assert!(!selection.allows("hash", "_id").unwrap());
        assert!(selection.allows("name", "_id").unwrap());
        assert!(selection.allows("saltiness", "_id").unwrap());
    }

    #[test]
    fn test_exclusive_is_case_insensitive() {
        let selection = Selection::parse("-Salt").unwrap();
        assert!(!selection.allows("salt", "_id").unwrap());
    }

    #[test]
    fn test_inclusive_keeps_listed_fields_and_id() {
        let selection = Selection::parse("name +age").unwrap();
        assert!(selection.allows("name", "_id").unwrap());
        assert!(selection.allows("age", "_id").unwrap());
        assert!(selection.allows("_id", "_id").unwrap());
        assert!(!selection.allows("email", "_id").unwrap());
        assert!(!selection.allows("nam", "_id").unwrap());
    }

    #[test]
    fn test_inclusive_uses_the_configured_id_field() {
        let selection = Selection::parse("name").unwrap();
        assert!(selection.allows("id", "id").unwrap());
        assert!(!selection.allows("_id", "id").unwrap());
    }

    #[test]
    fn test_field_names_are_escaped() {
        let selection = Selection::parse("address.city").unwrap();
        assert!(selection.allows("address.city", "_id").unwrap());
        let selection = Selection::parse("addressXcity").unwrap();
        assert!(!selection.allows("address.city", "_id").unwrap());
    }
}
