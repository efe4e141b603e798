//! Introspectable schema representation.
//!
//! A [`Schema`] is an ordered list of [`SchemaPath`]s, one per field. Dotted
//! path names (`address.city`) describe nested objects, and document arrays
//! carry their element schema inline. Schemas are usually obtained from a
//! Sea-ORM entity with [`Schema::from_entity`], but they can also be built by
//! hand or deserialized from JSON.

use serde::{Deserialize, Serialize};

/// Primitive type of a schema path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    String,
    Number,
    Date,
    Boolean,
    ObjectId,
    Array,
    Object,
    Mixed,
    Buffer,
    /// A type the document generator does not know how to describe
    Other(String),
}

/// A single field of a schema, with its validation constraints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaPath {
    pub name: String,
    /// `None` for virtual paths, which are documented as strings
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    /// `Some(false)` hides the path from every projection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    /// Element type of a primitive array
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caster: Option<FieldType>,
    /// Element schema of a document array
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl SchemaPath {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field_type: Some(field_type),
            ..Self::virtual_path(name)
        }
    }

    /// A computed path with no stored type
    pub fn virtual_path(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: None,
            required: false,
            min: None,
            max: None,
            enum_values: Vec::new(),
            selected: None,
            caster: None,
            schema: None,
        }
    }

    /// An array of primitive values
    pub fn array_of(name: impl Into<String>, caster: FieldType) -> Self {
        Self {
            caster: Some(caster),
            ..Self::new(name, FieldType::Array)
        }
    }

    /// An array of embedded documents described by `schema`
    pub fn documents(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            schema: Some(schema),
            ..Self::new(name, FieldType::Array)
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Exclude the path from every projection (`select: false`)
    #[must_use]
    pub fn deselected(mut self) -> Self {
        self.selected = Some(false);
        self
    }

    /// The last segment of a dotted path name
    #[must_use]
    pub fn leaf_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// An ordered collection of schema paths
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    paths: Vec<SchemaPath>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path, replacing any earlier path with the same name
    #[must_use]
    pub fn path(mut self, path: SchemaPath) -> Self {
        self.insert(path);
        self
    }

    pub fn insert(&mut self, path: SchemaPath) {
        if let Some(existing) = self.paths.iter_mut().find(|p| p.name == path.name) {
            *existing = path;
        } else {
            self.paths.push(path);
        }
    }

    pub fn paths(&self) -> impl Iterator<Item = &SchemaPath> {
        self.paths.iter()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemaPath> {
        self.paths.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl FromIterator<SchemaPath> for Schema {
    fn from_iter<T: IntoIterator<Item = SchemaPath>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), Self::path)
    }
}
