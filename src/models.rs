//! Swagger 1.2 document types.
//!
//! These mirror the JSON emitted by the docs routes: a [`ResourceListing`]
//! at the root and one [`ApiDeclaration`] per resource, each carrying its
//! [`Api`] routes and the [`ModelDefinition`]s they reference.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Constraint on the values a property may take
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "valueType")]
pub enum AllowableValues {
    #[serde(rename = "LIST")]
    List { values: Vec<String> },
    #[serde(rename = "RANGE")]
    Range {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
}

/// Element description of an array property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Items {
    Type {
        #[serde(rename = "type")]
        item_type: String,
    },
    Ref {
        #[serde(rename = "$ref")]
        reference: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub required: bool,
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowable_values: Option<AllowableValues>,
}

/// A model property: either described inline or by reference to another model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PropertyDefinition {
    Ref {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Inline(Property),
}

impl PropertyDefinition {
    pub fn reference(model: impl Into<String>) -> Self {
        Self::Ref {
            reference: model.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ModelDefinition {
    pub id: String,
    pub properties: BTreeMap<String, PropertyDefinition>,
}

impl ModelDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Fold `other` into this model; properties from `other` win on conflict
    pub fn merge(&mut self, other: ModelDefinition) {
        self.properties.extend(other.properties);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Path,
    Query,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub param_type: ParamType,
    pub name: String,
    pub description: String,
    pub data_type: String,
    pub required: bool,
    pub allow_multiple: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: u16,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub http_method: String,
    pub nickname: String,
    pub response_class: String,
    pub summary: String,
    pub parameters: Vec<Parameter>,
    pub error_responses: Vec<ErrorResponse>,
}

/// One route of a resource with the operations it supports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Api {
    pub path: String,
    pub description: String,
    pub operations: Vec<Operation>,
}

/// Full description of one resource, served at `<docs path>/<resource>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swagger_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_path: Option<String>,
    pub apis: Vec<Api>,
    pub models: BTreeMap<String, ModelDefinition>,
}

/// Entry of the resource listing pointing at one API declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResourceSummary {
    pub path: String,
    pub description: String,
}

/// Root document, served at the docs path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceListing {
    pub api_version: String,
    pub swagger_version: String,
    pub base_path: String,
    pub apis: Vec<ResourceSummary>,
}
