use crate::controller::Controller;
use crate::errors::SwaggerError;
use crate::models::{AllowableValues, Items, Property};
use crate::schema::{FieldType, Schema, SchemaPath};
use crate::types::{capitalize, swagger_type_for};

/// A documented property, plus the embedded schema it references when the
/// path is an array of documents
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedProperty {
    pub property: Property,
    pub sub_schema: Option<(String, Schema)>,
}

/// Whether `name` is documented at all for this controller
///
/// # Errors
///
/// Propagates select-rule compilation failures.
pub fn is_documented(controller: &Controller, name: &str, path: &SchemaPath) -> Result<bool, SwaggerError> {
    if path.selected == Some(false) {
        tracing::trace!(field = name, "skipping deselected path");
        return Ok(false);
    }
    if controller.field_access().is_hidden(name) {
        tracing::trace!(field = name, "skipping hidden path");
        return Ok(false);
    }
    if let Some(selection) = controller.selection() {
        if !selection.allows(name, controller.id_field_name())? {
            tracing::trace!(field = name, select = selection.as_str(), "path excluded by select");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Describe one schema path as a Swagger property.
///
/// Returns `Ok(None)` when the path is filtered out by its own `selected`
/// flag, the controller's select string, or the access table.
///
/// # Errors
///
/// Fails on schema types with no Swagger mapping and on select patterns
/// that cannot be compiled.
pub fn property_definition(
    controller: &Controller,
    name: &str,
    path: &SchemaPath,
) -> Result<Option<GeneratedProperty>, SwaggerError> {
    if !is_documented(controller, name, path)? {
        return Ok(None);
    }

    let type_tag = match &path.field_type {
        Some(field_type) => swagger_type_for(name, field_type)?,
        None => Some("string"),
    };

    let mut property = Property {
        required: path.required,
        property_type: type_tag.unwrap_or("string").to_string(),
        items: None,
        allowable_values: None,
    };
    let mut sub_schema = None;

    if path.field_type == Some(FieldType::Array) {
        if let Some(caster) = &path.caster {
            let item_type = swagger_type_for(name, caster)?.unwrap_or("string");
            property.items = Some(Items::Type {
                item_type: item_type.to_string(),
            });
        } else {
            let model = capitalize(path.leaf_name());
            property.items = Some(Items::Ref {
                reference: model.clone(),
            });
            sub_schema = path.schema.clone().map(|schema| (model, schema));
        }
    } else {
        if !path.enum_values.is_empty() {
            property.allowable_values = Some(AllowableValues::List {
                values: path.enum_values.clone(),
            });
        }
        if path.min.is_some() || path.max.is_some() {
            property.allowable_values = Some(AllowableValues::Range {
                min: path.min,
                max: path.max,
            });
        }
    }

    Ok(Some(GeneratedProperty { property, sub_schema }))
}
