/*!
# Model Definitions

Turns a controller's schema into the flat `models` map of an API
declaration. Three kinds of model end up in the map:

- the resource model itself, named after the capitalized singular name;
- one model per object level of every dotted path (`address.geo.lat`
  yields `Address` and `Geo`), linked to each other by `$ref`;
- one model per embedded document schema, found recursively through
  document arrays at any depth.

Models that end up with the same name are merged property by property.
*/

use std::collections::{BTreeMap, VecDeque};

use crate::controller::Controller;
use crate::errors::SwaggerError;
use crate::models::{ModelDefinition, Property, PropertyDefinition};
use crate::property::property_definition;
use crate::schema::Schema;
use crate::types::capitalize;

type Models = BTreeMap<String, ModelDefinition>;

/// Build every model definition needed to describe `controller`.
///
/// # Errors
///
/// Fails when a schema path cannot be described; see
/// [`property_definition`].
pub fn model_definitions(controller: &Controller) -> Result<Models, SwaggerError> {
    let mut models = Models::new();
    let mut pending = VecDeque::new();

    let resource_model = capitalize(controller.singular());
    describe_schema(
        controller,
        &resource_model,
        controller.schema(),
        &mut models,
        &mut pending,
    )?;

    while let Some((model, schema)) = pending.pop_front() {
        tracing::trace!(model = %model, paths = schema.len(), "flattening embedded schema");
        describe_schema(controller, &model, &schema, &mut models, &mut pending)?;
    }

    tracing::debug!(
        resource = controller.singular(),
        models = models.len(),
        "generated model definitions"
    );
    Ok(models)
}

fn describe_schema(
    controller: &Controller,
    model: &str,
    schema: &Schema,
    models: &mut Models,
    pending: &mut VecDeque<(String, Schema)>,
) -> Result<(), SwaggerError> {
    let mut definition = ModelDefinition::new(model);

    for path in schema.paths() {
        let Some(generated) = property_definition(controller, &path.name, path)? else {
            continue;
        };
        if let Some(sub_schema) = generated.sub_schema {
            pending.push_back(sub_schema);
        }

        let segments: Vec<&str> = path.name.split('.').collect();
        if let [field] = segments.as_slice() {
            definition
                .properties
                .insert((*field).to_string(), PropertyDefinition::Inline(generated.property));
        } else {
            definition.properties.insert(
                segments[0].to_string(),
                PropertyDefinition::reference(capitalize(segments[0])),
            );
            nest(models, &segments, generated.property);
        }
    }

    insert(models, definition);
    Ok(())
}

/// Register the object levels of a dotted path, leaving `property` on the
/// innermost one
fn nest(models: &mut Models, segments: &[&str], property: Property) {
    let last = segments.len() - 1;
    let mut property = Some(property);

    for (depth, window) in segments.windows(2).enumerate() {
        let [parent, child] = window else { continue };
        let model = capitalize(parent);
        let definition = models
            .entry(model.clone())
            .or_insert_with(|| ModelDefinition::new(model));

        let value = if depth + 1 < last {
            PropertyDefinition::reference(capitalize(child))
        } else {
            match property.take() {
                Some(property) => PropertyDefinition::Inline(property),
                None => continue,
            }
        };
        definition.properties.insert((*child).to_string(), value);
    }
}

fn insert(models: &mut Models, definition: ModelDefinition) {
    match models.get_mut(&definition.id) {
        Some(existing) => existing.merge(definition),
        None => {
            models.insert(definition.id.clone(), definition);
        }
    }
}
