#![allow(dead_code)]

use swaggercrate::{Controller, FieldType, Schema, SchemaPath};

pub mod vehicle_entity;

/// A person schema exercising every kind of path the generator handles
pub fn person_schema() -> Schema {
    let toys = Schema::new().path(SchemaPath::new("kind", FieldType::String));
    let pets = Schema::new()
        .path(SchemaPath::new("name", FieldType::String).required())
        .path(SchemaPath::documents("toys", toys));

    Schema::new()
        .path(SchemaPath::new("_id", FieldType::ObjectId))
        .path(SchemaPath::new("name", FieldType::String).required())
        .path(SchemaPath::new("age", FieldType::Number).min(0.0).max(150.0))
        .path(SchemaPath::new("role", FieldType::String).enum_values(["admin", "member"]))
        .path(SchemaPath::new("salt", FieldType::String))
        .path(SchemaPath::new("passwordHash", FieldType::String))
        .path(SchemaPath::new("secret", FieldType::String).deselected())
        .path(SchemaPath::new("joined", FieldType::Date))
        .path(SchemaPath::array_of("tags", FieldType::String))
        .path(SchemaPath::new("address.city", FieldType::String))
        .path(SchemaPath::new("address.geo.lat", FieldType::Number))
        .path(SchemaPath::documents("pets", pets))
        .path(SchemaPath::virtual_path("fullName"))
        .path(SchemaPath::new("meta", FieldType::Mixed))
}

pub fn person_controller() -> Controller {
    Controller::new("person", "people", person_schema())
}
