use serde_json::json;
use swaggercrate::config::Scheme;
use swaggercrate::listing::base_path;
use swaggercrate::{
    Controller, DocsConfig, FieldType, Release, Schema, SchemaPath, SwaggerResource, Verb,
};

mod common;
use common::{person_controller, person_schema};

struct Person;

impl SwaggerResource for Person {
    const RESOURCE_NAME_SINGULAR: &'static str = "person";
    const RESOURCE_NAME_PLURAL: &'static str = "people";

    fn schema() -> Schema {
        person_schema()
    }

    fn select() -> Option<&'static str> {
        Some("-age")
    }

    fn methods() -> Vec<Verb> {
        vec![Verb::Get, Verb::Post]
    }
}

fn release() -> Release {
    Release::new(DocsConfig::default().api_version("2.0.0"))
        .controller(person_controller())
        .controller(Controller::new(
            "category",
            "categories",
            Schema::new().path(SchemaPath::new("label", FieldType::String)),
        ))
}

// ===== CONTROLLER DOCUMENT =====

#[test]
fn test_generated_routes() {
    let controller = person_controller();
    let swagger = controller.generate_swagger().unwrap();

    assert_eq!(swagger.apis.len(), 2);
    assert_eq!(swagger.apis[0].path, "/people/{id}");
    assert_eq!(swagger.apis[0].description, "Operations about a given person");
    assert_eq!(swagger.apis[1].path, "/people");
    assert_eq!(swagger.apis[1].description, "Operations about people");
    assert_eq!(swagger.apis[0].operations.len(), 3);
    assert_eq!(swagger.apis[1].operations.len(), 2);
    assert!(swagger.models.contains_key("Person"));
    assert!(swagger.models.contains_key("Toys"));
}

#[test]
fn test_controller_document_carries_no_release_metadata() {
    let controller = person_controller();
    let value = serde_json::to_value(controller.generate_swagger().unwrap()).unwrap();
    let object = value.as_object().unwrap();

    assert!(!object.contains_key("apiVersion"));
    assert!(!object.contains_key("basePath"));
    assert!(object.contains_key("apis"));
    assert!(object.contains_key("models"));
}

#[test]
fn test_document_is_generated_once() {
    let controller = person_controller();
    let first = controller.generate_swagger().unwrap();
    let second = controller.generate_swagger().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_swagger_resource_builds_controller() {
    let controller = Person::controller();

    assert_eq!(controller.singular(), "person");
    assert_eq!(controller.route(), "/people");
    assert_eq!(controller.verbs(), &[Verb::Get, Verb::Post]);
    assert_eq!(controller.selection().unwrap().as_str(), "-age");

    let swagger = controller.generate_swagger().unwrap();
    assert!(!swagger.models["Person"].properties.contains_key("age"));
    assert_eq!(swagger.apis[0].operations.len(), 1);
    assert_eq!(swagger.apis[1].operations.len(), 2);
}

#[test]
fn test_custom_route() {
    let controller = person_controller().path("/members");
    assert_eq!(controller.route(), "/members");
    assert_eq!(
        controller.generate_swagger().unwrap().apis[1].path,
        "/people"
    );
}

// ===== RESOURCE LISTING =====

#[test]
fn test_resource_listing() {
    let listing = release().resource_listing("https://api.example.com/v2");

    assert_eq!(
        serde_json::to_value(&listing).unwrap(),
        json!({
            "apiVersion": "2.0.0",
            "swaggerVersion": "1.2",
            "basePath": "https://api.example.com/v2",
            "apis": [
                {"path": "/api-docs/people", "description": "Operations about people."},
                {"path": "/api-docs/categories", "description": "Operations about categories."}
            ]
        })
    );
}

#[test]
fn test_resource_listing_honours_docs_path() {
    let release = Release::new(DocsConfig::default().docs_path("/swagger/"))
        .controller(person_controller());
    let listing = release.resource_listing("https://h");
    assert_eq!(listing.apis[0].path, "/swagger/people");
}

#[test]
fn test_resource_listing_uses_custom_route() {
    let release = Release::new(DocsConfig::default()).controller(person_controller().path("/members"));
    let listing = release.resource_listing("https://h");
    assert_eq!(listing.apis[0].path, "/api-docs/members");
    assert_eq!(listing.apis[0].description, "Operations about people.");
}

#[test]
fn test_api_declaration_stamps_release_metadata() {
    let release = release();
    let controller = release.find("/people").unwrap();
    let declaration = release
        .api_declaration(controller, "https://api.example.com/v2")
        .unwrap();

    assert_eq!(declaration.api_version.as_deref(), Some("2.0.0"));
    assert_eq!(declaration.swagger_version.as_deref(), Some("1.2"));
    assert_eq!(declaration.base_path.as_deref(), Some("https://api.example.com/v2"));
    assert_eq!(declaration.resource_path.as_deref(), Some("/people"));
    assert_eq!(&declaration.apis, &controller.generate_swagger().unwrap().apis);
}

#[test]
fn test_find_by_route() {
    let release = release();
    assert_eq!(release.find("/categories").unwrap().plural(), "categories");
    assert!(release.find("/ghosts").is_none());
}

#[test]
fn test_generate_all_reports_broken_controllers() {
    let broken = Controller::new(
        "shape",
        "shapes",
        Schema::new().path(SchemaPath::new("outline", FieldType::Other("Polygon".into()))),
    );
    let release = release().controller(broken);
    assert!(release.generate_all().is_err());
}

// ===== BASE PATH =====

#[test]
fn test_base_path_strips_docs_segments() {
    assert_eq!(
        base_path(Scheme::Https, "api.example.com", "/api-docs", 1),
        "https://api.example.com"
    );
    assert_eq!(
        base_path(Scheme::Https, "api.example.com", "/v1/api-docs", 1),
        "https://api.example.com/v1"
    );
    assert_eq!(
        base_path(Scheme::Http, "localhost:3000", "/v1/api-docs/people", 2),
        "http://localhost:3000/v1"
    );
}

#[test]
fn test_base_path_with_more_segments_than_path() {
    assert_eq!(base_path(Scheme::Https, "h", "/", 5), "https://h");
}

// ===== CONFIGURATION =====

#[test]
fn test_config_defaults() {
    let config = DocsConfig::default();
    assert_eq!(config.swagger_version, "1.2");
    assert_eq!(config.docs_path, "/api-docs");
    assert_eq!(config.scheme, Scheme::Https);
    assert_eq!(config.powered_by.as_deref(), Some("swaggercrate"));
}

#[test]
fn test_config_from_lookup() {
    let config = DocsConfig::from_lookup(|key| match key {
        "APP_ENV" => Some("local".to_string()),
        "API_VERSION" => Some("3.1.4".to_string()),
        _ => None,
    });
    assert_eq!(config.scheme, Scheme::Http);
    assert_eq!(config.api_version, "3.1.4");

    let config = DocsConfig::from_lookup(|key| (key == "APP_ENV").then(|| "production".to_string()));
    assert_eq!(config.scheme, Scheme::Https);
    assert_eq!(config.api_version, DocsConfig::default().api_version);
}

#[test]
fn test_config_partial_deserialization() {
    let config: DocsConfig =
        serde_json::from_str(r#"{"api_version": "9", "scheme": "http", "powered_by": null}"#).unwrap();
    assert_eq!(config.api_version, "9");
    assert_eq!(config.scheme, Scheme::Http);
    assert_eq!(config.powered_by, None);
    assert_eq!(config.docs_path, "/api-docs");
}

// ===== DECLARED SCHEMAS =====

#[test]
fn test_schema_from_json() {
    let schema: Schema = serde_json::from_value(json!([
        {"name": "title", "type": "String", "required": true},
        {"name": "score", "type": "Number", "min": 1.0, "max": 5.0},
        {"name": "labels", "type": "Array", "caster": "String"},
        {"name": "slug"}
    ]))
    .unwrap();

    assert_eq!(schema.len(), 4);
    assert!(schema.get("title").unwrap().required);
    assert_eq!(schema.get("labels").unwrap().caster, Some(FieldType::String));
    assert_eq!(schema.get("slug").unwrap().field_type, None);

    let controller = Controller::new("review", "reviews", schema);
    let swagger = controller.generate_swagger().unwrap();
    let properties = &swagger.models["Review"].properties;
    assert_eq!(properties.len(), 4);
}

#[test]
fn test_schema_path_replacement() {
    let schema = Schema::new()
        .path(SchemaPath::new("name", FieldType::String))
        .path(SchemaPath::new("name", FieldType::Number));
    assert_eq!(schema.len(), 1);
    assert_eq!(schema.get("name").unwrap().field_type, Some(FieldType::Number));
}
