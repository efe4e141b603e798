use std::fmt;
use std::sync::{Arc, OnceLock};

use sea_orm::EntityTrait;

use crate::access::{FieldAccess, HiddenFields};
use crate::definition::model_definitions;
use crate::errors::SwaggerError;
use crate::introspect::primary_key_field;
use crate::models::{Api, ApiDeclaration};
use crate::operations::{Verb, operations};
use crate::schema::Schema;
use crate::select::Selection;

/// Documentation metadata for one REST resource.
///
/// The Swagger document is generated on first use and cached for the
/// lifetime of the controller.
pub struct Controller {
    singular: String,
    plural: String,
    path: Option<String>,
    schema: Schema,
    selection: Option<Selection>,
    methods: Vec<Verb>,
    id_field: String,
    access: Arc<dyn FieldAccess>,
    swagger: OnceLock<ApiDeclaration>,
}

impl Controller {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>, schema: Schema) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
            path: None,
            schema,
            selection: None,
            methods: Verb::ALL.to_vec(),
            id_field: "_id".to_string(),
            access: Arc::new(HiddenFields::default()),
            swagger: OnceLock::new(),
        }
    }

    /// Controller for a Sea-ORM entity, keyed on its primary-key column
    pub fn from_entity<E: EntityTrait>(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        let controller = Self::new(singular, plural, Schema::from_entity::<E>());
        match primary_key_field::<E>() {
            Some(id_field) => controller.id_field(id_field),
            None => controller,
        }
    }

    /// Restrict documented fields with a select string (`"name -salt"`)
    #[must_use]
    pub fn select(mut self, select: &str) -> Self {
        self.selection = Selection::parse(select);
        self
    }

    #[must_use]
    pub fn methods(mut self, methods: impl IntoIterator<Item = Verb>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }

    #[must_use]
    pub fn id_field(mut self, id_field: impl Into<String>) -> Self {
        self.id_field = id_field.into();
        self
    }

    #[must_use]
    pub fn access(mut self, access: impl FieldAccess + 'static) -> Self {
        self.access = Arc::new(access);
        self
    }

    /// Mount the resource somewhere other than `/<plural>`
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn singular(&self) -> &str {
        &self.singular
    }

    #[must_use]
    pub fn plural(&self) -> &str {
        &self.plural
    }

    #[must_use]
    pub fn route(&self) -> String {
        self.path
            .clone()
            .unwrap_or_else(|| format!("/{}", self.plural))
    }

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn verbs(&self) -> &[Verb] {
        &self.methods
    }

    #[must_use]
    pub fn id_field_name(&self) -> &str {
        &self.id_field
    }

    #[must_use]
    pub fn field_access(&self) -> &dyn FieldAccess {
        self.access.as_ref()
    }

    /// The resource's Swagger document: its instance and collection routes
    /// plus every model they reference.
    ///
    /// # Errors
    ///
    /// Fails when the schema contains a path that cannot be described.
    pub fn generate_swagger(&self) -> Result<&ApiDeclaration, SwaggerError> {
        if let Some(swagger) = self.swagger.get() {
            return Ok(swagger);
        }

        let models = model_definitions(self)?;
        let apis = vec![
            Api {
                path: format!("/{}/{{id}}", self.plural),
                description: format!("Operations about a given {}", self.singular),
                operations: operations(self, false),
            },
            Api {
                path: format!("/{}", self.plural),
                description: format!("Operations about {}", self.plural),
                operations: operations(self, true),
            },
        ];
        tracing::debug!(resource = %self.plural, models = models.len(), "generated swagger document");

        Ok(self.swagger.get_or_init(|| ApiDeclaration {
            apis,
            models,
            ..ApiDeclaration::default()
        }))
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("singular", &self.singular)
            .field("plural", &self.plural)
            .field("route", &self.route())
            .field("selection", &self.selection)
            .field("methods", &self.methods)
            .field("id_field", &self.id_field)
            .finish_non_exhaustive()
    }
}

/// A resource whose documentation is derived from static metadata, in the
/// manner of a CRUD resource definition.
pub trait SwaggerResource {
    const RESOURCE_NAME_SINGULAR: &'static str;
    const RESOURCE_NAME_PLURAL: &'static str;

    fn schema() -> Schema;

    #[must_use]
    fn select() -> Option<&'static str> {
        None
    }

    #[must_use]
    fn methods() -> Vec<Verb> {
        Verb::ALL.to_vec()
    }

    #[must_use]
    fn id_field() -> &'static str {
        "_id"
    }

    #[must_use]
    fn controller() -> Controller {
        let controller = Controller::new(
            Self::RESOURCE_NAME_SINGULAR,
            Self::RESOURCE_NAME_PLURAL,
            Self::schema(),
        )
        .methods(Self::methods())
        .id_field(Self::id_field());
        match Self::select() {
            Some(select) => controller.select(select),
            None => controller,
        }
    }
}
