use crate::config::{DocsConfig, Scheme};
use crate::controller::{Controller, SwaggerResource};
use crate::errors::SwaggerError;
use crate::models::{ApiDeclaration, ResourceListing, ResourceSummary};

/// A set of documented controllers published under one API version
#[derive(Debug, Default)]
pub struct Release {
    config: DocsConfig,
    controllers: Vec<Controller>,
}

impl Release {
    #[must_use]
    pub fn new(config: DocsConfig) -> Self {
        Self {
            config,
            controllers: Vec::new(),
        }
    }

    #[must_use]
    pub fn controller(mut self, controller: Controller) -> Self {
        self.controllers.push(controller);
        self
    }

    #[must_use]
    pub fn resource<R: SwaggerResource>(self) -> Self {
        self.controller(R::controller())
    }

    #[must_use]
    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    #[must_use]
    pub fn controllers(&self) -> &[Controller] {
        &self.controllers
    }

    /// The controller mounted at `route` (e.g. `/vehicles`)
    #[must_use]
    pub fn find(&self, route: &str) -> Option<&Controller> {
        self.controllers.iter().find(|c| c.route() == route)
    }

    /// Generate and cache every controller's document up front, so schema
    /// problems surface before the docs are served
    ///
    /// # Errors
    ///
    /// Returns the first controller failure.
    pub fn generate_all(&self) -> Result<(), SwaggerError> {
        for controller in &self.controllers {
            controller.generate_swagger()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn resource_listing(&self, base_path: &str) -> ResourceListing {
        let docs_path = self.config.docs_path.trim_end_matches('/');
        ResourceListing {
            api_version: self.config.api_version.clone(),
            swagger_version: self.config.swagger_version.clone(),
            base_path: base_path.to_string(),
            apis: self
                .controllers
                .iter()
                .map(|controller| ResourceSummary {
                    path: format!("{docs_path}{}", controller.route()),
                    description: format!("Operations about {}.", controller.plural()),
                })
                .collect(),
        }
    }

    /// The controller's cached document stamped with release metadata
    ///
    /// # Errors
    ///
    /// Fails when the controller's document cannot be generated.
    pub fn api_declaration(
        &self,
        controller: &Controller,
        base_path: &str,
    ) -> Result<ApiDeclaration, SwaggerError> {
        let swagger = controller.generate_swagger()?;
        Ok(ApiDeclaration {
            api_version: Some(self.config.api_version.clone()),
            swagger_version: Some(self.config.swagger_version.clone()),
            base_path: Some(base_path.to_string()),
            resource_path: Some(controller.route()),
            ..swagger.clone()
        })
    }
}

/// Absolute base path for a docs request: the request path with its last
/// `extra` segments removed, prefixed with scheme and host.
///
/// ```rust,ignore
/// assert_eq!(
///     base_path(Scheme::Https, "api.example.com", "/v1/api-docs/vehicles", 2),
///     "https://api.example.com/v1"
/// );
/// ```
#[must_use]
pub fn base_path(scheme: Scheme, host: &str, request_path: &str, extra: usize) -> String {
    let parts: Vec<&str> = request_path.split('/').collect();
    let keep = parts.len().saturating_sub(extra);
    format!("{}://{host}{}", scheme.as_str(), parts[..keep].join("/"))
}
