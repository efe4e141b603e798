use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{OriginalUri, Path, State},
    http::{HeaderName, HeaderValue, Uri, header},
    routing::get,
};
use hyper::HeaderMap;
use utoipa::OpenApi;

use crate::errors::SwaggerError;
use crate::listing::{Release, base_path};
use crate::models::{ApiDeclaration, ResourceListing};

static X_POWERED_BY: HeaderName = HeaderName::from_static("x-powered-by");

/// OpenAPI description of the docs routes themselves
#[derive(OpenApi)]
#[openapi(
    paths(resource_listing, api_declaration),
    components(schemas(ResourceListing, ApiDeclaration))
)]
pub struct DocsApi;

impl Release {
    /// Router serving the resource listing at the configured docs path and
    /// one API declaration per controller below it.
    ///
    /// # Errors
    ///
    /// Every controller document is generated before the router is built;
    /// the first generation failure is returned.
    pub fn router(self) -> Result<Router, SwaggerError> {
        self.generate_all()?;
        let docs_path = self.config().docs_path.trim_end_matches('/').to_string();
        tracing::debug!(
            docs_path = %docs_path,
            resources = self.controllers().len(),
            "mounting swagger routes"
        );

        let listing_path = if docs_path.is_empty() { "/" } else { docs_path.as_str() };

        Ok(Router::new()
            .route(listing_path, get(resource_listing))
            .route(&format!("{docs_path}/{{resource}}"), get(api_declaration))
            .with_state(Arc::new(self)))
    }

    fn response_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(powered_by) = &self.config().powered_by {
            match HeaderValue::from_str(powered_by) {
                Ok(value) => {
                    headers.insert(X_POWERED_BY.clone(), value);
                }
                Err(_) => tracing::warn!(value = %powered_by, "invalid X-Powered-By header value"),
            }
        }
        headers
    }
}

fn request_base(release: &Release, uri: &Uri, headers: &HeaderMap, extra: usize) -> Result<String, SwaggerError> {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| uri.authority().map(axum::http::uri::Authority::as_str))
        .ok_or(SwaggerError::MissingHost)?;
    Ok(base_path(release.config().scheme, host, uri.path(), extra))
}

#[utoipa::path(
    get,
    path = "/api-docs",
    responses(
        (status = 200, description = "Swagger resource listing", body = ResourceListing),
        (status = 400, description = "Request carried no host")
    )
)]
pub async fn resource_listing(
    State(release): State<Arc<Release>>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Result<(HeaderMap, Json<ResourceListing>), SwaggerError> {
    let base = request_base(&release, &uri, &headers, 1)?;
    Ok((release.response_headers(), Json(release.resource_listing(&base))))
}

#[utoipa::path(
    get,
    path = "/api-docs/{resource}",
    params(("resource" = String, Path, description = "Route of the documented resource, without the leading slash")),
    responses(
        (status = 200, description = "Swagger API declaration for the resource", body = ApiDeclaration),
        (status = 404, description = "No resource is documented at that route")
    )
)]
pub async fn api_declaration(
    State(release): State<Arc<Release>>,
    Path(resource): Path<String>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Result<(HeaderMap, Json<ApiDeclaration>), SwaggerError> {
    let route = format!("/{resource}");
    let controller = release
        .find(&route)
        .ok_or_else(|| SwaggerError::UnknownResource(route.clone()))?;
    let base = request_base(&release, &uri, &headers, 2)?;
    let declaration = release.api_declaration(controller, &base)?;
    Ok((release.response_headers(), Json(declaration)))
}
