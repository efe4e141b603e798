use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::controller::Controller;
use crate::errors::SwaggerError;
use crate::models::{ErrorResponse, Operation, ParamType, Parameter};
use crate::types::capitalize;

/// HTTP verbs a controller may expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Head,
    Get,
    Post,
    Put,
    #[serde(alias = "del")]
    Delete,
}

impl Verb {
    pub const ALL: [Verb; 5] = [Verb::Head, Verb::Get, Verb::Post, Verb::Put, Verb::Delete];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }

    /// Whether the verb is documented on the collection (`plural`) or the
    /// instance route
    #[must_use]
    pub fn applies_to(self, plural: bool) -> bool {
        match self {
            Self::Head => false,
            Self::Get => true,
            Self::Post => plural,
            Self::Put | Self::Delete => !plural,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = SwaggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "head" => Ok(Self::Head),
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            "put" => Ok(Self::Put),
            "del" | "delete" => Ok(Self::Delete),
            _ => Err(SwaggerError::UnsupportedVerb(s.to_string())),
        }
    }
}

fn parameter(param_type: ParamType, name: &str, description: String, data_type: &str, required: bool) -> Parameter {
    Parameter {
        param_type,
        name: name.to_string(),
        description,
        data_type: data_type.to_string(),
        required,
        allow_multiple: false,
    }
}

fn query(name: &str, description: &str, data_type: &str) -> Parameter {
    parameter(ParamType::Query, name, description.to_string(), data_type, false)
}

/// Parameters accepted by `verb` on the instance or collection route
#[must_use]
pub fn parameters(controller: &Controller, verb: Verb, plural: bool) -> Vec<Parameter> {
    let mut parameters = Vec::new();

    if plural {
        parameters.extend([
            query("page", "The page number where documents will be read from.", "int"),
            query("per_page", "The amount of documents associated with a page.", "int"),
            query("count", "Set to true to return count instead of documents.", "boolean"),
            query(
                "conditions",
                "Set the conditions used to find or remove the document(s).",
                "string",
            ),
            query("sort", "Set the fields by which to sort.", "string"),
        ]);
    } else {
        parameters.push(parameter(
            ParamType::Path,
            "id",
            format!("The ID of a {}", controller.singular()),
            "string",
            true,
        ));
    }

    parameters.push(query("select", "Select which paths will be returned by the query.", "string"));
    parameters.push(query("populate", "Specify which paths to populate.", "string"));

    let body = match verb {
        Verb::Post => Some("Create a document by sending the paths to be updated in the request body."),
        Verb::Put => Some("Update a document by sending the paths to be updated in the request body."),
        _ => None,
    };
    if let Some(description) = body {
        parameters.push(parameter(
            ParamType::Body,
            "document",
            description.to_string(),
            &capitalize(controller.singular()),
            true,
        ));
    }

    parameters
}

#[must_use]
pub fn error_responses(controller: &Controller, plural: bool) -> Vec<ErrorResponse> {
    let reason = if plural {
        format!("No {} matched that query.", controller.plural())
    } else {
        format!("No {} was found with that ID.", controller.singular())
    };
    vec![ErrorResponse { code: 404, reason }]
}

/// Operations documented on the instance route, or on the collection route
/// when `plural` is set
#[must_use]
pub fn operations(controller: &Controller, plural: bool) -> Vec<Operation> {
    let title_singular = capitalize(controller.singular());
    let title_plural = capitalize(controller.plural());

    controller
        .verbs()
        .iter()
        .copied()
        .filter(|verb| verb.applies_to(plural))
        .map(|verb| {
            let (nickname, summary) = if plural {
                (
                    format!("{verb}{title_plural}"),
                    format!("{} some {}", capitalize(verb.as_str()), controller.plural()),
                )
            } else {
                (
                    format!("{verb}{title_singular}ById"),
                    format!(
                        "{} a {} by its unique ID",
                        capitalize(verb.as_str()),
                        controller.singular()
                    ),
                )
            };

            Operation {
                http_method: verb.as_str().to_uppercase(),
                nickname,
                response_class: title_singular.clone(),
                summary,
                parameters: parameters(controller, verb, plural),
                error_responses: error_responses(controller, plural),
            }
        })
        .collect()
}
