use crate::errors::SwaggerError;
use crate::schema::FieldType;

/// Map a schema type onto its Swagger type tag.
///
/// Object-like types (`Object`, `Mixed`, `Buffer`) have no Swagger
/// counterpart and map to `None`; callers decide on a fallback.
///
/// # Errors
///
/// Returns [`SwaggerError::UnrecognizedType`] for [`FieldType::Other`].
pub fn swagger_type_for(field: &str, ty: &FieldType) -> Result<Option<&'static str>, SwaggerError> {
    match ty {
        FieldType::String | FieldType::ObjectId => Ok(Some("string")),
        FieldType::Number => Ok(Some("double")),
        FieldType::Date => Ok(Some("Date")),
        FieldType::Boolean => Ok(Some("boolean")),
        FieldType::Array => Ok(Some("Array")),
        FieldType::Object | FieldType::Mixed | FieldType::Buffer => Ok(None),
        FieldType::Other(type_name) => Err(SwaggerError::UnrecognizedType {
            field: field.to_string(),
            type_name: type_name.clone(),
        }),
    }
}

/// Upper-case the first character of `s`, leaving the rest untouched.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
