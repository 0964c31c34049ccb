//! Structured-output schema descriptions.
//!
//! Schemas are plain values serialized verbatim into the generation request.
//! They describe the shape the service must answer in; they are not bound to
//! any Rust type on this side.

use serde_json::{Map, Value, json};

/// A restricted JSON-Schema-like description.
///
/// # Examples
///
/// ```
/// use worldsmith_core::Schema;
///
/// let schema = Schema::array_of(Schema::string_object(["title", "synopsis"]));
/// let json = schema.to_json();
/// assert_eq!(json["type"], "ARRAY");
/// assert_eq!(json["items"]["propertyOrdering"][1], "synopsis");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    /// A string value.
    String,
    /// An object with fields in declared order.
    Object(Vec<SchemaField>),
    /// A homogeneous array.
    Array(Box<Schema>),
}

/// A named property of an object schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    /// Property name
    pub name: String,
    /// Property schema
    pub schema: Schema,
}

impl Schema {
    /// An object whose properties are all strings, in the given order.
    pub fn string_object<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Schema::Object(
            names
                .into_iter()
                .map(|name| SchemaField {
                    name: name.into(),
                    schema: Schema::String,
                })
                .collect(),
        )
    }

    /// An array of `item`.
    pub fn array_of(item: Schema) -> Self {
        Schema::Array(Box::new(item))
    }

    /// Property names of an object schema, or of an array's item object.
    pub fn field_names(&self) -> Vec<&str> {
        match self {
            Schema::Object(fields) => fields.iter().map(|f| f.name.as_str()).collect(),
            Schema::Array(item) => item.field_names(),
            Schema::String => Vec::new(),
        }
    }

    /// Render in the wire format the generation endpoint expects.
    ///
    /// Object properties are emitted with `propertyOrdering` and `required`
    /// because JSON objects carry no order of their own.
    pub fn to_json(&self) -> Value {
        match self {
            Schema::String => json!({ "type": "STRING" }),
            Schema::Array(item) => json!({ "type": "ARRAY", "items": item.to_json() }),
            Schema::Object(fields) => {
                let mut properties = Map::new();
                for field in fields {
                    properties.insert(field.name.clone(), field.schema.to_json());
                }
                let order: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
                json!({
                    "type": "OBJECT",
                    "properties": properties,
                    "propertyOrdering": order,
                    "required": order,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_keeps_declared_order() {
        let schema = Schema::string_object(["name", "role", "description"]);
        let json = schema.to_json();
        assert_eq!(json["propertyOrdering"], json!(["name", "role", "description"]));
        assert_eq!(json["properties"]["role"]["type"], "STRING");
    }

    #[test]
    fn field_names_see_through_arrays() {
        let schema = Schema::array_of(Schema::string_object(["feature", "description"]));
        assert_eq!(schema.field_names(), vec!["feature", "description"]);
        assert!(Schema::String.field_names().is_empty());
    }
}
