//! # Hypermedia Documents
//!
//! Serde model of the Mason subset the admin API speaks:
//!
//! ```text
//! { ...fields..., "@controls": { <name>: {href, method, schema?} }, "items"?: [...] }
//! { "@error": { "@message": string, "@messages"?: [...] } }
//! ```
//!
//! Domain fields are kept as an ordered JSON map; the document never
//! interprets them. Controls are looked up through a [`LinkRelation`] so a
//! missing control surfaces as [`FrameworkError::MissingControl`].

use crate::error::FrameworkError;
use crate::relation::LinkRelation;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{self, Display};

/// HTTP verb carried by a control. Mason defaults to GET.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON schema type of a single property, as far as forms care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Number,
    Integer,
    Boolean,
    #[serde(other)]
    Other,
}

/// One entry of `schema.properties`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PropertyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// Input schema attached to a write control. Property order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub properties: IndexMap<String, Property>,
    #[serde(default)]
    pub required: Vec<String>,
}

impl Schema {
    pub fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|name| name == field)
    }
}

/// A control descriptor: where to go, with which verb, and what to send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub href: String,
    #[serde(default)]
    pub method: Method,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(
        default,
        rename = "isHrefTemplate",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub is_href_template: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl Control {
    pub fn new(href: impl Into<String>, method: Method) -> Self {
        Self {
            href: href.into(),
            method,
            title: None,
            encoding: None,
            is_href_template: false,
            schema: None,
        }
    }

    /// The href to request. Templates get their `{variables}` replaced with
    /// the schema defaults; when the template appends a second query string
    /// (`/a/?x=1?start=0`) the extra `?` is folded into `&`.
    pub fn target(&self) -> String {
        if !self.is_href_template {
            return self.href.clone();
        }

        let mut href = self.href.clone();
        if let Some(schema) = &self.schema {
            for (name, property) in &schema.properties {
                let value = property.default.as_ref().map(display_value).unwrap_or_default();
                href = href.replace(&format!("{{{name}}}"), &value);
            }
        }

        match href.find('?') {
            Some(first) => {
                let (path, query) = href.split_at(first + 1);
                format!("{path}{}", query.replace('?', "&"))
            }
            None => href,
        }
    }
}

/// A namespace declaration from `@namespaces`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    pub name: String,
}

/// The `@error` object of a failure response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasonError {
    #[serde(rename = "@message")]
    pub message: String,
    #[serde(rename = "@messages", default)]
    pub messages: Vec<Option<String>>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "@error")]
    error: MasonError,
}

impl MasonError {
    /// Reads `@error` out of a raw body; `None` when the body has another shape.
    pub fn from_slice(body: &[u8]) -> Option<Self> {
        serde_json::from_slice::<ErrorEnvelope>(body)
            .ok()
            .map(|envelope| envelope.error)
    }
}

/// A fetched hypermedia document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "@controls", default, skip_serializing_if = "IndexMap::is_empty")]
    pub controls: IndexMap<String, Control>,
    #[serde(rename = "@namespaces", default, skip_serializing_if = "IndexMap::is_empty")]
    pub namespaces: IndexMap<String, Namespace>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Document>>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Controls of a document split into the ones an application knows and the
/// names it does not.
#[derive(Debug)]
pub struct Relations<'a, R> {
    pub known: Vec<(R, &'a Control)>,
    pub unknown: Vec<&'a str>,
}

impl Document {
    pub fn from_slice(body: &[u8]) -> Result<Self, FrameworkError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(FrameworkError::Malformed("empty body".to_string()));
        }
        serde_json::from_slice(body).map_err(|e| FrameworkError::Malformed(e.to_string()))
    }

    pub fn from_value(value: Value) -> Result<Self, FrameworkError> {
        serde_json::from_value(value).map_err(|e| FrameworkError::Malformed(e.to_string()))
    }

    pub fn control<R: LinkRelation>(&self, rel: R) -> Option<&Control> {
        self.controls.get(rel.name())
    }

    pub fn has<R: LinkRelation>(&self, rel: R) -> bool {
        self.controls.contains_key(rel.name())
    }

    /// Like [`Document::control`], but absence is an error.
    pub fn require<R: LinkRelation>(&self, rel: R) -> Result<&Control, FrameworkError> {
        self.control(rel)
            .ok_or_else(|| FrameworkError::MissingControl(rel.name().to_string()))
    }

    pub fn relations<R: LinkRelation>(&self) -> Relations<'_, R> {
        let mut relations = Relations {
            known: Vec::new(),
            unknown: Vec::new(),
        };
        for (name, control) in &self.controls {
            match R::from_name(name) {
                Some(rel) => relations.known.push((rel, control)),
                None => relations.unknown.push(name.as_str()),
            }
        }
        relations
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Display text of a field; absent and `null` fields are empty.
    pub fn text(&self, name: &str) -> String {
        self.field(name).map(display_value).unwrap_or_default()
    }

    pub fn items(&self) -> &[Document] {
        self.items.as_deref().unwrap_or(&[])
    }
}

/// Display text of a JSON value: strings unquoted, `null` empty.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
