//! # Forms
//!
//! A [`Form`] is either display-only (detail views) or carries a
//! [`FormTarget`] it can be submitted to. Submission never talks to the
//! network itself: [`Form::navigation`] validates and coerces the current
//! values and returns the [`Navigation`] to perform, so a form that fails
//! validation can never cause a request.
//!
//! ## Payload rules
//!
//! - required fields must be non-empty (checkboxes are always filled)
//! - number fields become JSON integers when integral, floats otherwise
//! - checkboxes accept `true/false`, `on/off`, `1/0`, `yes/no`
//! - empty optional fields are left out
//! - locked fields are included like any other field

use crate::console::Continuation;
use crate::error::FormError;
use crate::screen::Link;
use mason_framework::{Method, Navigation};
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Text,
    TextArea,
    Number,
    Checkbox,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub input: Input,
    pub required: bool,
    /// Shown but not editable.
    pub locked: bool,
    /// Neither shown nor editable; still submitted.
    pub hidden: bool,
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, label: impl Into<String>, input: Input) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            input,
            required: false,
            locked: false,
            hidden: false,
            value: String::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// The JSON value to submit; `None` when the field is left out.
    fn coerce(&self) -> Result<Option<Value>, FormError> {
        let raw = self.value.trim();
        if self.input == Input::Checkbox {
            return parse_flag(raw)
                .map(|flag| Some(Value::Bool(flag)))
                .ok_or_else(|| FormError::InvalidFlag {
                    field: self.name.clone(),
                    value: self.value.clone(),
                });
        }
        if raw.is_empty() {
            if self.required {
                return Err(FormError::MissingRequired(self.name.clone()));
            }
            if !self.locked {
                return Ok(None);
            }
        }
        match self.input {
            Input::Number => parse_number(raw).map(Some).ok_or_else(|| FormError::InvalidNumber {
                field: self.name.clone(),
                value: self.value.clone(),
            }),
            _ => Ok(Some(Value::String(self.value.clone()))),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "" | "false" | "off" | "0" | "no" => Some(false),
        "true" | "on" | "1" | "yes" => Some(true),
        _ => None,
    }
}

fn parse_number(raw: &str) -> Option<Value> {
    if let Ok(integer) = raw.parse::<i64>() {
        return Some(Value::from(integer));
    }
    let float = raw.parse::<f64>().ok().filter(|f| f.is_finite())?;
    if float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
        return Some(Value::from(float as i64));
    }
    Number::from_f64(float).map(Value::Number)
}

/// Where a submittable form goes.
#[derive(Debug, Clone, PartialEq)]
pub enum FormTarget {
    /// Send the payload with `method` to `href`.
    Write {
        href: String,
        method: Method,
        then: Continuation,
    },
    /// GET `href` with the value of `field` appended.
    Search {
        href: String,
        field: String,
        then: Continuation,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    pub title: String,
    /// Read-only text shown under the title.
    pub lines: Vec<String>,
    pub fields: Vec<Field>,
    pub links: Vec<Link>,
    pub target: Option<FormTarget>,
}

impl Form {
    /// A form that only shows data.
    pub fn display(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn submittable(title: impl Into<String>, target: FormTarget) -> Self {
        Self {
            title: title.into(),
            target: Some(target),
            ..Self::default()
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|field| field.value.as_str())
    }

    pub fn submit_label(&self) -> &'static str {
        match self.target {
            Some(FormTarget::Search { .. }) => "Search",
            _ => "Submit",
        }
    }

    /// Sets a field from user input. Numbers and flags are checked right
    /// away; an empty value is accepted here and only rejected on submit.
    pub fn fill(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field = self
            .fields
            .iter_mut()
            .find(|field| field.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        if field.locked || field.hidden {
            return Err(FormError::LockedField(name.to_string()));
        }

        let candidate = Field {
            value: value.to_string(),
            required: false,
            ..field.clone()
        };
        candidate.coerce()?;
        field.value = candidate.value;
        Ok(())
    }

    /// The JSON body for a write target. Forms without fields (delete
    /// confirmations) send no body at all.
    pub fn payload(&self) -> Result<Option<Value>, FormError> {
        if self.fields.is_empty() {
            return Ok(None);
        }
        let mut body = Map::new();
        for field in &self.fields {
            if let Some(value) = field.coerce()? {
                body.insert(field.name.clone(), value);
            }
        }
        Ok(Some(Value::Object(body)))
    }

    /// Validates the form and returns the request it stands for.
    pub fn navigation(&self) -> Result<Navigation<Continuation>, FormError> {
        match &self.target {
            None => Err(FormError::NotSubmittable),
            Some(FormTarget::Write { href, method, then }) => {
                let payload = self.payload()?;
                let then = then.clone().for_payload(payload.as_ref());
                Ok(Navigation::write(href.clone(), *method, payload, then))
            }
            Some(FormTarget::Search { href, field, then }) => {
                self.payload()?;
                let term = self.value(field).unwrap_or_default().trim();
                Ok(Navigation::get(search_href(href, term), then.clone()))
            }
        }
    }
}

/// The term becomes one encoded path segment under the collection path;
/// any query of a filtered listing is dropped.
fn search_href(collection: &str, term: &str) -> String {
    let path = collection
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    format!("{path}{}", urlencoding::encode(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResourceKind;
    use serde_json::json;

    fn drink_form() -> Form {
        let mut form = Form::submittable(
            "Post New Drink",
            FormTarget::Write {
                href: "/api/drinks/".into(),
                method: Method::Post,
                then: Continuation::Created(ResourceKind::Drink),
            },
        );
        form.fields = vec![
            Field::new("name", "Drink name", Input::Text).required(),
            Field::new("alcohol", "Contains alcohol", Input::Checkbox).required(),
            Field::new("description", "Description", Input::Text),
        ];
        form
    }

    #[test]
    fn test_missing_required_blocks_submission() {
        let form = drink_form();
        assert_eq!(
            form.navigation(),
            Err(FormError::MissingRequired("name".into()))
        );

        let mut form = drink_form();
        form.fill("name", "   ").unwrap();
        assert_eq!(
            form.navigation(),
            Err(FormError::MissingRequired("name".into()))
        );
    }

    #[test]
    fn test_payload_coerces_and_omits_empty_optionals() {
        let mut form = drink_form();
        form.fill("name", "Mojito").unwrap();
        form.fill("alcohol", "yes").unwrap();

        let navigation = form.navigation().unwrap();
        assert_eq!(navigation.method, Method::Post);
        assert_eq!(navigation.href, "/api/drinks/");
        assert_eq!(
            navigation.payload,
            Some(json!({"name": "Mojito", "alcohol": true}))
        );
        assert_eq!(navigation.then, Continuation::Created(ResourceKind::Drink));
    }

    #[test]
    fn test_unchecked_checkbox_is_false() {
        let mut form = drink_form();
        form.fill("name", "Lemonade").unwrap();
        assert_eq!(
            form.payload().unwrap(),
            Some(json!({"name": "Lemonade", "alcohol": false}))
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse_number("320"), Some(json!(320)));
        assert_eq!(parse_number("2.5"), Some(json!(2.5)));
        assert_eq!(parse_number("4.0"), Some(json!(4)));
        assert_eq!(parse_number("-1"), Some(json!(-1)));
        assert_eq!(parse_number("lots"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_fill_rejects_bad_input() {
        let mut form = drink_form();
        form.fields
            .push(Field::new("calories", "Calories", Input::Number));
        form.fields
            .push(Field::new("recipe", "Recipe", Input::Text).locked().with_value("Chili"));

        assert_eq!(
            form.fill("calories", "many"),
            Err(FormError::InvalidNumber {
                field: "calories".into(),
                value: "many".into()
            })
        );
        assert_eq!(form.value("calories"), Some(""));
        assert!(matches!(
            form.fill("alcohol", "maybe"),
            Err(FormError::InvalidFlag { .. })
        ));
        assert_eq!(
            form.fill("colour", "red"),
            Err(FormError::UnknownField("colour".into()))
        );
        assert_eq!(
            form.fill("recipe", "Soup"),
            Err(FormError::LockedField("recipe".into()))
        );
        assert_eq!(form.value("recipe"), Some("Chili"));
    }

    #[test]
    fn test_locked_and_hidden_fields_are_submitted() {
        let mut form = Form::submittable(
            "Delete which pairing?",
            FormTarget::Write {
                href: "/api/recipes/Chili/ingredients/".into(),
                method: Method::Delete,
                then: Continuation::PairingSubmitted {
                    recipe_href: "/api/recipes/Chili/".into(),
                },
            },
        );
        form.fields = vec![
            Field::new("ingredient", "Ingredient", Input::Text).required(),
            Field::new("recipe", "Recipe", Input::Text)
                .required()
                .locked()
                .with_value("Chili"),
            Field::new("amount", "Amount", Input::Number)
                .hidden()
                .with_value("1"),
        ];
        form.fill("ingredient", "beans").unwrap();

        assert_eq!(
            form.payload().unwrap(),
            Some(json!({"ingredient": "beans", "recipe": "Chili", "amount": 1}))
        );
    }

    #[test]
    fn test_delete_confirmation_has_no_body() {
        let form = Form::submittable(
            "Delete Recipe?",
            FormTarget::Write {
                href: "/api/recipes/Chili/".into(),
                method: Method::Delete,
                then: Continuation::Deleted {
                    kind: ResourceKind::Recipe,
                    collection: "/api/recipes/".into(),
                },
            },
        );
        let navigation = form.navigation().unwrap();
        assert_eq!(navigation.method, Method::Delete);
        assert_eq!(navigation.payload, None);
    }

    #[test]
    fn test_search_appends_term() {
        let mut form = Form::submittable(
            "Search",
            FormTarget::Search {
                href: "/api/recipes/".into(),
                field: "recipe".into(),
                then: Continuation::Detail(ResourceKind::Recipe),
            },
        );
        form.fields = vec![Field::new("recipe", "Search by name", Input::Text).required()];

        assert!(form.navigation().is_err());
        form.fill("recipe", "Chili").unwrap();
        let navigation = form.navigation().unwrap();
        assert_eq!(navigation.href, "/api/recipes/Chili");
        assert_eq!(navigation.method, Method::Get);
        assert_eq!(form.submit_label(), "Search");
    }

    #[test]
    fn test_search_term_is_one_path_segment() {
        let mut form = Form::submittable(
            "Search",
            FormTarget::Search {
                href: "/api/recipes/?ingredient=salt&start=0".into(),
                field: "recipe".into(),
                then: Continuation::Detail(ResourceKind::Recipe),
            },
        );
        form.fields = vec![Field::new("recipe", "Search by name", Input::Text).required()];

        form.fill("recipe", "Mac & Cheese #2?").unwrap();
        assert_eq!(
            form.navigation().unwrap().href,
            "/api/recipes/Mac%20%26%20Cheese%20%232%3F"
        );
    }

    #[test]
    fn test_display_form_is_not_submittable() {
        assert_eq!(
            Form::display("Chili").navigation(),
            Err(FormError::NotSubmittable)
        );
    }
}
