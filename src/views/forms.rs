//! Schema-driven forms: post, edit and delete confirmation.

use super::push_link;
use crate::console::Continuation;
use crate::model::{Rel, ResourceKind};
use crate::screen::{Field, Form, FormTarget, Input, Screen};
use mason_framework::{Control, Document, FrameworkError, Property, PropertyType};

/// Builds one field per schema property, in schema order. `values` pre-fills
/// fields from an existing resource.
pub fn schema_form(
    title: impl Into<String>,
    control: &Control,
    then: Continuation,
    values: Option<&Document>,
) -> Form {
    let mut form = Form::submittable(
        title,
        FormTarget::Write {
            href: control.href.clone(),
            method: control.method,
            then,
        },
    );
    let Some(schema) = &control.schema else {
        return form;
    };

    for (name, property) in &schema.properties {
        let label = property.description.clone().unwrap_or_else(|| name.clone());
        let mut field = Field::new(name.as_str(), label, input_for(name, property));
        field.required = schema.is_required(name);
        if let Some(doc) = values {
            field.value = doc.text(name);
        }
        form.fields.push(field);
    }
    form
}

/// Input kind from the declared type, falling back to what the field is
/// known to hold.
fn input_for(name: &str, property: &Property) -> Input {
    match property.kind {
        Some(PropertyType::Number | PropertyType::Integer) => Input::Number,
        Some(PropertyType::Boolean) => Input::Checkbox,
        _ if name == "text" => Input::TextArea,
        Some(PropertyType::String) => Input::Text,
        _ => match name {
            "calories" | "amount" => Input::Number,
            "alcohol" => Input::Checkbox,
            _ => Input::Text,
        },
    }
}

fn collection_href(kind: ResourceKind, doc: &Document) -> String {
    doc.control(Rel::Collection)
        .map(|control| control.href.clone())
        .unwrap_or_else(|| kind.collection_href().to_string())
}

fn post_title(kind: ResourceKind) -> String {
    format!("Post New {}", kind.singular())
}

/// Creation form, built from the collection's `bigrec:add-*` control.
pub fn post_form(kind: ResourceKind, doc: &Document) -> Result<Screen, FrameworkError> {
    let add = doc.require(kind.add_relation())?;

    let mut navigation = Vec::new();
    push_link(&mut navigation, doc, Rel::SelfLink, "back", Continuation::Collection(kind));

    Ok(Screen {
        navigation,
        pagination: Vec::new(),
        table: None,
        form: Some(schema_form(post_title(kind), add, Continuation::Created(kind), None)),
        notification: None,
    })
}

/// Edit form, pre-filled with the resource's current values.
pub fn edit_form(kind: ResourceKind, doc: &Document) -> Result<Screen, FrameworkError> {
    let edit = doc.require(Rel::Edit)?;

    let mut navigation = Vec::new();
    push_link(&mut navigation, doc, Rel::Collection, "back", Continuation::Collection(kind));
    push_link(
        &mut navigation,
        doc,
        Rel::SelfLink,
        &format!("show this {}", kind.field()),
        Continuation::Detail(kind),
    );

    let then = Continuation::Edited {
        kind,
        href: edit.href.clone(),
        name: doc.text("name"),
        collection: collection_href(kind, doc),
    };
    Ok(Screen {
        navigation,
        pagination: Vec::new(),
        table: None,
        form: Some(schema_form(format!("Edit {}", kind.singular()), edit, then, Some(doc))),
        notification: None,
    })
}

/// Confirmation for `bigrec:delete`. Submitting sends the DELETE without a
/// body.
pub fn delete_form(kind: ResourceKind, doc: &Document) -> Result<Screen, FrameworkError> {
    let delete = doc.require(Rel::Delete)?;

    let mut navigation = Vec::new();
    push_link(&mut navigation, doc, Rel::SelfLink, "back", Continuation::Detail(kind));

    let collection = collection_href(kind, doc);
    let mut form = Form::submittable(
        format!("Delete {}?", kind.singular()),
        FormTarget::Write {
            href: delete.href.clone(),
            method: delete.method,
            then: Continuation::Deleted { kind, collection },
        },
    );
    form.lines.push(doc.text("name"));

    Ok(Screen {
        navigation,
        pagination: Vec::new(),
        table: None,
        form: Some(form),
        notification: None,
    })
}
