use super::push_link;
use crate::console::Continuation;
use crate::model::{Rel, ResourceKind};
use crate::screen::{Form, Link, Screen};
use mason_framework::{Document, FrameworkError, Navigation};

const KIND: ResourceKind = ResourceKind::Ingredient;

pub fn detail(doc: &Document) -> Result<Screen, FrameworkError> {
    let this = doc.require(Rel::SelfLink)?;

    let mut navigation = Vec::new();
    push_link(&mut navigation, doc, Rel::Collection, "back", Continuation::Collection(KIND));
    push_link(&mut navigation, doc, Rel::Edit, "edit this ingredient", Continuation::EditForm(KIND));
    push_link(
        &mut navigation,
        doc,
        Rel::Recipes,
        "recipes with this ingredient",
        Continuation::Collection(ResourceKind::Recipe),
    );
    if doc.has(Rel::Delete) {
        navigation.push(Link::new(
            "delete ingredient",
            Navigation::follow(this, Continuation::DeleteForm(KIND)),
        ));
    }

    let mut form = Form::display(doc.text("name"));
    form.lines = vec![
        format!("Unit: {}", doc.text("unit")),
        format!("Calories: {}", doc.text("calories")),
        format!("Description: {}", doc.text("description")),
    ];

    Ok(Screen {
        navigation,
        pagination: Vec::new(),
        table: None,
        form: Some(form),
        notification: None,
    })
}
