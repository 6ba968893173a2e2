use super::push_link;
use crate::console::Continuation;
use crate::model::{Rel, ResourceKind};
use crate::screen::{Form, Link, Screen};
use mason_framework::{Document, FrameworkError, Navigation};

const KIND: ResourceKind = ResourceKind::Drink;

pub fn detail(doc: &Document) -> Result<Screen, FrameworkError> {
    let this = doc.require(Rel::SelfLink)?;

    let mut navigation = Vec::new();
    push_link(&mut navigation, doc, Rel::Collection, "back", Continuation::Collection(KIND));
    push_link(&mut navigation, doc, Rel::Edit, "edit this drink", Continuation::EditForm(KIND));
    if doc.has(Rel::Delete) {
        navigation.push(Link::new(
            "delete drink",
            Navigation::follow(this, Continuation::DeleteForm(KIND)),
        ));
    }

    let mut form = Form::display(doc.text("name"));
    form.lines = vec![
        format!("Alcohol: {}", doc.text("alcohol")),
        format!("Description: {}", doc.text("description")),
    ];
    push_link(
        &mut form.links,
        doc,
        Rel::Recipe,
        "Recipe",
        Continuation::Detail(ResourceKind::Recipe),
    );

    Ok(Screen {
        navigation,
        pagination: Vec::new(),
        table: None,
        form: Some(form),
        notification: None,
    })
}
