use super::push_link;
use crate::console::Continuation;
use crate::model::{Rel, ResourceKind};
use crate::screen::{Form, Link, Screen};
use mason_framework::{Document, FrameworkError, Navigation};

const KIND: ResourceKind = ResourceKind::Recipe;

/// Detail view of a recipe. The ingredient table is filled in afterwards by
/// the pairing list.
pub fn detail(doc: &Document) -> Result<Screen, FrameworkError> {
    let this = doc.require(Rel::SelfLink)?;

    let mut navigation = vec![Link::new("recipe", Navigation::follow(this, Continuation::Detail(KIND)))];
    push_link(&mut navigation, doc, Rel::Collection, "back", Continuation::Collection(KIND));
    push_link(&mut navigation, doc, Rel::Edit, "edit recipe body", Continuation::EditForm(KIND));
    push_link(
        &mut navigation,
        doc,
        Rel::Ingredients,
        "remove ingredient",
        Continuation::PairingDeleteForm,
    );
    push_link(
        &mut navigation,
        doc,
        Rel::Ingredients,
        "add ingredient",
        Continuation::PairingPostForm,
    );
    if doc.has(Rel::Delete) {
        navigation.push(Link::new(
            "delete recipe",
            Navigation::follow(this, Continuation::DeleteForm(KIND)),
        ));
    }

    let mut form = Form::display(doc.text("name"));
    form.lines = vec![doc.text("description"), doc.text("text")];
    push_link(
        &mut form.links,
        doc,
        Rel::Drink,
        "Drink Recommendation",
        Continuation::Detail(ResourceKind::Drink),
    );

    Ok(Screen {
        navigation,
        pagination: Vec::new(),
        table: None,
        form: Some(form),
        notification: None,
    })
}
