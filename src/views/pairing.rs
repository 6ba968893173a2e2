//! Pairing views. They only touch part of the current screen, so each takes
//! the screen it updates.

use super::forms::schema_form;
use crate::console::Continuation;
use crate::model::{pairings, Rel};
use crate::screen::{Field, Form, FormTarget, Input, Row, Screen, Table};
use mason_framework::{Document, FrameworkError};

pub const COLUMNS: [&str; 3] = ["Name", "Amount", "Units"];

/// Fills the ingredient table of a recipe detail.
pub fn list(screen: &Screen, doc: &Document) -> Screen {
    let mut table = Table::new("Ingredients", &COLUMNS, false);
    table.rows = pairings(doc)
        .into_iter()
        .map(|pairing| Row {
            cells: vec![pairing.ingredient, pairing.amount, pairing.unit],
            link: None,
        })
        .collect();

    Screen {
        pagination: Vec::new(),
        table: Some(table),
        ..screen.clone()
    }
}

fn submitted(doc: &Document) -> Result<Continuation, FrameworkError> {
    let recipe = doc.require(Rel::Recipe)?;
    Ok(Continuation::PairingSubmitted {
        recipe_href: recipe.href.clone(),
    })
}

/// Adds an ingredient to the recipe. The recipe field is fixed to the recipe
/// being shown.
pub fn post_form(screen: &Screen, doc: &Document) -> Result<Screen, FrameworkError> {
    let add = doc.require(Rel::AddPairing)?;
    let then = submitted(doc)?;

    let mut form = schema_form("Post New Pairing", add, then, None);
    for field in &mut form.fields {
        if field.name == "recipe" {
            field.locked = true;
            field.value = doc.text("recipe");
        }
    }

    Ok(Screen {
        table: None,
        form: Some(form),
        notification: None,
        ..screen.clone()
    })
}

/// Removes an ingredient from the recipe. The server identifies the pairing
/// by recipe and ingredient; `amount` is sent only because the request
/// schema requires it.
pub fn delete_form(screen: &Screen, doc: &Document) -> Result<Screen, FrameworkError> {
    let delete = doc.require(Rel::DeletePairing)?;
    let then = submitted(doc)?;

    let mut form = Form::submittable(
        "Delete which pairing?",
        FormTarget::Write {
            href: delete.href.clone(),
            method: delete.method,
            then,
        },
    );
    form.fields = vec![
        Field::new("ingredient", "Ingredient", Input::Text).required(),
        Field::new("recipe", "Recipe", Input::Text)
            .required()
            .locked()
            .with_value(doc.text("recipe")),
        Field::new("amount", "Amount", Input::Number)
            .hidden()
            .with_value("1"),
    ];

    Ok(Screen {
        form: Some(form),
        notification: None,
        ..screen.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;
    use crate::screen::Notification;
    use crate::views::{fixtures, recipe};
    use mason_framework::Method;
    use serde_json::json;

    fn chili_screen() -> Screen {
        recipe::detail(&fixtures::chili()).unwrap()
    }

    #[test]
    fn test_list_fills_table_only() {
        let before = Screen {
            notification: Some(Notification::Message("Successful Pairing Submission".into())),
            ..chili_screen()
        };
        let after = list(&before, &fixtures::chili_pairings());

        let table = after.table.as_ref().unwrap();
        assert_eq!(table.title, "Ingredients");
        assert_eq!(table.columns, COLUMNS);
        assert!(!table.linked);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cells, ["beans", "400", "g"]);
        assert_eq!(table.rows[1].cells, ["chili", "2", "pcs"]);

        assert_eq!(after.navigation, before.navigation);
        assert_eq!(after.form, before.form);
        assert_eq!(after.notification, before.notification);
    }

    #[test]
    fn test_list_without_ingredients() {
        let doc = Document::from_value(json!({"recipe": "Toast"})).unwrap();
        let after = list(&chili_screen(), &doc);
        assert!(after.table.unwrap().rows.is_empty());
    }

    #[test]
    fn test_post_pairing_form() {
        let screen = post_form(&chili_screen(), &fixtures::chili_pairings()).unwrap();
        assert!(screen.table.is_none());
        assert_eq!(screen.navigation, chili_screen().navigation);

        let mut form = screen.form.unwrap();
        assert_eq!(form.title, "Post New Pairing");
        let recipe = form.field("recipe").unwrap();
        assert!(recipe.locked);
        assert_eq!(recipe.value, "Chili");
        assert_eq!(form.field("amount").unwrap().input, Input::Number);

        form.fill("ingredient", "salt").unwrap();
        form.fill("amount", "5").unwrap();
        let navigation = form.navigation().unwrap();
        assert_eq!(navigation.method, Method::Post);
        assert_eq!(navigation.href, "/api/recipes/Chili/ingredients/");
        assert_eq!(
            navigation.payload,
            Some(json!({"recipe": "Chili", "ingredient": "salt", "amount": 5}))
        );
        assert_eq!(
            navigation.then,
            Continuation::PairingSubmitted {
                recipe_href: "/api/recipes/Chili/".into()
            }
        );
    }

    #[test]
    fn test_delete_pairing_payload_includes_recipe() {
        let before = list(&chili_screen(), &fixtures::chili_pairings());
        let screen = delete_form(&before, &fixtures::chili_pairings()).unwrap();
        assert_eq!(screen.table, before.table);

        let mut form = screen.form.unwrap();
        assert_eq!(form.title, "Delete which pairing?");
        assert_eq!(form.fill("recipe", "Soup"), Err(FormError::LockedField("recipe".into())));
        assert_eq!(
            form.navigation(),
            Err(FormError::MissingRequired("ingredient".into()))
        );

        form.fill("ingredient", "beans").unwrap();
        let navigation = form.navigation().unwrap();
        assert_eq!(navigation.method, Method::Delete);
        assert_eq!(
            navigation.payload,
            Some(json!({"ingredient": "beans", "recipe": "Chili", "amount": 1}))
        );
    }

    #[test]
    fn test_pairing_forms_need_recipe_link() {
        let doc = Document::from_value(json!({
            "recipe": "Chili",
            "@controls": {
                "bigrec:delete-pairing": {"href": "/api/recipes/Chili/ingredients/", "method": "DELETE"}
            }
        }))
        .unwrap();
        assert_eq!(
            delete_form(&Screen::default(), &doc),
            Err(FrameworkError::MissingControl("bigrec:recipe".into()))
        );
        assert_eq!(
            post_form(&Screen::default(), &doc),
            Err(FrameworkError::MissingControl("bigrec:add-pairing".into()))
        );
    }
}
