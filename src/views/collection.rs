use super::push_link;
use crate::console::Continuation;
use crate::model::{Rel, ResourceKind};
use crate::screen::{Field, Form, FormTarget, Input, Link, Row, Screen, Table};
use mason_framework::{Document, FrameworkError, Navigation};

/// List view of a recipe, ingredient or drink collection.
pub fn collection(kind: ResourceKind, doc: &Document) -> Result<Screen, FrameworkError> {
    let this = doc.require(Rel::SelfLink)?;

    let navigation = vec![Link::new(
        format!("Post New {}", kind.singular()),
        Navigation::follow(this, Continuation::PostForm(kind)),
    )];

    let mut pagination = Vec::new();
    push_link(&mut pagination, doc, Rel::Prev, "prev", Continuation::Collection(kind));
    push_link(&mut pagination, doc, Rel::Next, "next", Continuation::Collection(kind));

    let mut table = Table::new(kind.plural(), kind.columns(), true);
    table.rows = doc.items().iter().map(|item| row(kind, item)).collect();

    let mut search = Form::submittable(
        "Search",
        FormTarget::Search {
            href: this.href.clone(),
            field: kind.field().to_string(),
            then: Continuation::Detail(kind),
        },
    );
    search
        .fields
        .push(Field::new(kind.field(), "Search by name", Input::Text).required());

    Ok(Screen {
        navigation,
        pagination,
        table: Some(table),
        form: Some(search),
        notification: None,
    })
}

/// A table row for one item; the "show" link needs the item's `self`.
pub fn row(kind: ResourceKind, item: &Document) -> Row {
    Row {
        cells: kind.summary(item),
        link: item
            .control(Rel::SelfLink)
            .map(|control| Link::new("show", Navigation::follow(control, Continuation::Detail(kind)))),
    }
}

/// Adds a freshly created resource to the visible table, creating the table
/// when none is shown. Nothing else on the screen changes.
pub fn append_row(screen: &Screen, kind: ResourceKind, doc: &Document) -> Screen {
    let mut table = screen
        .table
        .clone()
        .unwrap_or_else(|| Table::new(kind.plural(), kind.columns(), true));
    table.rows.push(row(kind, doc));
    Screen {
        table: Some(table),
        ..screen.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Notification;
    use crate::views::fixtures;
    use mason_framework::Method;
    use serde_json::json;

    #[test]
    fn test_recipe_collection() {
        let screen = collection(ResourceKind::Recipe, &fixtures::recipes()).unwrap();

        assert_eq!(screen.navigation.len(), 1);
        assert_eq!(screen.navigation[0].label, "Post New Recipe");
        assert_eq!(
            screen.navigation[0].navigation,
            Navigation::get("/api/recipes/", Continuation::PostForm(ResourceKind::Recipe))
        );

        let table = screen.table.as_ref().unwrap();
        assert_eq!(table.title, "Recipes");
        assert_eq!(table.columns, ["Name", "Description"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells, ["Chili", "Spicy"]);
        let show = table.rows[0].link.as_ref().unwrap();
        assert_eq!(show.label, "show");
        assert_eq!(show.navigation.href, "/api/recipes/Chili/");
        assert_eq!(show.navigation.then, Continuation::Detail(ResourceKind::Recipe));

        let form = screen.form.as_ref().unwrap();
        assert_eq!(form.title, "Search");
        assert!(form.field("recipe").unwrap().required);
        assert!(screen.notification.is_none());
    }

    #[test]
    fn test_pagination_links() {
        let with = |controls: serde_json::Value| {
            let doc = Document::from_value(json!({"items": [], "@controls": controls})).unwrap();
            collection(ResourceKind::Recipe, &doc).unwrap().pagination
        };

        let none = with(json!({"self": {"href": "/api/recipes/"}}));
        assert!(none.is_empty());

        let next = with(json!({
            "self": {"href": "/api/recipes/"},
            "next": {"href": "/api/recipes/?start=2"}
        }));
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].label, "next");

        let both = with(json!({
            "self": {"href": "/api/recipes/?start=2"},
            "prev": {"href": "/api/recipes/?start=0"},
            "next": {"href": "/api/recipes/?start=4"}
        }));
        let labels: Vec<&str> = both.iter().map(|link| link.label.as_str()).collect();
        assert_eq!(labels, ["prev", "next"]);
        assert_eq!(both[0].navigation.then, Continuation::Collection(ResourceKind::Recipe));
    }

    #[test]
    fn test_items_without_self_have_no_link() {
        let screen = collection(ResourceKind::Drink, &fixtures::drinks()).unwrap();
        let rows = &screen.table.as_ref().unwrap().rows;
        assert_eq!(rows[0].cells, ["Mojito", "true"]);
        assert!(rows[0].link.is_some());
        assert_eq!(rows[1].cells, ["Lemonade", "false"]);
        assert!(rows[1].link.is_none());
    }

    #[test]
    fn test_collection_requires_self() {
        let doc = Document::from_value(json!({"items": []})).unwrap();
        assert_eq!(
            collection(ResourceKind::Ingredient, &doc),
            Err(FrameworkError::MissingControl("self".into()))
        );
    }

    #[test]
    fn test_search_targets_self() {
        let screen = collection(ResourceKind::Ingredient, &Document::from_value(json!({
            "items": [],
            "@controls": {"self": {"href": "/api/ingredients/"}}
        })).unwrap())
        .unwrap();
        let mut form = screen.form.unwrap();
        form.fill("ingredient", "salt").unwrap();
        let navigation = form.navigation().unwrap();
        assert_eq!(navigation.href, "/api/ingredients/salt");
        assert_eq!(navigation.method, Method::Get);
        assert_eq!(navigation.then, Continuation::Detail(ResourceKind::Ingredient));
    }

    #[test]
    fn test_append_row_keeps_everything_else() {
        let mut screen = Screen {
            notification: Some(Notification::Message("Successful Drink Submission".into())),
            ..Screen::default()
        };
        screen.navigation.push(Link::new(
            "back",
            Navigation::get("/api/drinks/", Continuation::Collection(ResourceKind::Drink)),
        ));

        let created = fixtures::mojito();
        let next = append_row(&screen, ResourceKind::Drink, &created);
        let table = next.table.as_ref().unwrap();
        assert_eq!(table.title, "Drinks");
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells, ["Mojito", "true"]);
        assert_eq!(next.navigation, screen.navigation);
        assert_eq!(next.notification, screen.notification);

        let again = append_row(&next, ResourceKind::Drink, &created);
        assert_eq!(again.table.unwrap().rows.len(), 2);
    }
}
