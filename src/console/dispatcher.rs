//! # Admin Console
//!
//! The state machine behind the admin screen. Every response arrives with
//! the [`Continuation`] its request was sent with; [`AdminConsole`] picks
//! the view for it and decides whether another request has to follow.
//!
//! ## Transitions
//!
//! | Continuation | Response | Next screen | Follow-up |
//! |--------------|----------|-------------|-----------|
//! | `Collection` | document | list view | |
//! | `Detail(Recipe)` | document | recipe detail | GET `bigrec:ingredients` as `PairingList` |
//! | `Detail(_)` | document | detail view | |
//! | `PostForm` / `EditForm` / `DeleteForm` | document | form | |
//! | `Pairing*` | document | current screen, one region replaced | |
//! | `AppendRow` | document | current screen plus one row | |
//! | `Created` | write | message | GET `Location` as `AppendRow` |
//! | `Edited` / `Deleted` / `PairingSubmitted` | write | message | GET resource, then message again |
//! | `Renamed` | write | message | GET `collection`, then message again |
//!
//! A continuation paired with the wrong kind of response (a write
//! continuation receiving a document, or the other way round) is a
//! `Malformed` failure.

use super::Continuation;
use crate::model::{Rel, ResourceKind};
use crate::screen::{Notification, Screen};
use crate::views::{collection, drink, forms, ingredient, pairing, recipe};
use mason_framework::{Console, Document, FrameworkError, Navigation, Outcome, Step, Submission};
use tracing::{debug, warn};

type AdminStep = Step<Screen, Continuation>;

#[derive(Debug, Default, Clone)]
pub struct AdminConsole;

impl Console for AdminConsole {
    type Screen = Screen;
    type Continuation = Continuation;

    fn advance(
        &self,
        screen: &Screen,
        then: &Continuation,
        outcome: Outcome,
    ) -> Result<AdminStep, FrameworkError> {
        match outcome {
            Outcome::Fetched(doc) => {
                log_unknown_controls(&doc);
                render(screen, then, &doc)
            }
            Outcome::Submitted(submission) => complete(screen, then, submission),
        }
    }

    fn on_failure(&self, screen: &Screen, error: &FrameworkError) -> Screen {
        with_notification(screen.clone(), Notification::Error(error.to_string()))
    }
}

fn log_unknown_controls(doc: &Document) {
    for name in doc.relations::<Rel>().unknown {
        warn!(control = name, "Ignoring unknown control");
    }
}

fn with_notification(screen: Screen, notification: Notification) -> Screen {
    Screen {
        notification: Some(notification),
        ..screen
    }
}

fn render(screen: &Screen, then: &Continuation, doc: &Document) -> Result<AdminStep, FrameworkError> {
    debug!(%then, "Rendering document");
    let step = match then {
        Continuation::Collection(kind) => Step::render(collection::collection(*kind, doc)?),
        Continuation::Detail(ResourceKind::Recipe) => {
            let step = Step::render(recipe::detail(doc)?);
            match doc.control(Rel::Ingredients) {
                Some(ingredients) => {
                    step.then(Navigation::follow(ingredients, Continuation::PairingList))
                }
                None => step,
            }
        }
        Continuation::Detail(ResourceKind::Ingredient) => Step::render(ingredient::detail(doc)?),
        Continuation::Detail(ResourceKind::Drink) => Step::render(drink::detail(doc)?),
        Continuation::EditForm(kind) => Step::render(forms::edit_form(*kind, doc)?),
        Continuation::PostForm(kind) => Step::render(forms::post_form(*kind, doc)?),
        Continuation::DeleteForm(kind) => Step::render(forms::delete_form(*kind, doc)?),
        Continuation::PairingList => Step::render(pairing::list(screen, doc)),
        Continuation::PairingPostForm => Step::render(pairing::post_form(screen, doc)?),
        Continuation::PairingDeleteForm => Step::render(pairing::delete_form(screen, doc)?),
        Continuation::AppendRow(kind) => Step::render(collection::append_row(screen, *kind, doc)),
        Continuation::Notify { message, then } => {
            let step = render(screen, then, doc)?;
            Step {
                screen: with_notification(step.screen, Notification::Message(message.clone())),
                follow_up: step.follow_up,
            }
        }
        Continuation::Created(_)
        | Continuation::Edited { .. }
        | Continuation::Renamed { .. }
        | Continuation::Deleted { .. }
        | Continuation::PairingSubmitted { .. } => {
            return Err(FrameworkError::Malformed(format!(
                "expected a write response for {then}"
            )));
        }
    };
    Ok(step)
}

fn complete(
    screen: &Screen,
    then: &Continuation,
    submission: Submission,
) -> Result<AdminStep, FrameworkError> {
    debug!(%then, status = submission.status, location = ?submission.location, "Write completed");
    let notified = |message: &str| with_notification(screen.clone(), Notification::Message(message.to_string()));

    let step = match then {
        Continuation::Created(kind) => {
            let message = format!("Successful {kind} Submission");
            let step = Step::render(notified(&message));
            match submission.location {
                Some(location) => step.then(Navigation::get(location, Continuation::AppendRow(*kind))),
                None => {
                    warn!(%kind, "Created resource has no Location");
                    step
                }
            }
        }
        Continuation::Edited { kind, href, .. } => {
            let message = format!("Successful {kind} Edit");
            Step::render(notified(&message)).then(Navigation::get(
                href.clone(),
                Continuation::notify(message, Continuation::Detail(*kind)),
            ))
        }
        Continuation::Renamed { kind, collection } => {
            let message = format!("Successful {kind} Edit");
            Step::render(notified(&message)).then(Navigation::get(
                collection.clone(),
                Continuation::notify(message, Continuation::Collection(*kind)),
            ))
        }
        Continuation::Deleted { kind, collection } => {
            let message = format!("Successful {kind} Deletion");
            Step::render(notified(&message)).then(Navigation::get(
                collection.clone(),
                Continuation::notify(message, Continuation::Collection(*kind)),
            ))
        }
        Continuation::PairingSubmitted { recipe_href } => {
            let message = "Successful Pairing Submission";
            Step::render(notified(message)).then(Navigation::get(
                recipe_href.clone(),
                Continuation::notify(message, Continuation::Detail(ResourceKind::Recipe)),
            ))
        }
        Continuation::Notify { message, then } => {
            let step = complete(screen, then, submission)?;
            Step {
                screen: with_notification(step.screen, Notification::Message(message.clone())),
                follow_up: step.follow_up,
            }
        }
        _ => {
            return Err(FrameworkError::Malformed(format!(
                "expected a document for {then}"
            )));
        }
    };
    Ok(step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::fixtures;
    use mason_framework::Method;

    fn fetched(doc: Document) -> Outcome {
        Outcome::Fetched(doc)
    }

    fn written(status: u16, location: Option<&str>) -> Outcome {
        Outcome::Submitted(Submission {
            status,
            location: location.map(str::to_string),
            body: None,
        })
    }

    #[test]
    fn test_recipe_detail_chains_pairing_list() {
        let console = AdminConsole;
        let step = console
            .advance(
                &Screen::default(),
                &Continuation::Detail(ResourceKind::Recipe),
                fetched(fixtures::chili()),
            )
            .unwrap();

        assert_eq!(
            step.follow_up,
            Some(Navigation::get(
                "/api/recipes/Chili/ingredients/",
                Continuation::PairingList
            ))
        );
        assert_eq!(step.screen.form.unwrap().title, "Chili");

        let step = console
            .advance(
                &Screen::default(),
                &Continuation::Detail(ResourceKind::Drink),
                fetched(fixtures::mojito()),
            )
            .unwrap();
        assert!(step.follow_up.is_none());
    }

    #[test]
    fn test_pairing_list_lands_on_detail() {
        let console = AdminConsole;
        let detail = console
            .advance(
                &Screen::default(),
                &Continuation::Detail(ResourceKind::Recipe),
                fetched(fixtures::chili()),
            )
            .unwrap()
            .screen;
        let step = console
            .advance(&detail, &Continuation::PairingList, fetched(fixtures::chili_pairings()))
            .unwrap();

        assert_eq!(step.screen.navigation, detail.navigation);
        assert_eq!(step.screen.table.unwrap().rows.len(), 2);
    }

    #[test]
    fn test_created_appends_via_location() {
        let console = AdminConsole;
        let form_screen = forms::post_form(ResourceKind::Drink, &fixtures::drinks()).unwrap();

        let step = console
            .advance(
                &form_screen,
                &Continuation::Created(ResourceKind::Drink),
                written(201, Some("/api/drinks/Mojito/")),
            )
            .unwrap();
        assert_eq!(step.screen.message(), Some("Successful Drink Submission"));
        assert_eq!(step.screen.form, form_screen.form);
        assert_eq!(
            step.follow_up,
            Some(Navigation::get(
                "/api/drinks/Mojito/",
                Continuation::AppendRow(ResourceKind::Drink)
            ))
        );

        let appended = console
            .advance(
                &step.screen,
                &Continuation::AppendRow(ResourceKind::Drink),
                fetched(fixtures::mojito()),
            )
            .unwrap();
        assert_eq!(appended.screen.table.as_ref().unwrap().rows[0].cells, ["Mojito", "true"]);
        assert_eq!(appended.screen.message(), Some("Successful Drink Submission"));
        assert!(appended.follow_up.is_none());
    }

    #[test]
    fn test_created_without_location_only_notifies() {
        let step = AdminConsole
            .advance(
                &Screen::default(),
                &Continuation::Created(ResourceKind::Recipe),
                written(201, None),
            )
            .unwrap();
        assert!(step.follow_up.is_none());
        assert_eq!(step.screen.message(), Some("Successful Recipe Submission"));
    }

    #[test]
    fn test_edit_reloads_detail_with_message() {
        let console = AdminConsole;
        let then = Continuation::Edited {
            kind: ResourceKind::Ingredient,
            href: "/api/ingredients/salt/".into(),
            name: "salt".into(),
            collection: "/api/ingredients/".into(),
        };
        let step = console
            .advance(&Screen::default(), &then, written(204, None))
            .unwrap();
        let follow_up = step.follow_up.unwrap();
        assert_eq!(follow_up.method, Method::Get);
        assert_eq!(follow_up.href, "/api/ingredients/salt/");

        let detail = console
            .advance(&step.screen, &follow_up.then, fetched(fixtures::salt()))
            .unwrap();
        assert_eq!(detail.screen.message(), Some("Successful Ingredient Edit"));
        assert_eq!(detail.screen.form.unwrap().title, "salt");
    }

    #[test]
    fn test_rename_lists_collection_with_message() {
        let console = AdminConsole;
        let then = Continuation::Renamed {
            kind: ResourceKind::Ingredient,
            collection: "/api/ingredients/".into(),
        };
        let step = console
            .advance(&Screen::default(), &then, written(204, None))
            .unwrap();
        assert_eq!(step.screen.message(), Some("Successful Ingredient Edit"));
        let follow_up = step.follow_up.unwrap();
        assert_eq!(follow_up.href, "/api/ingredients/");
        assert_eq!(
            follow_up.then,
            Continuation::notify(
                "Successful Ingredient Edit",
                Continuation::Collection(ResourceKind::Ingredient)
            )
        );
    }

    #[test]
    fn test_delete_returns_to_collection() {
        let then = Continuation::Deleted {
            kind: ResourceKind::Recipe,
            collection: "/api/recipes/".into(),
        };
        let step = AdminConsole
            .advance(&Screen::default(), &then, written(204, None))
            .unwrap();
        let follow_up = step.follow_up.unwrap();
        assert_eq!(follow_up.href, "/api/recipes/");

        let list = AdminConsole
            .advance(&step.screen, &follow_up.then, fetched(fixtures::recipes()))
            .unwrap();
        assert_eq!(list.screen.message(), Some("Successful Recipe Deletion"));
        assert_eq!(list.screen.table.unwrap().title, "Recipes");
    }

    #[test]
    fn test_pairing_submission_reloads_recipe_and_pairings() {
        let console = AdminConsole;
        let then = Continuation::PairingSubmitted {
            recipe_href: "/api/recipes/Chili/".into(),
        };
        let step = console
            .advance(&Screen::default(), &then, written(201, Some("/api/recipes/Chili/ingredients/")))
            .unwrap();
        let follow_up = step.follow_up.unwrap();
        assert_eq!(follow_up.href, "/api/recipes/Chili/");

        let detail = console
            .advance(&step.screen, &follow_up.then, fetched(fixtures::chili()))
            .unwrap();
        assert_eq!(detail.screen.message(), Some("Successful Pairing Submission"));
        assert_eq!(
            detail.follow_up.map(|nav| nav.then),
            Some(Continuation::PairingList)
        );
    }

    #[test]
    fn test_mismatched_outcome_is_malformed() {
        let console = AdminConsole;
        let err = console
            .advance(
                &Screen::default(),
                &Continuation::Created(ResourceKind::Recipe),
                fetched(fixtures::chili()),
            )
            .unwrap_err();
        assert!(matches!(err, FrameworkError::Malformed(_)));

        let err = console
            .advance(
                &Screen::default(),
                &Continuation::Collection(ResourceKind::Recipe),
                written(204, None),
            )
            .unwrap_err();
        assert!(matches!(err, FrameworkError::Malformed(_)));
    }

    #[test]
    fn test_failure_only_sets_notification() {
        let screen = collection::collection(ResourceKind::Recipe, &fixtures::recipes()).unwrap();
        let failed = AdminConsole.on_failure(
            &screen,
            &FrameworkError::request_failed(Some(409), "Already exists"),
        );

        assert_eq!(failed.error(), Some("Already exists"));
        assert_eq!(failed.navigation, screen.navigation);
        assert_eq!(failed.pagination, screen.pagination);
        assert_eq!(failed.table, screen.table);
        assert_eq!(failed.form, screen.form);
    }
}
