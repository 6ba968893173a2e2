use crate::model::ResourceKind;
use serde_json::Value;
use std::fmt;

/// What the console does with the response to a navigation.
///
/// Read continuations turn a fetched document into a screen. Write
/// continuations handle the result of a POST/PUT/DELETE and usually chain a
/// GET to show the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Continuation {
    Collection(ResourceKind),
    Detail(ResourceKind),
    EditForm(ResourceKind),
    PostForm(ResourceKind),
    DeleteForm(ResourceKind),
    PairingList,
    PairingPostForm,
    PairingDeleteForm,
    /// Adds the fetched resource as a row of the visible table.
    AppendRow(ResourceKind),

    Created(ResourceKind),
    /// `name` is the resource's name before the edit.
    Edited {
        kind: ResourceKind,
        href: String,
        name: String,
        collection: String,
    },
    /// An edit that changed the name; the old href no longer resolves.
    Renamed {
        kind: ResourceKind,
        collection: String,
    },
    Deleted {
        kind: ResourceKind,
        collection: String,
    },
    PairingSubmitted {
        recipe_href: String,
    },

    /// Runs the inner continuation, then shows `message`.
    Notify {
        message: String,
        then: Box<Continuation>,
    },
}

impl Continuation {
    /// Settles a write continuation against the body about to be sent.
    pub fn for_payload(self, payload: Option<&Value>) -> Self {
        let sent_name = payload
            .and_then(|body| body.get("name"))
            .and_then(Value::as_str);
        match self {
            Continuation::Edited {
                kind,
                name,
                collection,
                ..
            } if sent_name.is_some_and(|sent| sent != name) => {
                Continuation::Renamed { kind, collection }
            }
            other => other,
        }
    }

    pub fn notify(message: impl Into<String>, then: Continuation) -> Self {
        Continuation::Notify {
            message: message.into(),
            then: Box::new(then),
        }
    }
}

impl fmt::Display for Continuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Continuation::Collection(kind) => write!(f, "{kind} list"),
            Continuation::Detail(kind) => write!(f, "{kind} detail"),
            Continuation::EditForm(kind) => write!(f, "{kind} edit form"),
            Continuation::PostForm(kind) => write!(f, "{kind} post form"),
            Continuation::DeleteForm(kind) => write!(f, "{kind} delete form"),
            Continuation::PairingList => f.write_str("pairing list"),
            Continuation::PairingPostForm => f.write_str("pairing post form"),
            Continuation::PairingDeleteForm => f.write_str("pairing delete form"),
            Continuation::AppendRow(kind) => write!(f, "{kind} row"),
            Continuation::Created(kind) => write!(f, "{kind} created"),
            Continuation::Edited { kind, .. } => write!(f, "{kind} edited"),
            Continuation::Renamed { kind, .. } => write!(f, "{kind} renamed"),
            Continuation::Deleted { kind, .. } => write!(f, "{kind} deleted"),
            Continuation::PairingSubmitted { .. } => f.write_str("pairing submitted"),
            Continuation::Notify { then, .. } => write!(f, "{then} with message"),
        }
    }
}
