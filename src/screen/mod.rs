//! # Screen
//!
//! Everything the admin user sees, as a plain value. The navigator owns the
//! current `Screen` and swaps it for a new one on every applied response;
//! views build screens, they never mutate one in place.
//!
//! ## Regions
//!
//! | Region | Field | Filled by |
//! |--------|-------|-----------|
//! | navigation | [`Screen::navigation`] | links of the current resource |
//! | table controls | [`Screen::pagination`] | `prev` / `next` |
//! | result table | [`Screen::table`] | collections, pairings, appended rows |
//! | form | [`Screen::form`] | detail, search, post, edit, delete forms |
//! | notification | [`Screen::notification`] | errors and success messages |
//!
//! Two renderings exist: [`Screen::to_html`] (see [`html`]) and the
//! numbered text view from `Display`, which the terminal front-end prints.
//! Links are numbered in one sequence across all regions, in the order
//! returned by [`Screen::links`].

pub mod form;
pub mod html;

pub use form::{Field, Form, FormTarget, Input};

use crate::console::Continuation;
use mason_framework::Navigation;
use std::fmt;

/// A labelled navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub label: String,
    pub navigation: Navigation<Continuation>,
}

impl Link {
    pub fn new(label: impl Into<String>, navigation: Navigation<Continuation>) -> Self {
        Self {
            label: label.into(),
            navigation,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<String>,
    /// Trailing "show" link; absent when the item had no `self` control.
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    /// Whether rows end in a link column.
    pub linked: bool,
}

impl Table {
    pub fn new(title: impl Into<String>, columns: &[&str], linked: bool) -> Self {
        Self {
            title: title.into(),
            columns: columns.iter().map(|column| column.to_string()).collect(),
            rows: Vec::new(),
            linked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Error(String),
    Message(String),
}

impl Notification {
    pub fn text(&self) -> &str {
        match self {
            Notification::Error(text) | Notification::Message(text) => text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub navigation: Vec<Link>,
    pub pagination: Vec<Link>,
    pub table: Option<Table>,
    pub form: Option<Form>,
    pub notification: Option<Notification>,
}

impl Screen {
    /// Every link on the screen in numbering order: navigation, pagination,
    /// table rows, then links inside the form.
    pub fn links(&self) -> Vec<&Link> {
        let rows = self
            .table
            .iter()
            .flat_map(|table| table.rows.iter())
            .filter_map(|row| row.link.as_ref());
        let form = self.form.iter().flat_map(|form| form.links.iter());

        self.navigation
            .iter()
            .chain(self.pagination.iter())
            .chain(rows)
            .chain(form)
            .collect()
    }

    /// The link shown as `[number]`, counting from 1.
    pub fn link(&self, number: usize) -> Option<&Link> {
        number
            .checked_sub(1)
            .and_then(|index| self.links().get(index).copied())
    }

    /// The first link with the given label.
    pub fn link_labelled(&self, label: &str) -> Option<&Link> {
        self.links().into_iter().find(|link| link.label == label)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.notification {
            Some(Notification::Error(text)) => Some(text),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.notification {
            Some(Notification::Message(text)) => Some(text),
            _ => None,
        }
    }

    pub fn to_html(&self) -> String {
        html::render(self)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut number = 0;
        let mut numbered = |link: &Link| {
            number += 1;
            format!("[{number}] {}", link.label)
        };

        if !self.navigation.is_empty() {
            let links: Vec<String> = self.navigation.iter().map(&mut numbered).collect();
            writeln!(f, "{}", links.join(" | "))?;
        }
        if !self.pagination.is_empty() {
            let links: Vec<String> = self.pagination.iter().map(&mut numbered).collect();
            writeln!(f, "{}", links.join(" | "))?;
        }

        if let Some(table) = &self.table {
            writeln!(f)?;
            writeln!(f, "== {} ==", table.title)?;
            let mut header = table.columns.clone();
            if table.linked {
                header.push("Link".to_string());
            }
            writeln!(f, "{}", header.join(" | "))?;
            for row in &table.rows {
                let mut cells = row.cells.clone();
                if let Some(link) = &row.link {
                    cells.push(numbered(link));
                }
                writeln!(f, "{}", cells.join(" | "))?;
            }
        }

        if let Some(form) = &self.form {
            writeln!(f)?;
            writeln!(f, "== {} ==", form.title)?;
            for line in &form.lines {
                writeln!(f, "{line}")?;
            }
            for field in form.fields.iter().filter(|field| !field.hidden) {
                let marker = if field.required { "*" } else { "" };
                let lock = if field.locked { " (locked)" } else { "" };
                writeln!(
                    f,
                    "  {}{marker} [{}]{lock}: {}",
                    field.label, field.name, field.value
                )?;
            }
            for link in &form.links {
                writeln!(f, "{}", numbered(link))?;
            }
            if form.target.is_some() {
                writeln!(f, "  <{}>", form.submit_label())?;
            }
        }

        if let Some(notification) = &self.notification {
            writeln!(f)?;
            match notification {
                Notification::Error(text) => writeln!(f, "! {text}")?,
                Notification::Message(text) => writeln!(f, "> {text}")?,
            }
        }
        Ok(())
    }
}
