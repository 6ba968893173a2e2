//! HTML rendering of a [`Screen`], one `<div>` per region. All document
//! text is escaped; hrefs are emitted as given.

use crate::screen::{Form, FormTarget, Input, Link, Notification, Screen, Table};
use html_escaper::Escape;
use std::fmt::Write;

const DELIMITER: &str = " | ";

pub fn render(screen: &Screen) -> String {
    let mut out = String::new();

    out.push_str("<div class=\"navigation\">");
    out.push_str(&links(&screen.navigation));
    out.push_str("</div>\n");

    out.push_str("<div class=\"tablecontrols\">");
    out.push_str(&links(&screen.pagination));
    out.push_str("</div>\n");

    out.push_str("<table class=\"resulttable\">");
    if let Some(table) = &screen.table {
        table_html(&mut out, table);
    }
    out.push_str("</table>\n");

    out.push_str("<div class=\"form\">");
    if let Some(form) = &screen.form {
        form_html(&mut out, form);
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"notification\">");
    match &screen.notification {
        Some(Notification::Error(text)) => {
            let _ = write!(out, "<p class=\"error\">{}</p>", Escape(text));
        }
        Some(Notification::Message(text)) => {
            let _ = write!(out, "<p class=\"msg\">{}</p>", Escape(text));
        }
        None => {}
    }
    out.push_str("</div>\n");

    out
}

fn anchor(link: &Link) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        Escape(&link.navigation.href),
        Escape(&link.label)
    )
}

fn links(links: &[Link]) -> String {
    links.iter().map(anchor).collect::<Vec<_>>().join(DELIMITER)
}

fn table_html(out: &mut String, table: &Table) {
    let _ = write!(out, "<caption>{}</caption><thead><tr>", Escape(&table.title));
    for column in &table.columns {
        let _ = write!(out, "<th>{}</th>", Escape(column));
    }
    if table.linked {
        out.push_str("<th>Link</th>");
    }
    out.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in &row.cells {
            let _ = write!(out, "<td>{}</td>", Escape(cell));
        }
        if table.linked {
            let link = row.link.as_ref().map(anchor).unwrap_or_default();
            let _ = write!(out, "<td>{link}</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody>");
}

fn form_html(out: &mut String, form: &Form) {
    match &form.target {
        Some(FormTarget::Write { href, method, .. }) => {
            let _ = write!(
                out,
                "<form action=\"{}\" method=\"{}\">",
                Escape(href),
                method
            );
        }
        Some(FormTarget::Search { href, .. }) => {
            let _ = write!(out, "<form url=\"{}\">", Escape(href));
        }
        None => out.push_str("<form>"),
    }

    let _ = write!(out, "<h1>{}</h1>", Escape(&form.title));
    for line in &form.lines {
        let _ = write!(out, "<p>{}</p>", Escape(line));
    }

    for field in &form.fields {
        if !field.hidden {
            let _ = write!(out, "<label>{}</label>", Escape(&field.label));
        }
        let mut attributes = format!("name=\"{}\"", Escape(&field.name));
        if field.required {
            attributes.push_str(" required");
        }
        if field.locked {
            attributes.push_str(" disabled");
        }
        if field.hidden {
            attributes.push_str(" hidden");
        }
        let value = Escape(&field.value);
        let _ = match field.input {
            Input::TextArea => write!(
                out,
                "<textarea {attributes} rows=\"4\" cols=\"50\">{value}</textarea>"
            ),
            Input::Checkbox => {
                let checked = matches!(
                    field.value.trim().to_ascii_lowercase().as_str(),
                    "true" | "on" | "1" | "yes"
                );
                write!(
                    out,
                    "<input type=\"checkbox\" {attributes}{}>",
                    if checked { " checked" } else { "" }
                )
            }
            Input::Number => write!(out, "<input type=\"number\" {attributes} value=\"{value}\">"),
            Input::Text => write!(out, "<input type=\"text\" {attributes} value=\"{value}\">"),
        };
    }

    for link in &form.links {
        let _ = write!(out, "<br>{}", anchor(link));
    }
    if form.target.is_some() {
        let _ = write!(
            out,
            "<input type=\"submit\" name=\"submit\" value=\"{}\">",
            form.submit_label()
        );
    }
    out.push_str("</form>");
}
