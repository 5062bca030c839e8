//! Server-rendered HTML views.
//!
//! Every piece of dynamic text goes through [`escape`] before it is written
//! into markup.

use std::fmt::Write as _;

use crate::application::{Answer, QueryFailure};
use crate::domain::ResultSet;

/// Sidebar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    About,
    Query,
}

impl View {
    const ALL: [View; 3] = [View::Home, View::About, View::Query];

    const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Query => "/query",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Query => "Intelligent Query Assistance",
        }
    }
}

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #fff;
  background: linear-gradient(135deg, #1f1f1f, #2c3e50); min-height: 100vh; display: flex; }
nav { width: 15rem; padding: 1.5rem; background: #151a1e; }
nav h2 { margin-top: 0; }
nav a { display: block; padding: .5rem .75rem; border-radius: .5rem; color: #bbdefb; text-decoration: none; }
nav a.active { background: #263238; color: #00e676; font-weight: bold; }
main { flex: 1; padding: 2rem 3rem; }
.main-title { text-align: center; color: #00e676; font-size: 2.7em; }
.sub-title { text-align: center; color: #bbdefb; font-size: 1.3em; margin-bottom: 30px; }
.box { background: #263238; padding: 25px; border-radius: 15px; }
h1.accent, .box h2 { color: #00e676; }
form { display: flex; gap: .5rem; margin: 1rem 0; }
input[type=text] { flex: 1; padding: .6rem; border-radius: .4rem; border: 1px solid #455a64; background: #11171a; color: #fff; }
button { padding: .6rem 1.2rem; border: 0; border-radius: .4rem; background: #00e676; color: #111; font-weight: bold; cursor: pointer; }
pre { background: #11171a; padding: 1rem; border-radius: .5rem; overflow-x: auto; }
table { border-collapse: collapse; margin-top: .5rem; }
th, td { border: 1px solid #455a64; padding: .4rem .8rem; text-align: left; }
th { background: #263238; }
.error { background: #5c1f24; border-left: 4px solid #ff5252; padding: 1rem; border-radius: .4rem; }
.success { background: #1b3d2a; padding: .8rem; border-radius: .4rem; }
.muted { color: #90a4ae; }
"#;

/// Escape text for use in element content and quoted attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(active: View, body: &str) -> String {
    let mut nav = String::new();
    for view in View::ALL {
        let class = if view == active { " class=\"active\"" } else { "" };
        let _ = write!(nav, "<a href=\"{}\"{class}>{}</a>", view.path(), view.label());
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>IntelliSQL</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav><h2>Navigation</h2>{nav}</nav>\n<main>\n{body}\n</main>\n</body>\n</html>\n"
    )
}

/// Landing page.
#[must_use]
pub fn home(model: &str) -> String {
    let model = escape(model);
    let body = format!(
        "<h1 class=\"main-title\">Welcome to IntelliSQL</h1>\
         <h2 class=\"sub-title\">Transform Natural Language into Powerful SQLite Queries using {model}</h2>\
         <div class=\"box\"><h2>Key Features</h2><ul>\
         <li>Natural Language to SQL Conversion</li>\
         <li>Powered by {model}</li>\
         <li>SQLite Database Integration</li>\
         <li>Real-time Query Execution</li>\
         <li>Structured SQL Output</li>\
         <li>Beginner Friendly Interface</li>\
         </ul></div><hr>\
         <p class=\"success\">Powered by {model} | SQLite Integrated</p>"
    );
    layout(View::Home, &body)
}

/// Project overview page.
#[must_use]
pub fn about(model: &str) -> String {
    let model = escape(model);
    let body = format!(
        "<h1 class=\"accent\">About IntelliSQL</h1><div class=\"box\">\
         <h3>Project Overview</h3>\
         <p>IntelliSQL converts natural language into executable SQLite queries using {model}.</p>\
         <h3>Technologies Used</h3><ul><li>Rust</li><li>actix-web</li><li>SQLite</li><li>{model}</li></ul>\
         <h3>Objective</h3><p>To simplify SQL querying for non-technical users.</p>\
         </div>"
    );
    layout(View::About, &body)
}

fn query_page(question: &str, outcome: &str) -> String {
    let body = format!(
        "<h1 class=\"accent\">Intelligent Query Assistance</h1>\
         <p>Enter your question in English. The system will generate and execute SQLite query.</p>\
         <form method=\"post\" action=\"/query\">\
         <input type=\"text\" name=\"question\" placeholder=\"Enter Your Query:\" value=\"{}\" autofocus>\
         <button type=\"submit\">Get Answer</button></form>{outcome}",
        escape(question)
    );
    layout(View::Query, &body)
}

/// Query view with no result yet.
#[must_use]
pub fn query_form(question: &str) -> String {
    query_page(question, "")
}

/// Query view showing the generated SQL and its rows.
#[must_use]
pub fn query_answer(question: &str, answer: &Answer) -> String {
    let outcome = format!(
        "{}<h3>The Response is:</h3>{}<p class=\"muted\">{} row(s) in {} ms</p>",
        sql_block(answer.sql.as_str()),
        table(&answer.result),
        answer.result.row_count(),
        answer.elapsed.as_millis()
    );
    query_page(question, &outcome)
}

/// Query view showing a failure, with the SQL when there was some.
#[must_use]
pub fn query_failure(question: &str, failure: &QueryFailure) -> String {
    let mut outcome = String::new();
    if let Some(sql) = &failure.sql {
        outcome.push_str(&sql_block(sql.as_str()));
    }
    let _ = write!(
        outcome,
        "<div class=\"error\">An error occurred: {}</div>",
        escape(&failure.to_string())
    );
    query_page(question, &outcome)
}

fn sql_block(sql: &str) -> String {
    format!(
        "<h3>Generated SQL Query:</h3><pre><code class=\"language-sql\">{}</code></pre>",
        escape(sql)
    )
}

fn table(result: &ResultSet) -> String {
    let mut html = String::from("<table><thead><tr>");
    for column in &result.columns {
        let _ = write!(html, "<th>{}</th>", escape(column));
    }
    html.push_str("</tr></thead><tbody>");
    for row in &result.rows {
        html.push_str("<tr>");
        for value in row {
            let _ = write!(html, "<td>{}</td>", escape(&value.to_string()));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}
