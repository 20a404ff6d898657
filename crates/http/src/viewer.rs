//! Server-rendered pages: embedded minijinja templates for the catalog page
//! and the invocation console.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use minijinja::Environment;
use serde::Serialize;

const LAYOUT_HTML: &str = include_str!("templates/layout.html");
const PAGE_HTML: &str = include_str!("templates/page.html");
const INVOKE_HTML: &str = include_str!("templates/invoke.html");

pub const PAGE_TEMPLATE: &str = "page.html";
pub const INVOKE_TEMPLATE: &str = "invoke.html";

/// Template set shared by all handlers. HTML auto-escaping is on for `.html` names.
pub struct Viewer {
    env: Environment<'static>,
}

impl Viewer {
    /// Compiles the embedded templates.
    ///
    /// # Errors
    /// Returns an error if a template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("layout.html", LAYOUT_HTML)?;
        env.add_template(PAGE_TEMPLATE, PAGE_HTML)?;
        env.add_template(INVOKE_TEMPLATE, INVOKE_HTML)?;
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

/// Wraps rendered markup in an HTML response.
pub fn html_response(body: String) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(body))
        .into_response()
}
