//! Template engine for code generation using Handlebars.
//!
//! Wraps Handlebars with the agent tool templates pre-registered:
//!
//! - `agent_tools/module`: preamble, client factory and the tool array
//! - `agent_tools/tool`: one tool descriptor object literal
//! - `agent_tools/execute`: the `execute` body of a tool
//!
//! Output is TypeScript, so HTML escaping is disabled.
//!
//! # Examples
//!
//! ```
//! use agent_tools_codegen::template_engine::TemplateEngine;
//!
//! let engine = TemplateEngine::new().unwrap();
//! assert!(engine.has_template("agent_tools/tool"));
//! ```

use agent_tools_core::{Error, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Built-in templates, by registration name.
const TEMPLATES: [(&str, &str); 3] = [
    (
        "agent_tools/module",
        include_str!("../templates/agent_tools/module.ts.hbs"),
    ),
    (
        "agent_tools/tool",
        include_str!("../templates/agent_tools/tool.ts.hbs"),
    ),
    (
        "agent_tools/execute",
        include_str!("../templates/agent_tools/execute.ts.hbs"),
    ),
];

/// Template engine for code generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'reg> {
    handlebars: Handlebars<'reg>,
}

impl TemplateEngine<'_> {
    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if a built-in template fails to
    /// parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        let mut engine = Self { handlebars };
        for (name, template) in TEMPLATES {
            engine.register_template_string(name, template)?;
        }

        Ok(engine)
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A variable the template uses is missing from the context
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_tools_codegen::template_engine::TemplateEngine;
    /// use serde_json::json;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine.register_template_string("greeting", "Type.{{kind}}()").unwrap();
    ///
    /// let text = engine.render("greeting", &json!({"kind": "String"})).unwrap();
    /// assert_eq!(text, "Type.String()");
    /// ```
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to render '{template_name}': {e}"),
            })
    }

    /// Registers a custom template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register template '{name}': {e}"),
            })
    }

    /// Checks whether a template is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_templates_registered() {
        let engine = TemplateEngine::new().unwrap();
        for (name, _) in TEMPLATES {
            assert!(engine.has_template(name), "{name} not registered");
        }
        assert!(!engine.has_template("agent_tools/missing"));
    }

    #[test]
    fn test_render_tool_template() {
        let engine = TemplateEngine::new().unwrap();

        let context = json!({
            "name": "messageSend",
            "label": "MessageSend",
            "description": "rpc service: MessageCommandService, method: MessageSend",
            "parameters": [
                {"name": "accountId", "type_expr": "Type.String()"},
                {"name": "body", "type_expr": "Type.String()"}
            ],
            "body": "            return {};"
        });

        let rendered = engine.render("agent_tools/tool", &context).unwrap();
        assert!(rendered.contains("name: \"messageSend\","));
        assert!(rendered.contains("label: \"MessageSend\","));
        assert!(rendered.contains(
            "parameters: Type.Object({ accountId: Type.String(), body: Type.String() }),"
        ));
        assert!(rendered.contains("            return {};"));
    }

    #[test]
    fn test_no_html_escaping() {
        let engine = TemplateEngine::new().unwrap();

        let context = json!({
            "name": "a",
            "label": "a",
            "description": "a",
            "parameters": [{"name": "tags", "type_expr": "Type.Optional(Type.Array(Type.String()))"}],
            "body": "if (a < b && c > d) {}"
        });

        let rendered = engine.render("agent_tools/tool", &context).unwrap();
        assert!(rendered.contains("if (a < b && c > d) {}"));
        assert!(!rendered.contains("&lt;"));
    }

    #[test]
    fn test_strict_mode_missing_variable() {
        let engine = TemplateEngine::new().unwrap();

        let result = engine.render("agent_tools/tool", &json!({"name": "incomplete"}));
        let err = result.unwrap_err();
        assert!(err.is_template_error());
        assert!(err.to_string().contains("agent_tools/tool"));
    }

    #[test]
    fn test_unknown_template() {
        let engine = TemplateEngine::new().unwrap();
        assert!(engine.render("nope", &json!({})).is_err());
    }

    #[test]
    fn test_register_invalid_template() {
        let mut engine = TemplateEngine::new().unwrap();
        let err = engine
            .register_template_string("broken", "{{#each items}}")
            .unwrap_err();
        assert!(err.is_template_error());
    }
}
