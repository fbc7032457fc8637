//! Tool `execute` body rendering.
//!
//! Every body obtains a client for the caller's account, binds each input
//! field from `params`, calls the client method with those fields in
//! declaration order and packages the result as text content. The client is
//! released in a `finally` block on every exit path.

use crate::agent_tools::classifier::BodyShape;
use crate::agent_tools::naming::MethodNames;
use crate::agent_tools::types::ExecuteContext;
use crate::template_engine::TemplateEngine;
use agent_tools_core::{InvocationContext, Result};
use agent_tools_introspector::MethodDescriptor;

/// Renders `execute` bodies.
#[derive(Debug)]
pub struct BodyRenderer<'e, 'reg> {
    engine: &'e TemplateEngine<'reg>,
    invocation: &'e InvocationContext,
}

impl<'e, 'reg> BodyRenderer<'e, 'reg> {
    /// Creates a renderer bound to a template engine and the invocation
    /// collaborators.
    #[must_use]
    pub const fn new(engine: &'e TemplateEngine<'reg>, invocation: &'e InvocationContext) -> Self {
        Self { engine, invocation }
    }

    /// Renders the body of a method.
    ///
    /// Returns `Ok(None)` for shapes without a body.
    ///
    /// # Errors
    ///
    /// Returns a template error if rendering fails.
    pub fn render(
        &self,
        method: &MethodDescriptor,
        names: &MethodNames,
        shape: BodyShape,
    ) -> Result<Option<String>> {
        let is_stream_list = match shape {
            BodyShape::Unary => false,
            BodyShape::StreamList => true,
            BodyShape::NotYetSupported => return Ok(None),
        };

        let context = ExecuteContext {
            method_name: method.name.clone(),
            call_name: names.call_name.clone(),
            arguments: method
                .input_fields
                .iter()
                .map(|f| f.local_name.clone())
                .collect(),
            is_stream_list,
            client_factory: self.invocation.client_factory.clone(),
            client_close_method: self.invocation.client_close_method.clone(),
        };

        let body = self.engine.render("agent_tools/execute", &context)?;
        Ok(Some(body.trim_end().to_string()))
    }
}
