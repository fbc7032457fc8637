//! Tool descriptor assembly.
//!
//! Turns one method into a [`ToolDescriptor`], or into a [`SkipReason`] when
//! a required input field has no parameter type or the calling convention
//! has no body. Skips are local to the method; only template failures are
//! errors.

use crate::agent_tools::body::BodyRenderer;
use crate::agent_tools::classifier::classify;
use crate::agent_tools::naming::derive_names;
use crate::agent_tools::typebox::{TypeExpr, map_field};
use crate::agent_tools::types::{Assembled, Parameter, SkipReason, ToolDescriptor};
use agent_tools_core::{Error, Result};
use agent_tools_introspector::{MethodDescriptor, ServiceDescriptor};

/// Implicit first parameter of every tool.
pub const ACCOUNT_ID_PARAMETER: &str = "accountId";

/// Builds the parameter schema of a method.
///
/// `accountId` comes first, followed by every input field not explicitly
/// marked optional, in declaration order.
///
/// # Errors
///
/// Returns [`Error::UnsupportedField`] for the first field the mapper
/// rejects.
pub fn parameter_schema(method: &MethodDescriptor) -> Result<Vec<Parameter>> {
    let mut parameters = vec![Parameter::new(ACCOUNT_ID_PARAMETER, TypeExpr::String)];

    for field in method.input_fields.iter().filter(|f| !f.is_optional) {
        parameters.push(Parameter::new(field.local_name.clone(), map_field(field)?));
    }

    Ok(parameters)
}

/// Assembles the tool of one method.
///
/// Classifies the method, maps its parameters, derives its names and
/// renders its body.
///
/// # Errors
///
/// Returns an error only if body rendering fails; unsupported methods are
/// reported as [`Assembled::Skipped`].
pub fn assemble(
    renderer: &BodyRenderer<'_, '_>,
    service: &ServiceDescriptor,
    method: &MethodDescriptor,
) -> Result<Assembled> {
    let classification = classify(method);

    let parameters = match parameter_schema(method) {
        Ok(parameters) => parameters,
        Err(Error::UnsupportedField { field, reason }) => {
            return Ok(Assembled::Skipped(SkipReason::UnsupportedField {
                field,
                reason,
            }));
        }
        Err(e) => return Err(e),
    };

    let names = derive_names(service, method);
    let Some(body) = renderer.render(method, &names, classification.shape())? else {
        return Ok(Assembled::Skipped(SkipReason::NotYetSupported {
            call_kind: classification.call_kind,
        }));
    };

    Ok(Assembled::Tool(ToolDescriptor {
        name: names.call_name,
        label: names.label,
        description: format!("rpc service: {}, method: {}", service.name, method.name),
        parameter_schema: parameters,
        body,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template_engine::TemplateEngine;
    use agent_tools_core::InvocationContext;
    use agent_tools_introspector::{CallKind, FieldDescriptor, ScalarType, TypeRef};

    fn method(name: &str, call_kind: CallKind, input_fields: Vec<FieldDescriptor>) -> MethodDescriptor {
        MethodDescriptor {
            name: name.to_string(),
            call_kind,
            input_fields,
            output_fields: vec![],
        }
    }

    fn assemble_in(service_name: &str, method: &MethodDescriptor) -> Assembled {
        let engine = TemplateEngine::new().unwrap();
        let invocation = InvocationContext::default();
        let renderer = BodyRenderer::new(&engine, &invocation);
        let service = ServiceDescriptor {
            name: service_name.to_string(),
            methods: vec![method.clone()],
        };

        assemble(&renderer, &service, method).unwrap()
    }

    fn expect_tool(assembled: Assembled) -> ToolDescriptor {
        match assembled {
            Assembled::Tool(tool) => tool,
            Assembled::Skipped(reason) => panic!("unexpected skip: {reason}"),
        }
    }

    #[test]
    fn test_identity_set_photo() {
        let method = method(
            "IdentitySetPhoto",
            CallKind::Unary,
            vec![FieldDescriptor::scalar("filePath", ScalarType::String)],
        );

        let tool = expect_tool(assemble_in("IdentityCommandService", &method));
        assert_eq!(tool.name, "identitySetPhoto");
        assert_eq!(tool.label, "IdentitySetPhoto");
        assert_eq!(
            tool.description,
            "rpc service: IdentityCommandService, method: IdentitySetPhoto"
        );
        assert_eq!(
            tool.parameter_schema,
            vec![
                Parameter::new("accountId", TypeExpr::String),
                Parameter::new("filePath", TypeExpr::String),
            ]
        );
        assert!(tool.body.contains("client.identitySetPhoto(filePath)"));
    }

    #[test]
    fn test_account_id_first_without_fields() {
        let method = method("IdentityGet", CallKind::Unary, vec![]);

        let tool = expect_tool(assemble_in("IdentityCommandService", &method));
        assert_eq!(
            tool.parameter_schema,
            vec![Parameter::new("accountId", TypeExpr::String)]
        );
        assert!(!tool.parameter_schema[0].type_expr.is_optional());
    }

    #[test]
    fn test_optional_fields_left_out_of_schema() {
        let method = method(
            "MessageSend",
            CallKind::Unary,
            vec![
                FieldDescriptor::scalar("body", ScalarType::String),
                FieldDescriptor::scalar("replyId", ScalarType::Uint64).optional(),
                FieldDescriptor::scalar("attachments", ScalarType::String).repeated(),
            ],
        );

        let tool = expect_tool(assemble_in("MessageCommandService", &method));
        let names: Vec<_> = tool.parameter_schema.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["accountId", "body", "attachments"]);
        assert_eq!(
            tool.parameter_schema[2].type_expr,
            TypeExpr::optional(TypeExpr::array(TypeExpr::String))
        );
        // still passed to the client
        assert!(tool.body.contains("client.messageSend(body, replyId, attachments)"));
    }

    #[test]
    fn test_optional_message_field_does_not_skip() {
        let method = method(
            "MessageSend",
            CallKind::Unary,
            vec![
                FieldDescriptor::scalar("body", ScalarType::String),
                FieldDescriptor::message(
                    "replyTo",
                    TypeRef::new("MessageId", "olvid/daemon/datatypes/v1/message.proto"),
                )
                .optional(),
            ],
        );

        assert!(matches!(
            assemble_in("MessageCommandService", &method),
            Assembled::Tool(_)
        ));
    }

    #[test]
    fn test_message_field_skips_method() {
        let method = method(
            "MessageReact",
            CallKind::Unary,
            vec![FieldDescriptor::message(
                "messageId",
                TypeRef::new("MessageId", "olvid/daemon/datatypes/v1/message.proto"),
            )],
        );

        match assemble_in("MessageCommandService", &method) {
            Assembled::Skipped(SkipReason::UnsupportedField { field, .. }) => {
                assert_eq!(field, "messageId");
            }
            other => panic!("expected skip, got {other:?}"),
        }
    }

    #[test]
    fn test_streaming_without_body_skips() {
        for call_kind in [
            CallKind::ServerStreaming,
            CallKind::ClientStreaming,
            CallKind::BidiStreaming,
        ] {
            let method = method("MessageWatch", call_kind, vec![]);
            assert_eq!(
                assemble_in("MessageCommandService", &method),
                Assembled::Skipped(SkipReason::NotYetSupported { call_kind })
            );
        }
    }

    #[test]
    fn test_pure_list_stream_is_emitted() {
        let mut list = method("DiscussionList", CallKind::ServerStreaming, vec![]);
        list.output_fields = vec![
            FieldDescriptor::message(
                "discussions",
                TypeRef::new("Discussion", "olvid/daemon/datatypes/v1/discussion.proto"),
            )
            .repeated(),
        ];

        let tool = expect_tool(assemble_in("DiscussionCommandService", &list));
        assert_eq!(tool.name, "discussionList");
        assert!(tool.body.contains("for await"));
    }

    #[test]
    fn test_admin_service_tool_name() {
        let method = method("ClientKeyList", CallKind::Unary, vec![]);
        let tool = expect_tool(assemble_in("ClientKeyAdminService", &method));
        assert_eq!(tool.name, "adminClientKeyList");
        assert!(tool.body.contains("client.adminClientKeyList()"));
    }
}
