//! Tool and client-call names.

use crate::common::typescript::{lower_first, underscore_uppercase, upper_first, uppercase_capitals};
use agent_tools_introspector::{MethodDescriptor, ServiceDescriptor};
use serde::Serialize;

/// Services whose calls are exposed as `admin<Method>` on the client.
const ADMIN_SERVICE_SUFFIX: &str = "AdminService";

/// Names derived from a service and one of its methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodNames {
    /// Client method invoked by the tool, also the tool name
    pub call_name: String,
    /// snake_case form of the method name
    pub internal_name: String,
    /// Display label
    pub label: String,
}

/// Derives the call name, internal name and label of a method.
///
/// # Examples
///
/// ```
/// use agent_tools_codegen::agent_tools::naming::derive_names;
/// use agent_tools_introspector::{CallKind, MethodDescriptor, ServiceDescriptor};
///
/// let method = MethodDescriptor {
///     name: "GroupSetPhoto".to_string(),
///     call_kind: CallKind::Unary,
///     input_fields: vec![],
///     output_fields: vec![],
/// };
/// let service = ServiceDescriptor {
///     name: "GroupCommandService".to_string(),
///     methods: vec![method.clone()],
/// };
///
/// let names = derive_names(&service, &method);
/// assert_eq!(names.call_name, "groupSetPhoto");
/// assert_eq!(names.internal_name, "_group_set_photo");
/// assert_eq!(names.label, "GroupSetPhoto");
/// ```
#[must_use]
pub fn derive_names(service: &ServiceDescriptor, method: &MethodDescriptor) -> MethodNames {
    let call_name = if service.name.ends_with(ADMIN_SERVICE_SUFFIX) {
        format!("admin{}", method.name)
    } else {
        lower_first(&method.name)
    };

    MethodNames {
        call_name,
        internal_name: underscore_uppercase(&method.name),
        label: upper_first(&uppercase_capitals(&method.name)),
    }
}
