//! Agent tools module generator.
//!
//! Walks the command file of a schema and renders one TypeScript module
//! exporting every tool. Output is deterministic: services and methods are
//! visited in declaration order, nothing depends on time or hashing.
//!
//! # Examples
//!
//! ```
//! use agent_tools_codegen::agent_tools::AgentToolsGenerator;
//! use agent_tools_core::GeneratorConfig;
//! use agent_tools_introspector::{
//!     CallKind, FieldDescriptor, MethodDescriptor, ScalarType, SchemaFile, ServiceDescriptor,
//! };
//!
//! let schema = vec![SchemaFile {
//!     path: "olvid/daemon/services/v1/command_service.proto".to_string(),
//!     services: vec![ServiceDescriptor {
//!         name: "IdentityCommandService".to_string(),
//!         methods: vec![MethodDescriptor {
//!             name: "IdentitySetPhoto".to_string(),
//!             call_kind: CallKind::Unary,
//!             input_fields: vec![FieldDescriptor::scalar("filePath", ScalarType::String)],
//!             output_fields: vec![],
//!         }],
//!     }],
//! }];
//!
//! let generator = AgentToolsGenerator::new(GeneratorConfig::default()).unwrap();
//! let unit = generator.generate(&schema).unwrap().unwrap();
//!
//! assert_eq!(unit.file.path, "agent_tools.ts");
//! assert!(unit.file.content.contains("name: \"identitySetPhoto\""));
//! ```

use crate::agent_tools::assembler::assemble;
use crate::agent_tools::body::BodyRenderer;
use crate::agent_tools::classifier::classify;
use crate::agent_tools::naming::derive_names;
use crate::agent_tools::types::{
    Assembled, GeneratedUnit, GenerationReport, MethodReport, ModuleContext, ServiceSection,
    ToolContext,
};
use crate::common::types::GeneratedFile;
use crate::template_engine::TemplateEngine;
use agent_tools_core::{Error, GeneratorConfig, Result};
use agent_tools_introspector::SchemaFile;
use tracing::{debug, info, warn};

/// Generator for the agent tools TypeScript module.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`; one generator can serve any number of
/// runs.
#[derive(Debug)]
pub struct AgentToolsGenerator<'reg> {
    engine: TemplateEngine<'reg>,
    config: GeneratorConfig,
}

impl AgentToolsGenerator<'_> {
    /// Creates a generator.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation, or a
    /// template error if template registration fails.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let engine = TemplateEngine::new()?;
        Ok(Self { engine, config })
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the tools module for a schema.
    ///
    /// Returns `Ok(None)` when no file path contains the services marker.
    /// Methods that cannot become tools are left out and listed in the
    /// report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AmbiguousCommandFile`] if several files match the
    /// command file pattern and none is designated, [`Error::ConfigError`]
    /// if the designated file is not in the schema, or a template error.
    pub fn generate(&self, files: &[SchemaFile]) -> Result<Option<GeneratedUnit>> {
        if !files
            .iter()
            .any(|f| f.path.contains(&self.config.services_marker))
        {
            info!(
                "No file path contains '{}', nothing to generate",
                self.config.services_marker
            );
            return Ok(None);
        }

        let command_file = self.select_command_file(files)?;
        let renderer = BodyRenderer::new(&self.engine, &self.config.invocation);

        let mut report = GenerationReport {
            command_file: command_file.map(|f| f.path.clone()),
            methods: Vec::new(),
        };
        let mut sections = Vec::new();

        for service in command_file.iter().flat_map(|f| &f.services) {
            let mut section = ServiceSection {
                service_name: service.name.clone(),
                tools: Vec::new(),
            };

            for method in &service.methods {
                let skipped = match assemble(&renderer, service, method)? {
                    Assembled::Tool(tool) => {
                        section
                            .tools
                            .push(self.engine.render("agent_tools/tool", &ToolContext::from(&tool))?);
                        debug!("Generated tool: {}", tool.name);
                        None
                    }
                    Assembled::Skipped(reason) => {
                        warn!("Ignored unsupported method: {} ({reason})", method.name);
                        Some(reason)
                    }
                };

                report.methods.push(MethodReport {
                    service: service.name.clone(),
                    method: method.name.clone(),
                    classification: classify(method),
                    names: derive_names(service, method),
                    skipped,
                });
            }

            sections.push(section);
        }

        let context = ModuleContext {
            file_header: self.config.file_header.clone(),
            invocation: self.config.invocation.clone(),
            sections,
        };
        let content = self.engine.render("agent_tools/module", &context)?;

        info!(
            "Generated {} tools ({} methods skipped) into {}",
            report.tool_count(),
            report.skipped_count(),
            self.config.output_file
        );

        Ok(Some(GeneratedUnit {
            file: GeneratedFile {
                path: self.config.output_file.clone(),
                content,
            },
            report,
        }))
    }

    /// Picks the command file.
    ///
    /// A designated file wins; otherwise at most one file may match the
    /// pattern. No match yields `None`.
    fn select_command_file<'s>(&self, files: &'s [SchemaFile]) -> Result<Option<&'s SchemaFile>> {
        if let Some(designated) = &self.config.command_file {
            return files
                .iter()
                .find(|f| &f.path == designated)
                .map(Some)
                .ok_or_else(|| Error::ConfigError {
                    message: format!("command file '{designated}' is not among the input files"),
                });
        }

        let pattern = &self.config.command_file_pattern;
        let matches: Vec<&SchemaFile> = files.iter().filter(|f| f.path.contains(pattern)).collect();

        match matches.as_slice() {
            [] => {
                warn!("No file matches '{pattern}', generating an empty tool list");
                Ok(None)
            }
            [file] => {
                debug!("Selected command file: {}", file.path);
                Ok(Some(*file))
            }
            _ => Err(Error::AmbiguousCommandFile {
                pattern: pattern.clone(),
                candidates: matches.iter().map(|f| f.path.clone()).collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_tools_introspector::{
        CallKind, FieldDescriptor, MethodDescriptor, ScalarType, ServiceDescriptor, TypeRef,
    };

    const COMMAND_FILE: &str = "olvid/daemon/services/v1/command_service.proto";

    fn unary(name: &str, input_fields: Vec<FieldDescriptor>) -> MethodDescriptor {
        MethodDescriptor {
            name: name.to_string(),
            call_kind: CallKind::Unary,
            input_fields,
            output_fields: vec![],
        }
    }

    fn file(path: &str, services: Vec<ServiceDescriptor>) -> SchemaFile {
        SchemaFile {
            path: path.to_string(),
            services,
        }
    }

    fn service(name: &str, methods: Vec<MethodDescriptor>) -> ServiceDescriptor {
        ServiceDescriptor {
            name: name.to_string(),
            methods,
        }
    }

    fn generator() -> AgentToolsGenerator<'static> {
        AgentToolsGenerator::new(GeneratorConfig::default()).unwrap()
    }

    #[test]
    fn test_no_service_files_no_output() {
        let schema = vec![file(
            "olvid/daemon/datatypes/v1/message.proto",
            vec![service("Unrelated", vec![unary("Ping", vec![])])],
        )];
        assert_eq!(generator().generate(&schema).unwrap(), None);
        assert_eq!(generator().generate(&[]).unwrap(), None);
    }

    #[test]
    fn test_service_file_without_command_file() {
        let schema = vec![file("olvid/daemon/services/v1/notification_service.proto", vec![])];

        let unit = generator().generate(&schema).unwrap().unwrap();
        assert_eq!(unit.report.command_file, None);
        assert_eq!(unit.report.tool_count(), 0);
        assert!(unit.file.content.contains("export const olvidAgentTools = ["));
        assert!(unit.file.content.trim_end().ends_with("];"));
    }

    #[test]
    fn test_ambiguous_command_files() {
        let schema = vec![
            file(COMMAND_FILE, vec![]),
            file("olvid/daemon/services/v1/command_admin_service.proto", vec![]),
        ];

        let err = generator().generate(&schema).unwrap_err();
        assert!(err.is_ambiguous_command_file());
        assert!(err.to_string().contains("command_admin_service.proto"));
    }

    #[test]
    fn test_designated_command_file_resolves_ambiguity() {
        let admin = "olvid/daemon/services/v1/command_admin_service.proto";
        let schema = vec![
            file(COMMAND_FILE, vec![service("IdentityCommandService", vec![unary("IdentityGet", vec![])])]),
            file(admin, vec![service("IdentityAdminService", vec![unary("IdentityList", vec![])])]),
        ];

        let config = GeneratorConfig {
            command_file: Some(admin.to_string()),
            ..GeneratorConfig::default()
        };
        let unit = AgentToolsGenerator::new(config)
            .unwrap()
            .generate(&schema)
            .unwrap()
            .unwrap();

        assert_eq!(unit.report.command_file.as_deref(), Some(admin));
        assert_eq!(unit.report.emitted().collect::<Vec<_>>(), vec!["adminIdentityList"]);
    }

    #[test]
    fn test_designated_command_file_missing() {
        let config = GeneratorConfig {
            command_file: Some("olvid/daemon/services/v1/missing.proto".to_string()),
            ..GeneratorConfig::default()
        };
        let schema = vec![file(COMMAND_FILE, vec![])];

        let err = AgentToolsGenerator::new(config)
            .unwrap()
            .generate(&schema)
            .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeneratorConfig {
            services_marker: String::new(),
            ..GeneratorConfig::default()
        };
        assert!(AgentToolsGenerator::new(config).is_err());
    }

    #[test]
    fn test_skip_keeps_other_methods() {
        let schema = vec![file(
            COMMAND_FILE,
            vec![service(
                "MessageCommandService",
                vec![
                    unary("MessageSend", vec![FieldDescriptor::scalar("body", ScalarType::String)]),
                    unary(
                        "MessageReact",
                        vec![FieldDescriptor::message(
                            "messageId",
                            TypeRef::new("MessageId", "olvid/daemon/datatypes/v1/message.proto"),
                        )],
                    ),
                ],
            )],
        )];

        let unit = generator().generate(&schema).unwrap().unwrap();
        assert_eq!(unit.report.emitted().collect::<Vec<_>>(), vec!["messageSend"]);

        let skipped: Vec<_> = unit.report.skipped().map(|m| m.method.as_str()).collect();
        assert_eq!(skipped, vec!["MessageReact"]);
        assert!(!unit.file.content.contains("messageReact"));
    }

    #[test]
    fn test_sections_follow_declaration_order() {
        let schema = vec![file(
            COMMAND_FILE,
            vec![
                service("IdentityCommandService", vec![unary("IdentityGet", vec![])]),
                service(
                    "DiscussionCommandService",
                    vec![unary("DiscussionGet", vec![]), unary("DiscussionEmpty", vec![])],
                ),
            ],
        )];

        let content = generator().generate(&schema).unwrap().unwrap().file.content;

        let positions: Vec<usize> = [
            "** IdentityCommandService",
            "name: \"identityGet\"",
            "** DiscussionCommandService",
            "name: \"discussionGet\"",
            "name: \"discussionEmpty\"",
        ]
        .iter()
        .map(|needle| content.find(needle).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_output_file_from_config() {
        let config = GeneratorConfig {
            output_file: "gen/tools.ts".to_string(),
            ..GeneratorConfig::default()
        };
        let schema = vec![file(COMMAND_FILE, vec![])];

        let unit = AgentToolsGenerator::new(config)
            .unwrap()
            .generate(&schema)
            .unwrap()
            .unwrap();
        assert_eq!(unit.file.path(), "gen/tools.ts");
    }
}
