//! Agent tool generation.
//!
//! Turns every method of a schema's command file into a tool descriptor for
//! an agent runtime, collected into one TypeScript module.
//!
//! # Pipeline
//!
//! ```text
//! SchemaFile ─► AgentToolsGenerator (walker)
//!                 └─ per method: classify ─► map fields ─► derive names ─► render body
//!                                 └─► ToolDescriptor | SkipReason
//!               ─► agent_tools/module template ─► agent_tools.ts
//! ```
//!
//! # Generated Code Example
//!
//! ```typescript
//! export const olvidAgentTools = [
//!     /*
//!     ** IdentityCommandService
//!     */
//!     {
//!         name: "identitySetPhoto",
//!         label: "IdentitySetPhoto",
//!         description: "rpc service: IdentityCommandService, method: IdentitySetPhoto",
//!         parameters: Type.Object({ accountId: Type.String(), filePath: Type.String() }),
//!         async execute(_id: string, params: unknown) {
//!             const client = getOlvidClient((params as { accountId: string }).accountId);
//!             try {
//!                 // @ts-ignore
//!                 const filePath = params.filePath;
//!                 const ret = await client.identitySetPhoto(filePath);
//!                 ...
//!                 return result;
//!             } finally {
//!                 client.stop();
//!             }
//!         },
//!     },
//! ];
//! ```

pub mod assembler;
pub mod body;
pub mod classifier;
pub mod generator;
pub mod naming;
pub mod typebox;
pub mod types;

pub use assembler::{assemble, parameter_schema};
pub use body::BodyRenderer;
pub use classifier::{BodyShape, Classification, classify};
pub use generator::AgentToolsGenerator;
pub use naming::{MethodNames, derive_names};
pub use typebox::{TypeExpr, map_field};
pub use types::{
    Assembled, GeneratedUnit, GenerationReport, MethodReport, Parameter, SkipReason,
    ToolDescriptor,
};
