//! Beacon Core - assistant profiles and invocation contracts
//!
//! This crate holds the pure, I/O-free half of the beacon pipeline:
//! - Per-assistant profiles: request/response shapes, instruction sets,
//!   payload adaptation, prompt synthesis, and fallback values
//! - Payload field resolution rules for uncontrolled inbound shapes
//! - Process configuration (file + environment overrides)
//!
//! # Architecture
//!
//! Every assistant is an instance of one pipeline shape:
//! 1. **Adapt** (`profiles::Profile::adapt`) - map an arbitrary JSON
//!    payload onto the canonical request, substituting defaults
//! 2. **Synthesize** (`profiles::Profile::synthesize`) - render the
//!    request into a deterministic labeled prompt
//! 3. **Invoke** (beacon-agent) - hand instructions + prompt + response
//!    schema to the external agent collaborator
//! 4. **Envelope** - wrap the validated result, or the profile's static
//!    fallback, as `{ "result": ... }`
//!
//! # Key Types
//!
//! - `profiles::Profile` - the per-assistant configuration record
//! - `profiles::AssistantKind` - slug-addressable registry of assistants
//! - `config::AppConfig` - process configuration
//!
//! # Design Principle
//!
//! Adaptation and synthesis are total functions. A request is never
//! rejected for missing fields, only degraded; failure can originate
//! only at the agent boundary, and is absorbed there.

pub mod config;
pub mod fields;
pub mod profiles;
