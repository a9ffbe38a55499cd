//! Beacon Agent - the external collaborator boundary and the invocation
//! handler that orchestrates the per-assistant pipeline.
//!
//! # Architecture
//!
//! - `backend` - the `AgentBackend` trait: one awaited call carrying
//!   instructions, prompt, web-search capability flag, and the target
//!   response schema; the collaborator either returns a conforming value
//!   or fails. No retries, no bound on internal lookups - that policy
//!   belongs to the collaborator.
//! - `openai` - concrete backend speaking the OpenAI-compatible
//!   chat-completions wire format over reqwest, with strict structured
//!   output steering.
//! - `runtime` - `AssistantRuntime::handle`: adapt → synthesize →
//!   invoke → validate → envelope. Total from the caller's perspective;
//!   every failure collapses into the assistant's static fallback.
//!
//! # Safety Principle
//!
//! The runtime never trusts the collaborator's output: a value that does
//! not deserialize exactly into the assistant's response shape is a
//! failure, not a partial result.

pub mod backend;
pub mod openai;
pub mod runtime;
