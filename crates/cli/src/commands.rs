use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use serde_json::Value;

use beacon_agent::openai::OpenAiBackend;
use beacon_agent::runtime::AssistantRuntime;
use beacon_core::config::{AppConfig, LlmProvider, LoadOptions, LogFormat};
use beacon_core::profiles::AssistantKind;

pub fn assistants() -> Result<String> {
    let lines: Vec<String> = AssistantKind::ALL
        .iter()
        .map(|kind| format!("{:<24} {}", kind.slug(), kind.name()))
        .collect();
    Ok(lines.join("\n"))
}

pub fn invoke(
    assistant: &str,
    payload: Option<&str>,
    payload_file: Option<&Path>,
    sample: bool,
) -> Result<String> {
    let kind = AssistantKind::from_slug(assistant)
        .ok_or_else(|| anyhow!("unknown assistant `{assistant}` (see `beacon assistants`)"))?;
    let payload = resolve_payload(kind, payload, payload_file, sample)?;

    let config = AppConfig::load(LoadOptions::default())?;
    let backend = Arc::new(OpenAiBackend::new(&config.llm)?);
    let runtime = AssistantRuntime::new(backend);

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let envelope = tokio_runtime.block_on(runtime.handle(kind, &payload));

    serde_json::to_string_pretty(&envelope).context("failed to render envelope")
}

pub fn config() -> Result<String> {
    let config = AppConfig::load(LoadOptions::default())?;

    let api_key = if config.llm.api_key.is_some() { "<redacted>" } else { "<unset>" };
    let base_url = config.llm.base_url.as_deref().unwrap_or("<unset>");

    Ok([
        format!("llm.provider = {}", provider_label(config.llm.provider)),
        format!("llm.model = {}", config.llm.model),
        format!("llm.api_key = {api_key}"),
        format!("llm.base_url = {base_url}"),
        format!("llm.timeout_secs = {}", config.llm.timeout_secs),
        format!("server.bind_address = {}", config.server.bind_address),
        format!("server.port = {}", config.server.port),
        format!("server.graceful_shutdown_secs = {}", config.server.graceful_shutdown_secs),
        format!("logging.level = {}", config.logging.level),
        format!("logging.format = {}", format_label(config.logging.format)),
    ]
    .join("\n"))
}

/// Payload precedence: built-in sample, inline JSON, payload file, then
/// the null payload (which every adapter degrades to defaults).
fn resolve_payload(
    kind: AssistantKind,
    inline: Option<&str>,
    file: Option<&Path>,
    sample: bool,
) -> Result<Value> {
    if sample {
        return Ok(kind.sample_payload());
    }
    if let Some(raw) = inline {
        return serde_json::from_str(raw).context("--payload is not valid JSON");
    }
    if let Some(path) = file {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("could not read payload file `{}`", path.display()))?;
        return serde_json::from_str(&raw)
            .with_context(|| format!("payload file `{}` is not valid JSON", path.display()));
    }
    Ok(Value::Null)
}

fn provider_label(provider: LlmProvider) -> &'static str {
    match provider {
        LlmProvider::OpenAi => "openai",
        LlmProvider::Compatible => "compatible",
    }
}

fn format_label(format: LogFormat) -> &'static str {
    match format {
        LogFormat::Compact => "compact",
        LogFormat::Pretty => "pretty",
        LogFormat::Json => "json",
    }
}
