use crate::cli::{output, Format};
use crate::config::LookupConfig;
use crate::doh::DohJsonClient;
use crate::render::{render_human, DecodeReport};
use anyhow::Result;
use clap::Parser;
use ech_config::{decode_ech_config, SvcParams};
use serde::Serialize;

#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Domain whose HTTPS record to fetch
    pub domain: String,
    /// JSON DoH endpoint (env: ECH_INSPECT_DOH_URL)
    #[arg(long = "doh-url")]
    pub doh_url: Option<String>,
    /// Request timeout in milliseconds (env: ECH_INSPECT_DOH_TIMEOUT_MS)
    #[arg(long = "timeout-ms")]
    pub timeout_ms: Option<u64>,
    /// Output format
    #[arg(long = "format", value_enum, default_value_t = Format::Human)]
    pub format: Format,
}

#[derive(Debug, Serialize)]
struct LookupReport {
    domain: String,
    record_name: String,
    ttl: u32,
    data: String,
    params: SvcParams,
    ech: Option<DecodeReport>,
}

fn render_lookup(report: &LookupReport, decoded: Option<String>) -> String {
    let mut out = format!(
        "HTTPS record for {} ({}, TTL {}):\n  {}\n",
        report.domain, report.record_name, report.ttl, report.data
    );
    match decoded {
        Some(text) => {
            out.push('\n');
            out.push_str(&text);
        }
        None => out.push_str("\nNo ech parameter in this record."),
    }
    out
}

/// Returns false only when an `ech` parameter exists and fails to decode.
pub async fn run(args: LookupArgs) -> Result<bool> {
    let config = LookupConfig::from_env().with_overrides(args.doh_url.clone(), args.timeout_ms);
    let client = DohJsonClient::new(&config)?;

    let response = client.query_https(&args.domain).await?;
    let answer = response.https_answer()?;
    let params = SvcParams::parse(&answer.data);
    let result = params.ech().map(decode_ech_config);
    if result.is_none() {
        tracing::info!(domain = %args.domain, "HTTPS record carries no ech parameter");
    }

    let report = LookupReport {
        domain: args.domain.clone(),
        record_name: answer.name.clone(),
        ttl: answer.ttl,
        data: answer.data.clone(),
        params,
        ech: result.as_ref().map(DecodeReport::from),
    };
    output::emit(
        args.format,
        || render_lookup(&report, result.as_ref().map(render_human)),
        &report,
    )?;
    Ok(match &result {
        Some(decoded) => decoded.is_success(),
        None => true,
    })
}
