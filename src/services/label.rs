//! Label acquisition: a mock strategy and an AI-backed strategy behind one
//! contract. Image scanning is never allowed to be a hard failure path —
//! exhausting the model fallback list degrades to the mock reader.

use crate::domain::constants::{
    LABEL_API_BASE, LABEL_EXTRACTION_PROMPT, MOCK_BRANDS, MOCK_MATERIALS, MOCK_ORIGINS,
};
use crate::domain::models::ScanResult;
use crate::services::config::LabelConfig;
use base64::Engine as _;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

pub struct Acquisition {
    pub result: ScanResult,
    /// Informational message when the result was degraded (soft error).
    pub note: Option<String>,
}

/// Produce a label reading for an optional image. Strategy selection: an
/// API credential selects the AI reader, otherwise the mock reader. Never
/// fails; all acquisition errors collapse into a mock result plus a note.
pub fn acquire_label(image: Option<&[u8]>, cfg: &LabelConfig, rng: &mut impl Rng) -> Acquisition {
    let Some(key) = cfg.resolve_api_key() else {
        return Acquisition {
            result: mock_scan(cfg, rng),
            note: None,
        };
    };
    let Some(image) = image else {
        return Acquisition {
            result: mock_scan(cfg, rng),
            note: Some("no image captured; using simulated label".to_string()),
        };
    };
    match ai_scan(image, &key, cfg) {
        Ok(result) => Acquisition { result, note: None },
        Err(e) => Acquisition {
            result: mock_scan(cfg, rng),
            note: Some(format!("label service unavailable ({e}); using simulated label")),
        },
    }
}

/// Simulated reader: fixed delay, then a uniform draw from the candidate
/// pools. Always tagged `is_real = false`.
pub fn mock_scan(cfg: &LabelConfig, rng: &mut impl Rng) -> ScanResult {
    if cfg.mock_delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(cfg.mock_delay_ms));
    }
    ScanResult {
        brand: pick(MOCK_BRANDS, rng),
        material: pick(MOCK_MATERIALS, rng),
        origin: pick(MOCK_ORIGINS, rng),
        is_real: false,
    }
}

fn pick(pool: &[&str], rng: &mut impl Rng) -> String {
    pool.choose(rng).copied().unwrap_or("Unknown").to_string()
}

/// AI reader: try each model identifier in order until one returns a
/// parseable pipe-delimited line. Per-attempt errors are swallowed; the
/// last one is reported if the whole chain is exhausted.
fn ai_scan(image: &[u8], api_key: &str, cfg: &LabelConfig) -> anyhow::Result<ScanResult> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(cfg.timeout_ms))
        .build()?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(image);
    let body = serde_json::json!({
        "contents": [{
            "parts": [
                {"text": LABEL_EXTRACTION_PROMPT},
                {"inline_data": {"mime_type": "image/jpeg", "data": encoded}}
            ]
        }]
    });

    let mut last_err = anyhow::anyhow!("no label models configured");
    for model in &cfg.models {
        match request_model(&client, model, api_key, &body) {
            Ok(text) => match parse_label_line(&text) {
                Some(result) => return Ok(result),
                None => last_err = anyhow::anyhow!("unparseable response from {model}"),
            },
            Err(e) => last_err = e,
        }
    }
    Err(last_err)
}

fn request_model(
    client: &reqwest::blocking::Client,
    model: &str,
    api_key: &str,
    body: &serde_json::Value,
) -> anyhow::Result<String> {
    let url = format!("{LABEL_API_BASE}/{model}:generateContent");
    let resp = client
        .post(url)
        .query(&[("key", api_key)])
        .json(body)
        .send()?
        .error_for_status()?;
    let v: serde_json::Value = resp.json()?;
    v.pointer("/candidates/0/content/parts/0/text")
        .and_then(|t| t.as_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("no text candidate in response from {model}"))
}

/// Parse a `Brand|Origin|Material` line out of a model reply. Tolerates
/// surrounding chatter; rejects anything without exactly three fields.
pub fn parse_label_line(text: &str) -> Option<ScanResult> {
    let line = text.lines().find(|l| l.contains('|'))?;
    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return None;
    }
    Some(ScanResult {
        brand: parts[0].to_string(),
        origin: parts[1].to_string(),
        material: parts[2].to_string(),
        is_real: true,
    })
}
