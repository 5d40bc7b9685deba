use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Unauthenticated,
    Guest,
    SignedIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Premium,
}

/// Output of a label-reading strategy. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub brand: String,
    pub material: String,
    pub origin: String,
    pub is_real: bool,
}

/// One line of the session's append-only scan history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanHistoryEntry {
    pub risk: u8,
    pub brand: String,
    pub material: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    pub brand: String,
    pub material: String,
    pub origin: String,
    pub risk: u8,
    pub band: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub brand: String,
    pub material: String,
    pub origin: String,
    pub is_real: bool,
    pub risk: u8,
    pub band: String,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationRow {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub seller: String,
    pub style: String,
    pub material: String,
    pub score: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrandRisk {
    pub brand: String,
    pub average_risk: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub scan_count: usize,
    pub average_risk: f64,
    pub brands: Vec<BrandRisk>,
}
