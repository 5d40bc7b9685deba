//! Deterministic ethical-risk scoring over label text.

use crate::domain::models::{ScanReport, ScanResult};
use serde::Deserialize;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 99;

const SYNTHETIC_MATERIAL_POINTS: i32 = 30;
const MATERIAL_QUALIFIER_POINTS: i32 = 5;
const MATERIAL_BASELINE_POINTS: i32 = 20;
const HIGH_RISK_ORIGIN_POINTS: i32 = 40;
const LOW_RISK_ORIGIN_POINTS: i32 = 10;
const ORIGIN_BASELINE_POINTS: i32 = 25;
const BRAND_PENALTY_POINTS: i32 = 20;
const BRAND_DISCOUNT_POINTS: i32 = -10;

/// Keyword tables driving the scorer. Injected via config so the lists are
/// testable data, not literals at the call sites.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringTables {
    #[serde(default = "default_synthetic_materials")]
    pub synthetic_materials: Vec<String>,
    #[serde(default = "default_material_qualifiers")]
    pub material_qualifiers: Vec<String>,
    #[serde(default = "default_high_risk_origins")]
    pub high_risk_origins: Vec<String>,
    #[serde(default = "default_low_risk_origins")]
    pub low_risk_origins: Vec<String>,
    #[serde(default = "default_high_risk_brands")]
    pub high_risk_brands: Vec<String>,
    #[serde(default = "default_low_risk_brands")]
    pub low_risk_brands: Vec<String>,
    #[serde(default = "default_brand_adjustment")]
    pub brand_adjustment: bool,
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self {
            synthetic_materials: default_synthetic_materials(),
            material_qualifiers: default_material_qualifiers(),
            high_risk_origins: default_high_risk_origins(),
            low_risk_origins: default_low_risk_origins(),
            high_risk_brands: default_high_risk_brands(),
            low_risk_brands: default_low_risk_brands(),
            brand_adjustment: default_brand_adjustment(),
        }
    }
}

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn default_synthetic_materials() -> Vec<String> {
    strings(&["polyester", "nylon", "acrylic", "rayon"])
}

fn default_material_qualifiers() -> Vec<String> {
    strings(&["organic", "recycled"])
}

fn default_high_risk_origins() -> Vec<String> {
    strings(&["china", "bangladesh", "vietnam"])
}

fn default_low_risk_origins() -> Vec<String> {
    strings(&["portugal", "uk"])
}

fn default_high_risk_brands() -> Vec<String> {
    strings(&["FastFashionCo", "UrbanTrend"])
}

fn default_low_risk_brands() -> Vec<String> {
    strings(&["EcoThread", "GreenStitch"])
}

fn default_brand_adjustment() -> bool {
    true
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    let hay = haystack.to_ascii_lowercase();
    needles
        .iter()
        .any(|n| hay.contains(&n.to_ascii_lowercase()))
}

fn matches_any(value: &str, names: &[String]) -> bool {
    names.iter().any(|n| n.eq_ignore_ascii_case(value.trim()))
}

/// Additive risk score in [1,99]. Total function: unrecognized strings fall
/// through to the baseline bucket for their dimension.
pub fn score_label(tables: &ScoringTables, brand: &str, material: &str, origin: &str) -> u8 {
    let mut total = 0i32;

    total += if contains_any(material, &tables.synthetic_materials) {
        SYNTHETIC_MATERIAL_POINTS
    } else if contains_any(material, &tables.material_qualifiers) {
        MATERIAL_QUALIFIER_POINTS
    } else {
        MATERIAL_BASELINE_POINTS
    };

    total += if contains_any(origin, &tables.high_risk_origins) {
        HIGH_RISK_ORIGIN_POINTS
    } else if contains_any(origin, &tables.low_risk_origins) {
        LOW_RISK_ORIGIN_POINTS
    } else {
        ORIGIN_BASELINE_POINTS
    };

    if tables.brand_adjustment {
        if matches_any(brand, &tables.high_risk_brands) {
            total += BRAND_PENALTY_POINTS;
        } else if matches_any(brand, &tables.low_risk_brands) {
            total += BRAND_DISCOUNT_POINTS;
        }
    }

    total.clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub fn for_score(score: u8) -> Self {
        if score > 70 {
            RiskBand::High
        } else if score > 40 {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Medium => "medium",
            RiskBand::High => "high",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            RiskBand::High => "High risk: indicators often linked to labour exploitation detected.",
            RiskBand::Medium => {
                "Medium risk: some transparency, but materials/origin pose concerns."
            }
            RiskBand::Low => "Low risk: likely a more ethical supply chain.",
        }
    }
}

pub fn scan_report(tables: &ScoringTables, result: ScanResult, note: Option<String>) -> ScanReport {
    let risk = score_label(tables, &result.brand, &result.material, &result.origin);
    let band = RiskBand::for_score(risk);
    ScanReport {
        brand: result.brand,
        material: result.material,
        origin: result.origin,
        is_real: result.is_real,
        risk,
        band: band.as_str().to_string(),
        explanation: band.explanation().to_string(),
        note,
    }
}
