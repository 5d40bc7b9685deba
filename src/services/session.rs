//! Per-process session state: one explicit object, no globals. Everything
//! here dies with the process; nothing is persisted.

use crate::domain::constants::GUEST_SCAN_QUOTA;
use crate::domain::models::{BrandRisk, Role, ScanHistoryEntry, SessionSummary, SubscriptionTier};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("scan quota exhausted: guests may scan {0} labels per session")]
    ScanQuotaExceeded(u32),
    #[error("sign in required: {0}")]
    SignInRequired(&'static str),
    #[error("premium subscription required: {0}")]
    PremiumRequired(&'static str),
}

#[derive(Debug)]
pub struct Session {
    pub role: Role,
    pub tier: SubscriptionTier,
    pub accessibility: bool,
    pub styles: HashSet<String>,
    guest_scans: u32,
    history: Vec<ScanHistoryEntry>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            role: Role::Unauthenticated,
            tier: SubscriptionTier::Free,
            accessibility: false,
            styles: HashSet::new(),
            guest_scans: 0,
            history: Vec::new(),
        }
    }

    pub fn sign_in(&mut self) {
        self.role = Role::SignedIn;
    }

    pub fn continue_as_guest(&mut self) {
        self.role = Role::Guest;
    }

    /// Full reset: history, counters and subscription all go.
    pub fn log_out(&mut self) {
        *self = Session::new();
    }

    pub fn guest_scans(&self) -> u32 {
        self.guest_scans
    }

    pub fn remaining_guest_scans(&self) -> u32 {
        GUEST_SCAN_QUOTA.saturating_sub(self.guest_scans)
    }

    pub fn history(&self) -> &[ScanHistoryEntry] {
        &self.history
    }

    pub fn scan_materials(&self) -> Vec<String> {
        self.history.iter().map(|e| e.material.clone()).collect()
    }

    pub fn ensure_can_scan(&self) -> Result<(), SessionError> {
        match self.role {
            Role::Unauthenticated => Err(SessionError::SignInRequired(
                "continue as guest or sign in before scanning",
            )),
            Role::Guest if self.guest_scans >= GUEST_SCAN_QUOTA => {
                Err(SessionError::ScanQuotaExceeded(GUEST_SCAN_QUOTA))
            }
            _ => Ok(()),
        }
    }

    /// Append to history, counting against the guest quota. Checked before
    /// the append so a blocked scan leaves no trace.
    pub fn record_scan(&mut self, entry: ScanHistoryEntry) -> Result<(), SessionError> {
        self.ensure_can_scan()?;
        if self.role == Role::Guest {
            self.guest_scans += 1;
        }
        self.history.push(entry);
        Ok(())
    }

    pub fn ensure_signed_in(&self, what: &'static str) -> Result<(), SessionError> {
        if self.role == Role::SignedIn {
            Ok(())
        } else {
            Err(SessionError::SignInRequired(what))
        }
    }

    pub fn ensure_premium(&self, what: &'static str) -> Result<(), SessionError> {
        if self.tier == SubscriptionTier::Premium {
            Ok(())
        } else {
            Err(SessionError::PremiumRequired(what))
        }
    }

    /// Returns true when the tier changed.
    pub fn subscribe(&mut self) -> bool {
        match self.tier {
            SubscriptionTier::Free => {
                self.tier = SubscriptionTier::Premium;
                true
            }
            SubscriptionTier::Premium => false,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        let scan_count = self.history.len();
        let average_risk = if scan_count == 0 {
            0.0
        } else {
            self.history.iter().map(|e| e.risk as f64).sum::<f64>() / scan_count as f64
        };

        // per-brand averages, first-seen order
        let mut totals: Vec<(String, u32, u32)> = Vec::new();
        for e in &self.history {
            match totals.iter_mut().find(|(b, _, _)| b == &e.brand) {
                Some((_, sum, count)) => {
                    *sum += e.risk as u32;
                    *count += 1;
                }
                None => totals.push((e.brand.clone(), e.risk as u32, 1)),
            }
        }
        let brands = totals
            .into_iter()
            .map(|(brand, sum, count)| BrandRisk {
                brand,
                average_risk: sum as f64 / count as f64,
            })
            .collect();

        SessionSummary {
            scan_count,
            average_risk,
            brands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(risk: u8, brand: &str) -> ScanHistoryEntry {
        ScanHistoryEntry {
            risk,
            brand: brand.to_string(),
            material: "Cotton".to_string(),
        }
    }

    #[test]
    fn guest_blocked_after_quota_with_no_history_growth() {
        let mut s = Session::new();
        s.continue_as_guest();
        for i in 0..GUEST_SCAN_QUOTA {
            s.record_scan(entry(50, "GenericBrand"))
                .unwrap_or_else(|e| panic!("scan {i} should pass: {e}"));
        }
        let err = s.record_scan(entry(50, "GenericBrand")).unwrap_err();
        assert!(matches!(err, SessionError::ScanQuotaExceeded(_)));
        assert_eq!(s.history().len(), GUEST_SCAN_QUOTA as usize);
        assert_eq!(s.remaining_guest_scans(), 0);
    }

    #[test]
    fn signed_in_scans_are_unlimited() {
        let mut s = Session::new();
        s.sign_in();
        for _ in 0..(GUEST_SCAN_QUOTA + 5) {
            s.record_scan(entry(42, "EcoThread")).expect("no quota for members");
        }
        assert_eq!(s.history().len(), (GUEST_SCAN_QUOTA + 5) as usize);
        assert_eq!(s.guest_scans(), 0);
    }

    #[test]
    fn unauthenticated_cannot_scan() {
        let mut s = Session::new();
        let err = s.record_scan(entry(42, "EcoThread")).unwrap_err();
        assert!(matches!(err, SessionError::SignInRequired(_)));
        assert!(s.history().is_empty());
    }

    #[test]
    fn log_out_resets_everything() {
        let mut s = Session::new();
        s.continue_as_guest();
        s.subscribe();
        s.styles.insert("Vintage".to_string());
        s.record_scan(entry(60, "UrbanTrend")).expect("guest scan");
        s.log_out();
        assert_eq!(s.role, Role::Unauthenticated);
        assert_eq!(s.tier, SubscriptionTier::Free);
        assert!(s.styles.is_empty());
        assert!(s.history().is_empty());
        assert_eq!(s.guest_scans(), 0);
    }

    #[test]
    fn summary_averages_per_brand_in_first_seen_order() {
        let mut s = Session::new();
        s.sign_in();
        s.record_scan(entry(80, "FastFashionCo")).expect("scan");
        s.record_scan(entry(10, "EcoThread")).expect("scan");
        s.record_scan(entry(90, "FastFashionCo")).expect("scan");
        let sum = s.summary();
        assert_eq!(sum.scan_count, 3);
        assert!((sum.average_risk - 60.0).abs() < f64::EPSILON);
        assert_eq!(sum.brands.len(), 2);
        assert_eq!(sum.brands[0].brand, "FastFashionCo");
        assert!((sum.brands[0].average_risk - 85.0).abs() < f64::EPSILON);
        assert_eq!(sum.brands[1].brand, "EcoThread");
    }

    #[test]
    fn subscribe_is_idempotent() {
        let mut s = Session::new();
        assert!(s.subscribe());
        assert!(!s.subscribe());
        assert_eq!(s.tier, SubscriptionTier::Premium);
    }
}
