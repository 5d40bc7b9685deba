use crate::catalog::CatalogError;
use crate::domain::models::JsonOut;
use crate::services::session::SessionError;
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Stable machine-readable code for a failure, for the JSON error envelope.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<SessionError>() {
        return match e {
            SessionError::ScanQuotaExceeded(_) => "QUOTA_EXCEEDED",
            SessionError::SignInRequired(_) => "SIGNIN_REQUIRED",
            SessionError::PremiumRequired(_) => "PREMIUM_REQUIRED",
        };
    }
    if let Some(e) = err.downcast_ref::<CatalogError>() {
        return match e {
            CatalogError::ItemNotFound(_) => "ITEM_NOT_FOUND",
            CatalogError::CharityNotFound(_) => "CHARITY_NOT_FOUND",
            CatalogError::DuplicateItem(_) | CatalogError::DuplicateCharity(_) => "DUPLICATE_ITEM",
        };
    }
    "APP"
}

pub fn print_error(json: bool, err: &anyhow::Error) {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "ok": false,
                "error": {"code": error_code(err), "message": err.to_string()}
            })
        );
    } else {
        eprintln!("error: {err:#}");
    }
}
