//! Report Endpoints
//!
//! Request payloads and calls for the report CRUD surface.

use serde::Serialize;
use wasm_bindgen_futures::JsFuture;

use super::send;
use crate::config;
use crate::models::Report;

// ========================
// Request Payloads
// ========================

/// Body for `POST /add` and `PUT /update`. On update, `date` is the
/// original edit target, not whatever the form currently shows.
#[derive(Serialize)]
pub struct ReportPayload<'a> {
    pub date: &'a str,
    pub report: &'a str,
    pub notes: &'a str,
}

#[derive(Serialize)]
struct DeleteArgs<'a> {
    id: &'a str,
}

// ========================
// Calls
// ========================

pub async fn list_reports() -> Result<Vec<Report>, String> {
    let response = send("GET", "/reports", None).await?;
    let json = JsFuture::from(response.json().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

pub async fn create_report(payload: &ReportPayload<'_>) -> Result<(), String> {
    let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;
    let _ = send("POST", "/add", Some(body)).await?;
    Ok(())
}

pub async fn update_report(payload: &ReportPayload<'_>) -> Result<(), String> {
    let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;
    let _ = send("PUT", "/update", Some(body)).await?;
    Ok(())
}

pub async fn delete_report(id: &str) -> Result<(), String> {
    let body = serde_json::to_string(&DeleteArgs { id }).map_err(|e| e.to_string())?;
    let _ = send("DELETE", "/delete", Some(body)).await?;
    Ok(())
}

/// Export endpoint; the browser handles the download itself
pub fn export_url() -> String {
    format!("{}/download", config::backend_url())
}
