//! In-process stand-in for the part-numbers service

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use rust_xlsxwriter::Workbook;
use serde_json::{Value, json};

#[derive(Clone, Default)]
pub struct FakeService {
    /// Every body received on the bulk endpoint
    pub bulk_payloads: Arc<Mutex<Vec<Value>>>,
    /// What the listing endpoint returns
    pub listing: Arc<Mutex<Value>>,
    /// Health checks to fail before reporting healthy
    pub health_failures: Arc<AtomicU32>,
    pub health_calls: Arc<AtomicU32>,
    /// Status the bulk endpoint answers with
    pub bulk_status: Arc<Mutex<Option<StatusCode>>>,
    /// Delay before the bulk endpoint answers
    pub bulk_delay: Arc<Mutex<Option<Duration>>>,
}

impl FakeService {
    pub fn with_listing(listing: Value) -> Self {
        let service = Self::default();
        *service.listing.lock().unwrap() = listing;
        service
    }

    pub fn payloads(&self) -> Vec<Value> {
        self.bulk_payloads.lock().unwrap().clone()
    }

    /// Serve on an ephemeral port, returning the base URL
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/api/health", get(health))
            .route("/api/part-numbers", get(list))
            .route("/api/part-numbers/bulk", post(bulk))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }
}

async fn health(State(service): State<FakeService>) -> (StatusCode, Json<Value>) {
    service.health_calls.fetch_add(1, Ordering::SeqCst);

    let remaining = service.health_failures.load(Ordering::SeqCst);
    if remaining > 0 {
        service.health_failures.store(remaining - 1, Ordering::SeqCst);
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "ERROR", "database": "disconnected"})),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "status": "OK",
            "database": "connected",
            "message": "OQC Exit Records API Running"
        })),
    )
}

async fn list(State(service): State<FakeService>) -> Json<Value> {
    Json(service.listing.lock().unwrap().clone())
}

async fn bulk(
    State(service): State<FakeService>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let delay = *service.bulk_delay.lock().unwrap();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let count = body["records"].as_array().map(|r| r.len()).unwrap_or(0);
    service.bulk_payloads.lock().unwrap().push(body);

    let status = service.bulk_status.lock().unwrap().unwrap_or(StatusCode::OK);
    if status.is_success() {
        (
            status,
            Json(json!({
                "success": true,
                "message": format!("{} registros cargados exitosamente", count)
            })),
        )
    } else {
        (
            status,
            Json(json!({"success": false, "error": "Se requiere un array de registros"})),
        )
    }
}

/// Write a sheet of text cells; `None` leaves the cell empty
pub fn write_sheet(dir: &Path, header: &[&str], rows: &[Vec<Option<&str>>]) -> PathBuf {
    let path = dir.join("Modelos.xlsx");
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in header.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name).unwrap();
    }
    for (row_idx, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            if let Some(text) = cell {
                worksheet
                    .write_string((row_idx + 1) as u32, col as u16, *text)
                    .unwrap();
            }
        }
    }

    workbook.save(&path).unwrap();
    path
}

/// A base URL nothing is listening on
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
