//! Verification runs against a fake part-numbers service

mod common;

use part_numbers_cli::config::ApiConfig;
use part_numbers_cli::verify::{VerifyOptions, run_verify};
use serde_json::json;

use common::{FakeService, dead_base_url};

fn options(base_url: String) -> VerifyOptions {
    VerifyOptions {
        api: ApiConfig::new(base_url),
        ..VerifyOptions::default()
    }
}

#[tokio::test]
async fn known_part_number_is_found() {
    let long_model = "X".repeat(60);
    let service = FakeService::with_listing(json!({
        "success": true,
        "data": [
            {"id": 1, "part_number": "ABQ74480101", "model": long_model, "description": "COVER"},
            {"id": 2, "part_number": "EAX69083603", "model": null, "description": null},
            {
                "id": 3,
                "part_number": "EBR80757417",
                "model": "OLED65C1PUB",
                "description": "MAIN BOARD"
            }
        ]
    }));
    let base_url = service.spawn().await;

    let report = run_verify(&options(base_url)).await.unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.sample[0].model, format!("{}...", "X".repeat(50)));
    assert_eq!(report.sample[1].model, "N/A");
    assert!(report.exists());

    let text = report.to_string();
    assert!(text.starts_with("Total records: 3\n"));
    assert!(text.contains("Does EBR80757417 exist? Yes"));
    assert!(text.contains("  Description: MAIN BOARD"));
    assert!(text.contains("  Model: OLED65C1PUB"));
}

#[tokio::test]
async fn missing_part_number_is_reported_absent() {
    let service = FakeService::with_listing(json!({
        "success": true,
        "data": [{"part_number": "ABQ74480101", "model": "32LM570BPUA"}]
    }));
    let base_url = service.spawn().await;

    let report = run_verify(&options(base_url)).await.unwrap();

    assert!(!report.exists());
    assert!(report.to_string().contains("Does EBR80757417 exist? No"));
}

#[tokio::test]
async fn malformed_listing_is_an_error() {
    let service = FakeService::with_listing(json!({"success": false, "error": "db down"}));
    let base_url = service.spawn().await;

    assert!(run_verify(&options(base_url)).await.is_err());
}

#[tokio::test]
async fn unreachable_service_is_an_error() {
    assert!(run_verify(&options(dead_base_url().await)).await.is_err());
}
