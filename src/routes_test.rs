use std::path::Path;

use super::*;
use crate::config::DEFAULT_ASSETS_DIR;

#[tokio::test]
async fn healthz_reports_ok() {
    let Json(health) = healthz().await;
    assert_eq!(health.status, "ok");
    assert_eq!(health.edition, edition_name(SiteConfig::active().edition));
}

#[test]
fn health_serializes_status_and_edition() {
    let body = serde_json::to_value(Health { status: "ok", edition: "coupon" }).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok", "edition": "coupon" }));
}

#[test]
fn edition_names_are_stable() {
    assert_eq!(edition_name(Edition::Coupon), "coupon");
    assert_eq!(edition_name(Edition::Countdown), "countdown");
}

#[test]
fn default_assets_dir_ships_every_image_the_site_links() {
    let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_ASSETS_DIR);
    for href in [site::config::LOGO_PATH, site::config::FACULTY_PHOTO_PATH] {
        let file = assets.join(href.trim_start_matches('/'));
        assert!(file.is_file(), "missing asset {}", file.display());
    }
}
