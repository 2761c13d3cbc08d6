//! tests/global_errors/409.rs
//! Conflicts: duplicate keys, records in use, duplicates and invalid states.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn foreign_key_violation_hides_engine_message() {
    let base_url: String = common::spawn_app();

    let (status, content_type, json) = common::get_json(format!("{}/test/db/547", base_url)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(content_type, common::PROBLEM_JSON);
    assert_eq!(json["title"], "Conflict");
    assert_eq!(json["detail"], "No se puede eliminar el registro porque está siendo utilizado");
    assert!(!json.to_string().contains("engine message"));
}

#[tokio::test]
async fn duplicate_key_numbers_share_one_message() {
    let base_url: String = common::spawn_app();

    for number in [2601, 2627] {
        let (status, _, json) = common::get_json(format!("{}/test/db/{}", base_url, number)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["detail"], "ya existe un registro con estos datos");
    }
}

#[tokio::test]
async fn domain_duplicate_and_invalid_state() {
    let base_url: String = common::spawn_app();

    let (status, _, json) = common::get_json(format!("{}/test/duplicate", base_url)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["detail"], "Zona con nombre 'NORTE' ya existe");

    let (status, _, json) = common::get_json(format!("{}/test/invalid-state", base_url)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["detail"], "El sorteo ya está cerrado");
}
