// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printer profile, preset, and preview endpoints.
//
//   GET    /printer/profiles        list profiles
//   POST   /printer/profiles        create profile            -> 201
//   PUT    /printer/profiles/:id    partial update            -> 404 if unknown
//   DELETE /printer/profiles/:id    delete                    -> 400 for "default"
//   GET    /printer/presets         fixed preset table
//   POST   /printer/preview         preview for given settings

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use printdesk_core::{JobPreset, PrintPreview, PrinterProfile, ProfileFields, ProfileId, ProfileStore};

use crate::body::parse_field_bag;
use crate::error::{ApiError, STATUS_SUCCESS};

type S = Arc<ProfileStore>;

pub fn routes(store: S) -> Router {
    Router::new()
        .route("/printer/profiles", get(list_profiles).post(create_profile))
        .route(
            "/printer/profiles/:id",
            put(update_profile).delete(delete_profile),
        )
        .route("/printer/presets", get(list_presets))
        .route("/printer/preview", post(preview))
        .with_state(store)
}

#[derive(Debug, Serialize)]
pub struct ProfilesResponse {
    pub status: &'static str,
    pub profiles: Vec<PrinterProfile>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub profile: PrinterProfile,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PresetsResponse {
    pub status: &'static str,
    pub presets: BTreeMap<String, JobPreset>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub status: &'static str,
    pub preview: PrintPreview,
}

async fn list_profiles(State(store): State<S>) -> Json<ProfilesResponse> {
    Json(ProfilesResponse {
        status: STATUS_SUCCESS,
        profiles: store.list(),
    })
}

async fn create_profile(
    State(store): State<S>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<ProfileResponse>), ApiError> {
    let fields: ProfileFields = parse_field_bag(&body?)?;
    let profile = store.create(&fields)?;
    Ok((
        StatusCode::CREATED,
        Json(ProfileResponse {
            status: STATUS_SUCCESS,
            message: "Profile created successfully",
            profile,
        }),
    ))
}

async fn update_profile(
    State(store): State<S>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let id = ProfileId::from(id);
    // An unknown id is reported as 404 even when the body is also bad.
    store.get(&id)?;
    let fields: ProfileFields = parse_field_bag(&body?)?;
    let profile = store.update(&id, &fields)?;
    Ok(Json(ProfileResponse {
        status: STATUS_SUCCESS,
        message: "Profile updated successfully",
        profile,
    }))
}

async fn delete_profile(
    State(store): State<S>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    store.delete(&ProfileId::from(id))?;
    Ok(Json(MessageResponse {
        status: STATUS_SUCCESS,
        message: "Profile deleted successfully",
    }))
}

async fn list_presets(State(store): State<S>) -> Json<PresetsResponse> {
    Json(PresetsResponse {
        status: STATUS_SUCCESS,
        presets: store.presets().clone(),
    })
}

async fn preview(
    State(store): State<S>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<PreviewResponse>, ApiError> {
    let fields: ProfileFields = parse_field_bag(&body?)?;
    let preview = store.preview(&fields);
    info!(
        paper_size = %preview.settings.paper_size,
        quality = %preview.settings.quality,
        "print preview generated"
    );
    Ok(Json(PreviewResponse {
        status: STATUS_SUCCESS,
        preview,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::call;

    fn router() -> (Router, S) {
        let store = Arc::new(ProfileStore::new());
        (routes(Arc::clone(&store)), store)
    }

    const TEST_PROFILE: &str = r#"{"name":"Test Profile","paper_size":"A4","orientation":"Landscape","color_mode":"Color","quality":"High","duplex":true,"copies":2,"is_favorite":true}"#;

    #[tokio::test]
    async fn list_contains_default_profile() {
        let (router, _) = router();
        let (status, json) = call(&router, "GET", "/printer/profiles", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
        let profiles = json["profiles"].as_array().unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0]["id"], "default");
    }

    #[tokio::test]
    async fn create_returns_201_with_profile() {
        let (router, store) = router();
        let (status, json) = call(&router, "POST", "/printer/profiles", Some(TEST_PROFILE)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "Profile created successfully");
        let profile = &json["profile"];
        assert_eq!(profile["name"], "Test Profile");
        assert_eq!(profile["paper_size"], "A4");
        assert_eq!(profile["orientation"], "Landscape");
        assert_eq!(profile["quality"], "High");
        assert_eq!(profile["duplex"], true);
        assert_eq!(profile["copies"], 2);
        assert_eq!(profile["is_favorite"], true);
        assert!(profile["created_at"].is_string());
        assert!(profile.get("updated_at").is_none());
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn create_fills_defaults() {
        let (router, _) = router();
        let (status, json) =
            call(&router, "POST", "/printer/profiles", Some(r#"{"name":"Bare"}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        let profile = &json["profile"];
        assert_eq!(profile["paper_size"], "Letter");
        assert_eq!(profile["orientation"], "Portrait");
        assert_eq!(profile["color_mode"], "Color");
        assert_eq!(profile["quality"], "Standard");
        assert_eq!(profile["duplex"], false);
        assert_eq!(profile["copies"], 1);
        assert_eq!(profile["is_favorite"], false);
    }

    #[tokio::test]
    async fn create_without_name_is_400_and_adds_nothing() {
        let (router, store) = router();
        let (status, json) = call(
            &router,
            "POST",
            "/printer/profiles",
            Some(r#"{"paper_size":"Letter"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Profile name is required");
        assert_eq!(store.len(), 1);

        let (status, _) =
            call(&router, "POST", "/printer/profiles", Some(r#"{"name":""}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn create_without_body_is_400() {
        let (router, _) = router();
        let (status, json) = call(&router, "POST", "/printer/profiles", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "No data provided");
    }

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let (router, _) = router();
        let (_, created) = call(&router, "POST", "/printer/profiles", Some(TEST_PROFILE)).await;
        let id = created["profile"]["id"].as_str().unwrap().to_string();

        let (status, json) = call(
            &router,
            "PUT",
            &format!("/printer/profiles/{id}"),
            Some(r#"{"name":"Updated Profile","quality":"High"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "Profile updated successfully");
        let profile = &json["profile"];
        assert_eq!(profile["name"], "Updated Profile");
        assert_eq!(profile["quality"], "High");
        assert_eq!(profile["paper_size"], "A4");
        assert_eq!(profile["orientation"], "Landscape");
        assert_eq!(profile["copies"], 2);
        assert_eq!(profile["created_at"], created["profile"]["created_at"]);
        assert!(profile["updated_at"].as_str().is_some_and(|s| !s.is_empty()));
    }

    #[tokio::test]
    async fn update_ignores_immutable_and_unknown_keys() {
        let (router, store) = router();
        let (_, created) = call(&router, "POST", "/printer/profiles", Some(TEST_PROFILE)).await;
        let id = created["profile"]["id"].as_str().unwrap().to_string();

        let (status, json) = call(
            &router,
            "PUT",
            &format!("/printer/profiles/{id}"),
            Some(r#"{"id":"hijack","created_at":"1999-01-01T00:00:00Z","toner":"cyan","copies":5}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["profile"]["id"], id.as_str());
        assert_eq!(json["profile"]["created_at"], created["profile"]["created_at"]);
        assert_eq!(json["profile"]["copies"], 5);
        assert!(store.get(&ProfileId::from("hijack")).is_err());
    }

    #[tokio::test]
    async fn update_unknown_is_404() {
        let (router, store) = router();
        let before = store.list();
        let (status, json) = call(
            &router,
            "PUT",
            "/printer/profiles/nonexistent",
            Some(r#"{"name":"Test"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Profile not found");
        assert_eq!(store.list(), before);
    }

    #[tokio::test]
    async fn update_without_body_is_400() {
        let (router, _) = router();
        let (status, json) = call(&router, "PUT", "/printer/profiles/default", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], "error");
    }

    #[tokio::test]
    async fn delete_removes_profile() {
        let (router, _) = router();
        let (_, created) = call(
            &router,
            "POST",
            "/printer/profiles",
            Some(r#"{"name":"Delete Test Profile","paper_size":"Letter"}"#),
        )
        .await;
        let id = created["profile"]["id"].as_str().unwrap().to_string();

        let (status, json) =
            call(&router, "DELETE", &format!("/printer/profiles/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "Profile deleted successfully");

        let (_, listed) = call(&router, "GET", "/printer/profiles", None).await;
        let ids: Vec<&str> = listed["profiles"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|p| p["id"].as_str())
            .collect();
        assert!(!ids.contains(&id.as_str()));
    }

    #[tokio::test]
    async fn delete_default_is_400() {
        let (router, store) = router();
        let (status, json) = call(&router, "DELETE", "/printer/profiles/default", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], "error");
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .contains("Cannot delete default profile")
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn delete_unknown_is_404() {
        let (router, _) = router();
        let (status, json) =
            call(&router, "DELETE", "/printer/profiles/nonexistent", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["status"], "error");
    }

    #[tokio::test]
    async fn presets_lists_three_fixed_names() {
        let (router, _) = router();
        call(&router, "POST", "/printer/profiles", Some(TEST_PROFILE)).await;

        let (status, json) = call(&router, "GET", "/printer/presets", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
        let presets = json["presets"].as_object().unwrap();
        assert_eq!(presets.len(), 3);
        assert!(presets.contains_key("draft_documents"));
        assert!(presets.contains_key("photo_quality"));
        assert!(presets.contains_key("text_heavy"));
        assert_eq!(presets["photo_quality"]["quality"], "High");
    }

    #[tokio::test]
    async fn preview_echoes_resolved_settings() {
        let (router, store) = router();
        let body = r#"{"paper_size":"Letter","orientation":"Portrait","color_mode":"Color","quality":"High","duplex":true,"copies":1}"#;

        let (status, json) = call(&router, "POST", "/printer/preview", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
        let preview = &json["preview"];
        assert_eq!(preview["paper_size"], "Letter");
        assert_eq!(preview["orientation"], "Portrait");
        assert_eq!(preview["quality"], "High");
        assert_eq!(preview["duplex"], true);
        assert_eq!(preview["estimated_pages"], 1);
        assert!(preview["preview_text"].is_string());

        let (_, again) = call(&router, "POST", "/printer/preview", Some(body)).await;
        assert_eq!(again, json);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn preview_defaults_missing_settings() {
        let (router, _) = router();
        let (status, json) =
            call(&router, "POST", "/printer/preview", Some(r#"{"quality":"Draft"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["preview"]["paper_size"], "Letter");
        assert_eq!(json["preview"]["copies"], 1);
        assert_eq!(json["preview"]["quality"], "Draft");
    }

    #[tokio::test]
    async fn preview_with_empty_body_is_400() {
        let (router, _) = router();
        let (status, json) = call(&router, "POST", "/printer/preview", Some("")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], "error");
    }

    #[tokio::test]
    async fn preview_with_garbage_is_400() {
        let (router, _) = router();
        let (status, json) =
            call(&router, "POST", "/printer/preview", Some("not json at all")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], "error");
    }
}
