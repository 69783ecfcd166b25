//! Route table and request handlers.
//!
//! Every resource kind is served by the same three generic handlers,
//! instantiated per kind in [`router`]. Adding a kind means adding three
//! routes here and nothing else.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::{info, instrument, warn};

use super::response::ApiError;
use crate::core::server::GameServer;
use crate::domains::collections::{AudioClip, CollectionService, PlayerScore, Resource, Sprite};

/// Build the application router.
pub fn router(server: GameServer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/test_connection", get(test_connection))
        .route("/upload_sprite", post(create_resource::<Sprite>))
        .route("/sprites", get(list_resources::<Sprite>))
        .route("/delete_sprite/{id}", delete(delete_resource::<Sprite>))
        .route("/upload_audio", post(create_resource::<AudioClip>))
        .route("/audio", get(list_resources::<AudioClip>))
        .route("/delete_audio/{id}", delete(delete_resource::<AudioClip>))
        .route("/player_score", post(create_resource::<PlayerScore>))
        .route("/player_scores", get(list_resources::<PlayerScore>))
        .route("/delete_score/{id}", delete(delete_resource::<PlayerScore>))
        .with_state(server)
}

/// Root handler - liveness probe with server identity.
async fn root(State(server): State<GameServer>) -> impl IntoResponse {
    Json(json!({
        "message": "Game data service is running",
        "name": server.name(),
        "version": server.version(),
    }))
}

/// Connectivity probe against the document store.
///
/// Always answers 200; a failing store is reported in the body so the
/// route keeps working when the database is down.
async fn test_connection(State(server): State<GameServer>) -> impl IntoResponse {
    match server.check_connectivity().await {
        Ok(count) => Json(json!({
            "message": "Database connection successful",
            "score_count": count,
        })),
        Err(err) => {
            warn!("Connectivity check failed: {}", err);
            Json(json!({
                "message": "Database connection failed",
                "error": err.to_string(),
            }))
        }
    }
}

/// Validate and store a submitted resource.
#[instrument(skip_all, fields(kind = R::KIND))]
async fn create_resource<R: Resource>(
    State(service): State<CollectionService<R>>,
    Json(resource): Json<R>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Processing upload");
    let stored = service.create(resource).await?;

    Ok(Json(json!({
        "message": R::CREATED_MESSAGE,
        "data": stored,
    })))
}

/// List every document in the collection as a bare JSON array.
#[instrument(skip_all, fields(kind = R::KIND))]
async fn list_resources<R: Resource>(
    State(service): State<CollectionService<R>>,
) -> Result<impl IntoResponse, ApiError> {
    let items = service.list().await?;

    Ok(Json(items))
}

/// Delete one document by id.
#[instrument(skip_all, fields(kind = R::KIND))]
async fn delete_resource<R: Resource>(
    State(service): State<CollectionService<R>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    service.delete(&id).await?;

    Ok(Json(json!({ "message": R::DELETED_MESSAGE })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::core::config::Config;
    use crate::core::store::memory::MemoryStore;

    fn test_router() -> Router {
        let server = GameServer::new(Config::default(), Arc::new(MemoryStore::new()));
        router(server)
    }

    /// Drive one request through the router and decode the JSON body.
    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }

    fn sprite_payload() -> Value {
        json!({
            "name": "Hero",
            "sprite_image": "hero.png",
            "size": "64x64",
            "created_at": "2024-01-01T00:00:00Z"
        })
    }

    fn score_payload() -> Value {
        json!({
            "player_name": "Ada",
            "score": 4200,
            "level": 7,
            "timestamp": "2024-05-01T12:00:00Z"
        })
    }

    #[tokio::test]
    async fn root_reports_service_identity() {
        let app = test_router();

        let (status, body) = send(&app, "GET", "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Game data service is running");
        assert_eq!(body["name"], "game-data-server");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_connection_reports_score_count() {
        let app = test_router();

        send(&app, "POST", "/player_score", Some(score_payload())).await;
        send(&app, "POST", "/player_score", Some(score_payload())).await;

        let (status, body) = send(&app, "GET", "/test_connection", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Database connection successful");
        assert_eq!(body["score_count"], 2);
    }

    #[tokio::test]
    async fn uploaded_sprite_round_trips() {
        let app = test_router();

        let (status, body) = send(&app, "POST", "/upload_sprite", Some(sprite_payload())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Sprite uploaded!");
        assert_eq!(body["data"]["name"], "Hero");
        assert!(body["data"]["id"].is_string());

        let (status, listed) = send(&app, "GET", "/sprites", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed, json!([body["data"]]));
    }

    #[tokio::test]
    async fn invalid_sprite_is_rejected_and_not_stored() {
        let app = test_router();

        let mut payload = sprite_payload();
        payload["sprite_image"] = json!("abc");

        let (status, body) = send(&app, "POST", "/upload_sprite", Some(payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation");
        assert_eq!(body["field"], "sprite_image");

        let (_, listed) = send(&app, "GET", "/sprites", None).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let app = test_router();

        let (status, _) = send(&app, "POST", "/upload_sprite", Some(json!({"name": "Hero"}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn sprite_name_is_trimmed_before_storage() {
        let app = test_router();

        let mut payload = sprite_payload();
        payload["name"] = json!("  Hero  ");

        let (_, body) = send(&app, "POST", "/upload_sprite", Some(payload)).await;
        assert_eq!(body["data"]["name"], "Hero");

        let (_, listed) = send(&app, "GET", "/sprites", None).await;
        assert_eq!(listed[0]["name"], "Hero");
    }

    #[tokio::test]
    async fn audio_round_trips_and_rejects_negative_duration() {
        let app = test_router();

        let (status, body) = send(
            &app,
            "POST",
            "/upload_audio",
            Some(json!({
                "name": "Theme",
                "audio_file": "theme.ogg",
                "duration": 92.5,
                "created_at": "2024-01-01T00:00:00Z"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Audio uploaded!");
        assert_eq!(body["data"]["duration"], 92.5);

        let (status, rejected) = send(
            &app,
            "POST",
            "/upload_audio",
            Some(json!({
                "name": "Broken",
                "audio_file": "broken.ogg",
                "duration": -1.0,
                "created_at": "2024-01-01T00:00:00Z"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(rejected["field"], "duration");

        let (_, listed) = send(&app, "GET", "/audio", None).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn score_lifecycle_round_trips() {
        let app = test_router();

        let (status, body) = send(&app, "POST", "/player_score", Some(score_payload())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Score received!");
        assert_eq!(body["data"]["player_name"], "Ada");
        assert_eq!(body["data"]["score"], 4200);

        let id = body["data"]["id"].as_str().unwrap().to_string();

        let (_, listed) = send(&app, "GET", "/player_scores", None).await;
        assert_eq!(listed, json!([body["data"]]));

        let (status, deleted) =
            send(&app, "DELETE", &format!("/delete_score/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted["message"], "Score deleted!");

        let (_, listed) = send(&app, "GET", "/player_scores", None).await;
        assert_eq!(listed, json!([]));

        let (status, missing) =
            send(&app, "DELETE", &format!("/delete_score/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(missing["error"], "not_found");
    }

    #[tokio::test]
    async fn overlong_player_name_is_rejected() {
        let app = test_router();

        let mut payload = score_payload();
        payload["player_name"] = json!("x".repeat(31));

        let (status, body) = send(&app, "POST", "/player_score", Some(payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], "player_name");
    }

    #[tokio::test]
    async fn deleting_unknown_sprite_returns_not_found() {
        let app = test_router();

        let (status, body) = send(
            &app,
            "DELETE",
            "/delete_sprite/ffffffffffffffffffffffff",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
        assert!(body["message"].as_str().unwrap().contains("Sprite"));
    }

    #[tokio::test]
    async fn malformed_id_reads_as_not_found() {
        let app = test_router();

        let (status, _) = send(&app, "DELETE", "/delete_score/not-a-real-id", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn collections_do_not_leak_into_each_other() {
        let app = test_router();

        send(&app, "POST", "/upload_sprite", Some(sprite_payload())).await;

        let (_, audio) = send(&app, "GET", "/audio", None).await;
        assert_eq!(audio, json!([]));

        let (_, scores) = send(&app, "GET", "/player_scores", None).await;
        assert_eq!(scores, json!([]));
    }
}
