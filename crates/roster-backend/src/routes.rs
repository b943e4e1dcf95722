use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{AppState, config::Config, handlers};

fn cors() -> CorsLayer {
    let origins = if cfg!(debug_assertions) {
        let dev_ports = [3000, 8000, 8080, 8081, 5173];
        dev_ports
            .iter()
            .flat_map(|port| {
                [
                    format!("http://localhost:{port}"),
                    format!("http://127.0.0.1:{port}"),
                ]
            })
            .filter_map(|origin| HeaderValue::from_str(&origin).ok())
            .collect()
    } else {
        // Production origins - add your domains here
        Vec::new()
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
}

fn activity_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(handlers::v1::activities::list))
        .route("/activities/{name}", get(handlers::v1::activities::get))
        .route(
            "/activities/{name}/signup",
            post(handlers::v1::activities::signup),
        )
        .route(
            "/activities/{name}/participants",
            delete(handlers::v1::activities::unregister),
        )
}

/// Setup the routes for the server and configure CORS
pub fn setup_routes(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/health", get(handlers::health::get))
        .merge(activity_routes())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use roster::data::{Activities, ErrorResponse, HealthResponse, MessageResponse};
    use roster::serde_json;
    use tower::ServiceExt;

    use crate::services::ActivityDirectoryInMemory;

    const CHESS_PATH: &str = "/activities/Chess%20Club";
    const EMAIL: &str = "testuser@example.com";

    fn app() -> Router {
        let state = Arc::new(AppState::new(Arc::new(ActivityDirectoryInMemory::seeded())));
        setup_routes(state, &Config::default())
    }

    async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn activities(app: &Router) -> Activities {
        let (status, body) = send(app, "GET", "/activities").await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn get_activities_lists_seed() {
        let app = app();
        let activities = activities(&app).await;

        assert!(activities.contains_key("Chess Club"));
        let chess = &activities["Chess Club"];
        assert_eq!(chess.max_participants, 12);
        assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
    }

    #[tokio::test]
    async fn signup_and_unregister() {
        let app = app();

        let (status, body) = send(
            &app,
            "POST",
            &format!("{CHESS_PATH}/signup?email=testuser%40example.com"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let message: MessageResponse = serde_json::from_slice(&body).unwrap();
        assert!(message.message.contains("Signed up"));
        assert_eq!(message.message, format!("Signed up {EMAIL} for Chess Club"));

        assert!(activities(&app).await["Chess Club"].has_participant(EMAIL));

        let (status, body) = send(
            &app,
            "DELETE",
            &format!("{CHESS_PATH}/participants?email={EMAIL}"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let message: MessageResponse = serde_json::from_slice(&body).unwrap();
        assert!(message.message.contains("Unregistered"));

        assert!(!activities(&app).await["Chess Club"].has_participant(EMAIL));
    }

    #[tokio::test]
    async fn unknown_activity_is_not_found() {
        let app = app();
        let before = activities(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/activities/Knitting/signup?email={EMAIL}"),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.detail, "Activity Knitting not found");

        let (status, _) = send(
            &app,
            "DELETE",
            &format!("/activities/Knitting/participants?email={EMAIL}"),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "GET", "/activities/Knitting").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        assert_eq!(activities(&app).await, before);
    }

    #[tokio::test]
    async fn unknown_activity_with_blank_email_is_not_found() {
        let app = app();

        let (status, body) = send(&app, "POST", "/activities/Knitting/signup?email=").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.detail, "Activity Knitting not found");

        let (status, _) = send(
            &app,
            "DELETE",
            "/activities/Knitting/participants?email=%20",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn duplicate_signup_conflicts() {
        let app = app();
        let uri = format!("{CHESS_PATH}/signup?email=michael@mergington.edu");

        let (status, body) = send(&app, "POST", &uri).await;
        assert_eq!(status, StatusCode::CONFLICT);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error.detail.contains("already signed up"));
    }

    #[tokio::test]
    async fn unregister_non_member_is_not_found() {
        let app = app();
        let (status, body) = send(
            &app,
            "DELETE",
            &format!("{CHESS_PATH}/participants?email=nobody@example.com"),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            error.detail,
            "nobody@example.com is not registered for Chess Club"
        );
    }

    #[tokio::test]
    async fn missing_or_blank_email_is_bad_request() {
        let app = app();

        let (status, body) = send(&app, "POST", &format!("{CHESS_PATH}/signup")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(!error.detail.is_empty());

        let (status, _) = send(&app, "POST", &format!("{CHESS_PATH}/signup?email=%20")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_single_activity_decodes_name() {
        let app = app();
        let (status, body) = send(&app, "GET", CHESS_PATH).await;
        assert_eq!(status, StatusCode::OK);
        let chess: roster::data::Activity = serde_json::from_slice(&body).unwrap();
        assert!(chess.has_participant("michael@mergington.edu"));
    }

    #[tokio::test]
    async fn health_reports_directory_counts() {
        let app = app();
        let (status, body) = send(&app, "GET", "/health").await;
        assert_eq!(status, StatusCode::OK);

        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.services.activities, 9);
        assert_eq!(health.services.participants, 18);
        assert_eq!(health.services.directory, "up");
    }

    #[tokio::test]
    async fn root_redirects_to_frontend() {
        let app = app();
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/static/index.html"
        );
    }
}
