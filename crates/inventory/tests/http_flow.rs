//! Router-level tests: the session guard, login over HTTP, and the
//! redirect-after-post flow, wired the same way the server assembles it.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use axum::middleware;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use auth::application::SeedAdminUseCase;
use auth::{AuthConfig, SessionGuardState, SqliteAuthRepository, require_session};
use inventory::domain::repository::CarRepository;
use inventory::{SqliteCarRepository, StockStatus, inventory_router};

async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .expect("migrations");

    pool
}

/// App assembled like the server binary: guarded inventory + logout routes,
/// public login routes.
async fn build_app(pool: SqlitePool) -> (Router, Arc<SqliteCarRepository>) {
    let auth_repo = Arc::new(SqliteAuthRepository::new(pool.clone()));
    let car_repo = Arc::new(SqliteCarRepository::new(pool));

    SeedAdminUseCase::new(auth_repo.clone())
        .execute()
        .await
        .expect("seed");

    let config = Arc::new(AuthConfig::development());

    let guard = SessionGuardState {
        repo: auth_repo.clone(),
        config: config.clone(),
    };

    let protected = Router::new()
        .merge(inventory_router(car_repo.clone()))
        .merge(auth::logout_router(auth_repo.clone(), config.clone()))
        .route_layer(middleware::from_fn_with_state(
            guard,
            require_session::<SqliteAuthRepository>,
        ));

    let app = Router::new()
        .merge(protected)
        .merge(auth::auth_router(auth_repo, config));

    (app, car_repo)
}

async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.expect("request")
}

fn get(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(path: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn location(res: &Response<Body>) -> &str {
    res.headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .unwrap()
}

/// Pull the session cookie pair out of a login response.
fn session_cookie(res: &Response<Body>) -> String {
    res.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("dealer_session="))
        .expect("session cookie")
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

async fn log_in(app: &Router) -> String {
    let res = send(app, post_form("/login", "username=admin&password=admin123", None)).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");
    session_cookie(&res)
}

async fn body_text(res: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8")
}

#[tokio::test]
async fn anonymous_requests_are_redirected_to_login() {
    let (app, _) = build_app(test_pool().await).await;

    let requests = [
        get("/", None),
        get("/logout", None),
        post_form("/agregar", "marca=Toyota&origen=Japan", None),
        post_form("/eliminar/1", "", None),
        post_form("/cambiar_stock/1", "", None),
    ];

    for req in requests {
        let path = req.uri().path().to_string();
        let res = send(&app, req).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER, "path {path}");
        assert_eq!(location(&res), "/login", "path {path}");
    }
}

#[tokio::test]
async fn anonymous_post_performs_no_mutation() {
    let (app, repo) = build_app(test_pool().await).await;

    send(&app, post_form("/agregar", "marca=Toyota&origen=Japan", None)).await;

    assert!(
        repo.list_all().await.unwrap().is_empty(),
        "guard must run before any write"
    );
}

#[tokio::test]
async fn wrong_credentials_bounce_back_to_login_without_a_session() {
    let (app, _) = build_app(test_pool().await).await;

    let res = send(&app, post_form("/login", "username=admin&password=wrong", None)).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");

    let set_session = res
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with("dealer_session="));
    assert!(!set_session, "no session cookie on failed login");
}

#[tokio::test]
async fn login_grants_access_to_the_listing() {
    let (app, _) = build_app(test_pool().await).await;

    let cookie = log_in(&app).await;

    let res = send(&app, get("/", Some(&cookie))).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_text(res).await;
    assert!(body.contains("Inventario de carros"));
}

#[tokio::test]
async fn full_crud_flow_over_http() {
    let (app, repo) = build_app(test_pool().await).await;
    let cookie = log_in(&app).await;

    // Add
    let res = send(
        &app,
        post_form("/agregar", "marca=Toyota&origen=Japan", Some(&cookie)),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");

    let cars = repo.list_all().await.unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].stock, StockStatus::InStock);
    let id = cars[0].id;

    // Listing shows the record
    let res = send(&app, get("/", Some(&cookie))).await;
    let body = body_text(res).await;
    assert!(body.contains("Toyota"));
    assert!(body.contains("<td>Sí</td>"));

    // Toggle
    let res = send(
        &app,
        post_form(&format!("/cambiar_stock/{id}"), "", Some(&cookie)),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(repo.list_all().await.unwrap()[0].stock, StockStatus::OutOfStock);

    // Remove
    let res = send(&app, post_form(&format!("/eliminar/{id}"), "", Some(&cookie))).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert!(repo.list_all().await.unwrap().is_empty());

    // Removing again is NotFound, surfaced as a flash on the redirect
    let res = send(&app, post_form(&format!("/eliminar/{id}"), "", Some(&cookie))).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");
}

#[tokio::test]
async fn validation_failure_redirects_with_danger_flash() {
    let (app, repo) = build_app(test_pool().await).await;
    let cookie = log_in(&app).await;

    let res = send(&app, post_form("/agregar", "marca=&origen=", Some(&cookie))).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");
    assert!(repo.list_all().await.unwrap().is_empty());

    // The next render carries the message and clears the flash cookie
    let flash_cookie = res
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("flash="))
        .expect("flash cookie")
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let combined = format!("{cookie}; {flash_cookie}");
    let res = send(&app, get("/", Some(&combined))).await;

    let cleared = res
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with("flash=;"));
    assert!(cleared, "consumed flash is cleared");

    let body = body_text(res).await;
    assert!(body.contains("Todos los campos son obligatorios."));
    assert!(body.contains("alert-danger"));
}

#[tokio::test]
async fn logout_destroys_the_session_cookie() {
    let (app, _) = build_app(test_pool().await).await;
    let cookie = log_in(&app).await;

    let res = send(&app, get("/logout", Some(&cookie))).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/logout_message");

    // The old token no longer opens the listing
    let res = send(&app, get("/", Some(&cookie))).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");
}

#[tokio::test]
async fn tampered_session_cookie_is_anonymous() {
    let (app, _) = build_app(test_pool().await).await;
    let cookie = log_in(&app).await;

    let forged = format!("{}x", cookie);
    let res = send(&app, get("/", Some(&forged))).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");
}

#[tokio::test]
async fn logout_message_is_public() {
    let (app, _) = build_app(test_pool().await).await;

    let res = send(&app, get("/logout_message", None)).await;
    assert_eq!(res.status(), StatusCode::OK);
}
