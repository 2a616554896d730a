//! HTTP layer for the pawtag registry.
//!
//! Exposes an axum [`Router`] over any [`RegistryStore`]: the public finder
//! view, the activation workflow, tutor self-service routes, and the
//! administrative provisioning/export routes.

pub mod auth;
pub mod error;
pub mod handlers;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  extract::DefaultBodyLimit,
  routing::{get, post, put},
};
use pawtag_core::store::RegistryStore;
use serde::Deserialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

use handlers::{activate, admin, pets, tags, tutor};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// Public origin embedded in every rendered tag, e.g. `https://pawtag.app`.
  /// Printed tags cannot be re-issued, so this must stay stable.
  pub base_url:   String,
  pub store_path: PathBuf,
  pub photos_dir: PathBuf,
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: RegistryStore> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the registry.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: RegistryStore + Clone + Send + Sync + 'static,
{
  let photos_dir = state.config.photos_dir.clone();

  Router::new()
    // Finder-facing
    .route("/api/pets/{code}", get(pets::view::<S>))
    .route("/api/tags/{code}", get(tags::handler::<S>))
    // Activation
    .route("/api/activate", post(activate::handler::<S>))
    // Tutor self-service
    .route("/api/tutor/pets", get(tutor::list::<S>))
    .route(
      "/api/tutor/pets/{id}",
      get(tutor::get_one::<S>).put(tutor::update::<S>),
    )
    .route(
      "/api/tutor/pets/{id}/photo",
      put(tutor::upload_photo::<S>).delete(tutor::delete_photo::<S>),
    )
    // Administration
    .route("/api/admin/identifiers", get(admin::list::<S>))
    .route("/api/admin/identifiers/generate", post(admin::generate::<S>))
    .route("/api/admin/identifiers/export", get(admin::export::<S>))
    .route(
      "/api/admin/identifiers/{id}",
      get(admin::get_one::<S>).delete(admin::delete::<S>),
    )
    .route("/api/admin/stats", get(admin::stats::<S>))
    // Uploaded photos
    .nest_service("/photos", ServeDir::new(photos_dir))
    .layer(DefaultBodyLimit::max(tutor::MAX_PHOTO_BYTES + 1024))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use base64::Engine as _;
  use base64::engine::general_purpose::STANDARD as B64;
  use pawtag_core::account::{NewAccount, Role};
  use pawtag_core::store::RegistryStore as _;
  use pawtag_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;
  use uuid::Uuid;

  use super::*;
  use crate::auth::hash_password;

  const ADMIN: (&str, &str) = ("admin@pawtag.app", "admin-secret");
  const JANE: (&str, &str) = ("jane@example.com", "secret");
  const BOB: (&str, &str) = ("bob@example.com", "hunter2");

  async fn make_state() -> AppState<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let photos_dir =
      std::env::temp_dir().join(format!("pawtag-test-{}", Uuid::new_v4()));

    AppState {
      store:  Arc::new(store),
      config: Arc::new(ServerConfig {
        host:       "127.0.0.1".to_string(),
        port:       8080,
        base_url:   "https://pawtag.app".to_string(),
        store_path: PathBuf::from(":memory:"),
        photos_dir,
      }),
    }
  }

  async fn seed_account(
    state: &AppState<SqliteStore>,
    (email, password): (&str, &str),
    role: Role,
  ) {
    state
      .store
      .add_account(NewAccount {
        email: email.into(),
        name:  email.split('@').next().unwrap_or(email).into(),
        password_hash: hash_password(password).unwrap(),
        role,
      })
      .await
      .unwrap();
  }

  async fn seeded_state() -> AppState<SqliteStore> {
    let state = make_state().await;
    seed_account(&state, ADMIN, Role::Admin).await;
    seed_account(&state, JANE, Role::Tutor).await;
    seed_account(&state, BOB, Role::Tutor).await;
    state
  }

  fn basic((email, pass): (&str, &str)) -> String {
    format!("Basic {}", B64.encode(format!("{email}:{pass}")))
  }

  async fn send(
    state: AppState<SqliteStore>,
    method: &str,
    uri: &str,
    auth: Option<(&str, &str)>,
    body: Option<Value>,
  ) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(creds) = auth {
      builder = builder.header(header::AUTHORIZATION, basic(creds));
    }
    let req = match body {
      Some(v) => builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(v.to_string()))
        .unwrap(),
      None => builder.body(Body::empty()).unwrap(),
    };
    router(state).oneshot(req).await.unwrap()
  }

  async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap()
      .to_vec()
  }

  async fn body_json(resp: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
  }

  async fn generate(state: &AppState<SqliteStore>, count: usize) -> Vec<String> {
    let resp = send(
      state.clone(),
      "POST",
      "/api/admin/identifiers/generate",
      Some(ADMIN),
      Some(json!({ "count": count })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp)
      .await
      .as_array()
      .unwrap()
      .iter()
      .map(|v| v["code"].as_str().unwrap().to_owned())
      .collect()
  }

  async fn activate(
    state: &AppState<SqliteStore>,
    who: (&str, &str),
    code: &str,
  ) -> axum::response::Response {
    send(
      state.clone(),
      "POST",
      "/api/activate",
      Some(who),
      Some(json!({
        "code": code,
        "contact_name": "Jane",
        "phone": "+15550100",
        "name": "Pipoca",
        "species": "Dog",
      })),
    )
    .await
  }

  // ── Provisioning ──────────────────────────────────────────────────────────

  #[tokio::test]
  async fn generate_on_empty_store_starts_at_00001() {
    let state = seeded_state().await;
    let codes = generate(&state, 3).await;
    assert_eq!(codes, ["00001", "00002", "00003"]);
  }

  #[tokio::test]
  async fn generate_requires_admin_role() {
    let state = seeded_state().await;

    let resp = send(
      state.clone(),
      "POST",
      "/api/admin/identifiers/generate",
      Some(JANE),
      Some(json!({ "count": 1 })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = send(
      state,
      "POST",
      "/api/admin/identifiers/generate",
      None,
      Some(json!({ "count": 1 })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  }

  #[tokio::test]
  async fn generate_rejects_out_of_range_counts() {
    let state = seeded_state().await;

    for count in [0, 101] {
      let resp = send(
        state.clone(),
        "POST",
        "/api/admin/identifiers/generate",
        Some(ADMIN),
        Some(json!({ "count": count })),
      )
      .await;
      assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "count={count}");
    }

    // Nothing was persisted by the rejected requests.
    let resp = send(state, "GET", "/api/admin/stats", Some(ADMIN), None).await;
    assert_eq!(body_json(resp).await["identifiers"], 0);
  }

  // ── Public view ───────────────────────────────────────────────────────────

  #[tokio::test]
  async fn unknown_code_is_not_registered() {
    let state = seeded_state().await;
    let resp = send(state, "GET", "/api/pets/54321", None, None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "this tag is not registered");
  }

  #[tokio::test]
  async fn unbound_code_challenges_anonymous_finders() {
    let state = seeded_state().await;
    generate(&state, 1).await;

    let resp = send(state, "GET", "/api/pets/00001", None, None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().contains_key(header::WWW_AUTHENTICATE));
  }

  #[tokio::test]
  async fn unbound_code_tells_a_signed_in_visitor_to_activate() {
    let state = seeded_state().await;
    generate(&state, 1).await;

    let resp = send(state, "GET", "/api/pets/00001", Some(JANE), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "unbound");
    assert!(body["pet"].is_null());
  }

  // ── Activation ────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn activation_binds_and_second_attempt_conflicts() {
    let state = seeded_state().await;
    generate(&state, 1).await;

    let resp = activate(&state, JANE, "00001").await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let profile = body_json(resp).await;
    assert_eq!(profile["contact_name"], "Jane");

    let resp = activate(&state, BOB, "00001").await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "this tag is already registered");
    assert_eq!(body["retryable"], false);
  }

  #[tokio::test]
  async fn activation_requires_authentication() {
    let state = seeded_state().await;
    generate(&state, 1).await;

    let resp = send(
      state,
      "POST",
      "/api/activate",
      None,
      Some(json!({ "code": "00001", "contact_name": "X", "phone": "+1" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  }

  #[tokio::test]
  async fn activation_validates_contact_fields() {
    let state = seeded_state().await;
    generate(&state, 1).await;

    let resp = send(
      state.clone(),
      "POST",
      "/api/activate",
      Some(JANE),
      Some(json!({ "code": "00001", "contact_name": "", "phone": "+1" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // The identifier is still unbound after the failed attempt.
    let resp = send(state, "GET", "/api/pets/00001", Some(JANE), None).await;
    assert_eq!(body_json(resp).await["status"], "unbound");
  }

  #[tokio::test]
  async fn activation_of_unknown_code_is_not_found() {
    let state = seeded_state().await;
    let resp = activate(&state, JANE, "77777").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  // ── Ownership on the public view ──────────────────────────────────────────

  #[tokio::test]
  async fn bound_view_is_public_and_flags_the_owner() {
    let state = seeded_state().await;
    generate(&state, 1).await;
    activate(&state, JANE, "00001").await;

    // Anonymous finder: full public fields, not the owner.
    let resp = send(state.clone(), "GET", "/api/pets/00001", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "bound");
    assert_eq!(body["pet"]["name"], "Pipoca");
    assert_eq!(body["pet"]["phone"], "+15550100");
    assert_eq!(body["is_owner"], false);

    // The owner sees the same fields plus the ownership flag.
    let resp = send(state.clone(), "GET", "/api/pets/00001", Some(JANE), None).await;
    assert_eq!(body_json(resp).await["is_owner"], true);

    // A different signed-in tutor is not the owner.
    let resp = send(state, "GET", "/api/pets/00001", Some(BOB), None).await;
    assert_eq!(body_json(resp).await["is_owner"], false);
  }

  // ── Tutor routes ──────────────────────────────────────────────────────────

  async fn jane_profile_id(state: &AppState<SqliteStore>) -> String {
    let resp = send(state.clone(), "GET", "/api/tutor/pets", Some(JANE), None).await;
    let pets = body_json(resp).await;
    pets[0]["profile_id"].as_str().unwrap().to_owned()
  }

  #[tokio::test]
  async fn tutor_sees_only_their_own_pets() {
    let state = seeded_state().await;
    generate(&state, 2).await;
    activate(&state, JANE, "00001").await;
    activate(&state, BOB, "00002").await;

    let resp = send(state.clone(), "GET", "/api/tutor/pets", Some(JANE), None).await;
    let pets = body_json(resp).await;
    assert_eq!(pets.as_array().unwrap().len(), 1);
    assert_eq!(pets[0]["code"], "00001");

    let id = jane_profile_id(&state).await;
    let resp = send(
      state.clone(),
      "GET",
      &format!("/api/tutor/pets/{id}"),
      Some(BOB),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
  }

  #[tokio::test]
  async fn patch_updates_only_present_fields() {
    let state = seeded_state().await;
    generate(&state, 1).await;
    activate(&state, JANE, "00001").await;
    let id = jane_profile_id(&state).await;

    let resp = send(
      state.clone(),
      "PUT",
      &format!("/api/tutor/pets/{id}"),
      Some(JANE),
      Some(json!({ "breed": "Mixed", "channel": "call" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["breed"], "Mixed");
    assert_eq!(body["channel"], "call");
    // Untouched fields survive.
    assert_eq!(body["name"], "Pipoca");

    // Clearing a mandatory field is rejected.
    let resp = send(
      state.clone(),
      "PUT",
      &format!("/api/tutor/pets/{id}"),
      Some(JANE),
      Some(json!({ "phone": null })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // A non-owner cannot write at all.
    let resp = send(
      state,
      "PUT",
      &format!("/api/tutor/pets/{id}"),
      Some(BOB),
      Some(json!({ "name": "Hijacked" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
  }

  // ── Photos ────────────────────────────────────────────────────────────────

  async fn put_photo(
    state: &AppState<SqliteStore>,
    id: &str,
    who: (&str, &str),
    content_type: &str,
    bytes: &[u8],
  ) -> axum::response::Response {
    let req = Request::builder()
      .method("PUT")
      .uri(format!("/api/tutor/pets/{id}/photo"))
      .header(header::AUTHORIZATION, basic(who))
      .header(header::CONTENT_TYPE, content_type)
      .body(Body::from(bytes.to_vec()))
      .unwrap();
    router(state.clone()).oneshot(req).await.unwrap()
  }

  #[tokio::test]
  async fn photo_upload_sets_reference_and_delete_clears_it() {
    let state = seeded_state().await;
    generate(&state, 1).await;
    activate(&state, JANE, "00001").await;
    let id = jane_profile_id(&state).await;

    let resp = put_photo(&state, &id, JANE, "image/png", b"\x89PNG\r\n\x1a\nfake").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let photo = body["photo"].as_str().unwrap().to_owned();
    assert!(photo.starts_with("/photos/"), "photo ref: {photo}");

    // The file actually landed in the photos directory.
    let filename = photo.strip_prefix("/photos/").unwrap();
    assert!(state.config.photos_dir.join(filename).exists());

    // A patch that does not mention the photo keeps it.
    let resp = send(
      state.clone(),
      "PUT",
      &format!("/api/tutor/pets/{id}"),
      Some(JANE),
      Some(json!({ "notes": "friendly" })),
    )
    .await;
    assert_eq!(body_json(resp).await["photo"], photo.as_str());

    let resp = send(
      state.clone(),
      "DELETE",
      &format!("/api/tutor/pets/{id}/photo"),
      Some(JANE),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_json(resp).await["photo"].is_null());
  }

  #[tokio::test]
  async fn photo_upload_rejects_unknown_types_and_other_owners() {
    let state = seeded_state().await;
    generate(&state, 1).await;
    activate(&state, JANE, "00001").await;
    let id = jane_profile_id(&state).await;

    let resp = put_photo(&state, &id, JANE, "application/pdf", b"%PDF-").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = put_photo(&state, &id, BOB, "image/png", b"\x89PNG").await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
  }

  // ── Admin listing, detail, delete ─────────────────────────────────────────

  #[tokio::test]
  async fn listing_paginates_newest_first() {
    let state = seeded_state().await;
    generate(&state, 25).await;

    let resp = send(
      state.clone(),
      "GET",
      "/api/admin/identifiers?page=2&page_size=10",
      Some(ADMIN),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 10);
    assert_eq!(body["total"], 25);
    assert_eq!(body["total_pages"], 3);

    // Newest first: the top of page 1 is the highest code.
    let resp = send(
      state,
      "GET",
      "/api/admin/identifiers?page=1&page_size=10",
      Some(ADMIN),
      None,
    )
    .await;
    let body = body_json(resp).await;
    assert_eq!(body["items"][0]["code"], "00025");
  }

  #[tokio::test]
  async fn listing_filters_by_status() {
    let state = seeded_state().await;
    generate(&state, 3).await;
    activate(&state, JANE, "00002").await;

    let resp = send(
      state.clone(),
      "GET",
      "/api/admin/identifiers?filter=bound",
      Some(ADMIN),
      None,
    )
    .await;
    let body = body_json(resp).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["code"], "00002");
    assert_eq!(body["items"][0]["pet_name"], "Pipoca");

    let resp = send(
      state,
      "GET",
      "/api/admin/identifiers?filter=unbound",
      Some(ADMIN),
      None,
    )
    .await;
    assert_eq!(body_json(resp).await["items"].as_array().unwrap().len(), 2);
  }

  #[tokio::test]
  async fn detail_and_delete_lifecycle() {
    let state = seeded_state().await;
    generate(&state, 2).await;
    activate(&state, JANE, "00001").await;

    let resp = send(
      state.clone(),
      "GET",
      "/api/admin/identifiers?filter=unbound",
      Some(ADMIN),
      None,
    )
    .await;
    let body = body_json(resp).await;
    let unbound_id = body["items"][0]["identifier_id"].as_str().unwrap().to_owned();

    let resp = send(
      state.clone(),
      "GET",
      &format!("/api/admin/identifiers/{unbound_id}"),
      Some(ADMIN),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_json(resp).await["pet"].is_null());

    let resp = send(
      state.clone(),
      "DELETE",
      &format!("/api/admin/identifiers/{unbound_id}"),
      Some(ADMIN),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // A bound identifier refuses deletion.
    let resp = send(
      state.clone(),
      "GET",
      "/api/admin/identifiers?filter=bound",
      Some(ADMIN),
      None,
    )
    .await;
    let bound_id = body_json(resp).await["items"][0]["identifier_id"]
      .as_str()
      .unwrap()
      .to_owned();
    let resp = send(
      state,
      "DELETE",
      &format!("/api/admin/identifiers/{bound_id}"),
      Some(ADMIN),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  // ── Export ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn csv_export_has_header_and_canonical_urls() {
    let state = seeded_state().await;
    generate(&state, 2).await;

    let resp = send(
      state,
      "GET",
      "/api/admin/identifiers/export?format=csv",
      Some(ADMIN),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(ct.contains("text/csv"), "Content-Type: {ct}");

    let text = String::from_utf8(body_bytes(resp).await).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("https://pawtag.app/pet/00002"));
    assert!(lines[2].contains("https://pawtag.app/pet/00001"));
  }

  #[tokio::test]
  async fn zip_export_is_a_zip_and_requires_admin() {
    let state = seeded_state().await;
    generate(&state, 1).await;

    let resp = send(
      state.clone(),
      "GET",
      "/api/admin/identifiers/export?format=zip",
      Some(ADMIN),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body_bytes(resp).await;
    assert_eq!(&bytes[..2], b"PK");

    let resp = send(
      state,
      "GET",
      "/api/admin/identifiers/export?format=zip",
      Some(JANE),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
  }

  // ── Stats ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn stats_reflect_activations() {
    let state = seeded_state().await;
    generate(&state, 4).await;
    activate(&state, JANE, "00003").await;

    let resp = send(state, "GET", "/api/admin/stats", Some(ADMIN), None).await;
    let body = body_json(resp).await;
    assert_eq!(body["identifiers"], 4);
    assert_eq!(body["unbound"], 3);
    assert_eq!(body["bound"], 1);
    assert_eq!(body["profiles"], 1);
  }

  // ── Tag images ────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn tag_image_is_png_and_cacheable() {
    let state = seeded_state().await;
    generate(&state, 1).await;

    let resp = send(state.clone(), "GET", "/api/tags/00001", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert_eq!(ct, "image/png");
    let cc = resp.headers().get(header::CACHE_CONTROL).unwrap().to_str().unwrap();
    assert!(cc.contains("immutable"), "Cache-Control: {cc}");
    let bytes = body_bytes(resp).await;
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let resp = send(state, "GET", "/api/tags/54321", None, None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  // ── Auth edge cases ───────────────────────────────────────────────────────

  #[tokio::test]
  async fn wrong_password_and_garbage_headers_are_unauthorized() {
    let state = seeded_state().await;

    let resp = send(
      state.clone(),
      "GET",
      "/api/tutor/pets",
      Some(("jane@example.com", "wrong")),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = Request::builder()
      .method("GET")
      .uri("/api/tutor/pets")
      .header(header::AUTHORIZATION, "Basic !!!not-base64!!!")
      .body(Body::empty())
      .unwrap();
    let resp = router(state).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  }
}
