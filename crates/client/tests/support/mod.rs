//! In-process mock of the backend, bound to an ephemeral port.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};

use ecclesia_client::{ClientConfig, MemoryTokenStore, Session, TokenStore};

pub const GOOD_TOKEN: &str = "good-token";
pub const STALE_TOKEN: &str = "stale-token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub member_id: i64,
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub len: usize,
}

#[derive(Debug, Default)]
pub struct Recorded {
    /// `(route, Authorization header)` per request.
    pub authorization: Vec<(&'static str, Option<String>)>,
    pub uploads: Vec<Upload>,
    pub statuses: Vec<(i64, bool)>,
    pub role_updates: Vec<(i64, Vec<String>)>,
    pub meeting_bodies: Vec<Value>,
    pub document_bodies: Vec<Value>,
    pub registrations: Vec<Value>,
    pub credential_queries: Vec<HashMap<String, String>>,
    pub deleted_members: Vec<i64>,
    pub updated_members: Vec<i64>,
}

pub type Shared = Arc<Mutex<Recorded>>;

pub struct MockBackend {
    pub base_url: String,
    pub recorded: Shared,
    handle: tokio::task::JoinHandle<()>,
}

impl MockBackend {
    pub async fn spawn() -> Self {
        let recorded = Shared::default();
        let app = router(recorded.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{addr}");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            recorded,
            handle,
        }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            api_url: format!("{}/api", self.base_url),
            auth_url: format!("{}/auth", self.base_url),
            cep_url: format!("{}/cep", self.base_url),
            token_file: None,
            timeout: Duration::from_secs(5),
        }
    }

    pub fn session_with(&self, store: Arc<dyn TokenStore>) -> Session {
        Session::connect(&self.config(), store).unwrap()
    }

    /// Session already holding a valid token, bootstrapped.
    pub async fn signed_in(&self) -> (Session, Arc<MemoryTokenStore>) {
        let store = Arc::new(MemoryTokenStore::with_access_token(GOOD_TOKEN));
        let session = self.session_with(store.clone());
        session.bootstrap().await;
        (session, store)
    }

    pub fn auth_headers_for(&self, route: &str) -> Vec<Option<String>> {
        self.recorded
            .lock()
            .unwrap()
            .authorization
            .iter()
            .filter(|(r, _)| *r == route)
            .map(|(_, h)| h.clone())
            .collect()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn record_auth(state: &Shared, route: &'static str, headers: &HeaderMap) -> Option<String> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .lock()
        .unwrap()
        .authorization
        .push((route, value.clone()));
    value
}

fn is_good(auth: &Option<String>) -> bool {
    auth.as_deref() == Some(format!("Bearer {GOOD_TOKEN}").as_str())
}

fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": "error", "message": message }))).into_response()
}

pub fn member_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "fullName": name,
        "cpf": "12345678901",
        "rg": "1234567",
        "telephone": "81999990000",
        "email": "someone@example.org",
        "dateOfBirth": "1990-05-01",
        "baptismDate": "2005-06-01",
        "entryDate": "2006-01-01",
        "active": true,
        "address": {
            "street": "Rua A", "number": "10", "complement": null,
            "neighborhood": "Centro", "city": "Recife", "state": "PE",
            "country": "Brasil", "nationality": "Brasileira", "zipCode": "50000000"
        },
        "idChurch": 3,
        "churchName": "Igreja Central",
        "photoUrl": null
    })
}

fn router(state: Shared) -> Router {
    let auth = Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/me", get(auth_me));

    let api = Router::new()
        .route("/users/me", get(users_me))
        .route("/members", get(list_members).post(create_member))
        .route("/members/:id", put(update_member).delete(delete_member))
        .route("/members/:id/photo", post(upload_photo))
        .route("/meetings", get(list_meetings).post(create_meeting))
        .route("/meetings/:id/download", get(download_meeting))
        .route("/credentials", get(credentials))
        .route("/dashboard/stats", get(dashboard))
        .route("/roles", get(roles))
        .route("/permissions", get(permissions))
        .route("/roles/:id/permissions", put(update_role))
        .route("/admin/users/:id/status", patch(user_status))
        .route("/documents/generate", post(generate_document))
        .route("/templates/:kind", get(template));

    Router::new()
        .nest("/auth", auth)
        .nest("/api", api)
        .route("/cep/:cep/json/", get(cep))
        .with_state(state)
}

async fn login(Json(body): Json<Value>) -> Response {
    match body["password"].as_str() {
        Some("secret") => {
            Json(json!({ "accessToken": GOOD_TOKEN, "refreshToken": "refresh-1" })).into_response()
        }
        Some("stale") => {
            Json(json!({ "accessToken": STALE_TOKEN, "refreshToken": "refresh-2" })).into_response()
        }
        _ => json_error(StatusCode::UNAUTHORIZED, "Bad credentials"),
    }
}

async fn register(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    if body["username"] == "taken" {
        return json_error(StatusCode::CONFLICT, "Username already exists");
    }
    state.lock().unwrap().registrations.push(body);
    StatusCode::CREATED.into_response()
}

async fn auth_me(headers: HeaderMap) -> Response {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    if is_good(&auth) {
        Json(json!({ "username": "ana", "email": "ana@example.org", "role": "ADMIN" })).into_response()
    } else {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

async fn users_me(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let auth = record_auth(&state, "users/me", &headers);
    if is_good(&auth) {
        Json(json!({
            "id": 1, "username": "ana", "email": "ana@example.org",
            "role": "ROLE_ADMIN", "enabled": true
        }))
        .into_response()
    } else {
        // Plain-text body: clients fall back to their own message.
        (StatusCode::UNAUTHORIZED, "token expired").into_response()
    }
}

async fn list_members(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let auth = record_auth(&state, "members", &headers);
    if !is_good(&auth) {
        return json_error(StatusCode::UNAUTHORIZED, "Full authentication is required");
    }
    Json(json!([member_json(1, "Ana Souza"), member_json(2, "Bruno Lima")])).into_response()
}

async fn create_member(State(state): State<Shared>, headers: HeaderMap, Json(mut body): Json<Value>) -> Response {
    record_auth(&state, "members:create", &headers);
    body["id"] = json!(99);
    (StatusCode::CREATED, Json(body)).into_response()
}

/// Answers 204 with no body; id 500 answers 200 with a non-JSON body.
async fn update_member(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    if id == 500 {
        return (StatusCode::OK, "<html>proxy page</html>").into_response();
    }
    state.lock().unwrap().updated_members.push(id);
    StatusCode::NO_CONTENT.into_response()
}

async fn delete_member(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    if id == 404 {
        return json_error(StatusCode::NOT_FOUND, "Member not found");
    }
    state.lock().unwrap().deleted_members.push(id);
    StatusCode::NO_CONTENT.into_response()
}

async fn upload_photo(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let len = field.bytes().await.map(|b| b.len()).unwrap_or_default();
        state.lock().unwrap().uploads.push(Upload {
            member_id: id,
            field: name,
            file_name,
            content_type,
            len,
        });
    }
    StatusCode::OK.into_response()
}

async fn list_meetings() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "boom" }))).into_response()
}

async fn create_meeting(State(state): State<Shared>, Json(mut body): Json<Value>) -> Response {
    state.lock().unwrap().meeting_bodies.push(body.clone());
    body["id"] = json!(1);
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn download_meeting(Path(id): Path<i64>) -> Response {
    (
        [(header::CONTENT_TYPE, "application/pdf")],
        format!("%PDF-1.4 meeting {id}"),
    )
        .into_response()
}

async fn credentials(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let minister = query.get("type").map(String::as_str) == Some("ministro");
    let id: i64 = query.get("id").and_then(|v| v.parse().ok()).unwrap_or_default();
    state.lock().unwrap().credential_queries.push(query);
    let position = if minister { json!("SHEPHERD") } else { Value::Null };
    Json(json!({
        "id": id,
        "fullName": "Ana Souza",
        "dateOfBirth": "1990-05-01",
        "cpf": "12345678901",
        "churchName": "Igreja Central",
        "churchTradeName": "Central",
        "position": position,
        "photoUrl": "/uploads/1.png"
    }))
    .into_response()
}

async fn dashboard() -> Response {
    Json(json!({
        "totalMembers": 120, "totalMinisters": 14, "totalChurches": 3, "totalLeaders": 9
    }))
    .into_response()
}

async fn roles() -> Response {
    Json(json!([
        { "id": 1, "name": "ROLE_ADMIN", "permissions": [
            { "id": 1, "name": "MEMBER_READ" }, { "id": 2, "name": "MEMBER_WRITE" } ] },
        { "id": 2, "name": "ROLE_SECRETARY", "permissions": [ { "id": 1, "name": "MEMBER_READ" } ] }
    ]))
    .into_response()
}

async fn permissions() -> Response {
    Json(json!([
        { "id": 1, "name": "MEMBER_READ" },
        { "id": 2, "name": "MEMBER_WRITE" },
        { "id": 3, "name": "CHURCH_WRITE" }
    ]))
    .into_response()
}

async fn update_role(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let names: Vec<String> = body["permissionNames"]
        .as_array()
        .map(|a| a.iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
        .unwrap_or_default();
    state.lock().unwrap().role_updates.push((id, names.clone()));
    let permissions: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, n)| json!({ "id": i + 1, "name": n }))
        .collect();
    Json(json!({ "id": id, "name": "ROLE_SECRETARY", "permissions": permissions })).into_response()
}

async fn user_status(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let enabled = body["enabled"].as_bool().unwrap_or_default();
    state.lock().unwrap().statuses.push((id, enabled));
    StatusCode::NO_CONTENT.into_response()
}

async fn generate_document(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    state.lock().unwrap().document_bodies.push(body);
    (
        [(header::CONTENT_TYPE, "application/pdf")],
        b"%PDF-1.4 document".to_vec(),
    )
        .into_response()
}

async fn template(Path(kind): Path<String>) -> Response {
    if kind == "COMMUNICATION_OFFICE" {
        "Prezados irmãos,\n\nComunicamos que...".into_response()
    } else {
        json_error(StatusCode::NOT_FOUND, "Template not found")
    }
}

async fn cep(Path(cep): Path<String>) -> Response {
    if cep == "01001000" {
        Json(json!({
            "cep": "01001-000", "logradouro": "Praça da Sé", "bairro": "Sé",
            "localidade": "São Paulo", "uf": "SP"
        }))
        .into_response()
    } else {
        Json(json!({ "erro": true })).into_response()
    }
}
