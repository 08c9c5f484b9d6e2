//! Contact routes
//!
//! Nested under `/users/:user_id/contacts`; the path's user id selects whose
//! contacts are visible.

use crate::error::ApiResult;
use crate::routes::extract::ApiJson;
use crate::repositories::ContactInput;
use crate::services::ContactService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use contact_list_shared::{Contact, ContactRequest, ContactSearchQuery};
use uuid::Uuid;

/// Create contact routes
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contacts).post(create_contact))
        .route("/search", get(search_contacts))
        .route("/:contact_id", put(update_contact).delete(delete_contact))
}

impl From<ContactRequest> for ContactInput {
    fn from(req: ContactRequest) -> Self {
        Self {
            name: req.name,
            phone: req.phone,
        }
    }
}

/// GET /api/v1/users/:user_id/contacts - List a user's contacts
async fn list_contacts(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Contact>>> {
    let contacts = ContactService::list(state.contacts(), user_id).await?;
    Ok(Json(contacts))
}

/// GET /api/v1/users/:user_id/contacts/search?text= - Substring search
async fn search_contacts(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<ContactSearchQuery>,
) -> ApiResult<Json<Vec<Contact>>> {
    let contacts = ContactService::search(state.contacts(), user_id, &query.text).await?;
    Ok(Json(contacts))
}

/// POST /api/v1/users/:user_id/contacts - Add a contact
async fn create_contact(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    ApiJson(req): ApiJson<ContactRequest>,
) -> ApiResult<(StatusCode, Json<Contact>)> {
    let contact = ContactService::create(state.contacts(), user_id, req.into()).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// PUT /api/v1/users/:user_id/contacts/:contact_id - Replace name and phone
async fn update_contact(
    State(state): State<AppState>,
    Path((user_id, contact_id)): Path<(Uuid, Uuid)>,
    ApiJson(req): ApiJson<ContactRequest>,
) -> ApiResult<Json<Contact>> {
    let contact =
        ContactService::update(state.contacts(), user_id, contact_id, req.into()).await?;
    Ok(Json(contact))
}

/// DELETE /api/v1/users/:user_id/contacts/:contact_id - Remove a contact
async fn delete_contact(
    State(state): State<AppState>,
    Path((user_id, contact_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<Contact>> {
    let contact = ContactService::delete(state.contacts(), user_id, contact_id).await?;
    Ok(Json(contact))
}
