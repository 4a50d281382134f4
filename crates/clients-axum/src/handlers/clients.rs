//! Client handlers - CRUD operations on client records.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;

use clients_core::{Client, ClientForm, Page};

use crate::dto::{ClientMessage, MessageBody};
use crate::error::HttpError;
use crate::state::AppState;

/// List all clients.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Client>>, HttpError> {
    Ok(Json(state.core.clients().list().await?))
}

/// List one zero-based page of clients.
pub async fn list_page(
    State(state): State<AppState>,
    page: Result<Path<u32>, PathRejection>,
) -> Result<Json<Page<Client>>, HttpError> {
    let Path(page) = page?;
    Ok(Json(state.core.clients().list_page(page).await?))
}

/// Get a single client by ID.
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Client>, HttpError> {
    let Path(id) = id?;
    Ok(Json(state.core.clients().get(id).await?))
}

/// Create a new client.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ClientForm>, JsonRejection>,
) -> Result<(StatusCode, Json<ClientMessage>), HttpError> {
    let Json(form) = payload?;
    let client = state.core.clients().create(form).await?;

    Ok((
        StatusCode::CREATED,
        Json(ClientMessage {
            message: "The client was created successfully".to_string(),
            client,
        }),
    ))
}

/// Update an existing client's details.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ClientForm>, JsonRejection>,
) -> Result<(StatusCode, Json<ClientMessage>), HttpError> {
    let Path(id) = id?;
    let Json(form) = payload?;
    let client = state.core.clients().update(id, form).await?;

    Ok((
        StatusCode::CREATED,
        Json(ClientMessage {
            message: "The client was updated successfully".to_string(),
            client,
        }),
    ))
}

/// Delete a client and its photo.
pub async fn remove(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageBody>, HttpError> {
    let Path(id) = id?;
    state.core.clients().delete(id).await?;
    Ok(Json(MessageBody::new("The client was deleted successfully")))
}

