//! # Users Module
//!
//! Lists and creates user documents in the `users` collection.

use crate::modules::storage_error;
use crate::SharedStore;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use modulith_core::{ComposeError, Module};
use modulith_http::RouteProvider;
use modulith_store::Document;
use std::sync::Arc;

const COLLECTION: &str = "users";

/// Build the users module against a shared store.
pub fn module(store: SharedStore) -> Result<Module, ComposeError> {
    let mut provider = RouteProvider::new();
    provider.add_route(move |router| {
        let routes = Router::new()
            .route("/users", get(list_users).post(create_user))
            .with_state(Arc::clone(&store));
        router.merge(routes)
    });

    let mut module = Module::new("users");
    module.add_provider(Box::new(provider))?;
    Ok(module)
}

async fn list_users(State(store): State<SharedStore>) -> Response {
    let collection = match store.lock().await.collection(COLLECTION) {
        Ok(collection) => collection,
        Err(e) => return storage_error(e),
    };
    match collection.find(&serde_json::json!({})).await {
        Ok(documents) => (StatusCode::OK, Json(documents)).into_response(),
        Err(e) => storage_error(e),
    }
}

async fn create_user(
    State(store): State<SharedStore>,
    Json(document): Json<Document>,
) -> Response {
    let collection = match store.lock().await.collection(COLLECTION) {
        Ok(collection) => collection,
        Err(e) => return storage_error(e),
    };
    match collection.insert_one(document.clone()).await {
        Ok(()) => (StatusCode::CREATED, Json(document)).into_response(),
        Err(e) => storage_error(e),
    }
}
