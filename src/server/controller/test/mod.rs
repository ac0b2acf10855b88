use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use test_utils::serenity::{create_test_member, member::MemberFactory};
use tower::ServiceExt;

use crate::{
    model::{api::ErrorDto, discord::GuildUsersDto, health::HealthDto},
    server::{
        bot::stub::{StubDirectory, StubFetch},
        router,
        state::AppState,
        util::avatar::AvatarUrls,
    },
};

mod guild;

fn app(directory: StubDirectory) -> Router {
    router::app(AppState::new(
        Arc::new(directory),
        AvatarUrls::new("https://cdn.discordapp.com"),
    ))
}

/// Sends a GET request and decodes the JSON body.
async fn get_json<T: DeserializeOwned>(app: Router, uri: &str) -> (StatusCode, T) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}
