use serde::{Deserialize, Serialize};
use std::sync::Arc;
use warp::{Filter, Reply};
use warp::http::StatusCode;

use crate::chat::ChatBot;
use crate::error::ServiceError;
use crate::game_service::GameService;
use game_types::{ChatMessage, ErrorResponse, GameError, GuessRequest, StartGameRequest};

pub mod chat;
pub mod commands;
pub mod config;
pub mod error;
pub mod game_service;
pub mod player_locks;
pub mod render;

const MAX_BODY_BYTES: u64 = 4 * 1024;

#[derive(Deserialize)]
struct LeaderboardQuery {
    limit: Option<u64>,
}

type JsonReply = warp::reply::WithStatus<warp::reply::Json>;

pub fn create_routes(
    service: Arc<GameService>,
    chat_bot: ChatBot,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let service_filter = warp::any().map({
        let service = service.clone();
        move || service.clone()
    });

    let chat_filter = warp::any().map(move || chat_bot.clone());

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    let start_game = warp::path!("players" / String / "game")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json::<StartGameRequest>())
        .and(service_filter.clone())
        .and_then(handle_start_game);

    let end_game = warp::path!("players" / String / "game")
        .and(warp::delete())
        .and(service_filter.clone())
        .and_then(handle_end_game);

    let hint = warp::path!("players" / String / "hint")
        .and(warp::post())
        .and(service_filter.clone())
        .and_then(handle_hint);

    let guess = warp::path!("players" / String / "guess")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json::<GuessRequest>())
        .and(service_filter.clone())
        .and_then(handle_guess);

    let stats = warp::path!("players" / String / "stats")
        .and(warp::get())
        .and(service_filter.clone())
        .and_then(handle_player_stats);

    let leaderboard = warp::path!("leaderboard")
        .and(warp::get())
        .and(warp::query::<LeaderboardQuery>())
        .and(service_filter.clone())
        .and_then(handle_leaderboard_request);

    // Webhook for the chat transport
    let chat = warp::path!("chat")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json::<ChatMessage>())
        .and(chat_filter)
        .and_then(handle_chat_message);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "DELETE"]);

    health
        .or(start_game)
        .or(end_game)
        .or(hint)
        .or(guess)
        .or(stats)
        .or(leaderboard)
        .or(chat)
        .with(cors)
        .with(warp::log("four_letter_game"))
}

pub fn status_for(error: &GameError) -> StatusCode {
    match error {
        GameError::NoActiveSession | GameError::PlayerNotFound => StatusCode::NOT_FOUND,
        GameError::SessionAlreadyActive | GameError::HintAlreadyUsed => StatusCode::CONFLICT,
        GameError::InvalidGuessFormat { .. } => StatusCode::BAD_REQUEST,
        GameError::StorageUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn reply_with<T: Serialize>(result: Result<T, ServiceError>) -> JsonReply {
    match result {
        Ok(value) => warp::reply::with_status(warp::reply::json(&value), StatusCode::OK),
        Err(err) => {
            if let ServiceError::Storage(db_err) = &err {
                tracing::error!("Storage failure: {}", db_err);
            }
            let error = err.kind();
            let status = status_for(&error);
            warp::reply::with_status(warp::reply::json(&ErrorResponse { error }), status)
        }
    }
}

async fn handle_start_game(
    player_id: String,
    request: StartGameRequest,
    service: Arc<GameService>,
) -> Result<JsonReply, warp::Rejection> {
    Ok(reply_with(
        service.start_game(&player_id, &request.display_name).await,
    ))
}

async fn handle_end_game(
    player_id: String,
    service: Arc<GameService>,
) -> Result<JsonReply, warp::Rejection> {
    Ok(reply_with(service.end_game(&player_id).await))
}

async fn handle_hint(
    player_id: String,
    service: Arc<GameService>,
) -> Result<JsonReply, warp::Rejection> {
    Ok(reply_with(service.hint(&player_id).await))
}

async fn handle_guess(
    player_id: String,
    request: GuessRequest,
    service: Arc<GameService>,
) -> Result<JsonReply, warp::Rejection> {
    Ok(reply_with(service.guess(&player_id, &request.text).await))
}

async fn handle_player_stats(
    player_id: String,
    service: Arc<GameService>,
) -> Result<JsonReply, warp::Rejection> {
    let stats = service
        .player_stats(&player_id)
        .await
        .and_then(|stats| stats.ok_or(ServiceError::Game(GameError::PlayerNotFound)));
    Ok(reply_with(stats))
}

async fn handle_leaderboard_request(
    query: LeaderboardQuery,
    service: Arc<GameService>,
) -> Result<JsonReply, warp::Rejection> {
    let limit = query.limit.unwrap_or(10).clamp(1, 100); // Default 10, max 100

    Ok(reply_with(service.leaderboard(limit).await))
}

async fn handle_chat_message(
    message: ChatMessage,
    chat_bot: ChatBot,
) -> Result<warp::reply::Response, warp::Rejection> {
    match chat_bot.handle_message(&message).await {
        Some(reply) => Ok(warp::reply::json(&reply).into_response()),
        None => Ok(warp::reply::with_status(warp::reply(), StatusCode::NO_CONTENT).into_response()),
    }
}
