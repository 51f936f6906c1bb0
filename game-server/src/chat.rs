use std::sync::Arc;
use tracing::{error, info};

use crate::commands::Command;
use crate::game_service::GameService;
use crate::render;
use game_types::{ChatMessage, ChatReply};

/// Routes chat text to the game service and renders the reply
#[derive(Clone)]
pub struct ChatBot {
    service: Arc<GameService>,
    leaderboard_size: u64,
}

impl ChatBot {
    pub fn new(service: Arc<GameService>, leaderboard_size: u64) -> Self {
        Self {
            service,
            leaderboard_size,
        }
    }

    /// Returns `None` when the message needs no answer
    pub async fn handle_message(&self, message: &ChatMessage) -> Option<ChatReply> {
        let command = Command::parse(&message.text)?;
        let player_id = message.player_id.as_str();

        let result = match command {
            Command::Welcome => self
                .service
                .register_player(player_id, &message.display_name)
                .await
                .map(|_| render::welcome()),
            Command::Play => self
                .service
                .start_game(player_id, &message.display_name)
                .await
                .map(|outcome| render::start(&outcome)),
            Command::Hint => self
                .service
                .hint(player_id)
                .await
                .map(|outcome| render::hint(&outcome)),
            Command::End => self
                .service
                .end_game(player_id)
                .await
                .map(|outcome| render::end(&outcome)),
            Command::Leaderboard => self
                .service
                .leaderboard(self.leaderboard_size)
                .await
                .map(|board| render::leaderboard(&board)),
            Command::Stats => self
                .service
                .player_stats(player_id)
                .await
                .map(|stats| render::stats(stats.as_ref())),
            Command::Guess(text) => self
                .service
                .guess(player_id, &text)
                .await
                .map(|outcome| render::guess(&outcome)),
            Command::Unknown(name) => Ok(render::unknown_command(&name)),
        };

        let reply = result.unwrap_or_else(|err| {
            let kind = err.kind();
            if kind.is_user_correctable() {
                info!("Player {} action rejected: {}", player_id, kind);
            } else {
                error!("Action failed for player {}: {}", player_id, err);
            }
            render::error(&kind)
        });

        Some(ChatReply { reply })
    }
}
