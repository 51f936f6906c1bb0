use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per player. Holding the guard serializes every
/// read-modify-write on that player's session; different players never wait
/// on each other.
#[derive(Debug, Default)]
pub struct PlayerLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl PlayerLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, player_id: &str) -> OwnedMutexGuard<()> {
        // Clone out of the map so the shard isn't held across the await
        let lock = self.locks.entry(player_id.to_string()).or_default().clone();
        lock.lock_owned().await
    }

    /// Drop entries nobody holds or waits on. Returns how many were removed.
    pub fn prune_idle(&self) -> usize {
        let before = self.locks.len();
        self.locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        before - self.locks.len()
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_same_player_is_serialized() {
        let locks = Arc::new(PlayerLocks::new());
        let guard = locks.acquire("alice").await;

        let waiter = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire("alice").await;
            })
        };

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!waiter.is_finished());

        drop(guard);
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_different_players_do_not_block() {
        let locks = PlayerLocks::new();
        let _alice = locks.acquire("alice").await;

        let bob = tokio::time::timeout(Duration::from_secs(1), locks.acquire("bob")).await;
        assert!(bob.is_ok());
    }

    #[tokio::test]
    async fn test_prune_keeps_held_locks() {
        let locks = PlayerLocks::new();
        let held = locks.acquire("alice").await;
        drop(locks.acquire("bob").await);

        assert_eq!(locks.len(), 2);
        assert_eq!(locks.prune_idle(), 1);
        assert_eq!(locks.len(), 1);

        drop(held);
        assert_eq!(locks.prune_idle(), 1);
        assert!(locks.is_empty());
    }
}
