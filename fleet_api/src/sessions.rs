use std::{collections::HashMap, sync::Arc};

use axum::http::HeaderMap;
use fleet_core::matching::vehicle_match::MatchOutcome;
use jiff::{SignedDuration, Timestamp};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::ApiError;

pub const SESSION_HEADER: &str = "x-session-id";
pub const DEFAULT_SESSION_TTL: SignedDuration = SignedDuration::from_mins(30);
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// Latest match outcome per browser session. An outcome older than `ttl` counts as an ended
/// session and is dropped on the next store.
pub struct MatchSessions {
    outcomes: RwLock<HashMap<Uuid, Arc<MatchOutcome>>>,
    ttl: SignedDuration,
    max_sessions: usize,
}

impl Default for MatchSessions {
    fn default() -> Self {
        MatchSessions::new(DEFAULT_SESSION_TTL, DEFAULT_MAX_SESSIONS)
    }
}

impl MatchSessions {
    pub fn new(ttl: SignedDuration, max_sessions: usize) -> Self {
        MatchSessions {
            outcomes: RwLock::new(HashMap::new()),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    fn is_expired(&self, outcome: &MatchOutcome, now: Timestamp) -> bool {
        now.duration_since(outcome.computed_at) >= self.ttl
    }

    pub async fn store(&self, session_id: Uuid, outcome: MatchOutcome) -> Arc<MatchOutcome> {
        let now = Timestamp::now();
        let outcome = Arc::new(outcome);
        let mut outcomes = self.outcomes.write().await;

        let before = outcomes.len();
        outcomes.retain(|_, stored| !self.is_expired(stored, now));

        while outcomes.len() >= self.max_sessions && !outcomes.contains_key(&session_id) {
            let Some(oldest) = outcomes
                .iter()
                .min_by_key(|(_, stored)| stored.computed_at)
                .map(|(id, _)| *id)
            else {
                break;
            };
            outcomes.remove(&oldest);
        }

        if outcomes.len() < before {
            debug!(evicted = before - outcomes.len(), "Match sessions evicted");
        }

        outcomes.insert(session_id, Arc::clone(&outcome));
        outcome
    }

    pub async fn latest(&self, session_id: &Uuid) -> Option<Arc<MatchOutcome>> {
        let now = Timestamp::now();
        self.outcomes
            .read()
            .await
            .get(session_id)
            .filter(|outcome| !self.is_expired(outcome, now))
            .cloned()
    }

    pub async fn clear(&self, session_id: &Uuid) -> bool {
        self.outcomes.write().await.remove(session_id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.outcomes.read().await.len()
    }
}

pub fn session_id_from_headers(headers: &HeaderMap) -> Result<Option<Uuid>, ApiError> {
    let Some(value) = headers.get(SESSION_HEADER) else {
        return Ok(None);
    };

    value
        .to_str()
        .ok()
        .and_then(|value| Uuid::parse_str(value.trim()).ok())
        .map(Some)
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid {SESSION_HEADER} header")))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn outcome_at(order_id: &str, computed_at: Timestamp) -> MatchOutcome {
        MatchOutcome {
            order_id: order_id.to_owned(),
            min_score: 70.0,
            heuristic_only: true,
            notices: vec![],
            matches: vec![],
            computed_at,
        }
    }

    fn outcome(order_id: &str) -> MatchOutcome {
        outcome_at(order_id, Timestamp::now())
    }

    fn minutes_ago(minutes: i64) -> Timestamp {
        Timestamp::now()
            .checked_sub(SignedDuration::from_mins(minutes))
            .unwrap()
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let sessions = MatchSessions::default();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        sessions.store(first, outcome("ORD001")).await;
        sessions.store(second, outcome("ORD002")).await;
        sessions.store(first, outcome("ORD003")).await;

        assert_eq!(sessions.len().await, 2);
        assert_eq!(sessions.latest(&first).await.unwrap().order_id, "ORD003");
        assert_eq!(sessions.latest(&second).await.unwrap().order_id, "ORD002");

        assert!(sessions.clear(&first).await);
        assert!(!sessions.clear(&first).await);
        assert!(sessions.latest(&first).await.is_none());
        assert!(sessions.latest(&second).await.is_some());
    }

    #[tokio::test]
    async fn test_expired_sessions_are_evicted_on_store() {
        let sessions = MatchSessions::new(SignedDuration::from_mins(30), 100);
        let stale = Uuid::new_v4();

        sessions
            .store(stale, outcome_at("ORD001", minutes_ago(45)))
            .await;
        assert!(sessions.latest(&stale).await.is_none());
        assert_eq!(sessions.len().await, 1);

        for _ in 0..10 {
            sessions.store(Uuid::new_v4(), outcome("ORD002")).await;
        }

        assert_eq!(sessions.len().await, 10);
        assert!(!sessions.clear(&stale).await);
    }

    #[tokio::test]
    async fn test_session_count_is_capped() {
        let sessions = MatchSessions::new(SignedDuration::from_mins(30), 3);
        let oldest = Uuid::new_v4();
        sessions
            .store(oldest, outcome_at("ORD001", minutes_ago(5)))
            .await;

        let mut newest = oldest;
        for _ in 0..3 {
            newest = Uuid::new_v4();
            sessions.store(newest, outcome("ORD002")).await;
        }

        assert_eq!(sessions.len().await, 3);
        assert!(sessions.latest(&oldest).await.is_none());
        assert!(sessions.latest(&newest).await.is_some());

        // Re-storing an existing session does not evict anyone.
        sessions.store(newest, outcome("ORD003")).await;
        assert_eq!(sessions.len().await, 3);
    }

    #[test]
    fn test_session_header() {
        let mut headers = HeaderMap::new();
        assert!(session_id_from_headers(&headers).unwrap().is_none());

        let session_id = Uuid::new_v4();
        headers.insert(
            SESSION_HEADER,
            HeaderValue::from_str(&session_id.to_string()).unwrap(),
        );
        assert_eq!(session_id_from_headers(&headers).unwrap(), Some(session_id));

        headers.insert(SESSION_HEADER, HeaderValue::from_static("not-a-uuid"));
        assert!(matches!(
            session_id_from_headers(&headers),
            Err(ApiError::BadRequest(_))
        ));
    }
}
