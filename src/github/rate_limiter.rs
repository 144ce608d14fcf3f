use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use reqwest::Response;
use tokio::sync::Mutex;
use tokio::time::sleep;

/// Tracks the token's remaining GitHub quota from response headers and
/// parks callers until the reset window when the quota is exhausted.
/// The pipeline issues calls one at a time, so this is politeness around
/// each request rather than admission control for concurrent work.
pub struct RateLimiter {
    state: Mutex<QuotaState>,
}

struct QuotaState {
    remaining: u32,
    reset_at: Option<Instant>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QuotaState {
                remaining: 5000,
                reset_at: None,
            }),
        }
    }

    /// Blocks until a request may be issued.
    pub async fn wait(&self) {
        let wait_for = {
            let state = self.state.lock().await;
            match (state.remaining, state.reset_at) {
                (0, Some(reset_at)) => reset_at.checked_duration_since(Instant::now()),
                _ => None,
            }
        };

        if let Some(duration) = wait_for {
            tracing::info!("GitHub quota exhausted, waiting {:?} for reset", duration);
            sleep(duration).await;
        }
    }

    /// Records `x-ratelimit-*` headers from a completed response.
    pub async fn update_from_response(&self, response: &Response) {
        let remaining = header_value(response, "x-ratelimit-remaining");
        let reset_epoch: Option<u64> = header_value(response, "x-ratelimit-reset");

        let Some(remaining) = remaining else { return };

        let mut state = self.state.lock().await;
        state.remaining = remaining;

        if let Some(reset_epoch) = reset_epoch {
            let now_epoch = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            if reset_epoch > now_epoch {
                state.reset_at =
                    Some(Instant::now() + Duration::from_secs(reset_epoch - now_epoch));
            }
        }
    }

    pub async fn remaining(&self) -> u32 {
        self.state.lock().await.remaining
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

fn header_value<T: std::str::FromStr>(response: &Response, name: &str) -> Option<T> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}
