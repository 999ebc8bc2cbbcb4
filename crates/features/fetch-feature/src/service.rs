use std::sync::Arc;
use std::time::Duration;

use domain::{Console, User};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::error::FetchFeatureError;

/// A labeled fetch to run alongside others
#[derive(Debug, Clone)]
pub struct LabeledFetch {
    pub label: String,
    pub delay: Duration,
}

impl LabeledFetch {
    pub fn new(label: impl Into<String>, delay: Duration) -> Self {
        Self {
            label: label.into(),
            delay,
        }
    }
}

/// Outcome of running two fetches concurrently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairReport {
    /// Wall-clock time from issuing both fetches until both finished
    pub elapsed: Duration,
}

/// Whole seconds, truncated, as printed in progress lines
fn whole_seconds(delay: Duration) -> u64 {
    delay.as_secs()
}

/// Service for simulated data retrieval
pub struct FetchService;

impl FetchService {
    /// Issue a user fetch and return a handle to its completion
    ///
    /// The progress line is written before this returns, so anything the
    /// caller prints afterwards lands after it. The delay itself runs on a
    /// separately spawned task. Must be called within a Tokio runtime.
    pub fn start_user_fetch(
        delay: Duration,
        console: Arc<dyn Console>,
    ) -> JoinHandle<Result<User, FetchFeatureError>> {
        console.line(&format!(
            "Buscando o usuário em {} segundos...",
            whole_seconds(delay)
        ));
        debug!(delay_ms = delay.as_millis() as u64, "User fetch issued");

        tokio::spawn(async move {
            let user = tokio::spawn(async move {
                sleep(delay).await;
                User::sample()
            })
            .await?;

            console.line(&format!(
                "Usuário encontrado -> Id: {}, Nome: {}",
                user.id, user.name
            ));
            debug!(user_id = user.id, "User fetch finished");

            Ok::<_, FetchFeatureError>(user)
        })
    }

    /// Wait, then hand back a default-constructed `T`
    pub async fn fetch<T: Default>(delay: Duration, console: &dyn Console) -> T {
        Self::fetch_with(delay, console, T::default).await
    }

    /// Wait, then build the result with the caller's factory
    pub async fn fetch_with<T, F>(delay: Duration, console: &dyn Console, make: F) -> T
    where
        F: FnOnce() -> T,
    {
        console.line(&format!(
            "Buscando o resultado em {} segundos...",
            whole_seconds(delay)
        ));

        sleep(delay).await;

        debug!(
            delay_ms = delay.as_millis() as u64,
            result = std::any::type_name::<T>(),
            "Generic fetch finished"
        );
        make()
    }

    /// Issue a labeled fetch that only reports progress
    ///
    /// Like [`FetchService::start_user_fetch`], the start line is written
    /// before this returns.
    pub fn start_labeled_fetch(fetch: LabeledFetch, console: Arc<dyn Console>) -> JoinHandle<()> {
        console.line(&format!(
            "Buscando {}, vai demorar {} segundos...",
            fetch.label,
            whole_seconds(fetch.delay)
        ));

        tokio::spawn(async move {
            sleep(fetch.delay).await;
            console.line(&format!("{} carregado!", fetch.label));
            debug!(label = %fetch.label, "Labeled fetch finished");
        })
    }

    /// Run two labeled fetches at once and wait for both
    ///
    /// Total wait is the longer of the two delays, not their sum.
    pub async fn fetch_pair(
        first: LabeledFetch,
        second: LabeledFetch,
        console: Arc<dyn Console>,
    ) -> Result<PairReport, FetchFeatureError> {
        let started = Instant::now();

        let first = Self::start_labeled_fetch(first, console.clone());
        let second = Self::start_labeled_fetch(second, console.clone());

        console.line("Ambas as buscas começaram ao mesmo tempo...");

        Self::join_both(first, second).await?;

        console.line("As duas buscas foram concluídas!");

        let elapsed = started.elapsed();
        debug!(elapsed_ms = elapsed.as_millis() as u64, "Both fetches finished");

        Ok(PairReport { elapsed })
    }

    /// Wait for both fetches, even when one of them fails
    ///
    /// Neither task is left running detached; the first failure is returned
    /// once both have settled.
    pub async fn join_both(
        first: JoinHandle<()>,
        second: JoinHandle<()>,
    ) -> Result<(), FetchFeatureError> {
        let (first, second) = tokio::join!(first, second);
        first?;
        second?;
        Ok(())
    }
}
