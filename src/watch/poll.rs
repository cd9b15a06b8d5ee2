use cbb_api::GameRecord;
use cbb_api::client::{ApiError, ScoreboardSource};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::future::Future;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Time between the end of one tick's render and the start of the next fetch.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// What a single tick produced, handed to the sink to draw.
#[derive(Debug, Clone, Copy)]
pub enum Tick<'a> {
    Updated(&'a GameRecord),
    FetchFailed(&'a ApiError),
}

/// Where ticks are drawn. A render error ends the session.
pub trait TickSink {
    fn render(&mut self, tick: Tick<'_>) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The game went final; its last state was rendered.
    Completed { ticks: u32 },
    /// Shutdown arrived before the game ended.
    Cancelled { ticks: u32 },
}

enum Step {
    Ticked(anyhow::Result<bool>),
    Shutdown,
}

/// One watch of one game. Owns the only timer in the program; the timer is
/// armed after a tick's render completes, so ticks never overlap.
pub struct PollSession<S, R> {
    source: S,
    sink: R,
    date: NaiveDate,
    game_id: String,
    interval: Duration,
    state: PollState,
    ticks: u32,
}

impl<S, R> PollSession<S, R>
where
    S: ScoreboardSource,
    R: TickSink,
{
    pub fn new(source: S, sink: R, date: NaiveDate, game_id: impl Into<String>) -> Self {
        Self {
            source,
            sink,
            date,
            game_id: game_id.into(),
            interval: POLL_INTERVAL,
            state: PollState::Running,
            ticks: 0,
        }
    }

    #[cfg(test)]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    #[cfg(test)]
    pub fn state(&self) -> PollState {
        self.state
    }

    #[cfg(test)]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Tick immediately, then every interval until the game is final or
    /// `shutdown` resolves. Fetch failures are logged and the loop carries on.
    pub async fn run<F>(&mut self, shutdown: F) -> anyhow::Result<PollOutcome>
    where
        F: Future,
    {
        tokio::pin!(shutdown);
        info!("watching game {} every {:?}", self.game_id, self.interval);

        while self.state == PollState::Running {
            let step = tokio::select! {
                result = self.tick() => Step::Ticked(result),
                _ = &mut shutdown => Step::Shutdown,
            };

            match step {
                Step::Ticked(Ok(true)) => {
                    self.state = PollState::Stopped;
                    info!("game {} is final after {} ticks", self.game_id, self.ticks);
                    return Ok(PollOutcome::Completed { ticks: self.ticks });
                }
                Step::Ticked(Ok(false)) => {}
                Step::Ticked(Err(e)) => {
                    self.state = PollState::Stopped;
                    return Err(e);
                }
                Step::Shutdown => break,
            }

            let timer = tokio::time::sleep(self.interval);
            tokio::select! {
                _ = timer => {}
                _ = &mut shutdown => break,
            }
        }

        self.state = PollState::Stopped;
        info!("stopped watching game {} after {} ticks", self.game_id, self.ticks);
        Ok(PollOutcome::Cancelled { ticks: self.ticks })
    }

    /// Fetch, render, and report whether the game reached its terminal state.
    async fn tick(&mut self) -> anyhow::Result<bool> {
        self.ticks += 1;
        debug!("tick {} for game {}", self.ticks, self.game_id);

        match self.source.fetch_game(self.date, &self.game_id).await {
            Ok(game) => {
                self.sink.render(Tick::Updated(&game))?;
                Ok(game.is_final())
            }
            Err(e) => {
                warn!("tick {} for game {} failed: {e}", self.ticks, self.game_id);
                self.sink.render(Tick::FetchFailed(&e))?;
                Ok(false)
            }
        }
    }
}

impl<S, R> PollSession<S, R>
where
    S: ScoreboardSource + Send + Sync + 'static,
    R: TickSink + Send + 'static,
{
    /// Run the session on the tokio runtime.
    pub fn start(mut self) -> PollHandle {
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            // A dropped handle stops the session as well.
            self.run(async {
                let _ = stop_rx.await;
            })
            .await
        });
        PollHandle { stop: Some(stop_tx), task }
    }
}

pub struct PollHandle {
    stop: Option<oneshot::Sender<()>>,
    task: JoinHandle<anyhow::Result<PollOutcome>>,
}

impl PollHandle {
    /// Cancel the pending timer. Only the first call has an effect.
    pub fn stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }

    pub async fn join(mut self) -> anyhow::Result<PollOutcome> {
        let _stop = self.stop.take();
        self.task.await?
    }

    /// Wait for the session, stopping it early if `shutdown` resolves first.
    pub async fn join_until<F>(mut self, shutdown: F) -> anyhow::Result<PollOutcome>
    where
        F: Future,
    {
        tokio::pin!(shutdown);
        let finished = tokio::select! {
            result = &mut self.task => Some(result),
            _ = &mut shutdown => None,
        };
        match finished {
            Some(result) => result?,
            None => {
                self.stop();
                self.join().await
            }
        }
    }
}
