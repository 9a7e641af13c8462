//! Caller-owned run lifecycle for the collector tank model.
//!
//! A [`Session`] moves through three states:
//!
//! ```text
//! Idle ──run──▶ Running ──wait / poll──▶ Done ──reset──▶ Idle
//!                  └────────cancel────────────────────────▲
//! ```
//!
//! Each state is a distinct type, so a run can only start from [`Idle`] and
//! at most one run is in flight per session. Starting a run while one is in
//! flight does not compile:
//!
//! ```compile_fail
//! use twine_solar::{
//!     models::solar::collector_tank::SimulationInput,
//!     session::{Running, Session},
//! };
//!
//! fn rerun(session: Session<Running>, input: SimulationInput) {
//!     let _ = session.run(input);
//! }
//! ```
//!
//! Runs are evaluated on a background worker thread so an interactive host
//! stays responsive. A cancelled run keeps computing, but its result is
//! discarded when it arrives.

mod worker;

use std::{io, sync::mpsc::TryRecvError};

use thiserror::Error;
use tracing::{debug, warn};
use twine_core::Model;
use uom::si::time::hour;

use crate::models::solar::collector_tank::{
    CollectorTank, EngineError, SimulationInput, SimulationResult,
};

pub use worker::RequestId;

use worker::{Response, RunWorker};

/// What a finished run produced: a result or the reason there is none.
pub type Outcome = Result<SimulationResult, EngineError>;

/// Errors from the session machinery itself, not from the model.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to spawn the simulation worker")]
    Spawn(#[source] io::Error),

    #[error("simulation worker stopped before returning a result")]
    WorkerDisconnected,
}

/// No run in flight.
#[derive(Debug, Clone, Copy, Default)]
pub struct Idle;

/// A run has been dispatched and has not been collected.
#[derive(Debug, Clone, Copy)]
pub struct Running {
    request: RequestId,
}

/// The latest run has finished.
#[derive(Debug)]
pub struct Done {
    request: RequestId,
    outcome: Outcome,
}

/// Run lifecycle over a [`CollectorTank`] model.
#[derive(Debug)]
pub struct Session<S = Idle> {
    model: CollectorTank,
    worker: RunWorker,
    next_request: RequestId,
    state: S,
}

impl<S> Session<S> {
    /// The model every run in this session evaluates.
    pub fn model(&self) -> &CollectorTank {
        &self.model
    }

    fn into_state<T>(self, state: T) -> Session<T> {
        Session {
            model: self.model,
            worker: self.worker,
            next_request: self.next_request,
            state,
        }
    }

    fn finish(self, request: RequestId, outcome: Outcome) -> Session<Done> {
        match &outcome {
            Ok(result) => debug!(
                %request,
                hours = result.required_time.get::<hour>(),
                "simulation run finished"
            ),
            Err(error) => warn!(%request, %error, "simulation run failed"),
        }
        self.into_state(Done { request, outcome })
    }
}

impl Session<Idle> {
    /// Creates an idle session and starts its worker thread.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Spawn`] if the worker thread cannot be started.
    pub fn new(model: CollectorTank) -> Result<Self, SessionError> {
        let worker = RunWorker::start(model).map_err(SessionError::Spawn)?;
        debug!("simulation session started");

        Ok(Self {
            model,
            worker,
            next_request: RequestId::FIRST,
            state: Idle,
        })
    }

    /// Dispatches a run to the worker.
    ///
    /// Results of cancelled runs that have already arrived are dropped first.
    #[must_use]
    pub fn run(mut self, input: SimulationInput) -> Session<Running> {
        let request = self.next_request;
        self.next_request = request.next();

        let stale = self.worker.discard_delivered();
        if stale > 0 {
            debug!(stale, "dropped results of cancelled runs");
        }

        if self.worker.submit(request, input) {
            debug!(%request, "dispatched simulation run");
        } else {
            // Surfaces as `WorkerDisconnected` when the run is collected.
            warn!(%request, "simulation worker is gone; run was not dispatched");
        }

        self.into_state(Running { request })
    }

    /// Evaluates a run on the calling thread.
    pub fn run_blocking(mut self, input: &SimulationInput) -> Session<Done> {
        let request = self.next_request;
        self.next_request = request.next();

        debug!(%request, "evaluating simulation run inline");
        let outcome = self.model.call(input);
        self.finish(request, outcome)
    }
}

impl Session<Running> {
    /// Identifier of the run in flight.
    pub fn request(&self) -> RequestId {
        self.state.request
    }

    /// Blocks until the run in flight finishes.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::WorkerDisconnected`] if the worker thread
    /// stopped before returning this run's result.
    pub fn wait(self) -> Result<Session<Done>, SessionError> {
        loop {
            let response = self
                .worker
                .recv()
                .map_err(|_| SessionError::WorkerDisconnected)?;
            if let Some(outcome) = self.accept(response) {
                let request = self.state.request;
                return Ok(self.finish(request, outcome));
            }
        }
    }

    /// Collects the run if it has finished, without blocking.
    ///
    /// Returns `Ok(Ok(done))` once the run has finished and `Ok(Err(self))`
    /// while it is still in flight.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::WorkerDisconnected`] if the worker thread
    /// stopped before returning this run's result.
    pub fn poll(self) -> Result<Result<Session<Done>, Self>, SessionError> {
        loop {
            match self.worker.try_recv() {
                Ok(response) => {
                    if let Some(outcome) = self.accept(response) {
                        let request = self.state.request;
                        return Ok(Ok(self.finish(request, outcome)));
                    }
                }
                Err(TryRecvError::Empty) => return Ok(Err(self)),
                Err(TryRecvError::Disconnected) => {
                    warn!(request = %self.state.request, "simulation worker disconnected");
                    return Err(SessionError::WorkerDisconnected);
                }
            }
        }
    }

    /// Abandons the run in flight and returns to idle.
    ///
    /// The worker still finishes the run. Its result is dropped by the next
    /// [`run`](Session::run), [`wait`](Self::wait) or [`poll`](Self::poll).
    #[must_use]
    pub fn cancel(self) -> Session<Idle> {
        debug!(request = %self.state.request, "cancelled simulation run");
        self.into_state(Idle)
    }

    /// Keeps the outcome only if it belongs to the run in flight.
    fn accept(&self, response: Response) -> Option<Outcome> {
        if response.id == self.state.request {
            Some(response.outcome)
        } else {
            warn!(
                stale = %response.id,
                current = %self.state.request,
                "discarding result of a superseded run"
            );
            None
        }
    }
}

impl Session<Done> {
    /// Identifier of the finished run.
    pub fn request(&self) -> RequestId {
        self.state.request
    }

    pub fn outcome(&self) -> &Outcome {
        &self.state.outcome
    }

    /// The result, if the run succeeded.
    pub fn result(&self) -> Option<&SimulationResult> {
        self.state.outcome.as_ref().ok()
    }

    /// Consumes the session, keeping only the outcome.
    pub fn into_outcome(self) -> Outcome {
        self.state.outcome
    }

    /// Discards the outcome and returns to idle.
    #[must_use]
    pub fn reset(self) -> Session<Idle> {
        debug!(request = %self.state.request, "session reset");
        self.into_state(Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{thread, time::Duration};

    use uom::si::{f64::HeatFluxDensity, heat_flux_density::watt_per_square_meter};

    use crate::models::solar::collector_tank::core::test_support::example_input;

    fn with_increments(number_of_increments: usize) -> SimulationInput {
        SimulationInput {
            number_of_increments,
            ..example_input()
        }
    }

    #[test]
    fn run_then_wait_yields_result() {
        let session = Session::new(CollectorTank::default()).unwrap();
        let running = session.run(example_input());
        let request = running.request();

        let done = running.wait().unwrap();
        assert_eq!(done.request(), request);

        let result = done.result().expect("example input succeeds");
        assert!(result.calculation_complete);
        assert_eq!(result.trajectory.len(), 10);
    }

    #[test]
    fn poll_eventually_completes() {
        let mut running = Session::new(CollectorTank::default())
            .unwrap()
            .run(example_input());

        for _ in 0..1000 {
            match running.poll().unwrap() {
                Ok(done) => {
                    assert!(done.outcome().is_ok());
                    return;
                }
                Err(still_running) => {
                    running = still_running;
                    thread::sleep(Duration::from_millis(5));
                }
            }
        }
        panic!("run did not complete");
    }

    #[test]
    fn cancelled_result_is_discarded() {
        let session = Session::new(CollectorTank::default()).unwrap();

        let running = session.run(with_increments(5));
        let cancelled = running.request();
        let idle = running.cancel();

        let running = idle.run(with_increments(7));
        assert_ne!(running.request(), cancelled);

        let done = running.wait().unwrap();
        assert_eq!(done.result().map(|r| r.trajectory.len()), Some(7));
    }

    #[test]
    fn stopped_worker_is_reported_by_poll_and_wait() {
        let idle = || Session {
            model: CollectorTank::default(),
            worker: RunWorker::stopped(),
            next_request: RequestId::FIRST,
            state: Idle,
        };

        assert!(matches!(
            idle().run(example_input()).poll(),
            Err(SessionError::WorkerDisconnected)
        ));
        assert!(matches!(
            idle().run(example_input()).wait(),
            Err(SessionError::WorkerDisconnected)
        ));
    }

    #[test]
    fn repeated_cancels_leave_no_backlog() {
        let mut idle = Session::new(CollectorTank::default()).unwrap();
        for _ in 0..5 {
            idle = idle.run(example_input()).cancel();
        }

        let done = idle.run(with_increments(3)).wait().unwrap();
        assert_eq!(done.result().map(|r| r.trajectory.len()), Some(3));

        // Everything queued before the last run has been consumed or dropped.
        let idle = done.reset();
        assert_eq!(idle.worker.discard_delivered(), 0);
    }

    #[test]
    fn engine_errors_are_outcomes() {
        let mut input = example_input();
        input.panel.solar_flux = HeatFluxDensity::new::<watt_per_square_meter>(0.0);

        let done = Session::new(CollectorTank::default())
            .unwrap()
            .run(input)
            .wait()
            .unwrap();

        assert!(done.result().is_none());
        assert!(matches!(
            done.into_outcome(),
            Err(EngineError::UnreachableTarget { .. })
        ));
    }

    #[test]
    fn reset_allows_another_run() {
        let session = Session::new(CollectorTank::default()).unwrap();
        let first = session.run_blocking(&example_input());
        let first_request = first.request();
        let first_result = first.result().cloned();

        let second = first.reset().run_blocking(&example_input());
        assert!(second.request() > first_request);
        assert_eq!(second.result().cloned(), first_result);
    }

    #[test]
    fn inline_and_background_runs_agree() {
        let session = Session::new(CollectorTank::default()).unwrap();
        let inline = session.run_blocking(&example_input());
        let expected = inline.result().cloned();

        let background = inline.reset().run(example_input()).wait().unwrap();
        assert_eq!(background.result().cloned(), expected);
    }
}
