use std::{
    fmt, io,
    sync::mpsc::{Receiver, RecvError, Sender, TryRecvError, channel},
    thread::{self, JoinHandle},
};

use twine_core::Model;

use crate::models::solar::collector_tank::{CollectorTank, SimulationInput};

use super::Outcome;

/// Identifies one dispatched run within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub(super) const FIRST: Self = Self(1);

    pub(super) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct Request {
    id: RequestId,
    input: SimulationInput,
}

#[derive(Debug)]
pub(super) struct Response {
    pub(super) id: RequestId,
    pub(super) outcome: Outcome,
}

/// Background thread that evaluates runs in submission order.
///
/// The thread exits once the worker is dropped and its queue drains.
#[derive(Debug)]
pub(super) struct RunWorker {
    requests: Option<Sender<Request>>,
    responses: Receiver<Response>,
    handle: Option<JoinHandle<()>>,
}

impl RunWorker {
    pub(super) fn start(model: CollectorTank) -> io::Result<Self> {
        let (request_tx, request_rx) = channel::<Request>();
        let (response_tx, response_rx) = channel();

        let handle = thread::Builder::new()
            .name("twine-solar-worker".to_owned())
            .spawn(move || {
                for Request { id, input } in request_rx {
                    let outcome = model.call(&input);
                    if response_tx.send(Response { id, outcome }).is_err() {
                        break;
                    }
                }
            })?;

        Ok(Self {
            requests: Some(request_tx),
            responses: response_rx,
            handle: Some(handle),
        })
    }

    /// Queues a run; returns `false` if the worker thread is gone.
    pub(super) fn submit(&self, id: RequestId, input: SimulationInput) -> bool {
        self.requests
            .as_ref()
            .is_some_and(|tx| tx.send(Request { id, input }).is_ok())
    }

    pub(super) fn recv(&self) -> Result<Response, RecvError> {
        self.responses.recv()
    }

    pub(super) fn try_recv(&self) -> Result<Response, TryRecvError> {
        self.responses.try_recv()
    }

    /// Drops every response already delivered, returning how many there were.
    ///
    /// Only called when no run is in flight, so all of them are stale.
    pub(super) fn discard_delivered(&self) -> usize {
        self.responses.try_iter().count()
    }

    /// A worker whose thread has already exited.
    #[cfg(test)]
    pub(super) fn stopped() -> Self {
        let (requests, _) = channel();
        let (_, responses) = channel();
        Self {
            requests: Some(requests),
            responses,
            handle: None,
        }
    }
}

impl Drop for RunWorker {
    fn drop(&mut self) {
        // Closing the queue ends the worker loop.
        drop(self.requests.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
