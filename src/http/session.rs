// Session and task capabilities.
// The seam between HttpClient and whatever actually performs network I/O.

use std::sync::Arc;

use super::types::{RawOutcome, Request};

/// Callback a session invokes exactly once with the raw outcome.
pub type RawCompletion = Box<dyn FnOnce(RawOutcome) + Send + 'static>;

/// Issues data tasks for requests.
///
/// The returned task does nothing until `resume` is called. Once resumed, the
/// session must invoke `completion` exactly once, off the calling thread.
pub trait Session: Send + Sync {
    fn data_task(&self, request: Request, completion: RawCompletion) -> Box<dyn DataTask>;
}

/// A created, not yet started, unit of transport work.
pub trait DataTask: Send {
    fn resume(&mut self);
}

impl<S: Session + ?Sized> Session for Arc<S> {
    fn data_task(&self, request: Request, completion: RawCompletion) -> Box<dyn DataTask> {
        (**self).data_task(request, completion)
    }
}

impl<S: Session + ?Sized> Session for Box<S> {
    fn data_task(&self, request: Request, completion: RawCompletion) -> Box<dyn DataTask> {
        (**self).data_task(request, completion)
    }
}
