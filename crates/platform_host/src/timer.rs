//! Delay/timer host contracts and the deadline combinator built on them.

use std::{cell::RefCell, fmt, future::Future, pin::Pin, rc::Rc, time::Duration};

use futures::future::{self, Either};

/// Object-safe boxed future used by [`DelayService`].
pub type DelayFuture<'a> = Pin<Box<dyn Future<Output = ()> + 'a>>;

/// Host service that resolves a future after a wall-clock delay.
///
/// Dropping the returned future before it resolves must release the underlying timer.
pub trait DelayService {
    /// Resolves once `duration` has elapsed.
    fn sleep<'a>(&'a self, duration: Duration) -> DelayFuture<'a>;
}

#[derive(Debug, Clone, Default)]
/// Delay service whose sleeps resolve immediately; records every requested duration.
pub struct ImmediateDelayService {
    requested: Rc<RefCell<Vec<Duration>>>,
}

impl ImmediateDelayService {
    /// Returns the durations requested so far, in call order.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.borrow().clone()
    }
}

impl DelayService for ImmediateDelayService {
    fn sleep<'a>(&'a self, duration: Duration) -> DelayFuture<'a> {
        self.requested.borrow_mut().push(duration);
        Box::pin(future::ready(()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Delay service whose sleeps never elapse.
pub struct PendingDelayService;

impl DelayService for PendingDelayService {
    fn sleep<'a>(&'a self, _duration: Duration) -> DelayFuture<'a> {
        Box::pin(future::pending::<()>())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Returned by [`with_deadline`] when the deadline fires first.
pub struct DeadlineElapsed {
    /// The deadline that elapsed.
    pub timeout: Duration,
}

impl fmt::Display for DeadlineElapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deadline of {} ms elapsed", self.timeout.as_millis())
    }
}

impl std::error::Error for DeadlineElapsed {}

/// Races `work` against a `timeout` sleep on `delay`.
///
/// Exactly one side wins and the other is dropped. When both are ready on the same poll the work
/// result is preferred.
pub async fn with_deadline<F>(
    delay: &dyn DelayService,
    timeout: Duration,
    work: F,
) -> Result<F::Output, DeadlineElapsed>
where
    F: Future,
{
    let work = Box::pin(work);
    let deadline = delay.sleep(timeout);
    match future::select(work, deadline).await {
        Either::Left((output, _deadline)) => Ok(output),
        Either::Right(((), _work)) => Err(DeadlineElapsed { timeout }),
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn ready_work_beats_an_immediate_deadline() {
        let delay = ImmediateDelayService::default();
        let result = block_on(with_deadline(&delay, Duration::from_millis(8000), async {
            7
        }));
        assert_eq!(result, Ok(7));
        assert_eq!(delay.requested(), vec![Duration::from_millis(8000)]);
    }

    #[test]
    fn pending_work_loses_to_the_deadline() {
        let delay = ImmediateDelayService::default();
        let result = block_on(with_deadline(
            &delay,
            Duration::from_millis(250),
            future::pending::<()>(),
        ));
        assert_eq!(
            result,
            Err(DeadlineElapsed {
                timeout: Duration::from_millis(250)
            })
        );
    }

    #[test]
    fn work_completes_when_the_deadline_never_fires() {
        let result = block_on(with_deadline(
            &PendingDelayService,
            Duration::from_millis(1),
            async { "done" },
        ));
        assert_eq!(result, Ok("done"));
    }

    #[test]
    fn elapsed_deadline_formats_milliseconds() {
        let err = DeadlineElapsed {
            timeout: Duration::from_secs(8),
        };
        assert_eq!(err.to_string(), "deadline of 8000 ms elapsed");
    }
}
