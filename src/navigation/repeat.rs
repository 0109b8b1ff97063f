use super::*;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A held navigation button.
///
/// The step runs once on [`Repeat::spawn`], then again after every wait the
/// [`Cadence`] yields, until [`Repeat::cancel`] or drop. [`Repeat::after`]
/// skips the immediate step for callers that apply it themselves. Each wait
/// is a single timer owned by one task, so at most one step is ever pending,
/// and the task is aborted on cancel so nothing fires afterwards.
#[derive(Debug)]
pub struct Repeat {
    cancel: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl Repeat {
    pub fn spawn<F>(cadence: Cadence, mut step: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        step();
        Self::after(cadence, step)
    }
    /// Only the scheduled steps, starting after the first wait.
    pub fn after<F>(cadence: Cadence, mut step: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (cancel, mut cancelled) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            for wait in cadence {
                tokio::select! {
                    biased;
                    _ = &mut cancelled => break,
                    _ = tokio::time::sleep(wait) => step(),
                }
            }
            log::trace!("[repeat] released");
        });
        Self {
            cancel: Some(cancel),
            task: Some(task),
        }
    }
    /// Stops the repetition. Cancelling twice is a no-op.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for Repeat {
    fn drop(&mut self) {
        self.cancel();
    }
}
