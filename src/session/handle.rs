use super::*;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Caller side of a spawned [`Session`].
/// Dropping every handle closes the inbox and ends the session.
pub struct Handle {
    inbox: UnboundedSender<Input>,
    frames: watch::Receiver<Frame>,
    task: JoinHandle<()>,
}

impl Handle {
    pub(super) fn new(
        inbox: UnboundedSender<Input>,
        frames: watch::Receiver<Frame>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            inbox,
            frames,
            task,
        }
    }
    pub fn send(&self, input: Input) -> anyhow::Result<()> {
        self.inbox
            .send(input)
            .map_err(|_| anyhow::anyhow!("session closed"))
    }
    /// Latest published frame.
    pub fn frame(&self) -> Frame {
        self.frames.borrow().clone()
    }
    /// Another receiver of published frames.
    pub fn frames(&self) -> watch::Receiver<Frame> {
        self.frames.clone()
    }
    /// Waits for the next frame.
    pub async fn changed(&mut self) -> anyhow::Result<Frame> {
        self.frames.changed().await?;
        Ok(self.frames.borrow_and_update().clone())
    }
    /// Lets the session drain its inbox, then returns the last frame.
    pub async fn close(self) -> anyhow::Result<Frame> {
        let Self {
            inbox,
            frames,
            task,
        } = self;
        drop(inbox);
        task.await?;
        let frame = frames.borrow().clone();
        Ok(frame)
    }
}
