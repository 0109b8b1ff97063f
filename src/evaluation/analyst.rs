use crate::protocol::Outbound;
use tokio::sync::mpsc::UnboundedSender;

/// Destination of analysis requests.
/// Results come back later as push messages, never as a return value.
pub trait Analyst {
    fn request(&self, chapter: &str) -> anyhow::Result<()>;
}

impl Analyst for UnboundedSender<Outbound> {
    fn request(&self, chapter: &str) -> anyhow::Result<()> {
        self.send(Outbound::RequestAnalysis(chapter.to_string()))
            .map_err(|_| anyhow::anyhow!("socket closed"))
    }
}
