//! Study Viewer Binary
//!
//! Steps through a draughts study at an interactive prompt.
//! Server push messages can be pasted with `push <json>`.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    studyboard::log()?;
    studyboard::cli::CLI::run().await
}
