//! Move-tree navigation, conceal policy, and server evaluation sync
//! for shared draughts studies.
//!
//! ## Modules
//!
//! - [`tree`] — Path-addressable move tree (ids, paths, nodes)
//! - [`navigation`] — Stepping over the tree, press-and-hold repetition
//! - [`conceal`] — Per-path visibility for progressively revealed chapters
//! - [`evaluation`] — One-shot server analysis and chart selection sync
//! - [`protocol`] — Socket wire messages in and out
//! - [`study`] — Chapter, viewer, and study documents
//! - [`session`] — Actor serializing input, timers, and push messages
//! - `cli` — Interactive prompt behind the `cli` feature

#[cfg(feature = "cli")]
pub mod cli;
pub mod conceal;
pub mod evaluation;
pub mod navigation;
pub mod protocol;
pub mod session;
pub mod study;
pub mod tree;

mod error;
pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Half-move number along a line of play.
pub type Ply = usize;
/// Identifier of a chapter, the unit one analysis and one chart apply to.
pub type ChapterId = String;
/// Identifier of a registered user.
pub type UserId = String;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// PRESS-AND-HOLD STEPPING
// First step fires on press, the second after REPEAT_HOLD, then every tick
// shrinks the delay by 1/REPEAT_DECAY down to REPEAT_FLOOR.
// ============================================================================
/// Wait between the press and the first repeated step.
pub const REPEAT_HOLD: std::time::Duration = std::time::Duration::from_millis(500);
/// Delay the geometric decay starts from.
pub const REPEAT_DELAY: std::time::Duration = std::time::Duration::from_millis(350);
/// Each tick removes delay / REPEAT_DECAY.
pub const REPEAT_DECAY: u32 = 15;
/// Shortest delay between repeated steps.
pub const REPEAT_FLOOR: std::time::Duration = std::time::Duration::from_millis(100);

// ============================================================================
// SERVER ANALYSIS
// ============================================================================
/// Mainline positions, root included, required before a chapter
/// can be sent for analysis.
pub const MIN_MAINLINE_PLIES: usize = 5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
