//! Rock-paper-scissors against the computer.
//!
//! The crate is split the same way a round flows:
//! - [`rules`] — choice vocabularies and the beats-relation of each variant
//! - [`players`] — scores, plus where each side's choice comes from
//! - [`game`] — the round/match state machine and the session around it
//! - [`console`] — the text collaborator the core talks to
pub mod console;
pub mod error;
pub mod game;
pub mod players;
pub mod rules;

pub use console::*;
pub use error::*;
pub use game::*;
pub use players::*;
pub use rules::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Points won in a match. Never exceeds [`TARGET_MAX`].
pub type Score = u8;

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Target score used when the player just presses enter.
pub const TARGET_DEFAULT: Score = 3;
/// Smallest allowed target score.
pub const TARGET_MIN: Score = 1;
/// Largest allowed target score (keeps matches a reasonable length).
pub const TARGET_MAX: Score = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr so it never interleaves with the game.
/// Verbosity 0 logs warnings, 1 adds info, 2 or more adds debug.
#[cfg(feature = "cli")]
pub fn log(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

/// Set once by whoever prints the goodbye first.
#[cfg(feature = "cli")]
static LEAVING: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Claim the goodbye. Only the first caller in the process gets `true`;
/// everyone else stays quiet so it is printed exactly once.
#[cfg(feature = "cli")]
pub fn leaving() -> bool {
    !LEAVING.swap(true, std::sync::atomic::Ordering::SeqCst)
}

/// Register Ctrl+C handler that says goodbye and exits immediately.
/// If the session already saw the interrupt as aborted input it owns
/// the goodbye, and this handler lets it finish instead.
#[cfg(feature = "cli")]
pub fn bye() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        log::warn!("interrupt received, exiting");
        if leaving() {
            println!();
            println!("{}", Event::Interrupted);
            println!("{}", Event::Farewell);
            std::process::exit(0);
        }
    });
}
