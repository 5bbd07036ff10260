//! Process-wide constants derived during bootstrap.
//!
//! Responsibilities:
//! - Hold the set-once root path and environment tier for the remainder of
//!   the process lifetime.
//!
//! Invariants:
//! - Each constant can be written at most once; later writes are ignored.
//! - Readers see `None` until the bootstrap sequence has published a value.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::tier::Tier;

static ROOT: OnceLock<PathBuf> = OnceLock::new();
static TIER: OnceLock<Tier> = OnceLock::new();

/// Publish the bootstrap root path. A no-op if already published.
pub fn set_root(path: PathBuf) {
    let _ = ROOT.set(path);
}

/// The bootstrap root path, if published.
pub fn root() -> Option<&'static Path> {
    ROOT.get().map(PathBuf::as_path)
}

/// Publish the environment tier. A no-op if already published.
pub fn set_tier(tier: Tier) {
    let _ = TIER.set(tier);
}

/// The environment tier, if published.
pub fn tier() -> Option<Tier> {
    TIER.get().copied()
}
