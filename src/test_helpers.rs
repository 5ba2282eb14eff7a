//! Shared test utilities: seeded randomness, a fixed clock, and a temporary
//! project tree with the directories `validate` expects.

use chrono::{DateTime, TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use crate::config::GeneratorConfig;

/// Deterministic RNG for reproducible descriptions and batch categories.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `2024-05-01T08:30:00.000Z`
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap()
}

/// Temp project root containing the default content and workflow directories.
pub fn setup_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let config = GeneratorConfig::default();
    std::fs::create_dir_all(config.content_root(tmp.path())).unwrap();
    std::fs::create_dir_all(config.workflows_root(tmp.path())).unwrap();
    tmp
}
