//! Process-wide database memoization.
//!
//! Artifacts are parsed and loaded once per page lifetime; every later
//! request hands out a clone of the same `Rc`-backed [`Database`].

use crate::Database;
use std::cell::OnceCell;

thread_local! {
    static SHARED: OnceCell<Database> = const { OnceCell::new() };
}

/// Return the shared database, building it with `init` on first use.
///
/// If `init` fails nothing is cached and the next call tries again.
pub fn shared_database(
    init: impl FnOnce() -> anyhow::Result<Database>,
) -> anyhow::Result<Database> {
    if let Some(db) = SHARED.with(|cell| cell.get().cloned()) {
        return Ok(db);
    }
    let db = init()?;
    log::info!("cache: Database initialized");
    SHARED.with(|cell| Ok(cell.get_or_init(|| db).clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gwf_core::artifact::ArtifactSet;
    use std::cell::Cell;

    #[test]
    fn init_runs_once_per_thread() {
        let calls = Cell::new(0);
        let build = || {
            calls.set(calls.get() + 1);
            Database::with_artifacts(&ArtifactSet::new())
        };
        let first = shared_database(build).unwrap();
        let second = shared_database(|| {
            calls.set(calls.get() + 1);
            Database::new()
        })
        .unwrap();
        assert_eq!(calls.get(), 1);
        // Same connection: the second handle sees the registry loaded by the first.
        assert_eq!(second.query_wells().unwrap().len(), 4);
        assert_eq!(first.query_wells().unwrap().len(), 4);
    }

    #[test]
    fn failed_init_is_not_cached() {
        std::thread::spawn(|| {
            assert!(shared_database(|| anyhow::bail!("no artifacts")).is_err());
            let db = shared_database(Database::new).unwrap();
            assert!(db.query_wells().unwrap().is_empty());
        })
        .join()
        .unwrap();
    }
}
