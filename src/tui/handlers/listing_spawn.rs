//! Lists picker directories on the runtime's blocking pool.

use std::path::PathBuf;
use std::sync::mpsc;
use tokio::runtime::Handle;

use super::super::app::DirListing;

/// Receiver for one directory listing in flight.
pub struct PendingListing {
    pub listing_rx: mpsc::Receiver<DirListing>,
}

/// Spawn a listing of `dir`. Replacing the returned handle abandons the listing.
pub fn spawn_listing(handle: &Handle, dir: PathBuf, show_hidden: bool) -> PendingListing {
    let (tx, listing_rx) = mpsc::channel();
    handle.spawn_blocking(move || {
        let _ = tx.send(DirListing::read(dir, show_hidden));
    });
    PendingListing { listing_rx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn listing_arrives_from_the_blocking_pool() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("sub")).unwrap();
        let rt = tokio::runtime::Runtime::new().unwrap();

        let pending = spawn_listing(rt.handle(), tmp.path().to_path_buf(), false);
        let listing = pending
            .listing_rx
            .recv_timeout(Duration::from_secs(10))
            .unwrap();
        assert_eq!(listing.dir, tmp.path());
        assert_eq!(listing.result, Ok(vec![tmp.path().join("sub")]));
    }
}
