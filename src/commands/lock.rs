//! The `lock` command: acquire, optionally hold, and release a lock.
//!
//! Progress lines go to stdout (`opened <path>`, `acquired <path>`,
//! `released <path>`) so that
//! scripts and tests can synchronize with a holder running in the background.

use crate::cli::LockArgs;
use mutagen_locking::config::DataDirConfig;
use mutagen_locking::error::{MutagenError, Result};
use mutagen_locking::filesystem::DataDirectory;
use mutagen_locking::locking::Locker;
use std::io::Write;
use std::thread;
use std::time::Duration;

pub(super) fn cmd_lock(config: &DataDirConfig, args: LockArgs) -> Result<()> {
    let path = match args.path {
        Some(path) => path,
        None => DataDirectory::new(config.clone()).daemon_lock_path(true)?,
    };

    let mut locker = Locker::new(&path, args.mode)?;
    announce("opened", &locker)?;

    if let Err(e) = locker.lock(args.block) {
        locker.close()?;
        return Err(e);
    }

    announce("acquired", &locker)?;

    if args.hold_ms > 0 {
        thread::sleep(Duration::from_millis(args.hold_ms));
    }

    locker.unlock()?;
    announce("released", &locker)?;
    locker.close()
}

fn announce(event: &str, locker: &Locker) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{} {}", event, locker.path().display())
        .and_then(|()| stdout.flush())
        .map_err(|e| MutagenError::io("failed to write to stdout", e))
}
