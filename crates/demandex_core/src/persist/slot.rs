//! Durable slot implementations for snapshot persistence.
//!
//! # Responsibility
//! - Provide the file-backed slot used by the application.
//! - Provide an in-process slot for tests and probes.
//!
//! # Invariants
//! - A failed save never corrupts a previously saved snapshot.
//! - Loading a corrupt, missing, or newer-schema snapshot yields `None`.

use super::{Snapshot, SnapshotError, SnapshotResult, SNAPSHOT_SCHEMA_VERSION};
use log::{info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Durable key-value slot holding one serialized [`Snapshot`].
pub trait SnapshotSlot {
    /// Returns the previously saved snapshot, if a readable one exists.
    ///
    /// Never fails: absence, decode failures, and unsupported schema
    /// versions all degrade to `None`.
    fn load(&self) -> Option<Snapshot>;

    /// Overwrites the slot with the supplied snapshot.
    ///
    /// # Errors
    /// - `QuotaExceeded` when the medium rejects the write for space.
    /// - `Io`/`Encode` for other failures.
    fn save(&mut self, snapshot: &Snapshot) -> SnapshotResult<()>;
}

fn decode(raw: &str, origin: &str) -> Option<Snapshot> {
    let snapshot: Snapshot = match serde_json::from_str(raw) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!("event=snapshot_load status=error origin={origin} error_code=decode_failed error={err}");
            return None;
        }
    };

    if !snapshot.is_supported() {
        warn!(
            "event=snapshot_load status=error origin={origin} error_code=unsupported_version snapshot_version={} latest_supported={}",
            snapshot.schema_version, SNAPSHOT_SCHEMA_VERSION
        );
        return None;
    }

    Some(snapshot)
}

fn classify_io(err: std::io::Error, needed_bytes: u64) -> SnapshotError {
    match err.kind() {
        ErrorKind::StorageFull | ErrorKind::QuotaExceeded => {
            SnapshotError::QuotaExceeded { needed_bytes }
        }
        _ => SnapshotError::Io(err),
    }
}

/// File-backed slot storing the snapshot as one JSON document.
///
/// Writes go through a sibling temp file and an atomic rename, so an
/// interrupted save leaves the previous snapshot intact.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Creates a slot at the given path. Nothing is touched until the
    /// first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying JSON document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut raw = self.path.as_os_str().to_os_string();
        raw.push(".tmp");
        PathBuf::from(raw)
    }
}

impl SnapshotSlot for FileSlot {
    fn load(&self) -> Option<Snapshot> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(
                    "event=snapshot_load status=error origin=file path={} error_code=read_failed error={err}",
                    self.path.display()
                );
                return None;
            }
        };

        decode(&raw, "file")
    }

    fn save(&mut self, snapshot: &Snapshot) -> SnapshotResult<()> {
        let encoded = serde_json::to_string(snapshot)?;
        let needed_bytes = encoded.len() as u64;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| classify_io(err, needed_bytes))?;
            }
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, &encoded).map_err(|err| classify_io(err, needed_bytes))?;
        fs::rename(&temp_path, &self.path).map_err(|err| classify_io(err, needed_bytes))?;

        info!(
            "event=snapshot_save status=ok origin=file bytes={needed_bytes} path={}",
            self.path.display()
        );
        Ok(())
    }
}

/// In-process slot with an optional byte capacity.
///
/// The capacity models a medium that rejects oversized writes, which makes
/// quota handling testable without filling a disk.
#[derive(Debug, Default)]
pub struct MemorySlot {
    encoded: Option<String>,
    capacity_bytes: Option<usize>,
    save_count: u32,
}

impl MemorySlot {
    /// Creates an empty, unbounded slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty slot that rejects snapshots above `capacity_bytes`.
    pub fn with_capacity(capacity_bytes: usize) -> Self {
        Self {
            capacity_bytes: Some(capacity_bytes),
            ..Self::default()
        }
    }

    /// Number of successful saves, for asserting write-through behavior.
    pub fn save_count(&self) -> u32 {
        self.save_count
    }

    /// Raw serialized snapshot currently held, if any.
    pub fn raw(&self) -> Option<&str> {
        self.encoded.as_deref()
    }
}

impl SnapshotSlot for MemorySlot {
    fn load(&self) -> Option<Snapshot> {
        decode(self.encoded.as_deref()?, "memory")
    }

    fn save(&mut self, snapshot: &Snapshot) -> SnapshotResult<()> {
        let encoded = serde_json::to_string(snapshot)?;
        if let Some(capacity) = self.capacity_bytes {
            if encoded.len() > capacity {
                return Err(SnapshotError::QuotaExceeded {
                    needed_bytes: encoded.len() as u64,
                });
            }
        }

        self.encoded = Some(encoded);
        self.save_count += 1;
        Ok(())
    }
}
