/// Filesystem adapters for file I/O operations
mod file_writer;
mod snapshot_repository;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use snapshot_repository::SnapshotRepository;
