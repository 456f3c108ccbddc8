pub mod handle;
pub mod fs_handle;
pub mod memory;
pub mod cancel;
pub mod options;
pub mod walker;
pub mod text;

pub use handle::{resolve_file, DirectoryHandle, Entry, FileHandle, FileMeta, Listing};
pub use fs_handle::{FsDirectory, FsFile};
pub use cancel::CancelToken;
pub use options::WalkOptions;
pub use walker::{walk, WalkOutcome};
pub use text::safe_read_text_file;
pub use folder_insights_domain::{FileRecord, WalkWarning, WarningKind};
