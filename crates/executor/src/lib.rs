pub mod context;
pub mod large_files;
pub mod count_by_ext;
pub mod text_search;
pub mod dispatch;
pub mod format;
pub mod export;

pub use context::*;
pub use large_files::*;
pub use count_by_ext::*;
pub use text_search::*;
pub use dispatch::*;
pub use format::*;
pub use export::*;
