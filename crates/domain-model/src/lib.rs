pub mod intent;
pub mod file_record;
pub mod extension_aggregate;
pub mod query_result;
pub mod warning;

pub use intent::*;
pub use file_record::*;
pub use extension_aggregate::*;
pub use query_result::*;
pub use warning::*;
