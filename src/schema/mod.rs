pub mod catalog;
pub mod endpoint;
pub mod field;
pub mod outline;
pub mod product_directory;

pub use catalog::*;
pub use endpoint::*;
pub use field::*;
pub use outline::*;
pub use product_directory::DEFAULT_BASE_URL;
