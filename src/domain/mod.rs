pub mod models;
pub mod errors;
pub mod ports;
pub mod formatter;
pub mod list;

pub use models::*;
pub use errors::*;
pub use ports::*;
pub use formatter::*;
pub use list::*;
