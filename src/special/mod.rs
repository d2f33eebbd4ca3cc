mod category;
mod entry;
mod error;
mod recurrence;
mod resolver;
mod table;

pub use category::*;
pub use entry::*;
pub use error::*;
pub use recurrence::*;
pub use resolver::*;
pub use table::*;
