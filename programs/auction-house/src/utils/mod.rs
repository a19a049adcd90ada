pub mod accounts;
pub mod external;
pub mod price_resolver;
pub mod structs;

pub use accounts::*;
pub use external::*;
pub use price_resolver::*;
pub use structs::*;
