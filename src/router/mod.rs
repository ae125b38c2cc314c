mod handlers;
mod response;
mod types;

pub use handlers::*;
pub use response::*;
pub use types::*;
