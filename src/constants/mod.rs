mod contracts;
pub use contracts::*;

mod logging;
pub use logging::*;

mod server;
pub use server::*;
