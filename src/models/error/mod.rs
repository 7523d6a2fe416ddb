mod api;
pub use api::*;

mod mint;
pub use mint::*;
