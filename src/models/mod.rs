mod api_response;
pub use api_response::*;

mod app_state;
pub use app_state::*;

mod error;
pub use error::*;

mod health;
pub use health::*;

mod mint;
pub use mint::*;

mod receipt;
pub use receipt::*;
