mod address;
pub use address::*;

mod polling;
pub use polling::*;

pub mod serde;

mod units;
pub use units::*;

mod url;
pub use url::*;
