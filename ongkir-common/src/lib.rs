pub mod logging;
pub mod rate;

pub use rate::ShippingRate;
pub use tracing;
