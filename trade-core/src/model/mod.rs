pub mod currency;
pub mod side;
pub mod trade;

pub use currency::*;
pub use side::*;
pub use trade::*;
