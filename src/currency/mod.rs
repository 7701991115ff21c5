//! Currency registry and the selected-currency session

mod registry;
mod session;

pub use registry::{convert, format, multiplier, Currency, BASE_CURRENCY};
pub use session::CurrencySession;
