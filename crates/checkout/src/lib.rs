mod meal_calendar;
mod payment;
mod plan;
mod receipt;
mod session;

pub use meal_calendar::*;
pub use payment::*;
pub use plan::*;
pub use receipt::*;
pub use session::*;
