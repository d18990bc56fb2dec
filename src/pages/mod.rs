//! Page components for the portfolio.

mod home;
mod journal;

pub use home::Home;
pub use journal::Journal;
