//! Operator-facing text menu over the inventory store.
//!
//! Everything here is presentation: reading lines, coercing numbers, and
//! rendering store results. Business rules live in `stockroom-inventory`.

pub mod config;
pub mod input;
pub mod menu;
pub mod session;

pub use config::Config;
pub use input::InputError;
pub use menu::MenuChoice;
pub use session::Session;
