pub mod control;
pub mod controller;
pub mod edit;
pub mod error;
pub mod id;
pub mod messages;
pub mod numeric;
pub mod prelude;
pub mod provider;
pub mod style;
pub mod theme;
pub mod widgets;

pub use controller::{KeyOutcome, NumberInputController, ValueChange};
pub use error::NumericError;
pub use provider::FormsProvider;

#[cfg(test)]
mod test_public_api;
