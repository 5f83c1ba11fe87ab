mod field;
mod number_input;
mod toggle_facade;

pub use field::FieldDescriptor;
pub use number_input::NumberInput;
pub use toggle_facade::{FacadeGeometry, ToggleFacade};
