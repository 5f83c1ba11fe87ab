pub use crate::FormsProvider;
pub use crate::controller::{NumberInputConfig, ValueChange};
pub use crate::messages::{FormMessage, MessageKind};
pub use crate::numeric::{DelimiterTable, Direction, LocaleFormatter, StepConstraints};
pub use crate::style::{FieldLayout, InputSize, LabelPlacement, Size};
pub use crate::theme::{ColorValue, FormsTheme};
pub use crate::widgets::{NumberInput, ToggleFacade};
