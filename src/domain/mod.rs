//! Domain layer: invocation model and validation
//!
//! This layer is independent of external concerns (no I/O, no CLI framework,
//! no config loading).

pub mod choices;
pub mod content;
pub mod error;
pub mod handler;
pub mod invocation;

pub use choices::ChoiceTable;
pub use content::{ContentSource, Description};
pub use error::DomainError;
pub use handler::{CommandHandler, HandlerError, HandlerResult};
pub use invocation::{
    CommandParameters, Invocation, ParamMap, ParamValue, SessionParameters,
};
