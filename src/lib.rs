pub mod actions;
pub mod api;
pub mod config;
pub mod console;
pub mod endpoints;
pub mod errors;
pub mod models;
pub mod page;
pub mod ui;

pub use actions::{DeleteOutcome, DeleteTarget};
pub use api::AdminApi;
pub use console::{Console, Control};
pub use errors::ClientError;
pub use models::{AnswerRecord, DeleteResult};
pub use page::StatsPage;
pub use ui::{ConsoleUi, Ui};
