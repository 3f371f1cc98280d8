pub mod health;
pub mod list;
pub mod get;
pub mod create;
pub mod update;
pub mod delete;
pub mod procedure;
pub mod registration;
pub mod unmatched;

pub use health::health_handler;
pub use list::list_handler;
pub use get::get_handler;
pub use create::create_handler;
pub use update::{update_collection_handler, update_handler};
pub use delete::{delete_collection_handler, delete_handler};
pub use procedure::procedure_delete_handler;
pub use registration::registration_results_handler;
pub use unmatched::unmatched_handler;
