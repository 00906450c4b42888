mod schema;
mod store;
mod trait_def;

pub use store::SqliteInteractionStore;
pub use trait_def::InteractionStore;
