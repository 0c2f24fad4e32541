//! Collection administration tools.

mod contract;
pub mod create;
pub mod delete;
pub mod read;
pub mod update;

pub use contract::{CollectionMeta, CollectionName};
pub use create::{CreateCollectionInput, CreateCollectionTool};
pub use delete::{DeleteCollectionInput, DeleteCollectionTool};
pub use read::{ReadCollectionInput, ReadCollectionTool, ReadCollectionsInput, ReadCollectionsTool};
pub use update::{UpdateCollectionInput, UpdateCollectionTool};
