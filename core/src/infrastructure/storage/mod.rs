pub mod file_storage;
pub mod memory_storage;

pub use file_storage::FileStatePersistence;
pub use memory_storage::MemoryStatePersistence;
