/// String key-value stores backing flags and brand history.
pub mod kv_store;
/// Persisted model definitions.
pub mod models;
/// Storage error types shared by every backend.
pub mod storage;
