mod os_key_generator;

pub use os_key_generator::{KEY_BYTES, OsKeyGenerator};
