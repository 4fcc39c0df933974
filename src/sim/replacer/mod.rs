mod lru;

pub use lru::{find_lru, LRUReplacer};
