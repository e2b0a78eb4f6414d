//! Shici Common Library
//!
//! 原生可测试的共享层，与 Web(WASM) 共用的类型与核心逻辑:
//! - types: 诗词/分页/评论数据结构
//! - catalog: 诗词目录状态管理（搜索、分页、精选、收藏的调和）
//! - query: 出站搜索参数构建
//! - storage: 本地键值持久化端口

pub mod catalog;
pub mod error;
pub mod query;
pub mod storage;
pub mod types;

pub use catalog::{PoemCatalog, DEFAULT_PAGE_SIZE, MAX_FEATURED, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
pub use error::{Error, Result};
pub use query::SearchQuery;
pub use storage::{KvStore, NullKv, FAVORITE_IDS_KEY, FEATURED_IDS_KEY, FEATURED_SNAPSHOT_KEY};
pub use types::{Comment, Poem, PoemPage};
