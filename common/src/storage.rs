//! 本地键值持久化端口
//!
//! 浏览器侧由 localStorage 实现。读失败一律视为无数据，
//! 写失败静默忽略——持久化只是尽力而为的缓存，永远不产生用户可见错误。

/// 精选诗词 id 列表的存储键（JSON 数组）
pub const FEATURED_IDS_KEY: &str = "shici.featuredIds";

/// 精选诗词快照的存储键（JSON 数组，完整诗词体）
pub const FEATURED_SNAPSHOT_KEY: &str = "shici.featuredSnapshot";

/// 收藏 id 列表的存储键（JSON 数组）
pub const FAVORITE_IDS_KEY: &str = "shici.favoriteIds";

/// 键值持久化端口
pub trait KvStore {
    /// 读取字符串值，缺失或存储不可用时返回 None
    fn get(&self, key: &str) -> Option<String>;

    /// 写入字符串值，尽力而为，失败静默忽略
    fn set(&self, key: &str, value: &str);
}

/// 空实现: 读永远无数据，写直接丢弃（持久化不可用时的降级）
#[derive(Debug, Clone, Copy, Default)]
pub struct NullKv;

impl KvStore for NullKv {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_kv_reads_nothing() {
        let kv = NullKv;
        assert_eq!(kv.get(FEATURED_IDS_KEY), None);
        assert_eq!(kv.get("任意键"), None);
    }

    #[test]
    fn test_null_kv_write_is_noop() {
        let kv = NullKv;
        kv.set(FAVORITE_IDS_KEY, "[1,2,3]");
        assert_eq!(kv.get(FAVORITE_IDS_KEY), None);
    }
}
