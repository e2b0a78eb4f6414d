//! 诗词目录状态管理（核心）
//!
//! 持有当前加载的诗词列表、搜索/分页参数、精选集与收藏集，
//! 并在每次拉取成功后按固定顺序与本地持久化数据调和:
//! 1. 快照补全: 精选 id 缺少快照条目时，从本次结果中补齐
//! 2. 一次性精选: 首次非空拉取的前 6 首被固定为精选集，此后不再自动变更
//!
//! 异步拉取在单一挂起点被拆开（search_query / begin_fetch / apply_page /
//! fail_fetch），编排由 web-wasm 侧的 store 完成；本模块保持同步、可原生测试。

use crate::query::{normalize_filter, SearchQuery};
use crate::storage::{KvStore, FAVORITE_IDS_KEY, FEATURED_IDS_KEY, FEATURED_SNAPSHOT_KEY};
use crate::types::{Poem, PoemPage};

/// 精选诗词数量上限
pub const MAX_FEATURED: usize = 6;

/// 单页数量下限
pub const MIN_PAGE_SIZE: u32 = 1;

/// 单页数量上限
pub const MAX_PAGE_SIZE: u32 = 100;

/// 默认单页数量
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// 诗词目录状态
///
/// 字段对界面层完全公开；响应式包装（leptos 信号）在 web-wasm 侧完成
#[derive(Debug, Clone, PartialEq)]
pub struct PoemCatalog {
    /// 最近一次成功拉取的当页结果（整页替换，不跨页累积）
    pub poems: Vec<Poem>,
    pub loading: bool,
    /// 最近一次拉取失败的可读错误，下次拉取开始时清除
    pub error: Option<String>,
    pub keyword: String,
    pub dynasty: String,
    pub tag: String,
    pub page: u32,
    pub page_size: u32,
    /// 服务端报告的总条数
    pub total: u64,
    /// 精选诗词 id（至多 6 个，一经非空不再自动变更）
    pub featured_ids: Vec<i64>,
    /// 精选诗词快照，id 恒为 featured_ids 的子集，惰性补全
    pub featured_snapshot: Vec<Poem>,
    /// 收藏 id，保持插入顺序，无重复
    pub favorite_ids: Vec<i64>,
}

impl Default for PoemCatalog {
    fn default() -> Self {
        Self {
            poems: Vec::new(),
            loading: false,
            error: None,
            keyword: String::new(),
            dynasty: String::new(),
            tag: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
            featured_ids: Vec::new(),
            featured_snapshot: Vec::new(),
            favorite_ids: Vec::new(),
        }
    }
}

impl PoemCatalog {
    /// 从本地持久化水合构建
    ///
    /// 读取失败或数据损坏（无法解析、非数组）一律视为空数据
    pub fn new(kv: &dyn KvStore) -> Self {
        let mut catalog = Self::default();

        if let Some(raw) = kv.get(FEATURED_IDS_KEY) {
            if let Ok(ids) = serde_json::from_str::<Vec<i64>>(&raw) {
                catalog.featured_ids = dedup_ids(&ids, MAX_FEATURED);
            }
        }
        if let Some(raw) = kv.get(FEATURED_SNAPSHOT_KEY) {
            if let Ok(snapshot) = serde_json::from_str::<Vec<Poem>>(&raw) {
                // 快照 id 必须是 featured_ids 的子集，损坏数据在此过滤
                catalog.featured_snapshot = snapshot
                    .into_iter()
                    .filter(|p| catalog.featured_ids.contains(&p.id))
                    .collect();
            }
        }
        if let Some(raw) = kv.get(FAVORITE_IDS_KEY) {
            if let Ok(ids) = serde_json::from_str::<Vec<i64>>(&raw) {
                catalog.favorite_ids = dedup_ids(&ids, usize::MAX);
            }
        }

        catalog
    }

    /// 按当前筛选与分页构建出站参数；空白筛选条件整体省略
    pub fn search_query(&self) -> SearchQuery {
        SearchQuery {
            keyword: normalize_filter(&self.keyword),
            dynasty: normalize_filter(&self.dynasty),
            tag: normalize_filter(&self.tag),
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// 拉取开始: 置加载标记并清除上次错误
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// 拉取成功: 整页替换结果，随后执行快照补全与一次性精选
    pub fn apply_page(&mut self, page: PoemPage, kv: &dyn KvStore) {
        self.loading = false;
        self.total = page.total.unwrap_or(page.items.len() as u64);
        self.poems = page.items;
        self.complete_snapshot(kv);
        self.select_featured_once(kv);
    }

    /// 拉取失败: 记录可读错误信息，保留上次成功的 poems/total
    pub fn fail_fetch(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// 快照补全: 按 featured_ids 顺序重建快照，优先沿用既有快照条目，
    /// 其次取自当页结果，两处都没有的 id 暂缺，等后续拉取再补
    fn complete_snapshot(&mut self, kv: &dyn KvStore) {
        if self.featured_ids.is_empty() || self.featured_snapshot.len() >= self.featured_ids.len()
        {
            return;
        }
        let rebuilt: Vec<Poem> = self
            .featured_ids
            .iter()
            .filter_map(|id| {
                self.featured_snapshot
                    .iter()
                    .find(|p| p.id == *id)
                    .or_else(|| self.poems.iter().find(|p| p.id == *id))
                    .cloned()
            })
            .collect();
        self.featured_snapshot = rebuilt;
        if !self.featured_snapshot.is_empty() {
            persist_json(kv, FEATURED_SNAPSHOT_KEY, &self.featured_snapshot);
        }
    }

    /// 一次性精选: 精选集尚空且本次结果非空时，固定前 6 首为精选
    ///
    /// 捕获的是首次成功拉取时的结果顺序，之后不随筛选或分页变化
    fn select_featured_once(&mut self, kv: &dyn KvStore) {
        if !self.featured_ids.is_empty() || self.poems.is_empty() {
            return;
        }
        let picks: Vec<Poem> = self.poems.iter().take(MAX_FEATURED).cloned().collect();
        self.featured_ids = picks.iter().map(|p| p.id).collect();
        self.featured_snapshot = picks;
        persist_json(kv, FEATURED_IDS_KEY, &self.featured_ids);
        persist_json(kv, FEATURED_SNAPSHOT_KEY, &self.featured_snapshot);
    }

    /// 修改关键词筛选并重置到第 1 页（不自动触发拉取）
    pub fn set_keyword(&mut self, value: &str) {
        self.keyword = value.to_string();
        self.page = 1;
    }

    /// 修改朝代筛选并重置到第 1 页
    pub fn set_dynasty(&mut self, value: &str) {
        self.dynasty = value.to_string();
        self.page = 1;
    }

    /// 修改标签筛选并重置到第 1 页
    pub fn set_tag(&mut self, value: &str) {
        self.tag = value.to_string();
        self.page = 1;
    }

    /// 设置页码，下限为 1
    pub fn set_page(&mut self, page: i64) {
        self.page = page.clamp(1, u32::MAX as i64) as u32;
    }

    /// 设置单页数量，收敛到 [1, 100]，并重置到第 1 页
    pub fn set_page_size(&mut self, size: i64) {
        self.page_size = size.clamp(MIN_PAGE_SIZE as i64, MAX_PAGE_SIZE as i64) as u32;
        self.page = 1;
    }

    /// 末页页码，向上取整，至少为 1
    pub fn last_page(&self) -> u64 {
        let per_page = self.page_size.max(1) as u64;
        self.total.div_ceil(per_page).max(1)
    }

    /// 精选诗词，严格按 featured_ids 顺序输出
    ///
    /// 每个 id 优先取自当页结果，其次取自快照；两处都没有的静默跳过。
    /// 精选集尚未选定时回退为当页前 6 首（仅展示回退，不写 featured_ids）
    pub fn featured_poems(&self) -> Vec<Poem> {
        if self.featured_ids.is_empty() {
            return self.poems.iter().take(MAX_FEATURED).cloned().collect();
        }
        self.featured_ids
            .iter()
            .filter_map(|id| self.resolve_poem(*id))
            .collect()
    }

    /// 收藏诗词，按收藏顺序输出；解析不到的 id 静默跳过
    pub fn favorite_poems(&self) -> Vec<Poem> {
        self.favorite_ids
            .iter()
            .filter_map(|id| self.resolve_poem(*id))
            .collect()
    }

    /// 在当页结果与精选快照中按 id 解析诗词，当页优先
    pub fn resolve_poem(&self, id: i64) -> Option<Poem> {
        self.poems
            .iter()
            .find(|p| p.id == id)
            .or_else(|| self.featured_snapshot.iter().find(|p| p.id == id))
            .cloned()
    }

    pub fn is_favorite(&self, id: i64) -> bool {
        self.favorite_ids.contains(&id)
    }

    /// 收藏切换
    pub fn toggle_favorite(&mut self, id: i64, kv: &dyn KvStore) {
        let liked = !self.is_favorite(id);
        self.set_favorite(id, liked, kv);
    }

    /// 设置收藏状态
    ///
    /// 对集合幂等（重复收藏、取消不存在的收藏都不改变集合），
    /// 但每次调用都会触发一次持久化写入
    pub fn set_favorite(&mut self, id: i64, liked: bool, kv: &dyn KvStore) {
        if liked {
            if !self.favorite_ids.contains(&id) {
                self.favorite_ids.push(id);
            }
        } else {
            self.favorite_ids.retain(|f| *f != id);
        }
        persist_json(kv, FAVORITE_IDS_KEY, &self.favorite_ids);
    }

    /// 清空收藏并持久化
    pub fn clear_favorites(&mut self, kv: &dyn KvStore) {
        self.favorite_ids.clear();
        persist_json(kv, FAVORITE_IDS_KEY, &self.favorite_ids);
    }

    /// 管理端覆盖精选集（整体替换，不与旧值合并）
    ///
    /// 输入保序去重并截断到 6 个；快照仅由当页已加载的诗词重建，
    /// 未加载的 id 不保留旧快照条目。两者都持久化
    pub fn set_featured(&mut self, ids: &[i64], kv: &dyn KvStore) {
        self.featured_ids = dedup_ids(ids, MAX_FEATURED);
        self.featured_snapshot = self
            .featured_ids
            .iter()
            .filter_map(|id| self.poems.iter().find(|p| p.id == *id).cloned())
            .collect();
        persist_json(kv, FEATURED_IDS_KEY, &self.featured_ids);
        persist_json(kv, FEATURED_SNAPSHOT_KEY, &self.featured_snapshot);
    }
}

/// 保序去重，至多保留 limit 个
fn dedup_ids(ids: &[i64], limit: usize) -> Vec<i64> {
    let mut out: Vec<i64> = Vec::new();
    for id in ids {
        if !out.contains(id) {
            out.push(*id);
            if out.len() >= limit {
                break;
            }
        }
    }
    out
}

/// 尽力持久化: 序列化失败或存储不可用都静默忽略
fn persist_json<T: serde::Serialize>(kv: &dyn KvStore, key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        kv.set(key, &json);
    }
}
