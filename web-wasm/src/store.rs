//! 诗词目录响应式 store
//!
//! 以 leptos 信号包装 PoemCatalog，向组件暴露可追踪的读取与命令。
//! 目录状态单浏览器、单会话，构建时从 localStorage 水合。

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use shici_common::{Poem, PoemCatalog};

use crate::api::poems::search_poems;
use crate::storage::LocalKv;

/// 目录 store 句柄（Copy，经 context 下发给组件）
#[derive(Clone, Copy)]
pub struct PoemsStore {
    catalog: RwSignal<PoemCatalog>,
}

impl PoemsStore {
    /// 构建并从 localStorage 水合精选集、精选快照与收藏
    pub fn new() -> Self {
        Self {
            catalog: RwSignal::new(PoemCatalog::new(&LocalKv)),
        }
    }

    // ---- 可观察字段 ----

    pub fn poems(&self) -> Vec<Poem> {
        self.catalog.with(|c| c.poems.clone())
    }

    pub fn loading(&self) -> bool {
        self.catalog.with(|c| c.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.catalog.with(|c| c.error.clone())
    }

    pub fn keyword(&self) -> String {
        self.catalog.with(|c| c.keyword.clone())
    }

    pub fn dynasty(&self) -> String {
        self.catalog.with(|c| c.dynasty.clone())
    }

    pub fn tag(&self) -> String {
        self.catalog.with(|c| c.tag.clone())
    }

    pub fn page(&self) -> u32 {
        self.catalog.with(|c| c.page)
    }

    pub fn page_size(&self) -> u32 {
        self.catalog.with(|c| c.page_size)
    }

    pub fn total(&self) -> u64 {
        self.catalog.with(|c| c.total)
    }

    pub fn last_page(&self) -> u64 {
        self.catalog.with(|c| c.last_page())
    }

    pub fn featured_poems(&self) -> Vec<Poem> {
        self.catalog.with(|c| c.featured_poems())
    }

    pub fn favorite_ids(&self) -> Vec<i64> {
        self.catalog.with(|c| c.favorite_ids.clone())
    }

    pub fn favorite_poems(&self) -> Vec<Poem> {
        self.catalog.with(|c| c.favorite_poems())
    }

    pub fn is_favorite(&self, id: i64) -> bool {
        self.catalog.with(|c| c.is_favorite(id))
    }

    /// 当页优先、快照兜底的本地解析（详情页先查本地，再走接口）
    pub fn find_poem(&self, id: i64) -> Option<Poem> {
        self.catalog.with_untracked(|c| c.resolve_poem(id))
    }

    // ---- 命令 ----

    /// 按当前筛选与分页参数拉取一页
    ///
    /// 重叠调用不会相互取消也不排序: 各自独立完成，后完成者覆盖
    /// poems/total（按完成顺序而非调用顺序）。需要去抖或顺序保证时
    /// 由调用方自行处理
    pub fn fetch(&self) {
        let catalog = self.catalog;
        let query = catalog.with_untracked(|c| c.search_query());
        catalog.update(|c| c.begin_fetch());

        spawn_local(async move {
            match search_poems(&query).await {
                Ok(page) => catalog.update(|c| c.apply_page(page, &LocalKv)),
                Err(err) => catalog.update(|c| c.fail_fetch(err.to_string())),
            }
        });
    }

    pub fn set_keyword(&self, value: &str) {
        self.catalog.update(|c| c.set_keyword(value));
    }

    pub fn set_dynasty(&self, value: &str) {
        self.catalog.update(|c| c.set_dynasty(value));
    }

    pub fn set_tag(&self, value: &str) {
        self.catalog.update(|c| c.set_tag(value));
    }

    pub fn set_page(&self, page: i64) {
        self.catalog.update(|c| c.set_page(page));
    }

    pub fn set_page_size(&self, size: i64) {
        self.catalog.update(|c| c.set_page_size(size));
    }

    /// 管理端覆盖精选集
    pub fn set_featured(&self, ids: &[i64]) {
        self.catalog.update(|c| c.set_featured(ids, &LocalKv));
    }

    pub fn toggle_favorite(&self, id: i64) {
        self.catalog.update(|c| c.toggle_favorite(id, &LocalKv));
    }

    pub fn set_favorite(&self, id: i64, liked: bool) {
        self.catalog.update(|c| c.set_favorite(id, liked, &LocalKv));
    }

    pub fn clear_favorites(&self) {
        self.catalog.update(|c| c.clear_favorites(&LocalKv));
    }
}

impl Default for PoemsStore {
    fn default() -> Self {
        Self::new()
    }
}
