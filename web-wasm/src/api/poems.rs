//! 诗词搜索与详情接口

use shici_common::{Poem, PoemPage, Result, SearchQuery};

use super::client::api_get;

/// 搜索诗词，返回当页结果与总数
///
/// 出站参数由 SearchQuery 构建，空白筛选条件不上行
pub async fn search_poems(query: &SearchQuery) -> Result<PoemPage> {
    api_get("/poems_search", &query.to_params()).await
}

/// 按 id 拉取诗词详情（当页与快照都未命中时的回退）
pub async fn fetch_poem_by_id(id: i64) -> Result<Poem> {
    api_get(&format!("/poems/{}", id), &[]).await
}
