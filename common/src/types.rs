//! 共享数据类型
//!
//! 与服务端 JSON 载荷对应的结构（字段名为 camelCase）:
//! - Poem: 诗词，服务端数据的只读投影
//! - PoemPage: 搜索服务返回的分页结果
//! - Comment: 评论

use serde::{Deserialize, Serialize};

/// 诗词（客户端视角只读）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Poem {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub dynasty: String,
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub famous_lines: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,

    /// 可视化素材引用
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viz: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// 搜索服务返回的一页结果
///
/// total 可能缺失，此时以 items 长度兜底
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PoemPage {
    pub items: Vec<Poem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// 评论
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    pub id: i64,
    pub poem_id: i64,
    pub author: String,
    pub content: String,
    pub likes: i64,
    pub time: String,
    /// 回复的目标评论 id，顶层评论为空
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}
