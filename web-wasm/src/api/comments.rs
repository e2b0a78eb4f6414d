//! 评论接口

use serde::{Deserialize, Serialize};

use shici_common::{Comment, Result};

use super::client::{api_get, api_post};

/// 评论列表响应
#[derive(Debug, Deserialize)]
struct CommentList {
    items: Vec<Comment>,
}

/// 新评论请求体
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewComment<'a> {
    poem_id: i64,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<i64>,
}

/// 拉取某首诗词的评论
pub async fn fetch_comments(poem_id: i64) -> Result<Vec<Comment>> {
    let list: CommentList = api_get("/comments", &[("poemId", poem_id.to_string())]).await?;
    Ok(list.items)
}

/// 发表顶层评论
pub async fn post_comment(poem_id: i64, content: &str, author: Option<&str>) -> Result<Comment> {
    api_post(
        "/comments",
        &NewComment {
            poem_id,
            content,
            author,
            parent_id: None,
        },
    )
    .await
}

/// 回复评论（必须携带 parent_id）
pub async fn post_reply(
    poem_id: i64,
    parent_id: i64,
    content: &str,
    author: Option<&str>,
) -> Result<Comment> {
    api_post(
        "/comments",
        &NewComment {
            poem_id,
            content,
            author,
            parent_id: Some(parent_id),
        },
    )
    .await
}
