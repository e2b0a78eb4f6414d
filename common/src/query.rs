//! 出站搜索参数构建
//!
//! 过滤空/纯空白的筛选条件，只携带有效参数，
//! 避免出现 keyword= 空值之类的脏请求

/// 一次搜索请求的出站参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// 关键词，未设置时整体省略
    pub keyword: Option<String>,
    pub dynasty: Option<String>,
    pub tag: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl SearchQuery {
    /// 转为 (键, 值) 参数序列，未设置的筛选字段不出现
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(keyword) = &self.keyword {
            params.push(("keyword", keyword.clone()));
        }
        if let Some(dynasty) = &self.dynasty {
            params.push(("dynasty", dynasty.clone()));
        }
        if let Some(tag) = &self.tag {
            params.push(("tag", tag.clone()));
        }
        params.push(("page", self.page.to_string()));
        params.push(("pageSize", self.page_size.to_string()));
        params
    }
}

/// 筛选值归一化: 去除首尾空白，空结果视为未设置
pub(crate) fn normalize_filter(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
