//! 视图组件

pub mod favorites;
pub mod featured_strip;
pub mod header;
pub mod poem_detail;
pub mod poem_list;
pub mod search_bar;
