//! 服务端接口封装

pub mod client;
pub mod comments;
pub mod poems;
