//! 领域层
//!
//! 请求值以及外部连接器实现的能力接口

pub mod query;
pub mod source;

pub use query::*;
pub use source::{CompletionSource, EncyclopediaSource, NewsSource, WeatherSource};
