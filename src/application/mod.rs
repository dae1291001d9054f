//! 应用层：请求编排
//!
//! 将分类、分发和组装串成一次完整的问答

pub mod router;

pub use router::QueryRouter;
