//! AdjGraph - 无向带权邻接图核心
//!
//! 面向后续图算法（如 Dijkstra 最短路径）的基础数据结构，支持：
//! - 顶点竞技场：按 `VertexId` 身份寻址，名称可重复
//! - 对称的边创建、权重修改、删除（两端要么同时生效，要么都不变）
//! - 按插入顺序的邻居列表文本渲染

pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{Graph, Vertex, VertexId};
pub use types::{VertexName, Weight, DEFAULT_WEIGHT};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
