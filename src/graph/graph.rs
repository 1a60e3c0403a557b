//! 图数据结构
//!
//! 无向带权图的核心：顶点竞技场与对称的边变更操作
//!
//! 顶点集中存放在竞技场中，以 `VertexId` 索引；每个顶点的邻接表
//! 记录 `VertexId -> 权重`。所有边变更操作先校验、后变更：
//! 成功时两端同时生效，失败时两端都不变。

use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use crate::types::{VertexName, Weight, DEFAULT_WEIGHT};
use std::collections::HashMap;
use tracing::debug;

/// 无向带权图
pub struct Graph {
    /// 顶点竞技场
    vertices: HashMap<VertexId, Vertex>,
    /// 下一个顶点 ID
    next_vertex_id: u64,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            next_vertex_id: 1,
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 名称不检查唯一性（由调用方保证）；两个同名顶点是两个不同的顶点。
    pub fn add_vertex(&mut self, name: impl Into<VertexName>) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;

        let vertex = Vertex::new(id, name.into());
        self.vertices.insert(id, vertex);

        debug!(id = id.as_u64(), "添加顶点");
        id
    }

    /// 获取顶点
    pub fn get_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// 获取顶点（可变引用，供外部算法写 visited/predecessor 标记）
    pub fn get_vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(&id)
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边数量（无向边计一次，自环计一次）
    pub fn edge_count(&self) -> usize {
        self.vertices
            .values()
            .map(|v| {
                v.neighbors()
                    .filter(|(nid, _)| nid.as_u64() >= v.id().as_u64())
                    .count()
            })
            .sum()
    }

    // ==================== 边操作 ====================

    /// 添加邻居（默认权重 1）
    ///
    /// 等价于 `add_neighbor_weighted(a, b, DEFAULT_WEIGHT)`。
    pub fn add_neighbor(&mut self, a: VertexId, b: VertexId) -> Result<()> {
        self.add_neighbor_weighted(a, b, DEFAULT_WEIGHT)
    }

    /// 添加邻居（指定权重）
    ///
    /// 对称写入两端的邻接表：`a` 的表中记 `b -> weight`，`b` 的表中
    /// 记 `a -> weight`。边已存在时静默覆盖两侧的权重（最后写入生效），
    /// 条目在插入顺序中的位置保持不变。
    pub fn add_neighbor_weighted(&mut self, a: VertexId, b: VertexId, weight: Weight) -> Result<()> {
        // 先校验两端都存在，再开始变更
        if !self.vertices.contains_key(&b) {
            return Err(Error::VertexNotFound(format!("{:?}", b)));
        }

        let va = self
            .vertices
            .get_mut(&a)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", a)))?;
        va.set_neighbor(b, weight);

        if a != b {
            let vb = self
                .vertices
                .get_mut(&b)
                .ok_or_else(|| Error::VertexNotFound(format!("{:?}", b)))?;
            vb.set_neighbor(a, weight);
        }

        debug!(a = a.as_u64(), b = b.as_u64(), weight, "添加邻居");
        Ok(())
    }

    /// 修改到某邻居的边权重
    ///
    /// 只从 `a` 一侧检查邻接关系；`b` 不是 `a` 的邻居时报错且不做任何
    /// 变更。成功时等价于 `add_neighbor_weighted(a, b, weight)`。
    pub fn change_neighbor_distance(
        &mut self,
        a: VertexId,
        b: VertexId,
        weight: Weight,
    ) -> Result<()> {
        let va = self
            .vertices
            .get(&a)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", a)))?;
        if !va.has_neighbor(b) {
            return Err(Error::NeighborNotFound(format!("{:?} 不是 {:?} 的邻居", b, a)));
        }

        self.add_neighbor_weighted(a, b, weight)
    }

    /// 删除邻居
    ///
    /// `b` 是 `a` 的邻居时对称删除两端的条目；不是邻居时静默无操作
    /// （与 `change_neighbor_distance` 的报错行为相反，这是刻意的契约）。
    pub fn remove_neighbor(&mut self, a: VertexId, b: VertexId) -> Result<()> {
        if !self.vertices.contains_key(&b) {
            return Err(Error::VertexNotFound(format!("{:?}", b)));
        }

        let va = self
            .vertices
            .get_mut(&a)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", a)))?;
        if va.unset_neighbor(b).is_none() {
            // 不是邻居：静默无操作
            return Ok(());
        }

        if a != b {
            if let Some(vb) = self.vertices.get_mut(&b) {
                vb.unset_neighbor(a);
            }
        }

        debug!(a = a.as_u64(), b = b.as_u64(), "删除邻居");
        Ok(())
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的度
    pub fn degree(&self, id: VertexId) -> Result<usize> {
        self.vertices
            .get(&id)
            .map(Vertex::degree)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", id)))
    }

    /// 判断两顶点是否相邻
    pub fn has_neighbor(&self, a: VertexId, b: VertexId) -> bool {
        self.vertices
            .get(&a)
            .map(|v| v.has_neighbor(b))
            .unwrap_or(false)
    }

    /// 获取两顶点之间的边权重
    pub fn neighbor_weight(&self, a: VertexId, b: VertexId) -> Option<Weight> {
        self.vertices.get(&a)?.neighbor_weight(b)
    }

    // ==================== 文本渲染 ====================

    /// 按插入顺序渲染顶点的邻居列表
    ///
    /// 无邻居时返回 `"[]"`，否则形如 `[(name, weight), ...]`，
    /// 例如 `[(1, 3), (2, 4)]`。
    pub fn neighbors_to_string(&self, id: VertexId) -> Result<String> {
        let v = self
            .vertices
            .get(&id)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", id)))?;

        if v.degree() == 0 {
            return Ok("[]".to_string());
        }

        let entries: Vec<String> = v
            .neighbors()
            .map(|(nid, w)| {
                let name = self
                    .vertices
                    .get(&nid)
                    .map(|n| n.name().to_string())
                    .unwrap_or_default();
                format!("({}, {})", name, w)
            })
            .collect();

        Ok(format!("[{}]", entries.join(", ")))
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
