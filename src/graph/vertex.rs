//! 顶点定义
//!
//! 顶点持有名称、按插入顺序排列的邻接表，以及为遍历算法预留的标记字段

use crate::types::{VertexName, Weight};
use indexmap::IndexMap;
use std::fmt;

/// 顶点 ID（竞技场句柄，全局唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 顶点
///
/// 邻接表以 `VertexId` 为键（身份，而非名称），值为边权重。
/// `predecessor` 和 `visited` 是为外部遍历算法（如 Dijkstra）预留的
/// 标记字段，本模块的任何操作都不会修改它们。
#[derive(Debug, Clone)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 顶点名称
    name: VertexName,
    /// 邻接表：邻居 ID -> 边权重（保持插入顺序）
    neighbors: IndexMap<VertexId, Weight>,
    /// 前驱顶点（遍历算法使用）
    predecessor: Option<VertexId>,
    /// 访问标记（遍历算法使用）
    visited: bool,
}

impl Vertex {
    /// 创建新顶点（邻接表为空，未访问，无前驱）
    pub fn new(id: VertexId, name: VertexName) -> Self {
        Self {
            id,
            name,
            neighbors: IndexMap::new(),
            predecessor: None,
            visited: false,
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取顶点名称
    pub fn name(&self) -> &VertexName {
        &self.name
    }

    /// 获取顶点的度（邻接表条目数）
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// 判断某顶点是否为邻居
    pub fn has_neighbor(&self, other: VertexId) -> bool {
        self.neighbors.contains_key(&other)
    }

    /// 获取到某邻居的边权重
    pub fn neighbor_weight(&self, other: VertexId) -> Option<Weight> {
        self.neighbors.get(&other).copied()
    }

    /// 按插入顺序遍历邻居
    pub fn neighbors(&self) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.neighbors.iter().map(|(&id, &w)| (id, w))
    }

    /// 写入或覆盖一条邻接表条目
    ///
    /// 已存在的键保持原有插入位置，只更新权重。
    pub(crate) fn set_neighbor(&mut self, other: VertexId, weight: Weight) {
        self.neighbors.insert(other, weight);
    }

    /// 删除一条邻接表条目（保持其余条目的插入顺序）
    pub(crate) fn unset_neighbor(&mut self, other: VertexId) -> Option<Weight> {
        self.neighbors.shift_remove(&other)
    }

    /// 获取前驱顶点
    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor
    }

    /// 设置前驱顶点（供外部算法使用）
    pub fn set_predecessor(&mut self, pred: Option<VertexId>) {
        self.predecessor = pred;
    }

    /// 获取访问标记
    pub fn visited(&self) -> bool {
        self.visited
    }

    /// 设置访问标记（供外部算法使用）
    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}

/// 顶点渲染为其名称的文本形式
impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_new() {
        let v = Vertex::new(VertexId::new(1), VertexName::from(0));

        assert_eq!(v.id().as_u64(), 1);
        assert_eq!(v.name(), &VertexName::Int(0));
        assert_eq!(v.degree(), 0);
        assert_eq!(v.predecessor(), None);
        assert!(!v.visited());
    }

    #[test]
    fn test_vertex_neighbor_entries() {
        let mut v = Vertex::new(VertexId::new(1), VertexName::from("a"));
        v.set_neighbor(VertexId::new(2), 3);
        v.set_neighbor(VertexId::new(3), 4);

        assert_eq!(v.degree(), 2);
        assert!(v.has_neighbor(VertexId::new(2)));
        assert_eq!(v.neighbor_weight(VertexId::new(2)), Some(3));
        assert_eq!(v.neighbor_weight(VertexId::new(9)), None);

        // 覆盖权重不改变插入位置
        v.set_neighbor(VertexId::new(2), 7);
        let order: Vec<_> = v.neighbors().collect();
        assert_eq!(order, vec![(VertexId::new(2), 7), (VertexId::new(3), 4)]);

        assert_eq!(v.unset_neighbor(VertexId::new(2)), Some(7));
        assert_eq!(v.unset_neighbor(VertexId::new(2)), None);
        assert_eq!(v.degree(), 1);
    }

    #[test]
    fn test_vertex_scratch_fields() {
        let mut v = Vertex::new(VertexId::new(1), VertexName::from(0));
        v.set_visited(true);
        v.set_predecessor(Some(VertexId::new(2)));

        assert!(v.visited());
        assert_eq!(v.predecessor(), Some(VertexId::new(2)));
    }

    #[test]
    fn test_vertex_display() {
        let v = Vertex::new(VertexId::new(1), VertexName::from(3));
        assert_eq!(v.to_string(), "3");

        let v = Vertex::new(VertexId::new(2), VertexName::from("gare"));
        assert_eq!(v.to_string(), "gare");
    }
}
