//! 通用类型定义
//!
//! 顶点名称（整数或字符串）和边权重

use std::fmt;

/// 边权重（边的长度/代价）
pub type Weight = i64;

/// 省略权重时使用的默认值
pub const DEFAULT_WEIGHT: Weight = 1;

/// 顶点名称（整数或字符串）
///
/// 名称的唯一性由调用方保证，本结构不做检查；
/// 邻接关系以顶点身份（`VertexId`）为键，与名称无关。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VertexName {
    /// 整数名称
    Int(i64),
    /// 字符串名称
    Str(String),
}

impl VertexName {
    pub fn type_name(&self) -> &str {
        match self {
            VertexName::Int(_) => "int",
            VertexName::Str(_) => "str",
        }
    }
}

impl fmt::Display for VertexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexName::Int(n) => write!(f, "{}", n),
            VertexName::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for VertexName {
    fn from(n: i64) -> Self {
        VertexName::Int(n)
    }
}

impl From<&str> for VertexName {
    fn from(s: &str) -> Self {
        VertexName::Str(s.to_string())
    }
}

impl From<String> for VertexName {
    fn from(s: String) -> Self {
        VertexName::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_display() {
        assert_eq!(VertexName::Int(3).to_string(), "3");
        assert_eq!(VertexName::Int(-7).to_string(), "-7");
        assert_eq!(VertexName::Str("gare".to_string()).to_string(), "gare");
    }

    #[test]
    fn test_name_from() {
        assert_eq!(VertexName::from(0), VertexName::Int(0));
        assert_eq!(VertexName::from("a"), VertexName::Str("a".to_string()));
        assert_eq!(VertexName::from(1).type_name(), "int");
        assert_eq!(VertexName::from("a").type_name(), "str");
    }

}
