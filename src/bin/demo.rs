//! AdjGraph 演示入口
//!
//! 构建示例图并打印邻居列表渲染结果

use adjgraph::Graph;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "adjgraph-demo")]
#[command(about = "AdjGraph 无向带权邻接图演示")]
struct Args {
    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("AdjGraph - 无向带权邻接图核心 v{}", adjgraph::VERSION);
    println!("=========================================");

    let mut graph = Graph::new();
    let s0 = graph.add_vertex(0);
    let s1 = graph.add_vertex(1);
    let s2 = graph.add_vertex(2);

    graph.add_neighbor(s0, s1)?;
    graph.add_neighbor_weighted(s0, s2, 4)?;
    graph.change_neighbor_distance(s0, s1, 3)?;

    println!("顶点数: {}", graph.vertex_count());
    println!("边数: {}", graph.edge_count());

    for id in [s0, s1, s2] {
        let v = graph.get_vertex(id).ok_or("顶点不存在")?;
        println!(
            "顶点 {} (度 {}): {}",
            v,
            v.degree(),
            graph.neighbors_to_string(id)?
        );
    }

    graph.remove_neighbor(s0, s1)?;
    println!("删除边 0-1 后:");
    for id in [s0, s1, s2] {
        let v = graph.get_vertex(id).ok_or("顶点不存在")?;
        println!("顶点 {}: {}", v, graph.neighbors_to_string(id)?);
    }

    Ok(())
}
