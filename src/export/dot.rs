//! Graphviz Dot writer
//!
//! Output shape:
//!
//! ```text
//! strict graph {
//!     node [color="lightblue" ...]
//!     edge [color="black"]
//!     1 [label="a"]
//!     2 [label="b"]
//!     1 -- 2 []
//! }
//! ```
//!
//! Vertices are named by their [`VertexId`](crate::graph::VertexId), which is
//! stable for the lifetime of the graph.

use super::config::DotConfig;
use crate::error::GraphResult;
use crate::graph::{Attributes, Graph, GraphKind, VertexKey};
use std::fmt::Display;
use std::io::Write;
use tracing::debug;

fn format_attributes<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    items
        .into_iter()
        .map(|(k, v)| format!("{}={:?}", k, v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write the Dot representation of `graph` to `writer`.
///
/// A vertex without a `label` attribute is labelled with its key. The graph
/// itself is not modified.
pub fn write_dot<K, W>(graph: &Graph<K>, config: &DotConfig, mut writer: W) -> GraphResult<()>
where
    K: VertexKey + Display,
    W: Write,
{
    let (graph_kind, arrow) = match graph.kind() {
        GraphKind::Undirected => ("graph", "--"),
        GraphKind::Directed => ("digraph", "->"),
    };

    writeln!(writer, "strict {} {{", graph_kind)?;
    writeln!(writer, "\tnode [{}]", format_attributes(&config.node_attributes))?;
    writeln!(writer, "\tedge [{}]", format_attributes(&config.edge_attributes))?;

    for vertex in graph.vertices() {
        let attributes = if vertex.attributes().contains_key("label") {
            format_attributes(vertex.attributes())
        } else {
            let mut labelled: Attributes = vertex.attributes().clone();
            labelled.insert("label".to_string(), vertex.key().to_string());
            format_attributes(&labelled)
        };
        writeln!(writer, "\t{} [{}]", vertex.id(), attributes)?;
    }

    for edge in graph.edges() {
        let (Some(from), Some(to)) = (graph.get_vertex(edge.from()), graph.get_vertex(edge.to())) else {
            continue;
        };
        writeln!(
            writer,
            "\t{} {} {} [{}]",
            from.id(),
            arrow,
            to.id(),
            format_attributes(edge.attributes())
        )?;
    }

    writeln!(writer, "}}")?;
    debug!(
        "Wrote Dot output for {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(())
}

/// Render the Dot representation of `graph` as a string
pub fn to_dot<K>(graph: &Graph<K>, config: &DotConfig) -> GraphResult<String>
where
    K: VertexKey + Display,
{
    let mut buf = Vec::new();
    write_dot(graph, config, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
