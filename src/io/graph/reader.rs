use crate::io::{Format, error::Error};
use crate::model::graph::{SkeletonEdge, SkeletonGraph, SkeletonNode};
use crate::model::types::Element;
use serde::Deserialize;
use std::io::Read;
use toml::Spanned;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphDocument {
    #[serde(default, rename = "node")]
    nodes: Vec<NodeRecord>,
    #[serde(default, rename = "edge")]
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeRecord {
    name: String,
    pos: [f64; 2],
    #[serde(default)]
    element: Option<Spanned<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeRecord {
    source: String,
    target: String,
}

pub fn read<R: Read>(mut reader: R) -> Result<SkeletonGraph, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let document: GraphDocument = toml::from_str(&text).map_err(|e| {
        let line = e
            .span()
            .map(|span| line_of(&text, span.start))
            .unwrap_or(1);
        Error::parse(Format::Graph, line, e.message())
    })?;

    let mut nodes = Vec::with_capacity(document.nodes.len());
    for record in document.nodes {
        let mut node = SkeletonNode::new(record.name, record.pos[0], record.pos[1]);
        if let Some(symbol) = record.element {
            let line = line_of(&text, symbol.span().start);
            let element = symbol
                .get_ref()
                .parse::<Element>()
                .map_err(|e| Error::parse(Format::Graph, line, e.to_string()))?;
            node = node.with_element(element);
        }
        nodes.push(node);
    }

    let edges = document
        .edges
        .into_iter()
        .map(|record| SkeletonEdge::new(record.source, record.target))
        .collect();

    Ok(SkeletonGraph { nodes, edges })
}

fn line_of(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}
