use ugraph_core::{Graph, Vertex};

/// Creates one vertex per character of `labels` and a graph holding them.
#[must_use]
pub fn labelled_graph(labels: &str) -> (Vec<Vertex>, Graph) {
    let vertices: Vec<_> = labels.chars().map(|c| Vertex::new(c.to_string())).collect();
    let graph = Graph::from_parts(vertices.clone(), []).expect("vertices only");
    (vertices, graph)
}

/// Creates `count` vertices labelled by index and a graph holding them.
#[must_use]
pub fn numbered_graph(count: usize) -> (Vec<Vertex>, Graph) {
    let vertices: Vec<_> = (0..count).map(|i| Vertex::new(i.to_string())).collect();
    let graph = Graph::from_parts(vertices.clone(), []).expect("vertices only");
    (vertices, graph)
}
