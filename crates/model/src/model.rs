use glam::DVec3;
use serde::{Deserialize, Serialize};
use vectorscape_common::Color;

/// An edge between two vertex indices, with an optional per-edge color that
/// wins over both the model color and any instance-level override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
    pub color: Option<Color>,
}

/// Errors from wireframe model construction.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("edge {edge} references vertex {index}, but the model has {vertex_count} vertices")]
    EdgeIndexOutOfBounds {
        edge: usize,
        index: usize,
        vertex_count: usize,
    },
}

/// A rigid 3D shape defined purely by model-space vertices and connecting
/// edges, with no filled surfaces.
///
/// Built once, then shared read-only by every instance that draws it. An
/// out-of-range edge index is a programmer error and is rejected here, not
/// during rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct WireframeModel {
    vertices: Vec<DVec3>,
    edges: Vec<Edge>,
    color: Color,
}

impl WireframeModel {
    pub fn new(
        vertices: Vec<DVec3>,
        edges: Vec<Edge>,
        color: Color,
    ) -> Result<Self, ModelError> {
        for (i, edge) in edges.iter().enumerate() {
            for index in [edge.start, edge.end] {
                if index >= vertices.len() {
                    return Err(ModelError::EdgeIndexOutOfBounds {
                        edge: i,
                        index,
                        vertex_count: vertices.len(),
                    });
                }
            }
        }
        Ok(Self {
            vertices,
            edges,
            color,
        })
    }

    /// Model-space vertices, fixed at construction.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Default color for edges without a per-edge override.
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Convert `[start, end]` index pairs into edge records with no per-edge
/// color override.
pub fn edges_from_pairs(pairs: &[[usize; 2]]) -> Vec<Edge> {
    pairs
        .iter()
        .map(|&[start, end]| Edge {
            start,
            end,
            color: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_vertices() -> Vec<DVec3> {
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn valid_model_constructs() {
        let model = WireframeModel::new(
            triangle_vertices(),
            edges_from_pairs(&[[0, 1], [1, 2], [2, 0]]),
            Color(0x00ff00),
        )
        .unwrap();
        assert_eq!(model.vertex_count(), 3);
        assert_eq!(model.edge_count(), 3);
    }

    #[test]
    fn out_of_range_edge_is_rejected() {
        let err = WireframeModel::new(
            triangle_vertices(),
            edges_from_pairs(&[[0, 3]]),
            Color(0x00ff00),
        )
        .unwrap_err();
        match err {
            ModelError::EdgeIndexOutOfBounds {
                edge,
                index,
                vertex_count,
            } => {
                assert_eq!(edge, 0);
                assert_eq!(index, 3);
                assert_eq!(vertex_count, 3);
            }
        }
    }

    #[test]
    fn empty_model_is_valid() {
        let model = WireframeModel::new(Vec::new(), Vec::new(), Color(0)).unwrap();
        assert_eq!(model.edge_count(), 0);
    }

    #[test]
    fn edges_from_pairs_carry_no_override() {
        let edges = edges_from_pairs(&[[0, 1], [1, 2]]);
        assert_eq!(edges.len(), 2);
        assert!(edges.iter().all(|e| e.color.is_none()));
        assert_eq!(edges[1].start, 1);
        assert_eq!(edges[1].end, 2);
    }
}
