//! Partitioned vertex/index storage (§3, §4.7) shared by every point-set.
//!
//! A single contiguous allocation backs both the "with closing edge" and
//! "without closing edge" views: closing-partition vertices sit at the
//! tail of the vertex array, closing-partition indices sit at the head of
//! the index array. Switching views is then a prefix/suffix slice, at
//! zero copy cost.

use crate::vertex::Vertex;
use alloc::vec::Vec;

/// Accumulates one point-set's geometry during generation.
///
/// Builders emit into two logical partitions (non-closing, closing)
/// without knowing up front how large either will end up being; depth is
/// assigned locally (one unit per primitive group, starting at zero) and
/// inverted globally in [`MeshBuilder::finish`], per §4.7.
#[derive(Default)]
pub struct MeshBuilder {
    pre_vertices: Vec<Vertex>,
    close_vertices: Vec<Vertex>,
    pre_indices: Vec<u32>,
    close_indices: Vec<u32>,
    pre_depth: u32,
    close_depth: u32,
}

impl MeshBuilder {
    pub fn new() -> Self {
        MeshBuilder::default()
    }

    /// Starts a new primitive group (sub-edge quad, join fan, cap fan) in
    /// the given partition and returns the local depth value every vertex
    /// of that group must be stamped with.
    pub fn begin_primitive(&mut self, closing: bool) -> u32 {
        let counter = if closing {
            &mut self.close_depth
        } else {
            &mut self.pre_depth
        };
        let depth = *counter;
        *counter += 1;
        depth
    }

    /// Appends a vertex to the given partition, returning its local index
    /// (valid as an index operand within the same partition only).
    pub fn push_vertex(&mut self, closing: bool, vertex: Vertex) -> u32 {
        let vertices = if closing {
            &mut self.close_vertices
        } else {
            &mut self.pre_vertices
        };
        vertices.push(vertex);
        (vertices.len() - 1) as u32
    }

    pub fn push_index(&mut self, closing: bool, local_index: u32) {
        if closing {
            self.close_indices.push(local_index);
        } else {
            self.pre_indices.push(local_index);
        }
    }

    pub fn vertex_count(&self, closing: bool) -> usize {
        if closing {
            self.close_vertices.len()
        } else {
            self.pre_vertices.len()
        }
    }

    pub fn index_count(&self, closing: bool) -> usize {
        if closing {
            self.close_indices.len()
        } else {
            self.pre_indices.len()
        }
    }

    /// Inverts depth per §4.7 and lays out the final buffers.
    pub fn finish(mut self) -> PartitionedMesh {
        let close_count = self.close_depth;
        let pre_close_count = self.pre_depth;
        let total = pre_close_count + close_count;

        for v in &mut self.pre_vertices {
            v.depth = total - (v.depth + close_count) - 1;
        }
        for v in &mut self.close_vertices {
            v.depth = total - v.depth - 1;
        }

        let pre_vertex_count = self.pre_vertices.len() as u32;
        let mut vertices = self.pre_vertices;
        vertices.append(&mut self.close_vertices);

        let mut indices: Vec<u32> = self
            .close_indices
            .iter()
            .map(|&i| i + pre_vertex_count)
            .collect();
        let pre_close_index_count = self.pre_indices.len() as u32;
        indices.extend(self.pre_indices);

        PartitionedMesh {
            vertices,
            indices,
            pre_close_vertex_count: pre_vertex_count,
            pre_close_index_count,
            number_depth_pre_close: pre_close_count,
            number_depth_total: total,
        }
    }
}

/// The finished, immutable storage for one point-set.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PartitionedMesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    pre_close_vertex_count: u32,
    pre_close_index_count: u32,
    number_depth_pre_close: u32,
    number_depth_total: u32,
}

impl PartitionedMesh {
    pub fn points(&self, including_closing_edge: bool) -> &[Vertex] {
        if including_closing_edge {
            &self.vertices
        } else {
            &self.vertices[..self.pre_close_vertex_count as usize]
        }
    }

    pub fn indices(&self, including_closing_edge: bool) -> &[u32] {
        if including_closing_edge {
            &self.indices
        } else {
            let head_len = self.indices.len() - self.pre_close_index_count as usize;
            &self.indices[head_len..]
        }
    }

    pub fn number_depth(&self, including_closing_edge: bool) -> u32 {
        if including_closing_edge {
            self.number_depth_total
        } else {
            self.number_depth_pre_close
        }
    }

    /// Number of non-closing vertices; the offset closing-partition local
    /// indices need to become final, "including closing" indices.
    pub(crate) fn pre_close_vertex_count(&self) -> u32 {
        self.pre_close_vertex_count
    }

    /// Number of closing-partition indices; the offset non-closing
    /// local indices need to become final, "including closing" indices.
    pub(crate) fn close_index_count(&self) -> u32 {
        self.indices.len() as u32 - self.pre_close_index_count
    }
}
