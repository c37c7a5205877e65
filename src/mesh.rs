//! Static geometry: water grid, ship hull and skybox cube.
//!
//! Vertices are created once and never modified; the water is animated
//! entirely in the vertex shader.

use bytemuck::{Pod, Zeroable};

use crate::params::RenderConfig;

/// Vertex data (position only)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Indexed triangle list
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Flat XZ water plane spanning `-half_extent..half_extent` on both axes
    ///
    /// `cells` quads per side, `(cells + 1)^2` vertices.
    pub fn water_grid(cells: u32, half_extent: f32) -> Self {
        let mut vertices = Vec::with_capacity(((cells + 1) * (cells + 1)) as usize);
        let mut indices = Vec::with_capacity((cells * cells * 6) as usize);

        // Outer loop walks X, inner loop walks Z
        for i in 0..=cells {
            for j in 0..=cells {
                let x = -half_extent + 2.0 * half_extent * i as f32 / cells as f32;
                let z = -half_extent + 2.0 * half_extent * j as f32 / cells as f32;
                vertices.push(Vertex {
                    position: [x, 0.0, z],
                });
            }
        }

        for i in 0..cells {
            for j in 0..cells {
                let top_left = i * (cells + 1) + j;
                let top_right = top_left + 1;
                let bottom_left = (i + 1) * (cells + 1) + j;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self { vertices, indices }
    }

    /// Tetrahedral hull: deck apex above the center, bow toward +Z
    pub fn ship_hull() -> Self {
        let vertices = vec![
            Vertex {
                position: [0.0, 0.5, 0.0],
            },
            Vertex {
                position: [-0.5, 0.0, -1.0],
            },
            Vertex {
                position: [0.5, 0.0, -1.0],
            },
            Vertex {
                position: [0.0, 0.0, 1.0],
            },
        ];
        let indices = vec![0, 1, 2, 0, 1, 3, 0, 2, 3];
        Self { vertices, indices }
    }

    /// Axis-aligned cube centered on the origin
    pub fn skybox(half_extent: f32) -> Self {
        let h = half_extent;
        let corners = [
            [-h, -h, -h],
            [h, -h, -h],
            [h, h, -h],
            [-h, h, -h],
            [-h, -h, h],
            [h, -h, h],
            [h, h, h],
            [-h, h, h],
        ];
        let vertices = corners
            .into_iter()
            .map(|position| Vertex { position })
            .collect();

        #[rustfmt::skip]
        let indices = vec![
            0, 1, 2, 2, 3, 0,
            4, 5, 6, 6, 7, 4,
            0, 4, 7, 7, 3, 0,
            1, 5, 6, 6, 2, 1,
            3, 2, 6, 6, 7, 3,
            0, 1, 5, 5, 4, 0,
        ];

        Self { vertices, indices }
    }
}

/// The three meshes drawn every frame
pub struct SceneMeshes {
    pub water: Mesh,
    pub ship: Mesh,
    pub skybox: Mesh,
}

impl SceneMeshes {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            water: Mesh::water_grid(config.water_grid_cells, config.water_half_extent_m),
            ship: Mesh::ship_hull(),
            skybox: Mesh::skybox(config.skybox_half_extent_m),
        }
    }
}
