use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

/// Flat ship silhouette in the XY plane: nose cone, body and two fins.
pub fn build_ship_mesh() -> Mesh {
    let positions: Vec<[f32; 3]> = vec![
        // nose
        [0.0, 0.6, 0.0],
        [-0.15, 0.3, 0.0],
        [0.15, 0.3, 0.0],
        // body
        [-0.15, 0.3, 0.0],
        [-0.15, -0.3, 0.0],
        [0.15, -0.3, 0.0],
        [0.15, 0.3, 0.0],
        // left fin
        [-0.15, -0.3, 0.0],
        [-0.25, -0.45, 0.0],
        [-0.15, -0.45, 0.0],
        // right fin
        [0.15, -0.3, 0.0],
        [0.15, -0.45, 0.0],
        [0.25, -0.45, 0.0],
    ];
    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];
    let indices: Vec<u32> = vec![0, 1, 2, 3, 4, 5, 3, 5, 6, 7, 8, 9, 10, 11, 12];
    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_indices(Indices::U32(indices))
}
