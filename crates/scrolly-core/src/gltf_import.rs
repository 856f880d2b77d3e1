//! Flatten a binary glTF (GLB) document into a single [`MeshData`].
//!
//! Every triangle primitive reachable from the default scene is baked into
//! world space using its node transform. Textures are ignored; the base
//! colour factor (times `COLOR_0` when present) becomes the vertex colour.

use crate::error::{AssetError, AssetResult};
use crate::mesh::{compute_normals, Material, MeshData, Vertex};
use glam::{Mat3, Mat4, Vec3};

/// Parse GLB (or self-contained `.gltf` JSON) bytes into one mesh.
pub fn import_glb(bytes: &[u8]) -> AssetResult<MeshData> {
    let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(bytes)?;
    let buffers = gltf::import_buffers(&document, None, blob)?;

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(AssetError::NoGeometry)?;

    let mut out = MeshData::default();
    let mut material = None;
    for node in scene.nodes() {
        visit_node(&node, Mat4::IDENTITY, &buffers, &mut out, &mut material);
    }
    if out.is_empty() {
        return Err(AssetError::NoGeometry);
    }
    out.material = material.unwrap_or_default();
    log::info!(
        "[gltf] imported {} vertices, {} triangles",
        out.vertices.len(),
        out.triangle_count()
    );
    Ok(out)
}

fn visit_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut MeshData,
    material: &mut Option<Material>,
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::warn!(
                    "[gltf] skipping {:?} primitive in mesh '{}'",
                    primitive.mode(),
                    mesh.name().unwrap_or("<unnamed>")
                );
                continue;
            }
            if let Some(part) = read_primitive(&primitive, world, buffers, mesh.name()) {
                if material.is_none() {
                    let pbr = primitive.material().pbr_metallic_roughness();
                    *material = Some(Material {
                        roughness: pbr.roughness_factor(),
                        metalness: pbr.metallic_factor(),
                    });
                }
                out.append(part);
            }
        }
    }
    for child in node.children() {
        visit_node(&child, world, buffers, out, material);
    }
}

fn read_primitive(
    primitive: &gltf::Primitive,
    world: Mat4,
    buffers: &[gltf::buffer::Data],
    mesh_name: Option<&str>,
) -> Option<MeshData> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| d.0.as_slice()));
    let positions: Vec<[f32; 3]> = reader.read_positions()?.collect();
    if positions.is_empty() {
        return None;
    }
    let normals: Option<Vec<[f32; 3]>> = reader.read_normals().map(|n| n.collect());
    let colors: Option<Vec<[f32; 3]>> = reader.read_colors(0).map(|c| c.into_rgb_f32().collect());
    let mut indices: Vec<u32> = match reader.read_indices() {
        Some(idx) => idx.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };
    indices.truncate(indices.len() - indices.len() % 3);
    if let Some(bad) = first_out_of_range(&indices, positions.len()) {
        log::warn!(
            "[gltf] skipping primitive in mesh '{}': index {} >= vertex count {}",
            mesh_name.unwrap_or("<unnamed>"),
            bad,
            positions.len()
        );
        return None;
    }

    let base = primitive.material().pbr_metallic_roughness().base_color_factor();
    let base = Vec3::new(base[0], base[1], base[2]);
    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();

    let mut vertices: Vec<Vertex> = positions
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let normal = normals
                .as_ref()
                .and_then(|n| n.get(i))
                .map(|n| (normal_matrix * Vec3::from(*n)).normalize_or_zero())
                .unwrap_or(Vec3::ZERO);
            let tint = colors
                .as_ref()
                .and_then(|c| c.get(i))
                .map(|c| Vec3::from(*c))
                .unwrap_or(Vec3::ONE);
            Vertex {
                position: world.transform_point3(Vec3::from(*p)).to_array(),
                normal: normal.to_array(),
                color: (base * tint).to_array(),
            }
        })
        .collect();

    // Mirrored transforms flip the winding order.
    if world.determinant() < 0.0 {
        for tri in indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
    }
    if normals.is_none() {
        compute_normals(&mut vertices, &indices);
    }

    Some(MeshData {
        vertices,
        indices,
        material: Material::default(),
    })
}

fn first_out_of_range(indices: &[u32], vertex_count: usize) -> Option<u32> {
    indices
        .iter()
        .copied()
        .find(|&i| i as usize >= vertex_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal GLB holding one triangle with the given node translation.
    fn triangle_glb(translation: [f32; 3]) -> Vec<u8> {
        build_glb(translation, None)
    }

    /// Same triangle, drawn through an explicit `u16` index buffer.
    fn indexed_triangle_glb(indices: [u16; 3]) -> Vec<u8> {
        build_glb([0.0; 3], Some(indices))
    }

    fn build_glb(translation: [f32; 3], indices: Option<[u16; 3]>) -> Vec<u8> {
        let positions: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let mut bin: Vec<u8> = bytemuck::cast_slice(&positions).to_vec();
        let positions_len = bin.len();
        let (index_attr, index_view, index_accessor) = match indices {
            Some(idx) => {
                bin.extend_from_slice(bytemuck::cast_slice(&idx));
                (
                    r#", "indices": 1"#.to_string(),
                    format!(
                        r#", {{ "buffer": 0, "byteOffset": {}, "byteLength": 6 }}"#,
                        positions_len
                    ),
                    r#", { "bufferView": 1, "componentType": 5123, "count": 3, "type": "SCALAR" }"#
                        .to_string(),
                )
            }
            None => (String::new(), String::new(), String::new()),
        };
        while bin.len() % 4 != 0 {
            bin.push(0);
        }
        let json = format!(
            r#"{{
  "asset": {{ "version": "2.0" }},
  "scene": 0,
  "scenes": [{{ "nodes": [0] }}],
  "nodes": [{{ "mesh": 0, "translation": [{}, {}, {}] }}],
  "meshes": [{{ "primitives": [{{ "attributes": {{ "POSITION": 0 }}{} }}] }}],
  "buffers": [{{ "byteLength": {} }}],
  "bufferViews": [{{ "buffer": 0, "byteLength": {} }}{}],
  "accessors": [{{
    "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
    "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
  }}{}]
}}"#,
            translation[0],
            translation[1],
            translation[2],
            index_attr,
            bin.len(),
            positions_len,
            index_view,
            index_accessor
        );
        let mut json = json.into_bytes();
        while json.len() % 4 != 0 {
            json.push(b' ');
        }
        let total = 12 + 8 + json.len() + 8 + bin.len();
        let mut glb = Vec::with_capacity(total);
        glb.extend_from_slice(b"glTF");
        glb.extend_from_slice(&2u32.to_le_bytes());
        glb.extend_from_slice(&(total as u32).to_le_bytes());
        glb.extend_from_slice(&(json.len() as u32).to_le_bytes());
        glb.extend_from_slice(b"JSON");
        glb.extend_from_slice(&json);
        glb.extend_from_slice(&(bin.len() as u32).to_le_bytes());
        glb.extend_from_slice(b"BIN\0");
        glb.extend_from_slice(&bin);
        glb
    }

    #[test]
    fn imports_single_triangle() {
        let mesh = import_glb(&triangle_glb([0.0, 0.0, 0.0])).unwrap();
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        // normals derived from CCW winding
        for v in &mesh.vertices {
            assert!((Vec3::from(v.normal) - Vec3::Z).length() < 1e-6);
            assert_eq!(v.color, [1.0, 1.0, 1.0]);
        }
        // glTF default material: fully rough, fully metallic
        assert_eq!(mesh.material.roughness, 1.0);
        assert_eq!(mesh.material.metalness, 1.0);
    }

    #[test]
    fn applies_node_translation() {
        let mesh = import_glb(&triangle_glb([2.0, -1.0, 0.5])).unwrap();
        assert_eq!(mesh.vertices[0].position, [2.0, -1.0, 0.5]);
        assert_eq!(mesh.vertices[1].position, [3.0, -1.0, 0.5]);
    }

    #[test]
    fn rejects_garbage() {
        let err = import_glb(b"definitely not a model").unwrap_err();
        assert!(matches!(err, AssetError::Parse(_)));
    }

    #[test]
    fn keeps_explicit_indices() {
        let mesh = import_glb(&indexed_triangle_glb([0, 2, 1])).unwrap();
        assert_eq!(mesh.indices, vec![0, 2, 1]);
        // reversed winding faces the other way
        assert!((Vec3::from(mesh.vertices[0].normal) + Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn out_of_range_index_drops_primitive() {
        let err = import_glb(&indexed_triangle_glb([0, 1, 3])).unwrap_err();
        assert!(matches!(err, AssetError::NoGeometry));
    }

    #[test]
    fn finds_first_bad_index() {
        assert_eq!(first_out_of_range(&[0, 1, 2], 3), None);
        assert_eq!(first_out_of_range(&[0, 5, 3], 3), Some(5));
        assert_eq!(first_out_of_range(&[], 0), None);
    }
}
