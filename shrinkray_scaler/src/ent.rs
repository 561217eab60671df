use serde_json::Value;
use shrinkray_document::{
    join_index, join_key, object_field_mut, scale_in_place, sequence_field_mut,
};

use crate::AXES;
use crate::error::ScaleError;

const COMPONENTS_PATH: &str = "Data.RootChunk.components";
const MESH_TYPE_TAG: &str = "entMeshComponent";
const PHYSICAL_MESH_TYPE_TAG: &str = "entPhysicalMeshComponent";

/// What an entity component's `$type` tag tells us about its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Mesh,
    PhysicalMesh,
    Unhandled,
}

impl ComponentKind {
    /// Tags are matched exactly. Anything unrecognised is `Unhandled`.
    pub fn from_type_tag(tag: &str) -> Self {
        match tag {
            MESH_TYPE_TAG => Self::Mesh,
            PHYSICAL_MESH_TYPE_TAG => Self::PhysicalMesh,
            _ => Self::Unhandled,
        }
    }

    pub const fn carries_visual_scale(self) -> bool {
        matches!(self, Self::Mesh | Self::PhysicalMesh)
    }
}

/// Multiplies the `visualScale` vector of every mesh-bearing component by
/// `factor`. Components of any other kind pass through untouched. Returns
/// how many components were scaled.
pub fn scale_ent(document: &mut Value, factor: f64) -> Result<usize, ScaleError> {
    let data = object_field_mut(document, "", "Data")?;
    let root_chunk = object_field_mut(data, "Data", "RootChunk")?;
    let components = sequence_field_mut(root_chunk, "Data.RootChunk", "components")?;

    let mut scaled = 0;
    for (index, component) in components.iter_mut().enumerate() {
        let kind = component
            .get("$type")
            .and_then(Value::as_str)
            .map(ComponentKind::from_type_tag)
            .unwrap_or(ComponentKind::Unhandled);
        if !kind.carries_visual_scale() {
            continue;
        }
        // A mesh component without a visualScale keeps its implicit scale.
        let Some(visual) = component.get_mut("visualScale") else {
            continue;
        };
        let visual_path = join_key(&join_index(COMPONENTS_PATH, index), "visualScale");
        for axis in AXES {
            let leaf = object_field_mut(visual, &visual_path, axis)?;
            scale_in_place(leaf, &join_key(&visual_path, axis), factor)?;
        }
        scaled += 1;
    }

    log::info!("scaled visualScale on {scaled} components by {factor}");
    Ok(scaled)
}
