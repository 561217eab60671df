use serde_json::Value;
use shrinkray_document::{
    join_index, join_key, object_field_mut, scale_in_place, sequence_field_mut,
};

use crate::AXES;
use crate::error::ScaleError;

const BONES_PATH: &str = "Data.RootChunk.boneTransforms";
const BONE_VECTORS: [&str; 2] = ["Scale", "Translation"];

/// Multiplies the `Scale` and `Translation` vectors of every bone transform
/// by `factor`. Returns how many bone transforms were touched.
pub fn scale_rig(document: &mut Value, factor: f64) -> Result<usize, ScaleError> {
    let data = object_field_mut(document, "", "Data")?;
    let root_chunk = object_field_mut(data, "Data", "RootChunk")?;
    let bones = sequence_field_mut(root_chunk, "Data.RootChunk", "boneTransforms")?;

    let count = bones.len();
    for (index, bone) in bones.iter_mut().enumerate() {
        let bone_path = join_index(BONES_PATH, index);
        for vector in BONE_VECTORS {
            let vector_path = join_key(&bone_path, vector);
            let axes = object_field_mut(bone, &bone_path, vector)?;
            for axis in AXES {
                let leaf = object_field_mut(axes, &vector_path, axis)?;
                scale_in_place(leaf, &join_key(&vector_path, axis), factor)?;
            }
        }
    }

    log::info!("scaled {count} bone transforms by {factor}");
    Ok(count)
}
