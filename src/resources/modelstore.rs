//! Model registry.
//!
//! Stores the parts of a model the cast logic needs, keyed by asset path: its
//! scale, the named anchor nodes and the animation clips. Geometry and
//! materials belong to the renderer and are not kept here.
//!
//! Manifests are JSON:
//!
//! ```json
//! {
//!   "scale": 2.0,
//!   "anchors": { "top_bobber": [0.0, 0.5, 0.0] },
//!   "clips": [ { "name": "plunk", "duration": 1.0 } ]
//! }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use glam::Vec3;
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::animationplayer::{AnimationClip, AnimationPlayer};
use crate::components::transform::Transform;
use crate::consts::{
    BOBBER_MODEL, CAST_CLIP, FISHERMAN_MODEL, PLUNK_CLIP, STRING_PIVOT_ANCHOR, TOP_BOBBER_ANCHOR,
};

fn default_scale() -> f32 {
    1.0
}

/// Immutable description of a loadable model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDef {
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub anchors: FxHashMap<String, Vec3>,
    #[serde(default)]
    pub clips: Vec<AnimationClip>,
}

/// Central registry of model definitions keyed by asset path.
#[derive(Resource, Debug, Default)]
pub struct ModelStore {
    pub models: FxHashMap<String, ModelDef>,
}

impl ModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with the bobber and fisherman models the cast needs.
    pub fn with_builtin_models() -> Self {
        let mut store = Self::new();
        store.insert(
            BOBBER_MODEL,
            ModelDef {
                scale: 1.0,
                anchors: [(TOP_BOBBER_ANCHOR.to_string(), Vec3::new(0.0, 0.5, 0.0))]
                    .into_iter()
                    .collect(),
                clips: vec![AnimationClip::new(PLUNK_CLIP, 1.0)],
            },
        );
        store.insert(
            FISHERMAN_MODEL,
            ModelDef {
                scale: 10.0,
                anchors: [(STRING_PIVOT_ANCHOR.to_string(), Vec3::new(0.1, 1.8, 0.9))]
                    .into_iter()
                    .collect(),
                clips: vec![AnimationClip::new(CAST_CLIP, 1.5)],
            },
        );
        store
    }

    pub fn insert(&mut self, path: impl Into<String>, def: ModelDef) {
        self.models.insert(path.into(), def);
    }

    pub fn get(&self, path: &str) -> Option<&ModelDef> {
        self.models.get(path)
    }

    /// Parse a JSON manifest.
    pub fn parse_manifest(json: &str) -> Result<ModelDef, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid model manifest: {}", e))
    }

    /// Read a manifest from disk and register it under `key`.
    pub fn load_manifest(&mut self, key: &str, path: impl AsRef<Path>) -> Result<(), String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read model manifest {:?}: {}", path, e))?;
        let def = Self::parse_manifest(&text)?;
        info!(
            "Loaded model '{}' from {:?}: {} anchor(s), {} clip(s)",
            key,
            path,
            def.anchors.len(),
            def.clips.len()
        );
        self.insert(key, def);
        Ok(())
    }

    /// Build the transform and animation player for a registered model.
    ///
    /// `required_clip`, when given, must exist in the model.
    pub fn load_entity(
        &self,
        path: &str,
        required_clip: Option<&str>,
    ) -> Result<(Transform, AnimationPlayer), String> {
        let def = self
            .get(path)
            .ok_or_else(|| format!("Unknown model '{}'", path))?;
        if let Some(clip) = required_clip {
            if !def.clips.iter().any(|c| c.name == clip) {
                return Err(format!("Model '{}' has no clip '{}'", path, clip));
            }
        }

        let mut transform = Transform::default().with_uniform_scale(def.scale);
        for (name, offset) in &def.anchors {
            transform.set_anchor(name.clone(), *offset);
        }
        let player = AnimationPlayer::new(def.clips.iter().cloned());
        Ok((transform, player))
    }
}
