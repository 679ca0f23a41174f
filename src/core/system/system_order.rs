//! Central system ordering labels to make the update sequence explicit.
//! Stages (high-level):
//! 1. Input (pointer / scroll / viewport signals refreshed)
//! 2. Animate (drift, pulse, warp, field targets: all star/particle mutation)
//! 3. Sync (transforms + material alpha written for rendering)
//!
//! All three run on the main schedule; ordering alone is what makes the
//! shared star collection safe to mutate from several systems.
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSet; // external signals sampled before any animation step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct AnimateSet; // star/particle state mutation

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SyncSet; // render-facing writes, after all mutation
