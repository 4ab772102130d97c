//! Content domain: RON data for the scene and tuning, and the loader that feeds
//! the scene registry.

pub mod data;
pub mod layout;
pub mod loader;
pub mod validation;

#[cfg(test)]
mod tests;

pub use data::*;
pub use layout::build_scene;
pub use loader::{ContentLoadError, LoadedContent, load_all_content};
pub use validation::{ValidationError, validate_defaults, validate_scene};

use std::path::Path;

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::animation::AnimationTuning;
use crate::core::{GameState, RunConfig, SessionSetupSet};
use crate::movement::MovementTuning;
use crate::rooms::{InteractionTuning, SceneEntryLoaded};

pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameplayDefaults>()
            .init_resource::<SceneDef>()
            .add_systems(
                OnEnter(GameState::Loading),
                load_scene_content.in_set(SessionSetupSet::Load),
            );
    }
}

/// Load data files, publish tuning resources and push every scene entry onto
/// the registry intake.
fn load_scene_content(
    mut commands: Commands,
    run_config: Res<RunConfig>,
    mut intake: MessageWriter<SceneEntryLoaded>,
) {
    let LoadedContent {
        scene,
        defaults,
        errors,
    } = load_all_content(Path::new(CONTENT_DIR));

    for error in &errors {
        error!("{}; using built-in defaults", error);
    }
    for finding in validate_scene(&scene)
        .iter()
        .chain(validate_defaults(&defaults).iter())
    {
        warn!("Content validation: {}", finding);
    }

    commands.insert_resource(MovementTuning::from(&defaults.movement));
    commands.insert_resource(AnimationTuning::from(&defaults.animation));
    commands.insert_resource(InteractionTuning::from(&defaults.interaction));

    let mut rng = ChaCha8Rng::seed_from_u64(run_config.seed);
    let entries = build_scene(&scene, defaults.initial_safety, &mut rng);
    info!(
        "Loaded scene: {} entries, {} props, safety={:?}, seed={}",
        entries.len(),
        scene.props.len(),
        defaults.initial_safety,
        run_config.seed
    );
    intake.write_batch(entries.into_iter().map(SceneEntryLoaded));

    commands.insert_resource(scene);
    commands.insert_resource(defaults);
}
