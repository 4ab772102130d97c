//! Validation for scene and tuning values that parse but make no sense.

use std::collections::HashSet;

use super::data::{GameplayDefaults, SceneDef};

/// A validation finding with context about what failed.
#[derive(Debug, PartialEq)]
pub struct ValidationError {
    pub subject: String,
    pub field: &'static str,
    pub problem: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} has invalid '{}': {}",
            self.subject, self.field, self.problem
        )
    }
}

/// Helper macro for checking a value is strictly positive
macro_rules! check_positive {
    ($errors:expr, $subject:expr, $field:expr, $value:expr) => {
        if !($value > 0.0) {
            $errors.push(ValidationError {
                subject: $subject.to_string(),
                field: $field,
                problem: format!("expected a positive value, got {}", $value),
            });
        }
    };
}

/// Validate the scene layout and prop list.
/// Returns a list of findings, empty if everything is usable.
pub fn validate_scene(scene: &SceneDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_positive!(errors, "Scene", "hall_size", scene.hall_size);
    check_positive!(errors, "Scene", "wall_height", scene.wall_height);
    check_positive!(errors, "Scene", "wall_thickness", scene.wall_thickness);
    check_positive!(errors, "Doorway", "width", scene.doorway.width);
    check_positive!(errors, "Doorway", "height", scene.doorway.height);
    check_positive!(errors, "SideRoom", "width", scene.side_room.width);
    check_positive!(errors, "SideRoom", "depth", scene.side_room.depth);
    check_positive!(errors, "SideRoom", "height", scene.side_room.height);

    if scene.doorway.width >= scene.hall_size {
        errors.push(ValidationError {
            subject: "Doorway".to_string(),
            field: "width",
            problem: format!(
                "doorway ({}) must be narrower than the hall ({})",
                scene.doorway.width, scene.hall_size
            ),
        });
    }

    if scene.doorway.height > scene.wall_height {
        errors.push(ValidationError {
            subject: "Doorway".to_string(),
            field: "height",
            problem: format!(
                "doorway ({}) is taller than the wall ({})",
                scene.doorway.height, scene.wall_height
            ),
        });
    }

    let mut seen = HashSet::new();
    for prop in &scene.props {
        let subject = format!("Prop '{}'", prop.name);
        check_positive!(errors, subject, "interact_distance", prop.interact_distance);
        for extent in prop.size {
            check_positive!(errors, subject, "size", extent);
        }
        if !seen.insert(prop.name.as_str()) {
            errors.push(ValidationError {
                subject,
                field: "name",
                problem: "duplicate prop name".to_string(),
            });
        }
    }

    match &scene.bed {
        Some(bed) => {
            for extent in bed.size {
                check_positive!(errors, "Bed", "size", extent);
            }
        }
        None => errors.push(ValidationError {
            subject: "Scene".to_string(),
            field: "bed",
            problem: "no bed, the session can never end".to_string(),
        }),
    }

    errors
}

/// Validate tuning values.
pub fn validate_defaults(defaults: &GameplayDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_positive!(errors, "Movement", "speed", defaults.movement.speed);
    check_positive!(
        errors,
        "Movement",
        "max_frame_time",
        defaults.movement.max_frame_time
    );
    check_positive!(errors, "Movement", "world_limit", defaults.movement.world_limit);
    for extent in defaults.movement.body_size {
        check_positive!(errors, "Movement", "body_size", extent);
    }

    check_positive!(
        errors,
        "Animation",
        "locomotion_fade",
        defaults.animation.locomotion_fade
    );
    check_positive!(errors, "Animation", "action_fade", defaults.animation.action_fade);
    check_positive!(
        errors,
        "Animation",
        "interact_duration",
        defaults.animation.interact_duration
    );
    check_positive!(
        errors,
        "Animation",
        "rest_duration",
        defaults.animation.rest_duration
    );
    check_positive!(errors, "Interaction", "bed_radius", defaults.interaction.bed_radius);

    errors
}
