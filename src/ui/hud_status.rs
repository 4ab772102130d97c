//! UI domain: status line with animation state and the context prompt.

use bevy::prelude::*;

use crate::animation::AnimationController;
use crate::movement::Player;
use crate::rooms::{InteractionTuning, SceneRegistry, Trigger, TriggerTarget, resolve_trigger};

/// Marker for the status line text
#[derive(Component)]
pub struct StatusLineUI;

pub(crate) fn spawn_status_line_ui(mut commands: Commands) {
    commands.spawn((
        StatusLineUI,
        Text::new(""),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            bottom: Val::Px(16.0),
            padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
    ));
}

/// Prompt for what E or F would do from `player`, if anything.
pub(crate) fn context_prompt(
    registry: &SceneRegistry,
    tuning: &InteractionTuning,
    player: Vec3,
) -> Option<String> {
    match resolve_trigger(registry, tuning, player, Trigger::Interact) {
        TriggerTarget::Toggle(id) => registry.interactable(id).map(|prop| {
            let verb = if prop.is_safe { "Unsecure" } else { "Secure" };
            format!("[E] {} {}", verb, prop.name)
        }),
        TriggerTarget::Rest { .. } => Some("[E/F] Rest".to_string()),
        TriggerTarget::Nothing => None,
    }
}

pub(crate) fn update_status_line(
    registry: Res<SceneRegistry>,
    tuning: Res<InteractionTuning>,
    player_query: Query<(&Transform, &AnimationController), With<Player>>,
    mut text_query: Query<&mut Text, With<StatusLineUI>>,
) {
    let Ok((transform, controller)) = player_query.single() else {
        return;
    };
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    let mut line = format!(
        "{} ({:.0}%)  |  {} unsafe",
        controller.state.name(),
        controller.blend_weight() * 100.0,
        registry.unsafe_count()
    );
    if controller.allows_movement() {
        if let Some(prompt) = context_prompt(&registry, &tuning, transform.translation) {
            line.push_str("  |  ");
            line.push_str(&prompt);
        }
    }

    if text.0 != line {
        text.0 = line;
    }
}
