//! Core domain: outcome screen shown after resting, with the restart flow.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::events::RestartRequestedEvent;
use crate::core::outcome::Outcome;
use crate::core::resources::SessionOutcome;

/// Marker for the outcome screen root
#[derive(Component, Debug)]
pub struct OutcomeScreenUI;

/// Marker for the restart button
#[derive(Component, Debug)]
pub struct RestartButton;

pub(crate) fn spawn_outcome_screen(mut commands: Commands, session_outcome: Res<SessionOutcome>) {
    let text_color = Color::srgb(0.9, 0.9, 0.9);
    let muted_text = Color::srgb(0.6, 0.6, 0.7);

    let (title, subtitle, title_color) = match session_outcome.outcome {
        Some(Outcome::Win) => (
            "SAFE AND SOUND",
            "Everything was secured before you slept.".to_string(),
            Color::srgb(0.4, 0.9, 0.4),
        ),
        Some(Outcome::Lose) => (
            "A RESTLESS NIGHT",
            format!(
                "{} thing(s) were left unsafe.",
                session_outcome.unsafe_remaining
            ),
            Color::srgb(0.9, 0.3, 0.3),
        ),
        None => {
            warn!("Outcome screen opened without a decided outcome");
            ("...", String::new(), text_color)
        }
    };

    commands
        .spawn((
            OutcomeScreenUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.03, 0.06, 0.9)),
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(subtitle),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(text_color),
                Node {
                    margin: UiRect::bottom(Val::Px(50.0)),
                    ..default()
                },
            ));

            parent
                .spawn((
                    RestartButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(16.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
                    BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
                ))
                .with_child((
                    Text::new("RESTART"),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(text_color),
                ));

            parent.spawn((
                Text::new("Press [Enter] or click to restart"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(muted_text),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn cleanup_outcome_screen(
    mut commands: Commands,
    query: Query<Entity, With<OutcomeScreenUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_outcome_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    button_query: Query<&Interaction, (With<RestartButton>, Changed<Interaction>)>,
    mut restart: MessageWriter<RestartRequestedEvent>,
) {
    let should_restart = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || button_query
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);

    if should_restart {
        restart.write(RestartRequestedEvent);
    }
}

/// Hover feedback for the restart button
pub(crate) fn update_restart_button(
    mut query: Query<(&Interaction, &mut BackgroundColor), (With<RestartButton>, Changed<Interaction>)>,
) {
    for (interaction, mut background) in &mut query {
        background.0 = match interaction {
            Interaction::Pressed => Color::srgb(0.35, 0.35, 0.42),
            Interaction::Hovered => Color::srgb(0.28, 0.28, 0.34),
            Interaction::None => Color::srgb(0.2, 0.2, 0.25),
        };
    }
}
