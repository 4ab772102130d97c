//! UI domain: checklist of props and their safety, plus the bed.

use bevy::prelude::*;

use crate::rooms::{InteractableId, SceneRegistry};

pub(crate) const PROP_LIST_PADDING: f32 = 16.0;
pub(crate) const SWATCH_SIZE: f32 = 14.0;

const SAFE_COLOR: Color = Color::srgb(0.27, 1.0, 0.27);
const UNSAFE_COLOR: Color = Color::srgb(1.0, 0.27, 0.27);
const BED_COLOR: Color = Color::srgb(0.3, 0.5, 1.0);

/// Marker for the prop list panel
#[derive(Component)]
pub struct PropListUI;

/// Container the per-prop rows are rebuilt into
#[derive(Component)]
pub struct PropRows;

#[derive(Component)]
pub struct PropRow(pub InteractableId);

/// Color swatch in a prop row
#[derive(Component)]
pub struct PropSwatch(pub InteractableId);

pub(crate) fn swatch_color(is_safe: bool) -> Color {
    if is_safe { SAFE_COLOR } else { UNSAFE_COLOR }
}

pub(crate) fn spawn_prop_list_ui(mut commands: Commands) {
    commands
        .spawn((
            PropListUI,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(PROP_LIST_PADDING),
                top: Val::Px(PROP_LIST_PADDING),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(10.0)),
                row_gap: Val::Px(6.0),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Secure before bed"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));

            parent.spawn((
                PropRows,
                Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(4.0),
                    ..default()
                },
            ));

            spawn_row(parent, "Bed (Rest)", BED_COLOR, ());
        });
}

fn spawn_row(parent: &mut ChildSpawnerCommands, label: &str, color: Color, swatch: impl Bundle) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                swatch,
                Node {
                    width: Val::Px(SWATCH_SIZE),
                    height: Val::Px(SWATCH_SIZE),
                    ..default()
                },
                BackgroundColor(color),
            ));
            row.spawn((
                Text::new(label),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
            ));
        });
}

/// Rebuild the rows when the listed props change, otherwise only recolor.
pub(crate) fn update_prop_list(
    mut commands: Commands,
    mut shown: Local<Vec<String>>,
    registry: Res<SceneRegistry>,
    container_query: Query<Entity, With<PropRows>>,
    row_query: Query<Entity, With<PropRow>>,
    mut swatch_query: Query<(&PropSwatch, &mut BackgroundColor)>,
) {
    let Ok(container) = container_query.single() else {
        return;
    };

    let props = registry.interactables();
    let same_props = shown.len() == props.len()
        && shown.iter().zip(props).all(|(name, prop)| *name == prop.name);
    if !same_props {
        *shown = props.iter().map(|prop| prop.name.clone()).collect();
        for row in &row_query {
            commands.entity(row).despawn();
        }
        commands.entity(container).with_children(|parent| {
            for (index, prop) in props.iter().enumerate() {
                let id = InteractableId(index);
                parent
                    .spawn((
                        PropRow(id),
                        Node {
                            flex_direction: FlexDirection::Row,
                            ..default()
                        },
                    ))
                    .with_children(|row| {
                        spawn_row(row, &prop.name, swatch_color(prop.is_safe), PropSwatch(id));
                    });
            }
        });
        return;
    }

    for (swatch, mut background) in &mut swatch_query {
        if let Some(prop) = registry.interactable(swatch.0) {
            let wanted = swatch_color(prop.is_safe);
            if background.0 != wanted {
                background.0 = wanted;
            }
        }
    }
}
