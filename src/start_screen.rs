use bevy::prelude::*;
use log::info;

use crate::settings::{Menu, MenuSelection, SnakeColor};

/// Marker component for start screen entities
#[derive(Component)]
pub struct StartScreenEntity;

/// Start-screen cursor
#[derive(Resource, Default)]
pub struct MenuState {
    pub menu: Menu,
}

/// Selection confirmed with Enter, consumed when the game starts
#[derive(Resource, Default, Clone, Copy)]
pub struct PendingSelection(pub MenuSelection);

/// Game state enum
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum GameState {
    #[default]
    StartScreen,
    Playing,
    GameOver,
}

/// One entry in the color list
#[derive(Component)]
pub struct ColorOption(pub SnakeColor);

#[derive(Component)]
pub struct SpeedText;

const HIGHLIGHT: Color = Color::WHITE;
const DIMMED: Color = Color::srgb(0.59, 0.59, 0.59);

fn option_color(option: SnakeColor, menu: &Menu) -> Color {
    if option == menu.color() { HIGHLIGHT } else { DIMMED }
}

/// Setup the start screen UI
pub fn setup_start_screen(mut commands: Commands, menu_state: Res<MenuState>) {
    let menu = menu_state.menu;

    commands.spawn((
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            flex_direction: FlexDirection::Column,
            ..default()
        },
        BackgroundColor(Color::srgb_u8(30, 30, 30)),
        StartScreenEntity,
    )).with_children(|parent| {
        parent.spawn((
            Text::new("Snake Game"),
            TextFont {
                font_size: 50.0,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                margin: UiRect::bottom(Val::Px(30.0)),
                ..default()
            },
        ));

        parent.spawn((
            Text::new("Press UP/DOWN to select snake color\nPress LEFT/RIGHT to adjust speed\nPress ENTER to start"),
            TextFont {
                font_size: 20.0,
                ..default()
            },
            TextColor(Color::WHITE),
            TextLayout::new_with_justify(JustifyText::Center),
            Node {
                margin: UiRect::bottom(Val::Px(30.0)),
                ..default()
            },
        ));

        for option in SnakeColor::ALL {
            parent.spawn((
                Text::new(option.name()),
                TextFont {
                    font_size: 25.0,
                    ..default()
                },
                TextColor(option_color(option, &menu)),
                Node {
                    margin: UiRect::bottom(Val::Px(8.0)),
                    ..default()
                },
                ColorOption(option),
            ));
        }

        parent.spawn((
            Text::new(format!("Speed Level: {}", menu.speed().get())),
            TextFont {
                font_size: 25.0,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                margin: UiRect::top(Val::Px(30.0)),
                ..default()
            },
            SpeedText,
        ));
    });
}

/// Handle start screen keys
pub fn handle_start_screen_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut menu_state: ResMut<MenuState>,
    mut pending: ResMut<PendingSelection>,
    mut next_state: ResMut<NextState<GameState>>,
    mut app_exit_events: EventWriter<AppExit>,
) {
    if keyboard_input.just_pressed(KeyCode::ArrowUp) {
        menu_state.menu.up();
    }
    if keyboard_input.just_pressed(KeyCode::ArrowDown) {
        menu_state.menu.down();
    }
    if keyboard_input.just_pressed(KeyCode::ArrowLeft) {
        menu_state.menu.left();
    }
    if keyboard_input.just_pressed(KeyCode::ArrowRight) {
        menu_state.menu.right();
    }

    if keyboard_input.just_pressed(KeyCode::Enter) {
        pending.0 = menu_state.menu.confirm();
        info!("starting with {} snake at speed {}", pending.0.color.name(), pending.0.speed.get());
        next_state.set(GameState::Playing);
    }

    if keyboard_input.just_pressed(KeyCode::Escape) {
        app_exit_events.send(AppExit::Success);
    }
}

/// Refresh highlight and speed text when the menu changes
pub fn update_start_screen_ui(
    menu_state: Res<MenuState>,
    mut option_query: Query<(&ColorOption, &mut TextColor)>,
    mut speed_query: Query<&mut Text, With<SpeedText>>,
) {
    if !menu_state.is_changed() {
        return;
    }
    for (option, mut color) in option_query.iter_mut() {
        color.0 = option_color(option.0, &menu_state.menu);
    }
    if let Ok(mut text) = speed_query.get_single_mut() {
        **text = format!("Speed Level: {}", menu_state.menu.speed().get());
    }
}

/// Cleanup start screen
pub fn cleanup_start_screen(
    mut commands: Commands,
    query: Query<Entity, With<StartScreenEntity>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
