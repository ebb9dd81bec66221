use bevy::prelude::*;

use crate::cell_renderer::BoardView;
use crate::hud::HudData;

// UI Components
#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct HighScoreText;

#[derive(Component)]
pub struct HudContainer;

/// Marker for the game-over overlay
#[derive(Component)]
pub struct GameOverEntity;

// UI Resources
#[derive(Resource, Default)]
pub struct UiState {
    pub hud: HudData,
}

pub fn setup_ui(mut commands: Commands) {
    // Create HUD root (initially hidden)
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(10.0),
            ..default()
        },
        Visibility::Hidden,
        HudContainer,
    ))
    .with_children(|parent| {
        parent.spawn((
            Text::new("Score: 0"),
            TextFont {
                font_size: 20.0,
                ..default()
            },
            TextColor(Color::WHITE),
            ScoreText,
        ));

        parent.spawn((
            Text::new("High Score: 0"),
            TextFont {
                font_size: 20.0,
                ..default()
            },
            TextColor(Color::WHITE),
            HighScoreText,
        ));
    });
}

pub fn update_ui(
    board: Res<BoardView>,
    mut ui_state: ResMut<UiState>,
    mut score_query: Query<&mut Text, (With<ScoreText>, Without<HighScoreText>)>,
    mut high_score_query: Query<&mut Text, (With<HighScoreText>, Without<ScoreText>)>,
) {
    let Some(frame) = board.frame.as_ref() else {
        return;
    };
    let hud = HudData::from_view(frame);
    if hud == ui_state.hud {
        return;
    }

    if let Ok(mut text) = score_query.get_single_mut() {
        **text = hud.score_line();
    }
    if let Ok(mut text) = high_score_query.get_single_mut() {
        **text = hud.high_score_line();
    }
    ui_state.hud = hud;
}

/// Show HUD when entering playing state
pub fn show_hud(mut hud_query: Query<&mut Visibility, With<HudContainer>>) {
    for mut visibility in hud_query.iter_mut() {
        *visibility = Visibility::Visible;
    }
}

/// Hide HUD when returning to the start screen
pub fn hide_hud(mut hud_query: Query<&mut Visibility, With<HudContainer>>) {
    for mut visibility in hud_query.iter_mut() {
        *visibility = Visibility::Hidden;
    }
}

/// Overlay shown after a collision
pub fn setup_game_over_screen(mut commands: Commands, board: Res<BoardView>) {
    let hud = board.frame.as_ref().map(HudData::from_view).unwrap_or_default();
    commands.spawn((
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(12.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
        GameOverEntity,
    )).with_children(|parent| {
        parent.spawn((
            Text::new("Game Over!"),
            TextFont {
                font_size: 50.0,
                ..default()
            },
            TextColor(Color::srgb(1.0, 0.4, 0.4)),
        ));
        parent.spawn((
            Text::new(format!("{}   {}", hud.score_line(), hud.high_score_line())),
            TextFont {
                font_size: 25.0,
                ..default()
            },
            TextColor(Color::WHITE),
        ));
        parent.spawn((
            Text::new("Play again? (Y/N)"),
            TextFont {
                font_size: 25.0,
                ..default()
            },
            TextColor(Color::srgb(0.8, 0.8, 0.8)),
        ));
    });
}

pub fn cleanup_game_over_screen(
    mut commands: Commands,
    query: Query<Entity, With<GameOverEntity>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
