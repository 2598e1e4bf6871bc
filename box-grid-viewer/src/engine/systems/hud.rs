use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::tools::picker::selection::MarkerPicked;

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct PickReadout;

/// Full-screen overlay node: FPS bottom-right, pick readout bottom-left.
pub fn spawn_hud(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
            parent.spawn((
                Text::new("click a marker to recolour its cube"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.25, 0.25, 0.25)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                PickReadout,
            ));
        });
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}

/// Mirror the most recent pick into the readout, text and swatch colour both.
pub fn pick_readout_update(
    mut picks: EventReader<MarkerPicked>,
    mut query: Query<(&mut Text, &mut TextColor), With<PickReadout>>,
) {
    let Some(pick) = picks.read().last() else {
        return;
    };
    debug!(
        "pick event: marker {:?} in group {:?}",
        pick.marker, pick.group
    );

    for (mut text, mut text_color) in &mut query {
        let srgba = pick.color.to_srgba();
        text.0 = format!(
            "picked #{:02x}{:02x}{:02x}",
            (srgba.red * 255.0) as u8,
            (srgba.green * 255.0) as u8,
            (srgba.blue * 255.0) as u8
        );
        text_color.0 = pick.color;
    }
}
