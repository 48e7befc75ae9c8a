use bevy::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::engine::assets::viewer_config::ViewerConfig;

/// Last message shown to the user about the model.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewerStatus {
    message: String,
}

impl ViewerStatus {
    pub fn set(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Native stand-in for the page status element.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
#[derive(Component)]
pub struct StatusText;

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub fn spawn_status_overlay(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                StatusText,
            ));
        });
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub fn status_text_update_system(
    status: Res<ViewerStatus>,
    mut query: Query<&mut Text, With<StatusText>>,
) {
    if !status.is_changed() {
        return;
    }
    for mut text in &mut query {
        text.0 = status.message().to_string();
    }
}

/// Mirror the status into the host page element named by the config.
pub fn status_element_update_system(status: Res<ViewerStatus>, config: Res<ViewerConfig>) {
    if !status.is_changed() || status.message().is_empty() {
        return;
    }
    write_status_to_page(&config.status_element_id, status.message());
}

#[cfg(target_arch = "wasm32")]
fn write_status_to_page(element_id: &str, message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        warn!("Document not available, status not shown: {}", message);
        return;
    };

    match document
        .get_element_by_id(element_id)
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    {
        Some(element) => element.set_inner_text(message),
        None => warn!("Status element #{} not found", element_id),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_status_to_page(element_id: &str, message: &str) {
    debug!("status #{}: {}", element_id, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_follows_status_changes() {
        let mut app = App::new();
        app.init_resource::<ViewerStatus>()
            .add_systems(Update, status_text_update_system);
        let text = app.world_mut().spawn((Text::new(""), StatusText)).id();

        app.world_mut()
            .resource_mut::<ViewerStatus>()
            .set("Format not supported!");
        app.update();

        let shown = app.world().get::<Text>(text).unwrap();
        assert_eq!(shown.0, "Format not supported!");
    }
}
