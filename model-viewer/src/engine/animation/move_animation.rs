use bevy::prelude::*;

/// A position value at a key frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionKey {
    pub frame: f32,
    pub value: Vec3,
}

/// Two-key linear position track. Sampling past the last key holds its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionTrack {
    start: PositionKey,
    end: PositionKey,
    frame_rate: f32,
}

impl PositionTrack {
    pub fn new(start: PositionKey, end: PositionKey, frame_rate: f32) -> Self {
        Self {
            start,
            end,
            frame_rate,
        }
    }

    pub fn duration_secs(&self) -> f32 {
        (self.end.frame - self.start.frame).max(0.0) / self.frame_rate
    }

    pub fn end_value(&self) -> Vec3 {
        self.end.value
    }

    pub fn sample(&self, elapsed_secs: f32) -> Vec3 {
        let span = self.end.frame - self.start.frame;
        if span <= 0.0 {
            return self.end.value;
        }
        let frame = self.start.frame + elapsed_secs.max(0.0) * self.frame_rate;
        let t = ((frame - self.start.frame) / span).clamp(0.0, 1.0);
        self.start.value.lerp(self.end.value, t)
    }
}

/// Drives an entity's translation along a position track, once.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MoveAnimation {
    track: PositionTrack,
    elapsed: f32,
}

impl MoveAnimation {
    /// Move from `from` at frame 0 to `to` at `end_frame`.
    pub fn between(from: Vec3, to: Vec3, frame_rate: f32, end_frame: f32) -> Self {
        Self {
            track: PositionTrack::new(
                PositionKey {
                    frame: 0.0,
                    value: from,
                },
                PositionKey {
                    frame: end_frame,
                    value: to,
                },
                frame_rate,
            ),
            elapsed: 0.0,
        }
    }

    pub fn destination(&self) -> Vec3 {
        self.track.end_value()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.track.duration_secs()
    }

    /// Advance by `delta_secs` and return the new position.
    pub fn advance(&mut self, delta_secs: f32) -> Vec3 {
        self.elapsed += delta_secs;
        self.track.sample(self.elapsed)
    }
}

pub fn animate_model_moves(
    time: Res<Time>,
    mut commands: Commands,
    mut animated: Query<(Entity, &mut Transform, &mut MoveAnimation)>,
) {
    for (entity, mut transform, mut animation) in &mut animated {
        transform.translation = animation.advance(time.delta_secs());
        if animation.is_finished() {
            transform.translation = animation.destination();
            commands.entity(entity).remove::<MoveAnimation>();
        }
    }
}
