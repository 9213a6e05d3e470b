//! Entity store and frame result types
//!
//! The store is owned by the caller (the level) and lent to the resolver for
//! one frame at a time; the resolver mutates positions and brick health in
//! place.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Health value of a brick that can never be destroyed
pub const INDESTRUCTIBLE: u8 = u8::MAX;

/// A positioned, sized axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Center of the rectangle
    pub position: Vec2,
    /// Full width and height
    pub scale: Vec2,
    /// Hit points; `INDESTRUCTIBLE` is never decremented
    pub health: u8,
}

impl Entity {
    pub fn new(position: Vec2, scale: Vec2, health: u8) -> Self {
        Self {
            position,
            scale,
            health,
        }
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.scale * 0.5
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.position.x - self.scale.x * 0.5
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.position.x + self.scale.x * 0.5
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y + self.scale.y * 0.5
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y - self.scale.y * 0.5
    }

    /// Still takes part in collisions
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    #[inline]
    pub fn is_indestructible(&self) -> bool {
        self.health == INDESTRUCTIBLE
    }

    /// Remove one hit point. Returns true if this hit destroyed the entity.
    pub fn damage(&mut self) -> bool {
        if self.is_indestructible() || self.health == 0 {
            return false;
        }
        self.health -= 1;
        self.health == 0
    }
}

/// All entities of one level, split by role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityStore {
    pub ball: Entity,
    pub paddle: Entity,
    pub left_wall: Entity,
    pub right_wall: Entity,
    /// Destroyed bricks stay in place with zero health so indices are stable
    pub bricks: Vec<Entity>,
}

impl EntityStore {
    /// Total number of entities, bricks included
    pub fn entity_count(&self) -> usize {
        4 + self.bricks.len()
    }

    /// Inner face of the left wall
    #[inline]
    pub fn left_edge(&self) -> f32 {
        self.left_wall.right()
    }

    /// Inner face of the right wall
    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.right_wall.left()
    }

    /// Top of the play area (walls' top edge)
    #[inline]
    pub fn top_edge(&self) -> f32 {
        self.left_wall.top().max(self.right_wall.top())
    }

    /// Bottom of the play area (walls' bottom edge); crossing it loses the ball
    #[inline]
    pub fn bottom_edge(&self) -> f32 {
        self.left_wall.bottom().min(self.right_wall.bottom())
    }

    /// Bricks that must still be destroyed to clear the level
    pub fn bricks_remaining(&self) -> usize {
        self.bricks
            .iter()
            .filter(|b| b.is_alive() && !b.is_indestructible())
            .count()
    }
}

/// Which boundary of the play area was struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Right,
    Top,
    /// The ball left the field; the caller treats this as a lost ball
    Bottom,
}

/// Surface struck by the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    Wall(WallSide),
    Paddle,
    Brick { index: usize },
}

/// One impact during a frame, in chronological order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    pub kind: CollisionKind,
    /// Seconds from the start of the frame to the impact
    pub time_offset: f32,
}

/// Whether the ball is still on the field after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallStatus {
    InPlay,
    /// Ball crossed the bottom boundary this frame
    Exited,
}

/// Result of resolving one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameOutcome {
    /// Ball heading to carry into the next frame
    pub direction: Vec2,
    pub ball: BallStatus,
}

impl FrameOutcome {
    #[inline]
    pub fn exited(&self) -> bool {
        self.ball == BallStatus::Exited
    }
}
