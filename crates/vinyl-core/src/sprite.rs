use crate::constants::{HEAD_CLOSED_ROTATION, HEAD_MOUTH_TOGGLE_SECS, TAIL_ROTATION_SPEED};
use crate::layout::{AnchorKind, AnchorPlacement};
use glam::DVec2;
use std::f64::consts::TAU;

/// One end of the caterpillar.
#[derive(Clone, Debug)]
pub struct AnchorSprite {
    pub kind: AnchorKind,
    pub position: DVec2,
    pub size: DVec2,
    pub rotation: f64,
    pub angular_velocity: f64,
    pub visible: bool,
    /// Draw the alternate image (closed mouth) instead of the primary one.
    pub alternate_frame: bool,
}

impl AnchorSprite {
    pub fn new(placement: AnchorPlacement, size: DVec2) -> Self {
        Self {
            kind: placement.kind,
            position: placement.position,
            size,
            rotation: 0.0,
            angular_velocity: 0.0,
            visible: false,
            alternate_frame: false,
        }
    }

    pub fn update(&mut self, dt_sec: f64) {
        if self.angular_velocity != 0.0 {
            self.rotation = (self.rotation + self.angular_velocity * dt_sec) % TAU;
        }
    }
}

/// Head and tail sprites plus the head's chewing cycle.
#[derive(Clone, Debug)]
pub struct Caterpillar {
    pub head: AnchorSprite,
    pub tail: AnchorSprite,
    mouth_timer: f64,
}

impl Caterpillar {
    pub fn new(head: AnchorPlacement, tail: AnchorPlacement, size: DVec2) -> Self {
        Self {
            head: AnchorSprite::new(head, size),
            tail: AnchorSprite::new(tail, size),
            mouth_timer: 0.0,
        }
    }

    pub fn show_head(&mut self) {
        if self.head.visible {
            return;
        }
        self.reset_mouth();
        self.head.visible = true;
    }

    pub fn hide_head(&mut self) {
        if !self.head.visible {
            return;
        }
        self.head.visible = false;
        self.reset_mouth();
    }

    /// Returns true the first time the tail appears.
    pub fn show_tail(&mut self) -> bool {
        if self.tail.visible {
            return false;
        }
        self.tail.angular_velocity = TAIL_ROTATION_SPEED;
        self.tail.visible = true;
        true
    }

    pub fn hide_all(&mut self) {
        self.hide_head();
        self.tail.visible = false;
        self.tail.angular_velocity = 0.0;
        self.tail.rotation = 0.0;
    }

    fn reset_mouth(&mut self) {
        self.mouth_timer = 0.0;
        self.head.alternate_frame = false;
        self.head.rotation = 0.0;
    }

    pub fn update(&mut self, dt_sec: f64) {
        if self.head.visible {
            self.mouth_timer += dt_sec;
            while self.mouth_timer >= HEAD_MOUTH_TOGGLE_SECS {
                self.mouth_timer -= HEAD_MOUTH_TOGGLE_SECS;
                self.head.alternate_frame = !self.head.alternate_frame;
                self.head.rotation = if self.head.alternate_frame {
                    HEAD_CLOSED_ROTATION
                } else {
                    0.0
                };
            }
        }
        if self.tail.visible {
            self.tail.update(dt_sec);
        }
    }
}
