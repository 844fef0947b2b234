use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::collision::{BounceCase, PairKey, resolve_bounce};
use crate::dynamics::{Action, Body, BodyDef};
use crate::math::Size;

#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyHandle(pub usize);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    /// Ticks per second the driving loop is expected to run at.
    pub frame_rate: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            title: "Scene".to_owned(),
            width: 1280.0,
            height: 720.0,
            frame_rate: 60,
        }
    }
}

/// Insertion-ordered arena of bodies advanced one tick per [`World::step`].
///
/// Bodies are updated in handle order. That order decides which side of a
/// contact resolves first, so it never changes once a body is created.
pub struct World {
    pub config: WorldConfig,
    pub bodies: Vec<Body>,
    player: Option<BodyHandle>,
    answered: BTreeSet<PairKey>,
    tick: u64,
    paused: bool,
}

impl World {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_config(WorldConfig {
            width,
            height,
            ..WorldConfig::default()
        })
    }

    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            config,
            bodies: Vec::new(),
            player: None,
            answered: BTreeSet::new(),
            tick: 0,
            paused: false,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Size {
        Size::new(self.config.width, self.config.height)
    }

    /// Adds a body. It joins collision checks from its second tick on.
    pub fn create_body(&mut self, def: BodyDef) -> BodyHandle {
        let id = self.bodies.len();
        self.bodies.push(Body::from_def(def));
        trace!(body = id, "body created");
        BodyHandle(id)
    }

    pub fn body(&self, h: BodyHandle) -> &Body {
        &self.bodies[h.0]
    }

    pub fn body_mut(&mut self, h: BodyHandle) -> &mut Body {
        &mut self.bodies[h.0]
    }

    pub fn bodies_two_mut(&mut self, a: BodyHandle, b: BodyHandle) -> (&mut Body, &mut Body) {
        bodies_two_mut(&mut self.bodies, a, b)
    }

    /// Designates the player-controlled body, the one `KillNonPlayers` spares.
    pub fn set_player(&mut self, h: Option<BodyHandle>) {
        if let Some(h) = h {
            assert!(h.0 < self.bodies.len(), "player handle {h:?} out of range");
        }
        self.player = h;
    }

    #[inline]
    pub fn player(&self) -> Option<BodyHandle> {
        self.player
    }

    pub fn visible_bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_visible())
            .map(|(i, b)| (BodyHandle(i), b))
    }

    /// Completed steps.
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
        self.answered.clear();
        self.player = None;
        self.tick = 0;
        self.paused = false;
    }

    /// Live bodies overlapping `h`, in handle order. Empty for `PassThrough` bodies.
    pub fn contacts(&self, h: BodyHandle) -> Vec<BodyHandle> {
        let body = &self.bodies[h.0];
        if body.collision == Action::PassThrough {
            return Vec::new();
        }
        self.bodies
            .iter()
            .enumerate()
            .filter(|&(i, other)| i != h.0 && body.collides_with(other))
            .map(|(i, _)| BodyHandle(i))
            .collect()
    }

    pub fn step(&mut self) {
        if self.paused {
            return;
        }

        self.answered.clear();
        for i in 0..self.bodies.len() {
            self.update_body(BodyHandle(i));
        }
        self.tick += 1;
    }

    fn update_body(&mut self, h: BodyHandle) {
        let bounds = self.bounds();
        let body = &mut self.bodies[h.0];
        if !body.is_visible() {
            return;
        }

        body.apply_pending_flip();
        body.check_bounds(bounds);

        // A body's first tick only settles its position.
        if body.has_entered_world() {
            for partner in self.contacts(h) {
                if self.answered.contains(&PairKey::new(h, partner)) {
                    continue;
                }
                trace!(body = h.0, partner = partner.0, "contact");
                self.resolve_pair(h, partner);
            }
        }

        let body = &mut self.bodies[h.0];
        if body.is_visible() {
            body.integrate();
        }
        body.enter_world();
    }

    fn resolve_pair(&mut self, this: BodyHandle, partner: BodyHandle) {
        let player = self.player;
        let (a, b) = bodies_two_mut(&mut self.bodies, this, partner);
        let (ca, cb) = (a.collision, b.collision);

        if !(a.is_static() && b.is_static()) {
            if ca.is_lethal_to_self() && cb != Action::PassThrough {
                hide(this, a, ca);
            }
            if cb.is_lethal_to_self() && ca != Action::PassThrough {
                hide(partner, b, cb);
            }
            if ca == Action::KillNonPlayers && killable(partner, b, player) {
                hide(partner, b, ca);
            }
            if cb == Action::KillNonPlayers && killable(this, a, player) {
                hide(this, a, cb);
            }
        }

        if ca == Action::PassThrough || cb == Action::PassThrough {
            return;
        }
        let bouncy = ca == Action::Bounce || cb == Action::Bounce;
        if !(a.is_visible() && b.is_visible()) && !bouncy {
            return;
        }

        let mut deferred = false;
        if ca == Action::Bounce {
            let case = resolve_bounce(this, a, partner, b);
            debug!(body = this.0, partner = partner.0, ?case, "bounce");
            if let BounceCase::Opposed(_) = case {
                self.answered.insert(PairKey::new(partner, this));
                deferred = true;
            }
        }

        // A partner that already got its flip skips this pair, so it would
        // never consume the record.
        let vanished = !a.is_visible();
        if cb == Action::Bounce && !deferred && (!b.is_static() || vanished) {
            b.record_stationary(this);
            if vanished {
                let case = resolve_bounce(partner, b, this, a);
                debug!(body = partner.0, partner = this.0, ?case, "bounce for vanished partner");
                self.answered.insert(PairKey::new(partner, this));
            }
        }
    }
}

fn killable(h: BodyHandle, body: &Body, player: Option<BodyHandle>) -> bool {
    player != Some(h)
        && body.collision != Action::KillNonPlayers
        && body.collision != Action::PassThrough
}

fn hide(h: BodyHandle, body: &mut Body, cause: Action) {
    if body.is_visible() {
        debug!(body = h.0, %cause, "body hidden by collision");
        body.hide();
    }
}

pub fn bodies_two_mut(bodies: &mut [Body], a: BodyHandle, b: BodyHandle) -> (&mut Body, &mut Body) {
    assert!(a != b, "bodies_two_mut called with identical handles");

    let (i, j) = if a.0 <= b.0 { (a.0, b.0) } else { (b.0, a.0) };
    let (left, right) = bodies.split_at_mut(j);
    let bi = &mut left[i];
    let bj = &mut right[0];

    if a.0 < b.0 { (bi, bj) } else { (bj, bi) }
}
