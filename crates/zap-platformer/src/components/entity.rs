use glam::Vec2;

use crate::components::animation::Animation;
use crate::components::kind::{BulletData, EnemyData, EntityKind, KindData, PlayerData};
use crate::components::sprite::SpriteComponent;
use crate::core::rect::Rect;
use crate::core::time::Timer;

/// Fat Entity — one record for players, enemies, bullets and level tiles.
/// Kind-specific state lives in `KindData` and is reached through the
/// kind-checked accessors below.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    data: KindData,
    /// Top-left position in world space.
    pub pos: Vec2,
    /// Velocity in px/s.
    pub vel: Vec2,
    /// Acceleration magnitude in px/s², applied along the desired direction.
    pub accel: Vec2,
    /// Facing, always -1.0 or 1.0.
    direction: f32,
    /// Horizontal speed clamp (0 = immobile horizontally).
    pub max_speed_x: f32,
    /// Collision box relative to `pos`. Empty colliders never collide.
    pub collider: Rect,
    /// Whether gravity and movement apply.
    pub dynamic: bool,
    /// Multiplier on world gravity.
    pub gravity_scale: f32,
    /// Set when a Level collider supports the entity this frame.
    pub grounded: bool,
    /// Rendered size in world units.
    pub size: Vec2,
    animations: Vec<Animation>,
    current_animation: Option<usize>,
    pub sprite: SpriteComponent,
    /// Hit flash, drawn while `should_flash` is set.
    pub should_flash: bool,
    pub flash_timer: Option<Timer>,
}

impl Entity {
    /// Create an entity of the given kind at the origin.
    pub fn new(data: KindData) -> Self {
        Self {
            data,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            direction: 1.0,
            max_speed_x: 0.0,
            collider: Rect::ZERO,
            dynamic: false,
            gravity_scale: 1.0,
            grounded: false,
            size: Vec2::ZERO,
            animations: Vec::new(),
            current_animation: None,
            sprite: SpriteComponent::default(),
            should_flash: false,
            flash_timer: None,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_accel(mut self, accel: Vec2) -> Self {
        self.accel = accel;
        self
    }

    pub fn with_direction(mut self, direction: f32) -> Self {
        self.set_direction(direction);
        self
    }

    pub fn with_max_speed_x(mut self, max_speed_x: f32) -> Self {
        self.max_speed_x = max_speed_x;
        self
    }

    pub fn with_collider(mut self, collider: Rect) -> Self {
        self.collider = collider;
        self
    }

    pub fn with_dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }

    pub fn with_gravity_scale(mut self, scale: f32) -> Self {
        self.gravity_scale = scale;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = sprite;
        self
    }

    /// Attach animations and make the first one active.
    pub fn with_animations(mut self, animations: Vec<Animation>) -> Self {
        self.current_animation = if animations.is_empty() { None } else { Some(0) };
        self.animations = animations;
        self
    }

    pub fn with_flash(mut self, timer: Timer) -> Self {
        self.flash_timer = Some(timer);
        self
    }

    // -- Kind --

    pub fn kind(&self) -> EntityKind {
        self.data.kind()
    }

    pub fn data(&self) -> &KindData {
        &self.data
    }

    /// Replace the kind and its state. The previous variant's fields are dropped.
    pub fn set_data(&mut self, data: KindData) {
        self.data = data;
    }

    pub fn as_player(&self) -> Option<&PlayerData> {
        match &self.data {
            KindData::Player(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_enemy(&self) -> Option<&EnemyData> {
        match &self.data {
            KindData::Enemy(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_bullet(&self) -> Option<&BulletData> {
        match &self.data {
            KindData::Bullet(b) => Some(b),
            _ => None,
        }
    }

    /// Player state. Panics if this entity is not a player.
    pub fn player_mut(&mut self) -> &mut PlayerData {
        match &mut self.data {
            KindData::Player(p) => p,
            other => panic!("expected player data, entity is {:?}", other.kind()),
        }
    }

    /// Enemy state. Panics if this entity is not an enemy.
    pub fn enemy_mut(&mut self) -> &mut EnemyData {
        match &mut self.data {
            KindData::Enemy(e) => e,
            other => panic!("expected enemy data, entity is {:?}", other.kind()),
        }
    }

    /// Bullet state. Panics if this entity is not a bullet.
    pub fn bullet_mut(&mut self) -> &mut BulletData {
        match &mut self.data {
            KindData::Bullet(b) => b,
            other => panic!("expected bullet data, entity is {:?}", other.kind()),
        }
    }

    // -- Facing --

    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Face along the sign of `direction`. Zero keeps the current facing.
    pub fn set_direction(&mut self, direction: f32) {
        if direction != 0.0 {
            self.direction = direction.signum();
        }
    }

    // -- Animation --

    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    /// Index of the active animation; `None` draws `sprite.static_frame`.
    pub fn current_animation(&self) -> Option<usize> {
        self.current_animation
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.current_animation.map(|i| &self.animations[i])
    }

    pub fn animation_mut(&mut self) -> Option<&mut Animation> {
        self.current_animation.map(|i| &mut self.animations[i])
    }

    /// Switch the active animation without restarting it.
    pub fn set_animation(&mut self, index: usize) {
        assert!(
            index < self.animations.len(),
            "animation index {} out of range ({} animations)",
            index,
            self.animations.len()
        );
        self.current_animation = Some(index);
    }

    /// Switch to an animation and restart it from frame 0.
    pub fn play(&mut self, index: usize) {
        self.set_animation(index);
        self.animations[index].reset();
    }

    /// Stop animating and draw a fixed frame from now on.
    pub fn freeze_on(&mut self, frame: u32) {
        self.current_animation = None;
        self.sprite.static_frame = frame;
    }

    /// Frame to draw this tick.
    pub fn frame_index(&self) -> u32 {
        match self.animation() {
            Some(anim) => anim.current_frame(),
            None => self.sprite.static_frame,
        }
    }

    // -- Geometry --

    /// Collider in world space.
    pub fn collider_rect(&self) -> Rect {
        self.collider.translated(self.pos)
    }

    pub fn has_collider(&self) -> bool {
        !self.collider.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::kind::{BulletState, EnemyState};

    fn enemy() -> Entity {
        Entity::new(KindData::Enemy(EnemyData {
            state: EnemyState::Shambling,
            damaged_timer: Timer::new(0.5).unwrap(),
            health: 100,
        }))
    }

    #[test]
    fn kind_follows_data() {
        let mut e = enemy();
        assert_eq!(e.kind(), EntityKind::Enemy);
        assert!(e.as_enemy().is_some());
        assert!(e.as_player().is_none());

        e.set_data(KindData::Bullet(BulletData { state: BulletState::Moving }));
        assert_eq!(e.kind(), EntityKind::Bullet);
        assert!(e.as_enemy().is_none());
    }

    #[test]
    #[should_panic(expected = "expected player data")]
    fn wrong_kind_accessor_panics() {
        let mut e = enemy();
        e.player_mut();
    }

    #[test]
    fn direction_never_becomes_zero() {
        let mut e = Entity::new(KindData::Level);
        assert_eq!(e.direction(), 1.0);
        e.set_direction(-3.0);
        assert_eq!(e.direction(), -1.0);
        e.set_direction(0.0);
        assert_eq!(e.direction(), -1.0);
    }

    #[test]
    fn animation_switch_and_freeze() {
        let mut e = enemy().with_animations(vec![
            Animation::new(4, 1.0).unwrap(),
            Animation::new(2, 1.0).unwrap(),
        ]);
        assert_eq!(e.current_animation(), Some(0));
        e.animation_mut().unwrap().step(0.5);
        assert_eq!(e.frame_index(), 2);

        e.set_animation(1);
        assert_eq!(e.current_animation(), Some(1));

        e.freeze_on(17);
        assert_eq!(e.current_animation(), None);
        assert_eq!(e.frame_index(), 17);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_animation_panics() {
        let mut e = enemy().with_animations(vec![Animation::new(4, 1.0).unwrap()]);
        e.set_animation(3);
    }

    #[test]
    fn collider_rect_is_world_space() {
        let e = Entity::new(KindData::Level)
            .with_pos(Vec2::new(64.0, 32.0))
            .with_collider(Rect::new(0.0, 0.0, 32.0, 32.0));
        assert_eq!(e.collider_rect(), Rect::new(64.0, 32.0, 32.0, 32.0));
        assert!(e.has_collider());
        assert!(!Entity::new(KindData::Level).has_collider());
    }
}
