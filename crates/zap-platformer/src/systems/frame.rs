//! Frame orchestration: behavior, then horizontal move and resolve, then
//! vertical move and resolve, then the ground check, for every dynamic
//! layer entity followed by every live bullet.

use glam::Vec2;

use crate::api::types::{EntityId, SoundEvent};
use crate::components::entity::Entity;
use crate::core::world::World;
use crate::input::state::InputState;
use crate::systems::behavior::{self, UpdateContext};
use crate::systems::collision::{self, Axis, Collisions};
use crate::systems::{bullet, player};

/// Run one simulation tick.
pub fn advance_frame(world: &mut World, dt: f32, input: &InputState) {
    let dt = clamp_dt(dt, world.config().max_frame_dt);
    world.sounds.clear();
    if dt > 0.0 {
        world.frame += 1;
    }

    // Layer entities are the obstacle set; bullets never block anything.
    let obstacles: Vec<EntityId> = world.layers.iter().flatten().copied().collect();

    // Spawning mid-loop would grow the bullet list under us; queue instead.
    let mut fire_requests = Vec::new();
    for &id in &obstacles {
        if !world.scene.get(id).is_some_and(|e| e.dynamic) {
            continue;
        }
        if let Some(muzzle) = step_entity(world, id, &obstacles, dt, input) {
            fire_requests.push(muzzle);
        }
    }
    for muzzle in fire_requests {
        fire(world, muzzle);
    }

    for i in 0..world.bullets.len() {
        let id = world.bullets[i];
        if world.scene.get(id).is_some_and(bullet::is_active) {
            step_entity(world, id, &obstacles, dt, input);
        }
    }

    if let Some(target) = world.player().map(|p| p.pos.x + p.size.x * 0.5) {
        world.viewport.follow_x(target);
    }
}

fn clamp_dt(dt: f32, max: Option<f32>) -> f32 {
    if !(dt >= 0.0) || !dt.is_finite() {
        log::warn!("ignoring invalid frame time {dt}");
        return 0.0;
    }
    match max {
        Some(max) if dt > max => {
            log::warn!("frame time {dt:.3}s clamped to {max:.3}s");
            max
        }
        _ => dt,
    }
}

/// Shooter state sampled when a shot is requested.
#[derive(Debug, Clone, Copy)]
struct Muzzle {
    pos: Vec2,
    vel_x: f32,
    dir: f32,
}

impl Muzzle {
    fn of(shooter: &Entity) -> Self {
        Self {
            pos: shooter.pos,
            vel_x: shooter.vel.x,
            dir: shooter.direction(),
        }
    }
}

/// Update, move and collide one entity. Returns the shooter's muzzle
/// state, taken before it moved, if it asked to fire.
fn step_entity(
    world: &mut World,
    id: EntityId,
    obstacles: &[EntityId],
    dt: f32,
    input: &InputState,
) -> Option<Muzzle> {
    let World {
        scene,
        prefabs,
        sounds,
        viewport,
        player,
        ..
    } = world;
    let prefabs = &*prefabs;
    let epsilon = prefabs.config().collision_epsilon;
    let player_pos = player.and_then(|p| scene.get(p)).map(|p| p.pos);

    let entity = scene.get_mut(id)?;
    let mut ctx = UpdateContext {
        dt,
        input,
        prefabs,
        player_pos,
        viewport: viewport.rect,
        sounds: &mut *sounds,
    };
    let intent = behavior::update_entity(entity, &mut ctx);
    let muzzle = intent.fire.then(|| Muzzle::of(entity));

    // Grounded is rebuilt from this frame's contacts only.
    entity.grounded = false;
    entity.pos.x += entity.vel.x * dt;

    let mut collisions = Collisions {
        prefabs,
        sounds: &mut *sounds,
        epsilon,
    };
    collision::resolve_axis(scene, id, obstacles, Axis::X, &mut collisions);

    if let Some(entity) = scene.get_mut(id) {
        entity.pos.y += entity.vel.y * dt;
    }
    let landed = collision::resolve_axis(scene, id, obstacles, Axis::Y, &mut collisions);
    let supported = collision::sense_ground(scene, id, obstacles, epsilon);

    if let Some(entity) = scene.get_mut(id) {
        entity.grounded = landed || supported;
        if entity.grounded {
            player::land(entity, prefabs.sprites());
        }
    }

    muzzle
}

/// Fire a bullet from `origin`: recycle the first inactive pool slot, or
/// grow the pool if every bullet is in flight.
///
/// Panics if `origin` is not a live entity.
pub fn spawn_bullet(world: &mut World, origin: EntityId) -> EntityId {
    let Some(shooter) = world.scene.get(origin) else {
        panic!("spawn_bullet: origin {origin:?} is not a live entity");
    };
    let muzzle = Muzzle::of(shooter);
    fire(world, muzzle)
}

fn fire(world: &mut World, muzzle: Muzzle) -> EntityId {
    let Muzzle { pos: origin_pos, vel_x: origin_vx, dir } = muzzle;
    let cfg = &world.prefabs.config().bullet;
    let lead = (dir + 1.0) * 0.5;
    let offset = Vec2::new(
        cfg.spawn_offset_left + (cfg.spawn_offset_right - cfg.spawn_offset_left) * lead,
        cfg.spawn_offset_y,
    );
    let pos = origin_pos + offset;
    let vel = Vec2::new(origin_vx + cfg.muzzle_speed * dir, world.rng.centered(cfg.jitter));

    let recycled = world.bullets.iter().copied().find(|&id| {
        world
            .scene
            .get(id)
            .is_some_and(|b| !bullet::is_active(b))
    });
    let id = match recycled {
        Some(id) => id,
        None => {
            let id = world.scene.spawn(world.prefabs.bullet());
            world.bullets.push(id);
            log::debug!("bullet pool grew to {}", world.bullets.len());
            id
        }
    };

    if let Some(shot) = world.scene.get_mut(id) {
        bullet::rearm(shot, &world.prefabs);
        shot.pos = pos;
        shot.vel = vel;
        shot.set_direction(dir);
    }
    world.sounds.push(SoundEvent::Shoot);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::game::GameConfig;
    use crate::assets::prefabs::Prefabs;
    use crate::components::entity::Entity;
    use crate::components::kind::{BulletState, EnemyState, KindData, PlayerState};
    use crate::components::sprite::{SpriteSet, TextureId};
    use crate::core::rect::Rect;
    use crate::input::state::Action;

    const DT: f32 = 1.0 / 60.0;
    const FLOOR_Y: f32 = 256.0;

    fn world() -> World {
        world_with(GameConfig::default())
    }

    fn world_with(config: GameConfig) -> World {
        World::new(Prefabs::new(config, SpriteSet::default()).unwrap())
    }

    /// A floor of tiles on layer 0 and a player standing on it at x = 64.
    fn arena() -> (World, EntityId) {
        arena_with(GameConfig::default())
    }

    /// Bullets fly level so shots line up with their targets.
    fn steady_aim() -> GameConfig {
        let mut config = GameConfig::default();
        config.bullet.jitter = 0.0;
        config
    }

    fn arena_with(config: GameConfig) -> (World, EntityId) {
        let mut w = world_with(config);
        for i in -10..20 {
            let tile = w
                .prefabs()
                .tile(Vec2::new(i as f32 * 32.0, FLOOR_Y), TextureId(8), 0);
            w.spawn(0, tile);
        }
        let player = w.spawn_player(1, Vec2::new(64.0, FLOOR_Y - 32.0));
        (w, player)
    }

    fn player_state(w: &World) -> PlayerState {
        w.player().unwrap().as_player().unwrap().state
    }

    fn snapshot(w: &World) -> Vec<(EntityId, Entity)> {
        w.scene().iter().map(|(id, e)| (id, e.clone())).collect()
    }

    #[test]
    fn horizontal_contact_is_flush() {
        let mut w = world();
        let wall = w.prefabs().tile(Vec2::new(96.0, 0.0), TextureId(0), 0);
        w.spawn(0, wall);
        let mover = w.spawn(
            1,
            Entity::new(KindData::Level)
                .with_pos(Vec2::new(80.0, 8.0))
                .with_vel(Vec2::new(120.0, 0.0))
                .with_max_speed_x(1000.0)
                .with_dynamic(true)
                .with_gravity_scale(0.0)
                .with_collider(Rect::new(0.0, 0.0, 16.0, 16.0)),
        );

        w.advance_frame(0.05, &InputState::new());
        let m = w.get(mover).unwrap();
        assert_eq!(m.collider_rect().right(), 96.0);
        assert_eq!(m.vel.x, 0.0);
    }

    #[test]
    fn grounded_tracks_support() {
        let mut w = world();
        let floor = w.prefabs().tile(Vec2::new(64.0, FLOOR_Y), TextureId(0), 0);
        let floor = w.spawn(0, floor);
        let player = w.spawn_player(1, Vec2::new(64.0, FLOOR_Y - 32.0));

        w.advance_frame(DT, &InputState::new());
        assert!(w.get(player).unwrap().grounded);
        assert_eq!(w.get(player).unwrap().collider_rect().bottom(), FLOOR_Y);

        w.advance_frame(DT, &InputState::new());
        assert!(w.get(player).unwrap().grounded);

        w.despawn(floor);
        w.advance_frame(DT, &InputState::new());
        assert!(!w.get(player).unwrap().grounded);
    }

    #[test]
    fn falling_player_lands_on_floor() {
        let (mut w, player) = arena();
        w.get_mut(player).unwrap().pos.y = 100.0;
        for _ in 0..120 {
            w.advance_frame(DT, &InputState::new());
        }
        let p = w.get(player).unwrap();
        assert!(p.grounded);
        assert_eq!(p.vel.y, 0.0);
        assert_eq!(p.collider_rect().bottom(), FLOOR_Y);
    }

    #[test]
    fn move_left_runs_left() {
        let (mut w, _) = arena();
        assert_eq!(w.player().unwrap().direction(), 1.0);
        let left = InputState::new().with(Action::MoveLeft);
        for _ in 0..30 {
            w.advance_frame(DT, &left);
        }
        let p = w.player().unwrap();
        assert_eq!(player_state(&w), PlayerState::Running);
        assert_eq!(p.direction(), -1.0);
        assert!(p.vel.x < 0.0);
        assert!(p.grounded);
    }

    #[test]
    fn jump_then_land() {
        let (mut w, _) = arena();
        w.advance_frame(DT, &InputState::new());
        assert!(w.player().unwrap().grounded);

        w.advance_frame(DT, &InputState::new().with(Action::Jump));
        assert_eq!(player_state(&w), PlayerState::Jumping);
        assert!(w.player().unwrap().vel.y < 0.0);
        assert!(!w.player().unwrap().grounded);

        let mut frames = 0;
        while player_state(&w) == PlayerState::Jumping && frames < 120 {
            w.advance_frame(DT, &InputState::new());
            frames += 1;
        }
        assert_eq!(player_state(&w), PlayerState::Running);
        assert!(w.player().unwrap().grounded);

        w.advance_frame(DT, &InputState::new());
        assert_eq!(player_state(&w), PlayerState::Idle);
    }

    #[test]
    fn zero_dt_is_idempotent() {
        let (mut w, _) = arena();
        w.spawn_enemy(1, Vec2::new(400.0, FLOOR_Y - 32.0));
        w.advance_frame(DT, &InputState::new());

        let before = snapshot(&w);
        let viewport = w.viewport.clone();
        let frames = w.frame_count();
        w.advance_frame(0.0, &InputState::new());
        w.advance_frame(0.0, &InputState::new());
        assert_eq!(snapshot(&w), before);
        assert_eq!(w.viewport, viewport);
        assert_eq!(w.frame_count(), frames);
    }

    #[test]
    fn invalid_and_huge_dt_are_tamed() {
        let mut w = world();
        let player = w.spawn_player(0, Vec2::ZERO);

        w.advance_frame(f32::NAN, &InputState::new());
        w.advance_frame(-1.0, &InputState::new());
        assert_eq!(w.get(player).unwrap().vel, Vec2::ZERO);

        assert_eq!(w.frame_count(), 0);

        w.advance_frame(10.0, &InputState::new());
        let cap = w.config().max_frame_dt.unwrap();
        assert!((w.get(player).unwrap().vel.y - 500.0 * cap).abs() < 1e-4);
        assert_eq!(w.frame_count(), 1);
    }

    #[test]
    fn bullet_pool_grows_then_recycles() {
        let (mut w, player) = arena();
        assert!(w.bullets().is_empty());

        let first = w.spawn_bullet(player);
        assert_eq!(w.bullets().len(), 1);
        assert_eq!(w.sounds(), &[SoundEvent::Shoot]);

        w.get_mut(first).unwrap().bullet_mut().state = BulletState::Inactive;
        let second = w.spawn_bullet(player);
        assert_eq!(second, first);
        assert_eq!(w.bullets().len(), 1);
        assert_eq!(w.get(second).unwrap().as_bullet().unwrap().state, BulletState::Moving);

        let third = w.spawn_bullet(player);
        assert_ne!(third, first);
        assert_eq!(w.bullets().len(), 2);
    }

    #[test]
    fn bullet_spawns_at_leading_edge() {
        let (mut w, player) = arena();
        let right = w.spawn_bullet(player);
        let b = w.get(right).unwrap();
        assert_eq!(b.pos, Vec2::new(64.0 + 24.0, FLOOR_Y - 32.0 + 16.0));
        assert_eq!(b.vel.x, 600.0);
        assert!(b.vel.y.abs() <= 20.0);
        assert_eq!(b.direction(), 1.0);

        w.get_mut(player).unwrap().set_direction(-1.0);
        let left = w.spawn_bullet(player);
        let b = w.get(left).unwrap();
        assert_eq!(b.pos.x, 64.0);
        assert_eq!(b.vel.x, -600.0);
        assert_eq!(b.direction(), -1.0);
    }

    #[test]
    fn fired_bullet_is_recycled_after_leaving() {
        let (mut w, _) = arena();
        w.advance_frame(DT, &InputState::new().with(Action::Fire));
        assert_eq!(w.bullets().len(), 1);
        assert!(w.sounds().contains(&SoundEvent::Shoot));

        let shot = w.bullets()[0];
        let mut frames = 0;
        while bullet::is_active(w.get(shot).unwrap()) && frames < 120 {
            w.advance_frame(DT, &InputState::new());
            frames += 1;
        }
        assert!(!bullet::is_active(w.get(shot).unwrap()));

        w.advance_frame(DT, &InputState::new().with(Action::Fire));
        assert_eq!(w.bullets().len(), 1);
        assert!(bullet::is_active(w.get(shot).unwrap()));
    }

    #[test]
    fn sustained_fire_kills_enemy_on_tenth_hit() {
        let (mut w, _) = arena();
        let enemy = w.spawn_enemy(1, Vec2::new(200.0, FLOOR_Y - 32.0));
        let fire = InputState::new().with(Action::Fire);

        let mut hits = 0;
        let mut deaths = 0;
        for _ in 0..180 {
            w.advance_frame(DT, &fire);
            for sound in w.sounds() {
                match sound {
                    SoundEvent::EnemyHit => hits += 1,
                    SoundEvent::EnemyDied => deaths += 1,
                    SoundEvent::Shoot => {}
                }
            }
        }
        assert_eq!(hits, 9);
        assert_eq!(deaths, 1);
        let e = w.get(enemy).unwrap().as_enemy().unwrap();
        assert_eq!(e.state, EnemyState::Dead);
        assert_eq!(e.health, 0);
    }

    #[test]
    fn bullets_hit_enemies_at_the_frame_cap() {
        let cap = steady_aim().max_frame_dt.unwrap();
        // A long hitch is clamped to the cap, so both runs must connect.
        for dt in [cap, 0.1] {
            let (mut w, _) = arena_with(steady_aim());
            let enemy = w.spawn_enemy(1, Vec2::new(180.0, FLOOR_Y - 32.0));

            w.advance_frame(dt, &InputState::new().with(Action::Fire));
            for _ in 0..20 {
                w.advance_frame(dt, &InputState::new());
            }
            assert_eq!(w.get(enemy).unwrap().as_enemy().unwrap().health, 90, "dt = {dt}");
        }
    }

    #[test]
    fn shot_inherits_velocity_from_before_collision() {
        let (mut w, player) = arena_with(steady_aim());
        // Knee-high ledge: stops the player, leaves the bullet lane clear.
        w.spawn(
            0,
            Entity::new(KindData::Level)
                .with_pos(Vec2::new(86.0, FLOOR_Y - 8.0))
                .with_collider(Rect::new(0.0, 0.0, 32.0, 8.0)),
        );
        w.get_mut(player).unwrap().vel.x = 100.0;

        w.advance_frame(DT, &InputState::new().with(Action::MoveRight).with(Action::Fire));
        assert_eq!(w.get(player).unwrap().vel.x, 0.0);

        let b = w.get(w.bullets()[0]).unwrap();
        assert_eq!(b.as_bullet().unwrap().state, BulletState::Moving);
        assert_eq!(b.vel.x, 700.0);
        assert!((b.pos.x - (64.0 + 24.0 + 700.0 * DT)).abs() < 1e-3);
    }

    #[test]
    fn camera_follows_player() {
        let (mut w, player) = arena();
        w.get_mut(player).unwrap().pos.x = 1000.0;
        w.advance_frame(0.0, &InputState::new());
        assert_eq!(w.viewport.rect.center().x, 1016.0);
    }
}
