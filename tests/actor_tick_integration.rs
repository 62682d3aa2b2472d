//! Full-tick tests: input, hops, collisions and resets through the schedule.

use bevy_ecs::prelude::*;
use glam::Vec3;

use gridhopper::components::actortransform::ActorTransform;
use gridhopper::components::gridposition::{Direction, GridPosition};
use gridhopper::components::player::Player;
use gridhopper::components::pose::Orientation;
use gridhopper::components::presence::Presence;
use gridhopper::events::actor::LevelResetEvent;
use gridhopper::events::collision::HazardContact;
use gridhopper::game::{build_schedule, build_world, snapshot, spawn_hazard, tick};
use gridhopper::resources::actor::{ActorState, ActorStateMachine};
use gridhopper::resources::collisioninbox::CollisionInbox;
use gridhopper::resources::effects::DeathParticles;
use gridhopper::resources::gameconfig::GameConfig;
use gridhopper::resources::input::InputState;
use gridhopper::resources::level::Level;
use gridhopper::resources::runlog::RunLog;
use gridhopper::resources::script::InputScript;

const EPSILON: f32 = 1e-5;

/// Eight ticks per second: 0.125s per tick, two ticks per hop.
const DT: f32 = 0.125;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn test_config() -> GameConfig {
    let mut config = GameConfig::new();
    config.move_duration = 0.25;
    config.tick_rate = 8;
    // Open the row in front of the spawn cell as well.
    config.start_area.max_y = 0;
    config
}

fn setup() -> (World, Schedule) {
    let mut world = build_world(&test_config());
    let mut schedule = build_schedule();
    schedule
        .initialize(&mut world)
        .expect("schedule should initialize");
    (world, schedule)
}

fn step(world: &mut World, schedule: &mut Schedule) {
    tick(world, schedule, DT);
}

fn tap(world: &mut World, direction: Direction) {
    let mut input = world.resource_mut::<InputState>();
    input.press(direction);
    input.release(direction);
}

fn report_contact(world: &World, point: Vec3) {
    world.resource::<CollisionInbox>().report(HazardContact { point });
}

fn actor(world: &World) -> &ActorStateMachine {
    world.resource::<ActorStateMachine>()
}

fn player_presence(world: &mut World) -> bool {
    let mut query = world.query_filtered::<&Presence, With<Player>>();
    query.single(world).expect("one player").visible
}

// ==================== Spawn ====================

#[test]
fn world_starts_ready_on_spawn() {
    let (mut world, _) = setup();
    let actor = actor(&world);
    assert_eq!(actor.state(), ActorState::Ready);
    assert_eq!(actor.position(), GridPosition::new(0, -1));
    assert!(approx_vec(actor.pose().position, Vec3::new(0.0, 0.2, -1.0)));
    assert!(actor.is_present());
    assert!(player_presence(&mut world));
}

// ==================== Hops ====================

#[test]
fn hop_commits_cell_immediately_and_lands_after_duration() {
    let (mut world, mut schedule) = setup();

    tap(&mut world, Direction::Up);
    step(&mut world, &mut schedule);
    {
        let actor = actor(&world);
        assert_eq!(actor.state(), ActorState::Moving);
        assert_eq!(actor.position(), GridPosition::new(0, 0));
        assert_eq!(actor.facing(), Direction::Up);
        // Halfway: top of the arc, pitch at zero crossing.
        let pose = actor.pose();
        assert!(approx_vec(pose.position, Vec3::new(0.0, 0.7, -0.5)));
        assert!(approx_eq(pose.orientation.pitch, 0.0));
    }

    step(&mut world, &mut schedule);
    let actor = actor(&world);
    assert_eq!(actor.state(), ActorState::Ready);
    assert!(actor.motion_task().is_none());
    assert_eq!(actor.pose().position, Vec3::new(0.0, 0.2, 0.0));
    assert_eq!(actor.pose().orientation, Orientation::IDENTITY);
}

#[test]
fn player_entity_follows_actor() {
    let (mut world, mut schedule) = setup();
    tap(&mut world, Direction::Left);
    step(&mut world, &mut schedule);

    let pose = actor(&world).pose();
    let mut query = world.query_filtered::<(&ActorTransform, &GridPosition), With<Player>>();
    let (transform, cell) = query.single(&world).expect("one player");
    assert_eq!(transform.pose, pose);
    assert_eq!(transform.facing, Direction::Left);
    assert_eq!(*cell, GridPosition::new(-1, -1));
}

#[test]
fn input_while_moving_is_dropped() {
    let (mut world, mut schedule) = setup();
    tap(&mut world, Direction::Up);
    step(&mut world, &mut schedule);

    tap(&mut world, Direction::Left);
    step(&mut world, &mut schedule);

    let actor = actor(&world);
    assert_eq!(actor.state(), ActorState::Ready);
    assert_eq!(actor.position(), GridPosition::new(0, 0));
    assert_eq!(actor.facing(), Direction::Up);
    assert_eq!(world.resource::<RunLog>().hops, 1);
}

#[test]
fn held_key_does_not_repeat() {
    let (mut world, mut schedule) = setup();
    world.resource_mut::<InputState>().press(Direction::Right);
    for _ in 0..6 {
        step(&mut world, &mut schedule);
    }
    assert_eq!(actor(&world).position(), GridPosition::new(1, -1));
    assert_eq!(world.resource::<RunLog>().hops, 1);
}

#[test]
fn hop_out_of_bounds_is_rejected() {
    let (mut world, mut schedule) = setup();
    tap(&mut world, Direction::Up);
    step(&mut world, &mut schedule);
    step(&mut world, &mut schedule);

    // (0, 1) lies outside the open area.
    tap(&mut world, Direction::Up);
    step(&mut world, &mut schedule);
    let actor = actor(&world);
    assert_eq!(actor.state(), ActorState::Ready);
    assert_eq!(actor.position(), GridPosition::new(0, 0));
    assert_eq!(actor.pose().position, Vec3::new(0.0, 0.2, 0.0));
}

#[test]
fn blocked_cell_is_rejected() {
    let (mut world, mut schedule) = setup();
    world
        .resource_mut::<Level>()
        .block(GridPosition::new(0, -2));

    tap(&mut world, Direction::Down);
    step(&mut world, &mut schedule);
    let actor = actor(&world);
    assert_eq!(actor.state(), ActorState::Ready);
    assert_eq!(actor.position(), GridPosition::new(0, -1));
    assert_eq!(actor.facing(), Direction::Up);
}

// ==================== Collisions ====================

#[test]
fn collision_mid_hop_kills_and_freezes_pose() {
    let (mut world, mut schedule) = setup();
    tap(&mut world, Direction::Up);
    step(&mut world, &mut schedule);
    let frozen = actor(&world).pose();

    let contact = Vec3::new(0.5, 0.7, -0.5);
    report_contact(&world, contact);
    step(&mut world, &mut schedule);

    {
        let actor = actor(&world);
        assert_eq!(actor.state(), ActorState::Dead);
        assert!(actor.motion_task().is_none());
        assert!(!actor.is_present());
        assert_eq!(actor.pose(), frozen);
    }
    assert!(!player_presence(&mut world));

    let particles = world.resource::<DeathParticles>();
    assert_eq!(particles.played(), 1);
    let burst = particles.active().expect("burst showing");
    assert_eq!(burst.position, contact);
    let towards = (frozen.position + Vec3::Y - contact).normalize();
    assert!(approx_vec(burst.forward(), towards));

    // Time keeps passing, nothing moves.
    for _ in 0..4 {
        step(&mut world, &mut schedule);
    }
    assert_eq!(actor(&world).pose(), frozen);
    assert_eq!(actor(&world).state(), ActorState::Dead);
}

#[test]
fn collision_wins_over_landing_in_same_tick() {
    let (mut world, mut schedule) = setup();
    tap(&mut world, Direction::Up);
    step(&mut world, &mut schedule);
    let frozen = actor(&world).pose();

    // This tick would land the hop.
    report_contact(&world, frozen.position);
    step(&mut world, &mut schedule);

    assert_eq!(actor(&world).state(), ActorState::Dead);
    assert_eq!(actor(&world).pose(), frozen);
    let run = world.resource::<RunLog>();
    assert_eq!(run.landings, 0);
    assert_eq!(run.deaths, 1);
}

#[test]
fn repeated_contacts_play_effect_once() {
    let (mut world, mut schedule) = setup();
    report_contact(&world, Vec3::ZERO);
    report_contact(&world, Vec3::X);
    step(&mut world, &mut schedule);
    report_contact(&world, Vec3::Y);
    step(&mut world, &mut schedule);

    assert_eq!(actor(&world).state(), ActorState::Dead);
    let particles = world.resource::<DeathParticles>();
    assert_eq!(particles.played(), 1);
    assert_eq!(particles.active().map(|b| b.position), Some(Vec3::ZERO));
    assert_eq!(world.resource::<RunLog>().deaths, 1);
}

#[test]
fn contact_from_another_thread_arrives_next_tick() {
    let (mut world, mut schedule) = setup();
    let sender = world.resource::<CollisionInbox>().sender();
    std::thread::spawn(move || {
        sender
            .send(HazardContact { point: Vec3::ONE })
            .expect("inbox open");
    })
    .join()
    .expect("sender thread");

    step(&mut world, &mut schedule);
    assert!(actor(&world).is_dead());
}

#[test]
fn dead_actor_ignores_input() {
    let (mut world, mut schedule) = setup();
    report_contact(&world, Vec3::ZERO);
    step(&mut world, &mut schedule);

    tap(&mut world, Direction::Left);
    step(&mut world, &mut schedule);
    assert_eq!(actor(&world).state(), ActorState::Dead);
    assert_eq!(actor(&world).position(), GridPosition::new(0, -1));
}

// ==================== Hazards ====================

#[test]
fn hopping_onto_hazard_reports_once() {
    let (mut world, mut schedule) = setup();
    spawn_hazard(&mut world, GridPosition::new(0, -2));

    tap(&mut world, Direction::Down);
    // The committed cell overlaps right away; the contact lands next tick.
    step(&mut world, &mut schedule);
    assert_eq!(actor(&world).state(), ActorState::Moving);
    let pose = actor(&world).pose();

    step(&mut world, &mut schedule);
    assert_eq!(actor(&world).state(), ActorState::Dead);
    let expected = pose.position.lerp(Vec3::new(0.0, 0.2, -2.0), 0.5);
    let particles = world.resource::<DeathParticles>();
    assert!(approx_vec(
        particles.active().expect("burst").position,
        expected
    ));

    for _ in 0..4 {
        step(&mut world, &mut schedule);
    }
    assert_eq!(world.resource::<DeathParticles>().played(), 1);
}

#[test]
fn hazard_elsewhere_is_harmless() {
    let (mut world, mut schedule) = setup();
    spawn_hazard(&mut world, GridPosition::new(3, -3));

    tap(&mut world, Direction::Right);
    for _ in 0..3 {
        step(&mut world, &mut schedule);
    }
    assert_eq!(actor(&world).state(), ActorState::Ready);
    assert_eq!(world.resource::<CollisionInbox>().pending(), 0);
}

// ==================== Reset ====================

#[test]
fn reset_after_death_restores_spawn() {
    let (mut world, mut schedule) = setup();
    tap(&mut world, Direction::Left);
    step(&mut world, &mut schedule);
    report_contact(&world, Vec3::ZERO);
    step(&mut world, &mut schedule);
    assert!(actor(&world).is_dead());

    world.trigger(LevelResetEvent {});
    world.flush();
    {
        let actor = actor(&world);
        assert_eq!(actor.state(), ActorState::Ready);
        assert_eq!(actor.position(), GridPosition::new(0, -1));
        assert_eq!(actor.facing(), Direction::Up);
        assert_eq!(actor.pose().position, Vec3::new(0.0, 0.2, -1.0));
        assert!(actor.is_present());
    }
    assert!(world.resource::<DeathParticles>().active().is_none());

    step(&mut world, &mut schedule);
    assert!(player_presence(&mut world));
    assert_eq!(world.resource::<RunLog>().resets, 1);
}

#[test]
fn reset_mid_hop_discards_motion() {
    let (mut world, mut schedule) = setup();
    tap(&mut world, Direction::Up);
    step(&mut world, &mut schedule);

    world.trigger(LevelResetEvent {});
    world.flush();
    step(&mut world, &mut schedule);

    let actor = actor(&world);
    assert_eq!(actor.state(), ActorState::Ready);
    assert_eq!(actor.position(), GridPosition::new(0, -1));
    assert_eq!(actor.pose().position, Vec3::new(0.0, 0.2, -1.0));
    assert_eq!(world.resource::<RunLog>().landings, 0);
}

#[test]
fn reset_drops_contact_still_queued() {
    let (mut world, mut schedule) = setup();
    spawn_hazard(&mut world, GridPosition::new(0, -2));

    // Entering the hazard queues a contact for the next tick.
    tap(&mut world, Direction::Down);
    step(&mut world, &mut schedule);
    assert_eq!(world.resource::<CollisionInbox>().pending(), 1);

    world.trigger(LevelResetEvent {});
    world.flush();
    assert_eq!(world.resource::<CollisionInbox>().pending(), 0);
    step(&mut world, &mut schedule);

    let actor = actor(&world);
    assert_eq!(actor.state(), ActorState::Ready);
    assert!(actor.is_present());
    assert_eq!(actor.position(), GridPosition::new(0, -1));
    let particles = world.resource::<DeathParticles>();
    assert_eq!(particles.played(), 0);
    assert!(particles.active().is_none());
    assert!(player_presence(&mut world));
}

#[test]
fn scripted_reset_right_after_hazard_entry() {
    let (mut world, mut schedule) = setup();
    spawn_hazard(&mut world, GridPosition::new(0, -2));
    world.insert_resource(InputScript::parse("down,reset").unwrap());

    for _ in 0..3 {
        step(&mut world, &mut schedule);
    }

    let actor = actor(&world);
    assert_eq!(actor.state(), ActorState::Ready);
    assert!(actor.is_present());
    assert_eq!(actor.position(), GridPosition::new(0, -1));
    let run = world.resource::<RunLog>();
    assert_eq!(run.deaths, 0);
    assert_eq!(run.resets, 1);
}

#[test]
fn hop_after_reset_works() {
    let (mut world, mut schedule) = setup();
    report_contact(&world, Vec3::ZERO);
    step(&mut world, &mut schedule);
    world.trigger(LevelResetEvent {});
    world.flush();

    tap(&mut world, Direction::Right);
    step(&mut world, &mut schedule);
    step(&mut world, &mut schedule);
    assert_eq!(actor(&world).state(), ActorState::Ready);
    assert_eq!(actor(&world).position(), GridPosition::new(1, -1));
}

// ==================== Script ====================

#[test]
fn script_drives_a_full_run() {
    let (mut world, mut schedule) = setup();
    world.insert_resource(InputScript::parse("up,wait:2,left,wait:2,hit,reset").unwrap());

    for _ in 0..9 {
        step(&mut world, &mut schedule);
    }

    let run = world.resource::<RunLog>().clone();
    assert_eq!(run.hops, 2);
    assert_eq!(run.landings, 2);
    assert_eq!(run.deaths, 1);
    assert_eq!(run.resets, 1);
    assert_eq!(actor(&world).state(), ActorState::Ready);
    assert_eq!(actor(&world).position(), GridPosition::new(0, -1));
    assert!(world.resource::<InputScript>().is_finished());
}

// ==================== Config ====================

#[test]
fn config_change_applies_to_next_hop() {
    let (mut world, mut schedule) = setup();
    step(&mut world, &mut schedule);

    world.resource_mut::<GameConfig>().move_duration = 0.5;
    tap(&mut world, Direction::Up);
    step(&mut world, &mut schedule);
    assert_eq!(actor(&world).params().move_duration, 0.5);
    assert_eq!(
        actor(&world).motion_task().map(|task| task.duration),
        Some(0.5)
    );

    // Four ticks for a half-second hop.
    for _ in 0..2 {
        step(&mut world, &mut schedule);
    }
    assert_eq!(actor(&world).state(), ActorState::Moving);
    step(&mut world, &mut schedule);
    assert_eq!(actor(&world).state(), ActorState::Ready);
}

#[test]
fn time_scale_slows_hops() {
    let mut config = test_config();
    config.time_scale = 0.5;
    let mut world = build_world(&config);
    let mut schedule = build_schedule();
    schedule.initialize(&mut world).expect("schedule");

    tap(&mut world, Direction::Up);
    for _ in 0..3 {
        step(&mut world, &mut schedule);
    }
    assert_eq!(actor(&world).state(), ActorState::Moving);
    step(&mut world, &mut schedule);
    assert_eq!(actor(&world).state(), ActorState::Ready);
}

#[test]
fn snapshot_serializes_state() {
    let (mut world, mut schedule) = setup();
    tap(&mut world, Direction::Up);
    step(&mut world, &mut schedule);

    let snap = snapshot(&world);
    assert_eq!(snap.frame, 1);
    assert_eq!(snap.state, ActorState::Moving);
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["state"], "Moving");
    assert_eq!(json["cell"]["x"], 0);
    assert_eq!(json["present"], true);
}
