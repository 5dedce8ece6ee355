#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use aviary::simulation::agent::Agent;
use aviary::simulation::params::Params;

#[test]
fn test_gravity_accumulates() {
    let params = Params::default();
    let mut agent = Agent::new(0, &params);

    agent.integrate(&params);
    assert_eq!(agent.velocity, params.gravity);
    assert_eq!(agent.y, params.world_height / 2.0 + params.gravity);

    agent.integrate(&params);
    assert_eq!(agent.velocity, 2.0 * params.gravity);
}

#[test]
fn test_flap_overrides_velocity() {
    let params = Params::default();
    let mut agent = Agent::new(0, &params);

    // Flapping is a set, not an additive impulse.
    agent.velocity = 9.0;
    agent.flap(&params);
    assert_eq!(agent.velocity, params.flap_impulse);

    agent.velocity = -20.0;
    agent.flap(&params);
    assert_eq!(agent.velocity, params.flap_impulse);
}

#[test]
fn test_flap_is_noop_when_dead() {
    let params = Params::default();
    let mut agent = Agent::new(0, &params);
    agent.kill();

    agent.velocity = 3.0;
    agent.flap(&params);
    assert_eq!(agent.velocity, 3.0);
}

#[test]
fn test_tilt_angle_is_clamped() {
    let params = Params::default();
    let mut agent = Agent::new(0, &params);

    agent.velocity = 40.0;
    agent.integrate(&params);
    assert_eq!(agent.angle, 90.0);

    let mut agent = Agent::new(1, &params);
    agent.velocity = -20.0;
    agent.integrate(&params);
    assert_eq!(agent.angle, -45.0);

    let mut agent = Agent::new(2, &params);
    agent.velocity = 1.5;
    agent.integrate(&params);
    assert_eq!(agent.angle, 2.0 * 3.0);
}

#[test]
fn test_ceiling_death_clamps_and_kills() {
    let params = Params::default();
    let mut agent = Agent::new(0, &params);
    agent.y = 0.0;
    agent.velocity = -6.0;

    agent.integrate(&params);

    assert!(!agent.alive);
    assert_eq!(agent.y, 0.0);
    assert_eq!(agent.velocity, 0.0);
}

#[test]
fn test_floor_death_clamps_and_kills() {
    let params = Params::default();
    let mut agent = Agent::new(0, &params);
    agent.y = params.world_height - params.agent_height - 1.0;
    agent.velocity = 10.0;

    agent.integrate(&params);

    assert!(!agent.alive);
    assert_eq!(agent.y, params.world_height - params.agent_height);
    assert_eq!(agent.velocity, 0.0);
}

#[test]
fn test_free_fall_from_mid_height_dies_on_a_fixed_tick() {
    // Starting at y = 300 with zero velocity and gravity 0.5, the position
    // after n ticks is 300 + 0.25 * n * (n + 1); the floor at y = 575 is
    // first crossed on tick 33. Every run must agree.
    let params = Params::default();

    for _ in 0..3 {
        let mut agent = Agent::new(0, &params);
        let mut ticks = 0;
        while agent.alive {
            agent.integrate(&params);
            ticks += 1;
            assert!(ticks < 1000, "agent never reached the floor");
        }
        assert_eq!(ticks, 33);
        assert_eq!(agent.ticks_alive, 33);
        assert_eq!(agent.y, params.world_height - params.agent_height);
    }
}

#[test]
fn test_dead_agents_are_frozen() {
    let params = Params::default();
    let mut agent = Agent::new(0, &params);
    agent.velocity = 2.0;
    agent.integrate(&params);
    agent.kill();

    let y = agent.y;
    let velocity = agent.velocity;
    let angle = agent.angle;
    let ticks_alive = agent.ticks_alive;

    for _ in 0..10 {
        agent.integrate(&params);
    }

    assert_eq!(agent.y, y);
    assert_eq!(agent.velocity, velocity);
    assert_eq!(agent.angle, angle);
    assert_eq!(agent.ticks_alive, ticks_alive);
}
