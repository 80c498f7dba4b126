//! Scripted scrimmage driver
//!
//! Runs the agent against a handful of canned situations with a ballistic
//! ball model and prints the tactical states it moves through. Development
//! harness only; a real host supplies live telemetry and its own predictor.

use vs_core::engine::classifier::classify;
use vs_core::engine::math::Vec3;
use vs_core::engine::prediction::ballistic_track;
use vs_core::engine::snapshot::{BallState, OpponentState, VehicleState};
use vs_core::{Agent, BoostPadRegistry, Team, WorldSnapshot};

struct Scenario {
    name: &'static str,
    car: VehicleState,
    ball: BallState,
    opponents: Vec<OpponentState>,
    kickoff: bool,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "kickoff",
            car: VehicleState {
                position: Vec3::new(0.0, -2048.0, 17.0),
                boost: 33.0,
                ..Default::default()
            },
            ball: BallState::default(),
            opponents: vec![],
            kickoff: true,
        },
        Scenario {
            name: "ball rolling at our net",
            car: VehicleState {
                position: Vec3::new(0.0, -3000.0, 17.0),
                boost: 60.0,
                ..Default::default()
            },
            ball: BallState {
                position: Vec3::new(0.0, -2000.0, 93.0),
                velocity: Vec3::new(0.0, -900.0, 0.0),
            },
            opponents: vec![],
            kickoff: false,
        },
        Scenario {
            name: "hanging ball midfield",
            car: VehicleState {
                position: Vec3::new(0.0, -800.0, 17.0),
                boost: 80.0,
                ..Default::default()
            },
            ball: BallState {
                position: Vec3::new(0.0, 200.0, 700.0),
                velocity: Vec3::new(0.0, 0.0, 150.0),
            },
            opponents: vec![OpponentState {
                position: Vec3::new(0.0, 1500.0, 17.0),
                velocity: Vec3::zeros(),
            }],
            kickoff: false,
        },
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pads = BoostPadRegistry::standard_field();
    let dt = 1.0 / 120.0;

    for scenario in scenarios() {
        println!("\n=== {} ===", scenario.name);
        let mut agent = Agent::new(Team::Blue);
        let mut ball = scenario.ball.clone();
        let mut states_seen: Vec<String> = Vec::new();

        for i in 0..360 {
            let t = i as f32 * dt;
            let snap = WorldSnapshot::new(
                Team::Blue,
                t,
                scenario.car.clone(),
                ball.clone(),
                scenario.opponents.clone(),
                scenario.kickoff && t < 0.5,
            );
            let track = ballistic_track(&ball, t, 3.0, 1.0 / 60.0);
            let controls = agent.on_tick(&snap, &track, &pads);

            let label = if agent.state.active_sequence.is_some() {
                "maneuver".to_string()
            } else {
                format!("{:?}", classify(&snap, None))
            };
            if states_seen.last() != Some(&label) {
                println!("t={:5.2}s  {label}", t);
                states_seen.push(label);
            }
            if i == 0 {
                println!("  first command: {}", serde_json::to_string(&controls)?);
            }

            // crude ball advance so the scenario evolves
            ball.velocity.z -= 650.0 * dt;
            ball.position += ball.velocity * dt;
            if ball.position.z < 93.0 {
                ball.position.z = 93.0;
                ball.velocity.z = -ball.velocity.z * 0.6;
            }
        }
        println!("  states: {}", states_seen.join(" -> "));
    }

    println!("\n✅ scrimmage complete");
    Ok(())
}
