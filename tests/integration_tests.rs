// Integration tests for drivetrain
//
// These tests verify the end-to-end demonstration contract:
// - Car output names the current engine before the engine's own report line
// - Engine replacement takes effect immediately and completely
// - Engines survive being swapped out and can be re-injected

use drivetrain::engine::Engine;
use drivetrain::{Car, DemoConfig, Electric, EngineKind, Hybrid, Petrol};

fn lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8(buf.to_vec())
        .expect("output should be valid UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_full_demo_scenario() {
    // The canonical sequence: petrol car, start, stop, swap to electric,
    // start again. Output must match line for line.
    let mut out = Vec::new();
    let mut car = Car::new(Box::new(Petrol));

    car.start(&mut out).expect("start should succeed");
    car.stop(&mut out).expect("stop should succeed");
    car.set_engine(Box::new(Electric), &mut out)
        .expect("swap should succeed");
    car.start(&mut out).expect("start should succeed");

    assert_eq!(
        lines(&out),
        vec![
            "Car is starting with Petrol Engine",
            "Petrol engine is starting...",
            "Car is stopping with Petrol Engine",
            "Petrol engine is stopping...",
            "Engine replaced with: Electric Engine",
            "Car is starting with Electric Engine",
            "Electric engine is starting...",
        ]
    );
}

#[test]
fn test_start_output_for_every_kind() {
    for kind in [EngineKind::Petrol, EngineKind::Electric, EngineKind::Hybrid] {
        let mut out = Vec::new();
        let mut car = Car::new(kind.build());
        let label = car.engine_label();

        car.start(&mut out).expect("start should succeed");

        let output = lines(&out);
        assert_eq!(output.len(), 2, "expected car line + engine line");
        assert_eq!(output[0], format!("Car is starting with {label}"));
        assert!(
            output[1].contains("is starting"),
            "engine report should follow the car line: {}",
            output[1]
        );
    }
}

#[test]
fn test_stop_output_for_every_kind() {
    for kind in [EngineKind::Petrol, EngineKind::Electric, EngineKind::Hybrid] {
        let mut out = Vec::new();
        let mut car = Car::new(kind.build());
        let label = car.engine_label();

        car.stop(&mut out).expect("stop should succeed");

        let output = lines(&out);
        assert_eq!(output.len(), 2, "expected car line + engine line");
        assert_eq!(output[0], format!("Car is stopping with {label}"));
        assert!(
            output[1].contains("is stopping"),
            "engine report should follow the car line: {}",
            output[1]
        );
    }
}

#[test]
fn test_replacement_is_complete() {
    // After the swap, no output may come from the old variant.
    let mut out = Vec::new();
    let mut car = Car::new(Box::new(Hybrid));

    car.set_engine(Box::new(Petrol), &mut out)
        .expect("swap should succeed");

    out.clear();
    car.start(&mut out).expect("start should succeed");
    car.stop(&mut out).expect("stop should succeed");

    for line in lines(&out) {
        assert!(!line.contains("Hybrid"), "old engine leaked: {line}");
    }
}

#[test]
fn test_swapped_out_engine_outlives_the_car() {
    let mut out = Vec::new();
    let mut car = Car::new(Box::new(Petrol));
    let petrol = car
        .set_engine(Box::new(Electric), &mut out)
        .expect("swap should succeed");
    drop(car);

    // The returned engine still works on its own.
    let mut engine: Box<dyn Engine> = petrol;
    assert_eq!(engine.label(), "Petrol Engine");
    assert_eq!(engine.start(), "Petrol engine is starting...");
}

#[test]
fn test_chained_replacements_track_latest_engine() {
    let mut out = Vec::new();
    let mut car = Car::new(Box::new(Petrol));

    car.set_engine(Box::new(Electric), &mut out)
        .expect("swap should succeed");
    car.set_engine(Box::new(Hybrid), &mut out)
        .expect("swap should succeed");

    assert_eq!(car.engine_label(), "Hybrid Engine");
    assert_eq!(
        lines(&out),
        vec![
            "Engine replaced with: Electric Engine",
            "Engine replaced with: Hybrid Engine",
        ]
    );
}

#[test]
fn test_config_selections_drive_the_demo() {
    // The config file's engine kinds build the same variants the demo runs.
    let config = DemoConfig {
        first_engine: EngineKind::Hybrid,
        second_engine: EngineKind::Petrol,
    };
    config.validate().expect("config should be valid");

    let mut out = Vec::new();
    let mut car = Car::new(config.first_engine.build());
    car.start(&mut out).expect("start should succeed");
    car.set_engine(config.second_engine.build(), &mut out)
        .expect("swap should succeed");

    assert_eq!(
        lines(&out),
        vec![
            "Car is starting with Hybrid Engine",
            "Hybrid engine is starting...",
            "Engine replaced with: Petrol Engine",
        ]
    );
}

#[test]
fn test_config_file_round_trip_drives_same_demo() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("demo.json");

    let config = DemoConfig {
        first_engine: EngineKind::Electric,
        second_engine: EngineKind::Hybrid,
    };
    config.save_to_file(&path).expect("should save");

    let loaded = DemoConfig::load_from_file(&path).expect("should load");
    assert_eq!(loaded.first_engine.build().label(), "Electric Engine");
    assert_eq!(loaded.second_engine.build().label(), "Hybrid Engine");
}

#[test]
fn test_custom_variant_plugs_in_without_touching_car() {
    // Open extension: a variant defined outside the crate's engine module
    // works through the same seam.
    struct Steam;

    impl Engine for Steam {
        fn start(&mut self) -> String {
            "Steam engine is building pressure...".to_string()
        }

        fn stop(&mut self) -> String {
            "Steam engine is venting...".to_string()
        }

        fn label(&self) -> &'static str {
            "Steam Engine"
        }
    }

    let mut out = Vec::new();
    let mut car = Car::new(Box::new(Petrol));
    car.set_engine(Box::new(Steam), &mut out)
        .expect("swap should succeed");
    car.start(&mut out).expect("start should succeed");

    assert_eq!(
        lines(&out),
        vec![
            "Engine replaced with: Steam Engine",
            "Car is starting with Steam Engine",
            "Steam engine is building pressure...",
        ]
    );
}
