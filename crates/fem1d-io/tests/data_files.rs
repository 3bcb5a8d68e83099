/// Assemble the problem files shipped under `data/`
use std::path::PathBuf;

use fem1d_assembly::{GlobalSystem, reference_problem};
use fem1d_io::{JobReport, format_dat, load_problem};

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name)
}

#[test]
fn reference_rod_file_matches_builtin_problem() {
    let problem = load_problem(data_file("reference_rod.json")).expect("load reference_rod.json");
    assert_eq!(problem, reference_problem());

    let system = GlobalSystem::assemble(&problem).unwrap();
    assert!((system.force[0] - 275.15).abs() < 1e-10);
    assert!((system.force[4] - 101.0).abs() < 1e-10);
}

#[test]
fn steel_rod_file_assembles() {
    let problem = load_problem(data_file("steel_rod.json")).expect("load steel_rod.json");
    assert_eq!(problem.num_dofs(), 10);

    let system = GlobalSystem::assemble(&problem).unwrap();
    assert!(system.validate().is_ok());

    // E*A/h = 45 * 0.01 / 0.01 = 45 per element
    assert!((system.stiffness[(5, 5)] - 90.0).abs() < 1e-9);
    assert!((system.stiffness[(5, 6)] + 45.0).abs() < 1e-9);
    // Neumann: t*A = -1000 * 0.01
    let interior_load = -25.0 * 0.01 * 0.01;
    assert!((system.force[9] - (interior_load - 10.0)).abs() < 1e-9);

    let report = JobReport::from_system("steel_rod", &system);
    let text = format_dat(&report, &system);
    assert!(text.contains("DOFS: 10"));
    assert!(text.contains("BANDWIDTH: 1"));
}
