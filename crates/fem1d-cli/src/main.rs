use std::path::{Path, PathBuf};
use std::process::ExitCode;

use fem1d_assembly::{GlobalSystem, ProblemDescription, reference_problem};
use fem1d_io::{JobReport, load_problem, save_system, write_dat};
use log::info;

fn usage() {
    eprintln!("usage:");
    eprintln!("  fem1d-cli assemble <problem.json> [--json <out.json>] [--dat <out.dat>] [--parallel]");
    eprintln!("  fem1d-cli validate <problem.json>");
    eprintln!("  fem1d-cli reference");
}

#[derive(Debug, Default, PartialEq)]
struct AssembleOptions {
    input: PathBuf,
    json_out: Option<PathBuf>,
    dat_out: Option<PathBuf>,
    parallel: bool,
}

fn parse_assemble_args(args: &[String]) -> Result<AssembleOptions, String> {
    let mut iter = args.iter();
    let input = iter.next().ok_or("missing problem file")?;
    let mut options = AssembleOptions {
        input: PathBuf::from(input),
        ..Default::default()
    };

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => {
                let path = iter.next().ok_or("--json requires a path")?;
                options.json_out = Some(PathBuf::from(path));
            }
            "--dat" => {
                let path = iter.next().ok_or("--dat requires a path")?;
                options.dat_out = Some(PathBuf::from(path));
            }
            "--parallel" => options.parallel = true,
            other => return Err(format!("unknown option: {other}")),
        }
    }

    Ok(options)
}

fn print_problem(problem: &ProblemDescription) {
    println!("E: {}", problem.elastic_modulus);
    println!("A: {}", problem.area);
    println!("u0: {}", problem.dirichlet_value);
    println!("f: {}", problem.source);
    println!("t: {}", problem.traction);
    println!("dofs: {}", problem.num_dofs());
    println!("elements: {}", problem.num_elements());
}

fn print_system(system: &GlobalSystem) {
    println!("Global Stiffness Matrix K:");
    for i in 0..system.num_dofs {
        let row: Vec<String> = (0..system.num_dofs)
            .map(|j| format!("{:>10.4}", system.stiffness[(i, j)]))
            .collect();
        println!("  [{}]", row.join(" "));
    }
    println!("Global Force Vector F:");
    for value in system.force.iter() {
        println!("  [{:>10.4}]", value);
    }
}

fn job_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "fem1d".to_string())
}

fn assemble_file(options: &AssembleOptions) -> Result<(), String> {
    let problem = load_problem(&options.input)
        .map_err(|err| format!("{}: {}", options.input.display(), err))?;

    let system = if options.parallel {
        GlobalSystem::assemble_parallel(&problem)
    } else {
        GlobalSystem::assemble(&problem)
    }
    .map_err(|err| format!("{}: {}", options.input.display(), err))?;

    print_system(&system);

    if let Some(path) = &options.json_out {
        save_system(path, &system).map_err(|err| format!("{}: {}", path.display(), err))?;
        info!("Wrote system snapshot to {}", path.display());
    }

    if let Some(path) = &options.dat_out {
        let report = JobReport::from_system(job_name(&options.input), &system);
        write_dat(path, &report, &system).map_err(|err| format!("{}: {}", path.display(), err))?;
        info!("Wrote DAT report to {}", path.display());
    }

    Ok(())
}

fn validate_file(path: &Path) -> Result<ProblemDescription, String> {
    let problem = load_problem(path).map_err(|err| format!("{}: {}", path.display(), err))?;
    problem
        .validate()
        .map_err(|err| format!("{}: {}", path.display(), err))?;
    Ok(problem)
}

fn run_reference() -> Result<(), String> {
    let problem = reference_problem();
    println!("Reference scenario (uniform rod, 5 DOFs)");
    print_problem(&problem);
    let system = GlobalSystem::assemble(&problem).map_err(|err| err.to_string())?;
    print_system(&system);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("assemble") if args.len() >= 3 => {
            let options = match parse_assemble_args(&args[2..]) {
                Ok(options) => options,
                Err(err) => {
                    eprintln!("{err}");
                    usage();
                    return ExitCode::from(2);
                }
            };
            match assemble_file(&options) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("assemble_error: {err}");
                    ExitCode::from(1)
                }
            }
        }
        Some("validate") if args.len() == 3 => match validate_file(Path::new(&args[2])) {
            Ok(problem) => {
                print_problem(&problem);
                println!("status: OK");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("validate_error: {err}");
                ExitCode::from(1)
            }
        },
        Some("reference") if args.len() == 2 => match run_reference() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("reference_error: {err}");
                ExitCode::from(1)
            }
        },
        _ => {
            usage();
            ExitCode::from(2)
        }
    }
}
