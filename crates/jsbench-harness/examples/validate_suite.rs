use jsbench_harness::config::Config;
use std::env;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            println!("Validating suite file: {}", path.display());
            Config::from_file(&path)?
        }
        None => {
            println!("Validating built-in suite");
            Config::builtin()?
        }
    };

    println!("\n✓ Successfully parsed suite!");
    println!("\nSuite: {}", config.suite.name);
    println!("Runs: {}", config.suite.runs);
    println!("Kept runs: {}", config.suite.keep_runs);
    println!("Workload root: {}", config.suite.workload_root.display());

    let groups = config.groups()?;
    println!("\nGroups ({}):", groups.len());

    let mut missing = 0;
    for (i, (workload, variant)) in groups.iter().enumerate() {
        let script = workload.script_path(&config.suite.workload_root, variant, &config.suite.extension);
        let marker = if script.exists() {
            ""
        } else {
            missing += 1;
            "  (missing)"
        };
        println!("  {}. {} {}{}", i + 1, workload, variant, marker);
    }

    if missing > 0 {
        println!("\n{} workload scripts not found under the workload root", missing);
    } else {
        println!("\n✓ All validations passed!");
    }

    Ok(())
}
