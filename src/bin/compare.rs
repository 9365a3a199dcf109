//! Compare the three swarm optimizers across the full benchmark grid.
//!
//! Prints progress to stderr and the aggregated statistics as CSV on
//! stdout, one row per grid cell.

use enjambre::harness::{Experiment, CSV_HEADER};

fn main() {
    let experiment = Experiment::default();
    eprintln!(
        "running {} cells x {} repetitions on {} threads",
        experiment.cell_count(),
        experiment.repetitions,
        rayon::current_num_threads()
    );

    let results = experiment.run();

    println!("{CSV_HEADER}");
    let mut failures = 0usize;
    for result in results {
        match result {
            Ok(cell) => println!("{}", cell.csv_row()),
            Err(e) => {
                failures += 1;
                eprintln!("cell failed: {e}");
            }
        }
    }
    if failures > 0 {
        eprintln!("{failures} cells failed");
        std::process::exit(1);
    }
}
