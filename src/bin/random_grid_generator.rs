use std::env;
use std::fs;
use wordbrain_solver::utilities::test_utilities::random_grid;

/// where the grid is written unless a path is given
const DEFAULT_OUTPUT_PATH: &str = "random_grid.txt";

fn main() {
    let args: Vec<String> = env::args().collect();

    let (side, blocked_ratio, output_path) = match args.len() {
        2 => (args[1].as_str(), "0", DEFAULT_OUTPUT_PATH),
        3 => (args[1].as_str(), args[2].as_str(), DEFAULT_OUTPUT_PATH),
        4 => (args[1].as_str(), args[2].as_str(), args[3].as_str()),
        n => panic!(
            "usage is side_length [blocked_ratio] [output_path] but you provided {} arguments",
            n - 1
        ),
    };

    let side: usize = match side.parse() {
        Ok(side) if side > 0 => side,
        _ => panic!("side length must be a positive integer, not {}", side),
    };
    let blocked_ratio: f64 = match blocked_ratio.parse() {
        Ok(ratio) if (0.0..=1.0).contains(&ratio) => ratio,
        _ => panic!("blocked ratio must be between 0 and 1, not {}", blocked_ratio),
    };

    let grid = random_grid(side, side, blocked_ratio, &mut rand::rng());

    if let Err(e) = fs::write(output_path, format!("{}\n", grid)) {
        panic!("could not write grid to {} due to {}", output_path, e);
    }
    println!("wrote a {}x{} grid to {}:\n{}", side, side, output_path, grid);
}
