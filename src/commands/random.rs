//! Random mode: sort generated numbers and print every stage.

use anyhow::{Context, Result};
use log::info;

use chunksort_lib::generate::{RANDOM_VALUE_BOUND, create_rng, generate_random_numbers};
use chunksort_lib::logging::OperationTimer;

use crate::commands::command::Command;
use crate::commands::common::{ThreadingOptions, sort_and_print};

/// Generate `count` integers in `[0, 1000)` and sort them.
#[derive(Debug, Clone)]
pub struct RandomNumbers {
    pub count: usize,
    pub seed: Option<u64>,
    pub threading: ThreadingOptions,
}

impl Command for RandomNumbers {
    fn execute(&self) -> Result<()> {
        info!("Mode: random ({} values in [0, {RANDOM_VALUE_BOUND}))", self.count);
        if let Some(seed) = self.seed {
            info!("Seed: {seed}");
        }

        let mut rng = create_rng(self.seed);
        let values = generate_random_numbers(self.count, &mut rng)
            .context("Cannot generate random numbers")?;

        let sorter = self.threading.build_sorter()?;
        let timer = OperationTimer::new("Sorting random numbers");
        let stats = sort_and_print(&sorter, values)?;
        timer.log_completion(stats.total_values);
        Ok(())
    }
}
