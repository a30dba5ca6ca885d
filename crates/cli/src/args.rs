use aequor_sim::simulation::PopulationConfig;
use clap::Args;

/// Population parameters. Unset flags keep the configuration file's values.
#[derive(Args, Debug, Default, Clone)]
pub struct PopulationArgs {
    /// Number of surviving specimens to collect [default: 30]
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Bases per strand [default: 15]
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Minimum GC content (whole percent) for survival [default: 60]
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// Give up after this many candidates
    #[arg(long)]
    pub max_attempts: Option<usize>,
}

impl PopulationArgs {
    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, config: &mut PopulationConfig) {
        if let Some(count) = self.count {
            config.target_count = count;
        }
        if let Some(length) = self.length {
            config.strand_length = length;
        }
        if let Some(threshold) = self.threshold {
            config.survival_threshold = threshold;
        }
        if self.max_attempts.is_some() {
            config.max_attempts = self.max_attempts;
        }
    }
}
