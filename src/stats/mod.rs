pub mod distribution;
pub mod numeric;
pub mod percentile;

pub use distribution::{DEFAULT_BINS, Distribution, Quantiles, build_distribution};
pub use numeric::{as_num, mean, normalize_percent, round_half_up};
pub use percentile::percentile_rank;
