//! One module per subcommand. Each exposes a parameter struct resolved
//! from the command line plus configuration, and a `run_*` function that
//! drives the algorithm through a [`Terminal`](crate::terminal::Terminal).
pub mod generate;
pub mod horner;
pub mod inversions;
pub mod matrix;
pub mod search;
pub mod sort;
pub mod subarray;
pub mod two_sum;
