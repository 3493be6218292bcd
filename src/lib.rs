//! Benchmark harness comparing parallel primality search strategies:
//! range-partition vs. divisor-partition work division, immediate vs.
//! delayed output. The four variants live in `src/bin/`.

pub mod config;
pub mod divisor;
pub mod merge;
pub mod partition;
pub mod primality;
pub mod report;
