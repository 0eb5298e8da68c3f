// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr + Ord>(name: &str, default: T, lo: T, hi: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
        .clamp(lo, hi)
}

/// Criterion configured with the pprof flamegraph profiler. Sample size and
/// timings are overridable from the environment so CI and local profiling
/// runs can use the same bench binaries.
pub fn criterion() -> Criterion {
    Criterion::default()
        .sample_size(env_or("BENCH_SAMPLE_SIZE", 60usize, 10, 200))
        .warm_up_time(Duration::from_secs(env_or("BENCH_WARMUP_SECS", 3u64, 1, 60)))
        .measurement_time(Duration::from_secs(env_or("BENCH_MEASUREMENT_SECS", 5u64, 1, 120)))
        .with_profiler(PProfProfiler::new(
            env_or("PROFILE_FREQ", 100i32, 1, 1000),
            Output::Flamegraph(None),
        ))
}
