use crate::error::{Error, Result};
use crate::key::{djb2_hash, Key};
use crate::{COLLISION_LIMIT, MIN_HASH_SIZE};
use std::ops::RangeInclusive;
use tracing::info;

/// The chosen table size together with its bucket population statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct HashSize {
    pub size: usize,
    pub stats: HashStats,
}

/// Diagnostics for tuning `max_hash_size` by hand. Nothing here feeds back
/// into the choice of size.
#[derive(Clone, Debug, PartialEq)]
pub struct HashStats {
    /// Buckets holding at least one key.
    pub used: usize,
    pub min_collision: usize,
    pub max_collision: usize,
    /// Sample variance of the bucket populations.
    pub variance: f64,
}

/// Lower bound of the size search for a dataset of `count` keys.
pub fn initial_hash_size(count: usize) -> usize {
    let buckets = (count as f64 / 16.0).round_ties_even() as usize;
    MIN_HASH_SIZE.max(buckets)
}

/// Picks the smallest size in `range` with the lowest worst-case bucket
/// population.
pub fn select_hash_size(
    dataset: &str,
    keys: &[Key],
    range: RangeInclusive<usize>,
) -> Result<HashSize> {
    let hashes: Vec<u32> = keys.iter().map(|key| djb2_hash(key.hash_key())).collect();

    let mut best: Option<(usize, Vec<usize>)> = None;
    let mut min_collision = usize::MAX;
    for size in range.clone() {
        if size == 0 {
            continue;
        }
        let distribution = distribution(&hashes, size);
        let max_collision = distribution.iter().copied().max().unwrap_or(0);
        if max_collision < min_collision {
            min_collision = max_collision;
            best = Some((size, distribution));
        }
    }

    let (size, distribution) = best.ok_or_else(|| Error::EmptySizeRange {
        dataset: dataset.to_owned(),
        min: *range.start(),
        max: *range.end(),
    })?;

    let stats = HashStats {
        used: distribution.iter().filter(|&&count| count != 0).count(),
        min_collision: distribution.iter().copied().min().unwrap_or(0),
        max_collision: min_collision,
        variance: variance(&distribution),
    };
    info!(
        "{} Hash table size: ({}, {}) collision: ({}, {}) variance: {}",
        dataset, size, stats.used, stats.min_collision, stats.max_collision, stats.variance,
    );

    if stats.max_collision >= COLLISION_LIMIT {
        return Err(Error::CollisionLimit {
            dataset: dataset.to_owned(),
            size,
            max_collision: stats.max_collision,
            limit: COLLISION_LIMIT,
        });
    }
    Ok(HashSize { size, stats })
}

fn distribution(hashes: &[u32], size: usize) -> Vec<usize> {
    let mut distribution = vec![0; size];
    for &hash in hashes {
        distribution[hash as usize % size] += 1;
    }
    distribution
}

fn variance(data: &[usize]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let n = data.len() as f64;
    let mean = data.iter().sum::<usize>() as f64 / n;
    let squares: f64 = data
        .iter()
        .map(|&x| {
            let delta = x as f64 - mean;
            delta * delta
        })
        .sum();
    squares / (n - 1.0)
}
