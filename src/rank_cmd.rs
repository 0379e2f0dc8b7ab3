//! Rank command: score configured ridges and sort them by feature priority.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use serde::Serialize;
use tracing::{info, info_span};

use ridgewave_rank::{Rank, RankSorter};
use ridgewave_ridge::{AnchoredPathIntegral, DirectionalStability, Ridge, RidgeCost, score_ridge};

use crate::cli::RankArgs;
use crate::config;
use crate::convert;
use crate::output;

/// Feature name under which a ridge's strongest response is stored.
pub const CWT_RESPONSE: &str = "cwt_response";

/// One ranked ridge in the JSON report.
///
/// Sorting is ascending on every key: rank 1 holds the smallest value of
/// the first priority feature. That suits `directional_stability`; for
/// `anchored_path_integral` and `cwt_response`, where larger is better, the
/// strongest ridge comes last.
#[derive(Debug, Serialize)]
pub struct RankedRidge {
    /// Position in the sorted output, starting at 1 (smallest key first).
    pub rank: usize,
    /// Index of the ridge in the configuration.
    pub index: usize,
    pub label: Option<String>,
    pub start_position: Option<f64>,
    pub n_points: usize,
    pub scores: BTreeMap<String, f64>,
}

struct Candidate {
    index: usize,
    label: Option<String>,
    ridge: Ridge,
}

/// Run the ranking pipeline.
pub fn run(args: RankArgs) -> Result<()> {
    let _cmd = info_span!("rank").entered();
    let config = config::load(&args.config)?;

    if config.rank.ridges.is_empty() {
        bail!("no ridges to rank: add [[rank.ridges]] entries to the config");
    }
    let ridges = convert::build_ridges(&config.rank)?;
    let labels = config.rank.ridges.iter().map(|r| r.label.clone());

    let mut ranks: Vec<Rank<Candidate>> = ridges
        .into_iter()
        .zip(labels)
        .enumerate()
        .map(|(index, (ridge, label))| score_candidate(index, label, ridge))
        .collect();
    info!(n_ridges = ranks.len(), "ridges scored");

    sort_candidates(&config.rank.priority, &mut ranks)?;

    let report: Vec<RankedRidge> = ranks
        .into_iter()
        .enumerate()
        .map(|(i, rank)| to_report(i + 1, rank))
        .collect();

    let path = args.output.or(config.output);
    output::write_json(&report, path.as_deref())
}

fn score_candidate(index: usize, label: Option<String>, ridge: Ridge) -> Rank<Candidate> {
    let costs: [&dyn RidgeCost; 2] = [&DirectionalStability, &AnchoredPathIntegral];
    let peak = ridge.peak_response();
    let mut rank = score_ridge(ridge, &costs).map(|ridge| Candidate {
        index,
        label,
        ridge,
    });
    if let Some(peak) = peak {
        rank.add_rank(CWT_RESPONSE, peak);
    }
    rank
}

/// Sorts ascending by `priority` when given, otherwise by every shared
/// feature.
///
/// # Errors
///
/// Fails when a priority name is not a feature of any candidate.
fn sort_candidates<T>(priority: &[String], ranks: &mut [Rank<T>]) -> Result<()> {
    let sorter = RankSorter::new(ranks);
    if priority.is_empty() {
        info!(
            keys = ?sorter.common_features(),
            "no priority configured; sorting by shared features"
        );
        sorter.sort_by_common_features(ranks);
        return Ok(());
    }
    for name in priority {
        if !sorter.all_features().contains(name) {
            bail!(
                "unknown priority feature {name:?} (available: {:?})",
                sorter.all_features()
            );
        }
    }
    RankSorter::sort_to_order(priority, ranks);
    Ok(())
}

fn to_report(position: usize, rank: Rank<Candidate>) -> RankedRidge {
    let scores = rank
        .entries()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    let Candidate {
        index,
        label,
        ridge,
    } = rank.into_item();
    RankedRidge {
        rank: position,
        index,
        label,
        start_position: ridge.start().map(|p| p.position),
        n_points: ridge.len(),
        scores,
    }
}
