use std::time::Instant;

use super::{Directive, Filter, SortPass};
use crate::errors::{RadarError, Result};
use crate::model::{Position, ScanEntry};
use crate::protocol::Protocol;
use crate::{log_op_end, log_op_error, log_op_start};

/// Selection pipeline compiled from a protocol list
///
/// Holds only the filter chain and sort passes; every call to
/// [`RadarSystem::find_next_target`] works on its own copy of the
/// candidates, so one instance can serve concurrent callers.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSystem {
    filters: Vec<Filter>,
    sort_passes: Vec<SortPass>,
}

impl RadarSystem {
    /// Build the pipeline; protocol order and duplicates are preserved.
    pub fn new(protocols: &[Protocol]) -> Self {
        let mut filters = vec![Filter::engagement_range()];
        let mut sort_passes = Vec::new();

        for protocol in protocols {
            match protocol.directive() {
                Directive::Filter(filter) => filters.push(filter),
                Directive::Sort(pass) => sort_passes.push(pass),
            }
        }

        Self {
            filters,
            sort_passes,
        }
    }

    /// Build from raw tokens, ignoring any the engine does not recognize
    ///
    /// The HTTP boundary rejects unknown tokens before this point; this
    /// constructor exists for callers that want the tolerant behaviour.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let protocols: Vec<Protocol> = tokens
            .iter()
            .filter_map(|token| match token.as_ref().parse::<Protocol>() {
                Ok(protocol) => Some(protocol),
                Err(err) => {
                    tracing::debug!(%err, "ignoring unrecognized protocol token");
                    None
                }
            })
            .collect();
        Self::new(&protocols)
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn sort_passes(&self) -> &[SortPass] {
        &self.sort_passes
    }

    /// Entries passing every filter, in input order
    pub fn apply_filters(&self, targets: &[ScanEntry]) -> Vec<ScanEntry> {
        targets
            .iter()
            .filter(|target| self.filters.iter().all(|f| f.admits(target)))
            .cloned()
            .collect()
    }

    /// Run each sort pass in declaration order
    pub fn sort_targets(&self, mut targets: Vec<ScanEntry>) -> Vec<ScanEntry> {
        for pass in &self.sort_passes {
            pass.apply(&mut targets);
        }
        targets
    }

    /// Pick the position to attack
    ///
    /// # Errors
    ///
    /// `RadarError::NoValidTargets` if the filter chain leaves nothing,
    /// including when `targets` is empty.
    pub fn find_next_target(&self, targets: &[ScanEntry]) -> Result<Position> {
        const OP: &str = "find_next_target";
        let started = Instant::now();
        let protocol_count = self.filters.len() - 1 + self.sort_passes.len();
        log_op_start!(OP, protocol_count, candidate_count = targets.len());

        let survivors = self.apply_filters(targets);
        let ranked = self.sort_targets(survivors);

        match ranked.first() {
            Some(best) => {
                let position = best.coordinates();
                log_op_end!(
                    OP,
                    duration_ms = started.elapsed().as_millis() as u64,
                    survivor_count = ranked.len(),
                    x = position.x,
                    y = position.y
                );
                Ok(position)
            }
            None => {
                let err = RadarError::NoValidTargets {
                    candidates: targets.len(),
                };
                log_op_error!(
                    OP,
                    err.clone(),
                    duration_ms = started.elapsed().as_millis() as u64,
                    survivor_count = 0u64
                );
                Err(err)
            }
        }
    }
}

impl Default for RadarSystem {
    fn default() -> Self {
        Self::new(&[])
    }
}
