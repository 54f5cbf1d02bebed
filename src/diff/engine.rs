//! Schema-aware drift diff engine.

use super::engine_matching::match_resources;
use super::engine_policy::{diff_policy, is_policy_operation};
use super::{diff_values, ComparisonResult, FieldDiff, ResourceDiff, StateDiff};
use crate::config::{DriftConfig, IdentitySource, MissingSchemaPolicy};
use crate::error::{ErrorContext, Result};
use crate::matching::IgnoreMatcher;
use crate::model::{Resource, Snapshot};
use crate::normalize::{IdentityMap, SetNormalizer};
use crate::schema::SchemaIndex;

/// One snapshot side after identity and set normalization.
struct PreparedSide {
    resources: Vec<Resource>,
    identity: IdentityMap,
    skipped: Vec<String>,
}

/// Compares resource lists and reports configuration drift.
///
/// The engine is immutable once built and can run any number of
/// comparisons.
#[derive(Debug, Clone)]
pub struct DiffEngine {
    schemas: SchemaIndex,
    ignore: IgnoreMatcher,
    normalizer: SetNormalizer,
    identity_sources: Vec<IdentitySource>,
    missing_schema: MissingSchemaPolicy,
}

impl DiffEngine {
    /// Build an engine from a schema index and operator configuration.
    ///
    /// Fails if the configuration does not validate (for example an invalid
    /// ignore regex).
    pub fn new(schemas: SchemaIndex, config: &DriftConfig) -> Result<Self> {
        Ok(Self {
            schemas,
            ignore: IgnoreMatcher::new(config)?,
            normalizer: SetNormalizer::from_ignore_diff(&config.ignore_diff),
            identity_sources: config.identity_sources.clone(),
            missing_schema: config.missing_schema,
        })
    }

    /// Compare two snapshots.
    ///
    /// The current resources of both sides are always compared. When either
    /// side is a plan, the planned resources are compared as well; a state
    /// document stands in for its own planned values.
    pub fn compare(&self, left: &Snapshot, right: &Snapshot) -> Result<ComparisonResult> {
        let state_diff = self
            .compare_resources(left.current(), right.current())
            .context("comparing state")?;

        let plan_diff = if left.is_plan() || right.is_plan() {
            Some(
                self.compare_resources(left.planned(), right.planned())
                    .context("comparing plan")?,
            )
        } else {
            None
        };

        Ok(ComparisonResult {
            state_diff,
            plan_diff,
        })
    }

    /// Compare two resource lists.
    pub fn compare_resources(&self, left: &[Resource], right: &[Resource]) -> Result<StateDiff> {
        let left = self.prepare(left)?;
        let right = self.prepare(right)?;
        let matches = match_resources(&left.resources, &right.resources);

        let mut result = StateDiff {
            common: matches.pairs.len(),
            left_only: matches.left_only.iter().map(|r| r.address.clone()).collect(),
            right_only: matches.right_only.iter().map(|r| r.address.clone()).collect(),
            skipped: left.skipped,
            ..StateDiff::default()
        };
        for address in right.skipped {
            if !result.skipped.contains(&address) {
                result.skipped.push(address);
            }
        }

        for (l, r) in matches.pairs {
            tracing::debug!("compare {}", l.address);
            let diff = self.diff_pair(l, r, &left.identity, &right.identity)?;
            if !diff.is_empty() {
                result.resource_diffs.push(diff);
            }
        }

        Ok(result)
    }

    fn prepare(&self, resources: &[Resource]) -> Result<PreparedSide> {
        let identity = IdentityMap::build_with_sources(resources, &self.identity_sources);
        let mut prepared = Vec::with_capacity(resources.len());
        let mut skipped = Vec::new();

        for resource in resources {
            let schema = match self.schemas.lookup(resource) {
                Ok(schema) => schema,
                Err(e) if self.missing_schema == MissingSchemaPolicy::Skip => {
                    tracing::warn!("skipping {}: {}", resource.address, e);
                    skipped.push(resource.address.clone());
                    continue;
                }
                Err(e) => return Err(e),
            };

            let resolved = identity.normalize_resource(resource);
            let normalized = self
                .normalizer
                .normalize(schema, &resolved)
                .with_context(|| format!("normalizing {}", resource.address))?;
            prepared.push(normalized);
        }

        Ok(PreparedSide {
            resources: prepared,
            identity,
            skipped,
        })
    }

    /// Diff one matched pair, classifying paths with the left resource's
    /// schema.
    fn diff_pair(
        &self,
        left: &Resource,
        right: &Resource,
        left_ids: &IdentityMap,
        right_ids: &IdentityMap,
    ) -> Result<ResourceDiff> {
        let schema = self.schemas.lookup(left)?;
        let address = left.address.as_str();
        let mut diff = ResourceDiff::new(address);

        for op in diff_values(&left.values, &right.values) {
            if self.ignore.is_ignorable(address, "", &op) {
                continue;
            }
            let class = schema
                .classify(&op.path)
                .with_context(|| format!("classifying {address}"))?;
            if !class.is_argument() {
                continue;
            }

            if is_policy_operation(&op) {
                let nested = diff_policy(&self.ignore, address, &op, left_ids, right_ids)?;
                if !nested.is_empty() {
                    diff.policies.push(nested);
                }
            } else {
                diff.fields.push(FieldDiff::from_operation("", &op));
            }
        }

        Ok(diff)
    }
}
