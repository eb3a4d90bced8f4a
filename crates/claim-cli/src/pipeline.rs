//! Run orchestration: mapping, ingest, transform, encode, write.
//!
//! Every fallible step runs before the first output file is touched, so a
//! failed run leaves no partial output behind. Profiling only reports: a
//! profiling failure is logged and the run continues.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use claim_edi::{EnvelopeOptions, SegmentEncoder, delimiter_conflicts, write_edi};
use claim_ingest::{DatasetProfile, parse_claims, profile_table, read_csv_table};
use claim_map::MappingTable;
use claim_model::{AggregationReport, ProviderTotal};
use claim_transform::{StageCounts, TransformPipeline};

use crate::logging::redact_value;

/// Explicit configuration for one conversion run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub mapping: PathBuf,
    pub output: PathBuf,
    /// Whether the first mapping row is a header.
    pub mapping_has_header: bool,
    /// Seeds name synthesis and charge adjustment; `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Run every stage but write no files.
    pub dry_run: bool,
    /// Where to write the provider aggregation as JSON.
    pub summary_json: Option<PathBuf>,
    pub envelope: EnvelopeOptions,
}

impl RunConfig {
    pub fn new(
        input: impl Into<PathBuf>,
        mapping: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input: input.into(),
            mapping: mapping.into(),
            output: output.into(),
            mapping_has_header: true,
            seed: None,
            dry_run: false,
            summary_json: None,
            envelope: EnvelopeOptions::default(),
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_mapping_header(mut self, has_header: bool) -> Self {
        self.mapping_has_header = has_header;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_summary_json(mut self, path: Option<PathBuf>) -> Self {
        self.summary_json = path;
        self
    }

    pub fn with_envelope(mut self, envelope: EnvelopeOptions) -> Self {
        self.envelope = envelope;
        self
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Written file, `None` on a dry run.
    pub output: Option<PathBuf>,
    /// Written aggregation JSON, if one was requested.
    pub summary_json: Option<PathBuf>,
    /// Input profile; `None` when profiling failed.
    pub profile: Option<DatasetProfile>,
    pub report: AggregationReport,
    pub counts: StageCounts,
    /// Number of encoded envelopes.
    pub envelopes: usize,
    /// Size of the encoded output in bytes.
    pub bytes: usize,
}

/// Run the conversion with capabilities chosen from `config.seed`.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let seed = config.seed;
    run_with(config, |mapping| match seed {
        Some(seed) => TransformPipeline::seeded(mapping, seed),
        None => TransformPipeline::new(mapping),
    })
}

/// Run the conversion with a caller-built transform pipeline.
pub fn run_with<F>(config: &RunConfig, build_pipeline: F) -> Result<RunResult>
where
    F: FnOnce(MappingTable) -> TransformPipeline,
{
    let span = info_span!("convert", input = %config.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mapping = MappingTable::load(&config.mapping, config.mapping_has_header)
        .with_context(|| format!("load mapping {}", config.mapping.display()))?;
    debug!(entries = mapping.len(), "mapping loaded");

    let table = read_csv_table(&config.input)
        .with_context(|| format!("read input {}", config.input.display()))?;
    let profile = match profile_table(&table) {
        Ok(profile) => Some(profile),
        Err(error) => {
            warn!(%error, "input profiling failed, continuing without profile");
            None
        }
    };
    let dataset = parse_claims(&table)
        .with_context(|| format!("parse claims from {}", config.input.display()))?;

    let mut pipeline = build_pipeline(mapping);
    let output = pipeline.run(dataset);

    for record in &output.records {
        for field in delimiter_conflicts(record) {
            warn!(
                member_id = redact_value(&record.member_id),
                field, "value contains an envelope delimiter"
            );
        }
    }

    let encoder = SegmentEncoder::with_options(config.envelope.clone());
    let content = encoder.encode_all(&output.records);

    let report_json = match &config.summary_json {
        Some(path) => Some((path, render_report_json(&output.report, &output.counts)?)),
        None => None,
    };

    let (written, summary_json) = if config.dry_run {
        info!("dry run, no files written");
        (None, None)
    } else {
        if let Some((path, _)) = &report_json {
            create_parent_dir(path)?;
        }
        create_parent_dir(&config.output)?;
        if let Some((path, json)) = &report_json {
            fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        if let Err(error) = write_edi(&config.output, &content) {
            if let Some((path, _)) = &report_json {
                let _ = fs::remove_file(path);
            }
            return Err(error)
                .with_context(|| format!("write output {}", config.output.display()));
        }
        (
            Some(config.output.clone()),
            report_json.map(|(path, _)| path.clone()),
        )
    };

    info!(
        envelopes = output.records.len(),
        bytes = content.len(),
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );
    Ok(RunResult {
        output: written,
        summary_json,
        profile,
        report: output.report,
        counts: output.counts,
        envelopes: output.records.len(),
        bytes: content.len(),
    })
}

/// Profile an input file without transforming it.
pub fn profile_input(path: &Path) -> Result<DatasetProfile> {
    let table =
        read_csv_table(path).with_context(|| format!("read input {}", path.display()))?;
    profile_table(&table).context("profile input")
}

#[derive(Serialize)]
struct ReportJson<'a> {
    providers: &'a BTreeMap<String, ProviderTotal>,
    grand_total: Decimal,
    records_in: usize,
    records_out: usize,
}

/// Pretty-printed JSON for a provider aggregation and its stage counts.
pub fn render_report_json(report: &AggregationReport, counts: &StageCounts) -> Result<String> {
    let payload = ReportJson {
        providers: &report.providers,
        grand_total: report.grand_total(),
        records_in: counts.input,
        records_out: counts.output,
    };
    serde_json::to_string_pretty(&payload).context("serialize report")
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    Ok(())
}
