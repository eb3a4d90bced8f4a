use anyhow::Result;
use tracing::info;

use claim_cli::pipeline::{RunConfig, RunResult, profile_input, run};
use claim_ingest::DatasetProfile;

use crate::cli::{ConvertArgs, ProfileArgs};

pub fn run_convert(args: &ConvertArgs) -> Result<RunResult> {
    let config = RunConfig::new(&args.input, &args.mapping, args.output_path())
        .with_mapping_header(!args.no_mapping_header)
        .with_seed(args.seed)
        .with_dry_run(args.dry_run)
        .with_summary_json(args.summary_json.clone());
    if let Some(seed) = config.seed {
        info!(seed, "using seeded capabilities");
    }
    run(&config)
}

pub fn run_profile(args: &ProfileArgs) -> Result<DatasetProfile> {
    profile_input(&args.input)
}
