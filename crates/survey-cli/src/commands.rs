use anyhow::Result;
use survey_cli::pipeline::{
    ValidationRun, export_spots, load_directory, render_json, validate, write_json,
};
use survey_output::SpotsRequest;
use tracing::{info, info_span, warn};

use crate::cli::{ExportArgs, OutputFormatArg, ValidateArgs};
use crate::summary::print_summary;

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationRun> {
    let directory = load_directory(args.lots.as_deref(), args.farm_id)?;
    let run = validate(&args.input, directory.as_ref());

    if let Some(path) = &args.output {
        write_json(&run.result, path)?;
    }
    match args.format {
        OutputFormatArg::Json if args.output.is_none() => println!("{}", render_json(&run.result)?),
        OutputFormatArg::Json => {}
        OutputFormatArg::Table => print_summary(&run),
    }
    if run.is_rejected() {
        warn!(input = %run.input.display(), "survey rejected");
    }
    Ok(run)
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let span = info_span!("export", farm_id = args.farm_id);
    let _guard = span.enter();

    let directory = load_directory(args.lots.as_deref(), Some(args.farm_id))?;
    let run = validate(&args.input, directory.as_ref());
    if run.is_rejected() {
        print_summary(&run);
    }

    let mut request = SpotsRequest::new(args.farm_id);
    if let Some(lot_id) = args.lot_id {
        request = request.with_lot_id(lot_id);
    }
    if let Some(directory) = directory.as_ref() {
        request = request.with_directory(directory);
    }
    let spots = export_spots(&run, &request, &args.output)?;
    info!(spots, output = %args.output.display(), "export complete");
    println!("Spots: {spots}");
    println!("Output: {}", args.output.display());
    Ok(())
}
