use jsonreg_schema::{RegistryConfig, SchemaRegistry};

use crate::cmd::CheckArgs;
use crate::exit::{schema_error, CliResult, SUCCESS};
use crate::output::{print_check, CheckReport, OutputFormat};

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let config = RegistryConfig {
        strict_mode: args.strict,
        ..RegistryConfig::default()
    };

    // Loading compiles every schema; the first bad file aborts the check.
    let registry = SchemaRegistry::from_directory_with_config(&args.dir, config)
        .map_err(|err| schema_error("schema check failed", err))?;

    let directory = args.dir.display().to_string();
    let report = CheckReport {
        schema_id: "https://schemas.jsonreg.dev/cli/v1/check-report.schema.json",
        directory: &directory,
        strict: args.strict,
        schemas: registry.names(),
    };
    print_check(&report, format);

    Ok(SUCCESS)
}
