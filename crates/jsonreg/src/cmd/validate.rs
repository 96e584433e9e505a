use jsonreg_schema::{SchemaError, SchemaRegistry};

use crate::cmd::ValidateArgs;
use crate::exit::{io_error, schema_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_validate, DocumentOutcome, OutputFormat, ValidateReport};

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = SchemaRegistry::from_directory_with_config(&args.schemas, args.registry_config())
        .map_err(|err| schema_error("failed to load schemas", err))?;

    if !registry.exists(&args.schema) {
        return Err(schema_error(
            "validate",
            SchemaError::UnknownSchema(args.schema.clone()),
        ));
    }

    let documents = args
        .files
        .iter()
        .map(|path| std::fs::read(path).map_err(|err| io_error(path, err)))
        .collect::<CliResult<Vec<Vec<u8>>>>()?;

    tracing::debug!(
        schema = %args.schema,
        count = documents.len(),
        "validating documents"
    );

    let mut outcomes: Vec<DocumentOutcome> = args
        .files
        .iter()
        .enumerate()
        .map(|(index, path)| DocumentOutcome {
            index,
            file: path.display().to_string(),
            valid: true,
            error: None,
        })
        .collect();

    let result = registry.validate_many(&args.schema, &documents);
    if let Err(aggregate) = &result {
        for failure in &aggregate.failures {
            tracing::info!(index = failure.index, error = %failure.error, "document rejected");
            if let Some(outcome) = outcomes.get_mut(failure.index) {
                outcome.valid = false;
                outcome.error = Some(failure.error.to_string());
            }
        }
    }

    let report = ValidateReport {
        schema_id: "https://schemas.jsonreg.dev/cli/v1/validate-report.schema.json",
        schema: &args.schema,
        valid: result.is_ok(),
        documents: outcomes,
    };
    print_validate(&report, format);

    if report.valid {
        Ok(SUCCESS)
    } else {
        Ok(DATA_INVALID)
    }
}
