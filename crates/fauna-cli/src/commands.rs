use anyhow::{Context, Result};

use std::collections::BTreeMap;

use fauna_cli::pipeline::{CleanRequest, run_clean, run_columns};
use fauna_model::{ColumnRole, ResolvedColumn};

use crate::cli::{CleanArgs, ColumnsArgs};
use crate::summary::{print_mapping, print_summary};

pub fn run_clean_command(args: &CleanArgs) -> Result<()> {
    let request = CleanRequest {
        input: args.input.input.clone(),
        output_dir: args.output_dir.clone(),
        label: args.label.clone(),
        sample_path: args.sample_path.clone(),
        write_sample: !args.no_sample,
        delimiter: args.input.delimiter,
        dry_run: args.dry_run,
    };
    let report = run_clean(&request)?;
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{json}");
    } else {
        print_summary(&report);
    }
    Ok(())
}

pub fn run_columns_command(args: &ColumnsArgs) -> Result<()> {
    let mapping = run_columns(&args.input.input, args.input.delimiter)?;
    let roles = if args.roles.is_empty() {
        ColumnRole::ALL.to_vec()
    } else {
        args.roles.clone()
    };
    if args.json {
        let selected: BTreeMap<ColumnRole, &ResolvedColumn> =
            roles.iter().map(|role| (*role, mapping.get(*role))).collect();
        let json = serde_json::to_string_pretty(&selected).context("serialize mapping")?;
        println!("{json}");
    } else {
        print_mapping(&mapping, &roles);
    }
    Ok(())
}
