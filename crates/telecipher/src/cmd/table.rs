use crate::cmd::TableArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_substitution_table, OutputFormat};

pub fn run(_args: TableArgs, format: OutputFormat) -> CliResult<i32> {
    print_substitution_table(format);
    Ok(SUCCESS)
}
