use telecipher_core::to_uppercase;

use crate::cmd::input::read_payload;
use crate::cmd::UpperArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_transform, OutputFormat, TransformOutput};

pub fn run(args: UpperArgs, format: OutputFormat) -> CliResult<i32> {
    let mut payload = read_payload(&args.payload)?;
    to_uppercase(&mut payload);
    let out = TransformOutput::new("upper", None, &payload);
    print_transform(&out, &payload, format);
    Ok(SUCCESS)
}
