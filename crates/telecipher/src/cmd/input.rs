use std::fs;
use std::io::Read;

use crate::cmd::PayloadArgs;
use crate::exit::{io_error, CliResult};

/// Resolve the payload from TEXT, --file, or stdin.
pub fn read_payload(args: &PayloadArgs) -> CliResult<Vec<u8>> {
    if let Some(text) = &args.text {
        return Ok(text.as_bytes().to_vec());
    }
    let mut data = match &args.file {
        Some(path) => fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?,
        None => {
            let mut data = Vec::new();
            std::io::stdin()
                .read_to_end(&mut data)
                .map_err(|err| io_error("failed reading stdin", err))?;
            data
        }
    };
    strip_line_ending(&mut data);
    Ok(data)
}

fn strip_line_ending(data: &mut Vec<u8>) {
    if data.last() == Some(&b'\n') {
        data.pop();
        if data.last() == Some(&b'\r') {
            data.pop();
        }
    }
}
