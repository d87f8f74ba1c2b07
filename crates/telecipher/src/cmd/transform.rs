use telecipher_core::{to_uppercase, Cipher, CipherConfig};

use crate::cmd::input::read_payload;
use crate::cmd::{DecodeArgs, EncodeArgs, KeyArgs};
use crate::exit::{cipher_error, CliResult, SUCCESS};
use crate::output::{print_transform, OutputFormat, TransformOutput};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Encode,
    Decode,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        }
    }
}

pub fn run_encode(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let mut payload = read_payload(&args.payload)?;
    if args.upper {
        to_uppercase(&mut payload);
    }
    finish(Direction::Encode, &args.key, payload, format)
}

pub fn run_decode(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = read_payload(&args.payload)?;
    finish(Direction::Decode, &args.key, payload, format)
}

fn finish(
    direction: Direction,
    key: &KeyArgs,
    mut payload: Vec<u8>,
    format: OutputFormat,
) -> CliResult<i32> {
    apply(direction, key, &mut payload)?;
    tracing::debug!(
        operation = direction.as_str(),
        len = payload.len(),
        "transform complete"
    );
    let out = TransformOutput::new(direction.as_str(), Some(key.key), &payload);
    print_transform(&out, &payload, format);
    Ok(SUCCESS)
}

fn apply(direction: Direction, key: &KeyArgs, payload: &mut [u8]) -> CliResult<()> {
    let config = CipherConfig {
        max_input_len: key.max_len,
    };
    let context = format!("{} failed", direction.as_str());
    let cipher =
        Cipher::with_config(key.key, config).map_err(|err| cipher_error(&context, err))?;
    let result = match direction {
        Direction::Encode => cipher.encode(payload),
        Direction::Decode => cipher.decode(payload),
    };
    result.map_err(|err| cipher_error(&context, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit::{DATA_INVALID, USAGE};

    fn key_args(key: i32, max_len: usize) -> KeyArgs {
        KeyArgs { key, max_len }
    }

    #[test]
    fn apply_roundtrips() {
        let mut payload = b"0123456789ABCDEF".to_vec();
        apply(Direction::Encode, &key_args(5, 10_000), &mut payload).unwrap();
        assert_ne!(payload, b"0123456789ABCDEF");
        apply(Direction::Decode, &key_args(5, 10_000), &mut payload).unwrap();
        assert_eq!(payload, b"0123456789ABCDEF");
    }

    #[test]
    fn apply_rejects_bad_key_with_usage() {
        let mut payload = b"ABCD".to_vec();
        let err = apply(Direction::Encode, &key_args(0, 10_000), &mut payload).unwrap_err();
        assert_eq!(err.code, USAGE);
        assert!(err.message.starts_with("encode failed"));
    }

    #[test]
    fn apply_rejects_long_payload_with_data_invalid() {
        let mut payload = b"ABCDE".to_vec();
        let err = apply(Direction::Decode, &key_args(1, 4), &mut payload).unwrap_err();
        assert_eq!(err.code, DATA_INVALID);
        assert_eq!(payload, b"ABCDE");
    }

    #[test]
    fn apply_refuses_to_raise_the_limit() {
        let mut payload = vec![b'A'; 10_001];
        let err = apply(Direction::Encode, &key_args(1, 20_000), &mut payload).unwrap_err();
        assert_eq!(err.code, DATA_INVALID);
        assert!(payload.iter().all(|&b| b == b'A'));
    }
}
