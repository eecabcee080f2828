#![forbid(unsafe_code)]

use sha2::{Digest, Sha256};

mod text;

pub use text::{fold, split_comma_list};

pub const CRATE_NAME: &str = "tonight-core";

pub const ENV_TONIGHT_LOG_LEVEL: &str = "TONIGHT_LOG";

#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
