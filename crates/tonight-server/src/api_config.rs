// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    /// `max-age` on collection responses; the catalog is immutable
    /// after load so this only bounds client revalidation chatter.
    pub cache_ttl: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 16 * 1024,
            cache_ttl: Duration::from_secs(30),
        }
    }
}
