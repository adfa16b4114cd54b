//! [`ClientConf`]: the frozen configuration consumed when building a
//! [`crate::channel::Channel`] stack.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// Either flavor of credential the transport may seed into default
/// headers. The runtime only ever passes these through; it has no
/// authorization policy of its own.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthValue {
    Bearer(String),
    Basic { username: String, password: String },
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClientConf {
    pub base_url: Url,
    #[serde(default)]
    pub auth: Option<AuthValue>,
    #[serde(with = "humantime_millis", default = "default_timeout")]
    pub request_timeout: Duration,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_timeout() -> Duration { Duration::from_secs(10) }

fn default_max_attempts() -> u32 { 3 }

/// `request_timeout` is configured in plain milliseconds rather than
/// pulling in a humantime-string dependency the rest of the crate has no
/// other use for.
mod humantime_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
