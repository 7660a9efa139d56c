pub mod session;
pub mod storage;
pub mod style;

use std::sync::LazyLock;

use chrono::{Local, TimeZone, Utc};
use rand::{SeedableRng, rngs::SmallRng};
use tracing::error;

use common::config::{ConsoleConfig, parse_config};

pub static CONFIG: LazyLock<ConsoleConfig> =
    LazyLock::new(|| match parse_config(include_str!("../../carnus.toml")) {
        Ok(config) => config,
        Err(err) => {
            error!("falling back to default config: {err:#}");
            ConsoleConfig::default()
        }
    });

pub fn now_secs() -> i64 {
    Utc::now().timestamp()
}

pub fn local_time(secs: i64) -> String {
    let convert = move || {
        let dt = Local
            .timestamp_opt(secs, 0)
            .single()
            .ok_or_else(|| anyhow::Error::msg(""))?;

        Result::<String, anyhow::Error>::Ok(dt.format("%Y-%m-%d %H:%M").to_string())
    };
    match convert() {
        Ok(v) => v,
        Err(_) => String::from("error parsing timestamp"),
    }
}

// a fresh shuffle source for the tag cloud
//
// the browser crypto source is preferred; the clock is good enough if the
// page is sandboxed away from it
pub fn cloud_rng() -> SmallRng {
    let mut seed = [0u8; 8];

    match getrandom::getrandom(&mut seed) {
        Ok(()) => SmallRng::seed_from_u64(u64::from_le_bytes(seed)),
        Err(err) => {
            error!("no random source, seeding from the clock: {err}");
            SmallRng::seed_from_u64(Utc::now().timestamp_micros() as u64)
        }
    }
}
