//! Wall-clock provider.
//!
//! Registers `time:get_24hr[:tz]` and `time:get_12hr[:tz]`. The timezone
//! argument is an IANA name (`America/New_York`); an unknown name degrades to
//! a displayable message rather than an error, and no argument means local
//! time.

use crate::refresh::RefreshSource;
use crate::ProviderError;
use chrono::{Local, Utc};
use chrono_tz::Tz;
use marquee_template::ProviderRegistry;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct ClockProvider;

impl ClockProvider {
    pub fn new() -> Self {
        Self
    }

    fn format(&self, tz: Option<&str>, fmt: &str) -> String {
        match tz {
            Some(name) => match name.parse::<Tz>() {
                Ok(tz) => Utc::now().with_timezone(&tz).format(fmt).to_string(),
                Err(_) => format!("Unknown timezone: {}", name),
            },
            None => Local::now().format(fmt).to_string(),
        }
    }

    pub fn get_24hr(&self, tz: Option<&str>) -> String {
        self.format(tz, "%H:%M:%S")
    }

    pub fn get_12hr(&self, tz: Option<&str>) -> String {
        self.format(tz, "%I:%M:%S %p")
    }

    pub fn register(self: Arc<Self>, registry: &mut ProviderRegistry) {
        let clock = Arc::clone(&self);
        registry.register("time", "get_24hr", move |arg| clock.get_24hr(arg));
        registry.register("time", "get_12hr", move |arg| self.get_12hr(arg));
    }
}

/// The clock has nothing to fetch; it exists as a source only so assemblies
/// can treat every provider uniformly.
impl RefreshSource for ClockProvider {
    fn name(&self) -> &'static str {
        "clock"
    }

    fn refresh(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
