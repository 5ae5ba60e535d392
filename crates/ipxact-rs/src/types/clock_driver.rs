// crates/ipxact-rs/src/types/clock_driver.rs

/// A clock timing value with its optional `@units`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClockUnit {
    pub value: String,
    pub units: String,
}

impl ClockUnit {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            units: String::new(),
        }
    }
}

/// An `<otherClockDriver>` for a clock that is not driven through a port.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OtherClockDriver {
    /// `@clockName`
    pub clock_name: String,
    /// `@clockSource`
    pub clock_source: String,
    pub clock_period: ClockUnit,
    pub clock_pulse_offset: ClockUnit,
    pub clock_pulse_value: String,
    pub clock_pulse_duration: ClockUnit,
}
