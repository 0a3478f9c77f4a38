// mifare-classic-rs/mifare_classic/src/device/info.rs

/// Static electrical and identification data of the supported chip family.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverInfo {
    /// Chip name.
    pub chip_name: &'static str,
    /// Manufacturer name.
    pub manufacturer_name: &'static str,
    /// Physical interface to the chip.
    pub interface: &'static str,
    /// Minimum supply voltage in volts.
    pub supply_voltage_min_v: f32,
    /// Maximum supply voltage in volts.
    pub supply_voltage_max_v: f32,
    /// Maximum current draw in milliamps.
    pub max_current_ma: f32,
    /// Minimum operating temperature in Celsius.
    pub temperature_min: f32,
    /// Maximum operating temperature in Celsius.
    pub temperature_max: f32,
    /// Driver version, major * 1000 + minor * 100.
    pub driver_version: u32,
}

/// Chip information for the supported card family.
pub fn driver_info() -> DriverInfo {
    DriverInfo {
        chip_name: "NXP MIFARE Classic EV1",
        manufacturer_name: "NXP",
        interface: "RF",
        supply_voltage_min_v: 3.3,
        supply_voltage_max_v: 4.0,
        max_current_ma: 30.0,
        temperature_min: -25.0,
        temperature_max: 70.0,
        driver_version: 1000,
    }
}
