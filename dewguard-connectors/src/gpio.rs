//! Linux sysfs GPIO Connector - Heater Relay Output
//!
//! ## Overview
//!
//! Drives one output pin through the legacy sysfs interface, available on
//! Raspberry Pi OS and most single-board computer images:
//!
//! ```text
//! /sys/class/gpio/
//! ├── export          write "529" to create gpio529/
//! ├── gpiochip512/
//! │   ├── base        "512"
//! │   └── label       "pinctrl-bcm2711"
//! └── gpio529/
//!     ├── direction   "high" / "low" = output with that level
//!     └── value       "1" / "0"
//! ```
//!
//! ## Pin Numbering
//!
//! The configured pin is a BCM line number, the same number printed on
//! Raspberry Pi pinout diagrams. sysfs wants the kernel's global GPIO number,
//! which is the line number plus the `base` of the SoC's gpiochip:
//!
//! | Kernel               | SoC gpiochip base | BCM 17 in sysfs |
//! |----------------------|-------------------|-----------------|
//! | Raspberry Pi < 6.6   | 0                 | 17              |
//! | Raspberry Pi >= 6.6  | 512 (Pi 5: 571)   | 529 (Pi 5: 588) |
//!
//! The base is read from the `gpiochip*` whose `label` names the Broadcom or
//! RP1 pin controller. Boards without such a chip use the pin number as is.
//! An explicit base ([`SysfsGpio::with_chip_base`]) skips the scan.
//!
//! ## Semantics
//!
//! - Active-high: `true` drives the pin to 1 and powers the heater
//! - Written exactly once per cycle, never read back
//! - The pin is exported on first use and left exported, so the relay keeps
//!   its state after the process exits
//!
//! Writing the level through `direction` configures the pin as output and sets
//! its level in one step, so an exported input pin never glitches low before
//! the value lands.
//!
//! ## Example Usage
//!
//! ```no_run
//! use dewguard_connectors::gpio::SysfsGpio;
//! use dewguard_core::HeaterOutput;
//!
//! let mut relay = SysfsGpio::new(17);
//! relay.set_output(true)?;
//! # Ok::<(), dewguard_connectors::gpio::GpioError>(())
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use dewguard_core::HeaterOutput;
use thiserror::Error;

/// Default sysfs GPIO class directory
pub const DEFAULT_SYSFS_ROOT: &str = "/sys/class/gpio";

/// gpiochip label prefixes of Raspberry Pi SoC pin controllers
const SOC_CHIP_LABELS: [&str; 2] = ["pinctrl-bcm", "pinctrl-rp1"];

/// Attempts to wait for udev to fix permissions after export
const EXPORT_POLL_ATTEMPTS: u32 = 20;

/// Delay between export polls
const EXPORT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// GPIO actuation errors
#[derive(Debug, Error)]
pub enum GpioError {
    /// Writing a sysfs attribute failed
    #[error("GPIO {}: cannot write {}: {}", .pin, .path.display(), .source)]
    Write {
        /// Configured BCM pin
        pin: u32,
        /// Attribute that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The pin directory did not appear after export
    #[error("GPIO {}: {} did not appear after export", .pin, .path.display())]
    NotExported {
        /// Configured BCM pin
        pin: u32,
        /// Expected `gpio<N>` directory
        path: PathBuf,
    },

    /// A gpiochip `base` attribute is unreadable or not a number
    #[error("GPIO {}: invalid chip base in {}: {}", .pin, .path.display(), .reason)]
    ChipBase {
        /// Configured BCM pin
        pin: u32,
        /// `base` attribute that was read
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },
}

/// One output pin under a sysfs GPIO root
#[derive(Debug, Clone)]
pub struct SysfsGpio {
    pin: u32,
    root: PathBuf,
    chip_base: Option<u32>,
}

impl SysfsGpio {
    /// BCM pin under `/sys/class/gpio`
    pub fn new(pin: u32) -> Self {
        Self::with_root(pin, DEFAULT_SYSFS_ROOT)
    }

    /// BCM pin under a custom sysfs root
    pub fn with_root(pin: u32, root: impl Into<PathBuf>) -> Self {
        Self {
            pin,
            root: root.into(),
            chip_base: None,
        }
    }

    /// Use a fixed gpiochip base instead of scanning for the SoC controller
    pub fn with_chip_base(mut self, base: u32) -> Self {
        self.chip_base = Some(base);
        self
    }

    /// Configured BCM pin
    pub fn pin(&self) -> u32 {
        self.pin
    }

    /// Kernel GPIO number used in sysfs: chip base plus pin
    pub fn kernel_line(&self) -> Result<u32, GpioError> {
        let base = match self.chip_base {
            Some(base) => base,
            None => self.find_soc_chip_base()?.unwrap_or(0),
        };

        base.checked_add(self.pin).ok_or_else(|| GpioError::ChipBase {
            pin: self.pin,
            path: self.root.clone(),
            reason: format!("base {base} + pin {} overflows", self.pin),
        })
    }

    /// `gpio<N>` directory of this pin
    pub fn pin_dir(&self) -> Result<PathBuf, GpioError> {
        Ok(self.line_dir(self.kernel_line()?))
    }

    /// Export the pin unless it already is
    pub fn export(&self) -> Result<PathBuf, GpioError> {
        let line = self.kernel_line()?;
        let pin_dir = self.line_dir(line);
        if pin_dir.is_dir() {
            return Ok(pin_dir);
        }

        log::debug!("Exporting GPIO {} as kernel line {}", self.pin, line);
        self.write(&self.root.join("export"), &line.to_string())?;

        // udev may need a moment to create the directory and fix ownership
        let direction = pin_dir.join("direction");
        for _ in 0..EXPORT_POLL_ATTEMPTS {
            if direction.exists() {
                return Ok(pin_dir);
            }
            thread::sleep(EXPORT_POLL_INTERVAL);
        }

        Err(GpioError::NotExported {
            pin: self.pin,
            path: pin_dir,
        })
    }

    fn line_dir(&self, line: u32) -> PathBuf {
        self.root.join(format!("gpio{line}"))
    }

    /// Base of the first gpiochip labelled as a Raspberry Pi pin controller
    fn find_soc_chip_base(&self) -> Result<Option<u32>, GpioError> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return Ok(None);
        };

        let mut chips: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with("gpiochip"))
            })
            .collect();
        chips.sort();

        for chip in chips {
            let Ok(label) = fs::read_to_string(chip.join("label")) else {
                continue;
            };
            let label = label.trim();
            if SOC_CHIP_LABELS.iter().any(|prefix| label.starts_with(prefix)) {
                let base = self.read_chip_base(&chip.join("base"))?;
                log::debug!("GPIO chip {} ({}) has base {}", chip.display(), label, base);
                return Ok(Some(base));
            }
        }

        Ok(None)
    }

    fn read_chip_base(&self, path: &Path) -> Result<u32, GpioError> {
        let invalid = |reason: String| GpioError::ChipBase {
            pin: self.pin,
            path: path.to_path_buf(),
            reason,
        };

        let contents = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        contents
            .trim()
            .parse()
            .map_err(|_| invalid(format!("{:?} is not a number", contents.trim())))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), GpioError> {
        fs::write(path, contents).map_err(|source| GpioError::Write {
            pin: self.pin,
            path: path.to_path_buf(),
            source,
        })
    }
}

impl HeaterOutput for SysfsGpio {
    type Error = GpioError;

    fn set_output(&mut self, on: bool) -> Result<(), Self::Error> {
        let pin_dir = self.export()?;

        let (direction, value) = if on { ("high", "1") } else { ("low", "0") };
        self.write(&pin_dir.join("direction"), direction)?;
        self.write(&pin_dir.join("value"), value)?;

        log::info!("GPIO {} set {}", self.pin, if on { "high" } else { "low" });
        Ok(())
    }
}
