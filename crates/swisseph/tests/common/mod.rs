//! Recording engine shared by the integration tests.

#![allow(dead_code)]

use swisseph::{EphemerisEngine, Result, ASCMC_SLOTS, CUSP_SLOTS, XX_SLOTS};

/// Arguments of one `houses_ex` call.
#[derive(Debug, Clone, PartialEq)]
pub struct HousesCall {
    pub jd_ut: f64,
    pub iflag: i32,
    pub geolat: f64,
    pub geolon: f64,
    pub hsys: u8,
}

/// Arguments of one `calc_ut` call.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcCall {
    pub jd_ut: f64,
    pub ipl: i32,
    pub iflag: i32,
}

/// Engine double that records every call and answers with canned values.
///
/// Successful house calls write cusp `n` as `(n - 1) * 30 + 10` and angle
/// slot `i` as `100 + i`. Failing house calls write cusp 1 only when
/// `partial_write` is set.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub houses_calls: Vec<HousesCall>,
    pub name_calls: Vec<u8>,
    pub calc_calls: Vec<CalcCall>,
    pub ephe_paths: Vec<Option<String>>,
    pub jpl_files: Vec<String>,
    pub sid_modes: Vec<(i32, f64, f64)>,

    pub houses_status: i32,
    pub partial_write: bool,
    /// `None` echoes the requested flags back, like the engine does
    pub calc_status: Option<i32>,
    pub calc_message: String,
}

pub const SUN_LON: f64 = 280.368920;
pub const SUN_DIST: f64 = 0.983327;
pub const SUN_SPEED: f64 = 1.019432;

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_houses(status: i32, partial_write: bool) -> Self {
        Self {
            houses_status: status,
            partial_write,
            ..Self::default()
        }
    }

    pub fn with_calc(status: Option<i32>, message: &str) -> Self {
        Self {
            calc_status: status,
            calc_message: message.to_string(),
            ..Self::default()
        }
    }
}

impl EphemerisEngine for RecordingEngine {
    fn houses_ex(
        &mut self,
        jd_ut: f64,
        iflag: i32,
        geolat: f64,
        geolon: f64,
        hsys: u8,
        cusps: &mut [f64; CUSP_SLOTS],
        ascmc: &mut [f64; ASCMC_SLOTS],
    ) -> i32 {
        self.houses_calls.push(HousesCall {
            jd_ut,
            iflag,
            geolat,
            geolon,
            hsys,
        });

        if self.houses_status >= 0 {
            for (n, cusp) in cusps.iter_mut().enumerate().skip(1) {
                *cusp = (n as f64 - 1.0) * 30.0 + 10.0;
            }
            for (i, slot) in ascmc.iter_mut().enumerate().take(8) {
                *slot = 100.0 + i as f64;
            }
        } else if self.partial_write {
            cusps[1] = 42.0;
        }

        self.houses_status
    }

    fn house_name(&mut self, hsys: u8) -> String {
        self.name_calls.push(hsys);
        format!("system {}", hsys as char)
    }

    fn calc_ut(
        &mut self,
        jd_ut: f64,
        ipl: i32,
        iflag: i32,
        xx: &mut [f64; XX_SLOTS],
        serr: &mut String,
    ) -> i32 {
        self.calc_calls.push(CalcCall { jd_ut, ipl, iflag });

        let status = self.calc_status.unwrap_or(iflag);
        if status >= 0 {
            let speed = if iflag & 256 != 0 { SUN_SPEED } else { 0.0 };
            *xx = [SUN_LON, 0.000227, SUN_DIST, speed, 0.0, 0.0];
        }
        *serr = self.calc_message.clone();
        status
    }

    fn set_ephe_path(&mut self, path: Option<&str>) -> Result<()> {
        self.ephe_paths.push(path.map(str::to_string));
        Ok(())
    }

    fn set_jpl_file(&mut self, file_name: &str) -> Result<()> {
        self.jpl_files.push(file_name.to_string());
        Ok(())
    }

    fn set_sid_mode(&mut self, sid_mode: i32, t0: f64, ayan_t0: f64) {
        self.sid_modes.push((sid_mode, t0, ayan_t0));
    }

    fn version(&mut self) -> String {
        "2.10.03".to_string()
    }
}
