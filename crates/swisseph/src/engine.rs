//! The engine seam: raw calling convention of the ephemeris library

use crate::error::Result;
use crate::types::{ASCMC_SLOTS, CUSP_SLOTS, XX_SLOTS};

/// Calling convention of the external ephemeris engine.
///
/// Methods mirror the C routines one to one: codes and flags arrive as the
/// raw integers the engine reads, results are written into fixed-size slot
/// buffers and the status is returned untouched. Implementations must not
/// validate, retry or translate anything.
///
/// Every method takes `&mut self`: engines of this kind keep process-global
/// state (ephemeris path, open files, sidereal mode) and are not re-entrant.
pub trait EphemerisEngine {
    /// `swe_houses_ex`
    #[allow(clippy::too_many_arguments)]
    fn houses_ex(
        &mut self,
        jd_ut: f64,
        iflag: i32,
        geolat: f64,
        geolon: f64,
        hsys: u8,
        cusps: &mut [f64; CUSP_SLOTS],
        ascmc: &mut [f64; ASCMC_SLOTS],
    ) -> i32;

    /// `swe_house_name`
    fn house_name(&mut self, hsys: u8) -> String;

    /// `swe_calc_ut`. `serr` receives the engine's message buffer.
    fn calc_ut(
        &mut self,
        jd_ut: f64,
        ipl: i32,
        iflag: i32,
        xx: &mut [f64; XX_SLOTS],
        serr: &mut String,
    ) -> i32;

    /// `swe_set_ephe_path`; `None` restores the engine default.
    fn set_ephe_path(&mut self, path: Option<&str>) -> Result<()>;

    /// `swe_set_jpl_file`
    fn set_jpl_file(&mut self, file_name: &str) -> Result<()>;

    /// `swe_set_sid_mode`
    fn set_sid_mode(&mut self, sid_mode: i32, t0: f64, ayan_t0: f64);

    /// `swe_version`
    fn version(&mut self) -> String;
}

impl<E: EphemerisEngine + ?Sized> EphemerisEngine for &mut E {
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
        (**self).houses_ex(jd_ut, iflag, geolat, geolon, hsys, cusps, ascmc)
    }

    fn house_name(&mut self, hsys: u8) -> String {
        (**self).house_name(hsys)
    }

    fn calc_ut(
        &mut self,
        jd_ut: f64,
        ipl: i32,
        iflag: i32,
        xx: &mut [f64; XX_SLOTS],
        serr: &mut String,
    ) -> i32 {
        (**self).calc_ut(jd_ut, ipl, iflag, xx, serr)
    }

    fn set_ephe_path(&mut self, path: Option<&str>) -> Result<()> {
        (**self).set_ephe_path(path)
    }

    fn set_jpl_file(&mut self, file_name: &str) -> Result<()> {
        (**self).set_jpl_file(file_name)
    }

    fn set_sid_mode(&mut self, sid_mode: i32, t0: f64, ayan_t0: f64) {
        (**self).set_sid_mode(sid_mode, t0, ayan_t0)
    }

    fn version(&mut self) -> String {
        (**self).version()
    }
}

impl<E: EphemerisEngine + ?Sized> EphemerisEngine for Box<E> {
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
        (**self).houses_ex(jd_ut, iflag, geolat, geolon, hsys, cusps, ascmc)
    }

    fn house_name(&mut self, hsys: u8) -> String {
        (**self).house_name(hsys)
    }

    fn calc_ut(
        &mut self,
        jd_ut: f64,
        ipl: i32,
        iflag: i32,
        xx: &mut [f64; XX_SLOTS],
        serr: &mut String,
    ) -> i32 {
        (**self).calc_ut(jd_ut, ipl, iflag, xx, serr)
    }

    fn set_ephe_path(&mut self, path: Option<&str>) -> Result<()> {
        (**self).set_ephe_path(path)
    }

    fn set_jpl_file(&mut self, file_name: &str) -> Result<()> {
        (**self).set_jpl_file(file_name)
    }

    fn set_sid_mode(&mut self, sid_mode: i32, t0: f64, ayan_t0: f64) {
        (**self).set_sid_mode(sid_mode, t0, ayan_t0)
    }

    fn version(&mut self) -> String {
        (**self).version()
    }
}
