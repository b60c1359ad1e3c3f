//! # swisseph-sys
//!
//! Low-level FFI bindings to the Swiss Ephemeris C library (`libswe`).
//!
//! This crate provides raw, unsafe bindings to the subset of the C API used by
//! the `swisseph` facade. For a typed, safe API use the `swisseph` crate instead.
//!
//! ## Safety
//!
//! All functions in this crate are unsafe. Users must ensure:
//! - Output pointers reference arrays of at least the documented length
//!   ([`SE_NCUSPS`], [`SE_NASCMC_BUF`], [`SE_NXX`], [`AS_MAXCH`])
//! - Strings are null-terminated
//! - Calls are serialized: the library keeps process-global state (ephemeris
//!   path, open files, sidereal mode) and is not re-entrant
//!
//! ## Example
//!
//! ```rust,ignore
//! use swisseph_sys::*;
//! use std::ffi::CStr;
//!
//! unsafe {
//!     let mut cusps = [0.0f64; SE_NCUSPS];
//!     let mut ascmc = [0.0f64; SE_NASCMC_BUF];
//!     let rc = swe_houses_ex(2451545.0, 0, 51.5, 0.0, b'P' as i32, cusps.as_mut_ptr(), ascmc.as_mut_ptr());
//!     assert!(rc >= 0);
//!     println!("{}", CStr::from_ptr(swe_house_name(b'P' as i32)).to_string_lossy());
//! }
//! ```

#![allow(non_camel_case_types)]

use std::os::raw::{c_char, c_double, c_int};

pub type int32 = i32;

// ============================================================================
// Buffer sizes
// ============================================================================

/// Maximum length of strings written by the library, including the NUL.
pub const AS_MAXCH: usize = 256;

/// Slots in the cusp array for non-Gauquelin house systems (slot 0 unused).
pub const SE_NCUSPS: usize = 13;

/// Number of meaningful `ascmc` entries.
pub const SE_NASCMC: usize = 8;

/// Size of the `ascmc` buffer the library requires; it may write 10 slots.
pub const SE_NASCMC_BUF: usize = 10;

/// Slots written by `swe_calc_ut` into `xx`.
pub const SE_NXX: usize = 6;

// ============================================================================
// Body numbers
// ============================================================================

pub const SE_SUN: int32 = 0;
pub const SE_MOON: int32 = 1;
pub const SE_MERCURY: int32 = 2;
pub const SE_VENUS: int32 = 3;
pub const SE_MARS: int32 = 4;
pub const SE_JUPITER: int32 = 5;
pub const SE_SATURN: int32 = 6;
pub const SE_URANUS: int32 = 7;
pub const SE_NEPTUNE: int32 = 8;
pub const SE_PLUTO: int32 = 9;
pub const SE_MEAN_NODE: int32 = 10;
pub const SE_TRUE_NODE: int32 = 11;
pub const SE_MEAN_APOG: int32 = 12;
pub const SE_OSCU_APOG: int32 = 13;
pub const SE_EARTH: int32 = 14;
pub const SE_CHIRON: int32 = 15;

// ============================================================================
// Calculation flags (iflag)
// ============================================================================

pub const SEFLG_JPLEPH: int32 = 1;
pub const SEFLG_SWIEPH: int32 = 2;
pub const SEFLG_MOSEPH: int32 = 4;
pub const SEFLG_HELCTR: int32 = 8;
pub const SEFLG_TRUEPOS: int32 = 16;
pub const SEFLG_J2000: int32 = 32;
pub const SEFLG_NONUT: int32 = 64;
pub const SEFLG_SPEED3: int32 = 128;
pub const SEFLG_SPEED: int32 = 256;
pub const SEFLG_NOGDEFL: int32 = 512;
pub const SEFLG_NOABERR: int32 = 1024;
pub const SEFLG_ASTROMETRIC: int32 = SEFLG_NOABERR | SEFLG_NOGDEFL;
pub const SEFLG_EQUATORIAL: int32 = 2 * 1024;
pub const SEFLG_XYZ: int32 = 4 * 1024;
pub const SEFLG_RADIANS: int32 = 8 * 1024;
pub const SEFLG_BARYCTR: int32 = 16 * 1024;
pub const SEFLG_TOPOCTR: int32 = 32 * 1024;
pub const SEFLG_ORBEL_AA: int32 = SEFLG_TOPOCTR;
pub const SEFLG_SIDEREAL: int32 = 64 * 1024;
pub const SEFLG_ICRS: int32 = 128 * 1024;
pub const SEFLG_DPSIDEPS_1980: int32 = 256 * 1024;
pub const SEFLG_JPLHOR: int32 = SEFLG_DPSIDEPS_1980;
pub const SEFLG_JPLHOR_APPROX: int32 = 512 * 1024;

// ============================================================================
// Sidereal modes (subset)
// ============================================================================

pub const SE_SIDM_FAGAN_BRADLEY: int32 = 0;
pub const SE_SIDM_LAHIRI: int32 = 1;
pub const SE_SIDM_DELUCE: int32 = 2;
pub const SE_SIDM_RAMAN: int32 = 3;
pub const SE_SIDM_KRISHNAMURTI: int32 = 5;
pub const SE_SIDM_USER: int32 = 255;

// ============================================================================
// FFI Function Declarations
// ============================================================================

extern "C" {
    // Houses
    pub fn swe_houses_ex(
        tjd_ut: c_double,
        iflag: int32,
        geolat: c_double,
        geolon: c_double,
        hsys: c_int,
        cusps: *mut c_double,
        ascmc: *mut c_double,
    ) -> int32;

    pub fn swe_house_name(hsys: c_int) -> *const c_char;

    // Planetary positions
    pub fn swe_calc_ut(
        tjd_ut: c_double,
        ipl: int32,
        iflag: int32,
        xx: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    // Configuration and lifecycle
    pub fn swe_set_ephe_path(path: *const c_char);
    pub fn swe_set_jpl_file(fname: *const c_char);
    pub fn swe_set_sid_mode(sid_mode: int32, t0: c_double, ayan_t0: c_double);
    pub fn swe_close();

    // Version Info
    pub fn swe_version(svers: *mut c_char) -> *mut c_char;
}
