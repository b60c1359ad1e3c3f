//! Engine handle over the Swiss Ephemeris C library

use std::cell::Cell;
use std::ffi::{CStr, CString};
use std::marker::PhantomData;
use std::os::raw::{c_char, c_int};
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};
use swisseph_sys as ffi;

use crate::engine::EphemerisEngine;
use crate::error::{Error, Result};
use crate::types::{ASCMC_SLOTS, CUSP_SLOTS, XX_SLOTS};

/// Set while a [`SwissEph`] handle is alive.
static ENGINE_CLAIMED: AtomicBool = AtomicBool::new(false);

/// Owned handle to the process-wide Swiss Ephemeris state.
///
/// At most one handle exists at a time; [`SwissEph::acquire`] fails with
/// [`Error::EngineBusy`] while another is alive. Dropping the handle closes
/// the engine (`swe_close`), releasing open ephemeris files.
///
/// The handle is `Send` but not `Sync`. Share it between threads through
/// [`crate::SharedEphemeris`].
///
/// # Example
///
/// ```rust,ignore
/// use swisseph::{Ephemeris, SwissEph};
///
/// let mut eph = Ephemeris::new(SwissEph::acquire()?);
/// println!("{}", eph.engine_version());
/// ```
pub struct SwissEph {
    _not_sync: PhantomData<Cell<()>>,
}

impl SwissEph {
    /// Claim the engine.
    pub fn acquire() -> Result<Self> {
        if ENGINE_CLAIMED
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::EngineBusy);
        }

        let mut handle = Self {
            _not_sync: PhantomData,
        };
        info!("Acquired Swiss Ephemeris {}", handle.version());
        Ok(handle)
    }

    /// Whether a handle is currently alive in this process.
    pub fn is_claimed() -> bool {
        ENGINE_CLAIMED.load(Ordering::Acquire)
    }
}

impl Drop for SwissEph {
    fn drop(&mut self) {
        unsafe {
            ffi::swe_close();
        }
        ENGINE_CLAIMED.store(false, Ordering::Release);
        debug!("Released Swiss Ephemeris handle");
    }
}

/// Copy a NUL-terminated engine buffer into an owned string.
fn buffer_to_string(buf: &[c_char; ffi::AS_MAXCH]) -> String {
    // The engine always terminates within AS_MAXCH
    unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

fn to_c_string(value: &str, what: &str) -> Result<CString> {
    CString::new(value).map_err(|_| Error::InvalidInput(format!("{} contains null bytes", what)))
}

impl EphemerisEngine for SwissEph {
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
        unsafe {
            ffi::swe_houses_ex(
                jd_ut,
                iflag,
                geolat,
                geolon,
                hsys as c_int,
                cusps.as_mut_ptr(),
                ascmc.as_mut_ptr(),
            )
        }
    }

    fn house_name(&mut self, hsys: u8) -> String {
        unsafe {
            let name = ffi::swe_house_name(hsys as c_int);
            if name.is_null() {
                String::new()
            } else {
                CStr::from_ptr(name).to_string_lossy().into_owned()
            }
        }
    }

    fn calc_ut(
        &mut self,
        jd_ut: f64,
        ipl: i32,
        iflag: i32,
        xx: &mut [f64; XX_SLOTS],
        serr: &mut String,
    ) -> i32 {
        let mut buf: [c_char; ffi::AS_MAXCH] = [0; ffi::AS_MAXCH];
        let status = unsafe { ffi::swe_calc_ut(jd_ut, ipl, iflag, xx.as_mut_ptr(), buf.as_mut_ptr()) };
        *serr = buffer_to_string(&buf);
        status
    }

    fn set_ephe_path(&mut self, path: Option<&str>) -> Result<()> {
        match path {
            Some(path) => {
                let c_path = to_c_string(path, "Ephemeris path")?;
                unsafe { ffi::swe_set_ephe_path(c_path.as_ptr()) };
            }
            None => unsafe { ffi::swe_set_ephe_path(ptr::null()) },
        }
        Ok(())
    }

    fn set_jpl_file(&mut self, file_name: &str) -> Result<()> {
        let c_name = to_c_string(file_name, "JPL file name")?;
        unsafe { ffi::swe_set_jpl_file(c_name.as_ptr()) };
        Ok(())
    }

    fn set_sid_mode(&mut self, sid_mode: i32, t0: f64, ayan_t0: f64) {
        unsafe { ffi::swe_set_sid_mode(sid_mode, t0, ayan_t0) }
    }

    fn version(&mut self) -> String {
        let mut buf: [c_char; ffi::AS_MAXCH] = [0; ffi::AS_MAXCH];
        unsafe {
            ffi::swe_version(buf.as_mut_ptr());
        }
        buffer_to_string(&buf)
    }
}
