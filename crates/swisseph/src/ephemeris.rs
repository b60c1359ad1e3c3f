//! Typed facade over an [`EphemerisEngine`]

use log::{debug, info, warn};

use crate::config::EngineConfig;
use crate::engine::EphemerisEngine;
use crate::error::{Error, Result};
use crate::flags::Flag;
use crate::types::{
    Angles, CalcOpts, HouseCusps, HouseSystem, Houses, HousesOpts, PlanetEphData, Position,
    XX_SLOTS,
};

/// Typed entry point to the ephemeris engine.
///
/// Translates [`HousesOpts`] and [`CalcOpts`] into the engine's calling
/// convention and the slot buffers it fills back into typed records. Nothing
/// is validated, cached or retried here.
///
/// Two flavours exist for each computation:
/// - [`houses_ex`](Self::houses_ex) / [`calc`](Self::calc) write into caller
///   storage and return the engine status verbatim;
/// - [`houses`](Self::houses) / [`calc_checked`](Self::calc_checked) fold a
///   negative status into [`Error::Engine`].
///
/// # Example
///
/// ```rust,ignore
/// use swisseph::{Ephemeris, HouseCuspFlag, HouseSystem, HousesOpts, SwissEph};
///
/// let mut eph = Ephemeris::new(SwissEph::acquire()?);
/// let houses = eph.houses(&HousesOpts {
///     jd_ut: 2451545.0,
///     flag: HouseCuspFlag::Tropical,
///     geolat: 51.5,
///     geolon: 0.0,
///     hsys: HouseSystem::Placidus,
/// })?;
/// println!("ASC {:.4}", houses.angles.ac);
/// ```
pub struct Ephemeris<E: EphemerisEngine> {
    engine: E,
}

impl<E: EphemerisEngine> Ephemeris<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Wrap `engine` and apply `config` to it.
    pub fn with_config(engine: E, config: &EngineConfig) -> Result<Self> {
        let mut ephemeris = Self::new(engine);
        ephemeris.configure(config)?;
        Ok(ephemeris)
    }

    /// Send configuration to the engine. Unset fields are left untouched.
    pub fn configure(&mut self, config: &EngineConfig) -> Result<()> {
        if let Some(path) = config.ephemeris.path.as_deref() {
            info!("Setting ephemeris path to {}", path);
            self.engine.set_ephe_path(Some(path))?;
        }

        if let Some(file) = config.ephemeris.jpl_file.as_deref() {
            info!("Setting JPL ephemeris file to {}", file);
            self.engine.set_jpl_file(file)?;
        }

        if let Some(sidereal) = &config.sidereal {
            info!("Setting sidereal mode {}", sidereal.mode);
            self.engine
                .set_sid_mode(sidereal.mode, sidereal.t0, sidereal.ayan_t0);
        }

        Ok(())
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_inner(self) -> E {
        self.engine
    }

    /// Version string reported by the engine.
    pub fn engine_version(&mut self) -> String {
        self.engine.version()
    }

    /// Compute house cusps and angles into caller storage.
    ///
    /// Returns the engine status untouched (0 on success, negative on
    /// failure). Slots the engine does not write keep their previous value;
    /// partial output on failure is not masked.
    pub fn houses_ex(
        &mut self,
        opts: &HousesOpts,
        cusps: &mut HouseCusps,
        angles: &mut Angles,
    ) -> i32 {
        debug!(
            "houses_ex jd_ut={} flag={:?} lat={} lon={} hsys={}",
            opts.jd_ut,
            opts.flag,
            opts.geolat,
            opts.geolon,
            opts.hsys.code()
        );

        let mut ascmc = angles.to_slots();
        let status = self.engine.houses_ex(
            opts.jd_ut,
            opts.flag.bits(),
            opts.geolat,
            opts.geolon,
            opts.hsys as u8,
            cusps.as_mut_array(),
            &mut ascmc,
        );
        *angles = Angles::from_slots(&ascmc);
        status
    }

    /// Compute house cusps and angles.
    pub fn houses(&mut self, opts: &HousesOpts) -> Result<Houses> {
        let mut cusps = HouseCusps::default();
        let mut angles = Angles::default();

        let status = self.houses_ex(opts, &mut cusps, &mut angles);
        if status < 0 {
            warn!(
                "swe_houses_ex failed with status {} for {} at lat={}",
                status, opts.hsys, opts.geolat
            );
            return Err(Error::from_status("swe_houses_ex", status, ""));
        }

        Ok(Houses {
            cusps,
            angles,
            status,
        })
    }

    /// Display name the engine gives a house system.
    pub fn house_name(&mut self, sys: HouseSystem) -> String {
        self.engine.house_name(sys as u8)
    }

    /// Compute a body position into caller storage.
    ///
    /// Returns the engine status untouched: negative on failure, otherwise
    /// the flag bits the engine applied. The engine's message buffer is
    /// discarded; use [`calc_checked`](Self::calc_checked) to see it.
    pub fn calc(&mut self, opts: &CalcOpts, data: &mut PlanetEphData) -> i32 {
        let mut message = String::new();
        self.calc_raw(opts, data, &mut message)
    }

    /// Compute a body position, surfacing the engine's diagnostics.
    pub fn calc_checked(&mut self, opts: &CalcOpts) -> Result<Position> {
        let mut data = PlanetEphData::default();
        let mut message = String::new();

        let status = self.calc_raw(opts, &mut data, &mut message);
        if status < 0 {
            warn!(
                "swe_calc_ut failed for body {} with status {}: {}",
                opts.id, status, message
            );
            return Err(Error::from_status("swe_calc_ut", status, message));
        }

        let warning = if message.trim().is_empty() {
            None
        } else {
            warn!("swe_calc_ut body {}: {}", opts.id, message);
            Some(message)
        };

        Ok(Position {
            data,
            flag: Flag::from_bits_retain(status),
            warning,
        })
    }

    fn calc_raw(&mut self, opts: &CalcOpts, data: &mut PlanetEphData, message: &mut String) -> i32 {
        debug!(
            "calc_ut jd_ut={} body={} flags={:#x}",
            opts.jd_ut,
            opts.id,
            opts.flag.bits()
        );

        let mut xx: [f64; XX_SLOTS] = (*data).into();
        let status = self
            .engine
            .calc_ut(opts.jd_ut, opts.id, opts.flag.bits(), &mut xx, message);
        *data = PlanetEphData::from(xx);
        status
    }
}

#[cfg(feature = "swisseph")]
impl Ephemeris<crate::native::SwissEph> {
    /// Acquire the Swiss Ephemeris handle.
    pub fn open() -> Result<Self> {
        Ok(Self::new(crate::native::SwissEph::acquire()?))
    }

    /// Acquire the Swiss Ephemeris handle and apply `config`.
    pub fn open_with_config(config: &EngineConfig) -> Result<Self> {
        Self::with_config(crate::native::SwissEph::acquire()?, config)
    }
}
