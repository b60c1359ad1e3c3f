//! # swisseph
//!
//! Typed Rust facade over the Swiss Ephemeris house and planetary position API.
//!
//! This crate replaces the raw calling convention of the C library (character
//! codes, integer flags, output pointer arrays) with enums, bitflags and plain
//! records. All astronomy is done by the engine; nothing here computes,
//! validates or caches.
//!
//! ## Features
//!
//! - `swisseph`: link `libswe` through `swisseph-sys` and enable [`SwissEph`]
//! - `build-native`: compile `libswe` from `SWISSEPH_SRC_DIR`
//! - `cli`: the `swe-chart` command line tool
//!
//! Without `swisseph` the facade works against any [`EphemerisEngine`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use swisseph::{CalcOpts, Ephemeris, Flag, HouseCuspFlag, HouseSystem, HousesOpts, PlanetaryBody};
//!
//! let mut eph = Ephemeris::open()?;
//!
//! let houses = eph.houses(&HousesOpts {
//!     jd_ut: 2451545.0,
//!     flag: HouseCuspFlag::Tropical,
//!     geolat: 51.5,
//!     geolon: 0.0,
//!     hsys: HouseSystem::Placidus,
//! })?;
//! for (i, cusp) in houses.cusps.iter().enumerate() {
//!     println!("house {:2}: {:8.4}", i + 1, cusp);
//! }
//!
//! let sun = eph.calc_checked(&CalcOpts::for_body(2451545.0, PlanetaryBody::Sun, Flag::SPEED))?;
//! println!("{} {:.4}", PlanetaryBody::Sun, sun.data.lon);
//! ```
//!
//! ## Thread Safety
//!
//! The engine keeps process-global state and is not re-entrant. Only one
//! [`SwissEph`] handle can be alive at a time, and [`Ephemeris`] methods take
//! `&mut self`. Use [`SharedEphemeris`] to share one engine between threads.

mod body;
mod config;
mod engine;
mod ephemeris;
mod error;
mod flags;
#[cfg(feature = "swisseph")]
mod native;
mod shared;
mod time;
mod types;

pub use body::{planet_name, planetstr, PlanetaryBody, UNKNOWN_BODY};
pub use config::{EngineConfig, EphemerisSettings, SiderealSettings, CONFIG_FILE_NAME};
pub use engine::EphemerisEngine;
pub use ephemeris::Ephemeris;
pub use error::{Error, Result};
pub use flags::Flag;
#[cfg(feature = "swisseph")]
pub use native::SwissEph;
pub use shared::SharedEphemeris;
pub use time::{julian_day_ut, J2000};
pub use types::*;
