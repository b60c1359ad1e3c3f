//! Calculation flags for planetary positions

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Computation options for [`crate::Ephemeris::calc`].
    ///
    /// Bit values are the engine's `SEFLG_*` constants. Primitive flags are
    /// single, disjoint bits; [`Flag::ASTROMETRIC`], [`Flag::ORBEL_AA`] and
    /// [`Flag::JPL_HORIZONS`] are fixed unions (or aliases) of primitives.
    /// The empty set selects the engine defaults (Swiss Ephemeris files,
    /// geocentric, apparent, tropical ecliptic of date, degrees).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Flag: i32 {
        /// Use the JPL ephemeris file
        const JPL_EPH = 1;
        /// Use the Swiss Ephemeris files
        const SWISS_EPH = 2;
        /// Use the built-in Moshier ephemeris
        const MOSHIER_EPH = 4;
        const HELIOCENTRIC = 8;
        /// True/geometric position, no light-time correction
        const TRUE_POSITION = 16;
        /// No precession, J2000 equinox
        const J2000 = 32;
        const NO_NUTATION = 64;
        /// Speed from three positions (deprecated by the engine)
        const SPEED3 = 128;
        const SPEED = 256;
        /// No gravitational deflection of light
        const NO_G_DEFLECTION = 512;
        /// No annual aberration
        const NO_ABERRATION = 1024;
        const ASTROMETRIC = Self::NO_ABERRATION.bits() | Self::NO_G_DEFLECTION.bits();
        /// Right ascension / declination instead of ecliptic coordinates
        const EQUATORIAL = 2 * 1024;
        /// Cartesian instead of polar coordinates
        const XYZ = 4 * 1024;
        const RADIANS = 8 * 1024;
        const BARYCENTRIC = 16 * 1024;
        const TOPOCENTRIC = 32 * 1024;
        /// Orbital elements as in the Astronomical Almanac (shares the topocentric bit)
        const ORBEL_AA = Self::TOPOCENTRIC.bits();
        const SIDEREAL = 64 * 1024;
        const ICRS = 128 * 1024;
        /// IAU 1980 nutation with JPL Horizons corrections
        const DPSIDEPS_1980 = 256 * 1024;
        const JPL_HORIZONS = Self::DPSIDEPS_1980.bits();
        const JPL_HORIZONS_APPROX = 512 * 1024;
    }
}

impl Flag {
    /// Primitive single-bit flags, without composites and aliases.
    pub const PRIMITIVES: [Flag; 20] = [
        Flag::JPL_EPH,
        Flag::SWISS_EPH,
        Flag::MOSHIER_EPH,
        Flag::HELIOCENTRIC,
        Flag::TRUE_POSITION,
        Flag::J2000,
        Flag::NO_NUTATION,
        Flag::SPEED3,
        Flag::SPEED,
        Flag::NO_G_DEFLECTION,
        Flag::NO_ABERRATION,
        Flag::EQUATORIAL,
        Flag::XYZ,
        Flag::RADIANS,
        Flag::BARYCENTRIC,
        Flag::TOPOCENTRIC,
        Flag::SIDEREAL,
        Flag::ICRS,
        Flag::DPSIDEPS_1980,
        Flag::JPL_HORIZONS_APPROX,
    ];

    /// Ephemeris source bits.
    pub const EPHEMERIS_SOURCE: Flag = Flag::JPL_EPH
        .union(Flag::SWISS_EPH)
        .union(Flag::MOSHIER_EPH);

    /// Ephemeris source selected by these flags, if any.
    pub fn ephemeris_source(self) -> Flag {
        self & Flag::EPHEMERIS_SOURCE
    }
}

impl Default for Flag {
    fn default() -> Self {
        Flag::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_engine_bit_values() {
        assert_eq!(Flag::JPL_EPH.bits(), 1);
        assert_eq!(Flag::SPEED.bits(), 256);
        assert_eq!(Flag::EQUATORIAL.bits(), 2048);
        assert_eq!(Flag::TOPOCENTRIC.bits(), 32768);
        assert_eq!(Flag::SIDEREAL.bits(), 65536);
        assert_eq!(Flag::JPL_HORIZONS_APPROX.bits(), 524288);
    }

    #[test]
    fn test_astrometric_decomposes() {
        assert_eq!(Flag::ASTROMETRIC & Flag::NO_ABERRATION, Flag::NO_ABERRATION);
        assert_eq!(Flag::ASTROMETRIC & Flag::NO_G_DEFLECTION, Flag::NO_G_DEFLECTION);
        assert_eq!(
            Flag::ASTROMETRIC,
            Flag::NO_ABERRATION | Flag::NO_G_DEFLECTION
        );
        assert!(!Flag::ASTROMETRIC.intersects(Flag::SPEED));
    }

    #[test]
    fn test_aliases_share_bits() {
        assert_eq!(Flag::ORBEL_AA, Flag::TOPOCENTRIC);
        assert_eq!(Flag::JPL_HORIZONS, Flag::DPSIDEPS_1980);
    }

    #[test]
    fn test_primitives_are_disjoint() {
        let mut seen = Flag::empty();
        for flag in Flag::PRIMITIVES {
            assert_eq!(flag.bits().count_ones(), 1, "{:?} is not a single bit", flag);
            assert!(!seen.intersects(flag), "{:?} overlaps", flag);
            seen |= flag;
        }
        assert_eq!(seen, Flag::all());
    }

    #[test]
    fn test_ephemeris_source() {
        let flags = Flag::MOSHIER_EPH | Flag::SPEED | Flag::SIDEREAL;
        assert_eq!(flags.ephemeris_source(), Flag::MOSHIER_EPH);
        assert_eq!(Flag::SPEED.ephemeris_source(), Flag::empty());
    }

    #[cfg(feature = "swisseph")]
    #[test]
    fn test_bits_match_engine_constants() {
        use swisseph_sys as ffi;

        let expected = [
            (Flag::JPL_EPH, ffi::SEFLG_JPLEPH),
            (Flag::SWISS_EPH, ffi::SEFLG_SWIEPH),
            (Flag::MOSHIER_EPH, ffi::SEFLG_MOSEPH),
            (Flag::HELIOCENTRIC, ffi::SEFLG_HELCTR),
            (Flag::TRUE_POSITION, ffi::SEFLG_TRUEPOS),
            (Flag::J2000, ffi::SEFLG_J2000),
            (Flag::NO_NUTATION, ffi::SEFLG_NONUT),
            (Flag::SPEED3, ffi::SEFLG_SPEED3),
            (Flag::SPEED, ffi::SEFLG_SPEED),
            (Flag::NO_G_DEFLECTION, ffi::SEFLG_NOGDEFL),
            (Flag::NO_ABERRATION, ffi::SEFLG_NOABERR),
            (Flag::ASTROMETRIC, ffi::SEFLG_ASTROMETRIC),
            (Flag::EQUATORIAL, ffi::SEFLG_EQUATORIAL),
            (Flag::XYZ, ffi::SEFLG_XYZ),
            (Flag::RADIANS, ffi::SEFLG_RADIANS),
            (Flag::BARYCENTRIC, ffi::SEFLG_BARYCTR),
            (Flag::TOPOCENTRIC, ffi::SEFLG_TOPOCTR),
            (Flag::ORBEL_AA, ffi::SEFLG_ORBEL_AA),
            (Flag::SIDEREAL, ffi::SEFLG_SIDEREAL),
            (Flag::ICRS, ffi::SEFLG_ICRS),
            (Flag::DPSIDEPS_1980, ffi::SEFLG_DPSIDEPS_1980),
            (Flag::JPL_HORIZONS, ffi::SEFLG_JPLHOR),
            (Flag::JPL_HORIZONS_APPROX, ffi::SEFLG_JPLHOR_APPROX),
        ];
        for (flag, bits) in expected {
            assert_eq!(flag.bits(), bits, "{:?}", flag);
        }
    }

    proptest! {
        #[test]
        fn prop_union_masks_back_to_members(mask in 0u32..(1 << 20)) {
            let flags: Flag = Flag::PRIMITIVES
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .fold(Flag::empty(), |acc, (_, f)| acc | *f);

            for (i, flag) in Flag::PRIMITIVES.iter().enumerate() {
                let expected = if mask & (1 << i) != 0 { *flag } else { Flag::empty() };
                prop_assert_eq!(flags & *flag, expected);
            }
        }
    }
}
