//! Request and result records exchanged with the engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::body::PlanetaryBody;
use crate::flags::Flag;

/// Slots in the cusp record (slot 0 reserved, 1..=12 are houses).
pub const CUSP_SLOTS: usize = 13;

/// Slots the engine may write into the angle buffer.
pub const ASCMC_SLOTS: usize = 10;

/// Slots written into the position buffer.
pub const XX_SLOTS: usize = 6;

/// House division algorithm.
///
/// Discriminants are the single-byte codes the engine expects for `hsys`.
/// The table is not contiguous: `E` (alias of `A`) and `G` (Gauquelin, 36
/// sectors) have no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum HouseSystem {
    Equal = b'A',
    Alcabitius = b'B',
    Campanus = b'C',
    #[serde(rename = "equal_mc")]
    EqualMC = b'D',
    Carter = b'F',
    Azimuth = b'H',
    Sunshine = b'I',
    SunshineAlt = b'i',
    Koch = b'K',
    PullenSDelta = b'L',
    Morinus = b'M',
    EqualAries = b'N',
    Porphyry = b'O',
    Placidus = b'P',
    PullenSRatio = b'Q',
    Regiomontanus = b'R',
    Sripati = b'S',
    PolichPage = b'T',
    KrusinskiPisaGoelzer = b'U',
    EqualVehlow = b'V',
    WholeSign = b'W',
    #[serde(rename = "ars_meridian")]
    ARSMeridian = b'X',
    #[serde(rename = "apc")]
    APC = b'Y',
}

impl HouseSystem {
    /// Every supported house system.
    pub const ALL: [HouseSystem; 23] = [
        HouseSystem::Equal,
        HouseSystem::Alcabitius,
        HouseSystem::Campanus,
        HouseSystem::EqualMC,
        HouseSystem::Carter,
        HouseSystem::Azimuth,
        HouseSystem::Sunshine,
        HouseSystem::SunshineAlt,
        HouseSystem::Koch,
        HouseSystem::PullenSDelta,
        HouseSystem::Morinus,
        HouseSystem::EqualAries,
        HouseSystem::Porphyry,
        HouseSystem::Placidus,
        HouseSystem::PullenSRatio,
        HouseSystem::Regiomontanus,
        HouseSystem::Sripati,
        HouseSystem::PolichPage,
        HouseSystem::KrusinskiPisaGoelzer,
        HouseSystem::EqualVehlow,
        HouseSystem::WholeSign,
        HouseSystem::ARSMeridian,
        HouseSystem::APC,
    ];

    /// Engine character code.
    #[inline]
    pub fn code(self) -> char {
        self as u8 as char
    }

    /// Variant for an engine character code. `E` is accepted as `Equal`.
    pub fn from_code(code: char) -> Option<Self> {
        if code == 'E' {
            return Some(HouseSystem::Equal);
        }
        HouseSystem::ALL.into_iter().find(|sys| sys.code() == code)
    }

    /// Identifier used by `Display`/`FromStr` and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            HouseSystem::Equal => "equal",
            HouseSystem::Alcabitius => "alcabitius",
            HouseSystem::Campanus => "campanus",
            HouseSystem::EqualMC => "equal_mc",
            HouseSystem::Carter => "carter",
            HouseSystem::Azimuth => "azimuth",
            HouseSystem::Sunshine => "sunshine",
            HouseSystem::SunshineAlt => "sunshine_alt",
            HouseSystem::Koch => "koch",
            HouseSystem::PullenSDelta => "pullen_s_delta",
            HouseSystem::Morinus => "morinus",
            HouseSystem::EqualAries => "equal_aries",
            HouseSystem::Porphyry => "porphyry",
            HouseSystem::Placidus => "placidus",
            HouseSystem::PullenSRatio => "pullen_s_ratio",
            HouseSystem::Regiomontanus => "regiomontanus",
            HouseSystem::Sripati => "sripati",
            HouseSystem::PolichPage => "polich_page",
            HouseSystem::KrusinskiPisaGoelzer => "krusinski_pisa_goelzer",
            HouseSystem::EqualVehlow => "equal_vehlow",
            HouseSystem::WholeSign => "whole_sign",
            HouseSystem::ARSMeridian => "ars_meridian",
            HouseSystem::APC => "apc",
        }
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HouseSystem {
    type Err = String;

    /// Accepts the snake_case identifier or the single-character engine code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return HouseSystem::from_code(c).ok_or_else(|| format!("Unknown house system code '{}'", c));
        }

        let wanted = s.trim().to_ascii_lowercase();
        HouseSystem::ALL
            .into_iter()
            .find(|sys| sys.as_str() == wanted)
            .ok_or_else(|| format!("Unknown house system '{}'", s))
    }
}

/// Reference frame for house cusp output.
///
/// Values are the engine's `SEFLG_*` bits (`SEFLG_SIDEREAL`, `SEFLG_RADIANS`),
/// not ordinals: `swe_houses_ex` only looks at those bits of `iflag`, so
/// 1 and 2 would be ignored and silently give tropical degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum HouseCuspFlag {
    #[default]
    Tropical = 0,
    /// `SEFLG_SIDEREAL`
    Sidereal = 64 * 1024,
    /// `SEFLG_RADIANS`
    Radians = 8 * 1024,
}

impl HouseCuspFlag {
    #[inline]
    pub fn bits(self) -> i32 {
        self as i32
    }
}

/// Request for [`crate::Ephemeris::houses`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HousesOpts {
    /// Julian day, Universal Time
    pub jd_ut: f64,
    #[serde(default)]
    pub flag: HouseCuspFlag,
    /// Geographic latitude in degrees, north positive
    pub geolat: f64,
    /// Geographic longitude in degrees, east positive
    pub geolon: f64,
    pub hsys: HouseSystem,
}

/// House cusps as written by the engine.
///
/// Slot 0 is reserved; slots 1 through 12 hold cusps 1 through 12.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct HouseCusps(pub [f64; CUSP_SLOTS]);

impl HouseCusps {
    /// Cusp of house `n` (1-based).
    pub fn cusp(&self, n: usize) -> Option<f64> {
        if (1..CUSP_SLOTS).contains(&n) {
            Some(self.0[n])
        } else {
            None
        }
    }

    /// Cusps 1 through 12 in order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0[1..].iter().copied()
    }

    pub fn as_array(&self) -> &[f64; CUSP_SLOTS] {
        &self.0
    }

    pub(crate) fn as_mut_array(&mut self) -> &mut [f64; CUSP_SLOTS] {
        &mut self.0
    }
}

/// Angles derived by the house routine.
///
/// Field order matches the engine's `ascmc` slots 0..8 and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Angles {
    /// Ascendant
    pub ac: f64,
    /// Midheaven
    pub mc: f64,
    /// Right ascension of the midheaven
    pub armc: f64,
    pub vertex: f64,
    /// Equatorial ascendant
    pub equasc: f64,
    /// Co-ascendant (W. Koch)
    pub coasc1: f64,
    /// Co-ascendant (M. Munkasey)
    pub coasc2: f64,
    /// Polar ascendant (M. Munkasey)
    pub polasc: f64,
}

impl Angles {
    /// Builds the record from the engine's slot buffer.
    pub fn from_slots(slots: &[f64; ASCMC_SLOTS]) -> Self {
        Self {
            ac: slots[0],
            mc: slots[1],
            armc: slots[2],
            vertex: slots[3],
            equasc: slots[4],
            coasc1: slots[5],
            coasc2: slots[6],
            polasc: slots[7],
        }
    }

    /// Writes the record back into slot order.
    pub fn to_slots(&self) -> [f64; ASCMC_SLOTS] {
        [
            self.ac, self.mc, self.armc, self.vertex, self.equasc, self.coasc1, self.coasc2,
            self.polasc, 0.0, 0.0,
        ]
    }
}

/// Successful house computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Houses {
    pub cusps: HouseCusps,
    pub angles: Angles,
    /// Non-negative engine status
    pub status: i32,
}

/// Request for [`crate::Ephemeris::calc`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalcOpts {
    /// Julian day, Universal Time
    pub jd_ut: f64,
    /// Engine body number; not checked against [`PlanetaryBody`]
    pub id: i32,
    #[serde(default)]
    pub flag: Flag,
}

impl CalcOpts {
    pub fn for_body(jd_ut: f64, body: PlanetaryBody, flag: Flag) -> Self {
        Self {
            jd_ut,
            id: body.id(),
            flag,
        }
    }
}

/// Position record written by the engine.
///
/// Field order matches the engine's `xx` slots and must not change. Units
/// depend on the flags (degrees/AU by default, radians with
/// [`Flag::RADIANS`], right ascension/declination with [`Flag::EQUATORIAL`],
/// x/y/z with [`Flag::XYZ`]). Speeds are zero unless [`Flag::SPEED`] is set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct PlanetEphData {
    pub lon: f64,
    pub lat: f64,
    pub dist: f64,
    pub spdlon: f64,
    pub spdlat: f64,
    pub spddist: f64,
}

impl From<[f64; XX_SLOTS]> for PlanetEphData {
    fn from(xx: [f64; XX_SLOTS]) -> Self {
        Self {
            lon: xx[0],
            lat: xx[1],
            dist: xx[2],
            spdlon: xx[3],
            spdlat: xx[4],
            spddist: xx[5],
        }
    }
}

impl From<PlanetEphData> for [f64; XX_SLOTS] {
    fn from(d: PlanetEphData) -> Self {
        [d.lon, d.lat, d.dist, d.spdlon, d.spdlat, d.spddist]
    }
}

/// Successful position computation with the engine's diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub data: PlanetEphData,
    /// Flags the engine actually applied (may differ from the request, e.g.
    /// after falling back to the Moshier ephemeris)
    pub flag: Flag,
    /// Message the engine wrote on success, if any
    pub warning: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, offset_of, size_of};

    #[test]
    fn test_house_system_codes() {
        let expected = [
            (HouseSystem::Equal, 'A'),
            (HouseSystem::Alcabitius, 'B'),
            (HouseSystem::Campanus, 'C'),
            (HouseSystem::EqualMC, 'D'),
            (HouseSystem::Carter, 'F'),
            (HouseSystem::Azimuth, 'H'),
            (HouseSystem::Sunshine, 'I'),
            (HouseSystem::SunshineAlt, 'i'),
            (HouseSystem::Koch, 'K'),
            (HouseSystem::PullenSDelta, 'L'),
            (HouseSystem::Morinus, 'M'),
            (HouseSystem::EqualAries, 'N'),
            (HouseSystem::Porphyry, 'O'),
            (HouseSystem::Placidus, 'P'),
            (HouseSystem::PullenSRatio, 'Q'),
            (HouseSystem::Regiomontanus, 'R'),
            (HouseSystem::Sripati, 'S'),
            (HouseSystem::PolichPage, 'T'),
            (HouseSystem::KrusinskiPisaGoelzer, 'U'),
            (HouseSystem::EqualVehlow, 'V'),
            (HouseSystem::WholeSign, 'W'),
            (HouseSystem::ARSMeridian, 'X'),
            (HouseSystem::APC, 'Y'),
        ];

        assert_eq!(expected.len(), HouseSystem::ALL.len());
        for (sys, code) in expected {
            assert_eq!(sys.code(), code, "code mismatch for {:?}", sys);
            assert_eq!(HouseSystem::from_code(code), Some(sys));
        }
    }

    #[test]
    fn test_house_system_unmapped_codes() {
        assert_eq!(HouseSystem::from_code('E'), Some(HouseSystem::Equal));
        assert_eq!(HouseSystem::from_code('G'), None);
        assert_eq!(HouseSystem::from_code('J'), None);
        assert_eq!(HouseSystem::from_code('Z'), None);
    }

    #[test]
    fn test_house_system_from_str() {
        assert_eq!("placidus".parse::<HouseSystem>(), Ok(HouseSystem::Placidus));
        assert_eq!("Whole_Sign".parse::<HouseSystem>(), Ok(HouseSystem::WholeSign));
        assert_eq!("K".parse::<HouseSystem>(), Ok(HouseSystem::Koch));
        assert!("gauquelin".parse::<HouseSystem>().is_err());
        assert!("G".parse::<HouseSystem>().is_err());

        for sys in HouseSystem::ALL {
            assert_eq!(sys.to_string().parse::<HouseSystem>(), Ok(sys));
        }
    }

    #[test]
    fn test_house_system_serde_matches_display() {
        for sys in HouseSystem::ALL {
            let json = serde_json::to_string(&sys).unwrap();
            assert_eq!(json, format!("\"{}\"", sys));
        }
    }

    #[test]
    fn test_house_cusp_flag_values() {
        assert_eq!(HouseCuspFlag::Tropical.bits(), 0);
        assert_eq!(HouseCuspFlag::Sidereal.bits(), 65536);
        assert_eq!(HouseCuspFlag::Radians.bits(), 8192);
        assert_eq!(HouseCuspFlag::Sidereal.bits(), Flag::SIDEREAL.bits());
        assert_eq!(HouseCuspFlag::Radians.bits(), Flag::RADIANS.bits());
    }

    #[cfg(feature = "swisseph")]
    #[test]
    fn test_house_cusp_flag_matches_engine_bits() {
        assert_eq!(HouseCuspFlag::Sidereal.bits(), swisseph_sys::SEFLG_SIDEREAL);
        assert_eq!(HouseCuspFlag::Radians.bits(), swisseph_sys::SEFLG_RADIANS);
    }

    #[test]
    fn test_cusps_accessors() {
        let mut raw = [0.0; CUSP_SLOTS];
        for (i, slot) in raw.iter_mut().enumerate() {
            *slot = i as f64 * 30.0;
        }
        let cusps = HouseCusps(raw);

        assert_eq!(cusps.cusp(0), None);
        assert_eq!(cusps.cusp(1), Some(30.0));
        assert_eq!(cusps.cusp(12), Some(360.0));
        assert_eq!(cusps.cusp(13), None);
        assert_eq!(cusps.iter().count(), 12);
        assert_eq!(cusps.iter().next(), Some(30.0));
    }

    #[test]
    fn test_angles_layout() {
        assert_eq!(size_of::<Angles>(), 8 * size_of::<f64>());
        assert_eq!(align_of::<Angles>(), align_of::<f64>());
        assert_eq!(offset_of!(Angles, ac), 0);
        assert_eq!(offset_of!(Angles, mc), 8);
        assert_eq!(offset_of!(Angles, armc), 16);
        assert_eq!(offset_of!(Angles, vertex), 24);
        assert_eq!(offset_of!(Angles, equasc), 32);
        assert_eq!(offset_of!(Angles, coasc1), 40);
        assert_eq!(offset_of!(Angles, coasc2), 48);
        assert_eq!(offset_of!(Angles, polasc), 56);
    }

    #[test]
    fn test_angles_slot_order() {
        let slots = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let angles = Angles::from_slots(&slots);
        assert_eq!(angles.ac, 1.0);
        assert_eq!(angles.armc, 3.0);
        assert_eq!(angles.polasc, 8.0);

        let back = angles.to_slots();
        assert_eq!(&back[..8], &slots[..8]);
    }

    #[test]
    fn test_planet_eph_data_layout() {
        assert_eq!(size_of::<PlanetEphData>(), 6 * size_of::<f64>());
        assert_eq!(offset_of!(PlanetEphData, lon), 0);
        assert_eq!(offset_of!(PlanetEphData, lat), 8);
        assert_eq!(offset_of!(PlanetEphData, dist), 16);
        assert_eq!(offset_of!(PlanetEphData, spdlon), 24);
        assert_eq!(offset_of!(PlanetEphData, spdlat), 32);
        assert_eq!(offset_of!(PlanetEphData, spddist), 40);
    }

    #[test]
    fn test_planet_eph_data_slot_order() {
        let data = PlanetEphData::from([280.0, 0.1, 0.98, 1.01, 0.0, -0.0001]);
        assert_eq!(data.lon, 280.0);
        assert_eq!(data.dist, 0.98);
        assert_eq!(data.spddist, -0.0001);
        let xx: [f64; XX_SLOTS] = data.into();
        assert_eq!(xx, [280.0, 0.1, 0.98, 1.01, 0.0, -0.0001]);
    }

    #[test]
    fn test_house_cusps_layout() {
        assert_eq!(size_of::<HouseCusps>(), CUSP_SLOTS * size_of::<f64>());
    }

    #[test]
    fn test_calc_opts_for_body() {
        let opts = CalcOpts::for_body(2451545.0, PlanetaryBody::Chiron, Flag::SPEED);
        assert_eq!(opts.id, 15);
        assert_eq!(opts.flag, Flag::SPEED);
    }

    #[test]
    fn test_houses_opts_default_flag_from_json() {
        let opts: HousesOpts = serde_json::from_str(
            r#"{"jd_ut": 2451545.0, "geolat": 51.5, "geolon": 0.0, "hsys": "placidus"}"#,
        )
        .unwrap();
        assert_eq!(opts.flag, HouseCuspFlag::Tropical);
        assert_eq!(opts.hsys, HouseSystem::Placidus);
    }
}
