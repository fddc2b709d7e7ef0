//! Deterministic fallback classifier used where no authoritative polygon
//! covers a point.
//!
//! Nearness is a rectangular test on each axis independently, not a
//! great-circle distance. It over-reaches near the poles and does not wrap
//! at the antimeridian; both are kept as-is so results stay comparable with
//! previously cached heuristic answers.

use crate::coordinate::Coordinate;
use crate::resolution::UNKNOWN_REGION;
use crate::risk_tier::RiskTier;

/// A known flood-prone location and the square window around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskCenter {
    pub name: &'static str,
    pub latitude_e6: i64,
    pub longitude_e6: i64,
    pub radius_e6: i64,
    pub tier: RiskTier,
}

impl RiskCenter {
    pub fn matches(&self, point: &Coordinate) -> bool {
        (point.latitude_e6() - self.latitude_e6).abs() <= self.radius_e6
            && (point.longitude_e6() - self.longitude_e6).abs() <= self.radius_e6
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub min_latitude_e6: i64,
    pub max_latitude_e6: i64,
    pub min_longitude_e6: i64,
    pub max_longitude_e6: i64,
}

impl Region {
    pub fn contains(&self, point: &Coordinate) -> bool {
        (self.min_latitude_e6..=self.max_latitude_e6).contains(&point.latitude_e6())
            && (self.min_longitude_e6..=self.max_longitude_e6).contains(&point.longitude_e6())
    }
}

const fn center(
    name: &'static str,
    latitude_e6: i64,
    longitude_e6: i64,
    radius_e6: i64,
    tier: RiskTier,
) -> RiskCenter {
    RiskCenter {
        name,
        latitude_e6,
        longitude_e6,
        radius_e6,
        tier,
    }
}

/// Evaluated in order; the first matching center decides the tier.
pub static RISK_CENTERS: &[RiskCenter] = &[
    center("Auckland CBD", -36_840_000, 174_760_000, 20_000, RiskTier::Medium),
    center("West Auckland", -36_850_000, 174_550_000, 100_000, RiskTier::Medium),
    center("Westport", -41_750_000, 171_600_000, 100_000, RiskTier::High),
    center("Thames", -37_140_000, 175_540_000, 150_000, RiskTier::High),
    center("Lower Hutt", -41_210_000, 174_910_000, 80_000, RiskTier::High),
    center("Edgecumbe", -37_980_000, 176_830_000, 100_000, RiskTier::High),
    center("Nelson", -41_270_000, 173_280_000, 150_000, RiskTier::Medium),
    center("Whanganui", -39_930_000, 175_050_000, 100_000, RiskTier::Medium),
    center("Gisborne", -38_660_000, 178_020_000, 120_000, RiskTier::Medium),
];

pub static REGIONS: &[Region] = &[Region {
    name: "Auckland",
    min_latitude_e6: -37_100_000,
    max_latitude_e6: -36_600_000,
    min_longitude_e6: 174_500_000,
    max_longitude_e6: 175_000_000,
}];

/// First matching center in table order, if any.
pub fn matching_center(point: &Coordinate) -> Option<&'static RiskCenter> {
    RISK_CENTERS.iter().find(|c| c.matches(point))
}

pub fn classify(point: &Coordinate) -> RiskTier {
    // Away from every center, inside a known region or not, the answer is Low
    matching_center(point).map_or(RiskTier::Low, |center| center.tier)
}

pub fn region_of(point: &Coordinate) -> &'static str {
    REGIONS
        .iter()
        .find(|r| r.contains(point))
        .map(|r| r.name)
        .unwrap_or(UNKNOWN_REGION)
}
