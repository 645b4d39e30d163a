//! Astronomical timing search engine: planetary hours, retrograde
//! stations, angular aspects, and sunrise/sunset solving.
//!
//! This crate provides:
//! - Planetary hour division of the solar day (12 unequal day hours plus
//!   12 unequal night hours, rulers from the Chaldean cycle)
//! - Retrograde station scanner with sub-day bisection refinement, and
//!   retrograde period lookup
//! - Angular aspect matcher between body longitudes and chart angles
//! - Sunrise/sunset/next-sunrise solver over any ephemeris provider
//!
//! All searches run against the [`astraea_core::EphemerisProvider`] trait,
//! so tests and benchmarks substitute synthetic providers freely.

pub mod aspects;
pub mod aspects_types;
pub mod error;
pub mod hours;
pub mod hours_types;
pub mod riseset;
pub mod stations;
pub mod stations_types;

pub use aspects::match_aspects;
pub use aspects_types::{
    AngularAspect, AngularPoint, AspectDef, AspectKind, AspectTable, ChartAngle, chart_axes,
};
pub use error::SearchError;
pub use hours::{divide_from_sun_times, planetary_hours_for_date};
pub use hours_types::{
    DAY_HOURS, HOURS_PER_DAY, HourTables, PlanetaryHour, PlanetaryHoursResult,
};
pub use riseset::{
    RISE_SET_WINDOW_DAYS, SunTimes, approximate_local_midnight, approximate_local_noon,
    solve_sun_times,
};
pub use stations::{
    current_retrograde_period, refine_station, scan_stations, search_stations,
};
pub use stations_types::{
    RetrogradePeriod, RetrogradeStation, StationScanConfig, StationType,
};
