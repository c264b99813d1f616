//! Coarse geographic classification of impact coordinates.
//!
//! A fixed, ordered list of latitude/longitude bounding boxes covers the
//! major landmasses; the first matching box wins, so more specific boxes
//! are listed ahead of the broad ones they overlap (Greenland before
//! Canada, India before China, Kazakhstan before Russia). Points outside
//! every box fall through to an ocean-basin heuristic over longitude bands.
//!
//! This is a display-grade classifier, nothing more. Boxes ignore coastline
//! shape entirely, and several deliberately cover whole subcontinents.

/// One land bounding box: `[lat_min, lat_max] × [lon_min, lon_max]`.
struct LandBox {
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
    country: Option<&'static str>,
    region: &'static str,
}

impl LandBox {
    const fn new(
        lat_min: f64,
        lat_max: f64,
        lon_min: f64,
        lon_max: f64,
        country: Option<&'static str>,
        region: &'static str,
    ) -> Self {
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
            country,
            region,
        }
    }

    fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.lat_min
            && latitude <= self.lat_max
            && longitude >= self.lon_min
            && longitude <= self.lon_max
    }
}

/// Ordered landmass boxes; first match wins.
static LAND_BOXES: &[LandBox] = &[
    LandBox::new(60.0, 84.0, -73.0, -12.0, Some("Greenland"), "North America"),
    LandBox::new(49.0, 72.0, -141.0, -52.0, Some("Canada"), "North America"),
    LandBox::new(24.0, 49.0, -125.0, -66.0, Some("United States"), "North America"),
    LandBox::new(7.0, 24.0, -118.0, -77.0, Some("Mexico"), "North America"),
    LandBox::new(-34.0, 5.0, -74.0, -34.0, Some("Brazil"), "South America"),
    LandBox::new(-55.0, -21.0, -73.0, -53.0, Some("Argentina"), "South America"),
    LandBox::new(15.0, 37.0, -17.0, 35.0, Some("Algeria"), "Africa"),
    LandBox::new(-35.0, 15.0, 10.0, 42.0, None, "Africa"),
    LandBox::new(36.0, 60.0, -10.0, 30.0, None, "Europe"),
    LandBox::new(37.0, 55.0, 46.0, 87.0, Some("Kazakhstan"), "Asia"),
    LandBox::new(50.0, 77.0, 30.0, 180.0, Some("Russia"), "Asia"),
    LandBox::new(8.0, 33.0, 68.0, 89.0, Some("India"), "Asia"),
    LandBox::new(18.0, 50.0, 73.0, 135.0, Some("China"), "Asia"),
    LandBox::new(12.0, 37.0, 35.0, 60.0, Some("Saudi Arabia"), "Asia"),
    LandBox::new(-10.0, 18.0, 95.0, 140.0, Some("Indonesia"), "Asia"),
    LandBox::new(-43.0, -11.0, 113.0, 154.0, Some("Australia"), "Oceania"),
    LandBox::new(-90.0, -60.0, -180.0, 180.0, None, "Antarctica"),
];

/// Result of classifying a coordinate pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub country: Option<&'static str>,
    pub region: &'static str,
    pub is_land: bool,
}

/// Classify a normalized coordinate pair (latitude in [-90, 90], longitude
/// in [-180, 180]) against the land boxes, then the ocean basins.
pub fn classify(latitude: f64, longitude: f64) -> Classification {
    for land_box in LAND_BOXES {
        if land_box.contains(latitude, longitude) {
            return Classification {
                country: land_box.country,
                region: land_box.region,
                is_land: true,
            };
        }
    }
    ocean_basin(latitude, longitude)
}

/// Ocean-basin heuristic for points outside every land box.
///
/// Longitude bands approximate the Pacific/Atlantic/Indian split; polar
/// latitudes override the bands. Anything left over is an unmapped scrap of
/// land between boxes.
fn ocean_basin(latitude: f64, longitude: f64) -> Classification {
    let region = if latitude > 66.0 {
        "Arctic Ocean"
    } else if latitude < -55.0 {
        "Southern Ocean"
    } else if longitude >= 135.0 || longitude <= -85.0 {
        "Pacific Ocean"
    } else if longitude <= 25.0 {
        "Atlantic Ocean"
    } else if latitude < 25.0 {
        "Indian Ocean"
    } else {
        return Classification {
            country: None,
            region: "Unknown Land",
            is_land: true,
        };
    };

    Classification {
        country: None,
        region,
        is_land: false,
    }
}
