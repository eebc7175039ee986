use std::fmt;

/// Geographical latitude in degrees.
///
/// The representation is not range-checked: use [`LatCoord::try_from_deg`]
/// when the input has to be validated and [`LatCoord::is_valid`] to test an
/// existing value. Out-of-range and NaN values are representable and
/// propagate through distance calculations.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn from_deg(deg: f64) -> Self {
        Self(deg)
    }

    pub fn try_from_deg(deg: f64) -> Option<Self> {
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn is_valid(self) -> bool {
        (Self::DEG_MIN..=Self::DEG_MAX).contains(&self.0)
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

/// Geographical longitude in degrees.
///
/// Same representation contract as [`LatCoord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn from_deg(deg: f64) -> Self {
        Self(deg)
    }

    pub fn try_from_deg(deg: f64) -> Option<Self> {
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn is_valid(self) -> bool {
        (Self::DEG_MIN..=Self::DEG_MAX).contains(&self.0)
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical location on the map.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// A distance on the surface of the earth in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}m", self.to_meters())
    }
}

/// Mean earth radius of the spherical-Earth approximation.
const EARTH_RADIUS: Distance = Distance::from_meters(6_371_000.0);

impl MapPoint {
    /// Great-circle distance between two points on the surface of the earth,
    /// calculated with the Haversine formula over a spherical-Earth
    /// approximation.
    ///
    /// Defined for all inputs: out-of-range or NaN coordinates are not
    /// rejected and propagate into the result.
    /// Reference: <https://en.wikipedia.org/wiki/Haversine_formula>
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let half_dlat = (lat2_rad - lat1_rad) / 2.0;
        let half_dlng = (lng2_rad - lng1_rad) / 2.0;

        let a = half_dlat.sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * half_dlng.sin().powi(2);

        Distance::from_meters(2.0 * EARTH_RADIUS.to_meters() * a.sqrt().asin())
    }
}

/// An axis-aligned bounding rectangle on the map.
///
/// Wraparound across the antimeridian is not supported: the south-west
/// corner must be both south and west of the north-east corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn southwest(&self) -> MapPoint {
        self.sw
    }

    pub const fn northeast(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid()
            && self.ne.is_valid()
            && self.sw.lat() <= self.ne.lat()
            && self.sw.lng() <= self.ne.lng()
    }

    /// Both bounds are inclusive on both axes.
    pub fn contains_point(&self, pt: MapPoint) -> bool {
        pt.lat() >= self.sw.lat()
            && pt.lat() <= self.ne.lat()
            && pt.lng() >= self.sw.lng()
            && pt.lng() <= self.ne.lng()
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.sw, self.ne)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_range_checks() {
        assert!(LatCoord::try_from_deg(90.0).is_some());
        assert!(LatCoord::try_from_deg(-90.0).is_some());
        assert!(LatCoord::try_from_deg(90.001).is_none());
        assert!(LatCoord::try_from_deg(f64::NAN).is_none());
        assert!(LngCoord::try_from_deg(180.0).is_some());
        assert!(LngCoord::try_from_deg(-180.001).is_none());
        assert!(!LatCoord::from_deg(91.0).is_valid());
        assert!(!LngCoord::from_deg(f64::NAN).is_valid());
    }

    #[test]
    fn distance_of_a_point_to_itself_is_zero() {
        let p = MapPoint::from_lat_lng_deg(55.7558, 37.6176);
        assert_eq!(MapPoint::distance(p, p).to_meters(), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let p = MapPoint::from_lat_lng_deg(55.7558, 37.6176);
        let q = MapPoint::from_lat_lng_deg(59.9343, 30.3351);
        assert_eq!(MapPoint::distance(p, q), MapPoint::distance(q, p));
    }

    #[test]
    fn distance_between_moscow_and_st_petersburg() {
        let moscow = MapPoint::from_lat_lng_deg(55.7558, 37.6176);
        let st_petersburg = MapPoint::from_lat_lng_deg(59.9343, 30.3351);
        let km = MapPoint::distance(moscow, st_petersburg).to_meters() / 1000.0;
        assert!(km > 630.0 && km < 640.0, "unexpected distance: {km} km");
    }

    #[test]
    fn distance_propagates_nan() {
        let p = MapPoint::from_lat_lng_deg(f64::NAN, 0.0);
        let q = MapPoint::from_lat_lng_deg(0.0, 0.0);
        let d = MapPoint::distance(p, q);
        assert!(d.to_meters().is_nan());
        assert!(!d.is_valid());
        // A NaN distance fails every radius comparison.
        assert!(!(d <= Distance::from_meters(f64::INFINITY)));
    }

    #[test]
    fn bbox_contains_point_with_inclusive_bounds() {
        let bbox = MapBbox::new(
            MapPoint::from_lat_lng_deg(55.70, 37.58),
            MapPoint::from_lat_lng_deg(55.80, 37.64),
        );
        assert!(bbox.is_valid());
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(55.7558, 37.6176)));
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(55.70, 37.58)));
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(55.80, 37.64)));
        assert!(!bbox.contains_point(MapPoint::from_lat_lng_deg(55.0, 37.0)));
    }

    #[test]
    fn bbox_with_switched_corners_is_invalid() {
        let bbox = MapBbox::new(
            MapPoint::from_lat_lng_deg(55.80, 37.64),
            MapPoint::from_lat_lng_deg(55.70, 37.58),
        );
        assert!(!bbox.is_valid());
    }
}
