use geo::{Distance, Haversine, Point};

use crate::artifacts::model_artifacts::ModelArtifacts;

/// Hub cities served by the fleet, as (name, latitude, longitude).
const KNOWN_CITIES: [(&str, f64, f64); 12] = [
    ("Mumbai", 19.0760, 72.8777),
    ("Delhi", 28.7041, 77.1025),
    ("Bangalore", 12.9716, 77.5946),
    ("Chennai", 13.0827, 80.2707),
    ("Kolkata", 22.5726, 88.3639),
    ("Hyderabad", 17.3850, 78.4867),
    ("Pune", 18.5204, 73.8567),
    ("Ahmedabad", 23.0225, 72.5714),
    ("Singapore", 1.3521, 103.8198),
    ("Dubai", 25.2048, 55.2708),
    ("Hong Kong", 22.3193, 114.1694),
    ("Bangkok", 13.7563, 100.5018),
];

pub fn same_location(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

fn builtin_point(city: &str) -> Option<Point> {
    KNOWN_CITIES
        .iter()
        .find(|(name, _, _)| same_location(name, city))
        .map(|&(_, lat, lon)| Point::new(lon, lat))
}

/// Resolves a city to a point. Artifact coordinates take precedence over the built-in table.
pub fn locate(city: &str, artifacts: Option<&ModelArtifacts>) -> Option<Point> {
    artifacts
        .and_then(|artifacts| artifacts.coordinates(city.trim()))
        .map(|[lat, lon]| Point::new(lon, lat))
        .or_else(|| builtin_point(city))
}

/// Great-circle distance between two cities in kilometers, when both are known.
pub fn distance_km(from: &str, to: &str, artifacts: Option<&ModelArtifacts>) -> Option<f64> {
    if same_location(from, to) {
        return Some(0.0);
    }

    let from = locate(from, artifacts)?;
    let to = locate(to, artifacts)?;

    Some(Haversine.distance(from, to) / 1000.0)
}
