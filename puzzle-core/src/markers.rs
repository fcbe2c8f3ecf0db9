use serde::{Deserialize, Serialize};

use crate::rng::SplitMix64;

/// GeoJSON point geometry. Coordinates are `[lng, lat]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub type_: String,
    pub coordinates: [f64; 2],
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub type_: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub type_: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn point(lng: f64, lat: f64) -> Feature {
    Feature {
        type_: "Feature".to_string(),
        geometry: Geometry {
            type_: "Point".to_string(),
            coordinates: [lng, lat],
        },
        properties: None,
    }
}

/// `count` points scattered over the one-degree square north-east of
/// `center` (`[lat, lng]`).
pub fn random_points(center: [f64; 2], count: usize, rng: &mut SplitMix64) -> FeatureCollection {
    let [lat, lng] = center;
    let features = (0..count)
        .map(|_| {
            let dx = rng.next_unit();
            let dy = rng.next_unit();
            point(lng + dx, lat + dy)
        })
        .collect();
    FeatureCollection {
        type_: "FeatureCollection".to_string(),
        features,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_stay_in_square() {
        let mut rng = SplitMix64::new(10);
        let fc = random_points([39.4, -78.0], 1000, &mut rng);
        assert_eq!(fc.features.len(), 1000);
        for f in &fc.features {
            let [lng, lat] = f.geometry.coordinates;
            assert!((-78.0..-77.0).contains(&lng));
            assert!((39.4..40.4).contains(&lat));
        }
    }

    #[test]
    fn serializes_as_geojson() {
        let mut rng = SplitMix64::new(1);
        let fc = random_points([0.0, 0.0], 2, &mut rng);
        let v: serde_json::Value = serde_json::from_str(&fc.to_json().unwrap()).unwrap();
        assert_eq!(v["type"], "FeatureCollection");
        assert_eq!(v["features"].as_array().map(Vec::len), Some(2));
        assert_eq!(v["features"][0]["type"], "Feature");
        assert_eq!(v["features"][0]["geometry"]["type"], "Point");
        assert!(v["features"][0]["properties"].is_null());
    }

    #[test]
    fn zero_points_is_empty_collection() {
        let fc = random_points([1.0, 2.0], 0, &mut SplitMix64::new(0));
        assert!(fc.features.is_empty());
    }
}
