// src/services/map_service.rs
// DOCUMENTATION: Map markers for the national viewport
// PURPOSE: Export located sites and accommodations as GeoJSON points

use crate::db::{DocumentStore, EntityRepository};
use crate::errors::AdminError;
use crate::models::{Accommodation, Coordinates, Site};
use geo_types::Point;
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject};
use serde_json::json;

/// Western edge of the viewport (degrees longitude)
const VIEWPORT_WEST: f64 = -15.0;
/// Northern edge of the viewport (degrees latitude)
const VIEWPORT_NORTH: f64 = 15.0;
/// Viewport span in degrees, both axes
const VIEWPORT_SPAN: f64 = 10.0;

/// Position of a marker as percentages of the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPosition {
    pub left_percent: f64,
    pub top_percent: f64,
}

/// Linear projection; no clamping, so points outside the viewport fall outside 0..100
pub fn project(coordinates: Coordinates) -> MarkerPosition {
    MarkerPosition {
        left_percent: (coordinates.lng - VIEWPORT_WEST) / VIEWPORT_SPAN * 100.0,
        top_percent: (VIEWPORT_NORTH - coordinates.lat) / VIEWPORT_SPAN * 100.0,
    }
}

fn marker(
    id: &str,
    kind: &str,
    name: &str,
    category: Option<&str>,
    coordinates: Coordinates,
) -> Feature {
    // GeoJSON positions are (lng, lat)
    let point = Point::new(coordinates.lng, coordinates.lat);
    let position = project(coordinates);

    let mut properties = JsonObject::new();
    properties.insert("kind".to_string(), json!(kind));
    properties.insert("name".to_string(), json!(name));
    properties.insert("category".to_string(), json!(category));
    properties.insert("leftPercent".to_string(), json!(position.left_percent));
    properties.insert("topPercent".to_string(), json!(position.top_percent));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geojson::Value::from(&point))),
        id: Some(Id::String(id.to_string())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Build the collection from already-loaded records
pub fn build_markers(sites: &[Site], accommodations: &[Accommodation]) -> FeatureCollection {
    let site_features = sites.iter().filter_map(|site| {
        site.coordinates.map(|coordinates| {
            marker(
                &site.id,
                "site",
                &site.name,
                site.category.as_deref(),
                coordinates,
            )
        })
    });

    let accommodation_features = accommodations
        .iter()
        // (0, 0) is the unset default
        .filter(|a| a.coordinates != Coordinates::default())
        .map(|a| marker(&a.id, "accommodation", &a.name, Some(&a.kind), a.coordinates));

    FeatureCollection {
        bbox: None,
        features: site_features.chain(accommodation_features).collect(),
        foreign_members: None,
    }
}

pub struct MapService;

impl MapService {
    pub async fn markers(store: &dyn DocumentStore) -> Result<FeatureCollection, AdminError> {
        let (sites, accommodations) = tokio::try_join!(
            EntityRepository::list::<Site>(store),
            EntityRepository::list::<Accommodation>(store),
        )?;

        let collection = build_markers(&sites, &accommodations);
        log::debug!("Map markers: {} features", collection.features.len());

        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_corners() {
        let north_west = project(Coordinates {
            lat: 15.0,
            lng: -15.0,
        });
        assert_eq!(north_west.left_percent, 0.0);
        assert_eq!(north_west.top_percent, 0.0);

        let south_east = project(Coordinates { lat: 5.0, lng: -5.0 });
        assert_eq!(south_east.left_percent, 100.0);
        assert_eq!(south_east.top_percent, 100.0);
    }

    #[test]
    fn test_projection_of_conakry() {
        let position = project(Coordinates {
            lat: 9.5,
            lng: -13.7,
        });
        assert!((position.left_percent - 13.0).abs() < 1e-9);
        assert!((position.top_percent - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_only_located_records_become_markers() {
        let sites = vec![
            Site {
                id: "s1".into(),
                name: "Chutes de Kinkon".into(),
                category: Some("Nature".into()),
                coordinates: Some(Coordinates {
                    lat: 10.9,
                    lng: -12.3,
                }),
                ..Site::default()
            },
            Site {
                id: "s2".into(),
                name: "Sans position".into(),
                ..Site::default()
            },
        ];
        let accommodations = vec![
            Accommodation {
                id: "a1".into(),
                name: "Hôtel Kaloum".into(),
                kind: "Hôtel".into(),
                coordinates: Coordinates {
                    lat: 9.51,
                    lng: -13.71,
                },
                ..Accommodation::default()
            },
            Accommodation {
                id: "a2".into(),
                ..Accommodation::default()
            },
        ];

        let collection = build_markers(&sites, &accommodations);
        assert_eq!(collection.features.len(), 2);

        let first = &collection.features[0];
        assert_eq!(first.id, Some(Id::String("s1".into())));
        assert_eq!(
            first.property("kind").and_then(|v| v.as_str()),
            Some("site")
        );
        match first.geometry.as_ref().map(|g| &g.value) {
            Some(geojson::Value::Point(position)) => assert_eq!(position, &vec![-12.3, 10.9]),
            other => panic!("unexpected geometry: {:?}", other),
        }

        assert_eq!(
            collection.features[1]
                .property("category")
                .and_then(|v| v.as_str()),
            Some("Hôtel")
        );
    }
}
