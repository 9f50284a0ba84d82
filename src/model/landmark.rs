use std::collections::HashMap;

/// Kind of point of interest around the development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkKind {
    Port,
    TrainStation,
    BrandOffice,
}

impl LandmarkKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Port => "Port",
            Self::TrainStation => "Train station",
            Self::BrandOffice => "Sales office",
        }
    }
}

/// One point of interest near the site.
///
/// Configuration data consumed by the location view; not derived from any
/// source file.
#[derive(Debug, Clone, Copy)]
pub struct Landmark {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: LandmarkKind,
    pub lat: f64,
    pub lon: f64,
    /// Road distance from the site entrance, km.
    pub distance_km: f64,
}

const LANDMARKS: &[Landmark] = &[
    Landmark {
        id: "ambarli",
        name: "Ambarlı Limanı",
        kind: LandmarkKind::Port,
        lat: 40.9637,
        lon: 28.6906,
        distance_km: 7.2,
    },
    Landmark {
        id: "tekirdag-port",
        name: "Tekirdağ Limanı",
        kind: LandmarkKind::Port,
        lat: 40.9712,
        lon: 27.5240,
        distance_km: 96.0,
    },
    Landmark {
        id: "halkali",
        name: "Halkalı Garı",
        kind: LandmarkKind::TrainStation,
        lat: 41.0342,
        lon: 28.7692,
        distance_km: 14.5,
    },
    Landmark {
        id: "ispartakule",
        name: "Ispartakule İstasyonu",
        kind: LandmarkKind::TrainStation,
        lat: 41.0578,
        lon: 28.6734,
        distance_km: 9.8,
    },
    Landmark {
        id: "cerkezkoy",
        name: "Çerkezköy Garı",
        kind: LandmarkKind::TrainStation,
        lat: 41.2853,
        lon: 27.9979,
        distance_km: 62.0,
    },
    Landmark {
        id: "site-office",
        name: "Saha Satış Ofisi",
        kind: LandmarkKind::BrandOffice,
        lat: 41.0021,
        lon: 28.6410,
        distance_km: 0.3,
    },
    Landmark {
        id: "maslak-office",
        name: "Merkez Satış Ofisi (Maslak)",
        kind: LandmarkKind::BrandOffice,
        lat: 41.1114,
        lon: 29.0214,
        distance_km: 38.0,
    },
    Landmark {
        id: "atasehir-office",
        name: "Anadolu Satış Ofisi (Ataşehir)",
        kind: LandmarkKind::BrandOffice,
        lat: 40.9923,
        lon: 29.1244,
        distance_km: 54.0,
    },
];

/// All configured landmarks, in display order.
#[must_use]
pub fn landmarks() -> &'static [Landmark] {
    LANDMARKS
}

/// Landmark table keyed by id.
#[must_use]
pub fn landmarks_by_id() -> HashMap<&'static str, &'static Landmark> {
    LANDMARKS.iter().map(|l| (l.id, l)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let by_id = landmarks_by_id();
        assert_eq!(by_id.len(), landmarks().len());
    }

    #[test]
    fn by_id_resolves_records() {
        let by_id = landmarks_by_id();
        let port = by_id.get("ambarli").expect("ambarli is configured");
        assert_eq!(port.kind, LandmarkKind::Port);
    }
}
