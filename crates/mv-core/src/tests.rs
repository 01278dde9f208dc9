//! Unit tests for mv-core primitives.

#[cfg(test)]
mod ids {
    use crate::LocationId;

    #[test]
    fn index_roundtrip() {
        let id = LocationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(LocationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(LocationId::INVALID.0, u32::MAX);
        assert_eq!(LocationId::default(), LocationId::INVALID);
        assert!(!LocationId::INVALID.is_valid());
        assert!(LocationId(0).is_valid());
    }

    #[test]
    fn try_from_rejects_values_beyond_u32() {
        assert!(LocationId::try_from(u32::MAX as usize + 1).is_err());
        assert_eq!(LocationId::try_from(u32::MAX as usize).unwrap(), LocationId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(LocationId(7).to_string(), "LocationId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Point;

    #[test]
    fn zero_distance() {
        let p = Point::new(300.0, 400.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_triple() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_2(b), 25.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(100.0, 300.0);
        let b = Point::new(217.5, 142.25);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn from_tuple() {
        assert_eq!(Point::from((1.0, 2.0)), Point::new(1.0, 2.0));
        assert_eq!(Point::new(1.0, 2.0).to_array(), [1.0, 2.0]);
    }
}

#[cfg(test)]
mod rng {
    use crate::{TrafficRange, TrafficRng};

    #[test]
    fn factors_within_default_range() {
        let mut rng = TrafficRng::new(7, TrafficRange::DEFAULT);
        for _ in 0..10_000 {
            let f = rng.factor();
            assert!((0.75..=1.25).contains(&f), "factor {f} out of range");
        }
    }

    #[test]
    fn same_seed_same_factors() {
        let mut a = TrafficRng::new(42, TrafficRange::DEFAULT);
        let mut b = TrafficRng::new(42, TrafficRange::DEFAULT);
        for _ in 0..100 {
            assert_eq!(a.factor(), b.factor());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = TrafficRng::new(1, TrafficRange::DEFAULT);
        let mut b = TrafficRng::new(2, TrafficRange::DEFAULT);
        let va: Vec<f64> = (0..16).map(|_| a.factor()).collect();
        let vb: Vec<f64> = (0..16).map(|_| b.factor()).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn degenerate_range_is_constant() {
        let range = TrafficRange::new(1.0, 1.0).unwrap();
        let mut rng = TrafficRng::new(3, range);
        assert_eq!(rng.factor(), 1.0);
        assert_eq!(rng.factor(), 1.0);
    }

    #[test]
    fn entropy_seeded_respects_range() {
        let mut rng = TrafficRng::from_seed_opt(None, TrafficRange::DEFAULT);
        let f = rng.factor();
        assert!(TrafficRange::DEFAULT.contains(f));
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, MapConfig, TrafficRange};

    #[test]
    fn defaults() {
        let c = MapConfig::default();
        assert_eq!(c.seed, None);
        assert_eq!(c.traffic, TrafficRange { min: 0.75, max: 1.25 });
        assert_eq!(c.nearby_radius, 100.0);
        assert_eq!(c.select_tolerance, 10.0);
        assert!(!c.strict_neighbors);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn seeded_keeps_other_defaults() {
        let c = MapConfig::seeded(9);
        assert_eq!(c.seed, Some(9));
        assert_eq!(c.traffic, TrafficRange::DEFAULT);
    }

    #[test]
    fn inverted_range_rejected() {
        assert!(matches!(TrafficRange::new(1.25, 0.75), Err(CoreError::Config(_))));
    }

    #[test]
    fn non_positive_range_rejected() {
        assert!(TrafficRange::new(0.0, 1.0).is_err());
        assert!(TrafficRange::new(-1.0, 1.0).is_err());
        assert!(TrafficRange::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn negative_radius_rejected() {
        let c = MapConfig { nearby_radius: -1.0, ..MapConfig::default() };
        assert!(c.validate().is_err());
        let c = MapConfig { select_tolerance: f64::NAN, ..MapConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn range_contains_is_inclusive() {
        let r = TrafficRange::DEFAULT;
        assert!(r.contains(0.75));
        assert!(r.contains(1.25));
        assert!(!r.contains(1.2500001));
    }
}
