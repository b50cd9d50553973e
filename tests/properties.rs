//! Formatting and polyline laws.

use proptest::prelude::*;

use route_planner::format::format_duration;
use route_planner::polyline::{Coordinate, DEFAULT_PRECISION, decode_path, encode_path};

/// Reads a rendered duration back as (days, hours, minutes, units shown).
fn parse_duration(text: &str) -> (u64, u64, u64, usize) {
    let mut parts = (0, 0, 0);
    let units: Vec<&str> = text.split(' ').collect();
    for unit in &units {
        let (number, suffix) = unit.split_at(unit.len() - 1);
        let value: u64 = number.parse().unwrap();
        match suffix {
            "d" => parts.0 = value,
            "h" => parts.1 = value,
            "m" => parts.2 = value,
            other => panic!("unexpected unit {:?} in {:?}", other, text),
        }
    }
    (parts.0, parts.1, parts.2, units.len())
}

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..90.0, -180.0f64..180.0).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

proptest! {
    #[test]
    fn duration_omits_exactly_the_zero_leading_units(seconds in 0u64..10_000_000) {
        let text = format_duration(seconds as f64);
        let (days, hours, minutes, shown) = parse_duration(&text);

        prop_assert_eq!(days, seconds / 86_400);
        prop_assert_eq!(hours, (seconds / 3_600) % 24);
        prop_assert_eq!(minutes, (seconds / 60) % 60);

        let expected_units = if seconds >= 86_400 {
            3
        } else if seconds >= 3_600 {
            2
        } else {
            1
        };
        prop_assert_eq!(shown, expected_units);
    }

    #[test]
    fn duration_is_monotonic(a in 0u64..10_000_000, b in 0u64..10_000_000) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let magnitude = |seconds: u64| {
            let (d, h, m, _) = parse_duration(&format_duration(seconds as f64));
            d * 1_440 + h * 60 + m
        };
        prop_assert!(magnitude(low) <= magnitude(high));
    }

    #[test]
    fn polyline_round_trip(points in prop::collection::vec(coordinate(), 0..50)) {
        let encoded = encode_path(&points, DEFAULT_PRECISION).unwrap();
        let decoded = decode_path(&encoded, DEFAULT_PRECISION).unwrap();

        prop_assert_eq!(decoded.len(), points.len());
        for (original, restored) in points.iter().zip(&decoded) {
            prop_assert!((original.lat - restored.lat).abs() <= 1e-5);
            prop_assert!((original.lon - restored.lon).abs() <= 1e-5);
        }
    }

    #[test]
    fn truncated_polyline_never_decodes(points in prop::collection::vec(coordinate(), 1..10)) {
        let encoded = encode_path(&points, DEFAULT_PRECISION).unwrap();
        // Dropping the final byte always leaves an incomplete value.
        let truncated = &encoded[..encoded.len() - 1];
        prop_assert!(decode_path(truncated, DEFAULT_PRECISION).is_err());
    }
}
