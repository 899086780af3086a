use bullet_chart::core::BulletScale;
use proptest::prelude::*;

proptest! {
    #[test]
    fn mapped_values_stay_inside_pixel_range(
        domain_min in 0.0f64..10_000.0,
        span in 0.001f64..10_000.0,
        pixel_length in 0.0f64..4_000.0,
        value in -50_000.0f64..50_000.0,
        vertical in any::<bool>()
    ) {
        let scale = BulletScale::new(domain_min, domain_min + span, pixel_length, vertical);
        let px = scale.map(value);

        prop_assert!(px.is_finite());
        prop_assert!(px >= -1e-9);
        prop_assert!(px <= pixel_length + 1e-9);
    }

    #[test]
    fn domain_endpoints_hit_range_endpoints(
        domain_min in 0.0f64..10_000.0,
        span in 0.001f64..10_000.0,
        pixel_length in 1.0f64..4_000.0,
        vertical in any::<bool>()
    ) {
        let scale = BulletScale::new(domain_min, domain_min + span, pixel_length, vertical);
        let (range_start, range_end) = scale.range();

        prop_assert!((scale.map(domain_min) - range_start).abs() <= 1e-9);
        prop_assert!((scale.map(domain_min + span) - range_end).abs() <= 1e-4);
    }

    #[test]
    fn mapping_is_monotonic_in_growth_direction(
        domain_min in 0.0f64..1_000.0,
        span in 1.0f64..1_000.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
        vertical in any::<bool>()
    ) {
        let scale = BulletScale::new(domain_min, domain_min + span, 600.0, vertical);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let px_low = scale.map(domain_min + span * low);
        let px_high = scale.map(domain_min + span * high);

        if vertical {
            prop_assert!(px_low >= px_high);
        } else {
            prop_assert!(px_low <= px_high);
        }
    }

    #[test]
    fn ticks_are_inside_domain(
        domain_min in 0.0f64..10_000.0,
        span in 0.01f64..10_000.0,
        count in 2usize..10
    ) {
        let domain_max = domain_min + span;
        let scale = BulletScale::new(domain_min, domain_max, 500.0, false);
        let tolerance = span * 1e-9 + 1e-9;

        for tick in scale.ticks(count) {
            prop_assert!(tick >= domain_min - tolerance);
            prop_assert!(tick <= domain_max + tolerance);
        }
    }
}
