//! Piecewise-linear breakpoint tables.
//!
//! A table is an ordered list of `(input, output)` stops. Sampling between
//! two stops interpolates linearly; outside the table the first/last output
//! holds. One table drives one visual property, so a section that fades,
//! lifts and scales keeps three independent tables.

pub type Stops = [(f64, f64)];

/// Sample `input` through the stops. Inputs are expected in ascending order;
/// an empty table yields 0.
pub fn sample(stops: &Stops, input: f64) -> f64 {
    let Some(&(first_in, first_out)) = stops.first() else {
        return 0.0;
    };
    if input <= first_in {
        return first_out;
    }
    let &(last_in, last_out) = stops.last().unwrap();
    if input >= last_in {
        return last_out;
    }
    for pair in stops.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if input <= x1 {
            if x1 == x0 {
                return y1;
            }
            let t = (input - x0) / (x1 - x0);
            return y0 + (y1 - y0) * t;
        }
    }
    last_out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_interpolates_linearly() {
        let stops = [(0.0, 0.0), (0.3, 100.0)];
        assert!((sample(&stops, 0.15) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn clamps_to_edge_outputs() {
        let stops = [(0.2, 10.0), (0.8, 90.0)];
        assert_eq!(sample(&stops, -1.0), 10.0);
        assert_eq!(sample(&stops, 0.0), 10.0);
        assert_eq!(sample(&stops, 1.0), 90.0);
        assert_eq!(sample(&stops, 5.0), 90.0);
    }

    #[test]
    fn monotonic_between_breakpoints() {
        let stops = [(0.0, 0.0), (0.3, 100.0)];
        let mut last = f64::MIN;
        for i in 0..=30 {
            let x = i as f64 / 100.0;
            let y = sample(&stops, x);
            assert!(y >= last, "rising table must not dip at {x}");
            last = y;
        }
    }

    #[test]
    fn descending_tables_fall() {
        // Hero fade: fully opaque at rest, gone by 25% scroll.
        let stops = [(0.0, 1.0), (0.25, 0.0)];
        assert_eq!(sample(&stops, 0.0), 1.0);
        assert!((sample(&stops, 0.125) - 0.5).abs() < 1e-9);
        assert_eq!(sample(&stops, 0.9), 0.0);
    }

    #[test]
    fn multi_segment_tables_pick_the_right_segment() {
        let stops = [(0.0, 0.0), (0.5, 10.0), (1.0, 30.0)];
        assert!((sample(&stops, 0.25) - 5.0).abs() < 1e-9);
        assert!((sample(&stops, 0.75) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn empty_table_rests_at_zero() {
        assert_eq!(sample(&[], 0.4), 0.0);
    }
}
