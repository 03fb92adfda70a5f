//! Tests for the seeded random source

#[cfg(test)]
mod tests {
    use shuffle_entropy::algorithm::random::{RandomSource, SeededSource};

    // Tests draws stay inside the inclusive range
    // Verified by switching to an exclusive upper bound
    #[test]
    fn test_draws_within_inclusive_range() {
        let mut source = SeededSource::new(7);
        for upper in 0..10 {
            for _ in 0..100 {
                assert!(source.next_index(upper) <= upper);
            }
        }
    }

    // Tests the upper bound itself can be drawn
    // Verified by using 0..upper as the sampled range
    #[test]
    fn test_upper_bound_is_reachable() {
        let mut source = SeededSource::new(11);
        let hits = (0..1000).filter(|_| source.next_index(1) == 1).count();

        assert!(hits > 0, "index 1 never drawn from 0..=1");
        assert!(hits < 1000, "index 0 never drawn from 0..=1");
    }

    // Tests a zero upper bound always yields zero
    // Verified by offsetting the draw by one
    #[test]
    fn test_zero_upper_bound() {
        let mut source = SeededSource::new(3);
        assert!((0..50).all(|_| source.next_index(0) == 0));
    }

    // Tests equal seeds reproduce the same stream
    // Verified by seeding from entropy instead of the given seed
    #[test]
    fn test_seed_reproducibility() {
        let mut first = SeededSource::new(42);
        let mut second = SeededSource::new(42);

        let a: Vec<usize> = (0..64).map(|i| first.next_index(i)).collect();
        let b: Vec<usize> = (0..64).map(|i| second.next_index(i)).collect();
        assert_eq!(a, b);

        let mut other = SeededSource::new(43);
        let c: Vec<usize> = (0..64).map(|i| other.next_index(i)).collect();
        assert_ne!(a, c);
    }

    fn draw_sequence<R: RandomSource>(mut source: R) -> Vec<usize> {
        (0..20).map(|upper| source.next_index(upper)).collect()
    }

    // Tests mutable references forward to the underlying source
    // Verified by returning a constant from the reference impl
    #[test]
    fn test_mutable_reference_forwards() {
        let mut owner = SeededSource::new(5);
        let through_reference = draw_sequence(&mut owner);
        let direct = draw_sequence(SeededSource::new(5));

        assert_eq!(through_reference, direct);
    }
}
