use dimap_match::Algorithm;
use proptest::prelude::*;

proptest! {
    #[test]
    fn similarity_stays_within_unit_interval(source in ".{0,16}", target in ".{0,16}") {
        for algorithm in Algorithm::ALL {
            let result = algorithm.compute(&source, &target);
            prop_assert!(
                (0.0..=1.0).contains(&result.similarity),
                "{algorithm} similarity {} out of range for {source:?} / {target:?}",
                result.similarity
            );
            prop_assert!(
                result.distance >= 0.0,
                "{algorithm} distance {} negative for {source:?} / {target:?}",
                result.distance
            );
        }
    }

    #[test]
    fn algorithms_are_symmetric(source in ".{0,16}", target in ".{0,16}") {
        for algorithm in Algorithm::ALL {
            let forward = algorithm.compute(&source, &target);
            let backward = algorithm.compute(&target, &source);
            prop_assert!(
                (forward.similarity - backward.similarity).abs() < 1e-12,
                "{algorithm} asymmetric for {source:?} / {target:?}"
            );
            prop_assert!((forward.distance - backward.distance).abs() < 1e-12);
        }
    }

    #[test]
    fn identical_strings_are_perfectly_similar(text in ".{2,16}") {
        // Jaro's match window is degenerate below two characters, so start at two.
        for algorithm in Algorithm::ALL {
            let result = algorithm.compute(&text, &text);
            prop_assert!(
                (result.similarity - 1.0).abs() < 1e-12,
                "{algorithm} scored identical strings at {}",
                result.similarity
            );
        }
    }
}
