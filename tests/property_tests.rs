use charscope::api;
use charscope::tables::latin;
use charscope::DetectionInput;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // A statistical match is never certain: scores stay in 1..=99 and
    // anything at zero is dropped before it reaches the caller.
    #[test]
    fn confidence_stays_in_bounds(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let bank = api::recognizers().unwrap();
        let input = DetectionInput::from_bytes(&bytes);
        for m in api::scan(&bank, &input, None) {
            prop_assert!(m.confidence >= 1);
            prop_assert!(m.confidence <= 99);
        }
    }

    #[test]
    fn scan_is_deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let bank = api::recognizers().unwrap();
        let input = DetectionInput::from_bytes(&bytes);
        let first = api::scan(&bank, &input, None);
        let second = api::scan(&bank, &input, None);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn scan_output_is_sorted(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let bank = api::recognizers().unwrap();
        let input = DetectionInput::from_bytes(&bytes);
        let matches = api::scan(&bank, &input, None);
        for pair in matches.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    // Runs of spaces collapse during normalization, so padding the
    // gaps between words must not move the score.
    #[test]
    fn separator_runs_do_not_change_the_score(
        words in proptest::collection::vec("[a-z]{1,8}", 1..12),
        gaps in proptest::collection::vec(1usize..4, 12),
    ) {
        let single = words.join(" ");
        let mut padded = String::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                padded.push_str(&" ".repeat(gaps[i]));
            }
            padded.push_str(word);
        }

        let recognizer = latin::iso_8859_1().unwrap();
        let a = recognizer.detect(&DetectionInput::from_bytes(single.as_bytes()));
        let b = recognizer.detect(&DetectionInput::from_bytes(padded.as_bytes()));
        prop_assert_eq!(a, b);
    }
}
