#[cfg(test)]
mod tests {
    use crate::generators::{GeneratorError, PasswordGenerator, MAX_LENGTH};
    use crate::history::{HistoryError, HistoryStore, HISTORY_CAPACITY};
    use crate::models::*;
    use crate::strength::StrengthClassifier;
    use crate::utils::format::truncate_string;
    use chrono::{Duration, Utc};

    fn all_classes(length: usize) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length,
            ..Default::default()
        }
    }

    #[test]
    fn test_alphabets_are_disjoint() {
        for (i, a) in CharacterClass::ALL.iter().enumerate() {
            for b in &CharacterClass::ALL[i + 1..] {
                for c in a.alphabet() {
                    assert!(
                        !b.alphabet().contains(c),
                        "{} and {} share '{}'",
                        a,
                        b,
                        *c as char
                    );
                }
            }
        }
    }

    #[test]
    fn test_generate_exact_length() {
        let generator = PasswordGenerator::new();

        for length in [4, 16, 32, MAX_LENGTH] {
            let password = generator.generate(&all_classes(length)).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_generate_covers_every_enabled_class() {
        let generator = PasswordGenerator::new();
        let options = all_classes(4);

        // Length 4 with four classes forces exactly one character per class,
        // so this exercises the redraw path heavily.
        for _ in 0..50 {
            let password = generator.generate(&options).unwrap();
            for class in CharacterClass::ALL {
                assert!(
                    password.chars().any(|c| class.contains(c)),
                    "password '{}' missing {} character",
                    password,
                    class
                );
            }
        }
    }

    #[test]
    fn test_generate_single_class_only() {
        let generator = PasswordGenerator::new();
        let options = PasswordGenerationOptions {
            length: 12,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: true,
            include_symbols: false,
        };

        let password = generator.generate(&options).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_rejects_empty_class_set() {
        let generator = PasswordGenerator::new();
        let options = PasswordGenerationOptions {
            length: 16,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
        };

        assert!(matches!(
            generator.generate(&options),
            Err(GeneratorError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_generate_rejects_zero_length() {
        let generator = PasswordGenerator::new();

        assert!(matches!(
            generator.generate(&all_classes(0)),
            Err(GeneratorError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_generate_rejects_excessive_length() {
        let generator = PasswordGenerator::new();

        assert!(matches!(
            generator.generate(&all_classes(MAX_LENGTH + 1)),
            Err(GeneratorError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_generate_rejects_length_below_class_count() {
        let generator = PasswordGenerator::new();

        // Four classes cannot all appear in a 3-character password.
        assert!(matches!(
            generator.generate(&all_classes(3)),
            Err(GeneratorError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_classify_is_deterministic() {
        let classifier = StrengthClassifier::new();

        for password in ["", "abc", "Abcdefghijkl1!", "correct horse battery"] {
            let first = classifier.classify(password);
            for _ in 0..5 {
                assert_eq!(classifier.classify(password), first);
            }
        }
    }

    #[test]
    fn test_classify_empty_is_very_weak() {
        let classifier = StrengthClassifier::new();
        assert_eq!(classifier.classify(""), StrengthTier::VeryWeak);
    }

    #[test]
    fn test_classify_reference_vectors() {
        let classifier = StrengthClassifier::new();

        // Length 14 plus all four classes: score 6
        assert_eq!(
            classifier.classify("Abcdefghijkl1!"),
            StrengthTier::VeryStrong
        );
        // Length 8, lowercase only: score 1
        assert_eq!(classifier.classify("abcdefgh"), StrengthTier::Weak);
        // Length 7, lowercase only: score 1
        assert_eq!(classifier.classify("abcdefg"), StrengthTier::Weak);
        // Length 10, all four classes: score 5
        assert_eq!(classifier.classify("Abcdefg1!x"), StrengthTier::Strong);
        // Length 12, upper + lower + digit: score 5, not 6
        assert_eq!(classifier.classify("Abcdefghijk1"), StrengthTier::Strong);
        // Length 8, upper + lower: score 3
        assert_eq!(classifier.classify("Abcdefgh"), StrengthTier::Medium);
        // Length 4, lower + digit: score 2
        assert_eq!(classifier.classify("ab12"), StrengthTier::Weak);
    }

    #[test]
    fn test_classify_generated_passwords_are_strong() {
        let generator = PasswordGenerator::new();
        let classifier = StrengthClassifier::new();

        // 16 characters with all classes always scores 6.
        let password = generator.generate(&all_classes(16)).unwrap();
        assert_eq!(classifier.classify(&password), StrengthTier::VeryStrong);
    }

    #[test]
    fn test_strength_tier_ordering() {
        assert!(StrengthTier::VeryWeak < StrengthTier::Weak);
        assert!(StrengthTier::Weak < StrengthTier::Medium);
        assert!(StrengthTier::Medium < StrengthTier::Strong);
        assert!(StrengthTier::Strong < StrengthTier::VeryStrong);
    }

    #[test]
    fn test_history_records_most_recent_first() {
        let mut history = HistoryStore::new();
        let start = Utc::now();

        assert!(history.record("first", StrengthTier::Weak, start));
        assert!(history.record(
            "second",
            StrengthTier::Strong,
            start + Duration::seconds(1)
        ));

        let entries = history.list();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].password, "second");
        assert_eq!(entries[1].password, "first");
    }

    #[test]
    fn test_history_duplicate_is_noop() {
        let mut history = HistoryStore::new();
        let start = Utc::now();

        assert!(history.record("abc", StrengthTier::Weak, start));
        assert!(history.record("xyz", StrengthTier::Weak, start));

        // First-seen wins: no reorder, no timestamp refresh
        assert!(!history.record("abc", StrengthTier::Weak, start + Duration::seconds(5)));

        let entries = history.list();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].password, "xyz");
        assert_eq!(entries[1].password, "abc");
        assert_eq!(entries[1].created_at, start);
    }

    #[test]
    fn test_history_ignores_empty_password() {
        let mut history = HistoryStore::new();
        assert!(!history.record("", StrengthTier::VeryWeak, Utc::now()));
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_evicts_oldest_over_capacity() {
        let mut history = HistoryStore::new();
        let start = Utc::now();

        for i in 0..HISTORY_CAPACITY + 1 {
            history.record(
                &format!("password-{}", i),
                StrengthTier::Medium,
                start + Duration::seconds(i as i64),
            );
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.list()[0].password, "password-10");
        assert_eq!(
            history.list()[HISTORY_CAPACITY - 1].password,
            "password-1"
        );
        // The very first password was the one evicted
        assert_eq!(
            history.select("password-0"),
            Err(HistoryError::NotFound)
        );
    }

    #[test]
    fn test_history_select_does_not_mutate() {
        let mut history = HistoryStore::new();
        let start = Utc::now();

        history.record("abc", StrengthTier::Weak, start);
        history.record("xyz", StrengthTier::Weak, start + Duration::seconds(1));

        let entry = history.select("abc").unwrap();
        assert_eq!(entry.password, "abc");
        assert_eq!(entry.strength, StrengthTier::Weak);

        // Selecting neither reorders nor shrinks the history
        assert_eq!(history.list()[0].password, "xyz");
        assert_eq!(history.len(), 2);

        assert_eq!(history.select("missing"), Err(HistoryError::NotFound));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("abcdefghij", 10), "abcdefghij");
        assert_eq!(truncate_string("abcdefghijk", 10), "abcdefg...");
    }
}
