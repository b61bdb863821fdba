#[cfg(test)]
mod tests {
    use crate::catalog::{combinations, Catalog};
    use crate::{Divisor, Problem};
    use std::collections::HashSet;
    use std::f64::consts::{PI, SQRT_2};
    use std::sync::LazyLock;

    static STANDARD: LazyLock<Catalog> = LazyLock::new(Catalog::standard);

    fn represent(x: f64) -> String {
        STANDARD.represent(x).unwrap()
    }

    #[test]
    fn pairs_of_five() {
        let pairs = combinations(5, 2);
        let expected = vec![
            vec![0, 1],
            vec![0, 2],
            vec![0, 3],
            vec![0, 4],
            vec![1, 2],
            vec![1, 3],
            vec![1, 4],
            vec![2, 3],
            vec![2, 4],
            vec![3, 4],
        ];
        assert_eq!(pairs, expected);
    }

    #[test]
    fn too_many() {
        assert!(combinations(3, 4).is_empty());
        assert!(combinations(0, 1).is_empty());
    }

    #[test]
    fn choose_none() {
        assert_eq!(combinations(4, 0), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn binomial_counts() {
        for n in 0..=9 {
            for k in 0..=n {
                assert_eq!(combinations(n, k).len(), num::integer::binomial(n, k));
            }
        }
    }

    #[test]
    fn canonical_and_unique() {
        let found = combinations(8, 3);
        let mut seen = HashSet::new();
        for combination in &found {
            assert_eq!(combination.len(), 3);
            assert!(combination.windows(2).all(|w| w[0] < w[1]));
            assert!(combination.iter().all(|&i| i < 8));
            assert!(seen.insert(combination.clone()));
        }
        let mut sorted = found.clone();
        sorted.sort();
        assert_eq!(found, sorted);
    }

    #[test]
    fn standard_catalog() {
        assert_eq!(STANDARD.base().len(), 5);
        assert_eq!(STANDARD.extended().len(), 10);
        assert_eq!(STANDARD.combination_size(), 2);
        assert_eq!(STANDARD.iter().count(), 15);
        assert_eq!(STANDARD.extended()[0].label(), "(sqrt(2)*sqrt(3))");
        assert_eq!(STANDARD.extended()[3].label(), "(sqrt(2)*1/4)");
        assert_eq!(STANDARD.extended()[9].label(), "(1/3*1/4)");
    }

    #[test]
    fn empty_extended() {
        let catalog = Catalog::new(Divisor::standard(), 6);
        assert!(catalog.extended().is_empty());
        assert_eq!(catalog.represent(SQRT_2 * 3.0).unwrap(), "3*sqrt(2)");
    }

    #[test]
    fn no_combination() {
        let catalog = Catalog::new(Divisor::standard(), 0);
        assert!(catalog.extended().is_empty());
        assert_eq!(catalog.iter().count(), 5);
        assert_eq!(catalog.represent(0.75).unwrap(), "3*1/4");
    }

    #[test]
    fn triples() {
        let catalog = Catalog::new(Divisor::standard(), 3);
        assert_eq!(catalog.extended().len(), 10);
        assert_eq!(catalog.extended()[0].label(), "(sqrt(2)*sqrt(3)*1/2)");
    }

    #[test]
    fn wide_catalog() {
        let catalog = Catalog::new(Divisor::wide(), 2);
        assert_eq!(catalog.extended().len(), 91);
        assert_eq!(catalog.represent(5f64.sqrt() * 3.0).unwrap(), "3*sqrt(5)");
        assert_eq!(catalog.represent(0.2 * 7.0 / 3.0).unwrap(), "7*(1/3*1/5)");
    }

    #[test]
    fn integers() {
        assert_eq!(represent(1.0), "1");
        for i in -100..=100 {
            assert_eq!(represent(f64::from(i)), format!("{i}"));
        }
        assert_eq!(represent(1e9), "1000000000");
    }

    #[test]
    fn nearly_integers() {
        assert_eq!(represent(2.000_001), "2");
        assert_eq!(represent(-6.999_999), "-7");
        assert_eq!(represent(-0.0), "0");
        assert_eq!(represent(-1e-6), "0");
    }

    #[test]
    fn scenarios() {
        assert_eq!(represent(SQRT_2 * 3.0), "3*sqrt(2)");
        assert_eq!(represent(0.25 * 5.0), "5*1/4");
        assert_eq!(represent(SQRT_2 * 0.25 * 3.0), "3*(sqrt(2)*1/4)");
        assert_eq!(represent(3.3333333), "10*1/3");
    }

    #[test]
    fn base_multiples() {
        for m in (-30i32..=30).filter(|&m| m != 0) {
            let n = f64::from(m);
            assert_eq!(represent(n * SQRT_2), format!("{m}*sqrt(2)"));
            assert_eq!(represent(n * 3f64.sqrt()), format!("{m}*sqrt(3)"));
            if m % 2 != 0 {
                assert_eq!(represent(n / 2.0), format!("{m}*1/2"));
                assert_eq!(represent(n / 4.0), format!("{m}*1/4"));
            }
            if m % 3 != 0 {
                assert_eq!(represent(n / 3.0), format!("{m}*1/3"));
            }
        }
    }

    #[test]
    fn extended_multiples() {
        for m in (-30i32..=30).filter(|&m| m % 2 != 0 && m % 3 != 0) {
            for divisor in STANDARD.extended() {
                let x = f64::from(m) * divisor.value();
                assert_eq!(represent(x), format!("{m}*{}", divisor.label()));
            }
        }
    }

    #[test]
    fn base_first() {
        // Also (1/2*1/4) and (1/3*1/4) multiples
        assert_eq!(represent(0.75), "3*1/4");
        assert_eq!(represent(1.5), "3*1/2");
        // Also 2*(sqrt(2)*1/2)
        assert_eq!(represent(SQRT_2), "1*sqrt(2)");
        let (m, divisor) = STANDARD.factor(1.5).unwrap();
        assert_eq!((m, divisor.label()), (3, "1/2"));
    }

    #[test]
    fn rounded_fallback() {
        assert_eq!(represent(3.3), "3");
        assert_eq!(represent(PI), "3");
        assert_eq!(represent(-PI), "-3");
        assert!(STANDARD.factor(PI).is_none());
    }

    #[test]
    fn large_values_match_loosely() {
        // Nowhere near a multiple of sqrt(2), but the ratio rounds to an integer
        let x = 1125899906842624.75;
        assert_eq!(represent(x), "796131459065722*sqrt(2)");
    }

    #[test]
    fn zero_multiple() {
        // Not near an integer, yet within tolerance of zero times sqrt(3)
        assert_eq!(represent(1.5e-5), "0*sqrt(3)");
    }

    #[test]
    fn not_finite() {
        assert_eq!(STANDARD.represent(f64::NAN), Err(Problem::NotANumber));
        assert_eq!(STANDARD.represent(f64::INFINITY), Err(Problem::Infinity));
        assert_eq!(STANDARD.represent(f64::NEG_INFINITY), Err(Problem::Infinity));
    }
}
