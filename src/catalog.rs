use crate::{Divisor, Problem};
use log::{debug, trace};
use num::ToPrimitive;

mod test;

/// How far from an integer a ratio may be and still count as one
///
/// This is an absolute bound, so very large values can match spuriously
/// and very small non-zero values are considered to be zero.
pub const TOLERANCE: f64 = 1e-5;

/// Every way to pick `k` distinct indices from `0..n`
///
/// Each combination is strictly ascending and the combinations themselves
/// are in lexicographic order, which is the order the [`Catalog`] tries
/// them in. There are `n` choose `k` of them, none at all if `k > n`.
///
/// # Example
///
/// ```
/// use argand::combinations;
/// assert_eq!(combinations(3, 2), vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
/// assert!(combinations(2, 3).is_empty());
/// ```
pub fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut found = Vec::new();
    let mut chosen = Vec::with_capacity(k);
    choose(n, k, 0, &mut chosen, &mut found);
    found
}

// Either take index `at` and pick k - 1 more after it, or skip it
fn choose(n: usize, k: usize, at: usize, chosen: &mut Vec<usize>, found: &mut Vec<Vec<usize>>) {
    if k == 0 {
        found.push(chosen.clone());
        return;
    }
    if n < at + k {
        return;
    }
    chosen.push(at);
    choose(n, k - 1, at + 1, chosen, found);
    chosen.pop();
    choose(n, k, at + 1, chosen, found);
}

/// Ordered collection of the divisors used for symbolic representation
///
/// The base divisors come first, in the order given, followed by one
/// extended divisor for each combination of `k` base divisors. Matching
/// tries them in exactly that order and the first match wins.
///
/// # Examples
///
/// ```
/// use argand::Catalog;
/// let catalog = Catalog::standard();
/// assert_eq!(catalog.extended().len(), 10);
/// assert_eq!(catalog.represent(1.25).unwrap(), "5*1/4");
/// let x = std::f64::consts::SQRT_2 * 0.25 * 3.0;
/// assert_eq!(catalog.represent(x).unwrap(), "3*(sqrt(2)*1/4)");
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    base: Vec<Divisor>,
    extended: Vec<Divisor>,
    k: usize,
}

impl Catalog {
    /// Build the catalog for these base divisors, combining `k` at a time
    ///
    /// With `k` of zero there are no extended divisors at all.
    pub fn new(base: Vec<Divisor>, k: usize) -> Self {
        let extended: Vec<Divisor> = combinations(base.len(), k)
            .iter()
            .filter(|combination| !combination.is_empty())
            .map(|combination| Divisor::product(combination.iter().map(|&i| &base[i])))
            .collect();
        debug!(
            "catalog has {} base and {} extended divisors (k = {k})",
            base.len(),
            extended.len()
        );
        Self { base, extended, k }
    }

    /// The standard base divisors, combined in pairs
    pub fn standard() -> Self {
        Self::new(Divisor::standard(), 2)
    }

    pub fn base(&self) -> &[Divisor] {
        &self.base
    }

    pub fn extended(&self) -> &[Divisor] {
        &self.extended
    }

    /// How many base divisors make up each extended divisor
    pub fn combination_size(&self) -> usize {
        self.k
    }

    /// All divisors, in the order they are tried
    pub fn iter(&self) -> impl Iterator<Item = &Divisor> {
        self.base.iter().chain(self.extended.iter())
    }

    /// The first divisor which `x` is a round multiple of, and that multiple
    pub fn factor(&self, x: f64) -> Option<(i64, &Divisor)> {
        self.iter().find_map(|divisor| {
            let multiple = x / divisor.value();
            let rounded = multiple.round();
            if (multiple - rounded).abs() <= TOLERANCE {
                rounded.to_i64().map(|m| (m, divisor))
            } else {
                None
            }
        })
    }

    /// Text for `x`, either an integer or a multiple of a divisor
    ///
    /// Values within [`TOLERANCE`] of an integer are written as that
    /// integer. Otherwise the first matching divisor is used, e.g.
    /// `3*sqrt(2)`. If nothing matches the value is rounded to the
    /// nearest integer.
    pub fn represent(&self, x: f64) -> Result<String, Problem> {
        if x.is_nan() {
            return Err(Problem::NotANumber);
        }
        if x.is_infinite() {
            return Err(Problem::Infinity);
        }

        let rounded = x.round();
        if (x - rounded).abs() > TOLERANCE {
            if let Some((multiple, divisor)) = self.factor(x) {
                trace!("{x} is {multiple} * {}", divisor.label());
                return Ok(format!("{multiple}*{}", divisor.label()));
            }
        }
        Ok(integral(rounded))
    }
}

// Negative zero should not show its sign
fn integral(n: f64) -> String {
    if n == 0.0 {
        String::from("0")
    } else {
        format!("{n}")
    }
}
