use crate::Problem;
use std::ops::RangeInclusive;

/// A named constant which values may be a round multiple of
///
/// The value is always finite and strictly positive, so dividing by
/// it is always safe.
///
/// # Examples
///
/// Parsing a custom divisor
/// ```
/// use argand::Divisor;
/// let tau: Divisor = "tau=6.283185307179586".parse().unwrap();
/// assert_eq!(tau.label(), "tau");
/// ```
///
/// Values may be written as fractions
/// ```
/// use argand::Divisor;
/// let sixth: Divisor = "1/6=1/6".parse().unwrap();
/// assert_eq!(sixth.value(), 1.0 / 6.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Divisor {
    value: f64,
    label: String,
}

impl Divisor {
    /// A divisor with the given value and display label
    pub fn new(value: f64, label: impl Into<String>) -> Result<Self, Problem> {
        if !value.is_finite() || value <= 0.0 {
            return Err(Problem::BadDivisor);
        }
        let label = label.into();
        if label.is_empty() {
            return Err(Problem::BadDivisor);
        }
        Ok(Self { value, label })
    }

    /// The product of several divisors, labelled e.g. `(sqrt(2)*1/4)`
    pub(crate) fn product<'a>(factors: impl IntoIterator<Item = &'a Divisor>) -> Self {
        let mut value = 1.0;
        let mut labels: Vec<&str> = Vec::new();
        for factor in factors {
            value *= factor.value;
            labels.push(&factor.label);
        }
        Self {
            value,
            label: format!("({})", labels.join("*")),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// √2, √3, 1/2, 1/3 and 1/4 in that order
    pub fn standard() -> Vec<Divisor> {
        family(&[2, 3], 2..=4)
    }

    /// The square roots of 2, 3, 5, 6 and 7 followed by 1/2 through 1/10
    pub fn wide() -> Vec<Divisor> {
        family(&[2, 3, 5, 6, 7], 2..=10)
    }
}

fn family(roots: &[u32], reciprocals: RangeInclusive<u32>) -> Vec<Divisor> {
    let roots = roots.iter().map(|&n| Divisor {
        value: f64::from(n).sqrt(),
        label: format!("sqrt({n})"),
    });
    let reciprocals = reciprocals.map(|n| Divisor {
        value: 1.0 / f64::from(n),
        label: format!("1/{n}"),
    });
    roots.chain(reciprocals).collect()
}

fn parse_value(s: &str) -> Result<f64, Problem> {
    let number = |s: &str| s.trim().parse::<f64>().map_err(|_| Problem::BadDivisor);
    match s.split_once('/') {
        Some((n, d)) => Ok(number(n)? / number(d)?),
        None => number(s),
    }
}

impl std::str::FromStr for Divisor {
    type Err = Problem;

    /// Parse `label=value`, where the value is a decimal or a fraction
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, value) = s.rsplit_once('=').ok_or(Problem::BadDivisor)?;
        Divisor::new(parse_value(value)?, label.trim())
    }
}
