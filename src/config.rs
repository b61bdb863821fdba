use crate::{Catalog, Divisor};
use clap::ValueEnum;

/// How many results an [`Interpreter`](crate::Interpreter) keeps by default
pub const DEFAULT_CAPACITY: usize = 100;

/// How many base divisors make up an extended divisor by default
pub const DEFAULT_COMBINATION_SIZE: usize = 2;

/// Built-in sets of base divisors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DivisorSet {
    /// √2, √3, 1/2, 1/3 and 1/4
    #[default]
    Standard,
    /// √2, √3, √5, √6, √7 and 1/2 through 1/10
    Wide,
}

impl DivisorSet {
    pub fn divisors(self) -> Vec<Divisor> {
        match self {
            DivisorSet::Standard => Divisor::standard(),
            DivisorSet::Wide => Divisor::wide(),
        }
    }
}

/// Calculator settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of stored results
    pub capacity: usize,
    /// How many base divisors are combined into each extended divisor
    pub combination_size: usize,
    /// Base divisors, in order of preference
    pub divisors: Vec<Divisor>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            combination_size: DEFAULT_COMBINATION_SIZE,
            divisors: DivisorSet::default().divisors(),
        }
    }
}

impl Config {
    /// Build the divisor catalog these settings describe
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.divisors.clone(), self.combination_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.capacity, 100);
        let catalog = config.catalog();
        assert_eq!(catalog.base().len(), 5);
        assert_eq!(catalog.extended().len(), 10);
    }

    #[test]
    fn wide_triples() {
        let config = Config {
            combination_size: 3,
            divisors: DivisorSet::Wide.divisors(),
            ..Config::default()
        };
        // 14 choose 3
        assert_eq!(config.catalog().extended().len(), 364);
    }

    #[test]
    fn extra_divisor() {
        let mut config = Config::default();
        config.divisors.push("pi=3.141592653589793".parse().unwrap());
        let catalog = config.catalog();
        assert_eq!(catalog.extended().len(), 15);
        let two_pi = std::f64::consts::PI * 2.0;
        assert_eq!(catalog.represent(two_pi).unwrap(), "2*pi");
        let half_pi = std::f64::consts::FRAC_PI_2;
        assert_eq!(catalog.represent(half_pi).unwrap(), "1*(1/2*pi)");
    }
}
