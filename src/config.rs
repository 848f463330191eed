// Copyright 2023 Remi Bernotavicius

use rand::SeedableRng as _;

pub const DEFAULT_EXPIRING_WITHIN: u32 = 5;

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Items with this many days or fewer left count as expiring soon.
    #[arg(long, default_value_t = DEFAULT_EXPIRING_WITHIN)]
    pub expiring_within: u32,

    /// Seed for the starting inventory and meal plans. Random when not given.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expiring_within: DEFAULT_EXPIRING_WITHIN,
            seed: None,
        }
    }
}

impl Config {
    pub fn expiring_within(&self) -> i64 {
        self.expiring_within.into()
    }

    pub fn rng(&self) -> rand::rngs::StdRng {
        match self.seed {
            Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
            None => rand::rngs::StdRng::from_os_rng(),
        }
    }
}

#[test]
fn seeded_rng_is_reproducible() {
    use rand::Rng as _;

    let config = Config {
        seed: Some(42),
        ..Default::default()
    };
    let mut first = config.rng();
    let mut second = config.rng();
    let a: Vec<u32> = (0..4).map(|_| first.random()).collect();
    let b: Vec<u32> = (0..4).map(|_| second.random()).collect();
    assert_eq!(a, b);
    assert!(a.iter().any(|&n| n != a[0]));
    assert_eq!(config.expiring_within(), 5);
}
