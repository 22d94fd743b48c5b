use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;
use solcache::{
    build_cache,
    rng::{deal, rng_for_deal, shuffle_roles},
    BuildPolicy, CacheConfig, CacheKind, Rules, StateCache, SuitSymmetry,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    FreeCell,
    BlackHole,
    FlowerGarden,
    FortunesFavor,
}

impl Variant {
    fn rules(self) -> Rules {
        match self {
            Variant::FreeCell => Rules::free_cell(),
            Variant::BlackHole => Rules::black_hole(),
            Variant::FlowerGarden => Rules {
                reserve_size: 16,
                ..Rules::tableau(6, BuildPolicy::AnySuit)
            },
            Variant::FortunesFavor => Rules {
                stock_size: 36,
                ..Rules::tableau(12, BuildPolicy::SameSuit)
            },
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SymmetryOpt {
    Auto,
    Forced,
    Disabled,
}

impl From<SymmetryOpt> for SuitSymmetry {
    fn from(s: SymmetryOpt) -> Self {
        match s {
            SymmetryOpt::Auto => SuitSymmetry::Auto,
            SymmetryOpt::Forced => SuitSymmetry::Forced,
            SymmetryOpt::Disabled => SuitSymmetry::Disabled,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "cache-demo", about = "Deal random positions and run them through a visited-state cache")]
struct Args {
    /// Variant whose rules drive dealing and suit reduction
    #[arg(long, value_enum, default_value_t = Variant::FreeCell)]
    variant: Variant,

    /// Cache config JSON; overrides --max-items
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use an LRU cache with this capacity instead of the unlimited set
    #[arg(long)]
    max_items: Option<usize>,

    /// Override the suit-symmetry setting
    #[arg(long, value_enum)]
    symmetry: Option<SymmetryOpt>,

    /// Number of distinct deals to insert
    #[arg(long, default_value_t = 100)]
    deals: u64,

    /// Pile-order shuffles re-inserted per deal (each must be a duplicate)
    #[arg(long, default_value_t = 4)]
    shuffles: u32,

    #[arg(long, default_value_t = 0x00C0FFEEu64)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CacheConfig::load(path)?,
        None => CacheConfig {
            kind: args
                .max_items
                .map_or(CacheKind::Unlimited, |max_items| CacheKind::Lru { max_items }),
            ..CacheConfig::default()
        },
    };
    if let Some(s) = args.symmetry {
        config.suit_symmetry = s.into();
    }

    let rules = args.variant.rules();
    info!("[cache-demo] variant={:?} config={config:?}", args.variant);
    let mut cache = build_cache(&rules, &config);

    let mut misses = 0u64;
    for deal_id in 0..args.deals {
        let mut rng = rng_for_deal(args.seed, deal_id);
        let gs = deal(rules, &mut rng);
        cache.insert(&gs);
        for _ in 0..args.shuffles {
            if cache.insert(&shuffle_roles(&gs, &mut rng)) {
                misses += 1;
            }
        }
    }

    let resident = (0..args.deals)
        .filter(|&deal_id| {
            let mut rng = rng_for_deal(args.seed, deal_id);
            cache.contains(&deal(rules, &mut rng))
        })
        .count();

    let stats = cache.stats();
    println!(
        "[cache-demo] inserts={} duplicates={} evictions={} len={} resident={} shuffle_misses={}",
        stats.inserts,
        stats.duplicates,
        stats.evictions,
        cache.len(),
        resident,
        misses
    );
    Ok(())
}
