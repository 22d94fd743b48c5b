use solcache::{BuildPolicy, GameState, LruCache, Pile, Rules, StateCache, SuitSymmetry};

fn rules() -> Rules {
    Rules::tableau(1, BuildPolicy::SameSuit)
}

/// Single-column position holding one card; distinct cards give distinct signatures.
fn s(card: &str) -> GameState {
    GameState::from_piles(rules(), vec![card.parse::<Pile>().expect("card")]).expect("pile count")
}

fn lru(max_items: usize) -> LruCache {
    let _ = env_logger::builder().is_test(true).try_init();
    LruCache::new(&rules(), max_items, SuitSymmetry::Auto)
}

#[test]
fn evicts_least_recently_inserted() {
    let mut cache = lru(3);
    for c in ["AC", "2C", "3C", "4C"] {
        assert!(cache.insert(&s(c)));
    }
    assert_eq!(cache.len(), 3);
    assert!(!cache.contains(&s("AC")), "S1 should be evicted");
    assert!(cache.contains(&s("2C")));
    assert!(cache.contains(&s("4C")), "Sk should be resident");
    assert_eq!(cache.stats().evictions, 1);
}

#[test]
fn touching_keeps_entry_resident() {
    let mut cache = lru(3);
    for c in ["AC", "2C", "3C"] {
        cache.insert(&s(c));
    }
    // Re-insert S1: duplicate, moved to the front.
    assert!(!cache.insert(&s("AC")));
    assert!(cache.insert(&s("4C")));

    assert!(cache.contains(&s("AC")));
    assert!(!cache.contains(&s("2C")), "true LRU entry is evicted instead");
    assert!(cache.contains(&s("3C")));
    assert!(cache.contains(&s("4C")));
}

#[test]
fn contains_does_not_refresh_recency() {
    let mut cache = lru(2);
    cache.insert(&s("AC"));
    cache.insert(&s("2C"));
    assert!(cache.contains(&s("AC")));
    cache.insert(&s("3C"));
    assert!(!cache.contains(&s("AC")), "contains must not count as a touch");
    assert!(cache.contains(&s("2C")));
}

#[test]
fn iter_is_most_recent_first() {
    let mut cache = lru(4);
    for c in ["AC", "2C", "3C"] {
        cache.insert(&s(c));
    }
    cache.insert(&s("AC"));
    let order: Vec<String> = cache.iter().map(ToString::to_string).collect();
    assert_eq!(order, vec!["AC||", "3C||", "2C||"]);
}

#[test]
fn zero_capacity_always_evicts() {
    let mut cache = lru(0);
    assert!(cache.insert(&s("AC")));
    assert!(cache.is_empty());
    assert!(!cache.contains(&s("AC")));
    assert!(cache.insert(&s("AC")), "nothing is ever retained");
    assert_eq!(cache.stats().evictions, 2);
    assert_eq!(cache.iter().count(), 0);
}

#[test]
fn capacity_one() {
    let mut cache = lru(1);
    assert!(cache.insert(&s("AC")));
    assert!(!cache.insert(&s("AC")));
    assert!(cache.insert(&s("2C")));
    assert!(!cache.contains(&s("AC")));
    assert!(cache.contains(&s("2C")));
    assert_eq!(cache.len(), 1);
}

#[test]
fn clear_then_reuse() {
    let mut cache = lru(2);
    for c in ["AC", "2C", "3C"] {
        cache.insert(&s(c));
    }
    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.capacity(), 2);
    for c in ["AC", "2C", "3C"] {
        assert!(!cache.contains(&s(c)));
    }
    assert!(cache.insert(&s("2C")));
    assert!(cache.insert(&s("3C")));
    assert!(cache.insert(&s("4C")));
    assert!(!cache.contains(&s("2C")));
    assert_eq!(cache.len(), 2);
}

#[test]
fn long_churn_respects_capacity() {
    let mut cache = lru(5);
    let cards: Vec<String> = ["C", "D", "H", "S"]
        .iter()
        .flat_map(|suit| (1..=13).map(move |r| format!("{r}{suit}")))
        .collect();
    for c in &cards {
        cache.insert(&s(c));
        assert!(cache.len() <= 5);
    }
    assert_eq!(cache.len(), 5);
    assert_eq!(cache.stats().inserts, 52);
    assert_eq!(cache.stats().evictions, 47);
    for c in &cards[47..] {
        assert!(cache.contains(&s(c)));
    }
}

#[test]
fn budget_constructor_caps_entries() {
    let cache = LruCache::with_budget_mib(&rules(), 0, SuitSymmetry::Auto);
    assert_eq!(cache.capacity(), 0);

    let cache = LruCache::with_budget_mib(&rules(), 4, SuitSymmetry::Auto);
    let bytes = LruCache::approx_bytes_for_capacity(cache.capacity());
    assert!(bytes <= 4 * 1024 * 1024);
    assert!(bytes + LruCache::bytes_per_entry() > 4 * 1024 * 1024);
}
