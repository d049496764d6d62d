use design_patterns::flyweight::{is_same_instance, FlyweightCache, GlyphFactory, Style};
use proptest::prelude::*;
use rayon::prelude::*;
use std::collections::HashSet;

type CharKey = (String, String, u32, String);

fn char_key(symbol: &str, font: &str, size: u32, color: &str) -> CharKey {
    (symbol.to_string(), font.to_string(), size, color.to_string())
}

#[test]
fn test_three_a_one_b() {
    let cache: FlyweightCache<CharKey, String> = FlyweightCache::new();
    let build = |key: &CharKey| format!("{} {} {}pt {}", key.0, key.1, key.2, key.3);

    let a1 = cache.get_or_create(char_key("A", "Arial", 12, "Black"), build);
    let a2 = cache.get_or_create(char_key("A", "Arial", 12, "Black"), build);
    let a3 = cache.get_or_create(char_key("A", "Arial", 12, "Black"), build);
    let b = cache.get_or_create(char_key("B", "Arial", 12, "Black"), build);

    assert_eq!(cache.count(), 2);
    assert!(is_same_instance(&a1, &a2));
    assert!(is_same_instance(&a2, &a3));
    assert!(!is_same_instance(&a1, &b));
    assert_eq!(*a1, "A Arial 12pt Black");
}

#[test]
fn test_tuple_keys_do_not_collide() {
    let cache: FlyweightCache<CharKey, ()> = FlyweightCache::new();
    let x = cache.get_or_create(char_key("a", "Arial", 1, "2Red"), |_| ());
    let y = cache.get_or_create(char_key("a", "Arial", 12, "Red"), |_| ());
    let z = cache.get_or_create(char_key("ab", "c", 1, "x"), |_| ());
    let w = cache.get_or_create(char_key("a", "bc", 1, "x"), |_| ());

    assert_eq!(cache.count(), 4);
    assert!(!is_same_instance(&x, &y));
    assert!(!is_same_instance(&z, &w));
}

#[test]
fn test_parallel_glyph_requests_share_instances() {
    let factory = GlyphFactory::new();
    let style = Style::new("Arial", 12, "Black");
    let text: Vec<char> = "the quick brown fox jumps over the lazy dog".chars().collect();

    let glyphs: Vec<_> = (0..64)
        .into_par_iter()
        .flat_map_iter(|_| text.iter().map(|&c| factory.glyph(c, &style)).collect::<Vec<_>>())
        .collect();

    let distinct: HashSet<char> = text.iter().copied().collect();
    assert_eq!(factory.count(), distinct.len());
    assert_eq!(factory.cache().stats().misses, distinct.len());

    for glyph in &glyphs {
        let canonical = factory.glyph(glyph.symbol(), &style);
        assert!(is_same_instance(glyph, &canonical));
    }
}

#[test]
fn test_racing_first_access() {
    for _ in 0..20 {
        let cache = FlyweightCache::new();
        let handles: Vec<_> = (0..16)
            .into_par_iter()
            .map(|_| cache.get_or_create("contended".to_string(), |key| key.to_uppercase()))
            .collect();

        assert_eq!(cache.count(), 1);
        assert!(handles.iter().all(|h| is_same_instance(h, &handles[0])));
    }
}

proptest! {
    #[test]
    fn prop_count_equals_distinct_keys(keys in prop::collection::vec(0u8..32, 0..200)) {
        let cache = FlyweightCache::new();
        for key in &keys {
            cache.get_or_create(*key, |k| u32::from(*k) * 2);
        }

        let distinct: HashSet<u8> = keys.iter().copied().collect();
        prop_assert_eq!(cache.count(), distinct.len());

        let stats = cache.stats();
        prop_assert_eq!(stats.misses, distinct.len());
        prop_assert_eq!(stats.hits, keys.len() - distinct.len());
    }

    #[test]
    fn prop_equal_keys_identical_instances(
        symbol in "[a-z]{0,3}",
        font in "[A-Za-z ]{0,10}",
        size in 1u32..72,
        color in "[A-Za-z0-9]{0,8}",
    ) {
        let cache = FlyweightCache::new();
        let key = (symbol, font, size, color);
        let first = cache.get_or_create(key.clone(), |k| k.clone());
        let second = cache.get_or_create(key.clone(), |k| k.clone());

        prop_assert!(is_same_instance(&first, &second));
        prop_assert_eq!(&*first, &key);
    }

    #[test]
    fn prop_distinct_keys_distinct_instances(a in any::<(u8, u16)>(), b in any::<(u8, u16)>()) {
        prop_assume!(a != b);
        let cache = FlyweightCache::new();
        let x = cache.get_or_create(a, |k| *k);
        let y = cache.get_or_create(b, |k| *k);
        prop_assert!(!is_same_instance(&x, &y));
        prop_assert_eq!(cache.count(), 2);
    }
}
