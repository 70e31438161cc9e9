//! Per-category aging rules.
//!
//! Each call advances one item by one day. Quality is clamped after every
//! mutation, except for legendary items which are never touched.

use crate::category::Category;
use crate::item::Item;

pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 50;

/// Clamp to `MIN_QUALITY..=MAX_QUALITY`.
pub fn clamp_quality(value: i32) -> i32 {
    value.clamp(MIN_QUALITY, MAX_QUALITY)
}

/// Classify `item` by name and apply one day of its aging rule.
pub fn update(item: &mut Item) {
    update_as(Category::of(item), item);
}

/// Apply one day of `category`'s aging rule to `item`.
pub fn update_as(category: Category, item: &mut Item) {
    match category {
        Category::Normal => age_normal(item),
        Category::AgingImproves => age_improving(item),
        Category::Legendary => {}
        Category::EventPass => age_event_pass(item),
        Category::Conjured => age_conjured(item),
    }
}

/// Rate doubles once the sell-by date has passed.
fn daily_rate(sell_in: i32) -> i32 {
    if sell_in < 0 { 2 } else { 1 }
}

fn age_normal(item: &mut Item) {
    let sell_in = item.sell_in().saturating_sub(1);
    item.set_sell_in(sell_in);
    item.set_quality(clamp_quality(
        item.quality().saturating_sub(daily_rate(sell_in)),
    ));
}

fn age_improving(item: &mut Item) {
    let sell_in = item.sell_in().saturating_sub(1);
    item.set_sell_in(sell_in);
    item.set_quality(clamp_quality(
        item.quality().saturating_add(daily_rate(sell_in)),
    ));
}

fn age_event_pass(item: &mut Item) {
    // Increment is chosen from sell_in before today's decrement.
    let increment = match item.sell_in() {
        ..=5 => 3,
        6..=10 => 2,
        _ => 1,
    };
    item.set_quality(clamp_quality(item.quality().saturating_add(increment)));

    let sell_in = item.sell_in().saturating_sub(1);
    item.set_sell_in(sell_in);
    if sell_in < 0 {
        item.set_quality(MIN_QUALITY);
    }
}

/// Two normal days in one, with sell_in restored in between so only one day
/// elapses. Each half consults sell_in on its own and clamps on its own.
fn age_conjured(item: &mut Item) {
    age_normal(item);
    item.set_sell_in(item.sell_in().saturating_add(1));
    age_normal(item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{AGED_BRIE, BACKSTAGE_PASS, SULFURAS};
    use proptest::prelude::*;

    fn aged(name: &str, sell_in: i32, quality: i32) -> Item {
        let mut item = Item::new(name, sell_in, quality);
        update(&mut item);
        item
    }

    fn state(item: &Item) -> (i32, i32) {
        (item.sell_in(), item.quality())
    }

    #[test]
    fn clamp_quality_bounds_both_sides() {
        assert_eq!(clamp_quality(-3), 0);
        assert_eq!(clamp_quality(0), 0);
        assert_eq!(clamp_quality(27), 27);
        assert_eq!(clamp_quality(50), 50);
        assert_eq!(clamp_quality(53), 50);
    }

    #[test]
    fn normal_degrades_by_one_before_sell_by() {
        assert_eq!(state(&aged("Elixir of the Mongoose", 5, 7)), (4, 6));
    }

    #[test]
    fn normal_degrades_by_two_once_expired() {
        assert_eq!(state(&aged("Elixir of the Mongoose", 0, 7)), (-1, 5));
        assert_eq!(state(&aged("Elixir of the Mongoose", -4, 7)), (-5, 5));
    }

    #[test]
    fn normal_quality_never_goes_negative() {
        assert_eq!(state(&aged("MyItem2", 7, 1)), (6, 0));
        assert_eq!(state(&aged("MyItem2", 0, 1)), (-1, 0));
    }

    #[test]
    fn aged_brie_improves_by_one_then_two() {
        assert_eq!(state(&aged(AGED_BRIE, 5, 3)), (4, 4));
        assert_eq!(state(&aged(AGED_BRIE, 0, 0)), (-1, 2));
    }

    #[test]
    fn aged_brie_caps_at_fifty() {
        assert_eq!(state(&aged(AGED_BRIE, 3, 50)), (2, 50));
        assert_eq!(state(&aged(AGED_BRIE, -1, 49)), (-2, 50));
    }

    #[test]
    fn legendary_is_untouched() {
        assert_eq!(state(&aged(SULFURAS, 8, 5)), (8, 5));
        assert_eq!(state(&aged(SULFURAS, -1, 80)), (-1, 80));
    }

    #[test]
    fn event_pass_increment_depends_on_days_left() {
        assert_eq!(state(&aged(BACKSTAGE_PASS, 11, 17)), (10, 18));
        assert_eq!(state(&aged(BACKSTAGE_PASS, 10, 17)), (9, 19));
        assert_eq!(state(&aged(BACKSTAGE_PASS, 6, 15)), (5, 17));
        assert_eq!(state(&aged(BACKSTAGE_PASS, 5, 15)), (4, 18));
        assert_eq!(state(&aged(BACKSTAGE_PASS, 1, 19)), (0, 22));
    }

    #[test]
    fn event_pass_caps_at_fifty() {
        assert_eq!(state(&aged(BACKSTAGE_PASS, 10, 49)), (9, 50));
        assert_eq!(state(&aged(BACKSTAGE_PASS, 5, 49)), (4, 50));
    }

    #[test]
    fn event_pass_is_worthless_after_the_event() {
        assert_eq!(state(&aged(BACKSTAGE_PASS, 0, 50)), (-1, 0));
        assert_eq!(state(&aged(BACKSTAGE_PASS, -3, 12)), (-4, 0));
    }

    #[test]
    fn conjured_degrades_twice_as_fast() {
        assert_eq!(state(&aged("Conjured Mana Cake", 3, 6)), (2, 4));
        assert_eq!(state(&aged("Conjured Mana Cake", 0, 10)), (-1, 6));
    }

    #[test]
    fn conjured_clamps_between_half_steps() {
        assert_eq!(state(&aged("Conjured MyItem2", 7, 1)), (6, 0));
        assert_eq!(state(&aged("Conjured MyItem1", 0, 4)), (-1, 0));
    }

    #[test]
    fn normal_item_above_ceiling_is_clamped_on_next_update() {
        assert_eq!(state(&aged("Elixir of the Mongoose", 5, 60)), (4, 50));
    }

    #[test]
    fn update_as_overrides_name_based_classification() {
        let mut item = Item::new("Elixir of the Mongoose", 5, 7);
        update_as(Category::Legendary, &mut item);
        assert_eq!(state(&item), (5, 7));
        update_as(Category::AgingImproves, &mut item);
        assert_eq!(state(&item), (4, 8));
    }

    #[test]
    fn sell_in_saturates_instead_of_overflowing() {
        assert_eq!(state(&aged("Elixir of the Mongoose", i32::MIN, 10)), (i32::MIN, 8));
    }

    fn any_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(AGED_BRIE.to_string()),
            Just(BACKSTAGE_PASS.to_string()),
            Just(SULFURAS.to_string()),
            "[A-Za-z ]{0,12}".prop_map(|s| format!("Conjured {s}")),
            "[A-Za-z+ ]{0,16}",
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: non-legendary quality stays within bounds across many days.
        #[test]
        fn quality_stays_within_bounds(
            name in any_name(),
            sell_in in -30i32..30,
            quality in MIN_QUALITY..=MAX_QUALITY,
            days in 1usize..60,
        ) {
            let mut item = Item::new(name, sell_in, quality);
            let legendary = Category::of(&item).is_legendary();
            for _ in 0..days {
                update(&mut item);
                if !legendary {
                    prop_assert!((MIN_QUALITY..=MAX_QUALITY).contains(&item.quality()));
                }
            }
        }

        /// Property: legendary items never change.
        #[test]
        fn legendary_is_invariant(
            sell_in in any::<i32>(),
            quality in any::<i32>(),
            days in 1usize..30,
        ) {
            let mut item = Item::new(SULFURAS, sell_in, quality);
            for _ in 0..days {
                update(&mut item);
            }
            prop_assert_eq!(item, Item::new(SULFURAS, sell_in, quality));
        }

        /// Property: every non-legendary item loses exactly one day per update.
        #[test]
        fn sell_in_drops_by_one(
            name in any_name(),
            sell_in in -1000i32..1000,
            quality in MIN_QUALITY..=MAX_QUALITY,
        ) {
            let mut item = Item::new(name, sell_in, quality);
            prop_assume!(!Category::of(&item).is_legendary());
            update(&mut item);
            prop_assert_eq!(item.sell_in(), sell_in - 1);
        }

        /// Property: aged brie never loses quality and gains 2 once expired.
        #[test]
        fn aged_brie_gains_quality(
            sell_in in -30i32..30,
            quality in MIN_QUALITY..=MAX_QUALITY,
        ) {
            let mut item = Item::new(AGED_BRIE, sell_in, quality);
            update(&mut item);
            let gain = if sell_in - 1 < 0 { 2 } else { 1 };
            prop_assert!(item.quality() >= quality);
            prop_assert_eq!(item.quality(), (quality + gain).min(MAX_QUALITY));
        }

        /// Property: normal items never gain quality and lose 2 once expired.
        #[test]
        fn normal_loses_quality(
            sell_in in -30i32..30,
            quality in MIN_QUALITY..=MAX_QUALITY,
        ) {
            let mut item = Item::new("Elixir of the Mongoose", sell_in, quality);
            update(&mut item);
            let loss = if sell_in - 1 < 0 { 2 } else { 1 };
            prop_assert!(item.quality() <= quality);
            prop_assert_eq!(item.quality(), (quality - loss).max(MIN_QUALITY));
        }

        /// Property: a conjured item loses twice what a normal item with the
        /// same starting state loses (until the floor).
        #[test]
        fn conjured_loses_twice_normal(
            sell_in in -30i32..30,
            quality in MIN_QUALITY..=MAX_QUALITY,
        ) {
            let mut normal = Item::new("Mana Cake", sell_in, quality);
            let mut conjured = Item::new("Conjured Mana Cake", sell_in, quality);
            update(&mut normal);
            update(&mut conjured);

            let normal_loss = quality - normal.quality();
            prop_assert_eq!(conjured.sell_in(), normal.sell_in());
            prop_assert!(conjured.quality() <= normal.quality());
            prop_assert_eq!(conjured.quality(), (quality - 2 * normal_loss).max(MIN_QUALITY));
        }

        /// Property: an event pass drops to zero the day sell_in goes negative.
        #[test]
        fn event_pass_zeroes_after_event(
            sell_in in -10i32..=0,
            quality in MIN_QUALITY..=MAX_QUALITY,
        ) {
            let mut item = Item::new(BACKSTAGE_PASS, sell_in, quality);
            update(&mut item);
            prop_assert_eq!(item.quality(), 0);
        }

        /// Property: once at the floor (degrading) or ceiling (improving),
        /// further updates leave quality there.
        #[test]
        fn bounds_are_sticky(
            sell_in in -30i32..30,
            days in 1usize..20,
        ) {
            let mut floor = Item::new("Conjured Mana Cake", sell_in, MIN_QUALITY);
            let mut plain_floor = Item::new("Elixir of the Mongoose", sell_in, MIN_QUALITY);
            let mut ceiling = Item::new(AGED_BRIE, sell_in, MAX_QUALITY);
            for _ in 0..days {
                update(&mut floor);
                update(&mut plain_floor);
                update(&mut ceiling);
                prop_assert_eq!(floor.quality(), MIN_QUALITY);
                prop_assert_eq!(plain_floor.quality(), MIN_QUALITY);
                prop_assert_eq!(ceiling.quality(), MAX_QUALITY);
            }
        }
    }
}
