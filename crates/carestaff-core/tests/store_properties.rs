//! Property-based tests for the `EntityStore` collection contract.

use carestaff_core::{Entity, EntityStore, Patch};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Badge {
    id: String,
    holder: String,
    ward: u8,
}

#[derive(Debug, Clone, Default)]
struct BadgePatch {
    holder: Option<String>,
    ward: Option<u8>,
}

impl Patch<Badge> for BadgePatch {
    fn apply_to(&self, target: &mut Badge) {
        if let Some(holder) = &self.holder {
            target.holder = holder.clone();
        }
        if let Some(ward) = self.ward {
            target.ward = ward;
        }
    }

    fn is_empty(&self) -> bool {
        self.holder.is_none() && self.ward.is_none()
    }
}

impl Entity for Badge {
    const KIND: &'static str = "Badge";
    type Patch = BadgePatch;

    fn id(&self) -> &str {
        &self.id
    }
}

/// A collection of 0..12 badges with unique ids `b0`, `b1`, ...
fn arb_badges() -> impl Strategy<Value = Vec<Badge>> {
    prop::collection::vec(("[a-z]{1,8}", any::<u8>()), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (holder, ward))| Badge {
                id: format!("b{}", i),
                holder,
                ward,
            })
            .collect()
    })
}

fn arb_patch() -> impl Strategy<Value = BadgePatch> {
    (proptest::option::of("[a-z]{1,8}"), proptest::option::of(any::<u8>()))
        .prop_map(|(holder, ward)| BadgePatch { holder, ward })
}

proptest! {
    #[test]
    fn add_appends_new_id(badges in arb_badges(), holder in "[a-z]{1,8}") {
        let mut store = EntityStore::with_items(badges.clone());
        let fresh = Badge { id: "fresh".to_string(), holder, ward: 1 };

        store.add(fresh.clone()).unwrap();

        prop_assert_eq!(store.len(), badges.len() + 1);
        prop_assert_eq!(&store.items()[..badges.len()], &badges[..]);
        prop_assert_eq!(store.items().last(), Some(&fresh));
    }

    #[test]
    fn add_duplicate_leaves_store_unchanged(badges in arb_badges()) {
        prop_assume!(!badges.is_empty());
        let mut store = EntityStore::with_items(badges.clone());
        let duplicate = Badge { id: badges[0].id.clone(), holder: "dup".to_string(), ward: 0 };

        prop_assert!(store.add(duplicate).is_err());
        prop_assert_eq!(store.items(), &badges[..]);
    }

    #[test]
    fn update_overlays_only_the_target(
        badges in arb_badges(),
        index in any::<prop::sample::Index>(),
        patch in arb_patch(),
    ) {
        prop_assume!(!badges.is_empty());
        let target = index.index(badges.len());
        let id = badges[target].id.clone();
        let mut store = EntityStore::with_items(badges.clone());

        prop_assert!(store.update(&id, &patch));

        prop_assert_eq!(store.len(), badges.len());
        for (i, (before, after)) in badges.iter().zip(store.items()).enumerate() {
            if i == target {
                prop_assert_eq!(after, &patch.merged(before));
                prop_assert_eq!(&after.id, &before.id);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn unknown_id_is_noop(badges in arb_badges(), patch in arb_patch()) {
        let mut store = EntityStore::with_items(badges.clone());

        prop_assert!(!store.update("missing", &patch));
        prop_assert_eq!(store.remove("missing"), 0);
        prop_assert_eq!(store.items(), &badges[..]);
        prop_assert_eq!(store.version(), 0);
    }

    #[test]
    fn remove_drops_exactly_one(badges in arb_badges(), index in any::<prop::sample::Index>()) {
        prop_assume!(!badges.is_empty());
        let id = badges[index.index(badges.len())].id.clone();
        let mut store = EntityStore::with_items(badges.clone());

        prop_assert_eq!(store.remove(&id), 1);
        prop_assert_eq!(store.len(), badges.len() - 1);
        prop_assert!(!store.contains(&id));
    }

    #[test]
    fn remove_is_idempotent(badges in arb_badges(), index in any::<prop::sample::Index>()) {
        prop_assume!(!badges.is_empty());
        let id = badges[index.index(badges.len())].id.clone();

        let mut once = EntityStore::with_items(badges.clone());
        once.remove(&id);

        let mut twice = EntityStore::with_items(badges);
        twice.remove(&id);
        twice.remove(&id);

        prop_assert_eq!(once.items(), twice.items());
    }

    #[test]
    fn selection_never_dangles_after_remove(
        badges in arb_badges(),
        selected in any::<prop::sample::Index>(),
        removed in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!badges.is_empty());
        let mut store = EntityStore::with_items(badges.clone());
        store.select(Some(&badges[selected.index(badges.len())]));

        store.remove(&badges[removed.index(badges.len())].id.clone());

        match store.selected_id() {
            Some(id) => prop_assert!(store.contains(id)),
            None => prop_assert_eq!(selected.index(badges.len()), removed.index(badges.len())),
        }
    }
}
