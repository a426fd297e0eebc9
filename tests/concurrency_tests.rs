// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shared-service tests: parallel readers with an interleaved writer

use item_names::dictionary::StaticDictionary;
use item_names::table::LabelMap;
use item_names::{ItemDescriptor, ItemNameService};
use std::sync::Arc;
use std::thread;

fn service() -> ItemNameService {
    let mut defaults = LabelMap::new();
    defaults.insert("stone".to_string(), "돌".to_string());
    defaults.insert("apple".to_string(), "사과".to_string());
    ItemNameService::initialize(defaults, LabelMap::new(), Arc::new(StaticDictionary::default()))
}

#[test]
fn test_parallel_translations_agree() {
    let svc = service();
    let stone = ItemDescriptor::new("Stone", 1);
    let apple = ItemDescriptor::new("Apple", 2);

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..200 {
                    assert_eq!(svc.translate(&stone, false), "돌");
                    assert_eq!(svc.translate(&apple, false), "사과");
                }
            });
        }
    });

    let stats = svc.stats();
    assert_eq!(stats.translations, 8 * 200 * 2);
    assert_eq!(stats.table_hits + stats.cache_hits, stats.translations);
}

#[test]
fn test_no_stale_label_survives_registration() {
    let svc = service();
    let stone = ItemDescriptor::new("Stone", 1);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..500 {
                    let label = svc.translate(&stone, false);
                    assert!(label == "돌" || label == "바위", "unexpected label {}", label);
                }
            });
        }
        scope.spawn(|| {
            svc.register("stone", "바위");
        });
    });

    // Once the writer is done, every reader path must see the new label.
    assert_eq!(svc.translate(&stone, false), "바위");
    assert_eq!(svc.cached_label(1).as_deref(), Some("바위"));
}
