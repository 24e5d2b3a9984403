// src/ecs/world_tests.rs
// World のユニットテスト！
// wasm32 では wasm-bindgen-test で、ネイティブでは普通の #[test] で走るよ。

use super::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::*;

use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::{StackInfo, StackType};

// --- テスト用のダミーコンポーネント ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Marker {
    value: i32,
}
impl Component for Marker {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tag;
impl Component for Tag {}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn test_new_world_is_empty() {
    let world = World::new();
    assert!(world.entities.is_empty(), "New world should have no entities");
    assert_eq!(world.next_entity_id, 0);
    assert!(world.component_stores.is_empty());
    println!("test_new_world_is_empty: PASSED ✅");
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn test_create_entity_sequential_ids() {
    let mut world = World::new();
    let e0 = world.create_entity();
    let e1 = world.create_entity();
    assert_eq!(e0, Entity(0));
    assert_eq!(e1, Entity(1));
    assert_eq!(world.entity_count(), 2);
    assert!(world.is_entity_alive(e0));
    assert!(!world.is_entity_alive(Entity(2)));
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn test_add_get_and_mutate_component() {
    let mut world = World::new();
    world.register_component::<Marker>();
    let e = world.create_entity();

    assert!(world.add_component(e, Marker { value: 1 }));
    assert_eq!(world.get_component::<Marker>(e), Some(&Marker { value: 1 }));

    {
        let m = world.get_component_mut::<Marker>(e).expect("marker should exist");
        m.value += 10;
    }
    assert_eq!(world.get_component::<Marker>(e).map(|m| m.value), Some(11));

    // 死んでるエンティティには追加されない
    assert!(!world.add_component(Entity(99), Marker { value: 0 }));
    assert_eq!(world.get_component::<Marker>(Entity(99)), None);

    // 未登録の型は None (パニックしない)
    assert_eq!(world.get_component::<Tag>(e), None);
    println!("test_add_get_and_mutate_component: PASSED ✅");
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn test_register_twice_keeps_data() {
    let mut world = World::new();
    world.register_component::<Marker>();
    let e = world.create_entity();
    world.add_component(e, Marker { value: 5 });
    world.register_component::<Marker>();
    assert_eq!(world.get_component::<Marker>(e), Some(&Marker { value: 5 }));
    assert!(world.is_registered::<Marker>());
    assert!(!world.is_registered::<Tag>());
}

#[test]
#[should_panic(expected = "not registered")]
fn test_add_unregistered_component_panics() {
    let mut world = World::new();
    let e = world.create_entity();
    world.add_component(e, Tag);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn test_remove_component_returns_value() {
    let mut world = World::new();
    world.register_component::<Marker>();
    world.register_component::<Tag>();
    let e = world.create_entity();
    world.add_component(e, Marker { value: 3 });
    world.add_component(e, Tag);

    assert_eq!(world.remove_component::<Marker>(e), Some(Marker { value: 3 }));
    assert_eq!(world.remove_component::<Marker>(e), None, "2 回目は None");
    assert_eq!(world.get_component::<Tag>(e), Some(&Tag), "Tag は残ってるはず");
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn test_get_all_entities_is_sorted() {
    let mut world = World::new();
    world.register_component::<Marker>();
    let ids: Vec<Entity> = (0..20).map(|_| world.create_entity()).collect();
    // 逆順に追加しても ID 順で返ってくる
    for &e in ids.iter().rev() {
        world.add_component(e, Marker { value: e.0 as i32 });
    }
    assert_eq!(world.get_all_entities_with_component::<Marker>(), ids);
    assert!(world.get_all_entities_with_component::<Tag>().is_empty());
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn test_find_entity_by_predicate() {
    let mut world = World::new();
    world.register_component::<Card>();
    world.register_component::<StackInfo>();

    let pile = world.create_entity();
    let e1 = world.create_entity();
    world.add_component(e1, Card::new(Suit::Hearts, Rank::Ace));
    world.add_component(e1, StackInfo::new(pile, StackType::Tableau(0), 0));
    let e2 = world.create_entity();
    world.add_component(e2, Card::new(Suit::Spades, Rank::Two));
    world.add_component(e2, StackInfo::new(pile, StackType::Tableau(0), 1));

    assert_eq!(world.find_entity::<Card, _>(|c| c.rank == Rank::Two), Some(e2));
    assert_eq!(
        world.find_entity::<StackInfo, _>(|si| si.stack_type == StackType::Tableau(0)),
        Some(e1),
        "ID が小さい方が先に見つかる"
    );
    assert_eq!(world.find_entity::<StackInfo, _>(|si| si.stack_type == StackType::Stock), None);
    println!("test_find_entity_by_predicate: PASSED ✅");
}
