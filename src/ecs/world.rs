// src/ecs/world.rs

// Any: 型を消してストレージを一つの HashMap にまとめるため。
// TypeId: コンポーネントの種類ごとのキー。
use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// ゲーム世界の全エンティティとコンポーネントを持つ、自作 ECS のコア！🌍
///
/// カードと山とゲーム状態は全部ここに入ってる。
/// 一つのゲームにつき一つだけ作られて、`GameApp` が所有するよ (共有はしない)。
/// エンティティは作るだけで、消すことはない (52 枚はゲームの間ずっと生きてる)。
pub struct World {
    /// 生存しているエンティティ。
    entities: HashSet<Entity>,
    /// 次に発行する ID。
    next_entity_id: usize,
    /// TypeId ごとのコンポーネントストレージ。
    /// 中身は `HashMap<Entity, T>` なんだけど、`Box<dyn Any>` で型を隠してる。
    component_stores: HashMap<TypeId, Box<dyn Any>>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// 空の World を作るよ。
    pub fn new() -> Self {
        World {
            entities: HashSet::new(),
            next_entity_id: 0,
            component_stores: HashMap::new(),
        }
    }

    /// 新しいエンティティを作って返す。ID は 0 からの連番。
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(entity);
        entity
    }

    /// エンティティが生きてるかチェック。
    pub fn is_entity_alive(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// 生存しているエンティティの数。
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// コンポーネントの型 `T` を使えるように登録するよ。
    /// `add_component::<T>` の前に必ず呼ぶこと！
    pub fn register_component<T: Component>(&mut self) {
        if self.is_registered::<T>() {
            warn!(
                "World: component type {} registered more than once, keeping the existing store",
                std::any::type_name::<T>()
            );
            return;
        }
        self.component_stores
            .insert(TypeId::of::<T>(), Box::new(HashMap::<Entity, T>::new()));
        debug!("World: registered component type {}", std::any::type_name::<T>());
    }

    /// コンポーネントの型が登録済みかどうか。
    pub fn is_registered<T: Component>(&self) -> bool {
        self.component_stores.contains_key(&TypeId::of::<T>())
    }

    /// エンティティにコンポーネントを追加 (同じ型があれば上書き) する。
    ///
    /// 死んでるエンティティへの追加は無視されて false が返る。
    ///
    /// # Panics
    /// `T` が `register_component` されていない場合。初期化コードのミスだからね。
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) -> bool {
        if !self.is_entity_alive(entity) {
            warn!("World: ignoring component for dead entity {:?}", entity);
            return false;
        }
        match self.store_mut::<T>() {
            Some(map) => {
                map.insert(entity, component);
                true
            }
            None => panic!(
                "World: component type {} not registered! Call register_component::<{}>() first.",
                std::any::type_name::<T>(),
                std::any::type_name::<T>()
            ),
        }
    }

    /// コンポーネントへの読み取り専用参照。
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.store::<T>().and_then(|map| map.get(&entity))
    }

    /// コンポーネントへの書き込み可能参照。死んでるエンティティなら None。
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.is_entity_alive(entity) {
            return None;
        }
        self.store_mut::<T>().and_then(|map| map.get_mut(&entity))
    }

    /// コンポーネントを取り外して、その値を返すよ。
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.store_mut::<T>().and_then(|map| map.remove(&entity))
    }

    /// 型 `T` のコンポーネントを持つ生存エンティティを **ID 順** で返す。
    ///
    /// HashMap の並びはバラバラだから、毎回ソートして決定的にしてる。
    /// 山の列挙順 (タイブレーク) がこれに依存するからね！
    pub fn get_all_entities_with_component<T: Component>(&self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = match self.store::<T>() {
            Some(map) => map
                .keys()
                .copied()
                .filter(|e| self.is_entity_alive(*e))
                .collect(),
            None => Vec::new(),
        };
        entities.sort();
        entities
    }

    /// 条件に合う最初の (ID が一番小さい) エンティティを探す。
    pub fn find_entity<T, F>(&self, mut predicate: F) -> Option<Entity>
    where
        T: Component,
        F: FnMut(&T) -> bool,
    {
        self.get_all_entities_with_component::<T>()
            .into_iter()
            .find(|&entity| self.get_component::<T>(entity).map_or(false, &mut predicate))
    }

    fn store<T: Component>(&self) -> Option<&HashMap<Entity, T>> {
        self.component_stores
            .get(&TypeId::of::<T>())
            .and_then(|storage| storage.downcast_ref::<HashMap<Entity, T>>())
    }

    fn store_mut<T: Component>(&mut self) -> Option<&mut HashMap<Entity, T>> {
        self.component_stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|storage| storage.downcast_mut::<HashMap<Entity, T>>())
    }
}

// テストコードは world_tests.rs に置いてるよ
#[cfg(test)]
#[path = "world_tests.rs"]
mod world_tests;
