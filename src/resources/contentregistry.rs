//! Content registry resource.
//!
//! Maps content-type tags to the prefab handles used to build their visuals.
//! There are four tables: cell foreground, cell background, ore and ground
//! items. A ground item entry also carries the prefab used when the item is
//! placed in the world, so the ground-item and placeable-item lookups scan
//! the same table. Tables are filled once from a [`ContentConfig`] and are
//! read-only afterwards.
//!
//! # Miss policy
//!
//! A lookup for a tag that was never configured logs
//! `"Can't find <Category> - <Tag>"` and answers with the first configured
//! entry of that table, so callers never deal with a missing prefab. A table
//! with no entries at all is a configuration defect: [`ContentRegistry::validate`]
//! reports it at startup and a lookup on it panics.
//!
//! # File format
//!
//! ```json
//! {
//!   "foreground": [{ "kind": "Dirt", "prefab": "cell_fg_dirt" }],
//!   "background": [{ "kind": "Dirt", "prefab": "cell_bg_dirt" }],
//!   "ore": [{ "kind": "Coal", "prefab": "ore_coal" }],
//!   "ground_items": [
//!     { "kind": "Dirt", "prefab": "ground_dirt", "placeable": "place_dirt" },
//!     { "kind": "Coal", "prefab": "ground_coal" }
//!   ],
//!   "recipes": [
//!     { "output": "Torch", "count": 4,
//!       "ingredients": [{ "item": "Wood", "count": 1 }, { "item": "Coal", "count": 1 }] }
//!   ]
//! }
//! ```
//!
//! Every section is optional and defaults to empty.

use crate::error::{ConfigError, RegistryError};
use crate::resources::contenttypes::{BackgroundKind, ContentTag, ForegroundKind, ItemKind, OreKind};
use bevy_ecs::prelude::Resource;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::path::Path;

pub const FOREGROUND_CATEGORY: &str = "Cell Foreground";
pub const BACKGROUND_CATEGORY: &str = "Cell Background";
pub const ORE_CATEGORY: &str = "Cell Ore";
pub const GROUND_ITEM_CATEGORY: &str = "item on ground";
/// Label used when a placeable lookup misses the ground-item table.
pub const PLACEABLE_ITEM_LABEL: &str = "placeble item on ground";

/// Opaque key naming a visual template (prefab) in the asset stores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefabHandle(String);

impl PrefabHandle {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrefabHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One configured `(tag, prefab)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry<T> {
    pub kind: T,
    pub prefab: PrefabHandle,
}

impl<T> ContentEntry<T> {
    pub fn new(kind: T, prefab: impl Into<String>) -> Self {
        Self {
            kind,
            prefab: PrefabHandle::new(prefab),
        }
    }
}

/// What the registry knows about an item lying on the ground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundItem {
    /// Prefab of the dropped item.
    pub prefab: PrefabHandle,
    /// Block placed in the world when the item is used, if it can be placed.
    pub placeable: Option<PrefabHandle>,
}

/// One configured ground item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundItemEntry {
    pub kind: ItemKind,
    pub prefab: PrefabHandle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeable: Option<PrefabHandle>,
}

impl GroundItemEntry {
    pub fn new(kind: ItemKind, prefab: impl Into<String>) -> Self {
        Self {
            kind,
            prefab: PrefabHandle::new(prefab),
            placeable: None,
        }
    }

    pub fn placeable(mut self, prefab: impl Into<String>) -> Self {
        self.placeable = Some(PrefabHandle::new(prefab));
        self
    }
}

/// A configuration entry that can be stored in a [`ContentTable`].
pub trait TableEntry<T, V> {
    fn into_pair(self) -> (T, V);
}

impl<T> TableEntry<T, PrefabHandle> for ContentEntry<T> {
    fn into_pair(self) -> (T, PrefabHandle) {
        (self.kind, self.prefab)
    }
}

impl TableEntry<ItemKind, GroundItem> for GroundItemEntry {
    fn into_pair(self) -> (ItemKind, GroundItem) {
        (
            self.kind,
            GroundItem {
                prefab: self.prefab,
                placeable: self.placeable,
            },
        )
    }
}

/// A single ingredient of a [`Recipe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: ItemKind,
    #[serde(default = "default_count")]
    pub count: u32,
}

/// Crafting recipe carried alongside the prefab tables.
///
/// Only the data is stored here; deciding whether a recipe can be crafted is
/// left to the crafting systems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub output: ItemKind,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub ingredients: SmallVec<[Ingredient; 4]>,
}

fn default_count() -> u32 {
    1
}

/// Tag-to-value table for one content category.
///
/// Slots are indexed by [`ContentTag::ordinal`]. When the same tag is
/// configured twice, the first entry wins.
#[derive(Debug, Clone)]
pub struct ContentTable<T: ContentTag, V = PrefabHandle> {
    category: &'static str,
    slots: Vec<Option<V>>,
    /// Tags in configuration order, without duplicates.
    order: Vec<T>,
}

impl<T: ContentTag, V> ContentTable<T, V> {
    /// Create an empty table for `category`.
    pub fn new(category: &'static str) -> Self {
        Self {
            category,
            slots: std::iter::repeat_with(|| None).take(T::ALL.len()).collect(),
            order: Vec::new(),
        }
    }

    /// Build a table from entries in configuration order.
    pub fn from_entries<I, E>(category: &'static str, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: TableEntry<T, V>,
    {
        let mut table = Self::new(category);
        for entry in entries {
            let (kind, value) = entry.into_pair();
            table.insert(kind, value);
        }
        table
    }

    /// Register `value` for `kind`. Returns `false` and keeps the existing
    /// value if `kind` was already registered.
    pub fn insert(&mut self, kind: T, value: V) -> bool {
        let slot = &mut self.slots[kind.ordinal()];
        if slot.is_some() {
            warn!(
                "Duplicate {} entry for {:?} ignored, keeping the first one",
                self.category, kind
            );
            return false;
        }
        *slot = Some(value);
        self.order.push(kind);
        true
    }

    /// Value for `kind`, falling back to the first configured entry.
    ///
    /// A miss is logged once per call.
    ///
    /// # Panics
    ///
    /// Panics if the table has no entries at all.
    pub fn lookup(&self, kind: T) -> &V {
        self.lookup_labeled(kind, self.category)
    }

    /// Same as [`lookup`](Self::lookup), naming `label` in the miss log.
    pub fn lookup_labeled(&self, kind: T, label: &str) -> &V {
        if let Some(value) = &self.slots[kind.ordinal()] {
            return value;
        }
        let Some(first) = self.first() else {
            panic!("{} table is empty, cannot resolve {:?}", label, kind);
        };
        error!("Can't find {} - {:?}", label, kind);
        first
    }

    /// Value for `kind` without fallback or logging.
    pub fn get(&self, kind: T) -> Option<&V> {
        self.slots[kind.ordinal()].as_ref()
    }

    pub fn contains(&self, kind: T) -> bool {
        self.get(kind).is_some()
    }

    /// First configured entry, the fallback answer for misses.
    pub fn first(&self) -> Option<&V> {
        self.order
            .first()
            .and_then(|kind| self.slots[kind.ordinal()].as_ref())
    }

    /// Entries in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &V)> + '_ {
        self.order.iter().filter_map(move |kind| {
            self.slots[kind.ordinal()]
                .as_ref()
                .map(|value| (*kind, value))
        })
    }

    /// Tags with no configured entry.
    pub fn missing(&self) -> impl Iterator<Item = T> + '_ {
        T::ALL.iter().copied().filter(move |kind| !self.contains(*kind))
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Raw content configuration as read from disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub foreground: Vec<ContentEntry<ForegroundKind>>,
    pub background: Vec<ContentEntry<BackgroundKind>>,
    pub ore: Vec<ContentEntry<OreKind>>,
    pub ground_items: Vec<GroundItemEntry>,
    pub recipes: Vec<Recipe>,
}

impl ContentConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::ContentFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Content shipped with the game, used when no content file is present.
    ///
    /// Every tag of every category has a prefab named after the category and
    /// the tag, e.g. `cell_fg_stone` or `ore_iron`. Every ground item is
    /// placeable as `place_<item>`.
    pub fn builtin() -> Self {
        fn prefab_key<T: ContentTag>(prefix: &str, kind: T) -> String {
            format!("{}_{:?}", prefix, kind).to_lowercase()
        }
        fn entries<T: ContentTag>(prefix: &str) -> Vec<ContentEntry<T>> {
            T::ALL
                .iter()
                .map(|&kind| ContentEntry::new(kind, prefab_key(prefix, kind)))
                .collect()
        }
        let ingredient = |item, count| Ingredient { item, count };

        Self {
            foreground: entries("cell_fg"),
            background: entries("cell_bg"),
            ore: entries("ore"),
            ground_items: ItemKind::ALL
                .iter()
                .map(|&kind| {
                    GroundItemEntry::new(kind, prefab_key("ground", kind))
                        .placeable(prefab_key("place", kind))
                })
                .collect(),
            recipes: vec![
                Recipe {
                    output: ItemKind::Torch,
                    count: 4,
                    ingredients: SmallVec::from_slice(&[
                        ingredient(ItemKind::Wood, 1),
                        ingredient(ItemKind::Coal, 1),
                    ]),
                },
                Recipe {
                    output: ItemKind::Workbench,
                    count: 1,
                    ingredients: SmallVec::from_slice(&[ingredient(ItemKind::Wood, 10)]),
                },
                Recipe {
                    output: ItemKind::Furnace,
                    count: 1,
                    ingredients: SmallVec::from_slice(&[
                        ingredient(ItemKind::Stone, 20),
                        ingredient(ItemKind::Coal, 2),
                    ]),
                },
                Recipe {
                    output: ItemKind::Pickaxe,
                    count: 1,
                    ingredients: SmallVec::from_slice(&[
                        ingredient(ItemKind::Wood, 3),
                        ingredient(ItemKind::Iron, 2),
                    ]),
                },
            ],
        }
    }
}

/// The registry resource: one table per content category plus recipes.
#[derive(Resource, Debug, Clone)]
pub struct ContentRegistry {
    foreground: ContentTable<ForegroundKind>,
    background: ContentTable<BackgroundKind>,
    ore: ContentTable<OreKind>,
    ground_items: ContentTable<ItemKind, GroundItem>,
    recipes: Vec<Recipe>,
}

impl ContentRegistry {
    pub fn from_config(config: ContentConfig) -> Self {
        let registry = Self {
            foreground: ContentTable::from_entries(FOREGROUND_CATEGORY, config.foreground),
            background: ContentTable::from_entries(BACKGROUND_CATEGORY, config.background),
            ore: ContentTable::from_entries(ORE_CATEGORY, config.ore),
            ground_items: ContentTable::from_entries(GROUND_ITEM_CATEGORY, config.ground_items),
            recipes: config.recipes,
        };
        info!(
            "Content registry: {} foreground, {} background, {} ore, {} ground items ({} placeable), {} recipes",
            registry.foreground.len(),
            registry.background.len(),
            registry.ore.len(),
            registry.ground_items.len(),
            registry
                .ground_items
                .iter()
                .filter(|(_, item)| item.placeable.is_some())
                .count(),
            registry.recipes.len()
        );
        registry
    }

    /// Load and build the registry from a JSON content file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        ContentConfig::load_from_file(path).map(Self::from_config)
    }

    /// Reject configurations with empty tables, which no lookup can recover from.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let empty: Vec<&'static str> = [
            (self.foreground.is_empty(), self.foreground.category()),
            (self.background.is_empty(), self.background.category()),
            (self.ore.is_empty(), self.ore.category()),
            (self.ground_items.is_empty(), self.ground_items.category()),
        ]
        .into_iter()
        .filter_map(|(is_empty, category)| is_empty.then_some(category))
        .collect();

        if empty.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::EmptyTables(empty))
        }
    }

    pub fn foreground(&self, kind: ForegroundKind) -> &PrefabHandle {
        self.foreground.lookup(kind)
    }

    pub fn background(&self, kind: BackgroundKind) -> &PrefabHandle {
        self.background.lookup(kind)
    }

    pub fn ore(&self, kind: OreKind) -> &PrefabHandle {
        self.ore.lookup(kind)
    }

    pub fn ground_item(&self, kind: ItemKind) -> &PrefabHandle {
        &self.ground_items.lookup(kind).prefab
    }

    /// Placeable block of the ground item `kind`.
    ///
    /// Scans the ground-item table with the same miss policy as the other
    /// lookups. `None` when the matched entry (or the fallback entry) is not
    /// placeable.
    pub fn placeable_item(&self, kind: ItemKind) -> Option<&PrefabHandle> {
        self.ground_items
            .lookup_labeled(kind, PLACEABLE_ITEM_LABEL)
            .placeable
            .as_ref()
    }

    pub fn foreground_table(&self) -> &ContentTable<ForegroundKind> {
        &self.foreground
    }

    pub fn background_table(&self) -> &ContentTable<BackgroundKind> {
        &self.background
    }

    pub fn ore_table(&self) -> &ContentTable<OreKind> {
        &self.ore
    }

    pub fn ground_item_table(&self) -> &ContentTable<ItemKind, GroundItem> {
        &self.ground_items
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipes producing `item`, in configuration order.
    pub fn recipes_for(&self, item: ItemKind) -> impl Iterator<Item = &Recipe> + '_ {
        self.recipes.iter().filter(move |r| r.output == item)
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::from_config(ContentConfig::builtin())
    }
}
