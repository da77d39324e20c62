//! Content-type tags.
//!
//! Closed enums naming every kind of terrain, ore and item the game knows.
//! Each implements [`ContentTag`] so a
//! [`ContentTable`](crate::resources::contentregistry::ContentTable) can index
//! its slots by ordinal instead of scanning.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A discrete content-type tag usable as a registry key.
pub trait ContentTag: Copy + Eq + Debug + Send + Sync + 'static {
    /// Every variant, in declaration order. `ALL[t.ordinal()] == t`.
    const ALL: &'static [Self];

    /// Position of this variant in [`ContentTag::ALL`].
    fn ordinal(self) -> usize;
}

macro_rules! content_tag {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl ContentTag for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn ordinal(self) -> usize {
                self as usize
            }
        }
    };
}

content_tag! {
    /// Solid terrain occupying the foreground layer of a cell.
    ForegroundKind {
        Dirt,
        Grass,
        Stone,
        Sand,
        Ore,
        Wood,
        Leaves,
        Bedrock,
    }
}

content_tag! {
    /// Wall terrain drawn behind the foreground layer.
    BackgroundKind {
        Dirt,
        Stone,
        Sand,
        Wood,
    }
}

content_tag! {
    /// Ore veins embedded in foreground `Ore` cells.
    OreKind {
        Coal,
        Copper,
        Iron,
        Gold,
        Diamond,
    }
}

content_tag! {
    /// Items that can lie on the ground, sit in an inventory or be placed.
    ItemKind {
        Dirt,
        Stone,
        Sand,
        Wood,
        Coal,
        Copper,
        Iron,
        Gold,
        Diamond,
        Torch,
        Pickaxe,
        Workbench,
        Furnace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_ordinals_match<T: ContentTag>() {
        for (i, tag) in T::ALL.iter().enumerate() {
            assert_eq!(tag.ordinal(), i, "{:?}", tag);
        }
    }

    #[test]
    fn test_ordinals_index_all() {
        assert_ordinals_match::<ForegroundKind>();
        assert_ordinals_match::<BackgroundKind>();
        assert_ordinals_match::<OreKind>();
        assert_ordinals_match::<ItemKind>();
    }

    #[test]
    fn test_variant_counts() {
        assert_eq!(ForegroundKind::ALL.len(), 8);
        assert_eq!(BackgroundKind::ALL.len(), 4);
        assert_eq!(OreKind::ALL.len(), 5);
        assert_eq!(ItemKind::ALL.len(), 13);
    }

    #[test]
    fn test_deserialize_by_variant_name() {
        let kind: OreKind = serde_json::from_str("\"Iron\"").unwrap();
        assert_eq!(kind, OreKind::Iron);
        assert!(serde_json::from_str::<OreKind>("\"Mithril\"").is_err());
    }
}
