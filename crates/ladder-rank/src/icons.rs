//! Tier icons for the three overlay slots.

use serde::Serialize;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};
use tracing::{debug, warn};

use crate::data::DataLayout;
use crate::host::{AssetLoader, ImageHandle};
use crate::rank::{LOWEST_TIER, TOP_TIER, UNRANKED_TIER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, IntoStaticStr, Display)]
pub enum IconSlotKind {
    Current,
    Next,
    Previous,
}

/// Load `tier`'s icon into `slot`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconRequest {
    pub slot: IconSlotKind,
    pub tier: u8,
}

impl IconRequest {
    /// Current tier, the tier above (capped at the top tier) and the tier
    /// below (never under the lowest ranked tier).
    pub fn for_tier(tier: u8) -> [IconRequest; 3] {
        [
            IconRequest {
                slot: IconSlotKind::Current,
                tier,
            },
            IconRequest {
                slot: IconSlotKind::Next,
                tier: (tier + 1).min(TOP_TIER),
            },
            IconRequest {
                slot: IconSlotKind::Previous,
                tier: tier.saturating_sub(1).max(LOWEST_TIER),
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IconSlot {
    tier: u8,
    image: Option<ImageHandle>,
}

impl IconSlot {
    pub fn tier(&self) -> u8 {
        self.tier
    }

    pub fn image(&self) -> Option<ImageHandle> {
        self.image
    }

    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct IconSlots {
    current: IconSlot,
    next: IconSlot,
    previous: IconSlot,
}

impl IconSlots {
    pub fn get(&self, kind: IconSlotKind) -> &IconSlot {
        match kind {
            IconSlotKind::Current => &self.current,
            IconSlotKind::Next => &self.next,
            IconSlotKind::Previous => &self.previous,
        }
    }

    fn get_mut(&mut self, kind: IconSlotKind) -> &mut IconSlot {
        match kind {
            IconSlotKind::Current => &mut self.current,
            IconSlotKind::Next => &mut self.next,
            IconSlotKind::Previous => &mut self.previous,
        }
    }

    /// Load the requested icon unless the slot already shows it.
    ///
    /// Returns `true` if the loader was asked for a new image.
    pub fn apply<L>(&mut self, request: IconRequest, layout: &DataLayout, loader: &mut L) -> bool
    where
        L: AssetLoader + ?Sized,
    {
        let slot = self.get_mut(request.slot);
        if slot.tier == request.tier && slot.is_loaded() {
            return false;
        }

        if let Some(old) = slot.image.take() {
            loader.release_image(old);
        }

        let path = layout.icon_path(request.tier);
        slot.tier = request.tier;
        slot.image = loader.load_image(&path);

        if slot.is_loaded() {
            debug!(
                "Loaded {} rank icon: {} (tier={})",
                request.slot,
                path.display(),
                request.tier
            );
        } else {
            warn!("Rank icon not available: {}", path.display());
        }
        true
    }

    /// Point every slot at the unranked icon
    pub fn reset<L>(&mut self, layout: &DataLayout, loader: &mut L)
    where
        L: AssetLoader + ?Sized,
    {
        for slot in IconSlotKind::iter() {
            self.apply(
                IconRequest {
                    slot,
                    tier: UNRANKED_TIER,
                },
                layout,
                loader,
            );
        }
    }

    pub fn release_all<L>(&mut self, loader: &mut L)
    where
        L: AssetLoader + ?Sized,
    {
        for slot in [&mut self.current, &mut self.next, &mut self.previous] {
            if let Some(image) = slot.image.take() {
                loader.release_image(image);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockAssetLoader;

    fn tiers(requests: [IconRequest; 3]) -> [u8; 3] {
        requests.map(|r| r.tier)
    }

    #[test]
    fn test_requests_clamp_to_ladder() {
        assert_eq!(tiers(IconRequest::for_tier(10)), [10, 11, 9]);
        assert_eq!(tiers(IconRequest::for_tier(22)), [22, 22, 21]);
        assert_eq!(tiers(IconRequest::for_tier(1)), [1, 2, 1]);
        assert_eq!(tiers(IconRequest::for_tier(0)), [0, 1, 1]);
    }

    #[test]
    fn test_apply_skips_loaded_tier() {
        let layout = DataLayout::new("/data");
        let mut loader = MockAssetLoader::default();
        let mut icons = IconSlots::default();

        let request = IconRequest {
            slot: IconSlotKind::Next,
            tier: 6,
        };
        assert!(icons.apply(request, &layout, &mut loader));
        assert!(!icons.apply(request, &layout, &mut loader));
        assert_eq!(loader.loaded.len(), 1);
        assert!(loader.loaded[0].ends_with("RankIcons/6.png"));
        assert_eq!(icons.get(IconSlotKind::Next).tier(), 6);
    }

    #[test]
    fn test_tier_change_releases_old_image() {
        let layout = DataLayout::new("/data");
        let mut loader = MockAssetLoader::default();
        let mut icons = IconSlots::default();

        for request in IconRequest::for_tier(5) {
            icons.apply(request, &layout, &mut loader);
        }
        for request in IconRequest::for_tier(6) {
            icons.apply(request, &layout, &mut loader);
        }
        assert_eq!(loader.loaded.len(), 6);
        assert_eq!(loader.released.len(), 3);
    }

    #[test]
    fn test_missing_image_retried_next_time() {
        let layout = DataLayout::new("/data");
        let mut loader = MockAssetLoader::default();
        loader.missing.push(layout.icon_path(4));
        let mut icons = IconSlots::default();

        let request = IconRequest {
            slot: IconSlotKind::Current,
            tier: 4,
        };
        icons.apply(request, &layout, &mut loader);
        assert!(!icons.get(IconSlotKind::Current).is_loaded());

        loader.missing.clear();
        assert!(icons.apply(request, &layout, &mut loader));
        assert!(icons.get(IconSlotKind::Current).is_loaded());
    }

    #[test]
    fn test_reset_and_release() {
        let layout = DataLayout::new("/data");
        let mut loader = MockAssetLoader::default();
        let mut icons = IconSlots::default();

        icons.reset(&layout, &mut loader);
        assert_eq!(icons.get(IconSlotKind::Previous).tier(), 0);
        assert!(icons.get(IconSlotKind::Previous).is_loaded());

        icons.release_all(&mut loader);
        assert_eq!(loader.released.len(), 3);
        assert!(!icons.get(IconSlotKind::Current).is_loaded());
    }
}
