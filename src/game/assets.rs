//=========================================================================
// Asset Identifiers
//=========================================================================
//
// Symbolic names for every image, spritesheet and sound the game uses.
// The host resolves them; the core never touches asset data.
//
//=========================================================================

//=== AssetId =============================================================

/// Opaque asset key resolved by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(pub &'static str);

pub const SKY: AssetId = AssetId("sky");
pub const PLATFORM: AssetId = AssetId("platform");
pub const PLAYER: AssetId = AssetId("dude");
pub const STAR: AssetId = AssetId("star");
pub const BOMB: AssetId = AssetId("bomb");
pub const FRIEND: AssetId = AssetId("friend");

pub const PICKUP_SOUND: AssetId = AssetId("pickup");
pub const DEATH_SOUND: AssetId = AssetId("death");
pub const WIN_SOUND: AssetId = AssetId("win");

//=== AssetRef ============================================================

/// How the host should load an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Spritesheet { frame_width: u32, frame_height: u32 },
    Audio,
}

/// One entry of the preload manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetRef {
    pub id: AssetId,
    pub kind: AssetKind,
}

/// Everything loaded once before the first scene starts.
pub const MANIFEST: &[AssetRef] = &[
    AssetRef { id: SKY, kind: AssetKind::Image },
    AssetRef { id: PLATFORM, kind: AssetKind::Image },
    AssetRef {
        id: PLAYER,
        kind: AssetKind::Spritesheet { frame_width: 32, frame_height: 48 },
    },
    AssetRef { id: STAR, kind: AssetKind::Image },
    AssetRef { id: BOMB, kind: AssetKind::Image },
    AssetRef { id: FRIEND, kind: AssetKind::Image },
    AssetRef { id: PICKUP_SOUND, kind: AssetKind::Audio },
    AssetRef { id: DEATH_SOUND, kind: AssetKind::Audio },
    AssetRef { id: WIN_SOUND, kind: AssetKind::Audio },
];

//=== SoundCue ============================================================

/// Fire-and-forget sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Pickup,
    Death,
    Win,
}

impl SoundCue {
    pub fn asset(self) -> AssetId {
        match self {
            Self::Pickup => PICKUP_SOUND,
            Self::Death => DEATH_SOUND,
            Self::Win => WIN_SOUND,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn manifest_ids_are_unique() {
        let ids: HashSet<_> = MANIFEST.iter().map(|asset| asset.id).collect();
        assert_eq!(ids.len(), MANIFEST.len());
    }

    #[test]
    fn every_sound_cue_is_preloaded() {
        for cue in [SoundCue::Pickup, SoundCue::Death, SoundCue::Win] {
            let entry = MANIFEST.iter().find(|asset| asset.id == cue.asset());
            assert_eq!(entry.map(|asset| asset.kind), Some(AssetKind::Audio));
        }
    }
}
