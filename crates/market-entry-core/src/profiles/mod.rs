pub mod archetype;
pub mod ranking_weights;

pub use archetype::{
    all_archetypes, resolve_archetype, sector_insight, sector_weights, ArchetypeProfile,
    ArchetypeWeights, SectorArchetype, SectorInsight, SectorRef,
};
pub use ranking_weights::{RankingWeightOverrides, RankingWeights};
