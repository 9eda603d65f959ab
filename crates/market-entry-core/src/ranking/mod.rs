//! Cohort-relative country ranking for one sector.

pub mod cohort;
pub mod podium;
pub mod ranker;
pub mod summary;

pub use cohort::CohortStats;
pub use podium::{
    suitability_score, top_recommendations, winning_factor, Medal, TopRecommendation, WinningFactor,
    DEFAULT_PODIUM_SIZE,
};
pub use ranker::{
    get_country_rankings, rank_sector, CompositeScores, RankedCountry, RankingInput, RankingReport,
    RankingTier,
};
pub use summary::{sector_summary, volume_label, SectorSummary};
