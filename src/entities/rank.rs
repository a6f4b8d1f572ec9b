//! Member rank and progression towards the next rank

use crate::define_category;
use serde::Serialize;

define_category! {
    /// Member rank, lowest first
    pub enum Rank {
        Private => "Private",
        Corporal => "Corporal",
        Sergeant => "Sergeant",
        Lieutenant => "Lieutenant",
        Captain => "Captain",
    }
}

impl Rank {
    /// The rank a member is promoted to next; Captain is the top rank
    pub fn next(self) -> Option<Rank> {
        match self {
            Rank::Private => Some(Rank::Corporal),
            Rank::Corporal => Some(Rank::Sergeant),
            Rank::Sergeant => Some(Rank::Lieutenant),
            Rank::Lieutenant => Some(Rank::Captain),
            Rank::Captain => None,
        }
    }

    /// Experience needed to reach the next rank
    pub fn experience_to_next(self) -> Option<u32> {
        match self {
            Rank::Private => Some(1000),
            Rank::Corporal => Some(2000),
            Rank::Sergeant => Some(3000),
            Rank::Lieutenant => Some(5000),
            Rank::Captain => None,
        }
    }
}

/// Progress bar state for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankProgress {
    pub rank: Rank,
    pub experience: u32,
    pub next_rank: Option<Rank>,
    pub experience_to_next: Option<u32>,
    /// Percentage towards the next rank, within `0.0..=100.0`
    pub percent: f64,
}

impl RankProgress {
    pub fn compute(rank: Rank, experience: u32) -> Self {
        let threshold = rank.experience_to_next();
        let percent = match threshold {
            Some(t) => (f64::from(experience) / f64::from(t) * 100.0).clamp(0.0, 100.0),
            None => 100.0,
        };

        Self {
            rank,
            experience,
            next_rank: rank.next(),
            experience_to_next: threshold,
            percent,
        }
    }

    pub fn is_max_rank(&self) -> bool {
        self.next_rank.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    #[test]
    fn test_promotion_ladder() {
        let mut rank = Rank::Private;
        let mut ladder = vec![rank];
        while let Some(next) = rank.next() {
            ladder.push(next);
            rank = next;
        }
        assert_eq!(ladder.len(), 5);
        assert_eq!(ladder.last(), Some(&Rank::Captain));
        assert!(Rank::Private < Rank::Captain);
    }

    #[test]
    fn test_progress_percentage() {
        let progress = RankProgress::compute(Rank::Corporal, 500);
        assert_eq!(progress.next_rank, Some(Rank::Sergeant));
        assert_eq!(progress.experience_to_next, Some(2000));
        assert!((progress.percent - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_is_clamped() {
        let progress = RankProgress::compute(Rank::Private, 4500);
        assert!((progress.percent - 100.0).abs() < f64::EPSILON);

        let progress = RankProgress::compute(Rank::Sergeant, 0);
        assert_eq!(progress.percent, 0.0);
    }

    #[test]
    fn test_captain_is_terminal() {
        let progress = RankProgress::compute(Rank::Captain, 12_000);
        assert!(progress.is_max_rank());
        assert_eq!(progress.experience_to_next, None);
        assert!((progress.percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rank_names() {
        assert_eq!(Rank::from_name("Lieutenant"), Some(Rank::Lieutenant));
        assert_eq!(Rank::from_name("lieutenant"), None);
        assert_eq!(Rank::Sergeant.to_string(), "Sergeant");
    }
}
