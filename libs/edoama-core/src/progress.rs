//! Learner progress: daily XP, level curve, streaks, completed units.
//!
//! The quiz apps kept these as page-level globals; here they are one value
//! the embedding application owns, persists however it likes, and passes
//! "today" into explicitly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::course::UnitRef;

/// XP for a correct exercise answer.
pub const XP_CORRECT_ANSWER: u32 = 5;
/// XP bonus for completing a unit.
pub const XP_UNIT_COMPLETE: u32 = 20;
/// XP for finishing a story.
pub const XP_STORY_COMPLETE: u32 = 15;
/// XP per correct answer in a review quiz.
pub const XP_QUIZ_QUESTION: u32 = 10;
/// Daily XP required to keep a streak alive.
pub const DEFAULT_DAILY_GOAL: u32 = 20;
/// Daily XP needed per level to level up; the goal is `level * XP_PER_LEVEL`.
pub const XP_PER_LEVEL: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// XP earned since the last day roll.
    pub xp_today: u32,
    pub level: u32,
    pub streak_days: u32,
    /// Last day [`Progress::roll_day`] accounted for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_day: Option<NaiveDate>,
    pub daily_goal: u32,
    /// Units finished at least once.
    pub completed: BTreeSet<UnitRef>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            xp_today: 0,
            level: 1,
            streak_days: 0,
            last_day: None,
            daily_goal: DEFAULT_DAILY_GOAL,
            completed: BTreeSet::new(),
        }
    }
}

impl Progress {
    /// Daily XP needed to reach the next level.
    pub fn level_goal(&self) -> u32 {
        self.level * XP_PER_LEVEL
    }

    /// Add XP. Reaching the level goal resets the XP counter and increments
    /// the level. Returns whether a level-up happened.
    pub fn award_xp(&mut self, amount: u32) -> bool {
        self.xp_today += amount;
        if self.xp_today >= self.level_goal() {
            self.xp_today = 0;
            self.level += 1;
            return true;
        }
        false
    }

    /// Account for a calendar day change. The streak increments if the
    /// finished day met the daily goal and resets otherwise; daily XP clears
    /// either way. Calling again with the same date is a no-op.
    pub fn roll_day(&mut self, today: NaiveDate) {
        if self.last_day == Some(today) {
            return;
        }
        if self.xp_today < self.daily_goal {
            self.streak_days = 0;
        } else {
            self.streak_days += 1;
        }
        self.last_day = Some(today);
        self.xp_today = 0;
    }

    /// Record a unit as complete and award [`XP_UNIT_COMPLETE`].
    /// Returns whether the bonus caused a level-up.
    pub fn complete_unit(&mut self, unit: UnitRef) -> bool {
        self.completed.insert(unit);
        self.award_xp(XP_UNIT_COMPLETE)
    }

    /// XP earned by a finished review quiz with `correct` right answers.
    pub fn quiz_xp(correct: u32) -> u32 {
        correct * XP_QUIZ_QUESTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn level_up_resets_daily_xp() {
        let mut p = Progress::default();
        assert!(!p.award_xp(XP_CORRECT_ANSWER));
        assert_eq!(p.xp_today, 5);

        // 25 more reaches the level-1 goal of 30
        assert!(p.award_xp(25));
        assert_eq!(p.level, 2);
        assert_eq!(p.xp_today, 0);
    }

    #[test]
    fn level_goal_scales_with_level() {
        let mut p = Progress::default();
        assert_eq!(p.level_goal(), 30);
        p.award_xp(30);
        assert_eq!(p.level_goal(), 60);
    }

    #[test]
    fn same_day_roll_is_a_noop() {
        let mut p = Progress::default();
        p.award_xp(10);
        p.roll_day(day(1));
        let snapshot = p.clone();
        p.roll_day(day(1));
        assert_eq!(p, snapshot);
    }

    #[test]
    fn meeting_the_goal_extends_the_streak() {
        let mut p = Progress::default();
        p.award_xp(DEFAULT_DAILY_GOAL);
        p.roll_day(day(1));
        assert_eq!(p.streak_days, 1);
        assert_eq!(p.xp_today, 0);

        p.award_xp(25);
        p.roll_day(day(2));
        assert_eq!(p.streak_days, 2);
    }

    #[test]
    fn missing_the_goal_resets_the_streak() {
        let mut p = Progress {
            streak_days: 7,
            ..Progress::default()
        };
        p.award_xp(3);
        p.roll_day(day(1));
        assert_eq!(p.streak_days, 0);
        assert_eq!(p.xp_today, 0);
    }

    #[test]
    fn completing_a_unit_records_and_rewards() {
        let mut p = Progress::default();
        p.complete_unit(UnitRef::new(0, 0));
        assert!(p.completed.contains(&UnitRef::new(0, 0)));
        assert_eq!(p.xp_today, XP_UNIT_COMPLETE);

        // completing again does not duplicate the record
        p.complete_unit(UnitRef::new(0, 0));
        assert_eq!(p.completed.len(), 1);
    }

    #[test]
    fn quiz_xp_scales_with_score() {
        assert_eq!(Progress::quiz_xp(0), 0);
        assert_eq!(Progress::quiz_xp(4), 40);
    }
}
