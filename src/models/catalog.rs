//! Static content catalog
//!
//! Every option list the screens show (home menu, diagnostic modes, loyalty
//! levels, reinforcement reasons, schedule actions) lives here as immutable
//! data, separate from the navigation state machine. The built-in catalog is
//! embedded at compile time; a replacement can be loaded from a JSON file.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::models::enums::{LevelId, Mood, ReasonId, Screen};

/// Embedded default catalog
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Color family of a button or card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Red,
    Yellow,
    Green,
    #[default]
    Slate,
    Indigo,
    Purple,
    Pink,
}

/// Home screen menu button
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuEntry {
    pub title: String,
    pub icon: String,
    pub accent: Accent,
    #[serde(default)]
    pub mood: Option<Mood>,
    pub target: Screen,
}

/// "Keep it up" card on the home screen
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GoalCard {
    pub headline: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HomeContent {
    pub greeting: String,
    pub prompt: String,
    pub menu: Vec<MenuEntry>,
    pub goal: GoalCard,
}

/// One way of taking the diagnostic (online or in person)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiagnosticMode {
    /// Button label on the diagnostic root
    pub entry: String,
    /// Section label once the mode is open
    pub label: String,
    pub icon: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiagnosticContent {
    pub online: DiagnosticMode,
    pub in_person: DiagnosticMode,
}

/// Class-history tier
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoyaltyLevel {
    pub id: LevelId,
    pub title: String,
    pub message: String,
    /// Offered class lengths in minutes
    pub durations: Vec<u16>,
    pub icon: String,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub loyalty: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassContent {
    pub duration_prompt: String,
    pub loyalty_reward: String,
    pub levels: Vec<LoyaltyLevel>,
}

/// Content shown after picking a reinforcement reason
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReasonDetail {
    pub headline: String,
    pub message: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reason {
    pub id: ReasonId,
    pub title: String,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub accent: Accent,
    /// Reasons without detail open an empty sub-screen
    #[serde(default)]
    pub detail: Option<ReasonDetail>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReinforcementContent {
    pub reasons: Vec<Reason>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduleAction {
    pub title: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduleContent {
    pub headline: String,
    pub message: String,
    pub progress_percent: u8,
    pub days_completed: u8,
    pub days_total: u8,
    pub actions: Vec<ScheduleAction>,
}

/// Complete content catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    pub home: HomeContent,
    pub diagnostic: DiagnosticContent,
    pub class: ClassContent,
    pub reinforcement: ReinforcementContent,
    pub schedule: ScheduleContent,
}

impl Catalog {
    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load and validate a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.class.levels.is_empty() {
            return Err(CatalogError::Empty("loyalty levels"));
        }
        if self.reinforcement.reasons.is_empty() {
            return Err(CatalogError::Empty("reinforcement reasons"));
        }

        let mut seen = HashSet::new();
        for level in &self.class.levels {
            if !seen.insert(level.id) {
                return Err(CatalogError::Duplicate {
                    kind: "level",
                    id: format!("{:?}", level.id),
                });
            }
            if level.durations.is_empty() {
                return Err(CatalogError::NoDurations(format!("{:?}", level.id)));
            }
        }

        let mut seen = HashSet::new();
        for reason in &self.reinforcement.reasons {
            if !seen.insert(reason.id) {
                return Err(CatalogError::Duplicate {
                    kind: "reason",
                    id: format!("{:?}", reason.id),
                });
            }
        }

        let mut seen = HashSet::new();
        for entry in &self.home.menu {
            if !seen.insert(entry.target) {
                return Err(CatalogError::Duplicate {
                    kind: "home menu target",
                    id: format!("{:?}", entry.target),
                });
            }
        }
        for screen in Screen::ALL.iter().filter(|s| **s != Screen::Home) {
            if !seen.contains(screen) {
                return Err(CatalogError::MissingTarget(format!("{:?}", screen)));
            }
        }

        let schedule = &self.schedule;
        if schedule.days_total == 0 || schedule.days_completed > schedule.days_total {
            return Err(CatalogError::DaysOutOfRange {
                completed: schedule.days_completed,
                total: schedule.days_total,
            });
        }

        Ok(())
    }

    /// Look up a loyalty level by id
    pub fn level(&self, id: LevelId) -> Option<&LoyaltyLevel> {
        self.class.levels.iter().find(|l| l.id == id)
    }

    /// Look up a reinforcement reason by id
    pub fn reason(&self, id: ReasonId) -> Option<&Reason> {
        self.reinforcement.reasons.iter().find(|r| r.id == id)
    }
}

/// Format a class length for a duration button
pub fn format_minutes(minutes: u16) -> String {
    format!("{} min", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn builtin_json() -> serde_json::Value {
        serde_json::from_str(BUILTIN_CATALOG).unwrap()
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.home.menu.len(), 4);
        assert_eq!(catalog.class.levels.len(), 7);
        assert_eq!(catalog.reinforcement.reasons.len(), 8);
        assert_eq!(catalog.schedule.actions.len(), 4);
        assert_eq!(catalog.schedule.progress_percent, 85);
    }

    #[test]
    fn test_builtin_levels_follow_display_order() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<LevelId> = catalog.class.levels.iter().map(|l| l.id).collect();
        assert_eq!(ids, LevelId::ALL.to_vec());
    }

    #[test]
    fn test_only_crazy_level_is_loyalty_flagged() {
        let catalog = Catalog::builtin().unwrap();
        let flagged: Vec<LevelId> = catalog
            .class
            .levels
            .iter()
            .filter(|l| l.loyalty)
            .map(|l| l.id)
            .collect();
        assert_eq!(flagged, vec![LevelId::Crazy]);
        assert!(catalog.level(LevelId::Crazy).unwrap().title.contains("180"));
    }

    #[test]
    fn test_first_and_enjoy_durations() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.level(LevelId::First).unwrap().durations,
            vec![30, 45, 60, 90, 110]
        );
        assert_eq!(catalog.level(LevelId::Enjoy).unwrap().durations, vec![45, 60, 90]);
    }

    #[test]
    fn test_four_reasons_have_detail() {
        let catalog = Catalog::builtin().unwrap();
        let with_detail: Vec<ReasonId> = catalog
            .reinforcement
            .reasons
            .iter()
            .filter(|r| r.detail.is_some())
            .map(|r| r.id)
            .collect();
        assert_eq!(
            with_detail,
            vec![
                ReasonId::Sick,
                ReasonId::Lazy,
                ReasonId::CouldNotAttend,
                ReasonId::NotMyself
            ]
        );
        assert!(catalog.reason(ReasonId::Workshop).unwrap().detail.is_none());
    }

    #[test]
    fn test_duplicate_level_rejected() {
        let mut json = builtin_json();
        let levels = json["class"]["levels"].as_array_mut().unwrap();
        let copy = levels[0].clone();
        levels.push(copy);
        let err = Catalog::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(err, CatalogError::Duplicate { kind: "level", .. }));
    }

    #[test]
    fn test_level_without_durations_rejected() {
        let mut json = builtin_json();
        json["class"]["levels"][2]["durations"] = serde_json::json!([]);
        let err = Catalog::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(err, CatalogError::NoDurations(_)));
    }

    #[test]
    fn test_missing_home_target_rejected() {
        let mut json = builtin_json();
        json["home"]["menu"].as_array_mut().unwrap().pop();
        let err = Catalog::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(err, CatalogError::MissingTarget(ref s) if s == "Schedule"));
    }

    #[test]
    fn test_schedule_days_checked() {
        let mut json = builtin_json();
        json["schedule"]["days_completed"] = serde_json::json!(9);
        let err = Catalog::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DaysOutOfRange { completed: 9, total: 7 }
        ));
    }

    #[test]
    fn test_unknown_level_id_is_parse_error() {
        let mut json = builtin_json();
        json["class"]["levels"][0]["id"] = serde_json::json!("legendary");
        let err = Catalog::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", BUILTIN_CATALOG).unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog, Catalog::builtin().unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45), "45 min");
    }
}
