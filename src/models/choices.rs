//! Option lists per screen
//!
//! Maps the current navigation state to the ordered list of selectable
//! rows the renderer draws and the key handler activates.

use crate::models::catalog::{format_minutes, Accent, Catalog};
use crate::models::enums::{DiagnosticSub, Mood, ReinforcementSub, Screen};
use crate::models::nav::{Action, NavState};

/// One selectable row or tile
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub label: String,
    pub icon: Option<String>,
    pub accent: Accent,
    pub mood: Option<Mood>,
    pub action: Action,
}

impl Choice {
    fn inert(label: &str) -> Self {
        Self {
            label: label.to_string(),
            icon: None,
            accent: Accent::Slate,
            mood: None,
            action: Action::Inert(label.to_string()),
        }
    }

    #[cfg(test)]
    pub fn is_inert(&self) -> bool {
        matches!(self.action, Action::Inert(_))
    }
}

/// Options shown for the given state, in display order
pub fn choices(state: &NavState, catalog: &Catalog) -> Vec<Choice> {
    match state.screen {
        Screen::Home => catalog
            .home
            .menu
            .iter()
            .map(|entry| Choice {
                label: entry.title.clone(),
                icon: Some(entry.icon.clone()),
                accent: entry.accent,
                mood: entry.mood,
                action: Action::GoTo(entry.target),
            })
            .collect(),

        Screen::Diagnostic => {
            let diag = &catalog.diagnostic;
            match state.diagnostic {
                DiagnosticSub::Root => vec![
                    Choice {
                        label: diag.online.entry.clone(),
                        icon: Some(diag.online.icon.clone()),
                        accent: Accent::Blue,
                        mood: None,
                        action: Action::SelectDiagnostic(DiagnosticSub::Online),
                    },
                    Choice {
                        label: diag.in_person.entry.clone(),
                        icon: Some(diag.in_person.icon.clone()),
                        accent: Accent::Blue,
                        mood: None,
                        action: Action::SelectDiagnostic(DiagnosticSub::InPerson),
                    },
                ],
                DiagnosticSub::Online => diag.online.options.iter().map(|o| Choice::inert(o)).collect(),
                DiagnosticSub::InPerson => diag
                    .in_person
                    .options
                    .iter()
                    .map(|o| Choice::inert(o))
                    .collect(),
            }
        }

        Screen::Class => match state.selected_level {
            None => catalog
                .class
                .levels
                .iter()
                .map(|level| Choice {
                    label: level.title.clone(),
                    icon: Some(level.icon.clone()),
                    accent: Accent::Red,
                    mood: Some(level.mood),
                    action: Action::SelectClassLevel(level.id),
                })
                .collect(),
            Some(id) => catalog
                .level(id)
                .map(|level| {
                    level
                        .durations
                        .iter()
                        .map(|m| Choice::inert(&format_minutes(*m)))
                        .collect()
                })
                .unwrap_or_default(),
        },

        Screen::Reinforcement => match state.reinforcement {
            ReinforcementSub::Root => catalog
                .reinforcement
                .reasons
                .iter()
                .map(|reason| Choice {
                    label: reason.title.clone(),
                    icon: None,
                    accent: reason.accent,
                    mood: Some(reason.mood),
                    action: Action::SelectReinforcement(ReinforcementSub::Reason(reason.id)),
                })
                .collect(),
            ReinforcementSub::Reason(id) => catalog
                .reason(id)
                .and_then(|r| r.detail.as_ref())
                .map(|detail| detail.options.iter().map(|o| Choice::inert(o)).collect())
                .unwrap_or_default(),
        },

        Screen::Schedule => catalog
            .schedule
            .actions
            .iter()
            .map(|action| Choice {
                icon: Some(action.icon.clone()),
                accent: Accent::Green,
                ..Choice::inert(&action.title)
            })
            .collect(),
    }
}

/// Number of columns the options are laid out in
pub fn grid_columns(state: &NavState) -> usize {
    match state.screen {
        Screen::Reinforcement if state.reinforcement == ReinforcementSub::Root => 2,
        Screen::Class if state.selected_level.is_some() => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{LevelId, ReasonId, ReentryPolicy};

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn labels(choices: &[Choice]) -> Vec<&str> {
        choices.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_home_menu_targets() {
        let catalog = catalog();
        let actions: Vec<Action> = choices(&NavState::new(), &catalog)
            .into_iter()
            .map(|c| c.action)
            .collect();
        assert_eq!(
            actions,
            vec![
                Action::GoTo(Screen::Diagnostic),
                Action::GoTo(Screen::Class),
                Action::GoTo(Screen::Reinforcement),
                Action::GoTo(Screen::Schedule),
            ]
        );
    }

    #[test]
    fn test_diagnostic_leaves_are_inert() {
        let catalog = catalog();
        let root = NavState::new().go_to(Screen::Diagnostic, ReentryPolicy::Preserve);
        assert_eq!(choices(&root, &catalog).len(), 2);

        let online = root.select_diagnostic(DiagnosticSub::Online);
        let opts = choices(&online, &catalog);
        assert_eq!(opts.len(), 2);
        assert!(opts.iter().all(Choice::is_inert));

        let in_person = root.select_diagnostic(DiagnosticSub::InPerson);
        let opts = choices(&in_person, &catalog);
        assert_eq!(opts.len(), 3);
        assert!(opts.iter().all(Choice::is_inert));
    }

    #[test]
    fn test_class_durations_per_level() {
        let catalog = catalog();
        let class = NavState::new().go_to(Screen::Class, ReentryPolicy::Preserve);
        assert_eq!(choices(&class, &catalog).len(), 7);

        let first = class.select_class_level(&catalog, LevelId::First);
        assert_eq!(
            labels(&choices(&first, &catalog)),
            vec!["30 min", "45 min", "60 min", "90 min", "110 min"]
        );

        let enjoy = class.select_class_level(&catalog, LevelId::Enjoy);
        let opts = choices(&enjoy, &catalog);
        assert_eq!(labels(&opts), vec!["45 min", "60 min", "90 min"]);
        assert!(opts.iter().all(Choice::is_inert));
    }

    #[test]
    fn test_reinforcement_reasons_and_dead_ends() {
        let catalog = catalog();
        let root = NavState::new().go_to(Screen::Reinforcement, ReentryPolicy::Preserve);
        assert_eq!(choices(&root, &catalog).len(), 8);
        assert_eq!(grid_columns(&root), 2);

        let sick = root.select_reinforcement(ReinforcementSub::Reason(ReasonId::Sick));
        assert_eq!(choices(&sick, &catalog).len(), 5);
        assert_eq!(grid_columns(&sick), 1);

        let test = root.select_reinforcement(ReinforcementSub::Reason(ReasonId::Test));
        assert!(choices(&test, &catalog).is_empty());
    }

    #[test]
    fn test_schedule_actions_are_inert() {
        let catalog = catalog();
        let state = NavState::new().go_to(Screen::Schedule, ReentryPolicy::Preserve);
        let opts = choices(&state, &catalog);
        assert_eq!(opts.len(), 4);
        assert!(opts.iter().all(Choice::is_inert));
        assert!(opts.iter().all(|c| c.icon.is_some()));
    }

    #[test]
    fn test_every_inert_choice_keeps_state() {
        let catalog = catalog();
        let policy = ReentryPolicy::Preserve;
        let states = [
            NavState::new()
                .go_to(Screen::Diagnostic, policy)
                .select_diagnostic(DiagnosticSub::InPerson),
            NavState::new()
                .go_to(Screen::Class, policy)
                .select_class_level(&catalog, LevelId::Crazy),
            NavState::new()
                .go_to(Screen::Reinforcement, policy)
                .select_reinforcement(ReinforcementSub::Reason(ReasonId::NotMyself)),
            NavState::new().go_to(Screen::Schedule, policy),
        ];
        for state in states {
            for choice in choices(&state, &catalog) {
                assert!(choice.is_inert());
                assert_eq!(state.apply(&choice.action, &catalog, policy), state);
            }
        }
    }
}
