use crate::models::Season;

use super::ReportError;

/// Select the season with the most recent start date.
///
/// Seasons whose start date does not parse are never candidates. If the
/// list is empty, or nothing in it has a usable start date, this fails with
/// `NoSeasonsAvailable`. When two seasons share the same start date the
/// first one scanned wins; that is stable within a run but no ordering
/// preference is implied beyond that.
pub fn latest_season(seasons: &[Season]) -> Result<&Season, ReportError> {
    let mut best: Option<(&Season, chrono::NaiveDate)> = None;
    for season in seasons {
        let Some(start) = season.start_key() else {
            continue;
        };
        match best {
            Some((_, best_start)) if start <= best_start => {}
            _ => best = Some((season, start)),
        }
    }
    best.map(|(season, _)| season)
        .ok_or(ReportError::NoSeasonsAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season(id: &str, start: &str, end: &str) -> Season {
        Season {
            id: id.to_string(),
            name: format!("Session {}", id),
            start_date: start.to_string(),
            end_date: end.to_string(),
            is_active: true,
            description: None,
        }
    }

    #[test]
    fn test_latest_by_start_date() {
        let seasons = vec![
            season("old", "2024-01-01", "2024-03-31"),
            season("new", "2025-01-01", "2025-03-31"),
        ];
        assert_eq!(latest_season(&seasons).unwrap().id, "new");

        // Input order does not matter for distinct start dates
        let seasons = vec![
            season("new", "2025-01-01", "2025-03-31"),
            season("old", "2024-01-01", "2024-03-31"),
        ];
        assert_eq!(latest_season(&seasons).unwrap().id, "new");
    }

    #[test]
    fn test_empty_list_fails() {
        assert_eq!(latest_season(&[]).unwrap_err(), ReportError::NoSeasonsAvailable);
    }

    #[test]
    fn test_all_unparseable_fails() {
        let seasons = vec![season("x", "soon", "later")];
        assert_eq!(
            latest_season(&seasons).unwrap_err(),
            ReportError::NoSeasonsAvailable
        );
    }

    #[test]
    fn test_unparseable_start_never_selected() {
        let seasons = vec![
            season("bad", "not-a-date", "2026-01-01"),
            season("good", "2024-06-01", "2024-09-30"),
        ];
        assert_eq!(latest_season(&seasons).unwrap().id, "good");
    }

    #[test]
    fn test_tie_is_deterministic() {
        let seasons = vec![
            season("first", "2025-01-01", "2025-02-01"),
            season("second", "2025-01-01", "2025-03-01"),
        ];
        // First scanned season holding the maximum wins, on every call
        let a = latest_season(&seasons).unwrap().id.clone();
        let b = latest_season(&seasons).unwrap().id.clone();
        assert_eq!(a, b);
        assert_eq!(a, "first");
    }
}
