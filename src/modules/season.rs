use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Broadcast season as Jikan names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Lowercase name, also the Jikan URL path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "winter" => Some(Self::Winter),
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "fall" | "autumn" => Some(Self::Fall),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A season anchored to a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonOfYear {
    pub season: Season,
    pub year: i32,
}

/// Pure date-to-season mapping used to build season-based queries.
pub struct SeasonResolver;

impl SeasonResolver {
    /// Season containing `date`. Quarters by zero-based month index:
    /// 0-2 winter, 3-5 spring, 6-8 summer, 9-11 fall.
    pub fn current(date: NaiveDate) -> SeasonOfYear {
        let season = match date.month0() {
            0..=2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Fall,
        };
        SeasonOfYear {
            season,
            year: date.year(),
        }
    }

    /// The broadcast season after `current`; fall rolls into the next
    /// year's winter.
    pub fn next(current: SeasonOfYear) -> SeasonOfYear {
        match current.season {
            Season::Fall => SeasonOfYear {
                season: Season::Winter,
                year: current.year + 1,
            },
            Season::Winter => SeasonOfYear {
                season: Season::Spring,
                year: current.year,
            },
            Season::Spring => SeasonOfYear {
                season: Season::Summer,
                year: current.year,
            },
            Season::Summer => SeasonOfYear {
                season: Season::Fall,
                year: current.year,
            },
        }
    }

    pub fn today() -> SeasonOfYear {
        Self::current(Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn october_is_fall() {
        let resolved = SeasonResolver::current(date(2024, 10, 15));
        assert_eq!(resolved.season, Season::Fall);
        assert_eq!(resolved.year, 2024);
    }

    #[test]
    fn quarter_boundaries() {
        assert_eq!(SeasonResolver::current(date(2024, 1, 1)).season, Season::Winter);
        assert_eq!(SeasonResolver::current(date(2024, 3, 31)).season, Season::Winter);
        assert_eq!(SeasonResolver::current(date(2024, 4, 1)).season, Season::Spring);
        assert_eq!(SeasonResolver::current(date(2024, 6, 30)).season, Season::Spring);
        assert_eq!(SeasonResolver::current(date(2024, 7, 1)).season, Season::Summer);
        assert_eq!(SeasonResolver::current(date(2024, 9, 30)).season, Season::Summer);
        assert_eq!(SeasonResolver::current(date(2024, 12, 31)).season, Season::Fall);
    }

    #[test]
    fn fall_rolls_into_next_years_winter() {
        let next = SeasonResolver::next(SeasonOfYear {
            season: Season::Fall,
            year: 2024,
        });
        assert_eq!(next.season, Season::Winter);
        assert_eq!(next.year, 2025);
    }

    #[test]
    fn other_seasons_stay_in_year() {
        for (from, to) in [
            (Season::Winter, Season::Spring),
            (Season::Spring, Season::Summer),
            (Season::Summer, Season::Fall),
        ] {
            let next = SeasonResolver::next(SeasonOfYear {
                season: from,
                year: 2024,
            });
            assert_eq!(next.season, to);
            assert_eq!(next.year, 2024);
        }
    }

    #[test]
    fn season_names_match_jikan_paths() {
        assert_eq!(Season::Winter.as_str(), "winter");
        assert_eq!(Season::parse("Fall"), Some(Season::Fall));
        assert_eq!(Season::parse("autumn"), Some(Season::Fall));
        assert_eq!(Season::parse("monsoon"), None);
    }
}
