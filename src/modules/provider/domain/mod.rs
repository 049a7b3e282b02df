use crate::modules::season::Season;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One catalog entry as the upstream API returns it.
///
/// Only `mal_id` is interpreted here; everything else rides along untouched
/// for the presentation layer to pick apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeRecord {
    pub mal_id: i64,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl AnimeRecord {
    /// Read a passthrough payload field without interpreting it.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}

/// One list-returning remote call against the catalog API.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogQuery {
    Top {
        page: i32,
        limit: i32,
    },
    Season {
        year: i32,
        season: Season,
        page: i32,
    },
    Search {
        query: String,
        limit: usize,
    },
}

impl CatalogQuery {
    /// Query for the browse category a "see all" affordance names.
    pub fn for_category(category: &str, current: crate::modules::season::SeasonOfYear) -> Option<Self> {
        use crate::modules::season::SeasonResolver;
        match category {
            "Top Anime" => Some(Self::Top { page: 1, limit: 25 }),
            "Currently Airing" => Some(Self::Season {
                year: current.year,
                season: current.season,
                page: 1,
            }),
            "Upcoming Anime" => {
                let next = SeasonResolver::next(current);
                Some(Self::Season {
                    year: next.year,
                    season: next.season,
                    page: 1,
                })
            }
            _ => None,
        }
    }
}
