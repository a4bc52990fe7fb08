//! Query resolvers.
//!
//! Every operation maps to exactly one RAWG call plus a pure reshaping of
//! the result.  Upstream failures propagate with `?` and surface as
//! per-field execution errors; sibling fields in the same request still
//! resolve.

use std::cmp::Reverse;
use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use chrono::{Datelike, NaiveDate, Utc};

use catalog_rawg::{GamesQuery, RawgClient};

use super::types::{Game, Platform};

/// Upstream page size used when the caller omits `limit`.
const DEFAULT_PAGE_SIZE: i32 = 40;

/// Number of games returned by `mostPlayedGames`.
const MOST_PLAYED_COUNT: usize = 3;

/// Root of the gateway's query schema.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Games in upstream order.
    async fn games(&self, ctx: &Context<'_>, limit: Option<i32>) -> Result<Vec<Game>> {
        let client = ctx.data::<Arc<RawgClient>>()?;
        let games = client
            .list_games(GamesQuery {
                page_size: Some(limit.unwrap_or(DEFAULT_PAGE_SIZE)),
                dates: None,
            })
            .await?;
        Ok(games.into_iter().map(Game).collect())
    }

    /// Games releasing between today and one year from today, sorted by the
    /// numeric month of their release date.
    async fn upcoming_games(&self, ctx: &Context<'_>, limit: Option<i32>) -> Result<Vec<Game>> {
        let client = ctx.data::<Arc<RawgClient>>()?;
        let today = Utc::now().date_naive();
        let mut games = client
            .list_games(GamesQuery {
                page_size: Some(limit.unwrap_or(DEFAULT_PAGE_SIZE)),
                dates: Some((today, one_year_after(today))),
            })
            .await?;
        // The ordering compares the month component alone, so a next-January
        // release sorts before a this-November one.  Kept as-is: it is the
        // public behaviour clients of this service see today.
        games.sort_by_key(|g| released_month(&g.released));
        Ok(games.into_iter().map(Game).collect())
    }

    /// The three games with the highest recorded playtime among upstream's
    /// default result page.  No `page_size` is sent upstream.
    async fn most_played_games(&self, ctx: &Context<'_>) -> Result<Vec<Game>> {
        let client = ctx.data::<Arc<RawgClient>>()?;
        let mut games = client.list_games(GamesQuery::default()).await?;
        games.sort_by_key(|g| Reverse(g.playtime));
        games.truncate(MOST_PLAYED_COUNT);
        Ok(games.into_iter().map(Game).collect())
    }

    /// Platforms in upstream order.
    async fn platforms(&self, ctx: &Context<'_>) -> Result<Vec<Platform>> {
        let client = ctx.data::<Arc<RawgClient>>()?;
        let platforms = client.list_platforms().await?;
        Ok(platforms.into_iter().map(Platform).collect())
    }

    /// A single game by id.  An unknown id fails the field with whatever
    /// error upstream answered.
    async fn game(&self, ctx: &Context<'_>, id: i32) -> Result<Game> {
        let client = ctx.data::<Arc<RawgClient>>()?;
        Ok(Game(client.get_game(id).await?))
    }
}

/// Numeric month component of a `YYYY-MM-DD` date string.
///
/// Unparseable values sort first.
fn released_month(released: &str) -> u32 {
    released
        .split('-')
        .nth(1)
        .and_then(|m| m.parse().ok())
        .unwrap_or(0)
}

/// The same calendar day one year later.  Feb 29 clamps to Mar 1.
pub(crate) fn one_year_after(date: NaiveDate) -> NaiveDate {
    date.with_year(date.year() + 1).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(date.year() + 1, 3, 1).expect("Mar 1 exists in every year")
    })
}
