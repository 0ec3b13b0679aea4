//! Browse page handler
//!
//! GET / endpoint backing the product/price browsing page: ranked item
//! search with full price history, fuzzy category suggestions, and an
//! optional single-item detail lookup.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, Order,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    sea_query::{Expr, Func},
};
use tracing::{error, info};

use crate::AppState;
use crate::entities::{
    item, item_price,
    prelude::{Item, ItemPrice, Unit},
    unit,
};
use crate::models::browse::{
    BrowseItem, BrowseQuery, BrowseResponse, ErrorResponse, ItemDetail, SearchRanking,
};
use crate::services::category_search;

/// Item columns of the grouped search, one row per group.
#[derive(Debug, FromQueryResult)]
struct RankedItemRow {
    id: i32,
    store_id: String,
    title: String,
    image_url: Option<String>,
    category: Option<String>,
}

/// GET /
///
/// # Query Parameters
/// - `q`: free-text search term (default "")
/// - `category`: exact category filter (default "")
/// - `item`: external store id for the detail lookup (default "")
///
/// # Response
/// - 200: items + category suggestions, `itemVal` present when resolved
/// - 500: database error
pub async fn browse(
    State(state): State<AppState>,
    Query(params): Query<BrowseQuery>,
) -> Result<Json<BrowseResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        q = %params.q,
        category = %params.category,
        item = %params.item,
        "Loading browse page"
    );

    let item_val = if params.item.is_empty() {
        None
    } else {
        find_item_detail(&state.db, &params.item)
            .await
            .map_err(db_error)?
    };

    // Nothing to search for; the detail lookup alone satisfies the request.
    if params.q.is_empty() && params.category.is_empty() {
        return Ok(Json(BrowseResponse {
            items: vec![],
            categories: vec![],
            item_val,
        }));
    }

    let ranking = SearchRanking::for_request(&params.category);
    let items = search_items(&state.db, &params.q, &params.category, ranking).await?;

    let distinct = distinct_categories(&state.db).await.map_err(db_error)?;
    let categories = category_search::rank_categories(&distinct, &params.q, 10);

    info!(
        items = items.len(),
        categories = categories.len(),
        "Browse search completed"
    );

    Ok(Json(BrowseResponse {
        items,
        categories,
        item_val,
    }))
}

/// Resolve the single-item detail record by external store id.
///
/// The most recent price observation wins; an item with no observations
/// still resolves, with the price fields absent.
async fn find_item_detail(
    db: &DatabaseConnection,
    store_id: &str,
) -> Result<Option<ItemDetail>, DbErr> {
    let Some(found) = Item::find()
        .filter(item::Column::StoreId.eq(store_id))
        .one(db)
        .await?
    else {
        return Ok(None);
    };

    let latest = ItemPrice::find()
        .filter(item_price::Column::ItemId.eq(found.id))
        .find_also_related(Unit)
        .order_by(item_price::Column::Date, Order::Desc)
        .one(db)
        .await?;

    let (price_row, unit_row) = match latest {
        Some((price, unit)) => (Some(price), unit),
        None => (None, None),
    };

    Ok(Some(ItemDetail {
        id: found.store_id,
        title: found.title,
        date: price_row.as_ref().map(|p| p.date),
        price: price_row.as_ref().map(|p| p.price),
        image: found.image_url,
        availability: price_row.as_ref().map(|p| p.availability.clone()),
        price_per_unit: price_row.as_ref().map(|p| p.price_per_unit),
        category: found.category,
        unit_display: unit_row.map(|u| u.unit_display),
    }))
}

/// Run the grouped item search and assemble each hit's price series.
async fn search_items(
    db: &DatabaseConnection,
    q: &str,
    category: &str,
    ranking: SearchRanking,
) -> Result<Vec<BrowseItem>, (StatusCode, Json<ErrorResponse>)> {
    // Unanchored, case-insensitive substring match on the title.
    let pattern = format!("%{}%", q.to_lowercase());

    let mut select = Item::find()
        .select_only()
        .columns([
            item::Column::Id,
            item::Column::StoreId,
            item::Column::Title,
            item::Column::ImageUrl,
            item::Column::Category,
        ])
        .join(JoinType::LeftJoin, item::Relation::ItemPrice.def())
        .filter(Expr::expr(Func::lower(Expr::col(item::Column::Title))).like(pattern))
        .group_by(item::Column::Id);

    if !category.is_empty() {
        select = select.filter(item::Column::Category.eq(category));
    }

    let order = match ranking {
        SearchRanking::CheapestPerUnit => item_price::Column::PricePerUnit.min(),
        SearchRanking::BestSelling => item_price::Column::SalesRank.min(),
    };

    let rows: Vec<RankedItemRow> = select
        .order_by(order, Order::Asc)
        .limit(ranking.result_limit())
        .into_model()
        .all(db)
        .await
        .map_err(db_error)?;

    // One pass over the observations of all hits, grouped in memory so the
    // per-item series keeps database order.
    let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
    let observations = ItemPrice::find()
        .filter(item_price::Column::ItemId.is_in(ids))
        .find_also_related(Unit)
        .order_by(item_price::Column::ItemId, Order::Asc)
        .order_by(item_price::Column::Id, Order::Asc)
        .all(db)
        .await
        .map_err(db_error)?;

    let mut series: HashMap<i32, Vec<(item_price::Model, Option<unit::Model>)>> = HashMap::new();
    for (observation, unit) in observations {
        series
            .entry(observation.item_id)
            .or_default()
            .push((observation, unit));
    }

    rows.into_iter()
        .map(|row| {
            let group = series.remove(&row.id).unwrap_or_default();
            build_browse_item(row, group)
        })
        .collect()
}

/// Shape one search group into the page's item record.
///
/// Dates and prices become typed parallel arrays; availability,
/// price-per-unit and unit display stay comma-joined strings to match the
/// page contract.
fn build_browse_item(
    row: RankedItemRow,
    group: Vec<(item_price::Model, Option<unit::Model>)>,
) -> Result<BrowseItem, (StatusCode, Json<ErrorResponse>)> {
    let mut dates = Vec::with_capacity(group.len());
    for (observation, _) in &group {
        let ts = DateTime::from_timestamp(observation.date, 0).ok_or_else(|| {
            error!(
                item = %row.store_id,
                date = observation.date,
                "Stored observation date out of range"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Stored date {} is out of range", observation.date),
                }),
            )
        })?;
        dates.push(ts);
    }

    let prices: Vec<f64> = group.iter().map(|(o, _)| o.price).collect();
    let availability = group
        .iter()
        .map(|(o, _)| o.availability.as_str())
        .collect::<Vec<_>>()
        .join(",");
    let price_per_unit = group
        .iter()
        .map(|(o, _)| format_real(o.price_per_unit))
        .collect::<Vec<_>>()
        .join(",");
    let unit_display = group
        .iter()
        .map(|(_, u)| u.as_ref().map(|u| u.unit_display.as_str()).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    Ok(BrowseItem {
        id: row.store_id,
        title: row.title,
        dates,
        prices,
        image: row.image_url,
        availability,
        price_per_unit,
        category: row.category,
        unit_display,
    })
}

/// Render a REAL value the way SQLite's text conversion does: whole
/// numbers keep a trailing ".0".
fn format_real(value: f64) -> String {
    if value.is_finite() && value == value.trunc() {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Distinct non-empty category values across all items.
async fn distinct_categories(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    let rows: Vec<Option<String>> = Item::find()
        .select_only()
        .column(item::Column::Category)
        .group_by(item::Column::Category)
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .flatten()
        .filter(|c| !c.is_empty())
        .collect())
}

fn db_error(e: DbErr) -> (StatusCode, Json<ErrorResponse>) {
    error!(error = %e, "Database error on browse page load");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Database error: {}", e),
        }),
    )
}
