use jexla_shared::format_rfc3339;
use sea_query::{Iden, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::{SqlitePool, prelude::FromRow};
use ulid::Ulid;
use validator::Validate;

pub const MAX_STATUS_CHECKS: u64 = 1000;

#[derive(Iden, Clone)]
pub enum StatusChecks {
    Table,
    Id,
    ClientName,
    CreatedAt,
}

#[derive(Debug, Deserialize, Validate)]
pub struct StatusCheckInput {
    #[validate(length(min = 1, max = 120))]
    pub client_name: String,
}

#[derive(Debug, Default, FromRow)]
pub struct StatusCheckRow {
    pub id: String,
    pub client_name: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}

impl TryFrom<StatusCheckRow> for StatusCheck {
    type Error = jexla_shared::Error;

    fn try_from(row: StatusCheckRow) -> Result<Self, Self::Error> {
        Ok(Self {
            timestamp: format_rfc3339(row.created_at)?,
            id: row.id,
            client_name: row.client_name,
        })
    }
}

pub async fn create_status_check(
    pool: &SqlitePool,
    input: StatusCheckInput,
) -> jexla_shared::Result<StatusCheck> {
    input.validate()?;

    let row = StatusCheckRow {
        id: Ulid::new().to_string(),
        client_name: input.client_name,
        created_at: jexla_shared::now_millis(),
    };

    let statement = Query::insert()
        .into_table(StatusChecks::Table)
        .columns([
            StatusChecks::Id,
            StatusChecks::ClientName,
            StatusChecks::CreatedAt,
        ])
        .values_panic([
            row.id.to_owned().into(),
            row.client_name.to_owned().into(),
            row.created_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    row.try_into()
}

pub async fn list_status_checks(
    pool: &SqlitePool,
    limit: u64,
) -> jexla_shared::Result<Vec<StatusCheck>> {
    let statement = Query::select()
        .columns([
            StatusChecks::Id,
            StatusChecks::ClientName,
            StatusChecks::CreatedAt,
        ])
        .from(StatusChecks::Table)
        .order_by(StatusChecks::CreatedAt, Order::Desc)
        .order_by(StatusChecks::Id, Order::Desc)
        .limit(limit.min(MAX_STATUS_CHECKS))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let rows = sqlx::query_as_with::<_, StatusCheckRow, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    rows.into_iter().map(StatusCheck::try_from).collect()
}
