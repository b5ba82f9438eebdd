use jexla_shared::format_rfc3339;
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};
use ulid::Ulid;
use validator::Validate;

use crate::{ContactSubmission, table::ContactMessages};

/// Hard cap on listing, whatever the caller asks for.
pub const MAX_LIST: u64 = 1000;

#[derive(Debug, Default, FromRow)]
pub struct ContactRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: i64,
}

/// A stored submission, as returned by the contact API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub timestamp: String,
}

impl TryFrom<ContactRow> for ContactMessage {
    type Error = jexla_shared::Error;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        Ok(Self {
            timestamp: format_rfc3339(row.created_at)?,
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            message: row.message,
        })
    }
}

const COLUMNS: [ContactMessages; 6] = [
    ContactMessages::Id,
    ContactMessages::Name,
    ContactMessages::Email,
    ContactMessages::Phone,
    ContactMessages::Message,
    ContactMessages::CreatedAt,
];

/// Backend side of the contact endpoint.
#[derive(Clone)]
pub struct Store(pub SqlitePool);

impl Store {
    pub async fn create(&self, input: ContactSubmission) -> jexla_shared::Result<ContactMessage> {
        input.validate()?;

        let row = ContactRow {
            id: Ulid::new().to_string(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            message: input.message,
            created_at: jexla_shared::now_millis(),
        };

        let statement = Query::insert()
            .into_table(ContactMessages::Table)
            .columns(COLUMNS)
            .values_panic([
                row.id.to_owned().into(),
                row.name.to_owned().into(),
                row.email.to_owned().into(),
                row.phone.to_owned().into(),
                row.message.to_owned().into(),
                row.created_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            jexla_shared::bail!("failed to save contact message");
        }

        row.try_into()
    }

    /// Newest first.
    pub async fn list(&self, limit: u64) -> jexla_shared::Result<Vec<ContactMessage>> {
        let statement = Query::select()
            .columns(COLUMNS)
            .from(ContactMessages::Table)
            .order_by(ContactMessages::CreatedAt, Order::Desc)
            .order_by(ContactMessages::Id, Order::Desc)
            .limit(Ord::min(limit, MAX_LIST))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, ContactRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        rows.into_iter().map(ContactMessage::try_from).collect()
    }

    pub async fn find(&self, id: impl Into<String>) -> jexla_shared::Result<Option<ContactMessage>> {
        let statement = Query::select()
            .columns(COLUMNS)
            .from(ContactMessages::Table)
            .and_where(Expr::col(ContactMessages::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, ContactRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        row.map(ContactMessage::try_from).transpose()
    }
}
