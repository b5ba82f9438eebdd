use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum ContactMessages {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Message,
    CreatedAt,
}
