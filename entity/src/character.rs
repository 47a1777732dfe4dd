use sea_orm::entity::prelude::*;

/// A player character. Doubles as the login identity.
///
/// `permissions` holds a JSON array of permission key names and `version` is
/// bumped on every stat write so concurrent read-modify-write sequences can
/// detect each other.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub level: i32,
    pub current_exp: i32,
    pub next_level_exp: i32,
    pub attack: i32,
    pub defense: i32,
    pub max_health: i32,
    pub current_health: i32,
    pub max_mana: i32,
    pub current_mana: i32,
    #[sea_orm(column_type = "Text")]
    pub permissions: String,
    pub version: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::equipment::Entity")]
    Equipment,
}

impl Related<super::equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
