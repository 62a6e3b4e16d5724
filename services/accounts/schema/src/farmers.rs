use sea_orm::entity::prelude::*;

/// Farmer profile, one-to-one with a user of kind "farmer".
/// `registered_by` points at the agrovet that opened the account and never
/// changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "farmers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub registered_by: Uuid,
    pub farm_location: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::agrovets::Entity",
        from = "Column::RegisteredBy",
        to = "super::agrovets::Column::Id"
    )]
    Agrovets,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::agrovets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agrovets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
