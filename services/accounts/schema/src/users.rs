use sea_orm::entity::prelude::*;

/// Account record. `kind` is the role discriminator ("agrovet" | "farmer"),
/// set exactly once at registration. `password_hash` holds the argon2 PHC
/// string and never crosses the API boundary.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub kind: String,
    pub must_reset_password: bool,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::agrovets::Entity")]
    Agrovets,
    #[sea_orm(has_one = "super::farmers::Entity")]
    Farmers,
}

impl Related<super::agrovets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agrovets.def()
    }
}

impl Related<super::farmers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Farmers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
