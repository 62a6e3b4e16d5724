use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use shamba_accounts_schema::{agrovets, farmers, users};
use shamba_domain::user::UserKind;

use crate::domain::repository::{AgrovetRepository, FarmerRepository, UserRepository};
use crate::domain::types::{AgrovetProfile, FarmerProfile, User};
use crate::error::AccountsServiceError;

/// Map a lost unique-constraint race to the same validation error the
/// usecase pre-check produces; anything else is internal.
fn map_insert_err(err: sea_orm::DbErr, ctx: &'static str) -> AccountsServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            if msg.contains("registration_number") {
                AccountsServiceError::RegistrationNumberTaken
            } else {
                AccountsServiceError::EmailTaken
            }
        }
        _ => AccountsServiceError::Internal(anyhow::Error::new(err).context(ctx)),
    }
}

fn flatten_txn_err(err: sea_orm::TransactionError<sea_orm::DbErr>) -> sea_orm::DbErr {
    match err {
        sea_orm::TransactionError::Connection(e) => e,
        sea_orm::TransactionError::Transaction(e) => e,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountsServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountsServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
        must_reset_password: bool,
    ) -> Result<(), AccountsServiceError> {
        let am = users::ActiveModel {
            id: Set(id),
            password_hash: Set(password_hash.to_owned()),
            must_reset_password: Set(must_reset_password),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        am.update(&self.db).await.context("update user password")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> Result<User, AccountsServiceError> {
    let kind = UserKind::from_str_value(&model.kind)
        .with_context(|| format!("unknown user kind {:?}", model.kind))?;
    Ok(User {
        id: model.id,
        email: model.email,
        first_name: model.first_name,
        last_name: model.last_name,
        password_hash: model.password_hash,
        kind,
        must_reset_password: model.must_reset_password,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn user_active_model(user: &User) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(user.id),
        email: Set(user.email.clone()),
        first_name: Set(user.first_name.clone()),
        last_name: Set(user.last_name.clone()),
        password_hash: Set(user.password_hash.clone()),
        kind: Set(user.kind.as_str().to_owned()),
        must_reset_password: Set(user.must_reset_password),
        is_active: Set(user.is_active),
        created_at: Set(user.created_at),
        updated_at: Set(user.updated_at),
    }
}

// ── Agrovet repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAgrovetRepository {
    pub db: DatabaseConnection,
}

impl AgrovetRepository for DbAgrovetRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AgrovetProfile>, AccountsServiceError> {
        let model = agrovets::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find agrovet by id")?;
        Ok(model.map(agrovet_from_model))
    }

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<AgrovetProfile>, AccountsServiceError> {
        let model = agrovets::Entity::find()
            .filter(agrovets::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find agrovet by user id")?;
        Ok(model.map(agrovet_from_model))
    }

    async fn registration_number_exists(
        &self,
        registration_number: &str,
    ) -> Result<bool, AccountsServiceError> {
        let model = agrovets::Entity::find()
            .filter(agrovets::Column::RegistrationNumber.eq(registration_number))
            .one(&self.db)
            .await
            .context("find agrovet by registration number")?;
        Ok(model.is_some())
    }

    async fn create_with_user(
        &self,
        user: &User,
        profile: &AgrovetProfile,
    ) -> Result<(), AccountsServiceError> {
        let user = user.clone();
        let profile = profile.clone();
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    user_active_model(&user).insert(txn).await?;
                    agrovets::ActiveModel {
                        id: Set(profile.id),
                        user_id: Set(profile.user_id),
                        business_name: Set(profile.business_name.clone()),
                        registration_number: Set(profile.registration_number.clone()),
                        location: Set(profile.location.clone()),
                        created_at: Set(profile.created_at),
                    }
                    .insert(txn)
                    .await?;
                    Ok(())
                })
            })
            .await
            .map_err(|e| map_insert_err(flatten_txn_err(e), "create agrovet with user"))
    }

    async fn delete_with_farmers(
        &self,
        agrovet: &AgrovetProfile,
    ) -> Result<(), AccountsServiceError> {
        let agrovet_id = agrovet.id;
        let owner_user_id = agrovet.user_id;
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    // Deleting the farmer users cascades over the farmer
                    // profiles; deleting the owner cascades over the agrovet.
                    let farmer_user_ids: Vec<Uuid> = farmers::Entity::find()
                        .filter(farmers::Column::RegisteredBy.eq(agrovet_id))
                        .all(txn)
                        .await?
                        .into_iter()
                        .map(|f| f.user_id)
                        .collect();
                    if !farmer_user_ids.is_empty() {
                        users::Entity::delete_many()
                            .filter(users::Column::Id.is_in(farmer_user_ids))
                            .exec(txn)
                            .await?;
                    }
                    users::Entity::delete_many()
                        .filter(users::Column::Id.eq(owner_user_id))
                        .exec(txn)
                        .await?;
                    Ok(())
                })
            })
            .await
            .map_err(flatten_txn_err)
            .context("delete agrovet with farmers")?;
        Ok(())
    }
}

fn agrovet_from_model(model: agrovets::Model) -> AgrovetProfile {
    AgrovetProfile {
        id: model.id,
        user_id: model.user_id,
        business_name: model.business_name,
        registration_number: model.registration_number,
        location: model.location,
        created_at: model.created_at,
    }
}

// ── Farmer repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFarmerRepository {
    pub db: DatabaseConnection,
}

impl FarmerRepository for DbFarmerRepository {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<FarmerProfile>, AccountsServiceError> {
        let model = farmers::Entity::find()
            .filter(farmers::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find farmer by user id")?;
        Ok(model.map(farmer_from_model))
    }

    async fn create_with_user(
        &self,
        user: &User,
        profile: &FarmerProfile,
    ) -> Result<(), AccountsServiceError> {
        let user = user.clone();
        let profile = profile.clone();
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    user_active_model(&user).insert(txn).await?;
                    farmers::ActiveModel {
                        id: Set(profile.id),
                        user_id: Set(profile.user_id),
                        registered_by: Set(profile.registered_by),
                        farm_location: Set(profile.farm_location.clone()),
                        created_at: Set(profile.created_at),
                    }
                    .insert(txn)
                    .await?;
                    Ok(())
                })
            })
            .await
            .map_err(|e| map_insert_err(flatten_txn_err(e), "create farmer with user"))
    }

    async fn list_by_agrovet(
        &self,
        agrovet_id: Uuid,
    ) -> Result<Vec<(FarmerProfile, User)>, AccountsServiceError> {
        let rows = farmers::Entity::find()
            .filter(farmers::Column::RegisteredBy.eq(agrovet_id))
            .find_also_related(users::Entity)
            .order_by_asc(farmers::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list farmers by agrovet")?;

        let mut result = Vec::with_capacity(rows.len());
        for (farmer, user) in rows {
            let user = user
                .with_context(|| format!("farmer {} has no user row", farmer.id))
                .map_err(AccountsServiceError::Internal)?;
            result.push((farmer_from_model(farmer), user_from_model(user)?));
        }
        Ok(result)
    }
}

fn farmer_from_model(model: farmers::Model) -> FarmerProfile {
    FarmerProfile {
        id: model.id,
        user_id: model.user_id,
        registered_by: model.registered_by,
        farm_location: model.farm_location,
        created_at: model.created_at,
    }
}
