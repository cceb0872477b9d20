//! Application service for users, speaking transfer objects.

use std::sync::Arc;

use shelfkeep_domain::{Record, User};
use shelfkeep_shared::{CreateUserDto, UpdateUserDto, UserDto};

use crate::use_cases::RecordUseCase;

use super::assembler::UserAssembler;
use super::error::ServiceError;
use super::permission::{Action, PermissionPolicy};
use super::record_service::{authorize, log_outcome};
use super::update_mode::UpdateMode;

pub struct UserService {
    use_case: RecordUseCase<User>,
    permissions: Arc<dyn PermissionPolicy>,
    update_mode: UpdateMode,
}

impl UserService {
    pub fn new(
        use_case: RecordUseCase<User>,
        permissions: Arc<dyn PermissionPolicy>,
        update_mode: UpdateMode,
    ) -> Self {
        Self {
            use_case,
            permissions,
            update_mode,
        }
    }

    pub async fn execute_find(&self, id: &str) -> Result<UserDto, ServiceError> {
        let result = self.find(id).await;
        log_outcome(Action::Read, User::KIND, id, &result);
        result
    }

    pub async fn execute_create(&self, dto: CreateUserDto) -> Result<(), ServiceError> {
        let user = UserAssembler::from_create(dto);
        let result = self.create(&user).await;
        log_outcome(Action::Create, User::KIND, &user.id, &result);
        result
    }

    pub async fn execute_update(&self, id: &str, dto: UpdateUserDto) -> Result<(), ServiceError> {
        let result = self.update(id, dto).await;
        log_outcome(Action::Update, User::KIND, id, &result);
        result
    }

    pub async fn execute_delete(&self, id: &str) -> Result<(), ServiceError> {
        let result = self.delete(id).await;
        log_outcome(Action::Delete, User::KIND, id, &result);
        result
    }

    async fn find(&self, id: &str) -> Result<UserDto, ServiceError> {
        authorize(self.permissions.as_ref(), Action::Read, User::KIND)?;
        let user = self.use_case.find_by_id(id).await?;
        Ok(UserAssembler::to_dto(user))
    }

    async fn create(&self, user: &User) -> Result<(), ServiceError> {
        authorize(self.permissions.as_ref(), Action::Create, User::KIND)?;
        Ok(self.use_case.create(user).await?)
    }

    async fn update(&self, id: &str, dto: UpdateUserDto) -> Result<(), ServiceError> {
        authorize(self.permissions.as_ref(), Action::Update, User::KIND)?;
        let incoming = UserAssembler::from_update(id, dto);
        let user = match self.update_mode {
            UpdateMode::Replace => incoming,
            UpdateMode::Merge => self.use_case.find_by_id(id).await?.merged_with(incoming),
        };
        Ok(self.use_case.update(&user).await?)
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        authorize(self.permissions.as_ref(), Action::Delete, User::KIND)?;
        Ok(self.use_case.delete(id).await?)
    }
}
