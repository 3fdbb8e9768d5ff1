use sea_orm::DatabaseConnection;

use crate::{
    model::{
        request::{RequestStatus, ResourceRequestDto},
        user::UserDto,
        validation::{RequestDraft, ValidationErrors},
    },
    server::{
        data::{catalog::subject::SubjectRepository, request::ResourceRequestRepository},
        error::{domain::DomainError, Error},
        model::db::{ResourceRequestModel, SubjectModel},
    },
};

/// Service for learners asking for resources on a subject.
pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestService<'a> {
    /// Creates a new instance of RequestService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a request for the signed-in user with the `pending` status.
    ///
    /// # Returns
    /// - `Ok(ResourceRequestDto)` - The stored request
    /// - `Err(DomainError::Validation)` - Draft failed validation or the subject does not exist
    pub async fn create(
        &self,
        user: &UserDto,
        draft: &RequestDraft,
    ) -> Result<ResourceRequestDto, Error> {
        let request = draft.validate()?;

        let Some(subject) = SubjectRepository::new(self.db)
            .get(request.subject_id)
            .await?
        else {
            return Err(DomainError::Validation(ValidationErrors::single(
                "subject_id",
                "Selected subject does not exist",
            ))
            .into());
        };

        let request = ResourceRequestRepository::new(self.db)
            .create(user.id, &request)
            .await?;

        tracing::info!(
            user_id = %user.id,
            request_id = %request.id,
            subject_id = %subject.id,
            "Resource request created"
        );

        request_dto(request, Some(subject))
    }

    /// Lists the requests made by a user, newest first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<ResourceRequestDto>, Error> {
        let requests = ResourceRequestRepository::new(self.db)
            .list_by_user(user_id)
            .await?;

        requests
            .into_iter()
            .map(|(request, subject)| request_dto(request, subject))
            .collect()
    }

    /// Lists every request, newest first.
    pub async fn list_all(&self) -> Result<Vec<ResourceRequestDto>, Error> {
        let requests = ResourceRequestRepository::new(self.db).list_all().await?;

        requests
            .into_iter()
            .map(|(request, subject)| request_dto(request, subject))
            .collect()
    }

    pub async fn update_status(
        &self,
        request_id: i32,
        status: RequestStatus,
    ) -> Result<ResourceRequestDto, Error> {
        let request = ResourceRequestRepository::new(self.db)
            .update_status(request_id, status)
            .await?
            .ok_or(DomainError::not_found("Request", request_id))?;

        let subject = SubjectRepository::new(self.db).get(request.subject_id).await?;

        tracing::info!(request_id = %request_id, status = %status, "Request status updated");

        request_dto(request, subject)
    }

    pub async fn delete(&self, request_id: i32) -> Result<(), Error> {
        let result = ResourceRequestRepository::new(self.db)
            .delete(request_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Request", request_id).into());
        }

        Ok(())
    }
}

fn request_dto(
    request: ResourceRequestModel,
    subject: Option<SubjectModel>,
) -> Result<ResourceRequestDto, Error> {
    let subject = subject.ok_or_else(|| {
        Error::InternalError(format!(
            "Subject ID {} of request ID {} missing",
            request.subject_id, request.id
        ))
    })?;

    let status = request
        .status
        .parse::<RequestStatus>()
        .map_err(|e| Error::InternalError(e.to_string()))?;

    Ok(ResourceRequestDto {
        id: request.id,
        user_id: request.user_id,
        subject_id: request.subject_id,
        subject_name: subject.name,
        title: request.title,
        description: request.description,
        status,
        created_at: request.created_at,
        updated_at: request.updated_at,
    })
}
