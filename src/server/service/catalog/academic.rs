//! Admin writes for the University → Domain → Subject hierarchy.

use sea_orm::TransactionTrait;

use crate::{
    model::{
        catalog::{DomainDto, DomainPayload, NamedEntityDto, SubjectDto, SubjectPayload, UniversityDto},
        validation::validate_name,
    },
    server::{
        data::catalog::{
            domain::DomainRepository, subject::SubjectRepository, university::UniversityRepository,
        },
        error::{domain::DomainError, Error},
        service::catalog::{
            delete_subjects, domain_dto, duplicate_name, require_parent, subject_dto,
            university_dto, CatalogService,
        },
    },
};

impl<'a> CatalogService<'a> {
    /// Creates a university.
    ///
    /// # Returns
    /// - `Ok(UniversityDto)` - The created university
    /// - `Err(DomainError::Validation)` - Name empty or too long
    /// - `Err(DomainError::Duplicate)` - A university with that name exists
    pub async fn create_university(&self, payload: NamedEntityDto) -> Result<UniversityDto, Error> {
        let name = validate_name("name", &payload.name)?;

        let university = UniversityRepository::new(self.db)
            .create(&name)
            .await
            .map_err(duplicate_name("University", &name))?;

        Ok(university_dto(university))
    }

    pub async fn update_university(
        &self,
        university_id: i32,
        payload: NamedEntityDto,
    ) -> Result<UniversityDto, Error> {
        let name = validate_name("name", &payload.name)?;

        let university = UniversityRepository::new(self.db)
            .update(university_id, &name)
            .await
            .map_err(duplicate_name("University", &name))?
            .ok_or(DomainError::not_found("University", university_id))?;

        Ok(university_dto(university))
    }

    /// Deletes a university with its domains, their subjects and everything filed under
    /// those subjects, in one transaction.
    pub async fn delete_university(&self, university_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let university_repo = UniversityRepository::new(&txn);
        if university_repo.get(university_id).await?.is_none() {
            return Err(DomainError::not_found("University", university_id).into());
        }

        let domain_repo = DomainRepository::new(&txn);
        let domain_ids: Vec<i32> = domain_repo
            .list_by_university(university_id)
            .await?
            .into_iter()
            .map(|domain| domain.id)
            .collect();
        let subject_ids: Vec<i32> = SubjectRepository::new(&txn)
            .list_by_domains(&domain_ids)
            .await?
            .into_iter()
            .map(|subject| subject.id)
            .collect();

        delete_subjects(&txn, &subject_ids).await?;
        domain_repo.delete_many(&domain_ids).await?;
        university_repo.delete(university_id).await?;

        txn.commit().await?;

        tracing::info!(
            university_id = %university_id,
            domains = domain_ids.len(),
            subjects = subject_ids.len(),
            "Deleted university"
        );

        Ok(())
    }

    /// Creates a domain under an existing university.
    ///
    /// # Returns
    /// - `Ok(DomainDto)` - The created domain
    /// - `Err(DomainError::Validation)` - Name empty or too long
    /// - `Err(DomainError::NotFound)` - University does not exist
    pub async fn create_domain(&self, payload: DomainPayload) -> Result<DomainDto, Error> {
        let name = validate_name("name", &payload.name)?;

        let university = UniversityRepository::new(self.db)
            .get(payload.university_id)
            .await?
            .ok_or(DomainError::not_found("University", payload.university_id))?;

        let domain = DomainRepository::new(self.db)
            .create(university.id, &name)
            .await?;

        Ok(domain_dto(domain, &university))
    }

    pub async fn update_domain(
        &self,
        domain_id: i32,
        payload: DomainPayload,
    ) -> Result<DomainDto, Error> {
        let name = validate_name("name", &payload.name)?;

        let university = UniversityRepository::new(self.db)
            .get(payload.university_id)
            .await?
            .ok_or(DomainError::not_found("University", payload.university_id))?;

        let domain = DomainRepository::new(self.db)
            .update(domain_id, university.id, &name)
            .await?
            .ok_or(DomainError::not_found("Domain", domain_id))?;

        Ok(domain_dto(domain, &university))
    }

    /// Deletes a domain with its subjects and everything filed under them, in one
    /// transaction.
    pub async fn delete_domain(&self, domain_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let domain_repo = DomainRepository::new(&txn);
        if domain_repo.get(domain_id).await?.is_none() {
            return Err(DomainError::not_found("Domain", domain_id).into());
        }

        let subject_ids: Vec<i32> = SubjectRepository::new(&txn)
            .list_by_domain(domain_id)
            .await?
            .into_iter()
            .map(|subject| subject.id)
            .collect();

        delete_subjects(&txn, &subject_ids).await?;
        domain_repo.delete_many(&[domain_id]).await?;

        txn.commit().await?;

        tracing::info!(
            domain_id = %domain_id,
            subjects = subject_ids.len(),
            "Deleted domain"
        );

        Ok(())
    }

    /// Creates a subject under an existing domain.
    pub async fn create_subject(&self, payload: SubjectPayload) -> Result<SubjectDto, Error> {
        let name = validate_name("name", &payload.name)?;

        let (domain, university) = DomainRepository::new(self.db)
            .get_with_university(payload.domain_id)
            .await?
            .ok_or(DomainError::not_found("Domain", payload.domain_id))?;
        let university = require_parent(university, "Domain", domain.id)?;

        let subject = SubjectRepository::new(self.db)
            .create(domain.id, &name)
            .await?;

        Ok(subject_dto(subject, &domain, &university))
    }

    pub async fn update_subject(
        &self,
        subject_id: i32,
        payload: SubjectPayload,
    ) -> Result<SubjectDto, Error> {
        let name = validate_name("name", &payload.name)?;

        let (domain, university) = DomainRepository::new(self.db)
            .get_with_university(payload.domain_id)
            .await?
            .ok_or(DomainError::not_found("Domain", payload.domain_id))?;
        let university = require_parent(university, "Domain", domain.id)?;

        let subject = SubjectRepository::new(self.db)
            .update(subject_id, domain.id, &name)
            .await?
            .ok_or(DomainError::not_found("Subject", subject_id))?;

        Ok(subject_dto(subject, &domain, &university))
    }

    /// Deletes a subject with its resources and requests, in one transaction.
    pub async fn delete_subject(&self, subject_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        if SubjectRepository::new(&txn).get(subject_id).await?.is_none() {
            return Err(DomainError::not_found("Subject", subject_id).into());
        }

        delete_subjects(&txn, &[subject_id]).await?;

        txn.commit().await?;

        tracing::info!(subject_id = %subject_id, "Deleted subject");

        Ok(())
    }
}
