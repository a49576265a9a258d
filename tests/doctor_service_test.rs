//! Doctor service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use mediviz::domain::{DoctorProfile, VerificationStatus};
use mediviz::errors::AppError;
use mediviz::infra::repositories::{
    MockAppointmentRepository, MockDoctorRepository, MockUserRepository,
};
use mediviz::infra::{AppointmentRepository, DoctorRepository, UnitOfWork, UserRepository};
use mediviz::services::{DoctorDirectory, DoctorService, NewProfile, VerificationAction};

/// Test mock for UnitOfWork that wraps a MockDoctorRepository
struct TestUnitOfWork {
    user_repo: Arc<MockUserRepository>,
    doctor_repo: Arc<MockDoctorRepository>,
    appointment_repo: Arc<MockAppointmentRepository>,
}

impl TestUnitOfWork {
    fn new(doctor_repo: MockDoctorRepository) -> Self {
        Self {
            user_repo: Arc::new(MockUserRepository::new()),
            doctor_repo: Arc::new(doctor_repo),
            appointment_repo: Arc::new(MockAppointmentRepository::new()),
        }
    }
}

impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn doctors(&self) -> Arc<dyn DoctorRepository> {
        self.doctor_repo.clone()
    }

    fn appointments(&self) -> Arc<dyn AppointmentRepository> {
        self.appointment_repo.clone()
    }
}

fn test_profile(user_id: Uuid, status: VerificationStatus) -> DoctorProfile {
    DoctorProfile {
        id: Uuid::new_v4(),
        user_id,
        specialization: "Cardiology".to_string(),
        license_number: "MD-123456".to_string(),
        years_of_experience: 12,
        qualification: "MBBS, MD".to_string(),
        bio: None,
        consultation_fee: 150.0,
        verification_status: status,
        verified_at: None,
        verified_by: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn new_profile() -> NewProfile {
    NewProfile {
        specialization: "Cardiology".to_string(),
        license_number: "MD-123456".to_string(),
        years_of_experience: 12,
        qualification: "MBBS, MD".to_string(),
        bio: None,
        consultation_fee: 150.0,
    }
}

fn service(repo: MockDoctorRepository) -> DoctorDirectory<TestUnitOfWork> {
    DoctorDirectory::new(Arc::new(TestUnitOfWork::new(repo)))
}

#[tokio::test]
async fn submitted_profile_starts_pending() {
    let user_id = Uuid::new_v4();

    let mut repo = MockDoctorRepository::new();
    repo.expect_find_by_user_id()
        .with(eq(user_id))
        .returning(|_| Ok(None));
    repo.expect_create()
        .withf(move |p| p.user_id == user_id)
        .returning(|p| Ok(test_profile(p.user_id, VerificationStatus::Pending)));

    let profile = service(repo)
        .create_profile(user_id, new_profile())
        .await
        .unwrap();

    assert_eq!(profile.verification_status, VerificationStatus::Pending);
    assert!(profile.verified_at.is_none());
}

#[tokio::test]
async fn one_profile_per_doctor() {
    let user_id = Uuid::new_v4();

    let mut repo = MockDoctorRepository::new();
    repo.expect_find_by_user_id()
        .with(eq(user_id))
        .returning(move |_| Ok(Some(test_profile(user_id, VerificationStatus::Pending))));

    let err = service(repo)
        .create_profile(user_id, new_profile())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn approval_records_timestamp_and_acting_admin() {
    let profile_id = Uuid::new_v4();
    let admin_id = Uuid::new_v4();

    let mut repo = MockDoctorRepository::new();
    repo.expect_set_verification()
        .withf(move |id, status, verified_at, verified_by| {
            *id == profile_id
                && *status == VerificationStatus::Approved
                && verified_at.is_some()
                && *verified_by == admin_id
        })
        .returning(|id, status, verified_at, verified_by| {
            let mut profile = test_profile(Uuid::new_v4(), status);
            profile.id = id;
            profile.verified_at = verified_at;
            profile.verified_by = Some(verified_by);
            Ok(profile)
        });

    let profile = service(repo)
        .verify(profile_id, VerificationAction::Approved, admin_id)
        .await
        .unwrap();

    assert_eq!(profile.verification_status, VerificationStatus::Approved);
    assert!(profile.verified_at.is_some());
    assert_eq!(profile.verified_by, Some(admin_id));
}

#[tokio::test]
async fn rejection_carries_no_approval_timestamp() {
    let profile_id = Uuid::new_v4();
    let admin_id = Uuid::new_v4();

    let mut repo = MockDoctorRepository::new();
    repo.expect_set_verification()
        .withf(move |id, status, verified_at, _| {
            *id == profile_id
                && *status == VerificationStatus::Rejected
                && verified_at.is_none()
        })
        .returning(|id, status, verified_at, verified_by| {
            let mut profile = test_profile(Uuid::new_v4(), status);
            profile.id = id;
            profile.verified_at = verified_at;
            profile.verified_by = Some(verified_by);
            Ok(profile)
        });

    let profile = service(repo)
        .verify(profile_id, VerificationAction::Rejected, admin_id)
        .await
        .unwrap();

    assert_eq!(profile.verification_status, VerificationStatus::Rejected);
    assert!(profile.verified_at.is_none());
}

#[tokio::test]
async fn marketplace_lists_only_approved() {
    let mut repo = MockDoctorRepository::new();
    repo.expect_list_by_status()
        .with(eq(VerificationStatus::Approved))
        .returning(|status| {
            Ok(vec![
                test_profile(Uuid::new_v4(), status),
                test_profile(Uuid::new_v4(), status),
            ])
        });

    let profiles = service(repo).list_approved().await.unwrap();
    assert_eq!(profiles.len(), 2);
    assert!(profiles.iter().all(|p| p.is_approved()));
}

#[tokio::test]
async fn missing_own_profile_is_not_found() {
    let user_id = Uuid::new_v4();

    let mut repo = MockDoctorRepository::new();
    repo.expect_find_by_user_id()
        .with(eq(user_id))
        .returning(|_| Ok(None));

    let err = service(repo).get_own_profile(user_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}
