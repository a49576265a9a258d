//! Appointment service unit tests.

use std::sync::Arc;

use chrono::{Duration, Utc};
use mockall::predicate::eq;
use uuid::Uuid;

use mediviz::domain::{
    Appointment, AppointmentStatus, DoctorProfile, UserRole, VerificationStatus,
};
use mediviz::errors::AppError;
use mediviz::infra::repositories::{
    MockAppointmentRepository, MockDoctorRepository, MockUserRepository,
};
use mediviz::infra::{AppointmentRepository, DoctorRepository, UnitOfWork, UserRepository};
use mediviz::services::{AppointmentScheduler, AppointmentService};

/// Test mock for UnitOfWork wrapping appointment and doctor mocks
struct TestUnitOfWork {
    user_repo: Arc<MockUserRepository>,
    doctor_repo: Arc<MockDoctorRepository>,
    appointment_repo: Arc<MockAppointmentRepository>,
}

impl TestUnitOfWork {
    fn new(doctor_repo: MockDoctorRepository, appointment_repo: MockAppointmentRepository) -> Self {
        Self {
            user_repo: Arc::new(MockUserRepository::new()),
            doctor_repo: Arc::new(doctor_repo),
            appointment_repo: Arc::new(appointment_repo),
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

fn doctor_profile(user_id: Uuid, status: VerificationStatus) -> DoctorProfile {
    DoctorProfile {
        id: Uuid::new_v4(),
        user_id,
        specialization: "Dermatology".to_string(),
        license_number: "MD-654321".to_string(),
        years_of_experience: 8,
        qualification: "MBBS".to_string(),
        bio: None,
        consultation_fee: 100.0,
        verification_status: status,
        verified_at: None,
        verified_by: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn test_appointment(patient_id: Uuid, doctor_id: Uuid) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        patient_id,
        doctor_id,
        scheduled_at: Utc::now() + Duration::days(1),
        status: AppointmentStatus::Scheduled,
        reason: Some("Checkup".to_string()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn service(
    doctor_repo: MockDoctorRepository,
    appointment_repo: MockAppointmentRepository,
) -> AppointmentScheduler<TestUnitOfWork> {
    AppointmentScheduler::new(Arc::new(TestUnitOfWork::new(doctor_repo, appointment_repo)))
}

#[tokio::test]
async fn booking_with_approved_doctor_starts_scheduled() {
    let patient_id = Uuid::new_v4();
    let doctor_id = Uuid::new_v4();

    let mut doctors = MockDoctorRepository::new();
    doctors
        .expect_find_by_user_id()
        .with(eq(doctor_id))
        .returning(move |id| Ok(Some(doctor_profile(id, VerificationStatus::Approved))));

    let mut appointments = MockAppointmentRepository::new();
    appointments
        .expect_create()
        .withf(move |p, d, _, _| *p == patient_id && *d == doctor_id)
        .returning(|p, d, _, _| Ok(test_appointment(p, d)));

    let appointment = service(doctors, appointments)
        .book(patient_id, doctor_id, Utc::now() + Duration::days(1), None)
        .await
        .unwrap();

    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    assert_eq!(appointment.patient_id, patient_id);
}

#[tokio::test]
async fn booking_with_unapproved_doctor_is_rejected() {
    let doctor_id = Uuid::new_v4();

    let mut doctors = MockDoctorRepository::new();
    doctors
        .expect_find_by_user_id()
        .with(eq(doctor_id))
        .returning(move |id| Ok(Some(doctor_profile(id, VerificationStatus::Pending))));

    // No create expectation: a booking attempt would panic
    let err = service(doctors, MockAppointmentRepository::new())
        .book(Uuid::new_v4(), doctor_id, Utc::now(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn booking_with_unknown_doctor_is_not_found() {
    let mut doctors = MockDoctorRepository::new();
    doctors.expect_find_by_user_id().returning(|_| Ok(None));

    let err = service(doctors, MockAppointmentRepository::new())
        .book(Uuid::new_v4(), Uuid::new_v4(), Utc::now(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn listing_follows_the_caller_role() {
    let user_id = Uuid::new_v4();

    let mut appointments = MockAppointmentRepository::new();
    appointments
        .expect_list_for_doctor()
        .with(eq(user_id))
        .returning(|id| Ok(vec![test_appointment(Uuid::new_v4(), id)]));

    let listed = service(MockDoctorRepository::new(), appointments)
        .list_for_user(user_id, UserRole::Doctor)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].doctor_id, user_id);

    let mut appointments = MockAppointmentRepository::new();
    appointments
        .expect_list_for_patient()
        .with(eq(user_id))
        .returning(|id| Ok(vec![test_appointment(id, Uuid::new_v4())]));

    let listed = service(MockDoctorRepository::new(), appointments)
        .list_for_user(user_id, UserRole::Patient)
        .await
        .unwrap();
    assert_eq!(listed[0].patient_id, user_id);
}

#[tokio::test]
async fn only_the_appointments_doctor_can_update_status() {
    let appointment_id = Uuid::new_v4();
    let owner_doctor = Uuid::new_v4();
    let other_doctor = Uuid::new_v4();

    let mut appointments = MockAppointmentRepository::new();
    appointments
        .expect_find_by_id()
        .with(eq(appointment_id))
        .returning(move |id| {
            let mut a = test_appointment(Uuid::new_v4(), owner_doctor);
            a.id = id;
            Ok(Some(a))
        });

    let err = service(MockDoctorRepository::new(), appointments)
        .update_status(appointment_id, other_doctor, AppointmentStatus::Completed)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Forbidden));
}

#[tokio::test]
async fn owner_doctor_completes_an_appointment() {
    let appointment_id = Uuid::new_v4();
    let doctor_id = Uuid::new_v4();

    let mut appointments = MockAppointmentRepository::new();
    appointments
        .expect_find_by_id()
        .with(eq(appointment_id))
        .returning(move |id| {
            let mut a = test_appointment(Uuid::new_v4(), doctor_id);
            a.id = id;
            Ok(Some(a))
        });
    appointments
        .expect_set_status()
        .with(eq(appointment_id), eq(AppointmentStatus::Completed))
        .returning(move |id, status| {
            let mut a = test_appointment(Uuid::new_v4(), doctor_id);
            a.id = id;
            a.status = status;
            Ok(a)
        });

    let appointment = service(MockDoctorRepository::new(), appointments)
        .update_status(appointment_id, doctor_id, AppointmentStatus::Completed)
        .await
        .unwrap();

    assert_eq!(appointment.status, AppointmentStatus::Completed);
}
