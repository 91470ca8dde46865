use registrar_common::models::user::{Account, Admin, Student, Teacher};
use registrar_common::RegistrarError;
use registrar_core::auth;
use registrar_core::registry::{Identity, Registry};
use registrar_core::seed;
use registrar_core::services::admin;

#[test]
fn seeded_users_land_on_their_roles() {
    let registry: Registry = seed::bootstrap();

    assert_eq!(auth::login(&registry, "admin", "admin123"), Ok(Identity::Admin(0)));
    assert_eq!(auth::login(&registry, "t02", "zafar123"), Ok(Identity::Teacher(1)));
    assert_eq!(auth::login(&registry, "s03", "talha123"), Ok(Identity::Student(2)));
    assert_eq!(
        auth::login(&registry, "s03", "zafar123"),
        Err(RegistrarError::InvalidCredentials)
    );
}

#[test]
fn collisions_resolve_admin_then_teacher_then_student() {
    let mut registry: Registry = seed::bootstrap();
    admin::add_student(&mut registry.students, "t01", "Impostor", "sandesh123").unwrap();
    admin::add_teacher(&mut registry.teachers, "admin", "Shadow", "admin123").unwrap();

    assert_eq!(auth::login(&registry, "t01", "sandesh123"), Ok(Identity::Teacher(0)));
    assert_eq!(auth::login(&registry, "admin", "admin123"), Ok(Identity::Admin(0)));
}

#[test]
fn collision_order_holds_regardless_of_insertion_order() {
    let mut registry: Registry = Registry::new();
    registry.students.add(Student::new(Account::new("dup", "S", "pw")));
    registry.teachers.add(Teacher::new(Account::new("dup", "T", "pw")));

    assert_eq!(auth::login(&registry, "dup", "pw"), Ok(Identity::Teacher(0)));

    registry.admins.add(Admin::new(Account::new("dup", "A", "pw")));
    assert_eq!(auth::login(&registry, "dup", "pw"), Ok(Identity::Admin(0)));
}
