use botica_core::{whatsapp_link, EmployeeRoster, PatientDirectory, PatientDraft};
use chrono::NaiveDate;

fn draft(name: &str, next_purchase: NaiveDate) -> PatientDraft {
    PatientDraft {
        name: name.to_string(),
        prescription: "Losartán 50mg".to_string(),
        next_purchase_date: next_purchase,
        phone: "+34 600 111 222".to_string(),
        birthday: NaiveDate::from_ymd_opt(1955, 3, 12).unwrap(),
    }
}

#[test]
fn dashboard_stats_follow_the_patient_lifecycle() {
    let today = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
    let mut directory = PatientDirectory::new();

    let ana = directory.add(draft("Ana", today + chrono::Duration::days(3))).unwrap();
    let luis = directory
        .add(draft("Luis", today + chrono::Duration::days(30)))
        .unwrap();
    directory.toggle_purchase(ana);

    let stats = directory.stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.purchased_this_month, 1);
    assert_eq!(stats.pending, 1);

    directory.remove(luis);
    assert_eq!(directory.stats().total, 1);
}

#[test]
fn edit_preserves_identity_and_purchase_state() {
    let today = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
    let mut directory = PatientDirectory::new();
    let id = directory.add(draft("Ana", today)).unwrap();
    directory.toggle_purchase(id);

    let mut updated = draft("Ana María", today + chrono::Duration::days(10));
    updated.prescription = "Enalapril 10mg".to_string();
    assert!(directory.edit(id, updated).unwrap());

    let patient = &directory.patients()[0];
    assert_eq!(patient.id, id);
    assert!(patient.purchased_this_month);
    assert_eq!(patient.name, "Ana María");
    assert_eq!(patient.prescription, "Enalapril 10mg");
}

#[test]
fn refill_window_flags_patients_within_seven_days() {
    let today = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
    let mut directory = PatientDirectory::new();
    directory.add(draft("Ana", today + chrono::Duration::days(7))).unwrap();
    directory
        .add(draft("Luis", today + chrono::Duration::days(8)))
        .unwrap();

    let flagged: Vec<_> = directory
        .patients()
        .iter()
        .filter(|patient| patient.purchase_due_soon(today))
        .collect();

    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].name, "Ana");
}

#[test]
fn employee_history_accumulates_across_operations() {
    let mut roster = EmployeeRoster::new();
    let birthday = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
    let id = roster.add("Juan Pérez", birthday, "+1234567890").unwrap();

    let day = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
    roster.record_sale(id, day, 150_000);
    roster.record_sale(id, day + chrono::Duration::days(1), 200_000);
    roster.record_error(id, day, "Error en caja");

    let employee = &roster.employees()[0];
    assert_eq!(employee.total_sales_cents(), 350_000);
    assert_eq!(employee.sales.len(), 2);
    assert_eq!(employee.error_log[0].description, "Error en caja");

    let link = whatsapp_link(&employee.phone, &format!("Hola {}", employee.name));
    assert!(link.starts_with("https://wa.me/1234567890?text="));
}
