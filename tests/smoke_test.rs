use chrono::NaiveDate;
use farmledger::{App, core::{LedgerStorage, MemoryLedgerStorage}};
use farmledger_config::Config;
use farmledger_domain::{CropStatus, NewCrop, NewIncome, Season};

#[test]
fn full_session_flow() {
    farmledger::init();

    let mut app = App::new(Config::default());
    assert!(!app.is_loading());
    assert!(app.user().is_none());

    app.register("meera@example.com", "secret", "Meera")
        .expect("mock registration");
    assert_eq!(app.user().unwrap().display_name.as_deref(), Some("Meera"));

    let crop = app
        .add_crop(NewCrop {
            name: "Sugarcane".into(),
            area: 4.0,
            area_unit: "acre".into(),
            planting_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            season: Season::Annual,
            status: CropStatus::Active,
            expected_harvest_date: None,
            notes: Some("East block".into()),
        })
        .expect("crop add");

    app.add_income(NewIncome {
        crop_id: crop.id,
        quantity: 20.0,
        unit: "tonne".into(),
        price_per_unit: 250.0,
        buyer: "Mill".into(),
        date: NaiveDate::from_ymd_opt(2025, 12, 10).unwrap(),
        notes: None,
    })
    .expect("income add");

    let summary = app.summary(Some(crop.id));
    assert!((summary.total_income - 5000.0).abs() < f64::EPSILON);
    assert!(app.warnings().is_empty());

    // The session snapshot can be parked in the injectable backend.
    let storage = MemoryLedgerStorage::new();
    storage
        .save_ledger("season-2025", app.ledger())
        .expect("save snapshot");
    assert_eq!(storage.list_ledgers().unwrap(), vec!["season-2025"]);

    app.logout();
    assert!(app.user().is_none());
    assert!(app.crops().is_empty());

    let restored = storage.load_ledger("season-2025").expect("load snapshot");
    assert_eq!(restored.crop_count(), 1);
    assert_eq!(restored.income_count(), 1);
}
