use parcel_capture::core::geo_math::circle_from_area_hectares;
use parcel_capture::{
    AppController, AppIntent, AppState, CaptureMode, Coordinate, Culture, InMemoryParcelStore,
    ParcelPayload, ParcelStore, StoredParcel,
};

/// Ablage, die jeden Schreibzugriff ablehnt (z.B. API nicht erreichbar).
struct UnreachableStore;

impl ParcelStore for UnreachableStore {
    fn create(&mut self, _payload: ParcelPayload) -> anyhow::Result<StoredParcel> {
        anyhow::bail!("Verbindung abgelehnt")
    }

    fn update(&mut self, id: u64, _payload: ParcelPayload) -> anyhow::Result<StoredParcel> {
        anyhow::bail!("Verbindung abgelehnt (Parzelle {id})")
    }

    fn get(&self, _id: u64) -> Option<&StoredParcel> {
        None
    }

    fn list(&self) -> Vec<&StoredParcel> {
        Vec::new()
    }
}

fn run(controller: &mut AppController, state: &mut AppState, intents: Vec<AppIntent>) {
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Intent sollte ohne Host-Fehler durchlaufen");
    }
}

fn details_intents() -> Vec<AppIntent> {
    vec![
        AppIntent::LeadSelected { lead_id: 3 },
        AppIntent::NameChanged {
            name: "  Fazenda Boa Vista ".to_string(),
        },
        AppIntent::CitySelected {
            city: "Sorriso".to_string(),
        },
        AppIntent::CultureSelected {
            culture: Culture::Algodao,
        },
        AppIntent::NextStepRequested,
    ]
}

fn pin_intents(center: Coordinate, hectares: f64) -> Vec<AppIntent> {
    vec![
        AppIntent::CaptureModeSelected {
            mode: CaptureMode::Pin,
        },
        AppIntent::MapClicked { position: center },
        AppIntent::ManualAreaEntered { hectares },
    ]
}

/// Legt über den Dialog eine Pin-Parzelle an und liefert deren ID.
fn create_pin_parcel(controller: &mut AppController, state: &mut AppState) -> u64 {
    let mut intents = vec![AppIntent::CreateDialogRequested];
    intents.extend(details_intents());
    intents.extend(pin_intents(Coordinate::new(-55.7, -12.5), 40.0));
    intents.push(AppIntent::SaveRequested);
    run(controller, state, intents);

    state
        .store
        .list()
        .last()
        .map(|parcel| parcel.id)
        .expect("Parzelle sollte gespeichert sein")
}

#[test]
fn test_save_pin_parcel_writes_tagged_payload() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let id = create_pin_parcel(&mut controller, &mut state);

    let stored = state.store.get(id).expect("Datensatz erwartet");
    assert_eq!(stored.payload.name, "Fazenda Boa Vista");
    assert_eq!(stored.payload.culture, "Algodão");
    assert_eq!(stored.payload.area, 40.0);
    assert_eq!(stored.payload.capture_mode, Some(CaptureMode::Pin));
    assert_eq!(stored.payload.center(), Coordinate::new(-55.7, -12.5));
    assert_eq!(stored.payload.geometry.vertex_count(), 65);

    assert!(!state.dialog.visible);
    assert_eq!(state.ui.notice.as_deref(), Some("Parzelle angelegt."));
}

#[test]
fn test_save_without_geometry_is_rejected_and_dialog_stays_open() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut intents = vec![AppIntent::CreateDialogRequested];
    intents.extend(details_intents());
    intents.push(AppIntent::SaveRequested);

    run(&mut controller, &mut state, intents);

    assert!(state.store.list().is_empty());
    assert!(state.dialog.visible);
    assert!(state.ui.last_error.is_some());
}

#[test]
fn test_pin_without_area_cannot_be_saved() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut intents = vec![AppIntent::CreateDialogRequested];
    intents.extend(details_intents());
    intents.push(AppIntent::CaptureModeSelected {
        mode: CaptureMode::Pin,
    });
    intents.push(AppIntent::MapClicked {
        position: Coordinate::new(-55.0, -12.0),
    });
    intents.push(AppIntent::SaveRequested);

    run(&mut controller, &mut state, intents);

    assert!(state.store.list().is_empty());
    assert!(!state.can_save());
}

#[test]
fn test_edit_reopens_in_pin_mode_and_updates_same_record() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = create_pin_parcel(&mut controller, &mut state);

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::EditDialogRequested { parcel_id: id }],
    );
    assert!(state.dialog.is_edit_mode());
    assert_eq!(state.dialog.capture.mode(), CaptureMode::Pin);
    assert_eq!(state.dialog.details.culture, Some(Culture::Algodao));
    assert!(state.can_save());

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::NextStepRequested,
            AppIntent::ManualAreaEntered { hectares: 55.5 },
            AppIntent::SaveRequested,
        ],
    );

    assert_eq!(state.store.list().len(), 1);
    let stored = state.store.get(id).expect("Datensatz erwartet");
    assert_eq!(stored.payload.area, 55.5);
    assert_eq!(stored.payload.center(), Coordinate::new(-55.7, -12.5));
    assert_eq!(state.ui.notice.as_deref(), Some("Parzelle aktualisiert."));
}

#[test]
fn test_edit_untagged_circle_is_classified_as_pin() {
    let center = Coordinate::new(-48.3, -21.1);
    let circle = circle_from_area_hectares(center, 12.0, 64).expect("Kreis erwartet");
    let mut store = InMemoryParcelStore::new();
    let legacy = store
        .create(ParcelPayload {
            lead_id: 9,
            name: "Altbestand".to_string(),
            city: "Jaboticabal".to_string(),
            culture: "Milho".to_string(),
            obs: None,
            area: 12.0,
            geometry: circle,
            lat: center.lat,
            lng: center.lng,
            capture_mode: None,
        })
        .expect("Anlegen erwartet");

    let mut controller = AppController::new();
    let mut state = AppState::with_store(Box::new(store));
    run(
        &mut controller,
        &mut state,
        vec![AppIntent::EditDialogRequested {
            parcel_id: legacy.id,
        }],
    );

    assert_eq!(state.dialog.capture.mode(), CaptureMode::Pin);
    assert_eq!(state.dialog.capture.state().center, Some(center));
    assert_eq!(state.dialog.capture.state().area_hectares, Some(12.0));
}

#[test]
fn test_edit_unknown_parcel_is_host_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(&mut state, AppIntent::EditDialogRequested { parcel_id: 404 });

    assert!(result.is_err());
    assert!(!state.dialog.visible);
}

#[test]
fn test_store_failure_keeps_dialog_and_inputs() {
    let mut controller = AppController::new();
    let mut state = AppState::with_store(Box::new(UnreachableStore));
    let mut intents = vec![AppIntent::CreateDialogRequested];
    intents.extend(details_intents());
    intents.extend(pin_intents(Coordinate::new(-55.7, -12.5), 8.0));
    run(&mut controller, &mut state, intents);

    let result = controller.handle_intent(&mut state, AppIntent::SaveRequested);

    assert!(result.is_err());
    assert!(state.dialog.visible);
    assert!(state.can_save());
    assert_eq!(state.dialog.capture.state().area_hectares, Some(8.0));
    assert!(state.ui.last_error.is_some());
}
