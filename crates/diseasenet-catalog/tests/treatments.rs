use diseasenet_catalog::error::CatalogError;
use diseasenet_catalog::treatments::{STANDARD_TREATMENTS, TreatmentCatalog};
use diseasenet_core::models::prediction::FALLBACK_TREATMENT;

#[test]
fn standard_catalog_covers_every_listed_disease() {
    let catalog = TreatmentCatalog::standard();
    assert_eq!(catalog.len(), STANDARD_TREATMENTS.len());
    assert_eq!(catalog.len(), 41);
    for (label, treatments) in STANDARD_TREATMENTS {
        let found = catalog.lookup(label);
        assert_eq!(found.iter().collect::<Vec<_>>(), treatments.to_vec());
    }
}

#[test]
fn known_disease_returns_catalogued_order() {
    let catalog = TreatmentCatalog::standard();
    let found = catalog.lookup("Fungal infection");
    assert_eq!(
        found.as_slice(),
        &["Clotrimazole", "Fluconazole", "Ketoconazole"]
    );
    assert_eq!(
        catalog.lookup("Tuberculosis").as_slice(),
        &["Isoniazid", "Rifampicin", "Pyrazinamide", "Ethambutol"]
    );
}

#[test]
fn treatment_strings_are_kept_verbatim() {
    let catalog = TreatmentCatalog::standard();
    let found = catalog.lookup("Paralysis (brain hemorrhage)");
    assert_eq!(found.as_slice()[1], "Aspirin (if ischemic)");
    assert!(catalog.contains("(vertigo) Paroymsal  Positional Vertigo"));
    assert!(catalog.contains("Peptic ulcer diseae"));
}

#[test]
fn unknown_disease_returns_fallback() {
    let catalog = TreatmentCatalog::standard();
    for label in ["Unknown Disease XYZ", "", "fungal infection", "Hepatitis A"] {
        let found = catalog.lookup(label);
        assert_eq!(found.as_slice(), &[FALLBACK_TREATMENT]);
        assert!(found.is_fallback());
    }
}

#[test]
fn custom_catalog_rejects_duplicates_and_empty_lists() {
    let err = TreatmentCatalog::new([("Flu", vec!["Rest"]), ("Flu", vec!["Fluids"])]).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateDisease(label) if label == "Flu"));

    let err = TreatmentCatalog::new([("Flu", Vec::<&str>::new())]).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyTreatments(label) if label == "Flu"));
}

#[test]
fn diseases_are_listed_in_insertion_order() {
    let catalog =
        TreatmentCatalog::new([("B", vec!["one"]), ("A", vec!["two", "three"])]).unwrap();
    assert_eq!(catalog.diseases().collect::<Vec<_>>(), vec!["B", "A"]);
}
