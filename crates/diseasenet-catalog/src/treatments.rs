use std::collections::HashMap;

use diseasenet_core::models::prediction::TreatmentRecommendation;

use crate::error::CatalogError;

/// Disease label → recommended treatments, as shipped with the bundled
/// model. Labels must match the model's class labels exactly, spelling
/// included.
pub const STANDARD_TREATMENTS: &[(&str, &[&str])] = &[
    ("Fungal infection", &["Clotrimazole", "Fluconazole", "Ketoconazole"]),
    ("Allergy", &["Cetirizine", "Loratadine", "Fexofenadine"]),
    ("GERD", &["Omeprazole", "Ranitidine", "Esomeprazole"]),
    ("Chronic cholestasis", &["Ursodiol", "Cholestyramine"]),
    ("Drug Reaction", &["Diphenhydramine", "Prednisone", "Epinephrine (in severe cases)"]),
    ("Peptic ulcer diseae", &["Pantoprazole", "Amoxicillin", "Clarithromycin"]),
    ("AIDS", &["Zidovudine", "Lamivudine", "Efavirenz"]),
    ("Diabetes", &["Metformin", "Insulin", "Glipizide"]),
    ("Gastroenteritis", &["Oral Rehydration Salts", "Loperamide", "Zinc sulfate"]),
    ("Bronchial Asthma", &["Albuterol", "Fluticasone", "Montelukast"]),
    ("Hypertension", &["Amlodipine", "Losartan", "Hydrochlorothiazide"]),
    ("Migraine", &["Sumatriptan", "Ibuprofen", "Propranolol"]),
    ("Cervical spondylosis", &["Ibuprofen", "Cyclobenzaprine", "Physiotherapy"]),
    (
        "Paralysis (brain hemorrhage)",
        &[
            "Rehabilitation Therapy",
            "Aspirin (if ischemic)",
            "Atorvastatin",
        ],
    ),
    ("Jaundice", &["Lactulose", "Cholestyramine", "Rest and hydration"]),
    ("Malaria", &["Artemether-lumefantrine", "Chloroquine", "Primaquine"]),
    ("Chicken pox", &["Acyclovir", "Calamine lotion", "Paracetamol"]),
    ("Dengue", &["Paracetamol", "ORS", "Platelet transfusion if needed"]),
    ("Typhoid", &["Cefixime", "Azithromycin", "Ciprofloxacin"]),
    ("hepatitis A", &["Rest", "ORS", "Vitamin supplements"]),
    ("Hepatitis B", &["Entecavir", "Tenofovir", "Interferon alfa-2b"]),
    ("Hepatitis C", &["Sofosbuvir", "Velpatasvir"]),
    ("Hepatitis D", &["Pegylated interferon alfa", "Supportive care"]),
    ("Hepatitis E", &["Rest", "Hydration", "Avoid hepatotoxic drugs"]),
    ("Alcoholic hepatitis", &["Prednisolone", "Pentoxifylline", "Abstinence from alcohol"]),
    ("Tuberculosis", &["Isoniazid", "Rifampicin", "Pyrazinamide", "Ethambutol"]),
    ("Common Cold", &["Paracetamol", "Antihistamines", "Decongestants"]),
    ("Pneumonia", &["Amoxicillin-clavulanate", "Azithromycin", "Ceftriaxone"]),
    (
        "Dimorphic hemmorhoids(piles)",
        &[
            "Diosmin",
            "Lidocaine cream",
            "Hydrocortisone suppositories",
        ],
    ),
    ("Heart attack", &["Aspirin", "Clopidogrel", "Nitroglycerin", "Atorvastatin"]),
    ("Varicose veins", &["Compression stockings", "Diosmin", "Surgical intervention (if severe)"]),
    ("Hypothyroidism", &["Levothyroxine"]),
    ("Hyperthyroidism", &["Methimazole", "Propylthiouracil", "Beta-blockers"]),
    ("Hypoglycemia", &["Glucose tablets", "Glucagon injection", "Juice/sugar"]),
    ("Osteoarthristis", &["Paracetamol", "Diclofenac", "Glucosamine"]),
    ("Arthritis", &["Ibuprofen", "Methotrexate", "Sulfasalazine"]),
    ("(vertigo) Paroymsal  Positional Vertigo", &["Betahistine", "Meclizine", "Epley maneuver"]),
    ("Acne", &["Benzoyl peroxide", "Clindamycin", "Isotretinoin"]),
    (
        "Urinary tract infection",
        &[
            "Nitrofurantoin",
            "Ciprofloxacin",
            "Trimethoprim-sulfamethoxazole",
        ],
    ),
    ("Psoriasis", &["Topical corticosteroids", "Methotrexate", "Phototherapy"]),
    ("Impetigo", &["Mupirocin ointment", "Cephalexin", "Clindamycin"]),
];

/// Immutable disease → treatment table with a fixed fallback for
/// unmapped diseases.
#[derive(Debug, Clone, Default)]
pub struct TreatmentCatalog {
    entries: Vec<(String, TreatmentRecommendation)>,
    by_label: HashMap<String, usize>,
}

impl TreatmentCatalog {
    /// Build a catalog from `(disease, treatments)` pairs.
    ///
    /// Fails on a repeated disease label or an empty treatment list.
    pub fn new<L, T, I>(entries: impl IntoIterator<Item = (L, I)>) -> Result<Self, CatalogError>
    where
        L: Into<String>,
        T: Into<String>,
        I: IntoIterator<Item = T>,
    {
        let mut catalog = Self::default();
        for (label, treatments) in entries {
            let label = label.into();
            let treatments = TreatmentRecommendation::new(treatments);
            if treatments.is_empty() {
                return Err(CatalogError::EmptyTreatments(label));
            }
            if catalog.by_label.contains_key(&label) {
                return Err(CatalogError::DuplicateDisease(label));
            }
            catalog.by_label.insert(label.clone(), catalog.entries.len());
            catalog.entries.push((label, treatments));
        }
        Ok(catalog)
    }

    /// The built-in catalog over [`STANDARD_TREATMENTS`].
    ///
    /// # Panics
    ///
    /// Panics if the built-in table repeats a disease or has an empty
    /// treatment list.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_TREATMENTS
                .iter()
                .map(|(label, treatments)| (*label, treatments.iter().copied())),
        )
        .unwrap_or_else(|e| panic!("built-in treatment catalog is invalid: {e}"))
    }

    /// Treatments for `disease_label`, or the single-entry fallback when
    /// the disease is not catalogued.
    pub fn lookup(&self, disease_label: &str) -> TreatmentRecommendation {
        self.get(disease_label)
            .cloned()
            .unwrap_or_else(TreatmentRecommendation::fallback)
    }

    pub fn get(&self, disease_label: &str) -> Option<&TreatmentRecommendation> {
        self.by_label
            .get(disease_label)
            .map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, disease_label: &str) -> bool {
        self.by_label.contains_key(disease_label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Catalogued disease labels, in insertion order.
    pub fn diseases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }
}
