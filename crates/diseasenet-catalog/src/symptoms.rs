use std::collections::HashMap;

use diseasenet_core::models::symptoms::{FeatureVector, SymptomSelection, display_label};
use serde::Serialize;
use tracing::debug;

use crate::error::CatalogError;

/// Symptom identifiers known to the bundled model, in feature order.
pub const STANDARD_SYMPTOMS: &[&str] = &[
    "itching", "skin_rash", "nodal_skin_eruptions", "continuous_sneezing", "shivering",
    "chills", "joint_pain", "stomach_pain", "acidity", "ulcers_on_tongue", "muscle_wasting",
    "vomiting", "burning_micturition", "spotting_urination", "fatigue", "weight_gain",
    "anxiety", "cold_hands_and_feets", "mood_swings", "weight_loss", "restlessness",
    "lethargy", "patches_in_throat", "irregular_sugar_level", "cough", "high_fever",
    "sunken_eyes", "breathlessness", "sweating", "dehydration", "indigestion", "headache",
    "yellowish_skin", "dark_urine", "nausea", "loss_of_appetite", "pain_behind_the_eyes",
    "back_pain", "constipation", "abdominal_pain", "diarrhoea", "mild_fever", "yellow_urine",
    "yellowing_of_eyes", "acute_liver_failure", "fluid_overload", "swelling_of_stomach",
    "swelled_lymph_nodes", "malaise", "blurred_and_distorted_vision", "phlegm",
    "throat_irritation", "redness_of_eyes", "sinus_pressure", "runny_nose", "congestion",
    "chest_pain", "weakness_in_limbs", "fast_heart_rate", "pain_during_bowel_movements",
    "pain_in_anal_region", "bloody_stool", "irritation_in_anus", "neck_pain", "dizziness",
    "cramps", "bruising", "obesity", "swollen_legs", "swollen_blood_vessels",
    "puffy_face_and_eyes", "enlarged_thyroid", "brittle_nails", "swollen_extremeties",
    "excessive_hunger", "extra_marital_contacts", "drying_and_tingling_lips", "slurred_speech",
    "knee_pain", "hip_joint_pain", "muscle_weakness", "stiff_neck", "swelling_joints",
    "movement_stiffness", "spinning_movements", "loss_of_balance", "unsteadiness",
    "weakness_of_one_body_side", "loss_of_smell", "bladder_discomfort", "foul_smell_of_urine",
    "continuous_feel_of_urine", "passage_of_gases", "internal_itching", "toxic_look_(typhos)",
    "depression", "irritability", "muscle_pain", "altered_sensorium", "red_spots_over_body",
    "belly_pain", "abnormal_menstruation", "dischromic_patches", "watering_from_eyes",
    "increased_appetite", "polyuria", "family_history", "mucoid_sputum", "rusty_sputum",
    "lack_of_concentration", "visual_disturbances", "receiving_blood_transfusion",
    "receiving_unsterile_injections", "coma", "stomach_bleeding", "distention_of_abdomen",
    "history_of_alcohol_consumption", "blood_in_sputum", "prominent_veins_on_calf",
    "palpitations", "painful_walking", "pus_filled_pimples", "blackheads", "scurring",
    "skin_peeling", "silver_like_dusting", "small_dents_in_nails", "inflammatory_nails",
    "blister", "red_sore_around_nose", "yellow_crust_ooze",
];

/// The ordered, duplicate-free list of symptom identifiers that defines
/// feature-vector positions.
#[derive(Debug, Clone)]
pub struct SymptomIndex {
    ids: Vec<String>,
    positions: HashMap<String, usize>,
}

/// A symptom identifier paired with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomEntry {
    pub id: String,
    pub label: String,
}

impl SymptomIndex {
    /// Build an index from identifiers in feature order.
    ///
    /// Fails on duplicate or empty identifiers.
    pub fn new<S: Into<String>>(ids: impl IntoIterator<Item = S>) -> Result<Self, CatalogError> {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let mut positions = HashMap::with_capacity(ids.len());
        for (position, id) in ids.iter().enumerate() {
            if id.is_empty() {
                return Err(CatalogError::EmptySymptom { position });
            }
            if positions.insert(id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateSymptom(id.clone()));
            }
        }
        Ok(Self { ids, positions })
    }

    /// The built-in index over [`STANDARD_SYMPTOMS`].
    ///
    /// # Panics
    ///
    /// Panics if the built-in list contains a duplicate or empty
    /// identifier, which is a bug in the list itself.
    pub fn standard() -> Self {
        Self::new(STANDARD_SYMPTOMS.iter().copied())
            .unwrap_or_else(|e| panic!("built-in symptom list is invalid: {e}"))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Identifiers paired with display labels, in index order.
    pub fn entries(&self) -> Vec<SymptomEntry> {
        self.ids
            .iter()
            .map(|id| SymptomEntry {
                id: id.clone(),
                label: display_label(id),
            })
            .collect()
    }

    /// Encode a selection as a binary vector of exactly `self.len()`
    /// positions. Identifiers missing from the index are skipped.
    pub fn encode(&self, selection: &SymptomSelection) -> FeatureVector {
        let positions: Vec<usize> = selection.iter().filter_map(|id| self.position(id)).collect();

        let unknown = selection.len() - positions.len();
        if unknown > 0 {
            debug!(unknown, selected = selection.len(), "ignoring unknown symptom identifiers");
        }

        FeatureVector::with_positions(self.len(), positions)
    }

    /// Selected identifiers that the index does not know.
    pub fn unknown<'a>(&self, selection: &'a SymptomSelection) -> Vec<&'a str> {
        selection.iter().filter(|id| !self.contains(id)).collect()
    }
}
