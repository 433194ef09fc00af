// Pet API response types.
// Defines structs for serializing and deserializing pet records.

use serde::{Deserialize, Serialize};

/// Adoption marker. The wire format is a string: `"Yes"` means adopted,
/// anything else means the pet is still available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AdoptionStatus {
    Yes,
    #[default]
    #[serde(other)]
    No,
}

impl AdoptionStatus {
    pub fn is_adopted(self) -> bool {
        matches!(self, AdoptionStatus::Yes)
    }

    /// Display label for the status badge.
    pub fn label(self) -> &'static str {
        match self {
            AdoptionStatus::Yes => "Adopted",
            AdoptionStatus::No => "Available",
        }
    }
}

/// A pet record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub species: String,
    pub image: String,
    #[serde(default)]
    pub adopted: AdoptionStatus,
}

/// Payload for creating a pet. Ids are assigned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPet {
    pub name: String,
    #[serde(rename = "type")]
    pub species: String,
    pub image: String,
    pub adopted: AdoptionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_pet_with_type_field() {
        let json = r#"{
            "id": 3,
            "name": "Luna",
            "type": "Cat",
            "image": "https://example.com/luna.png",
            "adopted": "Yes"
        }"#;

        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.id, 3);
        assert_eq!(pet.name, "Luna");
        assert_eq!(pet.species, "Cat");
        assert!(pet.adopted.is_adopted());
    }

    #[test]
    fn adopted_marker_is_yes_or_anything_else() {
        let adopted: AdoptionStatus = serde_json::from_str(r#""Yes""#).unwrap();
        assert_eq!(adopted, AdoptionStatus::Yes);

        let no: AdoptionStatus = serde_json::from_str(r#""No""#).unwrap();
        assert_eq!(no, AdoptionStatus::No);

        // Any non-"Yes" value means available.
        let weird: AdoptionStatus = serde_json::from_str(r#""maybe""#).unwrap();
        assert_eq!(weird, AdoptionStatus::No);
    }

    #[test]
    fn adopted_defaults_to_available_when_missing() {
        let json = r#"{"id": 1, "name": "Rex", "type": "Dog", "image": ""}"#;
        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.adopted, AdoptionStatus::No);
    }

    #[test]
    fn serialize_new_pet_uses_wire_names() {
        let new_pet = NewPet {
            name: "Rex".to_string(),
            species: "Dog".to_string(),
            image: "https://example.com/rex.png".to_string(),
            adopted: AdoptionStatus::No,
        };

        let json = serde_json::to_value(&new_pet).unwrap();
        assert_eq!(json["type"], "Dog");
        assert_eq!(json["adopted"], "No");
        assert!(json.get("id").is_none());
    }
}
