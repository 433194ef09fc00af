// Pet API endpoint functions.
// Provides typed methods for fetching and mutating pet records.

use crate::error::{PetshelfError, Result};

use super::client::PetApiClient;
use super::types::{NewPet, Pet};

impl PetApiClient {
    /// Get the full pet collection.
    pub async fn get_all_pets(&self) -> Result<Vec<Pet>> {
        let response = self.get("/pets").await?;
        let pets: Vec<Pet> = response.json().await?;
        Ok(pets)
    }

    /// Get a single pet by id. A missing record resolves to None rather
    /// than an error.
    pub async fn get_pet(&self, id: u64) -> Result<Option<Pet>> {
        match self.get(&format!("/pets/{}", id)).await {
            Ok(response) => {
                let pet: Pet = response.json().await?;
                Ok(Some(pet))
            }
            Err(PetshelfError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Create a pet. The service assigns the id and returns the record.
    pub async fn create_pet(&self, new_pet: &NewPet) -> Result<Pet> {
        let response = self.post("/pets", new_pet).await?;
        let pet: Pet = response.json().await?;
        Ok(pet)
    }

    /// Delete a pet by id.
    pub async fn delete_pet(&self, id: u64) -> Result<()> {
        self.delete(&format!("/pets/{}", id)).await?;
        Ok(())
    }
}
