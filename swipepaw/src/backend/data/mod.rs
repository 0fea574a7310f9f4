//! Static candidate dataset for the demo.
//!
//! In a real deployment this would come from a backend API; here the full
//! ordered list is supplied at session start and never paginated.

use shared::{Pet, PetFact};

fn fact(label: &str, value: &str) -> PetFact {
    PetFact {
        label: label.to_string(),
        value: value.to_string(),
    }
}

/// The ordered candidate list a swipe session iterates
pub fn sample_pets() -> Vec<Pet> {
    vec![
        Pet {
            id: "1".to_string(),
            name: "Luna".to_string(),
            age: "2 years".to_string(),
            species: "Dog".to_string(),
            breed: Some("Golden Retriever".to_string()),
            description: "Playful Golden Retriever who loves cuddles and long walks on the beach. Great with kids and other pets!".to_string(),
            photos: vec![
                "https://images.unsplash.com/photo-1552053831-71594a27632d?q=80&w=662&auto=format&fit=crop".to_string(),
            ],
            is_shelter: true,
            shelter_name: Some("Happy Paws Shelter".to_string()),
            shelter_verified: true,
            facts: vec![
                fact("Temperament", "Friendly"),
                fact("Energy", "High"),
                fact("Good with", "Dogs, Kids"),
            ],
        },
        Pet {
            id: "2".to_string(),
            name: "Max".to_string(),
            age: "1 year".to_string(),
            species: "Dog".to_string(),
            breed: Some("Husky Mix".to_string()),
            description: "Energetic Husky mix looking for an active family. Loves running and adventure!".to_string(),
            photos: vec![
                "https://images.unsplash.com/photo-1605568427561-40dd23c2acea?q=80&w=1974&auto=format&fit=crop".to_string(),
            ],
            is_shelter: false,
            shelter_name: None,
            shelter_verified: false,
            facts: vec![
                fact("Temperament", "Playful"),
                fact("Energy", "High"),
                fact("Needs", "Active Home"),
            ],
        },
        Pet {
            id: "3".to_string(),
            name: "Whiskers".to_string(),
            age: "3 years".to_string(),
            species: "Cat".to_string(),
            breed: Some("Persian".to_string()),
            description: "Gentle Persian cat who enjoys peaceful afternoons and window watching.".to_string(),
            photos: vec![
                "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?q=80&w=2043&auto=format&fit=crop".to_string(),
            ],
            is_shelter: true,
            shelter_name: Some("Feline Friends Rescue".to_string()),
            shelter_verified: true,
            facts: vec![
                fact("Temperament", "Calm"),
                fact("Energy", "Low"),
                fact("Needs", "Quiet Home"),
            ],
        },
        Pet {
            id: "4".to_string(),
            name: "Rocky".to_string(),
            age: "4 years".to_string(),
            species: "Dog".to_string(),
            breed: Some("German Shepherd".to_string()),
            description: "Loyal German Shepherd with excellent training. Perfect for security-minded families.".to_string(),
            photos: vec![
                "https://images.unsplash.com/photo-1589941013453-ec89f33b5e95?q=80&w=2940&auto=format&fit=crop".to_string(),
            ],
            is_shelter: true,
            shelter_name: Some("Guardian Dog Shelter".to_string()),
            shelter_verified: false,
            facts: vec![
                fact("Temperament", "Loyal"),
                fact("Energy", "Medium"),
                fact("Good with", "Adults"),
            ],
        },
        Pet {
            id: "5".to_string(),
            name: "Oreo".to_string(),
            age: "6 months".to_string(),
            species: "Cat".to_string(),
            breed: Some("Tuxedo".to_string()),
            description: "Playful tuxedo kitten full of energy and curiosity. Loves laser pointers!".to_string(),
            photos: vec![
                "https://images.unsplash.com/photo-1638667168629-58c2516fbd22?q=80&w=2940&auto=format&fit=crop".to_string(),
            ],
            is_shelter: false,
            shelter_name: None,
            shelter_verified: false,
            facts: vec![
                fact("Temperament", "Curious"),
                fact("Energy", "High"),
                fact("Good with", "All Ages"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pet_ids_are_unique() {
        let pets = sample_pets();
        let ids: HashSet<&str> = pets.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), pets.len());
    }

    #[test]
    fn test_every_pet_has_a_photo() {
        for pet in sample_pets() {
            assert!(!pet.photos.is_empty(), "pet {} has no photos", pet.id);
        }
    }

    #[test]
    fn test_shelter_pets_name_their_shelter() {
        for pet in sample_pets() {
            if pet.is_shelter {
                assert!(pet.shelter_name.is_some(), "shelter pet {} unnamed", pet.id);
            } else {
                assert!(pet.shelter_name.is_none());
            }
        }
    }
}
