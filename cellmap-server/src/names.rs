//! Random document name generation.
//!
//! Names are ASCII letters only so they stay compatible with the
//! `/{name}` route and read well in shared URLs.

use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "Amber", "Bold", "Brisk", "Calm", "Clever", "Coral", "Crimson", "Dapper", "Eager", "Fleet",
    "Gentle", "Golden", "Hazel", "Ivory", "Jolly", "Keen", "Lively", "Lucid", "Mellow", "Nimble",
    "Olive", "Placid", "Quiet", "Rapid", "Rustic", "Silent", "Sly", "Swift", "Tidal", "Vivid",
];

const ANIMALS: &[&str] = &[
    "Albatross", "Badger", "Bison", "Condor", "Cormorant", "Crane", "Dolphin", "Egret", "Falcon",
    "Gannet", "Heron", "Ibis", "Jackdaw", "Kestrel", "Lemur", "Marten", "Narwhal", "Osprey",
    "Otter", "Pelican", "Petrel", "Plover", "Puffin", "Quail", "Raven", "Sandpiper", "Skua",
    "Tern", "Vole", "Wren",
];

/// Generate a random CamelCase adjective-animal name.
pub fn random_name() -> String {
    let mut rng = rand::thread_rng();
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let animal = ANIMALS[rng.gen_range(0..ANIMALS.len())];
    format!("{adjective}{animal}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_letters_only() {
        for _ in 0..100 {
            let name = random_name();
            assert!(!name.is_empty());
            assert!(name.chars().all(|c| c.is_ascii_alphabetic()), "{name}");
        }
    }

    #[test]
    fn test_names_vary() {
        let names: std::collections::HashSet<String> =
            (0..50).map(|_| random_name()).collect();
        assert!(names.len() > 1);
    }
}
