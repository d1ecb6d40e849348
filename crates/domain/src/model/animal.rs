// crates/domain/src/model/animal.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use checkpoints_shared_kernel::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DogBreed {
    Generic,
    Corgi,
    Poodle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatBreed {
    Generic,
    Persian,
    Lion,
}

/// Closed set of animals; behaviour is dispatched on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Animal {
    Dog { breed: DogBreed },
    Cat { breed: CatBreed, tame: bool },
}

impl Animal {
    pub const fn dog(breed: DogBreed) -> Self {
        Self::Dog { breed }
    }

    pub const fn cat(breed: CatBreed, tame: bool) -> Self {
        Self::Cat { breed, tame }
    }

    /// One of each breed; lions are the only untamed cats.
    pub const fn all() -> [Self; 6] {
        [
            Self::dog(DogBreed::Generic),
            Self::dog(DogBreed::Corgi),
            Self::dog(DogBreed::Poodle),
            Self::cat(CatBreed::Generic, true),
            Self::cat(CatBreed::Persian, true),
            Self::cat(CatBreed::Lion, false),
        ]
    }

    pub const fn legs(&self) -> u32 {
        4
    }

    pub const fn speak(&self) -> &'static str {
        match self {
            Self::Dog { breed: DogBreed::Generic } => "Bark!",
            Self::Dog { breed: DogBreed::Corgi } => "Yip yip! 🍑",
            Self::Dog { breed: DogBreed::Poodle } => "Yip! 🐩",
            Self::Cat { breed: CatBreed::Generic, .. } => "Meow!",
            Self::Cat { breed: CatBreed::Persian, .. } => "Maow :3",
            Self::Cat { breed: CatBreed::Lion, .. } => "Roar! 🦁",
        }
    }

    /// Only cats track tameness.
    pub const fn is_tame(&self) -> Option<bool> {
        match self {
            Self::Dog { .. } => None,
            Self::Cat { tame, .. } => Some(*tame),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Dog { breed: DogBreed::Generic } => "dog",
            Self::Dog { breed: DogBreed::Corgi } => "corgi",
            Self::Dog { breed: DogBreed::Poodle } => "poodle",
            Self::Cat { breed: CatBreed::Generic, .. } => "cat",
            Self::Cat { breed: CatBreed::Persian, .. } => "persian",
            Self::Cat { breed: CatBreed::Lion, .. } => "lion",
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Animal {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|animal| animal.name() == wanted)
            .ok_or(DomainError::UnknownAnimal { name: s.to_string() })
    }
}
