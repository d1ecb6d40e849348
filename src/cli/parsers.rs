// src/cli/parsers.rs
use checkpoints_domain::model::Animal;

pub(crate) fn parse_animal(s: &str) -> Result<Animal, String> {
    s.parse::<Animal>().map_err(|e| {
        let known: Vec<_> = Animal::all().iter().map(Animal::name).collect();
        format!("{e}; expected one of: {}", known.join(", "))
    })
}
